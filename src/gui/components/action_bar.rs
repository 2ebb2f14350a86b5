// src/gui/components/action_bar.rs

use eframe::egui;

use crate::{gui::app::App, session::SlotStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarAction {
    None,
    Copy,
    Refresh,
}

/// Copy / Refresh buttons, header toggle, cache age and the status line.
/// Returns what was clicked; the caller acts once the table is at hand.
pub fn draw(ui: &mut egui::Ui, app: &mut App) -> BarAction {
    let mut action = BarAction::None;
    ui.horizontal(|ui| {
        if ui.button("Copy").on_hover_text("Copy selected rows (or the whole table) as TSV").clicked() {
            action = BarAction::Copy;
        }
        if ui.button("Refresh").on_hover_text("Drop cached data and fetch again").clicked() {
            action = BarAction::Refresh;
        }
        ui.checkbox(&mut app.state.gui.copy_headers, "Include headers");
        if let SlotStatus::Populated { rows, age } = app.loader.status(app.current_page().kind()) {
            ui.separator();
            ui.weak(format!("{rows} rows cached {}s ago", age.as_secs()));
        }
        ui.separator();
        ui.label(app.status_text());
    });
    action
}
