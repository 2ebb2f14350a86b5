// src/gui/components/tabs.rs
//
// Top tabs. Switching only changes the active index; the next frame's load
// pass picks up the page's cached table or fetches it.

use eframe::egui;
use tracing::info;

use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, page.title()).clicked() && !selected {
                info!("UI: Tab switch {} → {}", app.current_page().kind(), page.kind());
                app.set_current_index(idx);
            }
        }
    });
}
