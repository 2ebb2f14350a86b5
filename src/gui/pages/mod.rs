// src/gui/pages/mod.rs
use eframe::egui;

use crate::{config::state::AppState, query::ResourceKind};

pub mod rankings;
pub mod records;
pub mod series;

/// One dashboard tab. Pages are stateless; filter values live in `AppState`.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> ResourceKind;

    /// Heading above the table, reflecting the current filters.
    fn heading(&self, state: &AppState) -> String;

    /// Side-panel filter selectors. Returns true if any value changed.
    fn draw_filters(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool;

    /// Shown in red when loading this page's data failed.
    fn error_text(&self) -> &'static str;

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }
}

/// Labelled dropdown over fixed `(value, label)` choices.
pub(crate) fn choice(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    choices: &[(&str, &str)],
) -> bool {
    let shown = choices
        .iter()
        .find(|(v, _)| *v == value.as_str())
        .map_or(value.as_str(), |(_, l)| *l)
        .to_owned();

    let mut changed = false;
    ui.label(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(shown)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for (v, l) in choices {
                changed |= ui.selectable_value(value, s!(*v), *l).changed();
            }
        });
    changed
}

/// Same as `choice` where each value is its own label.
pub(crate) fn plain_choice(ui: &mut egui::Ui, label: &str, value: &mut String, values: &[&str]) -> bool {
    let pairs: Vec<(&str, &str)> = values.iter().map(|v| (*v, *v)).collect();
    choice(ui, label, value, &pairs)
}
