// src/gui/pages/records.rs
use eframe::egui;

use crate::{config::consts::STATS_TYPES, config::state::AppState, query::ResourceKind};

pub struct RecordsPage;
pub static PAGE: RecordsPage = RecordsPage;

impl super::Page for RecordsPage {
    fn title(&self) -> &'static str { "ICC Records" }
    fn kind(&self) -> ResourceKind { ResourceKind::Records }

    fn heading(&self, state: &AppState) -> String {
        format!("ICC Records List - {}", state.records.stats_type)
    }

    /// Suggestions dropdown plus a free-text field; the text is only
    /// committed on Enter / focus loss so typing does not fetch per keystroke.
    fn draw_filters(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.heading("ICC Records parameters");
        let mut changed =
            super::plain_choice(ui, "Stats type", &mut state.records.stats_type, &STATS_TYPES);
        if changed {
            state.gui.stats_draft.clone_from(&state.records.stats_type);
        }

        ui.label("Other stats type");
        let resp = ui.text_edit_singleline(&mut state.gui.stats_draft);
        let draft = state.gui.stats_draft.trim();
        if resp.lost_focus() && !draft.is_empty() && draft != state.records.stats_type {
            state.records.stats_type = s!(draft);
            changed = true;
        }
        changed
    }

    fn error_text(&self) -> &'static str {
        "Could not load ICC records. Refresh or pick other options."
    }
}
