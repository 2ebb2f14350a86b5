// src/gui/pages/series.rs
use eframe::egui;

use crate::{config::consts::SERIES_TYPES, config::state::AppState, query::ResourceKind};

pub struct SeriesPage;
pub static PAGE: SeriesPage = SeriesPage;

impl super::Page for SeriesPage {
    fn title(&self) -> &'static str { "Series List" }
    fn kind(&self) -> ResourceKind { ResourceKind::SeriesCatalog }

    fn heading(&self, state: &AppState) -> String {
        format!("All Series List - {}", state.series.series_type)
    }

    fn draw_filters(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.heading("Series List parameters");
        super::plain_choice(ui, "Series type", &mut state.series.series_type, &SERIES_TYPES)
    }

    fn error_text(&self) -> &'static str {
        "Could not load the series list. Refresh or pick other options."
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[90.0, 360.0, 140.0])
    }
}
