// src/gui/pages/rankings.rs
use eframe::egui;

use crate::{
    config::consts::{CATEGORIES, FORMAT_TYPES},
    config::state::AppState,
    query::ResourceKind,
};

pub struct RankingsPage;
pub static PAGE: RankingsPage = RankingsPage;

const GENDERS: [(&str, &str); 2] = [("0", "Men"), ("1", "Women")];

impl super::Page for RankingsPage {
    fn title(&self) -> &'static str { "ICC Rankings" }
    fn kind(&self) -> ResourceKind { ResourceKind::Rankings }

    fn heading(&self, state: &AppState) -> String {
        let f = &state.rankings;
        format!("ICC {} Ranking - {} {}", f.format_type, f.gender_label(), f.category)
    }

    fn draw_filters(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        let f = &mut state.rankings;
        ui.heading("ICC Ranking parameters");
        // No short-circuit: every selector must be drawn each frame.
        let a = super::plain_choice(ui, "Format", &mut f.format_type, &FORMAT_TYPES);
        let b = super::choice(ui, "Gender", &mut f.is_women, &GENDERS);
        let c = super::plain_choice(ui, "Category", &mut f.category, &CATEGORIES);
        a | b | c
    }

    fn error_text(&self) -> &'static str {
        "Could not load ICC rankings. Refresh or pick other options."
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[80.0, 60.0, 200.0, 140.0, 60.0, 60.0, 120.0])
    }
}
