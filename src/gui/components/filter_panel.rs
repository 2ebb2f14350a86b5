// src/gui/components/filter_panel.rs
use eframe::egui;
use tracing::info;

use crate::gui::app::App;

/// Left panel: the active page's filter selectors.
pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    ui.add_space(4.0);
    if page.draw_filters(ui, &mut app.state) {
        info!("UI: {} filters → {}", page.kind(), app.state.query_for(page.kind()));
    }
}
