// src/gui/components/data_table.rs
//
// Draws a normalized table. Row clicks update the selection
// (plain = single, ctrl/cmd = toggle, shift = range).

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    gui::{pages::Page, selection::{ClickMods, RowSelection}},
    table::{Cell, Table},
};

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, page: &dyn Page, table: &Table, selection: &mut RowSelection) {
    let cols = table.column_count();
    let widths: Vec<f32> = match page.preferred_column_widths() {
        Some(ws) if ws.len() == cols => ws.to_vec(),
        _ => vec![120.0; cols],
    };

    // A column is right-aligned when every non-empty cell in it is numeric.
    let numeric: Vec<bool> = (0..cols)
        .map(|ci| table.column(ci).all(|c| c.is_numeric() || matches!(c, Cell::Null)))
        .collect();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("inner_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .sense(egui::Sense::click())
                .min_scrolled_height(0.0)
                // Fresh column state per page so widths do not leak across tabs.
                .id_salt(("table_state", page.kind()));
            for w in &widths {
                builder = builder.column(Column::initial(*w).resizable(true).clip(true).at_least(20.0));
            }

            builder
                .header(24.0, |mut header| {
                    for (ci, name) in table.columns().iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = egui::Label::new(RichText::new(name).strong()).selectable(false);
                            if numeric[ci] {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| ui.add(label));
                            } else {
                                ui.add(label);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, table.row_count(), |mut row| {
                        let ix = row.index();
                        let Some(cells) = table.row(ix) else { return };
                        row.set_selected(selection.contains(ix));
                        for (ci, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                let text = cell.to_string();
                                if numeric[ci] {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| ui.label(text));
                                } else {
                                    ui.label(text);
                                }
                            });
                        }
                        if row.response().clicked() {
                            let mods = row.response().ctx.input(|i| i.modifiers);
                            selection.click(ix, ClickMods { shift: mods.shift, ctrl: mods.command });
                        }
                    });
                });
        });
}
