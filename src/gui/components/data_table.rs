// src/gui/components/data_table.rs
//
// Draws the results table straight from the session's TableData.
// Link columns render as hyperlinks; missing fields are empty cells.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

const WIDTHS: [f32; 6] = [220.0, 50.0, 70.0, 130.0, 220.0, 260.0];
const LINK_COLS: [usize; 2] = [4, 5];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = app.session.table();
    let Some(headers) = table.headers.as_ref() else {
        ui.label("No results yet.");
        return;
    };
    let cols = table.ncols();

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0);
    for ci in 0..cols {
        let w = WIDTHS.get(ci).copied().unwrap_or(80.0);
        builder = builder.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    builder
        .header(24.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.label(RichText::new(h).strong());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.nrows(), |mut row| {
                let Some(data) = table.rows.get(row.index()) else { return };
                for (ci, cell) in data.iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        if LINK_COLS.contains(&ci) && !cell.is_empty() {
                            ui.hyperlink_to(cell, cell);
                        } else {
                            ui.label(cell);
                        }
                    });
                }
            });
        });
}
