// src/gui/components/action_bar.rs

use eframe::egui;

use crate::{config::consts::DEFAULT_FILE_STEM, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // Off a search page: no scrape/export/filename controls at all.
    if !app.session.controls_visible() {
        let status = app.status_text();
        ui.label(format!("Status: {status}"));
        return;
    }

    // --- Scrape options ---
    {
        let scrape = &mut app.state.options.scrape;
        ui.horizontal(|ui| {
            ui.label("Delay (ms):");
            if ui.add(egui::DragValue::new(&mut scrape.delay_ms).range(250..=10_000).speed(50)).changed() {
                logf!("UI: delay_ms → {}", scrape.delay_ms);
            }
            ui.label("Stop after no growth ×");
            if ui.add(egui::DragValue::new(&mut scrape.stall_limit).range(1..=20)).changed() {
                logf!("UI: stall_limit → {}", scrape.stall_limit);
            }
            if ui.checkbox(&mut scrape.dedup, "Skip repeats").changed() {
                logf!("UI: dedup → {}", scrape.dedup);
            }
            let mut show = !app.state.options.browser.headless;
            if ui.checkbox(&mut show, "Show browser").changed() {
                app.state.options.browser.headless = !show;
                logf!("UI: headless → {}", !show);
            }
        });
    }

    // --- Export fields ---
    ui.horizontal(|ui| {
        ui.label("File name:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.filename_text)
                .hint_text(DEFAULT_FILE_STEM)
                .desired_width(200.0),
        );
        ui.label("Folder:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace)
                .desired_width(200.0),
        );
        ui.checkbox(&mut app.state.options.export.escape_quotes, "Escape quotes");
    });

    // --- Actions (SCRAPE / Export CSV) ---
    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(219, 68, 55);
        let scrape_btn = egui::Button::new(egui::RichText::new("SCRAPE").color(egui::Color32::WHITE).strong())
            .fill(red);
        if ui.add_enabled(app.session.can_scrape() && !app.running, scrape_btn).clicked() {
            let ctx = ui.ctx().clone();
            actions::scrape(app, &ctx);
        }

        if app.running {
            ui.add(egui::Spinner::new());
        }

        let can_export = app.session.can_export() && !app.running;
        if ui.add_enabled(can_export, egui::Button::new("Export CSV")).clicked() {
            actions::export(app);
        }

        let status = app.status_text();
        ui.label(format!("Status: {status}"));
    });
}
