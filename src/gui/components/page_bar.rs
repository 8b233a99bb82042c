// src/gui/components/page_bar.rs
//
// Page address + popup message. Off a search page the message becomes a link
// to Google Maps search.

use eframe::egui;

use crate::{gui::app::App, session::PageStatus};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label("Page:");
        // locked while a scrape runs so results land on the page they came from
        let resp = ui.add_enabled(
            !app.running,
            egui::TextEdit::singleline(&mut app.state.gui.page_url_text)
                .hint_text("https://www.google.com/maps/search/…")
                .desired_width(f32::INFINITY)
                .font(egui::TextStyle::Monospace),
        );
        if resp.changed() {
            app.page_url_changed();
            logd!("UI: page url → {} (can_scrape={})", app.state.gui.page_url_text, app.session.can_scrape());
        }
    });

    match app.session.status() {
        PageStatus::Ready { message } => {
            ui.label(egui::RichText::new(message).strong());
        }
        PageStatus::WrongPage { link_url, link_text } => {
            ui.hyperlink_to(link_text, link_url);
        }
    }
    ui.add_space(4.0);
}
