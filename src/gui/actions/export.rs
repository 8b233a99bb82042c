// src/gui/actions/export.rs
use crate::{gui::app::App, session::SessionError};

pub fn export(app: &mut App) {
    // directory field → options before any session borrows
    app.state.options.export.set_out_dir(&app.state.gui.out_dir_text);

    let msg = match app.session.export(&app.state.gui.filename_text, &app.state.options.export) {
        Ok(path) => {
            logf!("Export: OK rows={} → {}", app.session.table().nrows(), path.display());
            format!("Exported {}", path.display())
        }
        Err(SessionError::NothingToExport) => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(msg);
}
