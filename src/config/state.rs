// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Address of the page we scrape ("active tab")
    pub page_url_text: String,

    /// Raw filename input; sanitized on export
    pub filename_text: String,

    pub out_dir_text: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            page_url_text: s!(),
            filename_text: s!(),
            out_dir_text: s!(crate::config::consts::DEFAULT_OUT_DIR),
            window_w: 1100,
            window_h: 700,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
