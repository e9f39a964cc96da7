// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Live contents of the search box (may be ahead of the applied query)
    pub search_text: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Right-hand detail panel visible
    pub show_detail: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            search_text: s!(),
            window_w: 1100,
            window_h: 700,
            show_detail: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn with_options(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
