//! Application-level state

use super::{FormState, UiState};
use crate::settings::Settings;

/// Top-level application state
pub struct AppState {
    /// The report form being edited
    pub form: FormState,
    /// User preferences (persisted to disk)
    pub settings: Settings,
    /// Transient UI state (dialogs, notices)
    pub ui: UiState,
    /// Whether the settings window is open
    pub settings_open: bool,
    /// Working copy of the settings while the window is open
    pub settings_pending: Option<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            form: FormState::new(),
            settings,
            ui: UiState::default(),
            settings_open: false,
            settings_pending: None,
        }
    }

    /// Open the settings window on a working copy of the current settings.
    pub fn open_settings(&mut self) {
        self.settings_pending = Some(self.settings.clone());
        self.settings_open = true;
    }

    /// Close the settings window, applying or discarding the working copy.
    pub fn close_settings(&mut self, apply: bool) {
        if apply {
            if let Some(pending) = self.settings_pending.take() {
                self.settings = pending;
            }
        } else {
            self.settings_pending = None;
        }
        self.settings_open = false;
    }
}
