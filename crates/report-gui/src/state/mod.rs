//! Application state management
//!
//! Contains all runtime state types for the GUI application.

mod app_state;
mod form;
mod ui_state;

pub use app_state::AppState;
pub use form::{FormState, today_string};
pub use ui_state::{ConfirmAction, Notice, NoticeKind, UiState};
