//! Settings types and configuration for Daily Report Studio.
//!
//! This module defines all user-configurable settings:
//! - General preferences (dark mode, startup behavior)
//! - Display settings (rail panel, grid striping)

mod persistence;
pub mod ui;

pub use persistence::{load_settings, save_settings, settings_path};

use serde::{Deserialize, Serialize};

/// Application settings (persisted to disk as TOML).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub display: DisplaySettings,
}

/// General application preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable dark mode theme.
    pub dark_mode: bool,
    /// Populate the form from the saved report slot at launch.
    pub load_on_startup: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            load_on_startup: true,
        }
    }
}

/// Display preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Show the read-only rail panel beside the grid.
    pub show_rail: bool,
    /// Stripe alternating grid rows.
    pub striped_rows: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_rail: true,
            striped_rows: true,
        }
    }
}
