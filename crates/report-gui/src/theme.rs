//! Theme and styling constants

use egui::Color32;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Palette resolved for the active light/dark mode, for colors not covered
/// by egui's visuals.
pub struct ThemeColors {
    pub bg_secondary: Color32,
    pub border: Color32,
    pub accent: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
}

/// Resolve the palette for the given mode.
pub fn colors(dark_mode: bool) -> ThemeColors {
    if dark_mode {
        ThemeColors {
            bg_secondary: Color32::from_gray(32),
            border: Color32::from_gray(60),
            accent: Color32::from_rgb(10, 132, 255),
            text_primary: Color32::from_gray(235),
            text_muted: Color32::from_gray(140),
            success: Color32::from_rgb(34, 197, 94),
            warning: Color32::from_rgb(245, 158, 11),
            error: Color32::from_rgb(239, 68, 68),
        }
    } else {
        ThemeColors {
            bg_secondary: Color32::from_gray(243),
            border: Color32::from_gray(210),
            accent: Color32::from_rgb(0, 122, 255),
            text_primary: Color32::from_gray(25),
            text_muted: Color32::from_gray(110),
            success: Color32::from_rgb(22, 163, 74),
            warning: Color32::from_rgb(217, 119, 6),
            error: Color32::from_rgb(220, 38, 38),
        }
    }
}
