//! Theme module for the egui front-end
//!
//! Defines the MyPumpTheme structure and conversions from the model's
//! RgbaColor into egui::Color32.

use egui::Color32;

use crate::models::timer::RgbaColor;

/// Colors used across the application
#[derive(Debug, Clone)]
pub struct MyPumpTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Background of dialogs and the inner disc of progress rings
    pub surface: Color32,

    /// Unfilled part of progress rings
    pub ring_track: Color32,

    /// Primary button fill
    pub accent: Color32,

    /// Primary text color (headings, labels)
    pub text_primary: Color32,

    /// Secondary text color (hints)
    pub text_secondary: Color32,
}

impl MyPumpTheme {
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(0x0a, 0x0f, 0x1f),
            surface: Color32::from_rgb(0x0a, 0x0f, 0x1f),
            ring_track: to_color32(RgbaColor::TRACK),
            accent: to_color32(RgbaColor::GREEN),
            text_primary: Color32::from_rgb(0xf8, 0xfa, 0xfc),
            text_secondary: Color32::from_rgb(0x94, 0xa3, 0xb8),
        }
    }

    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            surface: Color32::from_rgb(255, 255, 255),
            ring_track: Color32::from_rgb(220, 224, 230),
            accent: to_color32(RgbaColor::GREEN),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    pub fn for_settings(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.surface;
        visuals.panel_fill = self.app_background;
        visuals.selection.bg_fill = self.accent;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}

pub fn to_color32(color: RgbaColor) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_uses_page_background() {
        let theme = MyPumpTheme::dark();
        assert!(theme.is_dark);
        assert_eq!(theme.app_background, Color32::from_rgb(10, 15, 31));
    }

    #[test]
    fn converts_model_colors() {
        assert_eq!(
            to_color32(RgbaColor::RED),
            Color32::from_rgb(0xef, 0x44, 0x44)
        );
    }
}
