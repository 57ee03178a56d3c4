//! Centralized color theme for the application.
//!
//! This module provides all colors used throughout the editor UI and map rendering.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;
use bevy_egui::egui;

use crate::geo::LayerStyle;
use crate::shapes::ShapeKind;

// ============================================================================
// Map Background
// ============================================================================

/// Pale land color behind the graticule
pub const MAP_BACKGROUND: Color = Color::srgb(0.93, 0.93, 0.9);

/// Semi-transparent grey graticule lines
pub const GRATICULE_COLOR: Color = Color::srgba(0.4, 0.4, 0.4, 0.35);

/// Darker line for the equator and prime meridian
pub const GRATICULE_AXIS_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 0.7);

// ============================================================================
// Shape Layer Colors
// ============================================================================

/// Red used while a shape is being drawn
pub const PREVIEW_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Default stroke of finished shapes
pub const FINAL_COLOR: Color = Color::srgb(0.2, 0.533, 1.0);

/// Finished shape currently open in the inspector
pub const HIGHLIGHT_COLOR: Color = Color::srgb(1.0, 0.7, 0.2);

/// Stroke color for a layer of the given style
pub fn layer_color(style: LayerStyle) -> Color {
    match style {
        LayerStyle::Anchor | LayerStyle::Preview | LayerStyle::PreviewOutline => PREVIEW_COLOR,
        LayerStyle::Final => FINAL_COLOR,
    }
}

// ============================================================================
// Mode Colors
// ============================================================================

/// Accent color of a shape mode, used by its toolbar button and list entries
pub fn mode_color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::Box => Color::srgb_u8(59, 130, 246),
        ShapeKind::Circle => Color::srgb_u8(34, 197, 94),
        ShapeKind::Polygon => Color::srgb_u8(168, 85, 247),
    }
}

// ============================================================================
// UI Colors (egui)
// ============================================================================

pub mod ui {
    use bevy_egui::egui;

    /// Dark grey panel background (tool settings bar)
    pub const PANEL_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(45, 45, 48);

    /// Light grey for label text
    pub const LABEL_TEXT: egui::Color32 = egui::Color32::LIGHT_GRAY;

    /// Grey for help/hint text
    pub const HINT_TEXT: egui::Color32 = egui::Color32::GRAY;

    /// White for selected button borders
    pub const SELECTED_BORDER: egui::Color32 = egui::Color32::WHITE;

    /// Amber for cancellation notices
    pub const STATUS_TEXT: egui::Color32 = egui::Color32::from_rgb(230, 180, 80);

    /// Red for error messages
    pub const ERROR_TEXT: egui::Color32 = egui::Color32::RED;
}

// ============================================================================
// Color Conversion Utilities
// ============================================================================

/// Convert a Bevy Color to egui Color32 (fully opaque)
pub fn bevy_to_egui_opaque(color: Color) -> egui::Color32 {
    let srgba = color.to_srgba();
    egui::Color32::from_rgb(
        (srgba.red * 255.0).round() as u8,
        (srgba.green * 255.0).round() as u8,
        (srgba.blue * 255.0).round() as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_colors_convert_exactly() {
        assert_eq!(
            bevy_to_egui_opaque(mode_color(ShapeKind::Box)),
            egui::Color32::from_rgb(59, 130, 246)
        );
        assert_eq!(
            bevy_to_egui_opaque(mode_color(ShapeKind::Polygon)),
            egui::Color32::from_rgb(168, 85, 247)
        );
    }

    #[test]
    fn test_transient_layers_share_preview_color() {
        assert_eq!(layer_color(LayerStyle::Anchor), PREVIEW_COLOR);
        assert_eq!(layer_color(LayerStyle::PreviewOutline), PREVIEW_COLOR);
        assert_eq!(layer_color(LayerStyle::Final), FINAL_COLOR);
    }
}
