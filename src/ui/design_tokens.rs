// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, typography, and radii.
//!
//! Tokens are deliberately a small, consistent scale (8px spacing grid,
//! Material-style type scale). Components reference tokens rather than raw
//! numbers so light and dark themes stay coherent.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;

    /// Surface background for panels and containers.
    pub const SURFACE: f32 = 0.95;
}

/// Spacing scale (8px baseline grid).
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Canvas surface for the one-shot effects.
    pub const EFFECT_SURFACE: f32 = 140.0;

    /// Width of the form box.
    pub const FORM_WIDTH: f32 = 420.0;
}

/// Font size scale.
pub mod typography {
    /// Main heading.
    pub const TITLE_LG: f32 = 30.0;

    /// Section headers.
    pub const TITLE_SM: f32 = 18.0;

    /// Most UI text, inputs, summary rows.
    pub const BODY: f32 = 14.0;

    /// Field labels.
    pub const BODY_SM: f32 = 13.0;

    /// Error messages under fields.
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}
