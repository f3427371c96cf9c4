// SPDX-License-Identifier: MPL-2.0
//! Shared widget styles.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Surface for the form box and the summary box.
///
/// The color is derived from the active Iced `Theme` background, with a
/// slight opacity, so the box stays readable in both light and dark modes
/// without hard-coding colors.
pub fn form_box(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette.background.strong.color
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
