// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The shell centers the component for the current phase and adds the
//! theme toggle; everything phase-specific is rendered by the component.

use super::Message;
use crate::ui::contact_form;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ThemeMode;
use iced::widget::{button, text, Column, Container, Row, Space};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub form: &'a contact_form::State,
    pub theme_mode: ThemeMode,
}

/// Renders the window: a top bar with the theme toggle and the centered
/// form component.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = ctx.theme_mode.scheme();

    let top_bar = Row::new()
        .padding(spacing::XS)
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(ctx.theme_mode.label()).size(typography::BODY_SM))
                .on_press(Message::CycleThemeMode)
                .padding(spacing::XXS)
                .style(button::secondary),
        );

    let content = Container::new(ctx.form.view(&scheme).map(Message::ContactForm))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Column::new()
        .push(top_bar)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
