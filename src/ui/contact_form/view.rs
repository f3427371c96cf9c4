// SPDX-License-Identifier: MPL-2.0
//! View rendering for the contact form component.
//!
//! Each machine phase maps to one visible region: the editable form box in
//! `Editing`, the sending effect alone in `Acknowledging` (the box is
//! hidden), and the box with the summary plus the success effect in
//! `Summary`.

use super::state::{Message, State};
use crate::form::{ContactMethod, Field, Phase, Submission};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, pick_list, text, text_input, Column, Row, Space};
use iced::{alignment::Horizontal, Element, Length};

pub(super) fn view<'a>(state: &'a State, scheme: &ColorScheme) -> Element<'a, Message> {
    match state.phase() {
        Phase::Editing => editing_view(state, scheme),
        Phase::Acknowledging => acknowledging_view(state, scheme),
        Phase::Summary => summary_view(state, scheme),
    }
}

/// The editable form box with per-field messages and the action buttons.
fn editing_view<'a>(state: &'a State, scheme: &ColorScheme) -> Element<'a, Message> {
    let values = state.values();
    let errors = state.errors();

    let mut form = Column::new()
        .spacing(spacing::SM)
        .push(text("Get in Touch").size(typography::TITLE_LG));

    for field in [Field::FullName, Field::PhoneNumber, Field::Email, Field::Comment] {
        form = form.push(build_field(
            field,
            values.text(field),
            errors.message(field),
            scheme,
        ));
    }

    // Contact method picker
    let mut method = Column::new()
        .spacing(spacing::XXS)
        .push(text("How should we contact you?").size(typography::BODY_SM))
        .push(
            pick_list(
                ContactMethod::ALL,
                values.contact_method,
                Message::ContactMethodSelected,
            )
            .placeholder("Select a method")
            .padding(spacing::XS)
            .width(Length::Fill),
        );
    if let Some(message) = &errors.contact_method {
        method = method.push(error_text(message, scheme));
    }
    form = form.push(method);

    let actions = Row::new()
        .spacing(spacing::XS)
        .push(
            button(text("Send"))
                .on_press(Message::SubmitPressed)
                .padding(spacing::XS)
                .style(button::primary),
        )
        .push(
            button(text("Reset"))
                .on_press(Message::ResetPressed)
                .padding(spacing::XS)
                .style(button::secondary),
        )
        .push(Space::new().width(Length::Fill))
        .push(
            button(text("Apply Test Data"))
                .on_press(Message::ApplyTestValuesPressed)
                .padding(spacing::XS)
                .style(button::secondary),
        );
    form = form.push(actions);

    form_box(form.into())
}

/// Only the sending effect is visible; the form box is hidden.
fn acknowledging_view<'a>(state: &'a State, scheme: &ColorScheme) -> Element<'a, Message> {
    let effect: Element<'a, Message> = match state.effect() {
        Some(effect) => effect.view(scheme),
        None => Space::new()
            .width(Length::Fixed(sizing::EFFECT_SURFACE))
            .height(Length::Fixed(sizing::EFFECT_SURFACE))
            .into(),
    };

    Column::new()
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(effect)
        .into()
}

/// The form box again, now with the success effect and the read-only
/// summary of the submitted data.
fn summary_view<'a>(state: &'a State, scheme: &ColorScheme) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center);

    if let Some(effect) = state.effect() {
        content = content.push(effect.view(scheme));
    }

    match state.submission() {
        Some(submission) => {
            content = content
                .push(text("The following data was submitted:").size(typography::TITLE_SM))
                .push(summary_rows(submission, scheme));
        }
        // Unreachable through the machine; render a plain fallback.
        None => content = content.push(text("Submission complete.").size(typography::BODY)),
    }

    content = content.push(
        button(text("Go Back"))
            .on_press(Message::GoBackPressed)
            .padding(spacing::XS)
            .style(button::primary),
    );

    form_box(content.into())
}

fn summary_rows<'a>(submission: &'a Submission, scheme: &ColorScheme) -> Element<'a, Message> {
    let mut rows = Column::new().spacing(spacing::XXS).width(Length::Fill);

    let entries: [(&str, &str); 5] = [
        ("Full Name", submission.full_name.as_str()),
        ("Phone", submission.phone_number.as_str()),
        ("Email", submission.email.as_str()),
        ("Comment", submission.comment.as_str()),
        ("Contact Method", submission.contact_method.label()),
    ];

    for (label, value) in entries {
        rows = rows.push(
            Row::new()
                .spacing(spacing::XS)
                .push(
                    text(format!("{}:", label))
                        .size(typography::BODY_SM)
                        .color(scheme.text_secondary),
                )
                .push(text(value).size(typography::BODY).color(scheme.text_primary)),
        );
    }

    rows.into()
}

/// One labeled input with its message, if the field currently fails.
fn build_field<'a>(
    field: Field,
    value: &'a str,
    error: Option<&'a String>,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let mut col = Column::new()
        .spacing(spacing::XXS)
        .push(text(field.label()).size(typography::BODY_SM))
        .push(
            text_input("", value)
                .on_input(move |v| Message::FieldChanged(field, v))
                .padding(spacing::XS)
                .size(typography::BODY),
        );

    if let Some(message) = error {
        col = col.push(error_text(message, scheme));
    }

    col.into()
}

fn error_text<'a>(message: &'a str, scheme: &ColorScheme) -> Element<'a, Message> {
    text(message)
        .size(typography::CAPTION)
        .color(scheme.error)
        .into()
}

/// Wraps content in the shared form box surface.
fn form_box(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .style(styles::form_box)
        .into()
}
