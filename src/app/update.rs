// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! The component reports side effects instead of performing them; this
//! module turns those effects into Iced tasks (the send delay) and handles
//! the shell-level concerns (theme persistence, window close).

use super::Message;
use crate::config::{self, Config};
use crate::form::SEND_DELAY;
use crate::ui::contact_form;
use crate::ui::theming::ThemeMode;
use iced::{window, Task};
use std::path::PathBuf;

/// Mutable slices of `App` state the handlers operate on.
pub struct UpdateContext<'a> {
    pub form: &'a mut contact_form::State,
    pub theme_mode: &'a mut ThemeMode,
    /// Explicit preference-file override from the CLI, if any.
    pub config_path: &'a Option<PathBuf>,
}

/// Routes a component message and performs whatever side effect it reports.
pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: contact_form::Message,
) -> Task<Message> {
    match ctx.form.update(message) {
        contact_form::Effect::None => Task::none(),
        contact_form::Effect::ScheduleSend(token) => Task::perform(
            async move {
                tokio::time::sleep(SEND_DELAY).await;
                token
            },
            |token| Message::ContactForm(contact_form::Message::SendDelayElapsed(token)),
        ),
    }
}

/// Cycles the theme mode and persists the preference. Persistence is
/// best-effort; a write failure leaves the session theme applied.
pub fn handle_cycle_theme_mode(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.cycled();

    let config = Config {
        theme_mode: Some(*ctx.theme_mode),
    };
    let _ = match ctx.config_path {
        Some(path) => config::save_to_path(&config, path),
        None => config::save(&config),
    };

    Task::none()
}

/// Teardown: invalidate the pending send delay and release the mounted
/// effect before the window goes away.
pub fn handle_window_close(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    ctx.form.teardown();
    window::close(id)
}
