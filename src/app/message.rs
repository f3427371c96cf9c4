// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact_form;
use iced::window;

/// Top-level messages consumed by `App::update`. The variants forward the
/// component's messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ContactForm(contact_form::Message),
    /// Cycle the theme mode (Light → Dark → System) and persist it.
    CycleThemeMode,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional directory override for the preference file.
    pub config_dir: Option<String>,
    /// Optional startup theme override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
    /// Start with the deterministic sample data already filled in.
    pub prefill: bool,
}
