// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the contact form component to the Iced runtime:
//! it routes messages, schedules the send delay, owns the theme preference,
//! and runs the teardown path when the window closes. Policy decisions
//! (window sizing, preference format, theme switching) stay close to the
//! main update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::form::{FormValues, Phase};
use crate::ui::contact_form;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_WIDTH: u32 = 560;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root Iced application state bridging the form component and the
/// persisted preferences.
pub struct App {
    form: contact_form::State,
    theme_mode: ThemeMode,
    /// Explicit preference-file override from the CLI.
    config_path: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: contact_form::State::new(),
            theme_mode: ThemeMode::default(),
            config_path: None,
        }
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn parse_theme_mode(value: &str) -> Option<ThemeMode> {
    match value {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        "system" => Some(ThemeMode::System),
        _ => None,
    }
}

impl App {
    /// Initializes application state from CLI flags and the preference file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_path = flags
            .config_dir
            .as_ref()
            .map(|dir| config::config_path_in(Path::new(dir)));

        let config = match &config_path {
            Some(path) if path.exists() => config::load_from_path(path).unwrap_or_default(),
            Some(_) => Config::default(),
            None => config::load().unwrap_or_default(),
        };

        // CLI theme wins over the persisted preference.
        let theme_mode = flags
            .theme
            .as_deref()
            .and_then(parse_theme_mode)
            .or(config.theme_mode)
            .unwrap_or_default();

        let form = if flags.prefill {
            contact_form::State::with_values(FormValues::test_values())
        } else {
            contact_form::State::new()
        };

        let app = App {
            form,
            theme_mode,
            config_path,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = "Contact Form";
        match self.form.phase() {
            Phase::Editing => app_name.to_string(),
            Phase::Acknowledging => format!("Sending... - {app_name}"),
            Phase::Summary => format!("Sent - {app_name}"),
        }
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_effect_tick_subscription(self.form.is_effect_playing());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            theme_mode: &mut self.theme_mode,
            config_path: &self.config_path,
        };

        match message {
            Message::ContactForm(form_message) => {
                update::handle_form_message(&mut ctx, form_message)
            }
            Message::CycleThemeMode => update::handle_cycle_theme_mode(&mut ctx),
            Message::WindowCloseRequested(id) => update::handle_window_close(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            form: &self.form,
            theme_mode: self.theme_mode,
        })
    }
}
