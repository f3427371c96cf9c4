// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::contact_form;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// How often the mounted effect is advanced while it plays.
const EFFECT_TICK_INTERVAL: Duration = Duration::from_millis(33);

/// Listens for window close requests so teardown can run before exit.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Animation clock for the one-shot effects. Only active while an effect is
/// actually playing; an idle or finished effect needs no ticks.
pub fn create_effect_tick_subscription(effect_playing: bool) -> Subscription<Message> {
    if effect_playing {
        time::every(EFFECT_TICK_INTERVAL)
            .map(|instant| Message::ContactForm(contact_form::Message::EffectTick(instant)))
    } else {
        Subscription::none()
    }
}
