// SPDX-License-Identifier: MPL-2.0
//! One-shot visual effects: the "sending" and "success" animations.
//!
//! An [`EffectHandle`] is a scoped resource. The owning component acquires
//! one when it enters the phase the effect belongs to, stores it, and
//! disposes it unconditionally when that phase is exited or the application
//! is torn down, whether or not playback completed. Playback is non-looping
//! and starts immediately on mount: progress runs from 0 to 1 once and
//! stays there.

mod canvas;

use crate::ui::theming::ColorScheme;
use iced::Element;
use std::time::{Duration, Instant};

/// Which effect definition a handle plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Sending,
    Success,
}

impl EffectKind {
    /// Playback length of the one-shot.
    #[must_use]
    pub fn duration(self) -> Duration {
        match self {
            EffectKind::Sending => Duration::from_millis(2400),
            EffectKind::Success => Duration::from_millis(1200),
        }
    }
}

/// A mounted, playing effect instance.
#[derive(Debug)]
pub struct EffectHandle {
    kind: EffectKind,
    /// Normalized playback position, 0.0 ..= 1.0.
    progress: f32,
    last_tick: Option<Instant>,
    disposed: bool,
}

impl EffectHandle {
    /// Mounts a new effect. Playback starts on the first tick; there is no
    /// separate play call.
    #[must_use]
    pub fn mount(kind: EffectKind) -> Self {
        Self {
            kind,
            progress: 0.0,
            last_tick: None,
            disposed: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    /// Normalized playback position.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// True while the one-shot is still advancing. A finished or disposed
    /// handle no longer needs animation ticks.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.disposed && self.progress < 1.0
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Advances playback. The first tick only anchors the clock; later ticks
    /// move progress by the elapsed fraction of the effect duration. Ticks
    /// after disposal or completion are ignored.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_playing() {
            return;
        }

        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last).as_secs_f32();
            let total = self.kind.duration().as_secs_f32();
            self.progress = (self.progress + elapsed / total).min(1.0);
        }
        self.last_tick = Some(now);
    }

    /// Releases the effect. Idempotent; a disposed handle ignores ticks and
    /// reports `is_playing() == false` regardless of where playback stopped.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Renders the current frame onto a canvas surface.
    pub fn view<'a, Message: 'a>(&self, scheme: &ColorScheme) -> Element<'a, Message> {
        match self.kind {
            EffectKind::Sending => canvas::sending(self.progress, scheme.brand_primary),
            EffectKind::Success => canvas::success(self.progress, scheme.success),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_handle_starts_at_zero_and_plays() {
        let handle = EffectHandle::mount(EffectKind::Sending);
        assert_eq!(handle.kind(), EffectKind::Sending);
        assert_eq!(handle.progress(), 0.0);
        assert!(handle.is_playing());
        assert!(!handle.is_disposed());
    }

    #[test]
    fn ticks_advance_progress_to_completion() {
        let mut handle = EffectHandle::mount(EffectKind::Success);
        let start = Instant::now();

        handle.tick(start);
        assert_eq!(handle.progress(), 0.0); // first tick anchors the clock

        handle.tick(start + Duration::from_millis(600));
        assert!(handle.progress() > 0.4 && handle.progress() < 0.6);

        handle.tick(start + Duration::from_millis(5000));
        assert_eq!(handle.progress(), 1.0);
        assert!(!handle.is_playing()); // one-shot, no looping
    }

    #[test]
    fn progress_is_clamped_at_one() {
        let mut handle = EffectHandle::mount(EffectKind::Success);
        let start = Instant::now();
        handle.tick(start);
        handle.tick(start + Duration::from_secs(60));

        assert_eq!(handle.progress(), 1.0);
    }

    #[test]
    fn disposed_handle_ignores_ticks() {
        let mut handle = EffectHandle::mount(EffectKind::Sending);
        let start = Instant::now();
        handle.tick(start);

        handle.dispose();
        let before = handle.progress();
        handle.tick(start + Duration::from_millis(1000));

        assert_eq!(handle.progress(), before);
        assert!(!handle.is_playing());
        assert!(handle.is_disposed());
    }

    #[test]
    fn dispose_is_idempotent() {
        let mut handle = EffectHandle::mount(EffectKind::Success);
        handle.dispose();
        handle.dispose();
        assert!(handle.is_disposed());
    }
}
