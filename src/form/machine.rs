// SPDX-License-Identifier: MPL-2.0
//! Submission state machine.
//!
//! Three phases govern the form lifecycle: `Editing` (the form is shown and
//! editable), `Acknowledging` (a transient sending animation plays while a
//! fixed delay runs), and `Summary` (the submitted data is shown read-only
//! until the user goes back).
//!
//! The delay between `Acknowledging` and `Summary` is scheduled outside the
//! machine; the machine hands out a generation-stamped [`SendToken`] on
//! submit and only honors the matching token when it comes back. A stale
//! token (superseded, or invalidated by teardown) is a no-op, so a timer
//! firing after the fact can never corrupt state.

use crate::form::fields::Submission;
use std::time::Duration;

/// Fixed delay between a successful submit and the summary.
pub const SEND_DELAY: Duration = Duration::from_millis(2500);

/// Lifecycle phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Acknowledging,
    Summary,
}

/// Pairs a scheduled send delay with the submit that requested it.
///
/// Only the machine can mint tokens; the shell carries one through the delay
/// task and delivers it back via [`SubmissionMachine::delay_elapsed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendToken {
    generation: u64,
}

/// The three-phase machine plus its payload.
#[derive(Debug, Default)]
pub struct SubmissionMachine {
    phase: Phase,
    /// Validated data held while the send delay runs.
    pending: Option<Submission>,
    /// The summary payload; present only in `Summary`.
    submitted: Option<Submission>,
    /// Bumped on every submit and on teardown, so earlier tokens go stale.
    generation: u64,
}

impl SubmissionMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The submitted data shown in the summary, if the machine is in
    /// `Summary`.
    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        self.submitted.as_ref()
    }

    /// Accepts validated data and moves `Editing` into `Acknowledging`.
    ///
    /// Returns the token the caller must schedule the send delay with, or
    /// `None` if the machine is not in `Editing` (the editable form is not
    /// rendered outside `Editing`, so this is a guard, not a user path).
    pub fn submit(&mut self, data: Submission) -> Option<SendToken> {
        if self.phase != Phase::Editing {
            return None;
        }

        self.generation = self.generation.wrapping_add(1);
        self.phase = Phase::Acknowledging;
        self.pending = Some(data);

        Some(SendToken {
            generation: self.generation,
        })
    }

    /// Delivers an elapsed delay back to the machine.
    ///
    /// Moves `Acknowledging` into `Summary` and promotes the pending data to
    /// the summary payload. Returns `true` when the transition fired. A
    /// token from a superseded submit, or any delivery outside
    /// `Acknowledging`, changes nothing and returns `false`.
    pub fn delay_elapsed(&mut self, token: SendToken) -> bool {
        if self.phase != Phase::Acknowledging || token.generation != self.generation {
            return false;
        }

        self.phase = Phase::Summary;
        self.submitted = self.pending.take();
        true
    }

    /// Returns from the summary to an empty editable form.
    ///
    /// Clears the summary payload. Returns `true` when the transition fired;
    /// calling this outside `Summary` changes nothing.
    pub fn go_back(&mut self) -> bool {
        if self.phase != Phase::Summary {
            return false;
        }

        self.phase = Phase::Editing;
        self.submitted = None;
        true
    }

    /// Teardown path: makes any outstanding token stale and drops data held
    /// for a transition that will never happen. After this, a late
    /// [`Self::delay_elapsed`] is a provable no-op.
    pub fn invalidate_pending(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
    }
}
