// SPDX-License-Identifier: MPL-2.0
//! State and update logic for the contact form component.

use crate::form::{
    validate, validator, ContactMethod, Field, FormValues, Phase, SendToken, Submission,
    SubmissionMachine, ValidationErrors,
};
use crate::ui::effects::{EffectHandle, EffectKind};
use crate::ui::theming::ColorScheme;
use iced::Element;
use std::time::Instant;

/// Messages emitted by the form widgets and the shell.
#[derive(Debug, Clone)]
pub enum Message {
    /// A free-text input changed.
    FieldChanged(Field, String),
    /// A contact method was picked.
    ContactMethodSelected(ContactMethod),
    SubmitPressed,
    ResetPressed,
    ApplyTestValuesPressed,
    GoBackPressed,
    /// The scheduled send delay came back from the runtime.
    SendDelayElapsed(SendToken),
    /// Animation clock for the mounted effect.
    EffectTick(Instant),
}

/// Side effects the application should perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule the fixed send delay and deliver the token back via
    /// [`Message::SendDelayElapsed`].
    ScheduleSend(SendToken),
}

/// Complete component state: the editable values, their current validation
/// messages, the submission machine, and the effect instance owned by the
/// current phase (at most one at a time).
#[derive(Debug, Default)]
pub struct State {
    values: FormValues,
    errors: ValidationErrors,
    machine: SubmissionMachine,
    effect: Option<EffectHandle>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the form pre-filled (the `--prefill` launcher flag).
    #[must_use]
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Handles a message and reports the side effect, if any, for the shell
    /// to perform.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::FieldChanged(field, value) => {
                self.values.set_text(field, value);
                // Re-validate only a field that is currently showing a
                // message, so the message clears the moment the input is
                // corrected but no new messages appear while typing.
                if self.errors.message(field).is_some() {
                    self.errors
                        .set_message(field, validator::validate_field(field, self.values.text(field)));
                }
                Effect::None
            }
            Message::ContactMethodSelected(method) => {
                self.values.contact_method = Some(method);
                self.errors.contact_method = None;
                Effect::None
            }
            Message::SubmitPressed => match validate(&self.values) {
                Ok(submission) => self.begin_send(submission),
                Err(errors) => {
                    self.errors = errors;
                    Effect::None
                }
            },
            Message::ResetPressed => {
                self.values.reset();
                self.errors = ValidationErrors::default();
                Effect::None
            }
            Message::ApplyTestValuesPressed => {
                // Fills the sample data without triggering validation;
                // existing messages stay until the next submit or edit.
                self.values = FormValues::test_values();
                Effect::None
            }
            Message::GoBackPressed => {
                if self.machine.go_back() {
                    self.dismiss_effect();
                    self.values.reset();
                    self.errors = ValidationErrors::default();
                }
                Effect::None
            }
            Message::SendDelayElapsed(token) => {
                if self.machine.delay_elapsed(token) {
                    self.dismiss_effect();
                    self.effect = Some(EffectHandle::mount(EffectKind::Success));
                }
                Effect::None
            }
            Message::EffectTick(now) => {
                if let Some(effect) = &mut self.effect {
                    effect.tick(now);
                }
                Effect::None
            }
        }
    }

    fn begin_send(&mut self, submission: Submission) -> Effect {
        match self.machine.submit(submission) {
            Some(token) => {
                self.errors = ValidationErrors::default();
                self.dismiss_effect();
                self.effect = Some(EffectHandle::mount(EffectKind::Sending));
                Effect::ScheduleSend(token)
            }
            // The submit button is only rendered in `Editing`; a rejected
            // submit leaves everything untouched.
            None => Effect::None,
        }
    }

    /// Releases whatever effect is mounted, finished or not.
    fn dismiss_effect(&mut self) {
        if let Some(mut effect) = self.effect.take() {
            effect.dispose();
        }
    }

    /// Teardown path: invalidates any pending send delay and releases the
    /// mounted effect. Safe to call more than once.
    pub fn teardown(&mut self) {
        self.machine.invalidate_pending();
        self.dismiss_effect();
    }

    /// True while the mounted effect still needs animation ticks.
    #[must_use]
    pub fn is_effect_playing(&self) -> bool {
        self.effect.as_ref().is_some_and(EffectHandle::is_playing)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.machine.phase()
    }

    #[must_use]
    pub fn values(&self) -> &FormValues {
        &self.values
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The frozen submission shown in the summary.
    #[must_use]
    pub fn submission(&self) -> Option<&Submission> {
        self.machine.submission()
    }

    /// The kind of the currently mounted effect, if any.
    #[must_use]
    pub fn effect_kind(&self) -> Option<EffectKind> {
        self.effect.as_ref().map(EffectHandle::kind)
    }

    pub(super) fn effect(&self) -> Option<&EffectHandle> {
        self.effect.as_ref()
    }

    /// Renders the component for the current phase.
    pub fn view(&self, scheme: &ColorScheme) -> Element<'_, Message> {
        super::view::view(self, scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_valid(state: &mut State) {
        state.update(Message::ApplyTestValuesPressed);
    }

    fn submit_token(state: &mut State) -> SendToken {
        match state.update(Message::SubmitPressed) {
            Effect::ScheduleSend(token) => token,
            Effect::None => panic!("expected a scheduled send"),
        }
    }

    #[test]
    fn submit_with_invalid_data_stays_in_editing() {
        let mut state = State::new();
        let effect = state.update(Message::SubmitPressed);

        assert_eq!(effect, Effect::None);
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.errors().has_errors());
        assert!(state.effect_kind().is_none());
    }

    #[test]
    fn submit_with_valid_data_enters_acknowledging_with_sending_effect() {
        let mut state = State::new();
        fill_valid(&mut state);

        let token = submit_token(&mut state);
        let _ = token;

        assert_eq!(state.phase(), Phase::Acknowledging);
        assert_eq!(state.effect_kind(), Some(EffectKind::Sending));
        assert!(!state.errors().has_errors());
    }

    #[test]
    fn delay_elapsed_swaps_sending_for_success_and_shows_summary() {
        let mut state = State::new();
        fill_valid(&mut state);
        let submitted = state.values().clone();
        let token = submit_token(&mut state);

        state.update(Message::SendDelayElapsed(token));

        assert_eq!(state.phase(), Phase::Summary);
        assert_eq!(state.effect_kind(), Some(EffectKind::Success));
        let summary = state.submission().expect("summary payload present");
        assert_eq!(summary.full_name, submitted.full_name);
        assert_eq!(summary.email, submitted.email);
    }

    #[test]
    fn go_back_returns_to_an_empty_form() {
        let mut state = State::new();
        fill_valid(&mut state);
        let token = submit_token(&mut state);
        state.update(Message::SendDelayElapsed(token));

        state.update(Message::GoBackPressed);

        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.values().is_empty());
        assert!(state.submission().is_none());
        assert!(state.effect_kind().is_none());
        assert!(!state.errors().has_errors());
    }

    #[test]
    fn stale_token_after_teardown_is_ignored() {
        let mut state = State::new();
        fill_valid(&mut state);
        let token = submit_token(&mut state);

        state.teardown();
        let phase_before = state.phase();
        state.update(Message::SendDelayElapsed(token));

        assert_eq!(state.phase(), phase_before);
        assert!(state.submission().is_none());
        assert!(state.effect_kind().is_none());
    }

    #[test]
    fn editing_a_failing_field_clears_its_message() {
        let mut state = State::new();
        state.update(Message::SubmitPressed); // everything fails
        assert!(state.errors().message(Field::Email).is_some());

        state.update(Message::FieldChanged(Field::Email, "test@email.com".to_string()));

        assert!(state.errors().message(Field::Email).is_none());
        // Untouched fields keep their messages.
        assert!(state.errors().message(Field::FullName).is_some());
    }

    #[test]
    fn editing_without_a_message_does_not_validate() {
        let mut state = State::new();
        state.update(Message::FieldChanged(Field::Email, "not-an-email".to_string()));

        // No submit attempt yet, so typing never surfaces messages.
        assert!(!state.errors().has_errors());
    }

    #[test]
    fn selecting_a_method_clears_its_message() {
        let mut state = State::new();
        state.update(Message::SubmitPressed);
        assert!(state.errors().contact_method.is_some());

        state.update(Message::ContactMethodSelected(ContactMethod::Phone));

        assert!(state.errors().contact_method.is_none());
        assert_eq!(state.values().contact_method, Some(ContactMethod::Phone));
    }

    #[test]
    fn reset_clears_values_and_messages() {
        let mut state = State::new();
        state.update(Message::FieldChanged(Field::FullName, "Ada".to_string()));
        state.update(Message::SubmitPressed);
        assert!(state.errors().has_errors());

        state.update(Message::ResetPressed);

        assert!(state.values().is_empty());
        assert!(!state.errors().has_errors());
        assert_eq!(state.phase(), Phase::Editing);
    }

    #[test]
    fn apply_test_values_does_not_touch_messages() {
        let mut state = State::new();
        state.update(Message::SubmitPressed);
        let messages_before = state.errors().clone();

        state.update(Message::ApplyTestValuesPressed);

        assert_eq!(state.values(), &FormValues::test_values());
        assert_eq!(state.errors(), &messages_before);
    }

    #[test]
    fn at_most_one_effect_exists_across_the_whole_cycle() {
        let mut state = State::new();
        fill_valid(&mut state);

        assert!(state.effect_kind().is_none());
        let token = submit_token(&mut state);
        assert_eq!(state.effect_kind(), Some(EffectKind::Sending));

        state.update(Message::SendDelayElapsed(token));
        assert_eq!(state.effect_kind(), Some(EffectKind::Success));

        state.update(Message::GoBackPressed);
        assert!(state.effect_kind().is_none());
    }

    #[test]
    fn effect_ticks_advance_only_the_mounted_effect() {
        let mut state = State::new();
        fill_valid(&mut state);
        let _token = submit_token(&mut state);

        let start = Instant::now();
        state.update(Message::EffectTick(start));
        state.update(Message::EffectTick(start + EffectKind::Sending.duration() / 2));

        assert!(state.is_effect_playing());
        let progress = state.effect().expect("effect mounted").progress();
        assert!(progress > 0.0 && progress < 1.0);
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut state = State::new();
        fill_valid(&mut state);
        let _ = submit_token(&mut state);

        state.teardown();
        state.teardown();

        assert!(state.effect_kind().is_none());
    }
}
