// SPDX-License-Identifier: MPL-2.0
//! Form domain: the field registry, validation rules, and the submission
//! state machine. No UI code lives here; the `ui` module renders from these
//! types and the `app` module drives the transitions.

pub mod fields;
pub mod machine;
pub mod validator;

pub use fields::{ContactMethod, Field, FormValues, Submission};
pub use machine::{Phase, SendToken, SubmissionMachine, SEND_DELAY};
pub use validator::{validate, ValidationErrors};
