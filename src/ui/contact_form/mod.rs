// SPDX-License-Identifier: MPL-2.0
//! The contact form component: editable fields with inline validation, a
//! transient sending acknowledgment, and a read-only summary of the
//! submitted data.

mod state;
mod view;

pub use state::{Effect, Message, State};
