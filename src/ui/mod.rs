// SPDX-License-Identifier: MPL-2.0
//! UI layer: the contact form component, the one-shot visual effects, and
//! the shared design tokens, styles, and theming.

pub mod contact_form;
pub mod design_tokens;
pub mod effects;
pub mod styles;
pub mod theming;
