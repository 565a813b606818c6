//! Reusable UI components.

pub mod text_field;
pub mod toast;
