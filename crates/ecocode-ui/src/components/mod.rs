//! Reusable UI components
//!
//! Basic building blocks for the Eco-Code UI.

pub mod icon;
pub mod text_field;

pub use icon::{svg_icon, IconName, IconSize};
pub use text_field::{apply_edit, key_action, KeyAction};
