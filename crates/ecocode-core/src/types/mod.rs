//! Core type definitions for Eco-Code
//!
//! Shared data types used by the state machines and the UI.

mod editor_types;
mod file_types;
mod message_types;

pub use editor_types::*;
pub use file_types::*;
pub use message_types::*;
