//! Eco-Code UI Library
//!
//! GPUI-based desktop UI for Eco-Code Assistant.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │ Header: title · [menu] · Read Only · Supabase · GitHub · Publish    │
//! ├──────────────────────┬─┬────────────────────────────────────────────┤
//! │ ChatPanel            │ │ EditorPanel                                │
//! │ (resizable, 20-50%)  │R│ ┌────────────────────────────────────────┐ │
//! │                      │e│ │ Tabs: Code Preview Split Console  [Run]│ │
//! │ ┌──────────────────┐ │s│ └────────────────────────────────────────┘ │
//! │ │MessageList       │ │i│ ┌──────────┬─────────────────────────────┐ │
//! │ │ Assistant [copy] │ │z│ │FileTree  │ CodeView / Preview / Console│ │
//! │ │        User      │ │e│ │ (240px)  │                             │ │
//! │ └──────────────────┘ │r│ │          │                             │ │
//! │ ┌──────────────────┐ │ │ │          │                             │ │
//! │ │InputBar   [Send] │ │ │ └──────────┴─────────────────────────────┘ │
//! │ └──────────────────┘ │ │                                            │
//! └──────────────────────┴─┴────────────────────────────────────────────┘
//! ```
//!
//! Below the mobile breakpoint only one of ChatPanel / EditorPanel is shown,
//! switched from the header menu button.

pub mod components;
pub mod integration;
pub mod theme;

// Re-exports
pub use integration::{open_store, SystemClipboard, WorkbenchModel};
pub use theme::{layout, Rgba, Spacing, Theme, ThemeColors, Typography};
