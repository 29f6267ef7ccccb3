//! Eco-Code Core Library
//!
//! Headless state for the Eco-Code workbench:
//! - Resizable panel sizing with persisted sizes
//! - File explorer expansion and selection
//! - Chat session with a simulated assistant
//! - Code / preview / console shell with a scripted build
//! - Responsive layout
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ecocode-core                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  workbench.rs  - Composition root, routes timer events      │
//! │  panel/        - Resizable panel size, cursor hint lease    │
//! │  tree/         - File explorer state and render rows        │
//! │  chat/         - Messages, canned replies, copy indicator   │
//! │  editor/       - Tabs, fake build, static content           │
//! │  layout/       - Mobile / desktop mode, header actions      │
//! │  timer.rs      - Cancellable delayed events                 │
//! │  storage/      - SQLite settings, key-value stores          │
//! │  config.rs     - Timings and defaults                       │
//! │  types/        - Shared type definitions                    │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod chat;
pub mod config;
pub mod editor;
pub mod error;
pub mod layout;
pub mod panel;
pub mod storage;
pub mod timer;
pub mod tree;
pub mod types;
pub mod workbench;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

pub use chat::{ChatSession, Clipboard, WELCOME_MESSAGE_ID};
pub use config::WorkbenchConfig;
pub use editor::{EditorShell, PreviewPage, CODE_SNIPPET, PREVIEW_PAGE};
pub use layout::{HeaderAction, LayoutMode, LayoutState, MobilePane, APP_TITLE};
pub use panel::{
    CursorHint, Direction, PanelConfig, Point, PointerEvent, ResizablePanel, ResizeCursor,
    Viewport,
};
pub use storage::{KeyValueStore, MemoryStore, Storage};
pub use tree::{Chevron, FileTree, TreeIcon, TreeRow};
pub use workbench::Workbench;
