//! Editor shell types

use serde::{Deserialize, Serialize};

/// Tabs of the code panel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    #[default]
    Code,
    Preview,
    Split,
    Console,
}

impl EditorTab {
    /// All tabs in display order
    pub const ALL: [EditorTab; 4] = [
        EditorTab::Code,
        EditorTab::Preview,
        EditorTab::Split,
        EditorTab::Console,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditorTab::Code => "Code",
            EditorTab::Preview => "Preview",
            EditorTab::Split => "Split",
            EditorTab::Console => "Console",
        }
    }

    /// Whether the tab shows the preview pane
    pub fn shows_preview(&self) -> bool {
        matches!(self, EditorTab::Preview | EditorTab::Split)
    }

    /// Whether the tab shows the code pane
    pub fn shows_code(&self) -> bool {
        matches!(self, EditorTab::Code | EditorTab::Split)
    }
}

/// Severity of a console line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    Info,
    Warning,
}

/// One line of the console tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsoleLine {
    pub level: ConsoleLevel,
    pub text: String,
}

impl ConsoleLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: ConsoleLevel::Warning,
            text: text.into(),
        }
    }
}
