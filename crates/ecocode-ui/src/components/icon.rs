//! SVG Icon component for consistent icon rendering
//!
//! Icons are stored in assets/icons/ as SVG files and tinted with the text color.

use ecocode_core::{Chevron, EditorTab, HeaderAction, TreeIcon};
use gpui::*;

/// Icon names corresponding to SVG files in assets/icons/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    // Chevrons for expand/collapse
    ChevronDown,
    ChevronRight,

    // Files
    File,
    Folder,
    FolderOpen,
    Plus,

    // Chat
    Send,
    Copy,
    Check,
    Bot,
    User,

    // Editor
    Play,
    Maximize,
    Minimize,
    Code,
    Eye,
    Columns,
    Terminal,
    Loader,

    // Header
    Menu,
    Lock,
    Database,
    Github,
    Upload,
}

impl IconName {
    /// Get the path to the SVG file
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronDown => "icons/chevron_down.svg",
            IconName::ChevronRight => "icons/chevron_right.svg",
            IconName::File => "icons/file.svg",
            IconName::Folder => "icons/folder.svg",
            IconName::FolderOpen => "icons/folder_open.svg",
            IconName::Plus => "icons/plus.svg",
            IconName::Send => "icons/send.svg",
            IconName::Copy => "icons/copy.svg",
            IconName::Check => "icons/check.svg",
            IconName::Bot => "icons/bot.svg",
            IconName::User => "icons/user.svg",
            IconName::Play => "icons/play.svg",
            IconName::Maximize => "icons/maximize.svg",
            IconName::Minimize => "icons/minimize.svg",
            IconName::Code => "icons/code.svg",
            IconName::Eye => "icons/eye.svg",
            IconName::Columns => "icons/columns.svg",
            IconName::Terminal => "icons/terminal.svg",
            IconName::Loader => "icons/loader.svg",
            IconName::Menu => "icons/menu.svg",
            IconName::Lock => "icons/lock.svg",
            IconName::Database => "icons/database.svg",
            IconName::Github => "icons/github.svg",
            IconName::Upload => "icons/upload.svg",
        }
    }
}

impl From<Chevron> for IconName {
    fn from(chevron: Chevron) -> Self {
        match chevron {
            Chevron::Down => IconName::ChevronDown,
            Chevron::Right => IconName::ChevronRight,
        }
    }
}

impl From<TreeIcon> for IconName {
    fn from(icon: TreeIcon) -> Self {
        match icon {
            TreeIcon::FolderOpen => IconName::FolderOpen,
            TreeIcon::FolderClosed => IconName::Folder,
            TreeIcon::File => IconName::File,
        }
    }
}

impl From<EditorTab> for IconName {
    fn from(tab: EditorTab) -> Self {
        match tab {
            EditorTab::Code => IconName::Code,
            EditorTab::Preview => IconName::Eye,
            EditorTab::Split => IconName::Columns,
            EditorTab::Console => IconName::Terminal,
        }
    }
}

impl From<HeaderAction> for IconName {
    fn from(action: HeaderAction) -> Self {
        match action {
            HeaderAction::MenuToggle => IconName::Menu,
            HeaderAction::ReadOnlyBadge => IconName::Lock,
            HeaderAction::Supabase => IconName::Database,
            HeaderAction::GitHub => IconName::Github,
            HeaderAction::Publish => IconName::Upload,
        }
    }
}

/// Standard icon sizes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum IconSize {
    /// Extra small: 12px
    XSmall,
    /// Small: 14px
    Small,
    /// Medium: 16px (default)
    #[default]
    Medium,
    /// Large: 20px
    Large,
}

impl IconSize {
    /// Get the size in pixels
    pub fn px(&self) -> f32 {
        match self {
            IconSize::XSmall => 12.0,
            IconSize::Small => 14.0,
            IconSize::Medium => 16.0,
            IconSize::Large => 20.0,
        }
    }
}

/// Create an SVG icon element
///
/// # Example
/// ```ignore
/// svg_icon(IconName::ChevronDown, IconSize::Small)
///     .text_color(rgb(colors.text_secondary))
/// ```
pub fn svg_icon(name: impl Into<IconName>, size: IconSize) -> Svg {
    svg()
        .path(name.into().path())
        .size(px(size.px()))
        .flex_shrink_0()
}
