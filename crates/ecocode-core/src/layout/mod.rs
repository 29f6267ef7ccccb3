//! Responsive layout state and header composition

use tracing::debug;

/// Which pane the single-pane layout shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MobilePane {
    #[default]
    Chat,
    Editor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// One pane at a time, switched from the header menu
    Mobile(MobilePane),
    /// Chat and editor side by side with a draggable splitter
    Desktop,
}

/// Items rendered in the header bar, left to right after the title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    MenuToggle,
    ReadOnlyBadge,
    Supabase,
    GitHub,
    Publish,
}

impl HeaderAction {
    pub fn label(&self) -> &'static str {
        match self {
            HeaderAction::MenuToggle => "Menu",
            HeaderAction::ReadOnlyBadge => "Read Only",
            HeaderAction::Supabase => "Supabase",
            HeaderAction::GitHub => "GitHub",
            HeaderAction::Publish => "Publish",
        }
    }

    /// Whether clicking the item does anything
    pub fn is_interactive(&self) -> bool {
        matches!(self, HeaderAction::MenuToggle)
    }
}

pub const APP_TITLE: &str = "Eco-Code Assistant";

/// Header contents for a layout mode
pub fn header_actions(mode: LayoutMode) -> Vec<HeaderAction> {
    match mode {
        LayoutMode::Mobile(_) => vec![HeaderAction::MenuToggle, HeaderAction::ReadOnlyBadge],
        LayoutMode::Desktop => vec![
            HeaderAction::ReadOnlyBadge,
            HeaderAction::Supabase,
            HeaderAction::GitHub,
            HeaderAction::Publish,
        ],
    }
}

#[derive(Debug, Clone)]
pub struct LayoutState {
    breakpoint: f64,
    is_mobile: bool,
    pane: MobilePane,
}

impl LayoutState {
    /// Starts in desktop mode until the first viewport update
    pub fn new(breakpoint: f64) -> Self {
        Self {
            breakpoint,
            is_mobile: false,
            pane: MobilePane::default(),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.is_mobile
    }

    /// Returns true if the mode changed
    pub fn update_viewport(&mut self, width: f64) -> bool {
        if !width.is_finite() {
            return false;
        }
        let is_mobile = width < self.breakpoint;
        if is_mobile == self.is_mobile {
            return false;
        }
        debug!("Layout switched to {}", if is_mobile { "mobile" } else { "desktop" });
        self.is_mobile = is_mobile;
        true
    }

    /// Flip the mobile pane. Ignored on desktop, where both panes show.
    pub fn toggle_chat(&mut self) -> bool {
        if !self.is_mobile {
            return false;
        }
        self.pane = match self.pane {
            MobilePane::Chat => MobilePane::Editor,
            MobilePane::Editor => MobilePane::Chat,
        };
        true
    }

    pub fn mode(&self) -> LayoutMode {
        if self.is_mobile {
            LayoutMode::Mobile(self.pane)
        } else {
            LayoutMode::Desktop
        }
    }

    pub fn header_actions(&self) -> Vec<HeaderAction> {
        header_actions(self.mode())
    }
}
