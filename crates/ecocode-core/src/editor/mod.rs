//! Code / preview / console shell
//!
//! `run()` drives a scripted build: building for a while, then switching to the
//! preview tab while the preview "loads", then idle again.

mod content;

pub use content::{console_log, PreviewCard, PreviewPage, CODE_SNIPPET, PREVIEW_PAGE};

use crate::config::WorkbenchConfig;
use crate::timer::TimerScope;
use crate::types::EditorTab;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildEvent {
    BuildFinished,
    PreviewLoaded,
}

/// State of the editor panel
pub struct EditorShell {
    active_tab: EditorTab,
    is_building: bool,
    is_loading: bool,
    is_full_width: bool,
    open_file: Option<String>,
    build_delay: Duration,
    preview_load: Duration,
    timers: TimerScope<BuildEvent>,
}

impl EditorShell {
    pub fn new(config: &WorkbenchConfig, runtime: Handle) -> Self {
        Self {
            active_tab: EditorTab::Code,
            is_building: false,
            is_loading: false,
            is_full_width: false,
            open_file: None,
            build_delay: config.build_delay(),
            preview_load: config.preview_load(),
            timers: TimerScope::new("build", runtime),
        }
    }

    pub fn active_tab(&self) -> EditorTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: EditorTab) {
        self.active_tab = tab;
    }

    pub fn is_building(&self) -> bool {
        self.is_building
    }

    /// Whether the preview is showing its loading state
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the code pane hides the file explorer
    pub fn is_full_width(&self) -> bool {
        self.is_full_width
    }

    pub fn toggle_full_width(&mut self) {
        self.is_full_width = !self.is_full_width;
    }

    /// Label of the file picked in the explorer
    pub fn open_file(&self) -> Option<&str> {
        self.open_file.as_deref()
    }

    pub fn set_open_file(&mut self, label: impl Into<String>) {
        self.open_file = Some(label.into());
    }

    pub fn run_label(&self) -> &'static str {
        if self.is_building {
            "Building..."
        } else {
            "Run"
        }
    }

    /// Start the scripted build. Ignored while a build is in progress.
    pub fn run(&mut self) -> bool {
        if self.is_building {
            debug!("Run ignored, build already in progress");
            return false;
        }
        info!("Starting build");
        self.is_building = true;
        self.timers.schedule(self.build_delay, BuildEvent::BuildFinished);
        true
    }

    /// Apply fired timers. Returns true if anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for event in self.timers.drain() {
            match event {
                BuildEvent::BuildFinished => {
                    info!("Build finished, loading preview");
                    self.is_building = false;
                    self.active_tab = EditorTab::Preview;
                    self.is_loading = true;
                    self.timers.schedule(self.preview_load, BuildEvent::PreviewLoaded);
                }
                BuildEvent::PreviewLoaded => {
                    self.is_loading = false;
                }
            }
            changed = true;
        }
        changed
    }

    /// Number of build steps still scheduled
    pub fn pending_steps(&self) -> usize {
        self.timers.pending()
    }

    /// Abort the build sequence and return to idle
    pub fn cancel_pending(&mut self) {
        self.timers.cancel_all();
        self.is_building = false;
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> EditorShell {
        EditorShell::new(&WorkbenchConfig::default(), Handle::current())
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state() {
        let editor = shell();
        assert_eq!(editor.active_tab(), EditorTab::Code);
        assert!(!editor.is_building());
        assert!(!editor.is_loading());
        assert!(!editor.is_full_width());
        assert_eq!(editor.run_label(), "Run");
    }

    #[tokio::test(start_paused = true)]
    async fn test_build_sequence() {
        let mut editor = shell();
        editor.set_tab(EditorTab::Console);

        assert!(editor.run());
        assert!(editor.is_building());
        assert_eq!(editor.run_label(), "Building...");

        advance(1499).await;
        assert!(!editor.poll());
        assert!(editor.is_building());
        assert_eq!(editor.active_tab(), EditorTab::Console);

        advance(2).await;
        assert!(editor.poll());
        assert!(!editor.is_building());
        assert!(editor.is_loading());
        assert_eq!(editor.active_tab(), EditorTab::Preview);

        advance(1199).await;
        editor.poll();
        assert!(editor.is_loading());

        advance(2).await;
        assert!(editor.poll());
        assert!(!editor.is_loading());
        assert_eq!(editor.pending_steps(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_while_building_is_ignored() {
        let mut editor = shell();
        assert!(editor.run());
        advance(500).await;

        assert!(!editor.run());
        assert!(editor.is_building());
        assert_eq!(editor.pending_steps(), 1);

        // Only one BuildFinished arrives, still at the original deadline
        advance(1001).await;
        assert!(editor.poll());
        assert!(!editor.is_building());
        assert_eq!(editor.pending_steps(), 1);

        advance(1201).await;
        editor.poll();
        assert!(!editor.is_loading());
        assert_eq!(editor.pending_steps(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_allowed_while_preview_loading() {
        let mut editor = shell();
        editor.run();
        advance(1501).await;
        editor.poll();
        assert!(editor.is_loading());

        assert!(editor.run());
        assert!(editor.is_building());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tab_switch_has_no_side_effects() {
        let mut editor = shell();
        for tab in EditorTab::ALL {
            editor.set_tab(tab);
            assert_eq!(editor.active_tab(), tab);
            assert!(!editor.is_building());
            assert!(!editor.is_loading());
        }
        assert_eq!(editor.pending_steps(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_stops_build() {
        let mut editor = shell();
        editor.run();
        editor.cancel_pending();
        assert!(!editor.is_building());

        advance(3000).await;
        assert!(!editor.poll());
        assert_eq!(editor.active_tab(), EditorTab::Code);
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_width_toggle() {
        let mut editor = shell();
        editor.toggle_full_width();
        assert!(editor.is_full_width());
        editor.toggle_full_width();
        assert!(!editor.is_full_width());
    }
}
