//! Workbench: the composed application state
//!
//! Owns every component plus the shared cursor hint, and is the only place
//! where components talk to each other. The UI holds one `Workbench`, calls
//! its methods from event handlers and pumps [`Workbench::poll_and_process_updates`]
//! on a fixed interval.

use crate::chat::{ChatSession, Clipboard};
use crate::config::WorkbenchConfig;
use crate::editor::EditorShell;
use crate::layout::LayoutState;
use crate::panel::{CursorHint, ResizablePanel, ResizeCursor};
use crate::storage::KeyValueStore;
use crate::tree::FileTree;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info};

pub struct Workbench {
    config: WorkbenchConfig,
    chat: ChatSession,
    files: FileTree,
    editor: EditorShell,
    layout: LayoutState,
    chat_panel: ResizablePanel,
    cursor: CursorHint,
}

impl Workbench {
    pub fn new(
        config: WorkbenchConfig,
        runtime: Handle,
        store: Arc<dyn KeyValueStore>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        let cursor = CursorHint::new();
        let chat_panel = ResizablePanel::configure(config.chat_panel.clone(), store, cursor.clone());

        let files = FileTree::sample();
        let mut editor = EditorShell::new(&config, runtime.clone());
        if let Some(node) = files.selected_node() {
            editor.set_open_file(node.display_name());
        }

        info!("Workbench ready (chat panel at {}%)", chat_panel.size());
        Self {
            chat: ChatSession::new(&config, runtime, clipboard),
            layout: LayoutState::new(config.mobile_breakpoint),
            config,
            files,
            editor,
            chat_panel,
            cursor,
        }
    }

    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn chat_mut(&mut self) -> &mut ChatSession {
        &mut self.chat
    }

    pub fn files(&self) -> &FileTree {
        &self.files
    }

    pub fn editor(&self) -> &EditorShell {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorShell {
        &mut self.editor
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut LayoutState {
        &mut self.layout
    }

    pub fn chat_panel(&self) -> &ResizablePanel {
        &self.chat_panel
    }

    pub fn chat_panel_mut(&mut self) -> &mut ResizablePanel {
        &mut self.chat_panel
    }

    /// Cursor the window should show, if a drag holds the hint
    pub fn cursor_hint(&self) -> Option<ResizeCursor> {
        self.cursor.current()
    }

    pub fn toggle_folder(&mut self, id: &str) {
        self.files.toggle_folder(id);
    }

    /// Select a file in the explorer and show its name in the editor
    pub fn select_file(&mut self, id: &str) -> bool {
        if !self.files.select_by_id(id) {
            return false;
        }
        if let Some(node) = self.files.selected_node() {
            self.editor.set_open_file(node.display_name());
        }
        true
    }

    /// Handle a click on an explorer row: folders toggle, files select
    pub fn click_row(&mut self, id: &str) -> bool {
        match self.files.find(id) {
            Some(node) if node.is_folder() => {
                self.files.toggle_folder(id);
                true
            }
            Some(_) => self.select_file(id),
            None => {
                debug!("Click on unknown row {}", id);
                false
            }
        }
    }

    /// Apply fired timers across components. Returns true if a redraw is needed.
    pub fn poll_and_process_updates(&mut self) -> bool {
        let chat_changed = self.chat.poll();
        let editor_changed = self.editor.poll();
        chat_changed || editor_changed
    }

    /// Cancel all scheduled work and release the cursor
    pub fn shutdown(&mut self) {
        info!("Shutting down workbench");
        self.chat.cancel_pending();
        self.editor.cancel_pending();
        self.chat_panel.end();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::{MockClipboard, WELCOME_MESSAGE_ID};
    use crate::config::{CHAT_PANEL_STORAGE_KEY, DEFAULT_CANNED_REPLY};
    use crate::layout::{LayoutMode, MobilePane};
    use crate::panel::{Point, PointerEvent, Viewport};
    use crate::storage::{MemoryStore, Storage};
    use crate::types::{EditorTab, Sender};
    use std::time::Duration;

    fn workbench_with(store: Arc<dyn KeyValueStore>) -> Workbench {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().returning(|_| Ok(()));
        Workbench::new(WorkbenchConfig::default(), Handle::current(), store, Arc::new(clipboard))
    }

    fn workbench() -> Workbench {
        workbench_with(Arc::new(MemoryStore::new()))
    }

    async fn advance(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state() {
        let wb = workbench();
        assert_eq!(wb.chat().messages().len(), 1);
        assert_eq!(wb.chat().messages()[0].id, WELCOME_MESSAGE_ID);
        assert_eq!(wb.files().selected_file(), Some("3"));
        assert_eq!(wb.editor().open_file(), Some("Header.tsx"));
        assert_eq!(wb.editor().active_tab(), EditorTab::Code);
        assert_eq!(wb.chat_panel().size(), 30.0);
        assert_eq!(wb.layout().mode(), LayoutMode::Desktop);
        assert_eq!(wb.cursor_hint(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_round_trip_through_poll() {
        let mut wb = workbench();
        wb.chat_mut().set_input("hello");
        wb.chat_mut().send();

        advance(500).await;
        assert!(!wb.poll_and_process_updates());

        advance(501).await;
        assert!(wb.poll_and_process_updates());
        let messages = wb.chat().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "hello");
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert_eq!(messages[2].content, DEFAULT_CANNED_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_chat_and_build_progress_together() {
        let mut wb = workbench();
        wb.chat_mut().set_input("build it");
        wb.chat_mut().send();
        wb.editor_mut().run();

        advance(1001).await;
        assert!(wb.poll_and_process_updates());
        assert_eq!(wb.chat().messages().len(), 3);
        assert!(wb.editor().is_building());

        advance(500).await;
        assert!(wb.poll_and_process_updates());
        assert_eq!(wb.editor().active_tab(), EditorTab::Preview);
        assert!(wb.editor().is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn test_selecting_file_updates_editor_label() {
        let mut wb = workbench();
        assert!(wb.select_file("8"));
        assert_eq!(wb.files().selected_file(), Some("8"));
        assert_eq!(wb.editor().open_file(), Some("App.tsx"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_label_follows_each_selection() {
        let mut wb = workbench();
        assert!(wb.select_file("8"));
        assert!(wb.select_file("12"));
        assert_eq!(wb.editor().open_file(), Some("package.json"));

        // Reselecting the current file keeps the label
        assert!(wb.select_file("12"));
        assert_eq!(wb.editor().open_file(), Some("package.json"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_selecting_folder_changes_nothing() {
        let mut wb = workbench();
        assert!(!wb.select_file("2"));
        assert_eq!(wb.files().selected_file(), Some("3"));
        assert_eq!(wb.editor().open_file(), Some("Header.tsx"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_row_toggles_or_selects() {
        let mut wb = workbench();
        assert!(!wb.files().is_expanded("6"));
        assert!(wb.click_row("6"));
        assert!(wb.files().is_expanded("6"));

        assert!(wb.click_row("7"));
        assert_eq!(wb.editor().open_file(), Some("Index.tsx"));

        assert!(!wb.click_row("nope"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drag_sets_cursor_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let mut wb = workbench_with(store.clone());
        let viewport = Viewport {
            width: 1000.0,
            height: 800.0,
        };

        wb.chat_panel_mut().start();
        assert_eq!(wb.cursor_hint(), Some(ResizeCursor::EastWest));

        wb.chat_panel_mut()
            .pointer_moved(&PointerEvent::Mouse(Point { x: 250.0, y: 10.0 }), viewport);
        assert_eq!(wb.chat_panel().size(), 25.0);

        // Beyond the max
        wb.chat_panel_mut()
            .pointer_moved(&PointerEvent::Mouse(Point { x: 900.0, y: 10.0 }), viewport);
        assert_eq!(wb.chat_panel().size(), 50.0);

        wb.chat_panel_mut().end();
        assert_eq!(wb.cursor_hint(), None);
        assert_eq!(store.get(CHAT_PANEL_STORAGE_KEY).unwrap().as_deref(), Some("50"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_panel_size_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = Arc::new(Storage::new_with_path(dir.path()).unwrap());
            let mut wb = workbench_with(store);
            wb.chat_panel_mut().set_size(44.0);
        }

        let store = Arc::new(Storage::new_with_path(dir.path()).unwrap());
        let wb = workbench_with(store);
        assert_eq!(wb.chat_panel().size(), 44.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mobile_layout() {
        let mut wb = workbench();
        wb.layout_mut().update_viewport(375.0);
        assert_eq!(wb.layout().mode(), LayoutMode::Mobile(MobilePane::Chat));
        wb.layout_mut().toggle_chat();
        assert_eq!(wb.layout().mode(), LayoutMode::Mobile(MobilePane::Editor));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_suppresses_pending_work() {
        let mut wb = workbench();
        wb.chat_mut().set_input("hello");
        wb.chat_mut().send();
        wb.editor_mut().run();
        wb.chat_panel_mut().start();

        wb.shutdown();
        assert_eq!(wb.cursor_hint(), None);

        advance(5000).await;
        assert!(!wb.poll_and_process_updates());
        assert_eq!(wb.chat().messages().len(), 2);
        assert!(!wb.editor().is_building());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_workbench_clears_cursor() {
        let mut wb = workbench();
        let cursor = wb.cursor.clone();
        wb.chat_panel_mut().start();
        assert!(cursor.current().is_some());

        drop(wb);
        assert_eq!(cursor.current(), None);
    }
}
