//! Bridge between GPUI and the workbench state
//!
//! GPUI owns the main thread; the workbench timers run on a tokio runtime
//! owned here. The window calls [`WorkbenchModel::poll_and_process_updates`]
//! on a fixed interval to apply fired timers.

use ecocode_core::storage::{KeyValueStore, MemoryStore, Storage};
use ecocode_core::{Clipboard, Error, Workbench, WorkbenchConfig};
use std::path::Path;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{info, warn};

// ============================================================================
// System Clipboard
// ============================================================================

/// Clipboard backed by the OS clipboard
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> ecocode_core::Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Open the settings database under `data_dir`, or an in-memory store if that fails
pub fn open_store(data_dir: &Path) -> Arc<dyn KeyValueStore> {
    match Storage::new_with_path(data_dir) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            warn!("Failed to open storage, using in-memory: {}", e);
            Arc::new(MemoryStore::new())
        }
    }
}

// ============================================================================
// Workbench Model (GPUI wrapper)
// ============================================================================

/// Workbench plus the runtime its timers run on
pub struct WorkbenchModel {
    pub workbench: Workbench,
    pub runtime: Arc<Runtime>,
}

impl WorkbenchModel {
    pub fn new(config: WorkbenchConfig, data_dir: &Path) -> anyhow::Result<Self> {
        let runtime = Arc::new(Runtime::new()?);
        Ok(Self::with_runtime(runtime, config, open_store(data_dir)))
    }

    pub fn with_runtime(
        runtime: Arc<Runtime>,
        config: WorkbenchConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let workbench = Workbench::new(
            config,
            runtime.handle().clone(),
            store,
            Arc::new(SystemClipboard),
        );
        Self { workbench, runtime }
    }

    /// Apply fired timers; true if the window should redraw
    pub fn poll_and_process_updates(&mut self) -> bool {
        self.workbench.poll_and_process_updates()
    }

    /// Send the composing buffer
    pub fn send_message(&mut self) -> bool {
        self.workbench.chat_mut().send().is_some()
    }

    /// Copy a message, logging clipboard failures
    pub fn copy_message(&mut self, id: &str) -> bool {
        match self.workbench.chat_mut().copy(id) {
            Ok(copied) => copied,
            Err(e) => {
                warn!("Failed to copy message {}: {}", id, e);
                false
            }
        }
    }
}

impl Drop for WorkbenchModel {
    fn drop(&mut self) {
        info!("Closing workbench");
        self.workbench.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const KEY: &str = "ecocode.layout.chat_panel_size";

    #[test]
    fn test_open_store_persists_on_disk() {
        let dir = tempdir().unwrap();
        open_store(dir.path()).set(KEY, "35").unwrap();

        assert_eq!(open_store(dir.path()).get(KEY).unwrap().as_deref(), Some("35"));
        assert!(dir.path().join("ecocode.db").exists());
    }

    #[test]
    fn test_open_store_falls_back_to_memory() {
        let dir = tempdir().unwrap();
        // A regular file where the data directory should be
        let blocked = dir.path().join("not-a-dir");
        std::fs::write(&blocked, b"").unwrap();

        let store = open_store(&blocked);
        store.set(KEY, "40").unwrap();
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("40"));
    }

    #[test]
    fn test_model_restores_chat_panel_size() {
        let dir = tempdir().unwrap();
        {
            let mut model = WorkbenchModel::new(WorkbenchConfig::default(), dir.path()).unwrap();
            model.workbench.chat_panel_mut().set_size(45.0);
        }

        let model = WorkbenchModel::new(WorkbenchConfig::default(), dir.path()).unwrap();
        assert_eq!(model.workbench.chat_panel().size(), 45.0);
    }

    #[test]
    fn test_blank_send_is_ignored() {
        let dir = tempdir().unwrap();
        let mut model = WorkbenchModel::new(WorkbenchConfig::default(), dir.path()).unwrap();
        model.workbench.chat_mut().set_input("   ");
        assert!(!model.send_message());
        assert!(!model.copy_message("missing"));
    }
}
