//! Shared resize cursor hint

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Cursor shown while a splitter is being dragged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeCursor {
    /// Horizontal drag (`ew-resize`)
    EastWest,
    /// Vertical drag (`ns-resize`)
    NorthSouth,
}

#[derive(Debug, Default)]
struct Slot {
    owner: Option<u64>,
    cursor: Option<ResizeCursor>,
}

/// Window-wide cursor hint.
///
/// Clones share the same slot. The slot is only written through a
/// [`CursorLease`], which clears it again when dropped.
#[derive(Debug, Clone, Default)]
pub struct CursorHint {
    slot: Arc<Mutex<Slot>>,
    next_lease: Arc<AtomicU64>,
}

impl CursorHint {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor currently requested, if any
    pub fn current(&self) -> Option<ResizeCursor> {
        self.slot.lock().cursor
    }

    /// Take ownership of the hint for one gesture
    pub fn acquire(&self, cursor: ResizeCursor) -> CursorLease {
        let id = self.next_lease.fetch_add(1, Ordering::Relaxed);
        let mut slot = self.slot.lock();
        slot.owner = Some(id);
        slot.cursor = Some(cursor);
        CursorLease {
            hint: self.clone(),
            id,
        }
    }
}

/// Ownership of the cursor hint; releases it on drop
#[derive(Debug)]
pub struct CursorLease {
    hint: CursorHint,
    id: u64,
}

impl Drop for CursorLease {
    fn drop(&mut self) {
        let mut slot = self.hint.slot.lock();
        // A newer gesture may have taken over the slot.
        if slot.owner == Some(self.id) {
            slot.owner = None;
            slot.cursor = None;
        }
    }
}
