//! Resizable panel sizing
//!
//! A [`ResizablePanel`] tracks one percentage size, clamped to the configured
//! range and written through to a [`KeyValueStore`] on every change. During a
//! drag it owns the window cursor hint through a [`CursorLease`].

mod cursor;

pub use cursor::{CursorHint, CursorLease, ResizeCursor};

use crate::error::PanelError;
use crate::storage::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// Axis along which a panel is resized
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    pub fn cursor(&self) -> ResizeCursor {
        match self {
            Direction::Horizontal => ResizeCursor::EastWest,
            Direction::Vertical => ResizeCursor::NorthSouth,
        }
    }
}

/// Sizing configuration for one panel. Sizes are percentages of the viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelConfig {
    pub initial_size: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub direction: Direction,
    pub storage_key: Option<String>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            initial_size: 50.0,
            min_size: 20.0,
            max_size: 80.0,
            direction: Direction::Horizontal,
            storage_key: None,
        }
    }
}

impl PanelConfig {
    /// Constrain `value` to `[min_size, max_size]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min_size).min(self.max_size)
    }
}

/// A point in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Window extents used as the 100% reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pointer input delivered while dragging
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Mouse(Point),
    /// Active touch points; only single-touch gestures resize
    Touch(Vec<Point>),
}

impl PointerEvent {
    fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Mouse(point) => Some(*point),
            PointerEvent::Touch(points) if points.len() == 1 => Some(points[0]),
            PointerEvent::Touch(_) => None,
        }
    }
}

/// Size state of one resizable panel
pub struct ResizablePanel {
    config: PanelConfig,
    size: f64,
    store: Arc<dyn KeyValueStore>,
    cursor: CursorHint,
    drag: Option<CursorLease>,
}

impl ResizablePanel {
    /// Build a panel, restoring the persisted size when one is available
    pub fn configure(config: PanelConfig, store: Arc<dyn KeyValueStore>, cursor: CursorHint) -> Self {
        let size = Self::restore_size(&config, store.as_ref());
        debug!("Configured panel {:?} at {}%", config.storage_key, size);

        let panel = Self {
            config,
            size,
            store,
            cursor,
            drag: None,
        };
        panel.persist();
        panel
    }

    fn restore_size(config: &PanelConfig, store: &dyn KeyValueStore) -> f64 {
        let fallback = config.clamp(config.initial_size);
        let Some(key) = config.storage_key.as_deref() else {
            return fallback;
        };

        let stored = match store.get(key) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read panel size {:?}: {}", key, e);
                None
            }
        };

        match stored.map(|value| parse_stored_size(key, &value)) {
            Some(Ok(size)) => config.clamp(size),
            Some(Err(e)) => {
                warn!("{}; using {}%", e, fallback);
                fallback
            }
            None => fallback,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Current size in percent
    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn is_resizing(&self) -> bool {
        self.drag.is_some()
    }

    /// Begin a drag gesture and take the cursor hint
    pub fn start(&mut self) {
        if self.drag.is_none() {
            self.drag = Some(self.cursor.acquire(self.config.direction.cursor()));
        }
    }

    /// Finish the drag gesture and release the cursor hint
    pub fn end(&mut self) {
        self.drag = None;
    }

    /// Track a pointer move. Ignored unless a drag is in progress.
    ///
    /// Returns true when the size changed.
    pub fn pointer_moved(&mut self, event: &PointerEvent, viewport: Viewport) -> bool {
        if !self.is_resizing() {
            return false;
        }
        let Some(point) = event.position() else {
            return false;
        };

        let (position, extent) = match self.config.direction {
            Direction::Horizontal => (point.x, viewport.width),
            Direction::Vertical => (point.y, viewport.height),
        };
        if !position.is_finite() || !extent.is_finite() || extent <= 0.0 {
            return false;
        }

        self.apply(position / extent * 100.0)
    }

    /// Set the size directly; clamped into range, non-finite values ignored
    pub fn set_size(&mut self, value: f64) -> bool {
        if !value.is_finite() {
            return false;
        }
        self.apply(value)
    }

    fn apply(&mut self, value: f64) -> bool {
        let size = self.config.clamp(value);
        if size == self.size {
            return false;
        }
        self.size = size;
        self.persist();
        true
    }

    fn persist(&self) {
        if let Some(key) = self.config.storage_key.as_deref() {
            if let Err(e) = self.store.set(key, &self.size.to_string()) {
                warn!("Failed to persist panel size {:?}: {}", key, e);
            }
        }
    }
}

/// Parse a stored size, accepting only finite numbers
fn parse_stored_size(key: &str, value: &str) -> Result<f64, PanelError> {
    match value.trim().parse::<f64>() {
        Ok(size) if size.is_finite() => Ok(size),
        _ => Err(PanelError::InvalidPersistedState {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
