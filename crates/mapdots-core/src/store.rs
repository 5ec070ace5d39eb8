//! Dot store
//!
//! The `DotStore` owns the ordered dots collection and the current
//! selection, and writes the whole collection back to its persistence
//! adapter after every change.
//!
//! ## Failure model
//!
//! Nothing here returns an error. A slot that cannot be read starts the
//! store empty; a write that fails is logged and dropped, and the in-memory
//! collection stays authoritative. Operations on ids that are not in the
//! collection do nothing and report `false`.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = DotStore::init(JsonFilePersistence::from_config(&config));
//!
//! let dot = store.create(50.0, 50.0);
//! store.update_content(&dot.id, ContentField::Title, "Harbor");
//! store.drag_by(&dot.id, 100.0, 50.0, Rect::new(0.0, 0.0, 1000.0, 500.0));
//! ```

use tracing::{debug, info, warn};

use crate::geometry::{Pointer, Rect};
use crate::models::{generate_dot_id, ContentField, Dot};
use crate::storage::DotPersistence;

/// Owned dots collection synchronized to a persistence slot
#[derive(Debug)]
pub struct DotStore<P: DotPersistence> {
    /// Dots in insertion order
    dots: Vec<Dot>,
    /// Id of the dot being edited or viewed
    selected: Option<String>,
    persistence: P,
}

impl<P: DotPersistence> DotStore<P> {
    /// Load the collection once from `persistence`
    ///
    /// Missing or unreadable data yields an empty store.
    pub fn init(persistence: P) -> Self {
        let dots = match persistence.load() {
            Ok(Some(dots)) => {
                info!(count = dots.len(), "Loaded dots");
                dots
            }
            Ok(None) => {
                info!("No stored dots, starting empty");
                Vec::new()
            }
            Err(e) => {
                warn!("Could not load dots, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            dots,
            selected: None,
            persistence,
        }
    }

    // ==================== Queries ====================

    /// All dots in insertion order
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Look up a dot by id
    pub fn get(&self, id: &str) -> Option<&Dot> {
        self.dots.iter().find(|d| d.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The selected id, even if that dot no longer exists
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected dot, if the selection points at an existing dot
    pub fn selected(&self) -> Option<&Dot> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    /// The persistence adapter
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    // ==================== Mutations ====================

    /// Add a dot with default content and select it
    pub fn create(&mut self, x: f64, y: f64) -> Dot {
        let mut dot = Dot::new(x, y);
        while self.contains(&dot.id) {
            dot.id = generate_dot_id();
        }

        debug!(id = %dot.id, x = dot.x, y = dot.y, "Created dot");
        self.dots.push(dot.clone());
        self.selected = Some(dot.id.clone());
        self.persist();
        dot
    }

    /// Add a dot where the pointer is, relative to the image box
    ///
    /// Returns `None` if `rect` has no usable size.
    pub fn create_at_pointer(&mut self, pointer: Pointer, rect: Rect) -> Option<Dot> {
        match rect.to_percent(pointer) {
            Some((x, y)) => Some(self.create(x, y)),
            None => {
                debug!(?rect, "Ignoring click on unsized map");
                None
            }
        }
    }

    /// Replace one content field of a dot
    pub fn update_content(&mut self, id: &str, field: ContentField, value: impl Into<String>) -> bool {
        let Some(dot) = self.dot_mut(id) else {
            debug!(id, %field, "Ignoring content update for missing dot");
            return false;
        };
        dot.content.set(field, value);
        self.persist();
        true
    }

    /// Replace one content field of the selected dot
    pub fn update_selected_content(&mut self, field: ContentField, value: impl Into<String>) -> bool {
        match self.selected.clone() {
            Some(id) => self.update_content(&id, field, value),
            None => false,
        }
    }

    /// Move a dot to an absolute position, clamped to the image
    pub fn move_to(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(dot) = self.dot_mut(id) else {
            debug!(id, "Ignoring move for missing dot");
            return false;
        };
        dot.set_position(x, y);
        self.persist();
        true
    }

    /// Move a dot by a percentage delta, clamped to the image
    pub fn move_by(&mut self, id: &str, dx: f64, dy: f64) -> bool {
        let Some(dot) = self.dot_mut(id) else {
            debug!(id, "Ignoring move for missing dot");
            return false;
        };
        dot.translate(dx, dy);
        self.persist();
        true
    }

    /// Move a dot by a pixel delta measured against the image box
    pub fn drag_by(&mut self, id: &str, dx: f64, dy: f64, rect: Rect) -> bool {
        match rect.delta_to_percent(dx, dy) {
            Some((dx, dy)) => self.move_by(id, dx, dy),
            None => {
                debug!(?rect, "Ignoring drag on unsized map");
                false
            }
        }
    }

    /// Remove a dot, clearing the selection if it pointed at it
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(pos) = self.dots.iter().position(|d| d.id == id) else {
            debug!(id, "Ignoring delete for missing dot");
            return false;
        };
        self.dots.remove(pos);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        debug!(id, "Deleted dot");
        self.persist();
        true
    }

    /// Remove the selected dot
    pub fn delete_selected(&mut self) -> bool {
        match self.selected.clone() {
            Some(id) => self.delete(&id),
            None => false,
        }
    }

    /// Change which dot is active; never persisted
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    fn dot_mut(&mut self, id: &str) -> Option<&mut Dot> {
        self.dots.iter_mut().find(|d| d.id == id)
    }

    fn persist(&mut self) {
        if let Err(e) = self.persistence.save(&self.dots) {
            warn!("Could not save dots: {}", e);
        }
    }
}
