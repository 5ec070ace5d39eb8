//! Pointer interaction session
//!
//! Hosts forward raw pointer events here. The session gates them on the
//! view/edit mode, tracks the drag in progress, and turns them into
//! [`DotStore`] calls. The store itself knows nothing about modes.
//!
//! Drags use delta encoding: every move event shifts the dot by the pointer
//! travel since the previous event, measured against the image box reported
//! with that event, and the store clamps after every step.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geometry::{Pointer, Rect};
use crate::models::{ContentField, Dot};
use crate::storage::DotPersistence;
use crate::store::DotStore;

/// Interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Inspect dots only
    #[default]
    View,
    /// Create, drag and edit dots
    Edit,
}

/// A drag in progress
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub id: String,
    pub last: Pointer,
}

/// One host event, as recorded in a replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InteractionEvent {
    SetMode { mode: Mode },
    ToggleMode,
    MapClick { x: f64, y: f64, rect: Rect },
    DotClick { id: String },
    /// Without an id the drag grabs the selected dot
    DragStart {
        #[serde(default)]
        id: Option<String>,
        x: f64,
        y: f64,
    },
    DragMove { x: f64, y: f64, rect: Rect },
    DragEnd,
    CloseModal,
    Select { id: Option<String> },
    UpdateSelected { field: ContentField, value: String },
    DeleteSelected,
}

/// Mode, drag and modal state wrapped around a store
#[derive(Debug)]
pub struct Session<P: DotPersistence> {
    store: DotStore<P>,
    mode: Mode,
    drag: Option<DragState>,
    modal_open: bool,
}

impl<P: DotPersistence> Session<P> {
    /// Start in view mode
    pub fn new(store: DotStore<P>) -> Self {
        Self {
            store,
            mode: Mode::View,
            drag: None,
            modal_open: false,
        }
    }

    pub fn store(&self) -> &DotStore<P> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DotStore<P> {
        &mut self.store
    }

    pub fn into_store(self) -> DotStore<P> {
        self.store
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    /// The dot the detail modal shows, if it is open
    pub fn modal_dot(&self) -> Option<&Dot> {
        if self.modal_open {
            self.store.selected()
        } else {
            None
        }
    }

    /// Switch modes; leaving edit mode drops the selection and any drag
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == Mode::Edit && mode == Mode::View {
            self.store.select(None);
            self.drag = None;
        }
        self.mode = mode;
        debug!(?mode, "Mode changed");
    }

    pub fn toggle_mode(&mut self) {
        let next = match self.mode {
            Mode::View => Mode::Edit,
            Mode::Edit => Mode::View,
        };
        self.set_mode(next);
    }

    /// Click on empty map: place a dot in edit mode
    pub fn map_click(&mut self, pointer: Pointer, rect: Rect) -> Option<Dot> {
        if self.mode != Mode::Edit {
            return None;
        }
        self.store.create_at_pointer(pointer, rect)
    }

    /// Click on a dot: select it, and in view mode open its details
    pub fn dot_click(&mut self, id: &str) {
        match self.mode {
            Mode::Edit => self.store.select(Some(id)),
            Mode::View => {
                if self.store.contains(id) {
                    self.store.select(Some(id));
                    self.modal_open = true;
                }
            }
        }
    }

    /// Press on a dot; returns whether a drag began
    pub fn drag_start(&mut self, id: &str, pointer: Pointer) -> bool {
        if self.mode != Mode::Edit || !self.store.contains(id) {
            return false;
        }
        debug!(id, "Drag started");
        self.drag = Some(DragState {
            id: id.to_string(),
            last: pointer,
        });
        true
    }

    /// Pointer moved; returns whether a dot moved
    pub fn drag_move(&mut self, pointer: Pointer, rect: Rect) -> bool {
        let Some(drag) = self.drag.as_mut() else {
            return false;
        };
        let (dx, dy) = pointer.delta_from(drag.last);
        drag.last = pointer;
        let id = drag.id.clone();
        self.store.drag_by(&id, dx, dy, rect)
    }

    /// Mouse-up, touch-end or pointer-leave
    pub fn drag_end(&mut self) {
        if let Some(drag) = self.drag.take() {
            debug!(id = %drag.id, "Drag ended");
        }
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Dispatch a recorded event
    pub fn apply(&mut self, event: InteractionEvent) {
        match event {
            InteractionEvent::SetMode { mode } => self.set_mode(mode),
            InteractionEvent::ToggleMode => self.toggle_mode(),
            InteractionEvent::MapClick { x, y, rect } => {
                self.map_click(Pointer::new(x, y), rect);
            }
            InteractionEvent::DotClick { id } => self.dot_click(&id),
            InteractionEvent::DragStart { id, x, y } => {
                let id = id.or_else(|| self.store.selected_id().map(str::to_string));
                if let Some(id) = id {
                    self.drag_start(&id, Pointer::new(x, y));
                }
            }
            InteractionEvent::DragMove { x, y, rect } => {
                self.drag_move(Pointer::new(x, y), rect);
            }
            InteractionEvent::DragEnd => self.drag_end(),
            InteractionEvent::CloseModal => self.close_modal(),
            InteractionEvent::Select { id } => self.store.select(id.as_deref()),
            InteractionEvent::UpdateSelected { field, value } => {
                self.store.update_selected_content(field, value);
            }
            InteractionEvent::DeleteSelected => {
                self.store.delete_selected();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemorySlot;

    const RECT: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 1000.0,
        height: 500.0,
    };

    fn session() -> Session<MemorySlot> {
        Session::new(DotStore::init(MemorySlot::new("k")))
    }

    #[test]
    fn test_starts_in_view_mode() {
        let s = session();
        assert_eq!(s.mode(), Mode::View);
        assert!(!s.is_dragging());
        assert!(!s.is_modal_open());
    }

    #[test]
    fn test_view_mode_click_does_not_create() {
        let mut s = session();
        assert!(s.map_click(Pointer::new(500.0, 250.0), RECT).is_none());
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_edit_mode_click_creates_and_selects() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let dot = s.map_click(Pointer::new(500.0, 250.0), RECT).unwrap();
        assert_eq!((dot.x, dot.y), (50.0, 50.0));
        assert_eq!(s.store().selected_id(), Some(dot.id.as_str()));
    }

    #[test]
    fn test_leaving_edit_mode_clears_selection_and_drag() {
        let mut s = session();
        s.toggle_mode();
        let dot = s.map_click(Pointer::new(100.0, 100.0), RECT).unwrap();
        assert!(s.drag_start(&dot.id, Pointer::new(100.0, 100.0)));

        s.toggle_mode();
        assert_eq!(s.mode(), Mode::View);
        assert!(s.store().selected_id().is_none());
        assert!(!s.is_dragging());
    }

    #[test]
    fn test_drag_moves_by_pointer_delta() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let dot = s.map_click(Pointer::new(500.0, 250.0), RECT).unwrap();

        assert!(s.drag_start(&dot.id, Pointer::new(500.0, 250.0)));
        assert!(s.drag_move(Pointer::new(550.0, 275.0), RECT));
        assert!(s.drag_move(Pointer::new(600.0, 300.0), RECT));
        s.drag_end();

        let moved = s.store().get(&dot.id).unwrap();
        assert_eq!((moved.x, moved.y), (60.0, 60.0));
    }

    #[test]
    fn test_drag_clamps_then_returns_from_edge() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let dot = s.map_click(Pointer::new(900.0, 250.0), RECT).unwrap();

        s.drag_start(&dot.id, Pointer::new(900.0, 250.0));
        s.drag_move(Pointer::new(1400.0, 250.0), RECT);
        assert_eq!(s.store().get(&dot.id).unwrap().x, 100.0);

        // Pointer comes back: the dot follows the travel, not the pointer
        s.drag_move(Pointer::new(1350.0, 250.0), RECT);
        assert_eq!(s.store().get(&dot.id).unwrap().x, 95.0);
    }

    #[test]
    fn test_drag_end_stops_movement() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let dot = s.map_click(Pointer::new(100.0, 100.0), RECT).unwrap();

        s.drag_start(&dot.id, Pointer::new(100.0, 100.0));
        s.drag_end();
        assert!(!s.drag_move(Pointer::new(300.0, 300.0), RECT));
        assert_eq!(s.store().get(&dot.id).unwrap().x, 10.0);
    }

    #[test]
    fn test_drag_requires_edit_mode_and_existing_dot() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let dot = s.map_click(Pointer::new(100.0, 100.0), RECT).unwrap();
        assert!(!s.drag_start("dot_missing", Pointer::new(0.0, 0.0)));

        s.set_mode(Mode::View);
        assert!(!s.drag_start(&dot.id, Pointer::new(100.0, 100.0)));
    }

    #[test]
    fn test_dot_deleted_mid_drag() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let dot = s.map_click(Pointer::new(100.0, 100.0), RECT).unwrap();
        s.drag_start(&dot.id, Pointer::new(100.0, 100.0));

        s.store_mut().delete(&dot.id);
        assert!(!s.drag_move(Pointer::new(200.0, 200.0), RECT));
        assert!(s.store().is_empty());
    }

    #[test]
    fn test_view_mode_click_opens_modal() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let dot = s.map_click(Pointer::new(100.0, 100.0), RECT).unwrap();
        s.set_mode(Mode::View);

        s.dot_click("dot_missing");
        assert!(!s.is_modal_open());

        s.dot_click(&dot.id);
        assert!(s.is_modal_open());
        assert_eq!(s.modal_dot().unwrap().id, dot.id);

        s.close_modal();
        assert!(s.modal_dot().is_none());
    }

    #[test]
    fn test_edit_mode_click_selects_without_modal() {
        let mut s = session();
        s.set_mode(Mode::Edit);
        let first = s.map_click(Pointer::new(100.0, 100.0), RECT).unwrap();
        s.map_click(Pointer::new(200.0, 200.0), RECT).unwrap();

        s.dot_click(&first.id);
        assert_eq!(s.store().selected_id(), Some(first.id.as_str()));
        assert!(!s.is_modal_open());
    }

    #[test]
    fn test_apply_replayed_events() {
        let script = r#"[
            {"type": "setMode", "mode": "edit"},
            {"type": "mapClick", "x": 500, "y": 250, "rect": {"left": 0, "top": 0, "width": 1000, "height": 500}},
            {"type": "updateSelected", "field": "title", "value": "Golan"},
            {"type": "dragStart", "x": 500, "y": 250},
            {"type": "dragMove", "x": 400, "y": 200, "rect": {"left": 0, "top": 0, "width": 1000, "height": 500}},
            {"type": "dragEnd"},
            {"type": "toggleMode"}
        ]"#;
        let events: Vec<InteractionEvent> = serde_json::from_str(script).unwrap();

        let mut s = session();
        for event in events {
            s.apply(event);
        }

        assert_eq!(s.mode(), Mode::View);
        assert_eq!(s.store().len(), 1);
        assert_eq!(s.store().dots()[0].content.title, "Golan");
        assert_eq!((s.store().dots()[0].x, s.store().dots()[0].y), (40.0, 40.0));
        assert!(s.store().selected_id().is_none());
    }
}
