//! Shared board storage - the single source of truth for canvases,
//! widgets, the active canvas, and the widget selection.
//!
//! [`BoardStore`] is a cheap-to-clone handle; components that mutate state
//! (settings panel, interaction controller) receive their own clone at
//! construction instead of reaching for ambient shared state. All reads
//! return cloned snapshots, so values handed out earlier are never mutated
//! behind a caller's back.
//!
//! Mutations that target an unknown canvas or widget id are silent no-ops
//! reporting `false`: ids always come from a render of current store state,
//! so a miss means the view was stale, not that the user did something
//! wrong.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, CanvasId};
use crate::config::WidgetKind;
use crate::widget::{Position, Size, Widget, WidgetId};

/// Name used when creating a canvas without an explicit name.
pub const DEFAULT_CANVAS_NAME: &str = "New Canvas";

/// Name of the canvas seeded at startup.
const SEED_CANVAS_NAME: &str = "Main Canvas";

/// The widget currently targeted by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Canvas the selected widget lives on.
    pub canvas_id: CanvasId,
    /// The selected widget.
    pub widget_id: WidgetId,
}

#[derive(Debug)]
struct BoardState {
    /// All canvases, in creation order.
    canvases: Vec<Canvas>,
    /// The canvas currently displayed and targeted by widget adds.
    /// Invariant: always the id of a canvas in `canvases`.
    active: CanvasId,
    /// Current widget selection, if any.
    selection: Option<Selection>,
    /// Whether the settings view is open for the selection.
    settings_open: bool,
}

/// Cloneable handle to the shared board state.
///
/// # Example
///
/// ```
/// use canvas_board::{BoardStore, WidgetKind};
///
/// let store = BoardStore::new();
/// let canvas_id = store.active_canvas_id();
///
/// let widget_id = store
///     .add_widget(canvas_id, WidgetKind::TextEditor)
///     .expect("seeded canvas exists");
///
/// assert!(store.select_widget(canvas_id, widget_id));
/// ```
#[derive(Debug, Clone)]
pub struct BoardStore {
    state: Arc<RwLock<BoardState>>,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore {
    /// Create a store seeded with one canvas named "Main Canvas", which
    /// becomes the active canvas.
    #[must_use]
    pub fn new() -> Self {
        let canvas = Canvas::new(SEED_CANVAS_NAME);
        let active = canvas.id;
        Self {
            state: Arc::new(RwLock::new(BoardState {
                canvases: vec![canvas],
                active,
                selection: None,
                settings_open: false,
            })),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BoardState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BoardState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------------
    // Canvas operations
    // -----------------------------------------------------------------------

    /// Create a new empty canvas and make it active. Always succeeds.
    pub fn create_canvas(&self, name: &str) -> CanvasId {
        let canvas = Canvas::new(name);
        let id = canvas.id;
        let mut state = self.write();
        state.canvases.push(canvas);
        state.active = id;
        tracing::debug!(canvas = %id, name, "created canvas");
        id
    }

    /// Delete a canvas and all its widgets.
    ///
    /// Rejected (returns `false`) when only one canvas remains, so the
    /// canvas list can never become empty. If the deleted canvas was
    /// active, the first remaining canvas becomes active. A selection
    /// pointing into the deleted canvas is cleared.
    pub fn delete_canvas(&self, canvas_id: CanvasId) -> bool {
        let mut state = self.write();
        if state.canvases.len() <= 1 {
            tracing::warn!(canvas = %canvas_id, "refusing to delete the last canvas");
            return false;
        }
        let Some(index) = state.canvases.iter().position(|c| c.id == canvas_id) else {
            return false;
        };
        state.canvases.remove(index);
        if state
            .selection
            .is_some_and(|sel| sel.canvas_id == canvas_id)
        {
            state.selection = None;
            state.settings_open = false;
        }
        if state.active == canvas_id {
            state.active = state.canvases[0].id;
        }
        tracing::debug!(canvas = %canvas_id, "deleted canvas");
        true
    }

    /// Rename a canvas. No-op if the id is unknown.
    pub fn rename_canvas(&self, canvas_id: CanvasId, name: &str) -> bool {
        let mut state = self.write();
        match state.canvases.iter_mut().find(|c| c.id == canvas_id) {
            Some(canvas) => {
                canvas.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Switch the active canvas. No-op if the id is unknown.
    pub fn set_active_canvas(&self, canvas_id: CanvasId) -> bool {
        let mut state = self.write();
        if state.canvases.iter().any(|c| c.id == canvas_id) {
            state.active = canvas_id;
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Widget operations
    // -----------------------------------------------------------------------

    /// Add a widget of the given kind to a canvas, with default placement,
    /// size, and config. Returns `None` if the canvas id is unknown.
    pub fn add_widget(&self, canvas_id: CanvasId, kind: WidgetKind) -> Option<WidgetId> {
        let mut state = self.write();
        let canvas = state.canvases.iter_mut().find(|c| c.id == canvas_id)?;
        let id = canvas.add_widget(Widget::new(kind));
        tracing::debug!(canvas = %canvas_id, widget = %id, %kind, "added widget");
        Some(id)
    }

    /// Update a widget using a closure. Exactly the matching widget
    /// changes; every other widget and canvas is untouched. No-op if either
    /// id is unknown.
    pub fn update_widget<F>(&self, canvas_id: CanvasId, widget_id: WidgetId, f: F) -> bool
    where
        F: FnOnce(&mut Widget),
    {
        let mut state = self.write();
        let Some(widget) = state
            .canvases
            .iter_mut()
            .find(|c| c.id == canvas_id)
            .and_then(|c| c.widget_mut(widget_id))
        else {
            return false;
        };
        f(widget);
        true
    }

    /// Move a widget, clamping the position to the canvas origin.
    pub fn move_widget(&self, canvas_id: CanvasId, widget_id: WidgetId, position: Position) -> bool {
        self.update_widget(canvas_id, widget_id, |widget| {
            widget.position = position.clamped();
        })
    }

    /// Resize a widget, clamping the size to the minimum dimensions.
    pub fn resize_widget(&self, canvas_id: CanvasId, widget_id: WidgetId, size: Size) -> bool {
        self.update_widget(canvas_id, widget_id, |widget| {
            widget.size = size.clamped();
        })
    }

    /// Delete a widget from a canvas. If it was selected, the selection is
    /// cleared and the settings view closed. No-op if either id is unknown.
    pub fn delete_widget(&self, canvas_id: CanvasId, widget_id: WidgetId) -> bool {
        let mut state = self.write();
        let Some(canvas) = state.canvases.iter_mut().find(|c| c.id == canvas_id) else {
            return false;
        };
        if canvas.remove_widget(widget_id).is_none() {
            return false;
        }
        if state.selection.is_some_and(|sel| sel.widget_id == widget_id) {
            state.selection = None;
            state.settings_open = false;
        }
        tracing::debug!(canvas = %canvas_id, widget = %widget_id, "deleted widget");
        true
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select a widget and open the settings view for it. No-op if the
    /// widget does not exist on the given canvas.
    pub fn select_widget(&self, canvas_id: CanvasId, widget_id: WidgetId) -> bool {
        let mut state = self.write();
        let exists = state
            .canvases
            .iter()
            .find(|c| c.id == canvas_id)
            .is_some_and(|c| c.contains_widget(widget_id));
        if !exists {
            return false;
        }
        state.selection = Some(Selection {
            canvas_id,
            widget_id,
        });
        state.settings_open = true;
        true
    }

    /// Close the settings view and clear the selection.
    pub fn close_settings(&self) {
        let mut state = self.write();
        state.selection = None;
        state.settings_open = false;
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Snapshot of all canvases, in creation order.
    #[must_use]
    pub fn canvases(&self) -> Vec<Canvas> {
        self.read().canvases.clone()
    }

    /// Snapshot of a canvas by id.
    #[must_use]
    pub fn canvas(&self, canvas_id: CanvasId) -> Option<Canvas> {
        self.read()
            .canvases
            .iter()
            .find(|c| c.id == canvas_id)
            .cloned()
    }

    /// Number of canvases. Never zero.
    #[must_use]
    pub fn canvas_count(&self) -> usize {
        self.read().canvases.len()
    }

    /// Id of the active canvas.
    #[must_use]
    pub fn active_canvas_id(&self) -> CanvasId {
        self.read().active
    }

    /// Snapshot of the active canvas.
    #[must_use]
    pub fn active_canvas(&self) -> Option<Canvas> {
        let state = self.read();
        state
            .canvases
            .iter()
            .find(|c| c.id == state.active)
            .cloned()
    }

    /// Snapshot of a widget by canvas and widget id.
    #[must_use]
    pub fn widget(&self, canvas_id: CanvasId, widget_id: WidgetId) -> Option<Widget> {
        self.read()
            .canvases
            .iter()
            .find(|c| c.id == canvas_id)
            .and_then(|c| c.widget(widget_id))
            .cloned()
    }

    /// The current selection, if any.
    #[must_use]
    pub fn selection(&self) -> Option<Selection> {
        self.read().selection
    }

    /// Snapshot of the currently selected widget, if any.
    #[must_use]
    pub fn selected_widget(&self) -> Option<Widget> {
        let state = self.read();
        let sel = state.selection?;
        state
            .canvases
            .iter()
            .find(|c| c.id == sel.canvas_id)
            .and_then(|c| c.widget(sel.widget_id))
            .cloned()
    }

    /// Whether the settings view is open.
    #[must_use]
    pub fn settings_open(&self) -> bool {
        self.read().settings_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetConfig;

    #[test]
    fn test_new_seeds_main_canvas() {
        let store = BoardStore::new();
        assert_eq!(store.canvas_count(), 1);

        let active = store.active_canvas().expect("seeded canvas is active");
        assert_eq!(active.name, "Main Canvas");
        assert!(active.is_empty());
        assert_eq!(active.id, store.active_canvas_id());
    }

    #[test]
    fn test_create_canvas_appends_and_activates() {
        let store = BoardStore::new();
        let first = store.active_canvas_id();

        let second = store.create_canvas("Second");
        assert_eq!(store.canvas_count(), 2);
        assert_eq!(store.active_canvas_id(), second);
        assert_ne!(first, second);

        let names: Vec<_> = store.canvases().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Main Canvas", "Second"]);
    }

    #[test]
    fn test_create_canvas_with_default_name() {
        let store = BoardStore::new();
        let id = store.create_canvas(DEFAULT_CANVAS_NAME);
        assert_eq!(store.canvas(id).expect("exists").name, "New Canvas");
    }

    #[test]
    fn test_delete_last_canvas_rejected() {
        let store = BoardStore::new();
        let only = store.active_canvas_id();
        assert!(!store.delete_canvas(only));
        assert_eq!(store.canvas_count(), 1);
        assert_eq!(store.active_canvas_id(), only);
    }

    #[test]
    fn test_delete_active_canvas_activates_first_remaining() {
        let store = BoardStore::new();
        let first = store.active_canvas_id();
        let second = store.create_canvas("Second");
        assert_eq!(store.active_canvas_id(), second);

        assert!(store.delete_canvas(second));
        assert_eq!(store.canvas_count(), 1);
        assert_eq!(store.active_canvas_id(), first);
    }

    #[test]
    fn test_delete_inactive_canvas_keeps_active() {
        let store = BoardStore::new();
        let first = store.active_canvas_id();
        let second = store.create_canvas("Second");

        assert!(store.delete_canvas(first));
        assert_eq!(store.active_canvas_id(), second);
    }

    #[test]
    fn test_delete_unknown_canvas_is_noop() {
        let store = BoardStore::new();
        store.create_canvas("Second");
        assert!(!store.delete_canvas(CanvasId::new()));
        assert_eq!(store.canvas_count(), 2);
    }

    #[test]
    fn test_canvas_list_never_empty_under_churn() {
        let store = BoardStore::new();
        for i in 0..10 {
            store.create_canvas(&format!("Canvas {i}"));
        }
        // Delete everything we can, in creation order
        for canvas in store.canvases() {
            store.delete_canvas(canvas.id);
        }
        assert_eq!(store.canvas_count(), 1);
        // Active id still points at an existing canvas
        let active = store.active_canvas_id();
        assert!(store.canvases().iter().any(|c| c.id == active));
    }

    #[test]
    fn test_rename_canvas() {
        let store = BoardStore::new();
        let id = store.active_canvas_id();
        assert!(store.rename_canvas(id, "Renamed"));
        assert_eq!(store.canvas(id).expect("exists").name, "Renamed");

        assert!(!store.rename_canvas(CanvasId::new(), "Ghost"));
    }

    #[test]
    fn test_set_active_canvas() {
        let store = BoardStore::new();
        let first = store.active_canvas_id();
        store.create_canvas("Second");

        assert!(store.set_active_canvas(first));
        assert_eq!(store.active_canvas_id(), first);

        assert!(!store.set_active_canvas(CanvasId::new()));
        assert_eq!(store.active_canvas_id(), first);
    }

    #[test]
    fn test_add_widget_defaults() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::TextEditor)
            .expect("canvas exists");

        let widget = store.widget(canvas_id, widget_id).expect("widget exists");
        assert_eq!(widget.kind(), WidgetKind::TextEditor);
        assert!((widget.position.x - 50.0).abs() < f32::EPSILON);
        assert!((widget.position.y - 50.0).abs() < f32::EPSILON);
        assert!((widget.size.width - 300.0).abs() < f32::EPSILON);
        assert!((widget.size.height - 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_add_widget_unknown_canvas_returns_none() {
        let store = BoardStore::new();
        assert!(store
            .add_widget(CanvasId::new(), WidgetKind::DataTable)
            .is_none());
    }

    #[test]
    fn test_update_widget_touches_exactly_one_widget() {
        let store = BoardStore::new();
        let canvas_a = store.active_canvas_id();
        let canvas_b = store.create_canvas("Other");

        let target = store
            .add_widget(canvas_a, WidgetKind::TextEditor)
            .expect("add");
        let neighbor = store
            .add_widget(canvas_a, WidgetKind::TextEditor)
            .expect("add");
        let far = store
            .add_widget(canvas_b, WidgetKind::TextEditor)
            .expect("add");

        assert!(store.update_widget(canvas_a, target, |w| {
            w.position = Position::new(400.0, 400.0);
        }));

        let moved = store.widget(canvas_a, target).expect("exists");
        assert!((moved.position.x - 400.0).abs() < f32::EPSILON);

        for (cid, wid) in [(canvas_a, neighbor), (canvas_b, far)] {
            let other = store.widget(cid, wid).expect("exists");
            assert!((other.position.x - 50.0).abs() < f32::EPSILON);
            assert!((other.position.y - 50.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_update_widget_unknown_ids_is_noop() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        assert!(!store.update_widget(canvas_id, WidgetId::new(), |_| {}));
        assert!(!store.update_widget(CanvasId::new(), WidgetId::new(), |_| {}));
    }

    #[test]
    fn test_reads_are_snapshots() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::TextEditor)
            .expect("add");

        let before = store.widget(canvas_id, widget_id).expect("exists");
        store.move_widget(canvas_id, widget_id, Position::new(900.0, 900.0));

        // The earlier snapshot is unaffected by the mutation
        assert!((before.position.x - 50.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_move_widget_clamps_to_origin() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::ImageDisplay)
            .expect("add");

        assert!(store.move_widget(canvas_id, widget_id, Position::new(-30.0, -5.0)));
        let widget = store.widget(canvas_id, widget_id).expect("exists");
        assert!((widget.position.x - 0.0).abs() < f32::EPSILON);
        assert!((widget.position.y - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_resize_widget_clamps_to_floor() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::ImageDisplay)
            .expect("add");

        assert!(store.resize_widget(canvas_id, widget_id, Size::new(10.0, 10.0)));
        let widget = store.widget(canvas_id, widget_id).expect("exists");
        assert!((widget.size.width - 200.0).abs() < f32::EPSILON);
        assert!((widget.size.height - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_delete_widget() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::DataTable)
            .expect("add");

        assert!(store.delete_widget(canvas_id, widget_id));
        assert!(store.widget(canvas_id, widget_id).is_none());

        assert!(!store.delete_widget(canvas_id, widget_id));
    }

    #[test]
    fn test_delete_selected_widget_clears_selection() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::TextEditor)
            .expect("add");

        assert!(store.select_widget(canvas_id, widget_id));
        assert!(store.settings_open());

        assert!(store.delete_widget(canvas_id, widget_id));
        assert!(store.selection().is_none());
        assert!(!store.settings_open());
    }

    #[test]
    fn test_delete_unselected_widget_keeps_selection() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let selected = store
            .add_widget(canvas_id, WidgetKind::TextEditor)
            .expect("add");
        let other = store
            .add_widget(canvas_id, WidgetKind::DataTable)
            .expect("add");

        assert!(store.select_widget(canvas_id, selected));
        assert!(store.delete_widget(canvas_id, other));

        let sel = store.selection().expect("selection kept");
        assert_eq!(sel.widget_id, selected);
        assert!(store.settings_open());
    }

    #[test]
    fn test_delete_canvas_clears_selection_into_it() {
        let store = BoardStore::new();
        let first = store.active_canvas_id();
        let second = store.create_canvas("Second");
        let widget_id = store
            .add_widget(second, WidgetKind::TextEditor)
            .expect("add");

        assert!(store.select_widget(second, widget_id));
        assert!(store.delete_canvas(second));

        assert!(store.selection().is_none());
        assert!(!store.settings_open());
        assert_eq!(store.active_canvas_id(), first);
    }

    #[test]
    fn test_select_unknown_widget_is_noop() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        assert!(!store.select_widget(canvas_id, WidgetId::new()));
        assert!(store.selection().is_none());
        assert!(!store.settings_open());
    }

    #[test]
    fn test_close_settings() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::ImageDisplay)
            .expect("add");

        store.select_widget(canvas_id, widget_id);
        store.close_settings();
        assert!(store.selection().is_none());
        assert!(!store.settings_open());
    }

    #[test]
    fn test_selected_widget_snapshot() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::TextEditor)
            .expect("add");

        assert!(store.selected_widget().is_none());
        store.select_widget(canvas_id, widget_id);
        let selected = store.selected_widget().expect("selected");
        assert_eq!(selected.id, widget_id);
    }

    #[test]
    fn test_update_widget_config_through_closure() {
        let store = BoardStore::new();
        let canvas_id = store.active_canvas_id();
        let widget_id = store
            .add_widget(canvas_id, WidgetKind::TextEditor)
            .expect("add");

        assert!(store.update_widget(canvas_id, widget_id, |w| {
            if let WidgetConfig::TextEditor { font_size, .. } = &mut w.config {
                *font_size = 18;
            }
        }));

        let widget = store.widget(canvas_id, widget_id).expect("exists");
        let WidgetConfig::TextEditor { font_size, .. } = widget.config else {
            panic!("expected text editor config");
        };
        assert_eq!(font_size, 18);
    }

    #[test]
    fn test_clone_shares_state() {
        let store = BoardStore::new();
        let handle = store.clone();
        let id = handle.create_canvas("From Clone");
        assert_eq!(store.active_canvas_id(), id);
        assert_eq!(store.canvas_count(), 2);
    }
}
