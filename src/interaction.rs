//! # Drag/resize interaction
//!
//! Per-widget pointer-tracking state machine converting pointer movement
//! into position and size updates on the store.
//!
//! ```text
//! Idle --down(header/body)--> Dragging --move--> move_widget(...)
//! Idle --down(handle)-------> Resizing --move--> resize_widget(...)
//! Dragging/Resizing --up--> Idle
//! ```
//!
//! The presentation layer creates one [`WidgetInteraction`] per rendered
//! widget and holds its global pointer-move/up subscription exactly while
//! [`WidgetInteraction::is_tracking`] is true; `Up` is the single release
//! transition on every exit path.

use crate::canvas::CanvasId;
use crate::event::{HitRegion, PointerEvent};
use crate::store::BoardStore;
use crate::widget::{Position, Size, WidgetId};

/// Current phase of a widget interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    /// Not tracking the pointer.
    Idle,
    /// Following the pointer, keeping the grab offset constant.
    Dragging {
        /// Pointer offset from the widget's x position at grab time.
        grab_x: f32,
        /// Pointer offset from the widget's y position at grab time.
        grab_y: f32,
    },
    /// Growing/shrinking by the pointer delta from the resize origin.
    Resizing {
        /// Pointer x when the resize started.
        origin_x: f32,
        /// Pointer y when the resize started.
        origin_y: f32,
        /// Widget size when the resize started.
        start: Size,
    },
}

/// What a processed pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// A drag began.
    DragStarted,
    /// The widget was moved.
    Dragged,
    /// A resize began.
    ResizeStarted,
    /// The widget was resized.
    Resized,
    /// The interaction ended.
    Released,
    /// The event did not apply in the current state.
    Ignored,
}

/// Pointer-tracking controller for a single widget.
///
/// Holds its own store handle; all position/size changes flow through the
/// store's clamped setters, so a drag can never push a widget past the
/// canvas origin and a resize can never shrink below the minimum size.
/// Right/down movement and growth are unbounded.
#[derive(Debug)]
pub struct WidgetInteraction {
    store: BoardStore,
    canvas_id: CanvasId,
    widget_id: WidgetId,
    state: InteractionState,
}

impl WidgetInteraction {
    /// Create a controller for the given widget.
    #[must_use]
    pub fn new(store: BoardStore, canvas_id: CanvasId, widget_id: WidgetId) -> Self {
        Self {
            store,
            canvas_id,
            widget_id,
            state: InteractionState::Idle,
        }
    }

    /// The current interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Whether the controller is mid-drag or mid-resize and therefore
    /// needs global pointer-move/up events routed to it.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.state != InteractionState::Idle
    }

    /// Handle a pointer-down at `(x, y)` on the given widget region.
    pub fn on_pointer_down(&mut self, x: f32, y: f32, region: HitRegion) -> InteractionOutcome {
        if self.state != InteractionState::Idle {
            return InteractionOutcome::Ignored;
        }
        if region.starts_resize() {
            let Some(widget) = self.store.widget(self.canvas_id, self.widget_id) else {
                return InteractionOutcome::Ignored;
            };
            self.state = InteractionState::Resizing {
                origin_x: x,
                origin_y: y,
                start: widget.size,
            };
            tracing::debug!(widget = %self.widget_id, "resize started");
            InteractionOutcome::ResizeStarted
        } else if region.starts_drag() {
            let Some(widget) = self.store.widget(self.canvas_id, self.widget_id) else {
                return InteractionOutcome::Ignored;
            };
            self.state = InteractionState::Dragging {
                grab_x: x - widget.position.x,
                grab_y: y - widget.position.y,
            };
            tracing::debug!(widget = %self.widget_id, "drag started");
            InteractionOutcome::DragStarted
        } else {
            InteractionOutcome::Ignored
        }
    }

    /// Handle a pointer-move to `(x, y)`.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) -> InteractionOutcome {
        match self.state {
            InteractionState::Dragging { grab_x, grab_y } => {
                let position = Position::new(x - grab_x, y - grab_y);
                if self
                    .store
                    .move_widget(self.canvas_id, self.widget_id, position)
                {
                    InteractionOutcome::Dragged
                } else {
                    InteractionOutcome::Ignored
                }
            }
            InteractionState::Resizing {
                origin_x,
                origin_y,
                start,
            } => {
                let size = Size::new(start.width + (x - origin_x), start.height + (y - origin_y));
                if self
                    .store
                    .resize_widget(self.canvas_id, self.widget_id, size)
                {
                    InteractionOutcome::Resized
                } else {
                    InteractionOutcome::Ignored
                }
            }
            InteractionState::Idle => InteractionOutcome::Ignored,
        }
    }

    /// Handle a pointer release, ending any drag or resize.
    pub fn on_pointer_up(&mut self) -> InteractionOutcome {
        if self.state == InteractionState::Idle {
            return InteractionOutcome::Ignored;
        }
        self.state = InteractionState::Idle;
        tracing::debug!(widget = %self.widget_id, "interaction released");
        InteractionOutcome::Released
    }

    /// Process any pointer event.
    pub fn process(&mut self, event: PointerEvent) -> InteractionOutcome {
        match event {
            PointerEvent::Down { x, y, region } => self.on_pointer_down(x, y, region),
            PointerEvent::Move { x, y } => self.on_pointer_move(x, y),
            PointerEvent::Up => self.on_pointer_up(),
        }
    }
}
