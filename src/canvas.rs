//! A named canvas owning an ordered list of widgets.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::widget::{now_ms, Widget, WidgetId};
use crate::BoardResult;

/// Unique identifier for a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasId(Uuid);

impl CanvasId {
    /// Create a new unique canvas ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a canvas ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> BoardResult<Self> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for CanvasId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CanvasId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named workspace containing an ordered collection of widgets.
///
/// Widget insertion order is z-order: later widgets render on top. The
/// canvas exclusively owns its widgets; deleting the canvas drops them all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Unique identifier.
    pub id: CanvasId,
    /// Display name.
    pub name: String,
    /// Widgets in insertion (z) order.
    widgets: Vec<Widget>,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at_ms: u64,
}

impl Canvas {
    /// Create a new empty canvas with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CanvasId::new(),
            name: name.into(),
            widgets: Vec::new(),
            created_at_ms: now_ms(),
        }
    }

    /// Append a widget, placing it on top of the z-order.
    pub fn add_widget(&mut self, widget: Widget) -> WidgetId {
        let id = widget.id;
        self.widgets.push(widget);
        id
    }

    /// Remove a widget, returning it if it was present.
    pub fn remove_widget(&mut self, id: WidgetId) -> Option<Widget> {
        let index = self.widgets.iter().position(|w| w.id == id)?;
        Some(self.widgets.remove(index))
    }

    /// Get a widget by ID.
    #[must_use]
    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Get a mutable reference to a widget by ID.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }

    /// Check whether a widget with the given ID is on this canvas.
    #[must_use]
    pub fn contains_widget(&self, id: WidgetId) -> bool {
        self.widgets.iter().any(|w| w.id == id)
    }

    /// All widgets in z-order (bottom first).
    pub fn widgets(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter()
    }

    /// Find the topmost widget at the given canvas coordinates.
    #[must_use]
    pub fn widget_at(&self, x: f32, y: f32) -> Option<WidgetId> {
        self.widgets
            .iter()
            .rev()
            .find(|w| w.contains_point(x, y))
            .map(|w| w.id)
    }

    /// Number of widgets on this canvas.
    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.widgets.len()
    }

    /// Check if the canvas has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Serialize the canvas to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> BoardResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a canvas from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
