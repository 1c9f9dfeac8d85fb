//! Widgets - the positioned, resizable content blocks placed on a canvas.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{WidgetConfig, WidgetKind};

/// Minimum widget width in pixels.
pub const MIN_WIDGET_WIDTH: f32 = 200.0;

/// Minimum widget height in pixels.
pub const MIN_WIDGET_HEIGHT: f32 = 150.0;

/// Unique identifier for a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WidgetId(Uuid);

impl WidgetId {
    /// Create a new unique widget ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parse a widget ID from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid UUID.
    pub fn parse(s: &str) -> crate::BoardResult<Self> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Offset of a widget within its canvas, in unscaled canvas coordinates.
///
/// Canvas zoom is a presentation transform only and never feeds back into
/// stored positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the canvas left edge.
    pub x: f32,
    /// Pixels from the canvas top edge.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp to the canvas origin. Only the top/left edges are bounded;
    /// widgets may sit arbitrarily far right/down.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

/// Widget dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Size {
    /// Create a size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp to the minimum widget dimensions. There is no ceiling.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WIDGET_WIDTH),
            height: self.height.max(MIN_WIDGET_HEIGHT),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
        }
    }
}

/// A widget placed on a canvas.
///
/// The widget kind is fixed by the config variant at creation and cannot
/// change afterwards; position, size, and the config contents are mutable
/// through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Unique identifier.
    pub id: WidgetId,
    /// Kind-specific configuration.
    pub config: WidgetConfig,
    /// Offset within the canvas.
    pub position: Position,
    /// Current dimensions.
    pub size: Size,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at_ms: u64,
}

impl Widget {
    /// Create a new widget of the given kind with default placement,
    /// default size, and the kind's default configuration.
    #[must_use]
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            id: WidgetId::new(),
            config: WidgetConfig::default_for(kind),
            position: Position::default(),
            size: Size::default(),
            created_at_ms: now_ms(),
        }
    }

    /// Set the position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// The widget's kind, derived from its config variant.
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        self.config.kind()
    }

    /// The widget's display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.config.title()
    }

    /// Check if a point (in canvas coordinates) is within this widget.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.position.x
            && x <= self.position.x + self.size.width
            && y >= self.position.y
            && y <= self.position.y + self.size.height
    }
}

/// Get the current Unix timestamp in milliseconds.
#[must_use]
pub(crate) fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| {
        // Timestamp will not exceed u64 max for millennia
        #[allow(clippy::cast_possible_truncation)]
        {
            d.as_millis() as u64
        }
    })
}
