//! Pointer input events for canvas interaction.

use serde::{Deserialize, Serialize};

/// Where on a widget a pointer-down landed.
///
/// Only the header and body start a drag; the scrollable content area and
/// the header controls pass pointer-downs through to their own handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HitRegion {
    /// The title bar, excluding its control buttons.
    Header,
    /// The widget frame outside header and content.
    Body,
    /// The kind-specific content area.
    Content,
    /// Header control buttons (settings, delete).
    Controls,
    /// The bottom-right resize handle.
    ResizeHandle,
}

impl HitRegion {
    /// Whether a pointer-down here starts a drag.
    #[must_use]
    pub fn starts_drag(self) -> bool {
        matches!(self, Self::Header | Self::Body)
    }

    /// Whether a pointer-down here starts a resize.
    #[must_use]
    pub fn starts_resize(self) -> bool {
        matches!(self, Self::ResizeHandle)
    }
}

/// A pointer (mouse) event in canvas coordinates.
///
/// There is no cancel variant: releasing the pointer is the only way out of
/// a drag or resize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    /// Pointer pressed on a widget.
    Down {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
        /// Region of the widget that was hit.
        region: HitRegion,
    },

    /// Pointer moved while pressed.
    Move {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Pointer released, anywhere.
    Up,
}
