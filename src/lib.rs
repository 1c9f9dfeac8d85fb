//! # Canvas Board
//!
//! Canvas and widget state management for a desktop widget board: the
//! in-memory model behind named canvases holding movable, resizable,
//! typed widgets.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                canvas-board                 │
//! ├─────────────────────────────────────────────┤
//! │  Board Store     │  Interaction             │
//! │  - Canvases      │  - Drag state machine    │
//! │  - Widgets       │  - Resize state machine  │
//! │  - Selection     │  - Hit regions           │
//! ├─────────────────────────────────────────────┤
//! │  Widget Configs  │  Edit Sessions           │
//! │  - Text editor   │  - Draft / commit        │
//! │  - Image display │  - Cancel (Escape)       │
//! │  - Data table    │                          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! State is memory-only and synchronous: the presentation layer reads
//! snapshots from [`BoardStore`], feeds pointer events to
//! [`WidgetInteraction`], and re-renders after each mutation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod canvas;
pub mod config;
pub mod editing;
pub mod error;
pub mod event;
pub mod interaction;
pub mod store;
pub mod widget;

pub use canvas::{Canvas, CanvasId};
pub use config::{ImageFit, TableConfig, WidgetConfig, WidgetKind};
pub use editing::{CellEditSession, CellTarget, TextEditSession};
pub use error::{BoardError, BoardResult};
pub use event::{HitRegion, PointerEvent};
pub use interaction::{InteractionOutcome, InteractionState, WidgetInteraction};
pub use store::{BoardStore, Selection, DEFAULT_CANVAS_NAME};
pub use widget::{Position, Size, Widget, WidgetId, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH};

/// Canvas board version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
