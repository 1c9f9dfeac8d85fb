//! In-widget edit sessions.
//!
//! Editing happens against a session-local draft: the stored config is
//! untouched until `commit`. Cancelling (the Escape path) or dropping a
//! session discards the draft and restores nothing, because nothing was
//! changed.

use crate::canvas::CanvasId;
use crate::config::WidgetConfig;
use crate::store::BoardStore;
use crate::widget::WidgetId;

/// An editing session for a text editor widget's content.
#[derive(Debug)]
pub struct TextEditSession {
    store: BoardStore,
    canvas_id: CanvasId,
    widget_id: WidgetId,
    draft: String,
}

impl TextEditSession {
    /// Open a session seeded with the widget's current content.
    ///
    /// Returns `None` if the widget is missing or not a text editor.
    #[must_use]
    pub fn open(store: &BoardStore, canvas_id: CanvasId, widget_id: WidgetId) -> Option<Self> {
        let widget = store.widget(canvas_id, widget_id)?;
        let WidgetConfig::TextEditor { content, .. } = widget.config else {
            return None;
        };
        Some(Self {
            store: store.clone(),
            canvas_id,
            widget_id,
            draft: content,
        })
    }

    /// The current draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft text.
    pub fn input(&mut self, content: impl Into<String>) {
        self.draft = content.into();
    }

    /// Write the draft back to the widget and end the session.
    ///
    /// Returns `false` if the widget no longer exists.
    pub fn commit(self) -> bool {
        let Self {
            store,
            canvas_id,
            widget_id,
            draft,
        } = self;
        store.update_widget(canvas_id, widget_id, |widget| {
            if let WidgetConfig::TextEditor { content, .. } = &mut widget.config {
                *content = draft;
            }
        })
    }

    /// Discard the draft, leaving the stored content untouched.
    pub fn cancel(self) {
        tracing::debug!(widget = %self.widget_id, "text edit cancelled");
    }
}

/// Which part of a table a [`CellEditSession`] targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellTarget {
    /// A column header.
    Header {
        /// Column index.
        col: usize,
    },
    /// A body cell.
    Cell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
}

/// An editing session for one table cell or column header.
#[derive(Debug)]
pub struct CellEditSession {
    store: BoardStore,
    canvas_id: CanvasId,
    widget_id: WidgetId,
    target: CellTarget,
    draft: String,
}

impl CellEditSession {
    /// Open a session seeded with the target's current value.
    ///
    /// Returns `None` if the widget is missing, not a data table, or the
    /// target is out of bounds.
    #[must_use]
    pub fn open(
        store: &BoardStore,
        canvas_id: CanvasId,
        widget_id: WidgetId,
        target: CellTarget,
    ) -> Option<Self> {
        let widget = store.widget(canvas_id, widget_id)?;
        let WidgetConfig::DataTable(table) = widget.config else {
            return None;
        };
        let current = match target {
            CellTarget::Header { col } => table.columns.get(col)?.clone(),
            CellTarget::Cell { row, col } => table.cell(row, col)?.to_string(),
        };
        Some(Self {
            store: store.clone(),
            canvas_id,
            widget_id,
            target,
            draft: current,
        })
    }

    /// The current draft value.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft value.
    pub fn input(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Write the draft to the targeted cell or header and end the session.
    ///
    /// Returns `false` if the widget is gone or the target no longer fits
    /// the table (the shape may have changed underneath the session).
    pub fn commit(self) -> bool {
        let Self {
            store,
            canvas_id,
            widget_id,
            target,
            draft,
        } = self;
        let mut applied = false;
        store.update_widget(canvas_id, widget_id, |widget| {
            if let WidgetConfig::DataTable(table) = &mut widget.config {
                applied = match target {
                    CellTarget::Header { col } => table.set_column_name(col, draft),
                    CellTarget::Cell { row, col } => table.set_cell(row, col, draft),
                };
            }
        });
        applied
    }

    /// Discard the draft, leaving the table untouched.
    pub fn cancel(self) {
        tracing::debug!(widget = %self.widget_id, "cell edit cancelled");
    }
}
