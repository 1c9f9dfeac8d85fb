//! Per-kind widget configuration.
//!
//! Each widget kind carries its own structured settings as one variant of
//! [`WidgetConfig`]. The set of kinds is closed: matches are exhaustive and
//! there is no fall-through default for an unknown kind.

use serde::{Deserialize, Serialize};

/// The closed set of widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    /// Free-form text with font settings.
    TextEditor,
    /// A single image with fit and control settings.
    ImageDisplay,
    /// An editable grid of string cells.
    DataTable,
}

impl WidgetKind {
    /// All widget kinds, in menu order.
    pub const ALL: [Self; 3] = [Self::TextEditor, Self::ImageDisplay, Self::DataTable];
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TextEditor => "text-editor",
            Self::ImageDisplay => "image-display",
            Self::DataTable => "data-table",
        };
        write!(f, "{name}")
    }
}

/// How an image is scaled within its widget frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageFit {
    /// Scale to fit entirely within the frame, preserving aspect ratio.
    Contain,
    /// Scale to cover the frame, preserving aspect ratio, cropping overflow.
    Cover,
    /// Stretch to fill the frame exactly.
    Fill,
    /// Like `Contain`, but never scale up past natural size.
    ScaleDown,
}

/// Kind-specific widget settings, tagged by widget kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WidgetConfig {
    /// Settings for a text editor widget.
    TextEditor {
        /// Display title.
        title: String,
        /// The text content.
        content: String,
        /// Font size in pixels.
        font_size: u32,
        /// Font family name.
        font_family: String,
    },

    /// Settings for an image display widget.
    ImageDisplay {
        /// Display title.
        title: String,
        /// Image source URL or data URI.
        image_url: String,
        /// Alternative text.
        alt: String,
        /// Scaling mode.
        fit: ImageFit,
        /// Whether zoom/fit controls are shown.
        show_controls: bool,
    },

    /// Settings for a data table widget.
    DataTable(TableConfig),
}

impl WidgetConfig {
    /// The default configuration for the given widget kind.
    #[must_use]
    pub fn default_for(kind: WidgetKind) -> Self {
        match kind {
            WidgetKind::TextEditor => Self::TextEditor {
                title: "Text Editor".to_string(),
                content: "Start typing here...".to_string(),
                font_size: 14,
                font_family: "Inter".to_string(),
            },
            WidgetKind::ImageDisplay => Self::ImageDisplay {
                title: "Image Display".to_string(),
                image_url: String::new(),
                alt: "Image".to_string(),
                fit: ImageFit::Contain,
                show_controls: true,
            },
            WidgetKind::DataTable => Self::DataTable(TableConfig::default()),
        }
    }

    /// The widget kind this config belongs to.
    #[must_use]
    pub fn kind(&self) -> WidgetKind {
        match self {
            Self::TextEditor { .. } => WidgetKind::TextEditor,
            Self::ImageDisplay { .. } => WidgetKind::ImageDisplay,
            Self::DataTable(_) => WidgetKind::DataTable,
        }
    }

    /// The display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::TextEditor { title, .. } | Self::ImageDisplay { title, .. } => title,
            Self::DataTable(table) => &table.title,
        }
    }

    /// Replace the display title.
    pub fn set_title(&mut self, new_title: impl Into<String>) {
        match self {
            Self::TextEditor { title, .. } | Self::ImageDisplay { title, .. } => {
                *title = new_title.into();
            }
            Self::DataTable(table) => table.title = new_title.into(),
        }
    }
}

/// Settings and contents of a data table widget.
///
/// Shape invariant: every row has exactly `columns.len()` cells, and at
/// least one row and one column always remain. All operations uphold this
/// atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Display title.
    pub title: String,
    /// Column header names, in display order.
    pub columns: Vec<String>,
    /// Row data; each row has one cell per column.
    pub rows: Vec<Vec<String>>,
    /// Whether the header row is rendered.
    pub show_headers: bool,
    /// Whether alternating rows are shaded.
    pub striped: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            title: "Data Table".to_string(),
            columns: vec![
                "Column 1".to_string(),
                "Column 2".to_string(),
                "Column 3".to_string(),
            ],
            rows: vec![
                vec![
                    "Row 1 Col 1".to_string(),
                    "Row 1 Col 2".to_string(),
                    "Row 1 Col 3".to_string(),
                ],
                vec![
                    "Row 2 Col 1".to_string(),
                    "Row 2 Col 2".to_string(),
                    "Row 2 Col 3".to_string(),
                ],
            ],
            show_headers: true,
            striped: true,
        }
    }
}

impl TableConfig {
    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a cell value.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Append an empty row.
    pub fn add_row(&mut self) {
        self.rows.push(vec![String::new(); self.columns.len()]);
    }

    /// Append a column named `Column {n}` with an empty cell in every row.
    pub fn add_column(&mut self) {
        self.columns
            .push(format!("Column {}", self.columns.len() + 1));
        for row in &mut self.rows {
            row.push(String::new());
        }
    }

    /// Delete a row. Returns `false` without changes when `index` is out of
    /// bounds or only one row remains.
    pub fn delete_row(&mut self, index: usize) -> bool {
        if self.rows.len() <= 1 {
            tracing::warn!("refusing to delete the last table row");
            return false;
        }
        if index >= self.rows.len() {
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Delete a column and the index-matching cell of every row, in one
    /// step. Returns `false` without changes when `index` is out of bounds
    /// or only one column remains.
    pub fn delete_column(&mut self, index: usize) -> bool {
        if self.columns.len() <= 1 {
            tracing::warn!("refusing to delete the last table column");
            return false;
        }
        if index >= self.columns.len() {
            return false;
        }
        self.columns.remove(index);
        for row in &mut self.rows {
            row.remove(index);
        }
        true
    }

    /// Replace a cell value. Returns `false` if out of bounds.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value.into();
                true
            }
            None => false,
        }
    }

    /// Replace a column header name. Returns `false` if out of bounds.
    pub fn set_column_name(&mut self, col: usize, value: impl Into<String>) -> bool {
        match self.columns.get_mut(col) {
            Some(name) => {
                *name = value.into();
                true
            }
            None => false,
        }
    }
}
