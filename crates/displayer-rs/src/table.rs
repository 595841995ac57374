//! Table displayer configuration.
//!
//! Only the subset needed for family dispatch is modeled here; the table XML
//! mapping is its own format and not part of this crate family yet.

/// Configuration of a single table displayer.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDisplayer {
    /// Rows shown per page.
    pub max_rows_per_page: i32,
    /// Whether the leading row-number column is rendered.
    pub show_row_numbers: bool,
}

impl Default for TableDisplayer {
    fn default() -> Self {
        TableDisplayer {
            max_rows_per_page: 10,
            show_row_numbers: true,
        }
    }
}
