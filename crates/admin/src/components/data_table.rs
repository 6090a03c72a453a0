//! Data table component.
//!
//! A table is described by a [`DataTableConfig`] (columns plus the column the
//! search box filters on) and filled from any rows implementing [`TableRow`].
//! The resulting [`DataTable`] holds plain strings so the shared
//! `components/data_table.html` partial can render every table the same way.

/// Column definition for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// Unique key for the column.
    pub key: String,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Key of the column the search box filters on.
    pub search_key: String,
    /// Search placeholder text.
    pub search_placeholder: String,
    /// Title for empty state.
    pub empty_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration searching on `search_key`.
    #[must_use]
    pub fn new(table_id: &str, search_key: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            search_key: search_key.to_string(),
            search_placeholder: "Search...".to_string(),
            empty_title: "No results.".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set search placeholder.
    #[must_use]
    pub fn search_placeholder(mut self, placeholder: &str) -> Self {
        self.search_placeholder = placeholder.to_string();
        self
    }

    /// Set empty state title.
    #[must_use]
    pub fn empty_title(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }
}

/// A value that can be displayed as a table row.
pub trait TableRow {
    /// Display text for the column with the given key.
    fn cell(&self, key: &str) -> String;
}

/// A table ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataTable {
    pub config: DataTableConfig,
    /// Current search text (empty when not searching).
    pub search: String,
    /// Cell text per row, in column order.
    pub rows: Vec<Vec<String>>,
    /// Number of rows before searching.
    pub total: usize,
}

impl DataTable {
    /// Build a table from rows, keeping only those whose search column
    /// contains `search` (case-insensitive).
    #[must_use]
    pub fn build<R: TableRow>(config: DataTableConfig, rows: &[R], search: Option<&str>) -> Self {
        let search = search.map(str::trim).unwrap_or_default().to_string();
        let needle = search.to_lowercase();
        let total = rows.len();

        let rows = rows
            .iter()
            .filter(|row| {
                needle.is_empty() || row.cell(&config.search_key).to_lowercase().contains(&needle)
            })
            .map(|row| config.columns.iter().map(|c| row.cell(&c.key)).collect())
            .collect();

        Self {
            config,
            search,
            rows,
            total,
        }
    }

    /// Whether a search is hiding some rows.
    #[must_use]
    pub fn is_filtered(&self) -> bool {
        self.rows.len() < self.total
    }
}
