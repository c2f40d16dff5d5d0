use serde::{Deserialize, Serialize};
use sqlbridge_core::{data::DataValue, err::Result};

/// A forward-only cursor over the rows of an executed query
///
/// The underlying handle is released when the cursor is dropped.
pub trait ResultSet {
    /// Gets the row structure of the result set
    ///
    /// The structure is fixed per query and is read once, before iteration.
    fn get_structure(&self) -> Result<RowStructure>;

    /// Advances the cursor to the next row, returning false once exhausted
    fn advance(&mut self) -> Result<bool>;

    /// Reads the raw value at the zero-based column index of the current row
    fn get_value(&mut self, idx: usize) -> Result<DataValue>;
}

/// The structure of a row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStructure {
    /// The ordered column names of the row
    pub cols: Vec<String>,
}

impl RowStructure {
    pub fn new(cols: Vec<String>) -> Self {
        Self { cols }
    }

    pub fn column_count(&self) -> usize {
        self.cols.len()
    }
}
