use sqlbridge_core::err::Result;

use super::ResultSet;

/// A statement prepared on a connection, ready to execute
///
/// The underlying handle is released when the statement is dropped.
pub trait PreparedStatement {
    type TResultSet: ResultSet;

    /// Executes the statement as a query, returning the generated result set
    fn execute_query(&mut self) -> Result<Self::TResultSet>;

    /// Executes the statement as an update, returning the affected row count
    fn execute_update(&mut self) -> Result<u64>;
}
