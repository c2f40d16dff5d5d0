use sqlbridge_core::err::Result;

use super::PreparedStatement;

/// Opens connections to the target database
///
/// Implementations own any pooling or retry policy. The connector treats
/// every returned connection as exclusively owned for the duration of one
/// operation.
pub trait ConnectionProvider {
    type TConnection: Connection;

    /// Acquires a connection using the supplied address and credentials
    fn connect(&self, url: &str, username: &str, password: &str) -> Result<Self::TConnection>;
}

/// An open connection to the target database
///
/// The underlying handle is released when the connection is dropped.
pub trait Connection {
    type TStatement: PreparedStatement;

    /// Prepares the supplied SQL for execution on this connection
    fn prepare(&mut self, sql: &str) -> Result<Self::TStatement>;
}
