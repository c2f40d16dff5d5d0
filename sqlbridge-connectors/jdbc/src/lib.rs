// Connector which executes SQL against a JDBC-reachable database on behalf
// of the host application platform, mapping result rows to host objects

mod connector;
pub use connector::*;
