use sqlbridge_connectors_base::interface::{Connection, ConnectionProvider};
use sqlbridge_core::err::Result;
use sqlbridge_logging::warn;

use super::{FaultPoint, MemoryDatabase, MemoryStatement};

/// Implementation for opening connections to the scripted database
#[derive(Debug, Clone)]
pub struct MemoryConnectionProvider {
    db: MemoryDatabase,
}

impl MemoryConnectionProvider {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }

    pub fn db(&self) -> MemoryDatabase {
        self.db.clone()
    }
}

impl ConnectionProvider for MemoryConnectionProvider {
    type TConnection = MemoryConnection;

    fn connect(&self, url: &str, username: &str, password: &str) -> Result<MemoryConnection> {
        self.db.note_connect(url, username, password);
        self.db.fault(FaultPoint::Connect)?;

        Ok(MemoryConnection::new(self.db.clone()))
    }
}

/// An open handle onto the scripted database
#[derive(Debug)]
pub struct MemoryConnection {
    db: MemoryDatabase,
    closed: bool,
}

impl MemoryConnection {
    pub(crate) fn new(db: MemoryDatabase) -> Self {
        Self { db, closed: false }
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.db.note_close("connection", |c| c.connection_closes += 1);
        self.db.fault(FaultPoint::CloseConnection)
    }
}

impl Connection for MemoryConnection {
    type TStatement = MemoryStatement;

    fn prepare(&mut self, sql: &str) -> Result<MemoryStatement> {
        self.db.note_prepare(sql);
        self.db.fault(FaultPoint::Prepare)?;

        Ok(MemoryStatement::new(self.db.clone()))
    }
}

impl Drop for MemoryConnection {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("Failed to close connection: {:?}", err);
        }
    }
}
