use sqlbridge_connectors_base::interface::PreparedStatement;
use sqlbridge_core::err::Result;
use sqlbridge_logging::warn;

use super::{FaultPoint, MemoryDatabase, MemoryResultSet};

/// A statement prepared against the scripted database
#[derive(Debug)]
pub struct MemoryStatement {
    db: MemoryDatabase,
    closed: bool,
}

impl MemoryStatement {
    pub(crate) fn new(db: MemoryDatabase) -> Self {
        Self { db, closed: false }
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.db.note_close("statement", |c| c.statement_closes += 1);
        self.db.fault(FaultPoint::CloseStatement)
    }
}

impl PreparedStatement for MemoryStatement {
    type TResultSet = MemoryResultSet;

    fn execute_query(&mut self) -> Result<MemoryResultSet> {
        self.db.tally(|c| c.query_executions += 1);
        self.db.fault(FaultPoint::ExecuteQuery)?;

        Ok(MemoryResultSet::new(self.db.clone()))
    }

    fn execute_update(&mut self) -> Result<u64> {
        self.db.tally(|c| c.update_executions += 1);
        self.db.fault(FaultPoint::ExecuteUpdate)?;

        Ok(self.db.update_count())
    }
}

impl Drop for MemoryStatement {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("Failed to close statement: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_execute_update_returns_scripted_count() {
        let db = MemoryDatabase::new();
        db.set_update_count(5);
        let mut statement = MemoryStatement::new(db.clone());

        assert_eq!(statement.execute_update().unwrap(), 5);
        assert_eq!(db.counts().update_executions, 1);
    }

    #[test]
    fn test_execute_query_failure_still_counted() {
        let db = MemoryDatabase::new();
        db.fail_at(FaultPoint::ExecuteQuery, "bad query");
        let mut statement = MemoryStatement::new(db.clone());

        assert!(statement.execute_query().is_err());
        assert_eq!(db.counts().query_executions, 1);
    }

    #[test]
    fn test_statement_closes_once_on_drop() {
        let db = MemoryDatabase::new();

        drop(MemoryStatement::new(db.clone()));

        assert_eq!(db.counts().statement_closes, 1);
        assert_eq!(db.close_log(), vec!["statement"]);
    }
}
