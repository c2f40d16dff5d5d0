use sqlbridge_connectors_base::interface::{ResultSet, RowStructure};
use sqlbridge_core::{
    data::DataValue,
    err::{Context, Result},
};
use sqlbridge_logging::warn;

use super::{FaultPoint, MemoryDatabase};

/// A forward-only cursor over the scripted rows
#[derive(Debug)]
pub struct MemoryResultSet {
    db: MemoryDatabase,
    // rows consumed so far; the current row is pos - 1
    pos: usize,
    closed: bool,
}

impl MemoryResultSet {
    pub(crate) fn new(db: MemoryDatabase) -> Self {
        Self {
            db,
            pos: 0,
            closed: false,
        }
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        self.db
            .note_close("result_set", |c| c.result_set_closes += 1);
        self.db.fault(FaultPoint::CloseResultSet)
    }
}

impl ResultSet for MemoryResultSet {
    fn get_structure(&self) -> Result<RowStructure> {
        self.db.tally(|c| c.structure_reads += 1);
        self.db.fault(FaultPoint::ReadStructure)?;

        Ok(self.db.structure())
    }

    fn advance(&mut self) -> Result<bool> {
        self.db.tally(|c| c.row_advances += 1);
        self.db.fault(FaultPoint::Advance)?;

        if self.pos < self.db.row_count() {
            self.pos += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn get_value(&mut self, idx: usize) -> Result<DataValue> {
        self.db.tally(|c| c.value_reads += 1);
        self.db.fault(FaultPoint::GetValue)?;

        let row = self
            .pos
            .checked_sub(1)
            .and_then(|r| self.db.row(r))
            .context("No current row")?;

        row.get(idx)
            .cloned()
            .with_context(|| format!("Column index {} out of range", idx))
    }
}

impl Drop for MemoryResultSet {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("Failed to close result set: {:?}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scripted_rows() -> MemoryDatabase {
        let db = MemoryDatabase::new();
        db.set_data(
            vec!["num", "str"],
            vec![
                vec![DataValue::Int32(1), DataValue::from("a")],
                vec![DataValue::Int32(2), DataValue::from("b")],
            ],
        );

        db
    }

    #[test]
    fn test_advance_walks_rows_then_exhausts() {
        let db = scripted_rows();
        let mut results = MemoryResultSet::new(db.clone());

        assert_eq!(results.advance().unwrap(), true);
        assert_eq!(results.advance().unwrap(), true);
        assert_eq!(results.advance().unwrap(), false);
        assert_eq!(db.counts().row_advances, 3);
    }

    #[test]
    fn test_get_value_reads_current_row() {
        let db = scripted_rows();
        let mut results = MemoryResultSet::new(db.clone());

        results.advance().unwrap();
        assert_eq!(results.get_value(0).unwrap(), DataValue::Int32(1));
        assert_eq!(results.get_value(1).unwrap(), DataValue::from("a"));

        results.advance().unwrap();
        assert_eq!(results.get_value(0).unwrap(), DataValue::Int32(2));
    }

    #[test]
    fn test_get_value_before_advance_fails() {
        let db = scripted_rows();
        let mut results = MemoryResultSet::new(db);

        assert!(results.get_value(0).is_err());
    }

    #[test]
    fn test_get_value_out_of_range_fails() {
        let db = scripted_rows();
        let mut results = MemoryResultSet::new(db);

        results.advance().unwrap();
        assert!(results.get_value(2).is_err());
    }

    #[test]
    fn test_structure_read_is_counted() {
        let db = scripted_rows();
        let results = MemoryResultSet::new(db.clone());

        assert_eq!(
            results.get_structure().unwrap(),
            RowStructure::new(vec!["num".into(), "str".into()])
        );
        assert_eq!(db.counts().structure_reads, 1);
    }

    #[test]
    fn test_result_set_closes_once_on_drop() {
        let db = scripted_rows();

        drop(MemoryResultSet::new(db.clone()));

        assert_eq!(db.counts().result_set_closes, 1);
        assert_eq!(db.close_log(), vec!["result_set"]);
    }
}
