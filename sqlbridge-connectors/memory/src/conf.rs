use std::sync::{Arc, Mutex};

use sqlbridge_connectors_base::interface::{ExecutionContext, RowStructure};
use sqlbridge_core::{
    data::DataValue,
    err::{Error, Result},
};

/// Points at which a [`MemoryDatabase`] can be scripted to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultPoint {
    Connect,
    Prepare,
    ExecuteQuery,
    ExecuteUpdate,
    ReadStructure,
    Advance,
    GetValue,
    Instantiate,
    SetValue,
    CloseConnection,
    CloseStatement,
    CloseResultSet,
}

/// Error injected at a scripted failure point
///
/// A concrete type so callers can prove an error crossed the connector
/// unchanged via `downcast_ref`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ScriptedError(pub String);

/// Invocation and release accounting across all handles of one database
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationCounts {
    pub connects: u32,
    pub prepares: u32,
    pub query_executions: u32,
    pub update_executions: u32,
    pub structure_reads: u32,
    pub row_advances: u32,
    pub value_reads: u32,
    pub instantiations: u32,
    pub value_writes: u32,
    pub connection_closes: u32,
    pub statement_closes: u32,
    pub result_set_closes: u32,
}

#[derive(Debug, Default)]
struct MemoryDatabaseState {
    structure: RowStructure,
    rows: Vec<Vec<DataValue>>,
    update_count: u64,
    faults: Vec<(FaultPoint, String)>,
    counts: InvocationCounts,
    connect_log: Vec<(String, String, String)>,
    prepared_sql: Vec<String>,
    instantiate_log: Vec<(ExecutionContext, String)>,
    close_log: Vec<&'static str>,
}

/// The scripted dataset shared by every handle it produces
///
/// Cheap to clone; all clones observe the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<Mutex<MemoryDatabaseState>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the scripted result data
    pub fn set_data(&self, cols: Vec<&str>, rows: Vec<Vec<DataValue>>) {
        let mut state = self.state.lock().unwrap();
        state.structure = RowStructure::new(cols.into_iter().map(Into::into).collect());
        state.rows = rows;
    }

    /// Sets the affected-row count reported by update executions
    pub fn set_update_count(&self, count: u64) {
        self.state.lock().unwrap().update_count = count;
    }

    /// Scripts a failure at the given point
    ///
    /// Multiple faults may be active at once.
    pub fn fail_at(&self, point: FaultPoint, message: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .faults
            .push((point, message.into()));
    }

    pub fn counts(&self) -> InvocationCounts {
        self.state.lock().unwrap().counts.clone()
    }

    /// The (url, username, password) triples passed to connect, in order
    pub fn connect_log(&self) -> Vec<(String, String, String)> {
        self.state.lock().unwrap().connect_log.clone()
    }

    /// The SQL strings passed to prepare, in order
    pub fn prepared_sql(&self) -> Vec<String> {
        self.state.lock().unwrap().prepared_sql.clone()
    }

    /// The (context, entity name) pairs passed to instantiate, in order
    pub fn instantiate_log(&self) -> Vec<(ExecutionContext, String)> {
        self.state.lock().unwrap().instantiate_log.clone()
    }

    /// The handles released so far, in release order
    pub fn close_log(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().close_log.clone()
    }

    pub(crate) fn structure(&self) -> RowStructure {
        self.state.lock().unwrap().structure.clone()
    }

    pub(crate) fn row(&self, idx: usize) -> Option<Vec<DataValue>> {
        self.state.lock().unwrap().rows.get(idx).cloned()
    }

    pub(crate) fn row_count(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub(crate) fn update_count(&self) -> u64 {
        self.state.lock().unwrap().update_count
    }

    /// Fails if a fault is scripted at the given point
    pub(crate) fn fault(&self, point: FaultPoint) -> Result<()> {
        let state = self.state.lock().unwrap();
        if let Some((_, message)) = state.faults.iter().find(|(p, _)| *p == point) {
            return Err(Error::new(ScriptedError(message.clone())));
        }
        Ok(())
    }

    pub(crate) fn tally(&self, bump: impl FnOnce(&mut InvocationCounts)) {
        bump(&mut self.state.lock().unwrap().counts);
    }

    pub(crate) fn note_connect(&self, url: &str, username: &str, password: &str) {
        let mut state = self.state.lock().unwrap();
        state.counts.connects += 1;
        state
            .connect_log
            .push((url.into(), username.into(), password.into()));
    }

    pub(crate) fn note_prepare(&self, sql: &str) {
        let mut state = self.state.lock().unwrap();
        state.counts.prepares += 1;
        state.prepared_sql.push(sql.into());
    }

    pub(crate) fn note_instantiate(&self, ctx: &ExecutionContext, entity_name: &str) {
        let mut state = self.state.lock().unwrap();
        state.counts.instantiations += 1;
        state
            .instantiate_log
            .push((ctx.clone(), entity_name.into()));
    }

    pub(crate) fn note_close(
        &self,
        handle: &'static str,
        bump: impl FnOnce(&mut InvocationCounts),
    ) {
        let mut state = self.state.lock().unwrap();
        bump(&mut state.counts);
        state.close_log.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_counts_start_at_zero() {
        let db = MemoryDatabase::new();

        assert_eq!(db.counts(), InvocationCounts::default());
        assert_eq!(db.close_log(), Vec::<&str>::new());
    }

    #[test]
    fn test_set_data() {
        let db = MemoryDatabase::new();

        db.set_data(
            vec!["x", "y"],
            vec![vec![DataValue::Int32(1), DataValue::Int32(2)]],
        );

        assert_eq!(
            db.structure(),
            RowStructure::new(vec!["x".into(), "y".into()])
        );
        assert_eq!(db.row_count(), 1);
        assert_eq!(
            db.row(0),
            Some(vec![DataValue::Int32(1), DataValue::Int32(2)])
        );
        assert_eq!(db.row(1), None);
    }

    #[test]
    fn test_fault_returns_scripted_error() {
        let db = MemoryDatabase::new();
        db.fail_at(FaultPoint::Prepare, "boom");

        let err = db.fault(FaultPoint::Prepare).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ScriptedError>(),
            Some(&ScriptedError("boom".into()))
        );
        assert!(db.fault(FaultPoint::Connect).is_ok());
    }
}
