use sqlbridge_connectors_base::interface::{
    Connection, ConnectionProvider, EntityObject, ExecutionContext, ObjectInstantiator,
    PreparedStatement, ResultSet,
};
use sqlbridge_core::err::Result;
use sqlbridge_logging::debug;

/// Executes queries and update statements on behalf of the host platform
///
/// Each call acquires its own connection, statement and result set and
/// releases them on every exit path, in reverse acquisition order. Handles
/// are owned by the call stack, so release happens when they drop; a
/// collaborator error propagates to the caller unchanged.
pub struct JdbcConnector<TProvider, TInstantiator> {
    provider: TProvider,
    instantiator: TInstantiator,
}

impl<TProvider: ConnectionProvider, TInstantiator: ObjectInstantiator>
    JdbcConnector<TProvider, TInstantiator>
{
    pub fn new(provider: TProvider, instantiator: TInstantiator) -> Self {
        Self {
            provider,
            instantiator,
        }
    }

    /// Runs the query and materializes one host object per result row
    ///
    /// Fields are set by column name, in column order, with raw values
    /// passed through untouched.
    pub fn execute_query(
        &self,
        url: &str,
        username: &str,
        password: &str,
        entity_name: &str,
        sql: &str,
        ctx: &ExecutionContext,
    ) -> Result<Vec<TInstantiator::TObject>> {
        debug!("Executing query against {}", url);

        let mut con = self.provider.connect(url, username, password)?;
        let mut statement = con.prepare(sql)?;
        let mut results = statement.execute_query()?;
        let structure = results.get_structure()?;

        let mut objects = vec![];
        while results.advance()? {
            let mut object = self.instantiator.instantiate(ctx, entity_name)?;

            for (idx, col) in structure.cols.iter().enumerate() {
                let value = results.get_value(idx)?;
                object.set_value(ctx, col, value)?;
            }

            objects.push(object);
        }

        Ok(objects)
    }

    /// Runs an update or DDL statement, returning the affected-row count
    pub fn execute_statement(
        &self,
        url: &str,
        username: &str,
        password: &str,
        sql: &str,
    ) -> Result<u64> {
        debug!("Executing statement against {}", url);

        let mut con = self.provider.connect(url, username, password)?;
        let mut statement = con.prepare(sql)?;

        statement.execute_update()
    }
}
