use sqlbridge_connectors_base::interface::{EntityObject, ExecutionContext, ObjectInstantiator};
use sqlbridge_core::{data::DataValue, err::Result};

use super::{FaultPoint, MemoryDatabase};

/// Instantiates scripted host objects
#[derive(Debug, Clone)]
pub struct MemoryInstantiator {
    db: MemoryDatabase,
}

impl MemoryInstantiator {
    pub fn new(db: MemoryDatabase) -> Self {
        Self { db }
    }
}

impl ObjectInstantiator for MemoryInstantiator {
    type TObject = MemoryObject;

    fn instantiate(&self, ctx: &ExecutionContext, entity_name: &str) -> Result<MemoryObject> {
        self.db.note_instantiate(ctx, entity_name);
        self.db.fault(FaultPoint::Instantiate)?;

        Ok(MemoryObject {
            db: self.db.clone(),
            entity: entity_name.to_string(),
            values: vec![],
        })
    }
}

/// A host object materialized from one result row
///
/// Field assignments are recorded in call order for inspection.
#[derive(Debug, Clone)]
pub struct MemoryObject {
    db: MemoryDatabase,
    pub entity: String,
    pub values: Vec<(String, DataValue)>,
}

impl EntityObject for MemoryObject {
    fn set_value(&mut self, _ctx: &ExecutionContext, field: &str, value: DataValue) -> Result<()> {
        self.db.tally(|c| c.value_writes += 1);
        self.db.fault(FaultPoint::SetValue)?;

        self.values.push((field.to_string(), value));
        Ok(())
    }
}
