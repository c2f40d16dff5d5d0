use sqlbridge_core::{
    data::{uuid::Uuid, DataValue},
    err::Result,
};

/// Opaque host execution context
///
/// Handed through unchanged to object instantiation and to every field
/// assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionContext {
    request_id: Uuid,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self {
            request_id: Uuid::new_v4(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates host domain objects for the connector to populate
pub trait ObjectInstantiator {
    type TObject: EntityObject;

    /// Instantiates a new, empty domain object of the named entity
    fn instantiate(&self, ctx: &ExecutionContext, entity_name: &str) -> Result<Self::TObject>;
}

/// A host domain object populated from one result row
pub trait EntityObject {
    /// Sets the field named by a result column to the row's raw value
    fn set_value(&mut self, ctx: &ExecutionContext, field: &str, value: DataValue) -> Result<()>;
}
