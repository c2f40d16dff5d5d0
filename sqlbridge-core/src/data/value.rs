use serde::{Deserialize, Serialize};

/// Data container for driver-native values
///
/// The connector layer passes these through opaquely from result cursor to
/// host object field and performs no coercion between variants.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum DataValue {
    Null,
    Utf8String(String),
    Binary(Vec<u8>),
    Boolean(bool),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    Decimal(rust_decimal::Decimal),
    JSON(String),
    Date(chrono::NaiveDate),
    Time(chrono::NaiveTime),
    DateTime(chrono::NaiveDateTime),
    DateTimeWithTZ((chrono::NaiveDateTime, chrono_tz::Tz)),
    Uuid(uuid::Uuid),
}

impl DataValue {
    pub fn is_null(&self) -> bool {
        *self == DataValue::Null
    }
}

impl From<&str> for DataValue {
    fn from(str: &str) -> Self {
        DataValue::Utf8String(str.to_string())
    }
}

impl From<String> for DataValue {
    fn from(str: String) -> Self {
        DataValue::Utf8String(str)
    }
}

impl From<bool> for DataValue {
    fn from(val: bool) -> Self {
        DataValue::Boolean(val)
    }
}

impl From<i16> for DataValue {
    fn from(val: i16) -> Self {
        DataValue::Int16(val)
    }
}

impl From<i32> for DataValue {
    fn from(val: i32) -> Self {
        DataValue::Int32(val)
    }
}

impl From<i64> for DataValue {
    fn from(val: i64) -> Self {
        DataValue::Int64(val)
    }
}

impl From<f64> for DataValue {
    fn from(val: f64) -> Self {
        DataValue::Float64(val)
    }
}

impl From<uuid::Uuid> for DataValue {
    fn from(val: uuid::Uuid) -> Self {
        DataValue::Uuid(val)
    }
}
