use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use uuid::Uuid;

/// A single scanned cell, already converted out of the source driver's own
/// row-scanning representation into the shapes a value formatter needs to
/// type-assert against.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Decimal(Decimal),
    Bytes(Vec<u8>),
    String(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<FixedOffset>),
    Uuid(Uuid),
    /// Semi-structured text (PostgreSQL `json`/`jsonb`, Snowflake
    /// `VARIANT`/`OBJECT`/`ARRAY`, MySQL `json`) carried as its textual form;
    /// targets re-quote it, none of them need to parse it.
    Json(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}
