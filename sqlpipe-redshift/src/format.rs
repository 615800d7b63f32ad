use sqlpipe_connector::{format_common, write_insert_null, Error, FormatDialect, Result};
use sqlpipe_types::{IntermediateType, TypeKind, Value};

const TARGET: &str = "Redshift";

/// Redshift as a transfer target. Booleans, dates and timestamps follow
/// PostgreSQL's literal syntax since Redshift inherited it, but Redshift has
/// no native `bytea`/`uuid`/`json`/`xml` types - the DDL dialect below maps
/// those intermediate kinds to `varchar`/`varbyte`, and the literals here
/// are written to match.
pub struct RedshiftFormat;

impl FormatDialect for RedshiftFormat {
    fn system(&self) -> &'static str {
        TARGET
    }

    fn format(&self, intermediate_type: IntermediateType, value: &Value, terminator: &str) -> Result<String> {
        if let Some(r) = format_common(TARGET, intermediate_type, value, terminator) {
            return r;
        }

        let err = |reason: &str| Error::FormatError {
            target: TARGET,
            intermediate_type,
            reason: reason.to_string(),
        };

        match intermediate_type.kind {
            TypeKind::Bool => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Bool(b) => Ok(format!("{}{terminator}", if *b { "true" } else { "false" })),
                _ => Err(err("expected a bool")),
            },
            TypeKind::Blob | TypeKind::Binary | TypeKind::Varbinary => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Bytes(b) => {
                    let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
                    Ok(format!("'{hex}'::varbyte{terminator}"))
                }
                _ => Err(err("expected bytes")),
            },
            TypeKind::Date => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Date(d) => Ok(format!("date '{}'{terminator}", d.format("%Y-%m-%d"))),
                _ => Err(err("expected a date")),
            },
            TypeKind::Time => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Time(t) => Ok(format!("time '{}'{terminator}", t.format("%H:%M:%S%.6f"))),
                _ => Err(err("expected a time")),
            },
            TypeKind::Timestamp => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Timestamp(t) => Ok(format!(
                    "timestamp '{}'{terminator}",
                    t.format("%Y-%m-%d %H:%M:%S%.6f")
                )),
                _ => Err(err("expected a timestamp")),
            },
            TypeKind::TimestampTz => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::TimestampTz(t) => Ok(format!(
                    "timestamptz '{}'{terminator}",
                    t.format("%Y-%m-%d %H:%M:%S%.6f%:z")
                )),
                _ => Err(err("expected a timestamptz")),
            },
            TypeKind::Uuid => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Uuid(u) => Ok(format!("'{u}'{terminator}")),
                _ => Err(err("expected a uuid")),
            },
            // No native bit-string type; the DDL dialect creates these
            // columns as varchar, written as an unescaped string.
            TypeKind::BitString => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::String(s) => Ok(format!("'{s}'{terminator}")),
                _ => Err(err("expected a bit string")),
            },
            // json/xml already handled by `format_common` above (both
            // route through its escaped-string writer).
            _ => Err(err("no Redshift formatter for this intermediate type")),
        }
    }
}
