use sqlpipe_connector::{format_common, write_insert_null, Error, FormatDialect, Result};
use sqlpipe_types::{IntermediateType, TypeKind, Value};

const TARGET: &str = "Snowflake";

/// Snowflake as a transfer target. `NUMBER`/`REAL` print as a bare unquoted
/// string (Snowflake accepts a numeric literal without quotes, and this
/// avoids a cast for notations `format_common`'s standard numeric writer
/// wouldn't produce); `BOOLEAN` prints as the bare word `true`/`false`, not
/// `1`/`0`. `VARIANT`/`OBJECT`/`ARRAY` are carried as escaped text with
/// embedded newlines stripped first - Snowflake's multi-line `PARSE_JSON`
/// input otherwise breaks the single-line INSERT statement.
pub struct SnowflakeFormat;

impl FormatDialect for SnowflakeFormat {
    fn system(&self) -> &'static str {
        TARGET
    }

    fn format(&self, intermediate_type: IntermediateType, value: &Value, terminator: &str) -> Result<String> {
        let err = |reason: &str| Error::FormatError {
            target: TARGET,
            intermediate_type,
            reason: reason.to_string(),
        };

        match intermediate_type.kind {
            TypeKind::Json => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Json(s) | Value::String(s) => {
                    let no_newlines = s.replace('\n', " ").replace('\r', " ");
                    let escaped = no_newlines.replace('\'', "''");
                    Ok(format!("'{escaped}'{terminator}"))
                }
                _ => Err(err("expected json text")),
            },
            TypeKind::Decimal | TypeKind::Double | TypeKind::Real => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Decimal(d) => Ok(format!("{d}{terminator}")),
                Value::F64(f) => Ok(format!("{f}{terminator}")),
                _ => Err(err("expected a number")),
            },
            TypeKind::Bool => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Bool(b) => Ok(format!("{b}{terminator}")),
                _ => Err(err("expected a bool")),
            },
            TypeKind::Binary | TypeKind::Varbinary | TypeKind::Blob => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Bytes(b) => {
                    let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
                    Ok(format!("'{hex}'{terminator}"))
                }
                _ => Err(err("expected bytes")),
            },
            TypeKind::Date => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Date(d) => Ok(format!("'{}'{terminator}", d.format("%Y-%m-%d"))),
                _ => Err(err("expected a date")),
            },
            TypeKind::Time => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Time(t) => Ok(format!("'{}'{terminator}", t.format("%H:%M:%S%.9f"))),
                _ => Err(err("expected a time")),
            },
            TypeKind::Timestamp => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Timestamp(t) => Ok(format!("'{}'{terminator}", t.format("%Y-%m-%d %H:%M:%S%.9f"))),
                _ => Err(err("expected a timestamp")),
            },
            TypeKind::TimestampTz => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::TimestampTz(t) => Ok(format!("'{}'{terminator}", t.format("%Y-%m-%d %H:%M:%S%.9f %:z"))),
                _ => Err(err("expected a timestamp with time zone")),
            },
            _ => format_common(TARGET, intermediate_type, value, terminator).unwrap_or_else(|| Err(err("no Snowflake formatter for this intermediate type"))),
        }
    }
}
