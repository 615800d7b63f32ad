use sqlpipe_connector::{format_common, write_insert_null, Error, FormatDialect, Result};
use sqlpipe_types::{IntermediateType, TypeKind, Value};

const TARGET: &str = "MySQL";

/// MySQL as a transfer target: `1`/`0` booleans (MySQL has no native boolean,
/// `TINYINT(1)` is the idiom), `x'<hex>'` binary literals, `b'<bits>'` for
/// `BIT` columns.
pub struct MysqlFormat;

impl FormatDialect for MysqlFormat {
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
                Value::Bool(b) => Ok(format!("{}{terminator}", if *b { 1 } else { 0 })),
                _ => Err(err("expected a bool")),
            },
            TypeKind::Binary | TypeKind::Varbinary | TypeKind::Blob => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Bytes(b) => {
                    let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
                    Ok(format!("x'{hex}'{terminator}"))
                }
                _ => Err(err("expected bytes")),
            },
            TypeKind::BitString => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Bytes(b) => {
                    let bits: String = b.iter().map(|byte| format!("{byte:08b}")).collect();
                    Ok(format!("b'{bits}'{terminator}"))
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
                Value::Time(t) => Ok(format!("'{}'{terminator}", t.format("%H:%M:%S%.6f"))),
                _ => Err(err("expected a time")),
            },
            TypeKind::Timestamp => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Timestamp(t) => Ok(format!("'{}'{terminator}", t.format("%Y-%m-%d %H:%M:%S%.6f"))),
                _ => Err(err("expected a timestamp")),
            },
            // Json/Char/Varchar/Text/Xml/RawText already handled above by
            // `format_common`.
            _ => Err(err("no MySQL formatter for this intermediate type")),
        }
    }
}
