use sqlpipe_connector::{format_common, write_insert_null, Error, FormatDialect, Result};
use sqlpipe_types::{IntermediateType, TypeKind, Value};

const TARGET: &str = "Oracle";

/// Oracle as a transfer target: `1`/`0` booleans (Oracle has no native
/// boolean), `hextoraw('<hex>')` blob literals, `TO_DATE`/`TO_TIMESTAMP`
/// with explicit format masks rather than a bare quoted literal.
pub struct OracleFormat;

impl FormatDialect for OracleFormat {
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
                    Ok(format!("hextoraw('{hex}'){terminator}"))
                }
                _ => Err(err("expected bytes")),
            },
            TypeKind::Date => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Date(d) => Ok(format!("TO_DATE('{}', 'YYYY-MM-DD'){terminator}", d.format("%Y-%m-%d"))),
                _ => Err(err("expected a date")),
            },
            TypeKind::Timestamp | TypeKind::TimestampTz => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Timestamp(t) => Ok(format!(
                    "TO_TIMESTAMP('{}', 'YYYY-MM-DD HH24:MI:SS.FF'){terminator}",
                    t.format("%Y-%m-%d %H:%M:%S%.6f")
                )),
                Value::TimestampTz(t) => Ok(format!(
                    "TO_TIMESTAMP_TZ('{}', 'YYYY-MM-DD HH24:MI:SS.FF TZH:TZM'){terminator}",
                    t.format("%Y-%m-%d %H:%M:%S%.6f %:z")
                )),
                _ => Err(err("expected a timestamp")),
            },
            // Json/Char/Varchar/Text/Xml/RawText already handled above by
            // `format_common`.
            _ => Err(err("no Oracle formatter for this intermediate type")),
        }
    }
}
