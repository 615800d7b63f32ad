use sqlpipe_connector::{format_common, write_insert_null, Error, FormatDialect, Result};
use sqlpipe_types::{IntermediateType, TypeKind, Value};

const TARGET: &str = "MSSQL";

/// MSSQL as a transfer target. Binary values go through
/// `CONVERT(VARBINARY(8000), '0x<hex>', 1)` rather than a bare hex literal,
/// datetimes are written with an explicit `CONVERT(..., 121)` cast, and GUID
/// bytes get their first 8 bytes reordered to match the wire layout
/// `UNIQUEIDENTIFIER` expects (a long-documented quirk of the TDS GUID
/// encoding, not a formatting choice).
pub struct MssqlFormat;

impl FormatDialect for MssqlFormat {
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
                    Ok(format!("CONVERT(VARBINARY(8000), '0x{hex}', 1){terminator}"))
                }
                _ => Err(err("expected bytes")),
            },
            TypeKind::Uuid => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Uuid(u) => {
                    let b = u.as_bytes();
                    Ok(format!(
                        "N'{:02X}{:02X}{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}-{:02X}{:02X}{:02X}{:02X}{:02X}{:02X}'{terminator}",
                        b[3], b[2], b[1], b[0], b[5], b[4], b[7], b[6], b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15],
                    ))
                }
                _ => Err(err("expected a uuid")),
            },
            TypeKind::Date => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Date(d) => Ok(format!("CONVERT(DATE, '{}', 121){terminator}", d.format("%Y-%m-%d"))),
                _ => Err(err("expected a date")),
            },
            TypeKind::Time => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Time(t) => Ok(format!("CONVERT(TIME, '{}', 121){terminator}", t.format("%H:%M:%S%.3f"))),
                _ => Err(err("expected a time")),
            },
            TypeKind::Timestamp => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::Timestamp(t) => Ok(format!("CONVERT(DATETIME2, '{}', 121){terminator}", t.format("%Y-%m-%d %H:%M:%S%.7f"))),
                _ => Err(err("expected a timestamp")),
            },
            TypeKind::TimestampTz => match value {
                Value::Null => Ok(write_insert_null(terminator)),
                Value::TimestampTz(t) => Ok(format!("CONVERT(DATETIMEOFFSET, '{}', 121){terminator}", t.format("%Y-%m-%d %H:%M:%S%.3f %:z"))),
                _ => Err(err("expected a timestamp with time zone")),
            },
            // Json/Char/Varchar/Text/Xml/RawText already handled above by
            // `format_common`.
            _ => Err(err("no MSSQL formatter for this intermediate type")),
        }
    }
}
