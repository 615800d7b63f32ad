use async_trait::async_trait;
use odbc_api::{Connection, Cursor, Environment, ResultSetMetadata};
use sqlpipe_connector::{Error, Result, RowCursor, SourceConnector, TargetConnector};
use sqlpipe_types::{ColumnMeta, ScanType, Value};

use crate::types::intermediate_type_for;

/// Owns a live ODBC connection. `odbc-api`'s handles are not `Send`, so
/// every call is shipped to a dedicated blocking thread the same way the
/// Oracle connector ships calls to ODPI-C: the environment, connection and
/// cursor never cross an `.await` point, only the materialized rows do.
pub struct SnowflakeConnector {
    connection_string: String,
}

impl SnowflakeConnector {
    pub fn new(connection_string: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
        }
    }

    fn with_connection<T: Send + 'static>(&self, f: impl FnOnce(&Connection<'_>) -> Result<T> + Send + 'static) -> std::thread::JoinHandle<Result<T>> {
        let connection_string = self.connection_string.clone();
        std::thread::spawn(move || {
            let env = Environment::new().map_err(|e| Error::SourceIoError(e.to_string()))?;
            let conn = env
                .connect_with_connection_string(&connection_string, odbc_api::ConnectionOptions::default())
                .map_err(|e| Error::SourceIoError(e.to_string()))?;
            f(&conn)
        })
    }
}

fn column_meta(cursor: &mut impl ResultSetMetadata, idx: u16) -> Result<ColumnMeta> {
    let name = cursor.col_name(idx + 1).map_err(|e| Error::ColumnInfoError(e.to_string()))?;
    let driver_type = cursor
        .col_data_type(idx + 1)
        .map(|t| format!("{t:?}"))
        .map_err(|e| Error::ColumnInfoError(e.to_string()))?;
    let driver_type = driver_type_from_sql_type(&driver_type);
    let intermediate_type = intermediate_type_for(&driver_type).ok_or_else(|| Error::UnsupportedSourceType {
        system: "Snowflake",
        driver_type: driver_type.clone(),
    })?;
    Ok(ColumnMeta::new(name, driver_type, intermediate_type, ScanType::Null, 0, 0, 0, true))
}

/// `odbc-api`'s `DataType` debug form doesn't match Snowflake's own type
/// names, so translate the handful of ODBC SQL types this driver reports
/// into the same vocabulary `intermediate_type_for` expects.
fn driver_type_from_sql_type(odbc_debug: &str) -> String {
    let lower = odbc_debug.to_lowercase();
    if lower.contains("float") || lower.contains("double") || lower.contains("real") {
        "REAL".into()
    } else if lower.contains("decimal") || lower.contains("numeric") {
        "NUMBER".into()
    } else if lower.contains("bit") {
        "BOOLEAN".into()
    } else if lower.contains("timestamp") {
        "TIMESTAMP_NTZ".into()
    } else if lower.contains("date") {
        "DATE".into()
    } else if lower.contains("time") {
        "TIME".into()
    } else if lower.contains("binary") || lower.contains("varbinary") {
        "BINARY".into()
    } else {
        "TEXT".into()
    }
}

#[async_trait]
impl SourceConnector for SnowflakeConnector {
    async fn open_cursor(&mut self, query: &str) -> Result<Box<dyn RowCursor>> {
        let query = query.to_string();
        let handle = self.with_connection(move |conn| {
            let mut cursor = conn
                .execute(&query, ())
                .map_err(|e| Error::SourceIoError(e.to_string()))?
                .ok_or_else(|| Error::SourceIoError("query produced no result set".into()))?;

            let n = cursor.num_result_cols().map_err(|e| Error::ColumnInfoError(e.to_string()))? as u16;
            let mut columns = Vec::with_capacity(n as usize);
            for i in 0..n {
                columns.push(column_meta(&mut cursor, i)?);
            }

            let mut rows = Vec::new();
            let mut row_buf = odbc_api::buffers::TextRowSet::for_cursor(256, &mut cursor, Some(4096)).map_err(|e| Error::SourceIoError(e.to_string()))?;
            let mut row_set_cursor = cursor.bind_buffer(&mut row_buf).map_err(|e| Error::SourceIoError(e.to_string()))?;
            while let Some(batch) = row_set_cursor.fetch().map_err(|e| Error::SourceIoError(e.to_string()))? {
                for r in 0..batch.num_rows() {
                    let mut values = Vec::with_capacity(columns.len());
                    for (c, col) in columns.iter().enumerate() {
                        let text = batch.at_as_str(c, r).map_err(|e| Error::SourceIoError(e.to_string()))?;
                        values.push(value_from_text(text, col)?);
                    }
                    rows.push(values);
                }
            }

            Ok((columns, rows))
        });

        let (columns, rows) = handle.join().map_err(|_| Error::SourceIoError("ODBC worker thread panicked".into()))??;

        Ok(Box::new(SnowflakeCursor {
            columns,
            rows: rows.into_iter(),
        }))
    }
}

fn value_from_text(text: Option<&str>, col: &ColumnMeta) -> Result<Value> {
    use sqlpipe_types::TypeKind::*;

    let Some(text) = text else { return Ok(Value::Null) };

    let err = |reason: String| Error::FormatError {
        target: "Snowflake",
        intermediate_type: col.intermediate_type,
        reason,
    };

    match col.intermediate_type.kind {
        SmallInt | Int | BigInt => text.parse::<i64>().map(Value::I64).map_err(|e| err(e.to_string())),
        Real | Double => text.parse::<f64>().map(Value::F64).map_err(|e| err(e.to_string())),
        Decimal => text.parse::<rust_decimal::Decimal>().map(Value::Decimal).map_err(|e| err(e.to_string())),
        Bool => match text {
            "1" | "true" | "TRUE" | "t" => Ok(Value::Bool(true)),
            "0" | "false" | "FALSE" | "f" => Ok(Value::Bool(false)),
            other => Err(err(format!("unrecognized boolean literal '{other}'"))),
        },
        Char | Varchar | Text | RawText => Ok(Value::String(text.to_string())),
        Json => Ok(Value::Json(text.to_string())),
        Binary | Varbinary | Blob => hex_decode(text).map(Value::Bytes).map_err(|e| err(e)),
        Date => chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d").map(Value::Date).map_err(|e| err(e.to_string())),
        Time => chrono::NaiveTime::parse_from_str(text, "%H:%M:%S%.f").map(Value::Time).map_err(|e| err(e.to_string())),
        Timestamp => chrono::NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
            .map(Value::Timestamp)
            .map_err(|e| err(e.to_string())),
        TimestampTz => chrono::DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f %z")
            .map(Value::TimestampTz)
            .map_err(|e| err(e.to_string())),
        other => Err(err(format!("unsupported scan kind {other:?}"))),
    }
}

fn hex_decode(s: &str) -> std::result::Result<Vec<u8>, String> {
    if s.len() % 2 != 0 {
        return Err("odd-length hex string".into());
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).map_err(|e| e.to_string()))
        .collect()
}

struct SnowflakeCursor {
    columns: Vec<ColumnMeta>,
    rows: std::vec::IntoIter<Vec<Value>>,
}

#[async_trait]
impl RowCursor for SnowflakeCursor {
    fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    async fn next_row(&mut self, buf: &mut [Value]) -> Result<bool> {
        match self.rows.next() {
            Some(values) => {
                buf[..values.len()].clone_from_slice(&values);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl TargetConnector for SnowflakeConnector {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        let sql = sql.to_string();
        let handle = self.with_connection(move |conn| {
            conn.execute(&sql, ()).map(|_| ()).map_err(|e| Error::TargetInsertError {
                stage: "batch-end",
                reason: e.to_string(),
            })
        });
        handle.join().map_err(|_| Error::TargetInsertError {
            stage: "batch-end",
            reason: "ODBC worker thread panicked".into(),
        })?
    }
}
