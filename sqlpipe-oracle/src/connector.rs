use async_trait::async_trait;
use oracle::sql_type::OracleType;
use oracle::{Connection, Row as OracleRow};
use sqlpipe_connector::{Error, Result, RowCursor, SourceConnector, TargetConnector};
use sqlpipe_types::{ColumnMeta, ScanType, Value};

use crate::types::{intermediate_type_for, rewrite_query};

/// Owns a blocking `oracle` crate connection. The driver itself (ODPI-C) is
/// synchronous, so every call is shipped to a blocking thread with
/// `tokio::task::spawn_blocking` rather than held across an `.await` point.
pub struct OracleConnector {
    conn: Option<Connection>,
}

impl OracleConnector {
    pub fn new(conn: Connection) -> Self {
        Self { conn: Some(conn) }
    }
}

fn driver_type_name(ty: &OracleType) -> String {
    match ty {
        OracleType::Char(_) => "CHAR".into(),
        OracleType::NChar(_) => "NCHAR".into(),
        OracleType::Varchar2(_) => "VARCHAR2".into(),
        OracleType::NVarchar2(_) => "NVARCHAR2".into(),
        OracleType::CLOB => "OCIClobLocator".into(),
        OracleType::NCLOB => "OCIClobLocator".into(),
        OracleType::BLOB => "OCIBlobLocator".into(),
        OracleType::Raw(_) => "RAW".into(),
        OracleType::Long => "LONG".into(),
        OracleType::LongRaw => "LONG_RAW".into(),
        OracleType::Number(_, _) => "NUMBER".into(),
        OracleType::BinaryFloat => "IBFloat".into(),
        OracleType::BinaryDouble => "IBDouble".into(),
        OracleType::Date => "DATE".into(),
        OracleType::Timestamp(_) => "TimeStampDTY".into(),
        OracleType::TimestampTZ(_) => "TimeStampTZ_DTY".into(),
        OracleType::TimestampLTZ(_) => "TimeStampLTZ_DTY".into(),
        other => format!("{other:?}"),
    }
}

/// Extracts `(column name, driver type tag)` pairs, the shape
/// `rewrite_query` needs, without holding the blocking `Row`/`ResultSet`
/// across an await point.
fn row_columns(row: &OracleRow) -> Result<Vec<ColumnMeta>> {
    row.column_info()
        .iter()
        .map(|c| {
            let driver_type = driver_type_name(c.oracle_type());
            let intermediate_type = intermediate_type_for(&driver_type).ok_or_else(|| Error::UnsupportedSourceType {
                system: "Oracle",
                driver_type: driver_type.clone(),
            })?;
            Ok(ColumnMeta::new(c.name(), driver_type, intermediate_type, ScanType::Null, 0, 0, 0, true))
        })
        .collect()
}

#[async_trait]
impl SourceConnector for OracleConnector {
    async fn open_cursor(&mut self, query: &str) -> Result<Box<dyn RowCursor>> {
        let conn = self.conn.take().ok_or_else(|| Error::SourceIoError("connection already in use".into()))?;
        let query = query.to_string();

        let (conn, columns, rows) = tokio::task::spawn_blocking(move || -> Result<_> {
            let probe = conn
                .query(&query, &[])
                .map_err(|e| Error::SourceIoError(e.to_string()))?;
            let column_pairs: Vec<(String, String)> = probe
                .column_info()
                .iter()
                .map(|c| (c.name().to_string(), driver_type_name(c.oracle_type())))
                .collect();
            drop(probe);

            let rewritten = rewrite_query(&query, &column_pairs);
            let result_set = conn
                .query(&rewritten, &[])
                .map_err(|e| Error::SourceIoError(e.to_string()))?;

            let mut columns = Vec::new();
            let mut rows = Vec::new();
            for (i, row) in result_set.enumerate() {
                let row = row.map_err(|e| Error::SourceIoError(e.to_string()))?;
                if i == 0 {
                    columns = row_columns(&row)?;
                }
                let mut values = Vec::with_capacity(columns.len());
                for (idx, col) in columns.iter().enumerate() {
                    values.push(value_from_row(&row, idx, col)?);
                }
                rows.push(values);
            }
            Ok((conn, columns, rows))
        })
        .await
        .map_err(|e| Error::SourceIoError(e.to_string()))??;

        self.conn = Some(conn);

        Ok(Box::new(OracleCursor {
            columns,
            rows: rows.into_iter(),
        }))
    }
}

struct OracleCursor {
    columns: Vec<ColumnMeta>,
    rows: std::vec::IntoIter<Vec<Value>>,
}

#[async_trait]
impl RowCursor for OracleCursor {
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

fn value_from_row(row: &OracleRow, idx: usize, col: &ColumnMeta) -> Result<Value> {
    use sqlpipe_types::TypeKind::*;

    let err = |reason: String| Error::FormatError {
        target: "Oracle",
        intermediate_type: col.intermediate_type,
        reason,
    };

    match col.intermediate_type.kind {
        SmallInt | Int | BigInt => Ok(row
            .get::<usize, Option<i64>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::I64)
            .unwrap_or(Value::Null)),
        Real | Double | Decimal => Ok(row
            .get::<usize, Option<f64>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::F64)
            .unwrap_or(Value::Null)),
        Char | Varchar | Text | RawText => Ok(row
            .get::<usize, Option<String>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::String)
            .unwrap_or(Value::Null)),
        Binary | Varbinary | Blob => Ok(row
            .get::<usize, Option<Vec<u8>>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Bytes)
            .unwrap_or(Value::Null)),
        Date => Ok(row
            .get::<usize, Option<chrono::NaiveDate>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Date)
            .unwrap_or(Value::Null)),
        Timestamp => Ok(row
            .get::<usize, Option<chrono::NaiveDateTime>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Timestamp)
            .unwrap_or(Value::Null)),
        TimestampTz => Ok(row
            .get::<usize, Option<chrono::DateTime<chrono::FixedOffset>>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::TimestampTz)
            .unwrap_or(Value::Null)),
        other => Err(err(format!("unsupported scan kind {other:?}"))),
    }
}

#[async_trait]
impl TargetConnector for OracleConnector {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        let conn = self.conn.take().ok_or_else(|| Error::TargetInsertError {
            stage: "batch-end",
            reason: "connection already in use".into(),
        })?;
        let sql = sql.to_string();

        let (conn, result) = tokio::task::spawn_blocking(move || {
            let result = conn.execute(&sql, &[]).map(|_| ()).map_err(|e| Error::TargetInsertError {
                stage: "batch-end",
                reason: e.to_string(),
            });
            (conn, result)
        })
        .await
        .map_err(|e| Error::TargetInsertError {
            stage: "batch-end",
            reason: e.to_string(),
        })?;

        self.conn = Some(conn);
        result
    }
}
