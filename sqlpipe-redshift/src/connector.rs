use std::pin::Pin;

use async_trait::async_trait;
use futures::{Stream, TryStreamExt};
use sqlpipe_connector::{Error, Result, RowCursor, SourceConnector, TargetConnector};
use sqlpipe_types::{ColumnMeta, ScanType, Value};
use tokio_postgres::{Client, Row};

use crate::types::intermediate_type_for;

/// Owns a live `tokio-postgres` connection to Redshift - the cluster speaks
/// PostgreSQL's own wire protocol, so the same driver crate that backs the
/// PostgreSQL connector backs this one too.
pub struct RedshiftConnector {
    client: Client,
}

impl RedshiftConnector {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

type RowStream = Pin<Box<dyn Stream<Item = std::result::Result<Row, tokio_postgres::Error>> + Send>>;

#[async_trait]
impl SourceConnector for RedshiftConnector {
    async fn open_cursor(&mut self, query: &str) -> Result<Box<dyn RowCursor>> {
        let stream = self
            .client
            .query_raw(query, Vec::<String>::new())
            .await
            .map_err(|e| Error::SourceIoError(e.to_string()))?;
        let mut stream: RowStream = Box::pin(stream);

        let first = stream
            .try_next()
            .await
            .map_err(|e| Error::SourceIoError(e.to_string()))?;
        let columns = match &first {
            Some(row) => row_columns(row)?,
            None => Vec::new(),
        };

        Ok(Box::new(RedshiftCursor {
            columns,
            buffered_first: first,
            stream,
        }))
    }
}

fn row_columns(row: &Row) -> Result<Vec<ColumnMeta>> {
    row.columns()
        .iter()
        .map(|c| {
            let driver_type = c.type_().name().to_string();
            let intermediate_type = intermediate_type_for(&driver_type).ok_or_else(|| Error::UnsupportedSourceType {
                system: "Redshift",
                driver_type: driver_type.clone(),
            })?;
            Ok(ColumnMeta::new(c.name(), driver_type, intermediate_type, ScanType::Null, 0, 0, 0, true))
        })
        .collect()
}

/// Pulls one row at a time off the server, same as the PostgreSQL cursor -
/// Redshift leader nodes stream results the same way.
struct RedshiftCursor {
    columns: Vec<ColumnMeta>,
    buffered_first: Option<Row>,
    stream: RowStream,
}

#[async_trait]
impl RowCursor for RedshiftCursor {
    fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    async fn next_row(&mut self, buf: &mut [Value]) -> Result<bool> {
        let row = if let Some(row) = self.buffered_first.take() {
            row
        } else {
            match self.stream.try_next().await.map_err(|e| Error::SourceIoError(e.to_string()))? {
                Some(row) => row,
                None => return Ok(false),
            }
        };

        for (i, col) in self.columns.iter().enumerate() {
            buf[i] = value_from_row(&row, i, col)?;
        }
        Ok(true)
    }
}

fn value_from_row(row: &Row, idx: usize, col: &ColumnMeta) -> Result<Value> {
    use sqlpipe_types::TypeKind::*;
    let err = |reason: String| Error::FormatError {
        target: "Redshift",
        intermediate_type: col.intermediate_type,
        reason,
    };
    match col.intermediate_type.kind {
        Bool => Ok(row
            .try_get::<_, Option<bool>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Bool)
            .unwrap_or(Value::Null)),
        SmallInt => Ok(row
            .try_get::<_, Option<i16>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::I64(v as i64))
            .unwrap_or(Value::Null)),
        Int => Ok(row
            .try_get::<_, Option<i32>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::I64(v as i64))
            .unwrap_or(Value::Null)),
        BigInt => Ok(row
            .try_get::<_, Option<i64>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::I64)
            .unwrap_or(Value::Null)),
        Real => Ok(row
            .try_get::<_, Option<f32>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::F64(v as f64))
            .unwrap_or(Value::Null)),
        Double => Ok(row
            .try_get::<_, Option<f64>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::F64)
            .unwrap_or(Value::Null)),
        Decimal => Ok(row
            .try_get::<_, Option<rust_decimal::Decimal>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Decimal)
            .unwrap_or(Value::Null)),
        Char | Varchar | Text | RawText => Ok(row
            .try_get::<_, Option<String>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::String)
            .unwrap_or(Value::Null)),
        Date => Ok(row
            .try_get::<_, Option<chrono::NaiveDate>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Date)
            .unwrap_or(Value::Null)),
        Time => Ok(row
            .try_get::<_, Option<chrono::NaiveTime>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Time)
            .unwrap_or(Value::Null)),
        Timestamp => Ok(row
            .try_get::<_, Option<chrono::NaiveDateTime>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Timestamp)
            .unwrap_or(Value::Null)),
        TimestampTz => Ok(row
            .try_get::<_, Option<chrono::DateTime<chrono::Utc>>>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::TimestampTz(v.into()))
            .unwrap_or(Value::Null)),
        other => Err(err(format!("unsupported scan kind {other:?}"))),
    }
}

#[async_trait]
impl TargetConnector for RedshiftConnector {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        self.client
            .simple_query(sql)
            .await
            .map(|_| ())
            .map_err(|e| Error::TargetInsertError {
                stage: "batch-end",
                reason: e.to_string(),
            })
    }
}
