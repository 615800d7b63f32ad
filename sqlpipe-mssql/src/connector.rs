use async_trait::async_trait;
use tiberius::{Client, ColumnType, Query, Row};
use tokio::net::TcpStream;
use tokio_util::compat::Compat;

use sqlpipe_connector::{Error, Result, RowCursor, SourceConnector, TargetConnector};
use sqlpipe_types::{ColumnMeta, ScanType, Value};

use crate::types::intermediate_type_for;

/// Owns a live `tiberius` connection over a compat-wrapped TCP stream. One
/// `MssqlConnector` is used as either a transfer source or target.
pub struct MssqlConnector {
    client: Client<Compat<TcpStream>>,
}

impl MssqlConnector {
    pub fn new(client: Client<Compat<TcpStream>>) -> Self {
        Self { client }
    }
}

fn driver_type_name(ty: ColumnType) -> &'static str {
    use ColumnType::*;
    match ty {
        Bit | Bitn => "BIT",
        Int1 => "TINYINT",
        Int2 => "SMALLINT",
        Int4 => "INT",
        Int8 => "BIGINT",
        Float4 => "REAL",
        Float8 => "FLOAT",
        Money | Money4 => "MONEY",
        Decimaln | Numericn => "DECIMAL",
        Datetime | Datetime4 => "DATETIME",
        Datetime2 => "DATETIME2",
        DatetimeOffsetn => "DATETIMEOFFSET",
        Daten => "DATE",
        Timen => "TIME",
        Guid => "UNIQUEIDENTIFIER",
        Xml => "XML",
        BigBinary => "BINARY",
        BigVarBin | Image => "VARBINARY",
        BigChar => "CHAR",
        BigVarChar | Text => "VARCHAR",
        NChar => "NCHAR",
        NVarchar | NText => "NVARCHAR",
        _ => "VARCHAR",
    }
}

#[async_trait]
impl SourceConnector for MssqlConnector {
    async fn open_cursor(&mut self, query: &str) -> Result<Box<dyn RowCursor>> {
        let stream = Query::new(query)
            .query(&mut self.client)
            .await
            .map_err(|e| Error::SourceIoError(e.to_string()))?;

        let rows: Vec<Row> = stream
            .into_first_result()
            .await
            .map_err(|e| Error::SourceIoError(e.to_string()))?;

        let columns = match rows.first() {
            Some(row) => row_columns(row)?,
            None => Vec::new(),
        };

        Ok(Box::new(MssqlCursor {
            columns,
            rows: rows.into_iter(),
        }))
    }
}

fn row_columns(row: &Row) -> Result<Vec<ColumnMeta>> {
    row.columns()
        .iter()
        .map(|c| {
            let driver_type = driver_type_name(c.column_type()).to_string();
            let intermediate_type = intermediate_type_for(&driver_type).ok_or_else(|| Error::UnsupportedSourceType {
                system: "MSSQL",
                driver_type: driver_type.clone(),
            })?;
            Ok(ColumnMeta::new(c.name(), driver_type, intermediate_type, ScanType::Null, 0, 0, 0, true))
        })
        .collect()
}

struct MssqlCursor {
    columns: Vec<ColumnMeta>,
    rows: std::vec::IntoIter<Row>,
}

#[async_trait]
impl RowCursor for MssqlCursor {
    fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    async fn next_row(&mut self, buf: &mut [Value]) -> Result<bool> {
        let row = match self.rows.next() {
            Some(row) => row,
            None => return Ok(false),
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
        target: "MSSQL",
        intermediate_type: col.intermediate_type,
        reason,
    };

    match col.intermediate_type.kind {
        Bool => Ok(row.try_get::<bool, _>(idx).map_err(|e| err(e.to_string()))?.map(Value::Bool).unwrap_or(Value::Null)),
        SmallInt => Ok(row
            .try_get::<i16, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::I64(v as i64))
            .unwrap_or(Value::Null)),
        Int => Ok(row
            .try_get::<i32, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::I64(v as i64))
            .unwrap_or(Value::Null)),
        BigInt => Ok(row.try_get::<i64, _>(idx).map_err(|e| err(e.to_string()))?.map(Value::I64).unwrap_or(Value::Null)),
        Real => Ok(row
            .try_get::<f32, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::F64(v as f64))
            .unwrap_or(Value::Null)),
        Double => Ok(row.try_get::<f64, _>(idx).map_err(|e| err(e.to_string()))?.map(Value::F64).unwrap_or(Value::Null)),
        Decimal => Ok(row
            .try_get::<rust_decimal::Decimal, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Decimal)
            .unwrap_or(Value::Null)),
        Char | Varchar | Text | RawText => Ok(row
            .try_get::<&str, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::String(v.to_string()))
            .unwrap_or(Value::Null)),
        Xml => Ok(row
            .try_get::<&str, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::String(v.to_string()))
            .unwrap_or(Value::Null)),
        Binary | Varbinary | Blob => Ok(row
            .try_get::<&[u8], _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::Bytes(v.to_vec()))
            .unwrap_or(Value::Null)),
        Date => Ok(row
            .try_get::<chrono::NaiveDate, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Date)
            .unwrap_or(Value::Null)),
        Time => Ok(row
            .try_get::<chrono::NaiveTime, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Time)
            .unwrap_or(Value::Null)),
        Timestamp => Ok(row
            .try_get::<chrono::NaiveDateTime, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Timestamp)
            .unwrap_or(Value::Null)),
        TimestampTz => Ok(row
            .try_get::<chrono::DateTime<chrono::Utc>, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(|v| Value::TimestampTz(v.into()))
            .unwrap_or(Value::Null)),
        Uuid => Ok(row
            .try_get::<uuid::Uuid, _>(idx)
            .map_err(|e| err(e.to_string()))?
            .map(Value::Uuid)
            .unwrap_or(Value::Null)),
        other => Err(err(format!("unsupported scan kind {other:?}"))),
    }
}

#[async_trait]
impl TargetConnector for MssqlConnector {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        self.client
            .simple_query(sql)
            .await
            .map_err(|e| Error::TargetInsertError {
                stage: "batch-end",
                reason: e.to_string(),
            })?
            .into_results()
            .await
            .map(|_| ())
            .map_err(|e| Error::TargetInsertError {
                stage: "batch-end",
                reason: e.to_string(),
            })
    }
}
