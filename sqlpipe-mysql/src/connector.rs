use async_trait::async_trait;
use mysql_async::consts::ColumnType;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Row};
use sqlpipe_connector::{Error, Result, RowCursor, SourceConnector, TargetConnector};
use sqlpipe_types::{ColumnMeta, ScanType, Value};

use crate::types::intermediate_type_for;

/// Owns a live `mysql_async` connection, used as either a transfer source or
/// target.
pub struct MysqlConnector {
    conn: Conn,
}

impl MysqlConnector {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }
}

fn driver_type_name(ty: ColumnType) -> &'static str {
    use ColumnType::*;
    match ty {
        MYSQL_TYPE_TINY => "TINYINT",
        MYSQL_TYPE_SHORT => "SMALLINT",
        MYSQL_TYPE_INT24 => "MEDIUMINT",
        MYSQL_TYPE_LONG => "INT",
        MYSQL_TYPE_LONGLONG => "BIGINT",
        MYSQL_TYPE_FLOAT => "FLOAT",
        MYSQL_TYPE_DOUBLE => "DOUBLE",
        MYSQL_TYPE_NEWDECIMAL | MYSQL_TYPE_DECIMAL => "DECIMAL",
        MYSQL_TYPE_DATE => "DATE",
        MYSQL_TYPE_TIME => "TIME",
        MYSQL_TYPE_DATETIME => "DATETIME",
        MYSQL_TYPE_TIMESTAMP => "TIMESTAMP",
        MYSQL_TYPE_YEAR => "YEAR",
        MYSQL_TYPE_VARCHAR | MYSQL_TYPE_VAR_STRING => "VARCHAR",
        MYSQL_TYPE_STRING => "CHAR",
        MYSQL_TYPE_TINY_BLOB | MYSQL_TYPE_MEDIUM_BLOB | MYSQL_TYPE_LONG_BLOB | MYSQL_TYPE_BLOB => "BLOB",
        MYSQL_TYPE_BIT => "BIT",
        MYSQL_TYPE_JSON => "JSON",
        MYSQL_TYPE_GEOMETRY => "GEOMETRY",
        _ => "TEXT",
    }
}

#[async_trait]
impl SourceConnector for MysqlConnector {
    async fn open_cursor(&mut self, query: &str) -> Result<Box<dyn RowCursor>> {
        let result = self
            .conn
            .query_iter(query)
            .await
            .map_err(|e| Error::SourceIoError(e.to_string()))?;

        let columns = result
            .columns()
            .map(|cols| {
                cols.as_ref()
                    .iter()
                    .map(|c| {
                        let driver_type = driver_type_name(c.column_type()).to_string();
                        let intermediate_type = intermediate_type_for(&driver_type).ok_or_else(|| Error::UnsupportedSourceType {
                            system: "MySQL",
                            driver_type: driver_type.clone(),
                        })?;
                        Ok(ColumnMeta::new(
                            c.name_str().into_owned(),
                            driver_type,
                            intermediate_type,
                            ScanType::Null,
                            0,
                            0,
                            0,
                            true,
                        ))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .transpose()?
            .unwrap_or_default();

        let rows: Vec<Row> = result
            .collect_and_drop::<Row>()
            .await
            .map_err(|e| Error::SourceIoError(e.to_string()))?;

        Ok(Box::new(MysqlCursor {
            columns,
            rows: rows.into_iter(),
        }))
    }
}

struct MysqlCursor {
    columns: Vec<ColumnMeta>,
    rows: std::vec::IntoIter<Row>,
}

#[async_trait]
impl RowCursor for MysqlCursor {
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
    use mysql_async::Value as MyValue;
    use sqlpipe_types::TypeKind::*;

    let raw = row.as_ref(idx).cloned().unwrap_or(MyValue::NULL);
    if matches!(raw, MyValue::NULL) {
        return Ok(Value::Null);
    }

    let err = |reason: String| Error::FormatError {
        target: "MySQL",
        intermediate_type: col.intermediate_type,
        reason,
    };

    match col.intermediate_type.kind {
        SmallInt | Int | BigInt => {
            let v: i64 = mysql_async::from_value_opt(raw).map_err(|e| err(e.to_string()))?;
            Ok(Value::I64(v))
        }
        Real | Double | Decimal => {
            let v: f64 = mysql_async::from_value_opt(raw).map_err(|e| err(e.to_string()))?;
            Ok(Value::F64(v))
        }
        Char | Varchar | Text | RawText | Json => {
            let v: String = mysql_async::from_value_opt(raw).map_err(|e| err(e.to_string()))?;
            Ok(if col.intermediate_type.kind == Json { Value::Json(v) } else { Value::String(v) })
        }
        Binary | Varbinary | Blob | BitString => {
            let v: Vec<u8> = mysql_async::from_value_opt(raw).map_err(|e| err(e.to_string()))?;
            Ok(Value::Bytes(v))
        }
        Date => {
            let v: chrono::NaiveDate = mysql_async::from_value_opt(raw).map_err(|e| err(e.to_string()))?;
            Ok(Value::Date(v))
        }
        Time => {
            let v: chrono::NaiveTime = mysql_async::from_value_opt(raw).map_err(|e| err(e.to_string()))?;
            Ok(Value::Time(v))
        }
        Timestamp => {
            let v: chrono::NaiveDateTime = mysql_async::from_value_opt(raw).map_err(|e| err(e.to_string()))?;
            Ok(Value::Timestamp(v))
        }
        other => Err(err(format!("unsupported scan kind {other:?}"))),
    }
}

#[async_trait]
impl TargetConnector for MysqlConnector {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        self.conn
            .query_drop(sql)
            .await
            .map_err(|e| Error::TargetInsertError {
                stage: "batch-end",
                reason: e.to_string(),
            })
    }
}
