use async_trait::async_trait;
use sqlpipe_connector::{DdlDialect, Error, FlushPolicy, FormatDialect, Result, RowCursor, SourceConnector, StandardInsertForm, TargetConnector};
use sqlpipe_types::{ColumnMeta, IntermediateType, Value};

/// An in-memory source: the rows are supplied up front rather than fetched
/// over a network, the same role `dozer_ingestion_connector::test_util`'s
/// fixtures play for the teacher's CDC connectors.
pub struct FakeSource {
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<Vec<Value>>,
}

pub struct FakeCursor {
    columns: Vec<ColumnMeta>,
    rows: std::vec::IntoIter<Vec<Value>>,
}

#[async_trait]
impl SourceConnector for FakeSource {
    async fn open_cursor(&mut self, _query: &str) -> Result<Box<dyn RowCursor>> {
        Ok(Box::new(FakeCursor {
            columns: self.columns.clone(),
            rows: self.rows.clone().into_iter(),
        }))
    }
}

#[async_trait]
impl RowCursor for FakeCursor {
    fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    async fn next_row(&mut self, buf: &mut [Value]) -> Result<bool> {
        match self.rows.next() {
            Some(row) => {
                buf.clone_from_slice(&row);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Records every statement it was asked to execute; can be told to fail on a
/// specific 1-based execution number to drive E5 (mid-batch insert failure).
#[derive(Default)]
pub struct FakeTarget {
    pub executed: Vec<String>,
    pub fail_on_execution: Option<usize>,
}

#[async_trait]
impl TargetConnector for FakeTarget {
    async fn execute(&mut self, sql: &str) -> Result<()> {
        let n = self.executed.len() + 1;
        if self.fail_on_execution == Some(n) {
            return Err(Error::SourceIoError("simulated target failure".into()));
        }
        self.executed.push(sql.to_string());
        Ok(())
    }
}

pub struct FakeDdl;

impl DdlDialect for FakeDdl {
    fn quote_table(&self, schema: Option<&str>, table: &str) -> String {
        match schema {
            Some(s) => format!("{s}.{table}"),
            None => table.to_string(),
        }
    }

    fn column_type(&self, column: &ColumnMeta) -> String {
        column.driver_type.clone()
    }
}

pub struct FakeFormat;

impl FormatDialect for FakeFormat {
    fn system(&self) -> &'static str {
        "Fake"
    }

    fn format(&self, intermediate_type: IntermediateType, value: &Value, terminator: &str) -> Result<String> {
        sqlpipe_connector::format_common("Fake", intermediate_type, value, terminator)
            .unwrap_or_else(|| Ok(format!("{value:?}{terminator}")))
    }
}

pub fn row_count_form(n: usize) -> StandardInsertForm {
    StandardInsertForm {
        flush_policy: FlushPolicy::RowCount(n),
    }
}
