use async_trait::async_trait;
use sqlpipe_types::{ColumnMeta, Value};

use crate::error::Result;

/// A source, opened once per transfer. Produces one [`RowCursor`] over the
/// transfer's query; the connection itself is closed by its owner, not by
/// the cursor.
#[async_trait]
pub trait SourceConnector: Send {
    async fn open_cursor(&mut self, query: &str) -> Result<Box<dyn RowCursor>>;
}

/// Pulls rows from a source one at a time. Bounded memory: the coordinator
/// reuses a single row buffer across the whole transfer rather than
/// collecting rows, the natural shape for `tokio-postgres::RowStream`,
/// `mysql_async`'s `QueryResult` and `tiberius`'s `QueryStream` alike.
#[async_trait]
pub trait RowCursor: Send {
    /// Column metadata for this query's result set. Stable for the cursor's
    /// lifetime; read once by the coordinator before the first row.
    fn columns(&self) -> &[ColumnMeta];

    /// Scans the next row into `buf`, which has exactly `columns().len()`
    /// slots. Returns `false` once the cursor is exhausted, at which point
    /// `buf` is left unchanged.
    async fn next_row(&mut self, buf: &mut [Value]) -> Result<bool>;
}
