//! The pull-based streaming transfer engine: row pump, batch builder, and the
//! DDL/format dispatch traits each engine crate implements once per target.
//! Generic over source and target; holds no knowledge of any one relational
//! system.

mod batch;
mod ddl;
mod error;
mod format;
mod pump;
mod transfer;

pub use batch::{BatchBuilder, FlushPolicy, InsertForm, StandardInsertForm};
pub use ddl::DdlDialect;
pub use error::{Error, Result};
pub use format::{
    format_common, write_insert_bool, write_insert_escaped_string, write_insert_float, write_insert_hex_bytes,
    write_insert_int, write_insert_null, write_insert_raw_string_no_quotes, write_insert_string_no_escape,
    FormatDialect,
};
pub use pump::{RowCursor, SourceConnector};
pub use transfer::{Connection, TransferRequest};

pub use tokio_util::sync::CancellationToken;

/// A target, opened once per transfer. Owns the connection; the coordinator
/// calls `execute` for DDL statements and each flushed batch's INSERT text.
#[async_trait::async_trait]
pub trait TargetConnector: Send {
    async fn execute(&mut self, sql: &str) -> Result<()>;
}
