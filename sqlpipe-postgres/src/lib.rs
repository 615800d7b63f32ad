//! PostgreSQL engine crate: driver-type-to-intermediate-type mapping, value
//! formatting and DDL generation for PostgreSQL as a transfer target, and
//! the `tokio-postgres`-backed source/target connector.

mod connector;
mod ddl;
mod format;
mod insert_form;
mod types;

pub use connector::PostgresConnector;
pub use ddl::PostgresDialect;
pub use format::PostgresFormat;
pub use insert_form::PostgresInsertForm;
pub use types::intermediate_type_for;
