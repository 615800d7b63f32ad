//! Oracle source and target: type mapping, value formatting, the
//! dual-union insert form, query rewriting, and the `oracle`-crate-backed
//! connector.

mod connector;
mod ddl;
mod format;
mod insert_form;
mod types;

pub use connector::OracleConnector;
pub use ddl::OracleDialect;
pub use format::OracleFormat;
pub use insert_form::OracleInsertForm;
pub use types::{intermediate_type_for, rewrite_query};
