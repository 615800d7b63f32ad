//! MSSQL source and target: type mapping, value formatting, DDL, and the
//! `tiberius`-backed connector.

mod connector;
mod ddl;
mod format;
mod insert_form;
mod types;

pub use connector::MssqlConnector;
pub use ddl::MssqlDialect;
pub use format::MssqlFormat;
pub use insert_form::MssqlInsertForm;
pub use types::intermediate_type_for;
