//! MySQL source and target: type mapping, value formatting, DDL, and the
//! `mysql_async`-backed connector.

mod connector;
mod ddl;
mod format;
mod insert_form;
mod types;

pub use connector::MysqlConnector;
pub use ddl::MysqlDialect;
pub use format::MysqlFormat;
pub use insert_form::MysqlInsertForm;
pub use types::intermediate_type_for;
