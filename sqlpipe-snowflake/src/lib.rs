mod connector;
mod ddl;
mod format;
mod insert_form;
mod types;

pub use connector::SnowflakeConnector;
pub use ddl::SnowflakeDialect;
pub use format::SnowflakeFormat;
pub use insert_form::SnowflakeInsertForm;
pub use types::intermediate_type_for;
