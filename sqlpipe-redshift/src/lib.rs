mod connector;
mod ddl;
mod format;
mod insert_form;
mod types;

pub use connector::RedshiftConnector;
pub use ddl::RedshiftDialect;
pub use format::RedshiftFormat;
pub use insert_form::RedshiftInsertForm;
pub use types::intermediate_type_for;
