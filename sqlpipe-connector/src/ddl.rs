use sqlpipe_types::ColumnMeta;

/// Target-side DDL generation. One impl per engine crate
/// (`sqlpipe_postgres::PostgresDialect`, ...). `create_table`'s default body
/// covers every target except Oracle, whose `DROP TABLE` has no
/// `IF EXISTS` clause and must recover `ORA-00942` locally instead.
pub trait DdlDialect {
    fn quote_table(&self, schema: Option<&str>, table: &str) -> String;

    /// The target-specific DDL type for one column, e.g. `"timestamptz"` on
    /// PostgreSQL or `"uniqueidentifier"` on MSSQL.
    fn column_type(&self, column: &ColumnMeta) -> String;

    fn drop_table(&self, schema: Option<&str>, table: &str) -> String {
        format!("drop table if exists {}", self.quote_table(schema, table))
    }

    fn create_table(&self, schema: Option<&str>, table: &str, columns: &[ColumnMeta]) -> String {
        let cols = columns
            .iter()
            .map(|c| format!("{} {}", c.name, self.column_type(c)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("create table {} ({})", self.quote_table(schema, table), cols)
    }

    /// Oracle's bare `drop table` raises `ORA-00942` when the table is
    /// absent; that error is swallowed by the coordinator rather than
    /// surfaced, since every other target's `drop_table` already says
    /// `if exists`. Every other dialect returns `false` unconditionally.
    fn is_missing_table_error(&self, _message: &str) -> bool {
        false
    }
}
