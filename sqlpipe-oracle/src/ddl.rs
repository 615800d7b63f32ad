use sqlpipe_connector::DdlDialect;
use sqlpipe_types::{ColumnMeta, TypeKind};

/// Oracle has no real notion of schemas the way the other five targets do,
/// so `quote_table` ignores `schema` entirely.
pub struct OracleDialect;

impl DdlDialect for OracleDialect {
    fn quote_table(&self, _schema: Option<&str>, table: &str) -> String {
        table.to_string()
    }

    /// Oracle has no `DROP TABLE IF EXISTS`; a missing table is instead
    /// recovered by swallowing `ORA-00942` (see `is_missing_table_error`).
    fn drop_table(&self, schema: Option<&str>, table: &str) -> String {
        format!("drop table {}", self.quote_table(schema, table))
    }

    fn column_type(&self, column: &ColumnMeta) -> String {
        match column.intermediate_type.kind {
            TypeKind::Bool | TypeKind::SyncBool => "NUMBER(1)".into(),
            TypeKind::SmallInt | TypeKind::Int | TypeKind::SyncSmallInt | TypeKind::SyncInt => "INTEGER".into(),
            TypeKind::BigInt | TypeKind::SyncBigInt => "NUMBER(19,0)".into(),
            TypeKind::Real | TypeKind::SyncFloat => "BINARY_FLOAT".into(),
            TypeKind::Double | TypeKind::SyncDouble => "BINARY_DOUBLE".into(),
            TypeKind::Decimal => format!("NUMBER({},{})", column.precision.max(1), column.scale.max(0)),
            TypeKind::Char => format!("VARCHAR2({})", column.length.clamp(1, 4000)),
            TypeKind::Varchar => format!("NVARCHAR2({})", column.length.clamp(1, 2000)),
            TypeKind::Text | TypeKind::RawText => "NVARCHAR2(2000)".into(),
            TypeKind::BitString => "VARCHAR2(4000)".into(),
            TypeKind::Binary | TypeKind::Varbinary | TypeKind::Blob => "BLOB".into(),
            TypeKind::Date | TypeKind::SyncDate => "DATE".into(),
            TypeKind::Time => "VARCHAR2(4000)".into(),
            TypeKind::Timestamp | TypeKind::SyncTimestamp => "TIMESTAMP".into(),
            TypeKind::TimestampTz | TypeKind::SyncTimestampTz => "TIMESTAMP WITH TIME ZONE".into(),
            TypeKind::Uuid => "VARCHAR2(4000)".into(),
            TypeKind::Json => "NVARCHAR2(2000)".into(),
            TypeKind::Xml => "NVARCHAR2(2000)".into(),
        }
    }

    /// `dropTable` in the original swallows `ORA-00942: table or view does
    /// not exist` rather than treating a missing table as a transfer error.
    fn is_missing_table_error(&self, message: &str) -> bool {
        message.contains("ORA-00942")
    }
}
