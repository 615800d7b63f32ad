use sqlpipe_connector::DdlDialect;
use sqlpipe_types::{ColumnMeta, TypeKind};

pub struct SnowflakeDialect;

impl DdlDialect for SnowflakeDialect {
    fn quote_table(&self, schema: Option<&str>, table: &str) -> String {
        match schema {
            Some(s) => format!("{s}.{table}"),
            None => table.to_string(),
        }
    }

    fn column_type(&self, column: &ColumnMeta) -> String {
        match column.intermediate_type.kind {
            TypeKind::Bool | TypeKind::SyncBool => "BOOLEAN".into(),
            TypeKind::SmallInt | TypeKind::Int | TypeKind::BigInt | TypeKind::SyncSmallInt | TypeKind::SyncInt | TypeKind::SyncBigInt => "NUMBER".into(),
            TypeKind::Real | TypeKind::Double | TypeKind::SyncFloat | TypeKind::SyncDouble => "FLOAT".into(),
            TypeKind::Decimal => format!("NUMBER({},{})", column.precision.max(1), column.scale.max(0)),
            TypeKind::Char | TypeKind::Varchar | TypeKind::Text | TypeKind::RawText | TypeKind::Xml => {
                format!("VARCHAR({})", column.length.clamp(1, 16_777_216))
            }
            TypeKind::BitString | TypeKind::Binary | TypeKind::Varbinary | TypeKind::Blob => "BINARY".into(),
            TypeKind::Date | TypeKind::SyncDate => "DATE".into(),
            TypeKind::Time => "TIME".into(),
            TypeKind::Timestamp | TypeKind::SyncTimestamp => "TIMESTAMP_NTZ".into(),
            TypeKind::TimestampTz | TypeKind::SyncTimestampTz => "TIMESTAMP_TZ".into(),
            TypeKind::Uuid => "VARCHAR(36)".into(),
            TypeKind::Json => "VARIANT".into(),
        }
    }
}
