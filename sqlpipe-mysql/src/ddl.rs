use sqlpipe_connector::DdlDialect;
use sqlpipe_types::{ColumnMeta, TypeKind};

pub struct MysqlDialect;

impl DdlDialect for MysqlDialect {
    fn quote_table(&self, schema: Option<&str>, table: &str) -> String {
        match schema {
            Some(s) => format!("{s}.{table}"),
            None => table.to_string(),
        }
    }

    fn column_type(&self, column: &ColumnMeta) -> String {
        match column.intermediate_type.kind {
            TypeKind::Bool | TypeKind::SyncBool => "tinyint(1)".into(),
            TypeKind::SmallInt | TypeKind::SyncSmallInt => "smallint".into(),
            TypeKind::Int | TypeKind::SyncInt => "int".into(),
            TypeKind::BigInt | TypeKind::SyncBigInt => "bigint".into(),
            TypeKind::Real | TypeKind::SyncFloat => "float".into(),
            TypeKind::Double | TypeKind::SyncDouble => "double".into(),
            TypeKind::Decimal => format!("decimal({},{})", column.precision.max(1), column.scale.max(0)),
            TypeKind::Char => format!("char({})", column.length.max(1)),
            TypeKind::Varchar => format!("varchar({})", column.length.max(1)),
            TypeKind::Text | TypeKind::RawText => "text".into(),
            TypeKind::BitString => "varchar(8000)".into(),
            TypeKind::Binary => format!("binary({})", column.length.max(1)),
            TypeKind::Varbinary => format!("varbinary({})", column.length.max(1)),
            TypeKind::Blob => "blob".into(),
            TypeKind::Date | TypeKind::SyncDate => "date".into(),
            TypeKind::Time => "time".into(),
            TypeKind::Timestamp | TypeKind::SyncTimestamp => "datetime".into(),
            TypeKind::TimestampTz | TypeKind::SyncTimestampTz => "timestamp".into(),
            TypeKind::Uuid => "char(36)".into(),
            TypeKind::Json => "json".into(),
            TypeKind::Xml => "text".into(),
        }
    }
}
