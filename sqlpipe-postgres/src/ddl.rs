use sqlpipe_connector::DdlDialect;
use sqlpipe_types::{ColumnMeta, TypeKind};

pub struct PostgresDialect;

impl DdlDialect for PostgresDialect {
    fn quote_table(&self, schema: Option<&str>, table: &str) -> String {
        match schema {
            Some(s) => format!("{s}.{table}"),
            None => table.to_string(),
        }
    }

    fn column_type(&self, column: &ColumnMeta) -> String {
        match column.intermediate_type.kind {
            TypeKind::Bool | TypeKind::SyncBool => "boolean".into(),
            TypeKind::SmallInt | TypeKind::SyncSmallInt => "smallint".into(),
            TypeKind::Int | TypeKind::SyncInt => "integer".into(),
            TypeKind::BigInt | TypeKind::SyncBigInt => "bigint".into(),
            TypeKind::Real | TypeKind::SyncFloat => "real".into(),
            TypeKind::Double | TypeKind::SyncDouble => "double precision".into(),
            TypeKind::Decimal => format!("numeric({},{})", column.precision.max(1), column.scale.max(0)),
            TypeKind::Char => format!("char({})", column.length.max(1)),
            TypeKind::Varchar => format!("varchar({})", column.length.max(1)),
            TypeKind::Text | TypeKind::RawText => "text".into(),
            TypeKind::Binary | TypeKind::Varbinary | TypeKind::Blob => "bytea".into(),
            TypeKind::Date | TypeKind::SyncDate => "date".into(),
            TypeKind::Time => "time".into(),
            TypeKind::Timestamp | TypeKind::SyncTimestamp => "timestamp".into(),
            TypeKind::TimestampTz | TypeKind::SyncTimestampTz => "timestamptz".into(),
            TypeKind::Uuid => "uuid".into(),
            TypeKind::Json => "jsonb".into(),
            TypeKind::Xml => "xml".into(),
            TypeKind::BitString => "varchar(8000)".into(),
        }
    }
}
