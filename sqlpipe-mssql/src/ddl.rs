use sqlpipe_connector::DdlDialect;
use sqlpipe_types::{ColumnMeta, TypeKind};

pub struct MssqlDialect;

impl DdlDialect for MssqlDialect {
    fn quote_table(&self, schema: Option<&str>, table: &str) -> String {
        match schema {
            Some(s) => format!("[{s}].[{table}]"),
            None => format!("[{table}]"),
        }
    }

    fn column_type(&self, column: &ColumnMeta) -> String {
        match column.intermediate_type.kind {
            TypeKind::Bool | TypeKind::SyncBool => "BIT".into(),
            TypeKind::SmallInt | TypeKind::SyncSmallInt => "SMALLINT".into(),
            TypeKind::Int | TypeKind::SyncInt => "INT".into(),
            TypeKind::BigInt | TypeKind::SyncBigInt => "BIGINT".into(),
            TypeKind::Real | TypeKind::SyncFloat => "REAL".into(),
            TypeKind::Double | TypeKind::SyncDouble => "FLOAT".into(),
            TypeKind::Decimal => format!("DECIMAL({},{})", column.precision.max(1), column.scale.max(0)),
            TypeKind::Char => format!("NVARCHAR({})", column.length.clamp(1, 4000)),
            TypeKind::Varchar => format!("NVARCHAR({})", column.length.clamp(1, 4000)),
            TypeKind::Text | TypeKind::RawText => "NTEXT".into(),
            TypeKind::BitString => "VARCHAR(8000)".into(),
            TypeKind::Binary => format!("BINARY({})", column.length.max(1)),
            TypeKind::Varbinary => format!("VARBINARY({})", column.length.clamp(1, 8000)),
            TypeKind::Blob => "VARBINARY(8000)".into(),
            TypeKind::Date | TypeKind::SyncDate => "DATE".into(),
            TypeKind::Time => "TIME".into(),
            TypeKind::Timestamp | TypeKind::SyncTimestamp => "DATETIME2".into(),
            TypeKind::TimestampTz | TypeKind::SyncTimestampTz => "DATETIMEOFFSET".into(),
            TypeKind::Uuid => "UNIQUEIDENTIFIER".into(),
            TypeKind::Json => "NVARCHAR(4000)".into(),
            TypeKind::Xml => "XML".into(),
        }
    }
}
