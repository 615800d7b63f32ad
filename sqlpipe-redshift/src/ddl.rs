use sqlpipe_connector::DdlDialect;
use sqlpipe_types::{ColumnMeta, TypeKind};

pub struct RedshiftDialect;

impl DdlDialect for RedshiftDialect {
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
            TypeKind::Char => format!("varchar({})", column.length.clamp(1, 65535)),
            TypeKind::Varchar => format!("varchar({})", column.length.clamp(1, 65535)),
            // No unbounded text type; Redshift's varchar tops out at 65535 bytes.
            TypeKind::Text | TypeKind::RawText | TypeKind::BitString | TypeKind::Json | TypeKind::Xml => "varchar(65535)".into(),
            // No native binary type until `varbyte` (Redshift 1.0.23978+).
            TypeKind::Binary | TypeKind::Varbinary | TypeKind::Blob => "varbyte".into(),
            TypeKind::Date | TypeKind::SyncDate => "date".into(),
            TypeKind::Time => "time".into(),
            TypeKind::Timestamp | TypeKind::SyncTimestamp => "timestamp".into(),
            TypeKind::TimestampTz | TypeKind::SyncTimestampTz => "timestamptz".into(),
            // No native uuid type.
            TypeKind::Uuid => "varchar(36)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlpipe_types::{ColumnMeta, IntermediateType, ScanType, System};

    fn column(kind: TypeKind) -> ColumnMeta {
        ColumnMeta::new(
            "c",
            "driver",
            IntermediateType::new(System::PostgreSql, "X", kind),
            ScanType::Null,
            10,
            5,
            2,
            true,
        )
    }

    #[test]
    fn blob_maps_to_varbyte() {
        let dialect = RedshiftDialect;
        assert_eq!(dialect.column_type(&column(TypeKind::Blob)), "varbyte");
    }

    #[test]
    fn text_clamps_to_max_varchar_width() {
        let dialect = RedshiftDialect;
        assert_eq!(dialect.column_type(&column(TypeKind::Text)), "varchar(65535)");
    }
}
