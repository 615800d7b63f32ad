use sqlpipe_types::{IntermediateType, System, TypeKind};

/// `<driver type name> -> IntermediateType`. The `tiberius` column metadata
/// reports the same uppercase SQL Server type names `database/sql`-style
/// drivers use (`BIGINT`, `DATETIMEOFFSET`, `UNIQUEIDENTIFIER`, ...).
pub fn intermediate_type_for(driver_type: &str) -> Option<IntermediateType> {
    use TypeKind::*;
    let (tag, kind) = match driver_type {
        "BIGINT" => ("BIGINT", BigInt),
        "BIT" => ("BIT", Bool),
        "DECIMAL" => ("DECIMAL", Decimal),
        "INT" => ("INT", Int),
        "MONEY" => ("MONEY", RawText),
        "SMALLINT" => ("SMALLINT", SmallInt),
        "SMALLMONEY" => ("SMALLMONEY", RawText),
        "TINYINT" => ("TINYINT", SmallInt),
        "FLOAT" => ("FLOAT", Double),
        "REAL" => ("REAL", Real),
        "DATE" => ("DATE", Date),
        "DATETIME2" => ("DATETIME2", Timestamp),
        "DATETIME" => ("DATETIME", Timestamp),
        "DATETIMEOFFSET" => ("DATETIMEOFFSET", TimestampTz),
        "SMALLDATETIME" => ("SMALLDATETIME", Timestamp),
        "TIME" => ("TIME", Time),
        "CHAR" => ("CHAR", Char),
        "VARCHAR" => ("VARCHAR", Varchar),
        "TEXT" => ("TEXT", Text),
        "NCHAR" => ("NCHAR", Char),
        "NVARCHAR" => ("NVARCHAR", Varchar),
        "NTEXT" => ("NTEXT", Text),
        "BINARY" => ("BINARY", Binary),
        "VARBINARY" => ("VARBINARY", Varbinary),
        "UNIQUEIDENTIFIER" => ("UNIQUEIDENTIFIER", Uuid),
        "XML" => ("XML", Xml),
        _ => return None,
    };
    Some(IntermediateType::new(System::Mssql, tag, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_datetimeoffset_to_timestamptz() {
        let t = intermediate_type_for("DATETIMEOFFSET").unwrap();
        assert_eq!(t.to_string(), "MSSQL_DATETIMEOFFSET");
        assert_eq!(t.kind, TypeKind::TimestampTz);
    }

    #[test]
    fn unknown_driver_type_has_no_mapping() {
        assert!(intermediate_type_for("HIERARCHYID").is_none());
    }
}
