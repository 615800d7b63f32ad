use sqlpipe_types::{IntermediateType, System, TypeKind};

/// `<driver type name> -> IntermediateType`. MySQL's own drivers report
/// `DatabaseTypeName()`-style uppercase SQL type names, same convention the
/// MSSQL driver uses.
pub fn intermediate_type_for(driver_type: &str) -> Option<IntermediateType> {
    use TypeKind::*;
    let (tag, kind) = match driver_type {
        "BIT" => ("BIT", BitString),
        "TINYINT" => ("TINYINT", SmallInt),
        "SMALLINT" => ("SMALLINT", SmallInt),
        "MEDIUMINT" => ("MEDIUMINT", Int),
        "INT" => ("INT", Int),
        "BIGINT" => ("BIGINT", BigInt),
        "FLOAT" => ("FLOAT4", Real),
        "DOUBLE" => ("FLOAT8", Double),
        "DECIMAL" => ("DECIMAL", Decimal),
        "DATE" => ("DATE", Date),
        "TIME" => ("TIME", Time),
        "DATETIME" => ("DATETIME", Timestamp),
        "TIMESTAMP" => ("TIMESTAMP", Timestamp),
        "YEAR" => ("YEAR", SmallInt),
        "CHAR" => ("CHAR", Char),
        "VARCHAR" => ("VARCHAR", Varchar),
        "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" => ("TEXT", Text),
        "BINARY" => ("BINARY", Binary),
        "VARBINARY" => ("VARBINARY", Varbinary),
        "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" => ("BLOB", Blob),
        "GEOMETRY" => ("GEOMETRY", RawText),
        "JSON" => ("JSON", Json),
        _ => return None,
    };
    Some(IntermediateType::new(System::MySql, tag, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bigint() {
        let t = intermediate_type_for("BIGINT").unwrap();
        assert_eq!(t.to_string(), "MySQL_BIGINT");
        assert_eq!(t.kind, TypeKind::BigInt);
    }
}
