use sqlpipe_types::{IntermediateType, System, TypeKind};

/// `<driver type name> -> IntermediateType`, mirroring the driver-reported
/// `pg_catalog` type names `tokio_postgres::Type::name()` returns.
///
/// `None` means the driver reported a type this engine has no mapping for;
/// the caller turns that into `Error::UnsupportedSourceType`.
pub fn intermediate_type_for(driver_type: &str) -> Option<IntermediateType> {
    use TypeKind::*;
    let (tag, kind) = match driver_type {
        "bool" => ("BOOLEAN", Bool),
        "int2" => ("INT2", SmallInt),
        "int4" => ("INT4", Int),
        "int8" => ("BIGINT", BigInt),
        "float4" => ("FLOAT4", Real),
        "float8" => ("FLOAT8", Double),
        "numeric" => ("DECIMAL", Decimal),
        "bpchar" => ("BPCHAR", Char),
        "varchar" => ("VARCHAR", Varchar),
        "text" => ("TEXT", Text),
        "bytea" => ("BYTEA", Blob),
        "date" => ("DATE", Date),
        "time" => ("TIME", Time),
        "timestamp" => ("TIMESTAMP", Timestamp),
        "timestamptz" => ("TIMESTAMPTZ", TimestampTz),
        "uuid" => ("UUID", Uuid),
        "json" => ("JSON", Json),
        "jsonb" => ("JSONB", Json),
        "xml" => ("XML", Xml),
        "bit" => ("BIT", RawText),
        "varbit" => ("VARBIT", RawText),
        "timetz" => ("TIMETZ", RawText),
        "interval" => ("INTERVAL", RawText),
        "money" => ("MONEY", RawText),
        "inet" => ("INET", RawText),
        "cidr" => ("CIDR", RawText),
        "macaddr" => ("MACADDR", RawText),
        _ => return None,
    };
    Some(IntermediateType::new(System::PostgreSql, tag, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_timestamptz_to_canonical_tag() {
        let t = intermediate_type_for("timestamptz").unwrap();
        assert_eq!(t.to_string(), "PostgreSQL_TIMESTAMPTZ");
        assert_eq!(t.kind, TypeKind::TimestampTz);
    }

    #[test]
    fn unknown_driver_type_has_no_mapping() {
        assert!(intermediate_type_for("some_extension_type").is_none());
    }
}
