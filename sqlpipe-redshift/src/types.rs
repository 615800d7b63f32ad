use sqlpipe_types::{IntermediateType, System, TypeKind};

/// `<driver type name> -> IntermediateType`. Redshift speaks the PostgreSQL
/// wire protocol, so `tokio_postgres::Type::name()` reports the same
/// `pg_catalog` type names PostgreSQL does - but Redshift's own type system
/// is a smaller, older subset of it (no `bytea`, `json`, `uuid`, `xml`; no
/// arbitrary-precision `numeric` without declared scale). Only the types
/// Redshift actually exposes are mapped here.
pub fn intermediate_type_for(driver_type: &str) -> Option<IntermediateType> {
    use TypeKind::*;
    let (tag, kind) = match driver_type {
        "bool" => ("BOOLEAN", Bool),
        "int2" => ("SMALLINT", SmallInt),
        "int4" => ("INT", Int),
        "int8" => ("BIGINT", BigInt),
        "float4" => ("REAL", Real),
        "float8" => ("DOUBLE", Double),
        "numeric" => ("NUMERIC", Decimal),
        "bpchar" => ("BPCHAR", Text),
        "varchar" => ("VARCHAR", Varchar),
        "date" => ("DATE", Date),
        "time" => ("TIME", Time),
        "timetz" => ("TIMETZ", RawText),
        "timestamp" => ("TIMESTAMP", Timestamp),
        "timestamptz" => ("TIMESTAMPTZ", TimestampTz),
        _ => return None,
    };
    Some(IntermediateType::new(System::Redshift, tag, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_timestamptz_to_canonical_tag() {
        let t = intermediate_type_for("timestamptz").unwrap();
        assert_eq!(t.to_string(), "Redshift_TIMESTAMPTZ");
        assert_eq!(t.kind, TypeKind::TimestampTz);
    }

    #[test]
    fn bpchar_carries_as_text_not_fixed_char() {
        let t = intermediate_type_for("bpchar").unwrap();
        assert_eq!(t.kind, TypeKind::Text);
    }

    #[test]
    fn unknown_driver_type_has_no_mapping() {
        assert!(intermediate_type_for("bytea").is_none());
    }
}
