use sqlpipe_types::{IntermediateType, System, TypeKind};

/// `<driver type name> -> IntermediateType`. Snowflake's ODBC driver reports
/// these as the column's SQL type name (`SQLDescribeCol`'s type name, the
/// same string Snowflake's own `DESCRIBE` / `information_schema.columns`
/// uses).
pub fn intermediate_type_for(driver_type: &str) -> Option<IntermediateType> {
    use TypeKind::*;
    let (tag, kind) = match driver_type {
        "NUMBER" => ("NUMBER", Decimal),
        "BINARY" => ("BINARY", Binary),
        "REAL" | "FLOAT" | "DOUBLE" => ("REAL", Double),
        "TEXT" | "VARCHAR" | "STRING" => ("TEXT", Text),
        "BOOLEAN" => ("BOOLEAN", Bool),
        "DATE" => ("DATE", Date),
        "TIME" => ("TIME", Time),
        "TIMESTAMP_LTZ" => ("TIMESTAMP_LTZ", TimestampTz),
        "TIMESTAMP_NTZ" => ("TIMESTAMP_NTZ", Timestamp),
        "TIMESTAMP_TZ" => ("TIMESTAMP_TZ", TimestampTz),
        // Semi-structured; carried as text and re-quoted by the target,
        // never parsed (see `sqlpipe_types::Value::Json`).
        "VARIANT" => ("VARIANT", Json),
        "OBJECT" => ("OBJECT", Json),
        "ARRAY" => ("ARRAY", Json),
        _ => return None,
    };
    Some(IntermediateType::new(System::Snowflake, tag, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_timestamp_ltz_to_timestamptz() {
        let t = intermediate_type_for("TIMESTAMP_LTZ").unwrap();
        assert_eq!(t.to_string(), "Snowflake_TIMESTAMP_LTZ");
        assert_eq!(t.kind, TypeKind::TimestampTz);
    }

    #[test]
    fn variant_carries_as_json() {
        let t = intermediate_type_for("VARIANT").unwrap();
        assert_eq!(t.kind, TypeKind::Json);
    }

    #[test]
    fn unknown_driver_type_has_no_mapping() {
        assert!(intermediate_type_for("GEOGRAPHY").is_none());
    }
}
