use sqlpipe_types::{IntermediateType, System, TypeKind};

/// `<driver type name> -> IntermediateType`. These names come straight off
/// `oracle::ColumnInfo::oracle_type()`'s `Display` impl, not a SQL type name
/// table: `OCIClobLocator`/`OCIBlobLocator`/`IBFloat`/`IBDouble`/
/// `TimeStampTZ_DTY`/... are ODPI-C's own internal type tags.
pub fn intermediate_type_for(driver_type: &str) -> Option<IntermediateType> {
    use TypeKind::*;
    let (tag, kind) = match driver_type {
        "CHAR" => ("CHAR", Char),
        "NCHAR" => ("NCHAR", Char),
        // VARCHAR2/NVARCHAR2 aren't in the original driver type switch (they
        // fall through the generic string scan-type branch there); named
        // explicitly here since this driver reports them distinctly.
        "VARCHAR2" => ("VARCHAR2", Varchar),
        "NVARCHAR2" => ("NVARCHAR2", Varchar),
        "OCIClobLocator" => ("OCIClobLocator", Text),
        "OCIBlobLocator" => ("OCIBlobLocator", Blob),
        "RAW" | "LONG_RAW" => ("RAW", Binary),
        "LONG" => ("LONG", Text),
        "NUMBER" => ("NUMBER", Decimal),
        "IBFloat" => ("IBFloat", Real),
        "IBDouble" => ("IBDouble", Double),
        "DATE" => ("DATE", Date),
        "TimeStampDTY" => ("TimeStampDTY", Timestamp),
        "TimeStampTZ_DTY" => ("TimeStampTZ_DTY", TimestampTz),
        "TimeStampLTZ_DTY" => ("TimeStampLTZ_DTY", TimestampTz),
        // ODPI-C reports a handful of types (NOT, OracleType(109)) that the
        // source side can only recover by casting them to VARCHAR first; see
        // `rewrite_query`.
        "NOT" => ("NOT", RawText),
        "OracleType(109)" => ("OracleType(109)", RawText),
        _ => return None,
    };
    Some(IntermediateType::new(System::Oracle, tag, kind))
}

/// Oracle predates the multi-row-VALUES `INSERT` syntax; a row is written as
/// `SELECT v1,v2 FROM dual`, rows are joined with `UNION ALL`, and the whole
/// thing is used as the source of a `WITH ... AS (...) INSERT INTO ...`
/// common table expression.
///
/// Rewrites a source query so that columns whose driver type cannot be
/// selected directly (`TimeStampTZ_DTY`/`TimeStampLTZ_DTY`/`IBFloat`/
/// `IBDouble`/`OracleType(109)`/`NOT`) are wrapped in an explicit `CAST`,
/// matching what each of those driver types is widened to by
/// [`intermediate_type_for`]. Naive: splits on the first case-insensitive
/// `FROM`, so a query with `from` appearing earlier (e.g. in a string
/// literal or column alias) will rewrite incorrectly. This mirrors a
/// documented limitation of the system transferring from Oracle, not a new
/// one.
pub fn rewrite_query(query: &str, columns: &[(String, String)]) -> String {
    let lower = query.to_lowercase();
    let Some(from_idx) = lower.find("from") else {
        return query.to_string();
    };
    let rest = &query[from_idx + "from".len()..];

    let mut select = String::from("SELECT ");
    for (i, (name, driver_type)) in columns.iter().enumerate() {
        if i > 0 {
            select.push_str(", ");
        }
        match driver_type.as_str() {
            "TimeStampTZ_DTY" | "TimeStampLTZ_DTY" => {
                select.push_str(&format!("CAST({name} as TIMESTAMP) as {name}"));
            }
            "IBFloat" | "IBDouble" => {
                select.push_str(&format!("CAST({name} as NUMBER) as {name}"));
            }
            "OracleType(109)" | "NOT" => {
                select.push_str(&format!("CAST({name} as VARCHAR) as {name}"));
            }
            _ => select.push_str(name),
        }
    }
    select.push_str(" FROM");
    select.push_str(rest);
    select
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_timestamptz_dty_to_timestamptz() {
        let t = intermediate_type_for("TimeStampTZ_DTY").unwrap();
        assert_eq!(t.to_string(), "Oracle_TimeStampTZ_DTY");
        assert_eq!(t.kind, TypeKind::TimestampTz);
    }

    #[test]
    fn unknown_driver_type_has_no_mapping() {
        assert!(intermediate_type_for("BFILE").is_none());
    }

    #[test]
    fn rewrite_casts_unsupported_columns_and_preserves_rest_of_query() {
        let rewritten = rewrite_query(
            "select a, b from widgets where id = 1",
            &[("A".into(), "IBFloat".into()), ("B".into(), "CHAR".into())],
        );
        assert_eq!(rewritten, "SELECT CAST(A as NUMBER) as A, B FROM widgets where id = 1");
    }

    #[test]
    fn rewrite_is_a_no_op_when_every_column_is_already_supported() {
        let rewritten = rewrite_query("select a, b from widgets", &[("A".into(), "CHAR".into()), ("B".into(), "NUMBER".into())]);
        assert_eq!(rewritten, "SELECT A, B FROM widgets");
    }
}
