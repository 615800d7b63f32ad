use sqlpipe_types::{IntermediateType, TypeKind, Value};

use crate::error::{Error, Result};

/// Formats one scanned value as the literal text to splice into a target
/// INSERT statement. One impl per engine crate; `format` dispatches on
/// [`TypeKind`] rather than the full [`IntermediateType`] because dozens of
/// intermediate type tags share the same literal syntax on a given target.
pub trait FormatDialect {
    fn system(&self) -> &'static str;

    /// `terminator` is `InsertForm::row_terminator` on non-last columns
    /// (`","`) and the row's own terminator on the last column (`")"`, or,
    /// for Oracle, `" FROM dual UNION ALL "`).
    fn format(&self, intermediate_type: IntermediateType, value: &Value, terminator: &str) -> Result<String>;
}

fn format_error(target: &'static str, intermediate_type: IntermediateType, reason: impl Into<String>) -> Error {
    Error::FormatError {
        target,
        intermediate_type,
        reason: reason.into(),
    }
}

/// `null{terminator}` - every target writes an unquoted `null` literal.
pub fn write_insert_null(terminator: &str) -> String {
    format!("null{terminator}")
}

/// Formats an integral value with no quoting. Accepts `Value::I64`; any
/// other variant is a connector bug (the source's own scan code produced a
/// value that doesn't match what it told us the column's type was).
pub fn write_insert_int(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
) -> Result<String> {
    match value {
        Value::Null => Ok(write_insert_null(terminator)),
        Value::I64(n) => Ok(format!("{n}{terminator}")),
        other => Err(format_error(
            target,
            intermediate_type,
            format!("expected an integer, got {other:?}"),
        )),
    }
}

/// Formats a floating-point or arbitrary-precision value with no quoting.
pub fn write_insert_float(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
) -> Result<String> {
    match value {
        Value::Null => Ok(write_insert_null(terminator)),
        Value::F64(f) => Ok(format!("{f}{terminator}")),
        Value::Decimal(d) => Ok(format!("{d}{terminator}")),
        other => Err(format_error(
            target,
            intermediate_type,
            format!("expected a float or decimal, got {other:?}"),
        )),
    }
}

/// Formats a boolean as the target's own bit/boolean literal via a
/// caller-supplied pair of literal spellings (e.g. `("true", "false")` on
/// PostgreSQL, `("1", "0")` on MSSQL/MySQL).
pub fn write_insert_bool(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
    true_literal: &str,
    false_literal: &str,
) -> Result<String> {
    match value {
        Value::Null => Ok(write_insert_null(terminator)),
        Value::Bool(b) => Ok(format!("{}{terminator}", if *b { true_literal } else { false_literal })),
        other => Err(format_error(
            target,
            intermediate_type,
            format!("expected a bool, got {other:?}"),
        )),
    }
}

/// Formats a string value, single-quoting it and doubling embedded single
/// quotes - the escaping rule shared by PostgreSQL, MySQL, MSSQL and
/// Snowflake's string literal syntax.
pub fn write_insert_escaped_string(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
) -> Result<String> {
    match value {
        Value::Null => Ok(write_insert_null(terminator)),
        Value::String(s) => Ok(format!("'{}'{terminator}", s.replace('\'', "''"))),
        Value::Json(s) => Ok(format!("'{}'{terminator}", s.replace('\'', "''"))),
        other => Err(format_error(
            target,
            intermediate_type,
            format!("expected a string, got {other:?}"),
        )),
    }
}

/// Formats a string value that is quoted but never needs escaping because
/// its dialect-guaranteed alphabet excludes `'` (inet, macaddr, interval,
/// money, and similarly constrained dialect types).
pub fn write_insert_string_no_escape(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
) -> Result<String> {
    match value {
        Value::Null => Ok(write_insert_null(terminator)),
        Value::String(s) => Ok(format!("'{s}'{terminator}")),
        other => Err(format_error(
            target,
            intermediate_type,
            format!("expected a string, got {other:?}"),
        )),
    }
}

/// Formats binary data as a target-specific hex literal via a caller-supplied
/// prefix (e.g. `"0x"` on MSSQL, `"X'"` / `"'"` closing quote on MySQL).
pub fn write_insert_hex_bytes(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
    prefix: &str,
    suffix: &str,
) -> Result<String> {
    match value {
        Value::Null => Ok(write_insert_null(terminator)),
        Value::Bytes(b) => {
            let mut hex = String::with_capacity(b.len() * 2);
            for byte in b {
                hex.push_str(&format!("{byte:02x}"));
            }
            Ok(format!("{prefix}{hex}{suffix}{terminator}"))
        }
        other => Err(format_error(
            target,
            intermediate_type,
            format!("expected bytes, got {other:?}"),
        )),
    }
}

/// Formats binary data as an unquoted literal with no transformation
/// (Oracle's BLOB bind-less insert path writes a hex-to-raw cast instead;
/// this helper covers engines that accept a raw unquoted token).
pub fn write_insert_raw_string_no_quotes(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
) -> Result<String> {
    match value {
        Value::Null => Ok(write_insert_null(terminator)),
        Value::String(s) => Ok(format!("{s}{terminator}")),
        other => Err(format_error(
            target,
            intermediate_type,
            format!("expected a string, got {other:?}"),
        )),
    }
}

/// Dispatches the handful of [`TypeKind`]s whose literal syntax is identical
/// across every target that can receive them (integers, floats, plain
/// escaped strings). Engine crates call this first and fall through to their
/// own dialect-specific cases (bools, binary, temporal, uuid) for the rest.
pub fn format_common(
    target: &'static str,
    intermediate_type: IntermediateType,
    value: &Value,
    terminator: &str,
) -> Option<Result<String>> {
    match intermediate_type.kind {
        TypeKind::SmallInt | TypeKind::Int | TypeKind::BigInt | TypeKind::SyncSmallInt | TypeKind::SyncInt | TypeKind::SyncBigInt => {
            Some(write_insert_int(target, intermediate_type, value, terminator))
        }
        TypeKind::Real | TypeKind::Double | TypeKind::Decimal | TypeKind::SyncFloat | TypeKind::SyncDouble => {
            Some(write_insert_float(target, intermediate_type, value, terminator))
        }
        TypeKind::Char | TypeKind::Varchar | TypeKind::Text | TypeKind::Json | TypeKind::Xml => {
            Some(write_insert_escaped_string(target, intermediate_type, value, terminator))
        }
        TypeKind::RawText => Some(write_insert_string_no_escape(target, intermediate_type, value, terminator)),
        _ => None,
    }
}
