use std::fmt;

use crate::{System, TypeKind};

/// Canonical `<SYSTEM>_<TYPE>` tag for a column, e.g. `PostgreSQL_TIMESTAMPTZ`
/// or `MSSQL_UNIQUEIDENTIFIER`. Every driver-reported type a source connector
/// can emit maps to exactly one of these, or the transfer fails before any
/// row is pumped (see `sqlpipe_connector::Error::UnsupportedSourceType`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntermediateType {
    pub system: System,
    /// The `<TYPE>` half of the tag, e.g. `"TIMESTAMPTZ"`.
    pub tag: &'static str,
    pub kind: TypeKind,
}

impl IntermediateType {
    pub const fn new(system: System, tag: &'static str, kind: TypeKind) -> Self {
        Self { system, tag, kind }
    }
}

impl fmt::Display for IntermediateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.system, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_renders_canonical_form() {
        let t = IntermediateType::new(System::PostgreSql, "TIMESTAMPTZ", TypeKind::TimestampTz);
        assert_eq!(t.to_string(), "PostgreSQL_TIMESTAMPTZ");

        let t = IntermediateType::new(System::Mssql, "UNIQUEIDENTIFIER", TypeKind::Uuid);
        assert_eq!(t.to_string(), "MSSQL_UNIQUEIDENTIFIER");
    }
}
