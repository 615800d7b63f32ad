use std::fmt;

/// One of the six relational engines this crate knows how to speak to, either
/// as a transfer source or as a transfer target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum System {
    PostgreSql,
    MySql,
    Mssql,
    Oracle,
    Snowflake,
    Redshift,
}

impl System {
    /// The prefix used in canonical `<SYSTEM>_<KIND>` intermediate type tags.
    pub fn tag_prefix(self) -> &'static str {
        match self {
            System::PostgreSql => "PostgreSQL",
            System::MySql => "MySQL",
            System::Mssql => "MSSQL",
            System::Oracle => "Oracle",
            System::Snowflake => "Snowflake",
            System::Redshift => "Redshift",
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag_prefix())
    }
}
