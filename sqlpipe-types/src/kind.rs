/// The shape a value takes once it has left the source driver, collapsed
/// across engines to the set of behaviors a target formatter actually needs
/// to distinguish.
///
/// The original per-(target, intermediate type) format tables map dozens of
/// intermediate type tags onto a much smaller set of formatter functions
/// (e.g. `PostgreSQL_BOOLEAN`, `Redshift_BOOLEAN` and the generic `bool` scan
/// type all land on the same MSSQL bit writer). `TypeKind` makes that sharing
/// explicit instead of re-deriving it from string equality at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    SmallInt,
    Int,
    BigInt,
    Real,
    Double,
    /// Arbitrary-precision numeric; `ColumnMeta::precision`/`scale` carry the width.
    Decimal,
    Char,
    Varchar,
    Text,
    /// Dialect values that are printed as an unescaped quoted string because
    /// they cannot contain a quote character (inet, macaddr, box, interval, money, ...).
    RawText,
    /// MySQL `BIT` - printed as a binary string literal, not hex.
    BitString,
    Binary,
    Varbinary,
    Blob,
    Date,
    Time,
    Timestamp,
    TimestampTz,
    Uuid,
    Json,
    Xml,
    // Textual CDC "sync" variants: the source delivered a string, not a typed
    // value, so re-casting needs the tz-suffix stripped first.
    SyncBool,
    SyncSmallInt,
    SyncInt,
    SyncBigInt,
    SyncFloat,
    SyncDouble,
    SyncDate,
    SyncTimestamp,
    SyncTimestampTz,
}

impl TypeKind {
    pub fn is_sync(self) -> bool {
        matches!(
            self,
            TypeKind::SyncBool
                | TypeKind::SyncSmallInt
                | TypeKind::SyncInt
                | TypeKind::SyncBigInt
                | TypeKind::SyncFloat
                | TypeKind::SyncDouble
                | TypeKind::SyncDate
                | TypeKind::SyncTimestamp
                | TypeKind::SyncTimestampTz
        )
    }
}
