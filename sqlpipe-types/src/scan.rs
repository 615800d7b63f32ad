/// Generic fallback dispatch key used when a driver reports a column whose
/// intermediate type has no target-specific formatter/DDL entry, but whose
/// Rust scan shape is still one of the handful of generics every driver
/// agrees on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanType {
    Bool,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Time,
    Bytes,
    String,
    Null,
}
