use crate::{IntermediateType, ScanType};

/// Per-result-column metadata, produced by the source once per transfer.
/// Column order here is the column order used in every generated DDL and
/// INSERT column list downstream.
#[derive(Debug, Clone)]
pub struct ColumnMeta {
    pub name: String,
    /// The raw type name as reported by the source driver, e.g. `"TIMESTAMPTZ"`.
    pub driver_type: String,
    pub intermediate_type: IntermediateType,
    pub scan_type: ScanType,
    pub length: i64,
    pub precision: i64,
    pub scale: i64,
    pub nullable: bool,
}

impl ColumnMeta {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        driver_type: impl Into<String>,
        intermediate_type: IntermediateType,
        scan_type: ScanType,
        length: i64,
        precision: i64,
        scale: i64,
        nullable: bool,
    ) -> Self {
        Self {
            name: name.into(),
            driver_type: driver_type.into(),
            intermediate_type,
            scan_type,
            length,
            precision,
            scale,
            nullable,
        }
    }
}
