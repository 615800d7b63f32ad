use sqlpipe_types::IntermediateType;
use thiserror::Error;

/// The transfer engine's single error surface. Every variant corresponds to
/// one of the five fatal error kinds the engine can produce; each bubbles up
/// to the Transfer Coordinator unchanged and carries the stage prefix an
/// operator needs to tell the kinds apart in logs.
#[derive(Error, Debug)]
pub enum Error {
    /// The source driver reported a type with no intermediate mapping.
    /// Fatal, raised before any row is pumped.
    #[error("no intermediate type for driver type '{driver_type}' on {system}")]
    UnsupportedSourceType {
        system: &'static str,
        driver_type: String,
    },

    /// A value formatter could not type-assert its input to the shape its
    /// intermediate type demands. This is a programming error in a
    /// connector, not user input, and must still surface structured rather
    /// than panic.
    #[error("formatter for {intermediate_type} on {target} could not format value: {reason}")]
    FormatError {
        target: &'static str,
        intermediate_type: IntermediateType,
        reason: String,
    },

    /// Querying or fetching from the source failed.
    #[error("error querying source: {0}")]
    SourceIoError(String),

    /// Reading the first row's column metadata from the source cursor failed.
    #[error("error getting column info: {0}")]
    ColumnInfoError(String),

    /// A DROP or CREATE statement failed against the target. Oracle's
    /// `ORA-00942` ("table or view does not exist") on a `DROP TABLE IF NOT
    /// EXISTS`-less drop is recovered locally and never surfaces here.
    #[error("error creating target table: {0}")]
    TargetDdlError(String),

    /// A batch flush failed. Fatal: preceding batches are NOT rolled back,
    /// the engine promises no cross-batch atomicity. `stage` is
    /// `"mid-batch"` for every flush but the last, `"batch-end"` for the
    /// final flush after the cursor is exhausted.
    #[error("error running {stage} insert statement: {reason}")]
    TargetInsertError { stage: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
