//! The Transfer Coordinator: the one piece of the engine that is not
//! per-engine. Orchestrates a source/target pair through the linear
//! open-drop-create-pump-flush sequence; everything dialect-specific comes
//! in through the `sqlpipe_connector` traits its caller supplies.

mod coordinator;

pub use coordinator::{run_transfer, TransferReport};

#[cfg(test)]
mod fakes;
#[cfg(test)]
mod tests;
