// src/output/mod.rs
//! Output handling with clear separation of planning and execution.
//!
//! Planning builds a data-only [`OutputPlan`]; execution in `writer` is
//! the only place page delivery performs I/O.

mod types;
mod writer;

// Re-export the public interface
#[allow(unused_imports)] // Used by bin target
pub use types::{DeliveryTarget, OutputPlan, OutputReport};
#[allow(unused_imports)] // Used by bin target
pub use writer::deliver;
