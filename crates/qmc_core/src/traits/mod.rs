//! Generator contract traits.
//!
//! - [`LowDiscrepancySequence`]: `next`, `reset`, `skip`, `first_linear`
//! - [`DigitalSequence`]: raw fixed-point codes of digital nets
//! - [`RandomisedSequence`]: replicated output of randomisers

mod sequence;

pub(crate) use sequence::{ensure_single_replication, single};
pub use sequence::{DigitalSequence, LowDiscrepancySequence, RandomisedSequence};
