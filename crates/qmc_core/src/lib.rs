//! # qmc_core: Quasi-Random Point Generation
//!
//! Low-discrepancy point sequences in the unit hypercube `[0, 1)^s` for
//! quasi-Monte Carlo integration:
//! - Base-2 digital nets in Gray-code order, Sobol' by default (`sequences::DigitalNet`)
//! - Extensible rank-1 lattices in bit-reversed order (`sequences::Lattice`)
//! - Digital shift, shift modulo 1 and nested (Owen) scrambling into
//!   independent replications (`randomise`)
//! - An independent uniform baseline sharing the same contract (`sequences::IidUniform`)
//!
//! ## Generator Contract
//!
//! Every generator is a mutable cursor implementing
//! [`LowDiscrepancySequence`](traits::LowDiscrepancySequence): `next(n)`
//! returns the next `n` points and advances the cursor, `reset()` rewinds it
//! while keeping any randomisation, and `first_linear(m)` returns the first
//! `2^m` points in natural index order without touching the cursor.
//!
//! ## Usage Examples
//!
//! ```rust
//! use qmc_core::randomise::RandomOwenScramble;
//! use qmc_core::sequences::DigitalNet;
//! use qmc_core::traits::{LowDiscrepancySequence, RandomisedSequence};
//!
//! let mut net = DigitalNet::<u64>::new(5).unwrap();
//! let points = net.next(4).unwrap();
//! assert_eq!(points.row(3), &[0.25, 0.75, 0.75, 0.75, 0.25]);
//!
//! let base = DigitalNet::<u64>::new(5).unwrap();
//! let mut owen = RandomOwenScramble::new(base, 8, Some(42)).unwrap();
//! let replications = owen.next_r(1024).unwrap();
//! assert_eq!(replications.len(), 8);
//! ```
//!
//! ## Logging
//!
//! Construction and precision exhaustion are reported through `tracing`;
//! the library installs no subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod randomise;
pub mod sequences;
pub mod tables;
pub mod traits;
pub mod types;
