//! Capability traits shared by every point generator.
//!
//! Digital nets, lattices, the IID baseline and the randomisers all
//! implement [`LowDiscrepancySequence`], so downstream consumers can be
//! written once against the trait. Digital nets additionally expose their
//! raw fixed-point codes through [`DigitalSequence`], and randomisers
//! expose their replications through [`RandomisedSequence`].

use crate::types::{CodeSet, FixedPointCode, PointSet, QmcError, Result};

/// Trait for point sequences in the unit hypercube `[0, 1)^s`.
///
/// Each generator is a mutable cursor over its sequence: [`next`] returns
/// the next batch of points and advances the cursor, [`reset`] rewinds it.
/// Generation is deterministic, so `reset` followed by `next(n)` always
/// reproduces the same `n` points, and `next(a)` followed by `next(b)`
/// equals `next(a + b)` split after row `a`.
///
/// [`next`]: LowDiscrepancySequence::next
/// [`reset`]: LowDiscrepancySequence::reset
pub trait LowDiscrepancySequence {
    /// Human-readable generator name.
    fn name(&self) -> &'static str;

    /// Returns the dimensionality of the sequence.
    fn dimension(&self) -> usize;

    /// Number of points produced since construction or the last reset.
    fn cursor(&self) -> u64;

    /// Returns the next `n` points as an `n × dimension` matrix and advances
    /// the cursor by `n`.
    ///
    /// # Errors
    ///
    /// `PrecisionExhausted` if the generator cannot produce `n` more points;
    /// the cursor is left unchanged.
    fn next(&mut self, n: usize) -> Result<PointSet>;

    /// Rewinds the cursor to zero, keeping any bound randomisation.
    fn reset(&mut self);

    /// Skips ahead by `n` points without materialising them.
    ///
    /// This is useful for parallel computation where different workers
    /// need to process non-overlapping portions of the sequence.
    fn skip(&mut self, n: u64) -> Result<()>;

    /// Returns the first `2^log2_n` points in natural (linear) index order.
    ///
    /// Does not read or modify the cursor.
    fn first_linear(&self, log2_n: u32) -> Result<PointSet>;
}

/// Digital sequences expose the raw fixed-point codes behind each point.
///
/// Randomisation works on exact integer codes and only converts to
/// floating point at the end, so these methods are the building blocks of
/// the digital randomisers.
pub trait DigitalSequence<C: FixedPointCode>: LowDiscrepancySequence {
    /// Bit precision of the codes returned by this sequence.
    fn precision(&self) -> u32;

    /// Returns the next `n` points as raw codes; advances the cursor.
    fn next_binary(&mut self, n: usize) -> Result<CodeSet<C>>;

    /// Returns the first `2^log2_n` points in linear order as raw codes.
    fn first_linear_binary(&self, log2_n: u32) -> Result<CodeSet<C>>;

    /// Converts codes of this sequence's precision to coordinates.
    fn binary_to_float(&self, codes: &CodeSet<C>) -> PointSet {
        let precision = self.precision();
        codes.map(|code| code.to_unit_f64(precision))
    }
}

/// Sequences carrying `r >= 1` independent randomisations of one base
/// sequence.
///
/// Every replication observes the same window of base-sequence indices:
/// one call to [`next_r`](RandomisedSequence::next_r) draws one batch from
/// the base generator and randomises it once per replication.
pub trait RandomisedSequence: LowDiscrepancySequence {
    /// Number of independent replications.
    fn replications(&self) -> usize;

    /// Returns the next `n` points of every replication.
    fn next_r(&mut self, n: usize) -> Result<Vec<PointSet>>;

    /// Returns the first `2^log2_n` linear-order points of every replication.
    fn first_r_linear(&self, log2_n: u32) -> Result<Vec<PointSet>>;
}

/// Checks that a randomiser holds exactly one replication.
pub(crate) fn ensure_single_replication(replications: usize) -> Result<()> {
    if replications != 1 {
        return Err(QmcError::MultipleReplications { replications });
    }
    Ok(())
}

/// Unwraps the only replication of a single-replication result.
pub(crate) fn single<T>(mut replicated: Vec<T>) -> Result<T> {
    let replications = replicated.len();
    match replicated.pop() {
        Some(only) if replications == 1 => Ok(only),
        _ => Err(QmcError::MultipleReplications { replications }),
    }
}
