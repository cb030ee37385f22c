//! Static dispatch enum over every generator.
//!
//! [`QmcSequence`] lets consumers hold "some generator" without trait
//! objects: the deterministic sequences, the IID baseline and the three
//! randomisers all dispatch through `match`.
//!
//! ## Example
//!
//! ```
//! use qmc_core::sequences::{DigitalNet, QmcSequence};
//! use qmc_core::traits::{LowDiscrepancySequence, RandomisedSequence};
//!
//! let mut sequence = QmcSequence::from(DigitalNet::<u64>::new(2).unwrap());
//! assert_eq!(sequence.replications(), 1);
//! assert_eq!(sequence.next_r(4).unwrap().len(), 1);
//! assert_eq!(sequence.cursor(), 4);
//! ```

use super::{DigitalNet, IidUniform, Lattice};
use crate::randomise::{RandomDigitalShift, RandomOwenScramble, RandomShift};
use crate::traits::{LowDiscrepancySequence, RandomisedSequence};
use crate::types::{PointSet, Result};

/// Any generator in the crate, over 64-bit codes.
#[derive(Clone, Debug)]
pub enum QmcSequence {
    /// Base-2 digital net
    DigitalNet(DigitalNet<u64>),
    /// Rank-1 lattice
    Lattice(Lattice),
    /// Independent uniform baseline
    Iid(IidUniform),
    /// Digitally shifted digital net
    DigitalShift(RandomDigitalShift<u64>),
    /// Owen-scrambled digital net
    OwenScramble(RandomOwenScramble<u64>),
    /// Shifted lattice
    Shift(RandomShift),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            QmcSequence::DigitalNet($inner) => $body,
            QmcSequence::Lattice($inner) => $body,
            QmcSequence::Iid($inner) => $body,
            QmcSequence::DigitalShift($inner) => $body,
            QmcSequence::OwenScramble($inner) => $body,
            QmcSequence::Shift($inner) => $body,
        }
    };
}

impl QmcSequence {
    /// True for the randomised variants.
    pub fn is_randomised(&self) -> bool {
        matches!(
            self,
            QmcSequence::DigitalShift(_) | QmcSequence::OwenScramble(_) | QmcSequence::Shift(_)
        )
    }
}

impl LowDiscrepancySequence for QmcSequence {
    fn name(&self) -> &'static str {
        dispatch!(self, s => s.name())
    }

    fn dimension(&self) -> usize {
        dispatch!(self, s => s.dimension())
    }

    fn cursor(&self) -> u64 {
        dispatch!(self, s => s.cursor())
    }

    fn next(&mut self, n: usize) -> Result<PointSet> {
        dispatch!(self, s => s.next(n))
    }

    fn reset(&mut self) {
        dispatch!(self, s => s.reset())
    }

    fn skip(&mut self, n: u64) -> Result<()> {
        dispatch!(self, s => s.skip(n))
    }

    fn first_linear(&self, log2_n: u32) -> Result<PointSet> {
        dispatch!(self, s => s.first_linear(log2_n))
    }
}

impl RandomisedSequence for QmcSequence {
    fn replications(&self) -> usize {
        match self {
            QmcSequence::DigitalShift(s) => s.replications(),
            QmcSequence::OwenScramble(s) => s.replications(),
            QmcSequence::Shift(s) => s.replications(),
            _ => 1,
        }
    }

    fn next_r(&mut self, n: usize) -> Result<Vec<PointSet>> {
        match self {
            QmcSequence::DigitalShift(s) => s.next_r(n),
            QmcSequence::OwenScramble(s) => s.next_r(n),
            QmcSequence::Shift(s) => s.next_r(n),
            other => Ok(vec![other.next(n)?]),
        }
    }

    fn first_r_linear(&self, log2_n: u32) -> Result<Vec<PointSet>> {
        match self {
            QmcSequence::DigitalShift(s) => s.first_r_linear(log2_n),
            QmcSequence::OwenScramble(s) => s.first_r_linear(log2_n),
            QmcSequence::Shift(s) => s.first_r_linear(log2_n),
            other => Ok(vec![other.first_linear(log2_n)?]),
        }
    }
}

macro_rules! impl_from {
    ($($variant:ident($t:ty)),* $(,)?) => {$(
        impl From<$t> for QmcSequence {
            fn from(sequence: $t) -> Self {
                QmcSequence::$variant(sequence)
            }
        }
    )*};
}

impl_from!(
    DigitalNet(DigitalNet<u64>),
    Lattice(Lattice),
    Iid(IidUniform),
    DigitalShift(RandomDigitalShift<u64>),
    OwenScramble(RandomOwenScramble<u64>),
    Shift(RandomShift),
);

#[cfg(test)]
mod tests {
    use super::*;

    fn all(dimension: usize) -> Vec<QmcSequence> {
        vec![
            DigitalNet::<u64>::new(dimension).unwrap().into(),
            Lattice::new(dimension).unwrap().into(),
            IidUniform::new(dimension, Some(1)).unwrap().into(),
            RandomDigitalShift::new(DigitalNet::<u64>::new(dimension).unwrap(), 1, Some(2))
                .unwrap()
                .into(),
            RandomOwenScramble::new(DigitalNet::<u64>::new(dimension).unwrap(), 1, Some(3))
                .unwrap()
                .into(),
            RandomShift::new(Lattice::new(dimension).unwrap(), 1, Some(4))
                .unwrap()
                .into(),
        ]
    }

    #[test]
    fn test_contract_through_enum() {
        for mut sequence in all(3) {
            assert_eq!(sequence.dimension(), 3);
            let first = sequence.next(8).unwrap();
            assert_eq!(first.shape(), (8, 3));
            assert!(first.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
            sequence.reset();
            assert_eq!(sequence.next(8).unwrap(), first, "{}", sequence.name());
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let mut names: Vec<&str> = all(2).iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_unrandomised_next_r_wraps_next() {
        let mut sequence = QmcSequence::from(Lattice::new(2).unwrap());
        assert!(!sequence.is_randomised());
        let replicated = sequence.next_r(4).unwrap();
        sequence.reset();
        assert_eq!(replicated, vec![sequence.next(4).unwrap()]);
    }

    #[test]
    fn test_randomised_replications_reported() {
        let net = DigitalNet::<u64>::new(2).unwrap();
        let owen = RandomOwenScramble::new(net, 5, Some(9)).unwrap();
        let sequence = QmcSequence::from(owen);
        assert!(sequence.is_randomised());
        assert_eq!(sequence.replications(), 5);
        assert_eq!(sequence.first_r_linear(3).unwrap().len(), 5);
    }
}
