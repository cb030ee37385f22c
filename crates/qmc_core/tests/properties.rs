//! Property tests of the generator contract across every generator.

use proptest::prelude::*;
use qmc_core::randomise::{RandomDigitalShift, RandomOwenScramble, RandomShift};
use qmc_core::sequences::{DigitalNet, IidUniform, Lattice, QmcSequence};
use qmc_core::traits::{DigitalSequence, LowDiscrepancySequence, RandomisedSequence};
use qmc_core::types::PointSet;

/// Kinds of generator exercised by the properties.
fn build(kind: usize, dimension: usize, replications: usize, seed: u64) -> QmcSequence {
    match kind {
        0 => DigitalNet::<u64>::new(dimension).unwrap().into(),
        1 => Lattice::new(dimension).unwrap().into(),
        2 => IidUniform::new(dimension, Some(seed)).unwrap().into(),
        3 => {
            let net = DigitalNet::<u64>::new(dimension).unwrap();
            RandomDigitalShift::new(net, replications, Some(seed))
                .unwrap()
                .into()
        }
        4 => {
            let net = DigitalNet::<u64>::new(dimension).unwrap();
            RandomOwenScramble::new(net, replications, Some(seed))
                .unwrap()
                .into()
        }
        _ => {
            let lattice = Lattice::new(dimension).unwrap();
            RandomShift::new(lattice, replications, Some(seed))
                .unwrap()
                .into()
        }
    }
}

fn sorted_rows(points: &PointSet) -> Vec<Vec<u64>> {
    let mut rows: Vec<Vec<u64>> = points
        .rows()
        .map(|row| row.iter().map(|x| x.to_bits()).collect())
        .collect();
    rows.sort();
    rows
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_reset_reproduces(
        kind in 0usize..6,
        dimension in 1usize..8,
        replications in 1usize..4,
        seed in any::<u64>(),
        n in 0usize..200,
    ) {
        let mut sequence = build(kind, dimension, replications, seed);
        let first = sequence.next_r(n).unwrap();
        sequence.reset();
        prop_assert_eq!(sequence.cursor(), 0);
        prop_assert_eq!(sequence.next_r(n).unwrap(), first);
    }

    #[test]
    fn test_next_is_additive(
        kind in 0usize..6,
        dimension in 1usize..6,
        replications in 1usize..3,
        seed in any::<u64>(),
        k1 in 0usize..100,
        k2 in 0usize..100,
    ) {
        let mut whole = build(kind, dimension, replications, seed);
        let mut parts = build(kind, dimension, replications, seed);
        let joined = whole.next_r(k1 + k2).unwrap();
        let head = parts.next_r(k1).unwrap();
        let tail = parts.next_r(k2).unwrap();
        for r in 0..replications.min(joined.len()) {
            let (expected_head, expected_tail) = joined[r].split_at_row(k1);
            prop_assert_eq!(&head[r], &expected_head);
            prop_assert_eq!(&tail[r], &expected_tail);
        }
        prop_assert_eq!(parts.cursor(), (k1 + k2) as u64);
    }

    #[test]
    fn test_skip_matches_next(
        kind in 0usize..6,
        dimension in 1usize..6,
        seed in any::<u64>(),
        skipped in 0u64..300,
        n in 1usize..50,
    ) {
        let mut walked = build(kind, dimension, 1, seed);
        let mut jumped = build(kind, dimension, 1, seed);
        walked.next(skipped as usize).unwrap();
        jumped.skip(skipped).unwrap();
        prop_assert_eq!(jumped.next(n).unwrap(), walked.next(n).unwrap());
    }

    #[test]
    fn test_points_in_unit_cube(
        kind in 0usize..6,
        dimension in 1usize..10,
        seed in any::<u64>(),
    ) {
        let mut sequence = build(kind, dimension, 2, seed);
        for points in sequence.next_r(128).unwrap() {
            prop_assert!(points.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
        }
    }

    #[test]
    fn test_gray_and_linear_orders_agree(
        kind in prop::sample::select(vec![0usize, 1, 3, 4, 5]),
        dimension in 1usize..6,
        seed in any::<u64>(),
        log2_n in 0u32..9,
    ) {
        let mut sequence = build(kind, dimension, 2, seed);
        let linear = sequence.first_r_linear(log2_n).unwrap();
        let gray = sequence.next_r(1 << log2_n).unwrap();
        for (a, b) in linear.iter().zip(&gray) {
            prop_assert_eq!(sorted_rows(a), sorted_rows(b));
        }
    }

    #[test]
    fn test_lattice_is_extensible(dimension in 1usize..12, t in 0u32..10) {
        let mut short = Lattice::new(dimension).unwrap();
        let mut long = Lattice::new(dimension).unwrap();
        let prefix = short.next(1 << t).unwrap();
        let extended = long.next(1 << (t + 1)).unwrap();
        let (head, _) = extended.split_at_row(1 << t);
        prop_assert_eq!(&head, &prefix);

        // the 2^t prefix is itself the 2^t-point lattice
        let standalone = long.first_linear(t).unwrap();
        prop_assert_eq!(sorted_rows(&prefix), sorted_rows(&standalone));
    }

    #[test]
    fn test_digital_shift_is_stable(
        dimension in 1usize..6,
        seed in any::<u64>(),
        batches in prop::collection::vec(1usize..40, 1..5),
    ) {
        let net = DigitalNet::<u64>::new(dimension).unwrap();
        let mut shifted = RandomDigitalShift::new(net, 1, Some(seed)).unwrap();
        let mut base = DigitalNet::<u64>::new(dimension).unwrap();
        let lift = 53 - 32;
        for n in batches {
            let randomised = shifted.next_r_binary(n).unwrap().remove(0);
            let reference = base.next_binary(n).unwrap();
            for i in 0..n {
                for j in 0..dimension {
                    let displacement = randomised.get(i, j) ^ (reference.get(i, j) << lift);
                    prop_assert_eq!(displacement, shifted.shift(j, 0));
                }
            }
        }
    }

    #[test]
    fn test_lattice_shift_is_stable(
        dimension in 1usize..6,
        seed in any::<u64>(),
        batches in prop::collection::vec(1usize..40, 1..5),
    ) {
        let lattice = Lattice::new(dimension).unwrap();
        let mut shifted = RandomShift::new(lattice, 1, Some(seed)).unwrap();
        let mut base = Lattice::new(dimension).unwrap();
        for n in batches {
            let randomised = shifted.next(n).unwrap();
            let reference = base.next(n).unwrap();
            for i in 0..n {
                for j in 0..dimension {
                    let displacement =
                        (randomised.get(i, j) - reference.get(i, j)).rem_euclid(1.0);
                    let expected = shifted.shift(j, 0);
                    let gap = (displacement - expected).abs();
                    prop_assert!(gap < 1e-12 || (1.0 - gap) < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_randomised_nets_stay_stratified(
        kind in prop::sample::select(vec![3usize, 4, 5]),
        dimension in 1usize..6,
        seed in any::<u64>(),
        log2_n in 1u32..9,
    ) {
        let n = 1usize << log2_n;
        let mut sequence = build(kind, dimension, 1, seed);
        let points = sequence.next(n).unwrap();
        for j in 0..dimension {
            let mut cells: Vec<usize> = points
                .column(j)
                .iter()
                .map(|&x| ((x * n as f64) as usize).min(n - 1))
                .collect();
            cells.sort_unstable();
            prop_assert_eq!(cells, (0..n).collect::<Vec<_>>());
        }
    }
}
