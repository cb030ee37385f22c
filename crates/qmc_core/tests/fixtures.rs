//! Reference point sets for the embedded tables and for tables loaded
//! from text files.

use std::path::PathBuf;

use qmc_core::config::{SequenceConfig, SequenceKind};
use qmc_core::sequences::{DigitalNet, Lattice};
use qmc_core::tables::{
    GeneratingMatrix, GeneratingVector, MAX_LATTICE_DIMENSION, MAX_SOBOL_DIMENSION,
};
use qmc_core::traits::LowDiscrepancySequence;
use qmc_core::types::{PointSet, QmcError};

/// Writes `contents` to a uniquely named file in the system temp directory.
fn write_table(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("qmc_core_fixtures_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_digital_net_first_points() {
    let mut net = DigitalNet::<u64>::new(5).unwrap();
    let expected = [
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [0.5, 0.5, 0.5, 0.5, 0.5],
        [0.75, 0.25, 0.25, 0.25, 0.75],
        [0.25, 0.75, 0.75, 0.75, 0.25],
    ];
    let points = net.next(4).unwrap();
    for (i, row) in expected.iter().enumerate() {
        assert_eq!(points.row(i), row);
    }

    net.reset();
    assert_eq!(net.next(4).unwrap(), points);
}

#[test]
fn test_lattice_first_points() {
    let mut lattice = Lattice::new(5).unwrap();
    let expected = [
        [0.0, 0.0, 0.0, 0.0, 0.0],
        [0.5, 0.5, 0.5, 0.5, 0.5],
        [0.25, 0.25, 0.25, 0.25, 0.25],
        [0.75, 0.75, 0.75, 0.75, 0.75],
    ];
    let points = lattice.next(4).unwrap();
    for (i, row) in expected.iter().enumerate() {
        assert_eq!(points.row(i), row);
    }
}

/// Every coordinate of the first `n` points hits each cell of width `1/n`.
fn assert_one_dimensional_grids(points: &PointSet, n: usize) {
    for j in 0..points.dimension() {
        let mut cells: Vec<usize> = points
            .column(j)
            .iter()
            .map(|&x| (x * n as f64) as usize)
            .collect();
        cells.sort_unstable();
        assert_eq!(cells, (0..n).collect::<Vec<_>>(), "coordinate {}", j);
    }
}

#[test]
fn test_high_dimensional_defaults() {
    assert!(MAX_SOBOL_DIMENSION >= 1000);
    assert!(MAX_LATTICE_DIMENSION >= 1000);

    let mut net = DigitalNet::<u64>::new(MAX_SOBOL_DIMENSION).unwrap();
    assert_one_dimensional_grids(&net.next(64).unwrap(), 64);
    assert!(matches!(
        DigitalNet::<u64>::new(MAX_SOBOL_DIMENSION + 1),
        Err(QmcError::DimensionMismatch { .. })
    ));

    let mut lattice = Lattice::new(MAX_LATTICE_DIMENSION).unwrap();
    assert_one_dimensional_grids(&lattice.next(64).unwrap(), 64);
    assert!(matches!(
        Lattice::new(MAX_LATTICE_DIMENSION + 1),
        Err(QmcError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_digital_net_linear_order() {
    let mut net = DigitalNet::<u64>::new(4).unwrap();
    let linear = net.first_linear(3).unwrap();
    assert_eq!(linear.row(4), &[0.125, 0.625, 0.375, 0.125]);

    let gray = net.next(8).unwrap();
    assert_eq!(gray.row(4), &[0.375, 0.375, 0.625, 0.875]);
    assert_ne!(linear.row(4), gray.row(4));
}

#[test]
fn test_matrix_from_file() {
    let path = write_table(
        "pascal.txt",
        "# identity and Pascal columns, least significant digit first\n\
         1 2 4 8 16\n\
         1 3 5 15 17\n",
    );
    let mut net = DigitalNet::<u64>::from_file(2, &path).unwrap();
    assert_eq!(net.matrix().precision(), 5);
    let points = net.next(4).unwrap();
    assert_eq!(
        points.as_slice(),
        &[0.0, 0.0, 0.5, 0.5, 0.75, 0.25, 0.25, 0.75]
    );

    // a one-dimensional request truncates the table
    let narrow = DigitalNet::<u64>::from_file(1, &path).unwrap();
    assert_eq!(narrow.dimension(), 1);
    assert!(matches!(
        DigitalNet::<u64>::from_file(3, &path),
        Err(QmcError::DimensionMismatch {
            requested: 3,
            available: 2
        })
    ));
}

#[test]
fn test_malformed_matrix_file() {
    let path = write_table("ragged.txt", "1 2 4\n1 3\n");
    assert!(matches!(
        GeneratingMatrix::<u64>::from_file(&path),
        Err(QmcError::MalformedTable { .. })
    ));
    let path = write_table("garbage.txt", "1 2 x\n");
    assert!(matches!(
        GeneratingMatrix::<u64>::from_file(&path),
        Err(QmcError::MalformedTable { .. })
    ));
}

#[test]
fn test_vector_resolution_from_file_name() {
    let path = write_table("lattice_base2_m4.txt", "1\n5\n");
    let vector = GeneratingVector::from_file(&path, None).unwrap();
    assert_eq!(vector.resolution(), 4);
    assert_eq!(vector.entries(), &[1, 5]);

    let mut lattice = Lattice::from_file(2, &path, None).unwrap();
    let points = lattice.next(16).unwrap();
    assert_eq!(points.row(8), &[0.0625, 0.3125]);
    assert!(lattice.next(1).is_err());

    let explicit = GeneratingVector::from_file(&path, Some(6)).unwrap();
    assert_eq!(explicit.resolution(), 6);
}

#[test]
fn test_config_file_round_trip() {
    let table = write_table("config_lattice_m4.txt", "1\n5\n");
    let config_path = write_table(
        "config.toml",
        &format!(
            "kind = \"lattice\"\ndimension = 2\ntable = {:?}\n",
            table.display().to_string()
        ),
    );
    let config = SequenceConfig::from_file(&config_path).unwrap();
    assert_eq!(config.kind, SequenceKind::Lattice);
    let mut sequence = config.build().unwrap();
    assert_eq!(sequence.next(2).unwrap().row(1), &[0.5, 0.5]);
}
