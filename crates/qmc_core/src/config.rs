//! Generator configuration.
//!
//! [`SequenceConfig`] describes a generator declaratively: which sequence,
//! its dimension, an optional table file and the randomisation to apply.
//! It can be assembled with a builder or read from TOML, and
//! [`build`](SequenceConfig::build) turns it into a [`QmcSequence`].
//!
//! ```toml
//! kind = "digital_net"
//! dimension = 8
//! randomisation = "owen_scramble"
//! replications = 16
//! seed = 7
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::randomise::{RandomDigitalShift, RandomOwenScramble, RandomShift};
use crate::sequences::{DigitalNet, IidUniform, Lattice, QmcSequence};
use crate::tables::MAX_LATTICE_RESOLUTION;
use crate::types::{QmcError, Result};

/// Base sequence family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    /// Base-2 digital net (Sobol' by default)
    #[default]
    DigitalNet,
    /// Extensible rank-1 lattice
    Lattice,
    /// Independent uniform points
    Iid,
}

/// Randomisation applied on top of the base sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Randomisation {
    /// Deterministic output
    #[default]
    None,
    /// XOR digital shift (digital nets)
    DigitalShift,
    /// Shift modulo 1 (lattices)
    Shift,
    /// Nested uniform scrambling (digital nets)
    OwenScramble,
}

impl Randomisation {
    fn supports(self, kind: SequenceKind) -> bool {
        match self {
            Randomisation::None => true,
            Randomisation::DigitalShift | Randomisation::OwenScramble => {
                kind == SequenceKind::DigitalNet
            }
            Randomisation::Shift => kind == SequenceKind::Lattice,
        }
    }
}

/// Declarative description of a generator.
///
/// # Examples
///
/// ```
/// use qmc_core::config::{Randomisation, SequenceConfig, SequenceKind};
/// use qmc_core::traits::RandomisedSequence;
///
/// let config = SequenceConfig::builder()
///     .kind(SequenceKind::Lattice)
///     .dimension(4)
///     .randomisation(Randomisation::Shift)
///     .replications(8)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut sequence = config.build().unwrap();
/// assert_eq!(sequence.next_r(16).unwrap().len(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SequenceConfig {
    /// Base sequence family.
    pub kind: SequenceKind,
    /// Number of coordinates per point.
    pub dimension: usize,
    /// Randomisation to apply.
    pub randomisation: Randomisation,
    /// Number of independent replications.
    pub replications: usize,
    /// Seed for randomisation or the IID stream; drawn from entropy when
    /// absent.
    pub seed: Option<u64>,
    /// Generating matrix or vector file replacing the embedded default.
    pub table: Option<PathBuf>,
    /// Lattice resolution `m` for `table`; read from the file name when
    /// absent.
    pub resolution: Option<u32>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            kind: SequenceKind::default(),
            dimension: 1,
            randomisation: Randomisation::default(),
            replications: 1,
            seed: None,
            table: None,
            resolution: None,
        }
    }
}

impl SequenceConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SequenceConfigBuilder {
        SequenceConfigBuilder::default()
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: SequenceConfig = toml::from_str(text)
            .map_err(|e| QmcError::InvalidConfig(format!("failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - `dimension` or `replications` is 0
    /// - the randomisation does not apply to `kind`
    /// - `replications > 1` without a randomisation
    /// - a table or resolution is given for the IID baseline, or a
    ///   resolution for a digital net
    pub fn validate(&self) -> Result<()> {
        if self.dimension == 0 {
            return Err(QmcError::InvalidConfig(
                "dimension must be at least 1".to_string(),
            ));
        }
        if self.replications == 0 {
            return Err(QmcError::InvalidConfig(
                "replications must be at least 1".to_string(),
            ));
        }
        if !self.randomisation.supports(self.kind) {
            return Err(QmcError::InvalidConfig(format!(
                "{:?} randomisation does not apply to {:?}",
                self.randomisation, self.kind
            )));
        }
        if self.randomisation == Randomisation::None && self.replications > 1 {
            return Err(QmcError::InvalidConfig(
                "replications require a randomisation".to_string(),
            ));
        }
        if self.kind == SequenceKind::Iid && self.table.is_some() {
            return Err(QmcError::InvalidConfig(
                "the iid baseline takes no table".to_string(),
            ));
        }
        if let Some(m) = self.resolution {
            if self.kind != SequenceKind::Lattice {
                return Err(QmcError::InvalidConfig(
                    "resolution applies to lattices only".to_string(),
                ));
            }
            if m == 0 || m > MAX_LATTICE_RESOLUTION {
                return Err(QmcError::InvalidResolution {
                    requested: m,
                    supported: MAX_LATTICE_RESOLUTION,
                });
            }
        }
        Ok(())
    }

    /// Constructs the described generator.
    pub fn build(&self) -> Result<QmcSequence> {
        self.validate()?;
        let sequence = match self.kind {
            SequenceKind::Iid => IidUniform::new(self.dimension, self.seed)?.into(),
            SequenceKind::DigitalNet => {
                let net = match &self.table {
                    Some(path) => DigitalNet::<u64>::from_file(self.dimension, path)?,
                    None => DigitalNet::<u64>::new(self.dimension)?,
                };
                match self.randomisation {
                    Randomisation::DigitalShift => {
                        RandomDigitalShift::new(net, self.replications, self.seed)?.into()
                    }
                    Randomisation::OwenScramble => {
                        RandomOwenScramble::new(net, self.replications, self.seed)?.into()
                    }
                    _ => net.into(),
                }
            }
            SequenceKind::Lattice => {
                let lattice = match &self.table {
                    Some(path) => Lattice::from_file(self.dimension, path, self.resolution)?,
                    None => Lattice::new(self.dimension)?,
                };
                match self.randomisation {
                    Randomisation::Shift => {
                        RandomShift::new(lattice, self.replications, self.seed)?.into()
                    }
                    _ => lattice.into(),
                }
            }
        };
        Ok(sequence)
    }
}

/// Builder for [`SequenceConfig`].
#[derive(Clone, Debug, Default)]
pub struct SequenceConfigBuilder {
    kind: SequenceKind,
    dimension: Option<usize>,
    randomisation: Randomisation,
    replications: Option<usize>,
    seed: Option<u64>,
    table: Option<PathBuf>,
    resolution: Option<u32>,
}

impl SequenceConfigBuilder {
    /// Sets the base sequence family.
    #[inline]
    pub fn kind(mut self, kind: SequenceKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the number of coordinates per point.
    #[inline]
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Sets the randomisation.
    #[inline]
    pub fn randomisation(mut self, randomisation: Randomisation) -> Self {
        self.randomisation = randomisation;
        self
    }

    /// Sets the number of replications (default 1).
    #[inline]
    pub fn replications(mut self, replications: usize) -> Self {
        self.replications = Some(replications);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets a table file replacing the embedded default.
    #[inline]
    pub fn table<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.table = Some(path.into());
        self
    }

    /// Sets the lattice resolution of the table file.
    #[inline]
    pub fn resolution(mut self, resolution: u32) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if `dimension` is not set, or any error of
    /// [`SequenceConfig::validate`].
    pub fn build(self) -> Result<SequenceConfig> {
        let dimension = self
            .dimension
            .ok_or_else(|| QmcError::InvalidConfig("dimension must be specified".to_string()))?;
        let config = SequenceConfig {
            kind: self.kind,
            dimension,
            randomisation: self.randomisation,
            replications: self.replications.unwrap_or(1),
            seed: self.seed,
            table: self.table,
            resolution: self.resolution,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{LowDiscrepancySequence, RandomisedSequence};

    #[test]
    fn test_builder_defaults() {
        let config = SequenceConfig::builder().dimension(3).build().unwrap();
        assert_eq!(config.kind, SequenceKind::DigitalNet);
        assert_eq!(config.randomisation, Randomisation::None);
        assert_eq!(config.replications, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder_requires_dimension() {
        assert!(SequenceConfig::builder().build().is_err());
        assert!(SequenceConfig::builder().dimension(0).build().is_err());
    }

    #[test]
    fn test_incompatible_randomisation_rejected() {
        let err = SequenceConfig::builder()
            .kind(SequenceKind::Lattice)
            .dimension(2)
            .randomisation(Randomisation::OwenScramble)
            .build()
            .unwrap_err();
        assert!(matches!(err, QmcError::InvalidConfig(_)));

        assert!(SequenceConfig::builder()
            .kind(SequenceKind::Iid)
            .dimension(2)
            .randomisation(Randomisation::Shift)
            .build()
            .is_err());
        assert!(SequenceConfig::builder()
            .dimension(2)
            .replications(4)
            .build()
            .is_err());
    }

    #[test]
    fn test_resolution_only_for_lattices() {
        assert!(SequenceConfig::builder()
            .dimension(2)
            .resolution(10)
            .build()
            .is_err());
        assert!(matches!(
            SequenceConfig::builder()
                .kind(SequenceKind::Lattice)
                .dimension(2)
                .resolution(64)
                .build(),
            Err(QmcError::InvalidResolution { .. })
        ));
    }

    #[test]
    fn test_toml_deserialisation() {
        let config = SequenceConfig::from_toml_str(
            r#"
            kind = "digital_net"
            dimension = 8
            randomisation = "owen_scramble"
            replications = 16
            seed = 7
        "#,
        )
        .unwrap();
        assert_eq!(config.dimension, 8);
        assert_eq!(config.randomisation, Randomisation::OwenScramble);
        assert_eq!(config.replications, 16);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = SequenceConfig::from_toml_str("dimension = 2").unwrap();
        assert_eq!(config.kind, SequenceKind::DigitalNet);
        assert_eq!(config.replications, 1);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            SequenceConfig::from_toml_str("kind = \"halton\""),
            Err(QmcError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_build_each_kind() {
        let net = SequenceConfig::builder()
            .dimension(3)
            .randomisation(Randomisation::DigitalShift)
            .replications(2)
            .seed(1)
            .build()
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(net, QmcSequence::DigitalShift(_)));
        assert_eq!(net.replications(), 2);

        let lattice = SequenceConfig::builder()
            .kind(SequenceKind::Lattice)
            .dimension(3)
            .build()
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(lattice, QmcSequence::Lattice(_)));

        let mut iid = SequenceConfig::builder()
            .kind(SequenceKind::Iid)
            .dimension(3)
            .seed(5)
            .build()
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(iid.next(4).unwrap().shape(), (4, 3));
    }

    #[test]
    fn test_missing_table_file_is_io_error() {
        let config = SequenceConfig::builder()
            .dimension(2)
            .table("does/not/exist.txt")
            .build()
            .unwrap();
        assert!(matches!(config.build(), Err(QmcError::Io(_))));
    }
}
