//! Generating vectors for rank-1 lattice rules.

use std::path::Path;

use super::matrix::ensure_dimension;
use super::parser::{parse_residue_rows, resolution_from_stem};
use crate::types::{QmcError, Result};

/// Largest supported lattice resolution `m` (at most `2^m` points).
pub const MAX_LATTICE_RESOLUTION: u32 = 63;

/// Resolution of the embedded default vector.
pub const DEFAULT_LATTICE_RESOLUTION: u32 = 20;

/// Embedded extensible base-2 lattice vector, valid up to `2^20` points.
///
/// Entries from the 23rd on were chosen component by component: each
/// minimises, over all odd candidates, the largest ratio between the
/// worst-case error in the weighted Korobov space with `alpha = 2` and
/// weights `1/j^2` that it gives for `2^m` points and the best error
/// attainable at that `m`, over `10 <= m <= 20`, with earlier entries held
/// fixed.
const DEFAULT_LATTICE_VECTOR: &[u64] = &[
    1, 433461, 315689, 441789, 501101, 146355, 88411, 215837, 273599, 151719, 258185, 357967, 96407,
    203741, 211709, 135719, 100779, 85729, 14597, 94813, 422013, 484367, 391695, 108073, 207743,
    243817, 309727, 519083, 195635, 236431, 137905, 80331, 495125, 434363, 43387, 304081, 151445,
    204699, 254271, 267017, 408703, 166017, 225751, 27321, 178289, 165513, 109031, 523029, 135539,
    175669, 320265, 236345, 184955, 414743, 444325, 137985, 417901, 455739, 405419, 465011, 515779,
    377791, 195377, 278709, 431165, 338415, 165961, 478251, 47383, 70687, 129139, 376335, 367755,
    512379, 98505, 242827, 39467, 371777, 136471, 16629, 273013, 94527, 322957, 370573, 184131,
    347423, 490443, 142437, 144883, 373821, 429033, 224061, 258711, 418281, 82027, 114595, 430719,
    328141, 377591, 444077, 298851, 240587, 45683, 328597, 469517, 384497, 103659, 415283, 101251,
    361799, 83395, 447601, 264531, 313013, 309795, 369755, 358621, 220545, 233243, 91261, 43293,
    170263, 97371, 189047, 517897, 215613, 89199, 358815, 33993, 487511, 52099, 253183, 267403,
    68215, 484779, 426775, 499775, 377463, 408809, 179763, 329891, 286811, 313107, 343555, 518269,
    444253, 221259, 326229, 95747, 166125, 288071, 64035, 131543, 157771, 133375, 510077, 161283,
    468571, 413621, 322501, 342845, 311017, 418709, 114179, 63725, 99931, 126741, 226253, 108123,
    498789, 445175, 394843, 274749, 259859, 318369, 116165, 122805, 300681, 522477, 333915, 29075,
    471359, 254603, 116499, 11551, 490609, 436353, 155543, 209441, 81405, 251619, 131723, 63251,
    138747, 153323, 41963, 402059, 271963, 115205, 152689, 10571, 462179, 458359, 430897, 510483,
    346367, 209983, 133977, 238479, 238687, 368565, 96587, 343547, 330585, 107353, 133651, 65065,
    52057, 161139, 323427, 178051, 386607, 325101, 398129, 456533, 118239, 71291, 472457, 61955,
    169859, 418907, 226349, 141181, 206869, 37195, 225123, 465499, 510207, 351487, 284651, 197001,
    487223, 497133, 422957, 16489, 121969, 151989, 424267, 419237, 449769, 272405, 19085, 215203,
    471669, 173151, 189861, 230287, 439689, 108565, 183775, 300217, 95277, 340043, 4149, 399963,
    71305, 240913, 335799, 494865, 291885, 414905, 201455, 335015, 351415, 237495, 363793, 470469,
    487939, 21231, 461779, 107499, 356755, 367195, 226471, 355143, 303209, 191761, 434103, 134195,
    469699, 306763, 52181, 229847, 131465, 38073, 326053, 500569, 495817, 261647, 492267, 489803,
    30089, 49047, 135081, 374507, 245673, 199723, 207687, 128371, 308159, 281207, 426647, 171575,
    280831, 466429, 185057, 210371, 503371, 485505, 409939, 41417, 68093, 431951, 415789, 482417,
    155191, 249081, 186191, 40503, 332985, 36917, 277533, 65289, 464719, 478687, 103939, 501889,
    266697, 152369, 150593, 389635, 9311, 357103, 300879, 278965, 469453, 351799, 347011, 214337,
    469169, 496279, 2579, 188873, 77387, 360705, 26801, 143679, 5473, 320933, 364745, 220343,
    519735, 168849, 384021, 96001, 380153, 114503, 376727, 466831, 90569, 340927, 266153, 240455,
    24119, 160721, 15039, 455637, 439667, 305173, 254409, 274507, 257863, 455633, 70089, 298241,
    267285, 174469, 377171, 213729, 288521, 93457, 199765, 291591, 299215, 419353, 106953, 110155,
    298031, 322539, 344151, 448915, 388663, 405055, 281665, 73655, 271247, 520595, 221641, 349297,
    441023, 240081, 299825, 388075, 422865, 352347, 89655, 252307, 414463, 486967, 483401, 332821,
    13063, 291793, 331261, 451017, 337311, 334227, 93699, 102601, 318485, 220727, 52289, 183237,
    496661, 267217, 213097, 289369, 247105, 118809, 332233, 206445, 76613, 387249, 478723, 368715,
    132565, 168981, 488401, 455423, 2701, 128837, 12263, 127063, 430459, 134623, 296723, 268691,
    224957, 484559, 271775, 376493, 257003, 363567, 39159, 279265, 133665, 488871, 143335, 502753,
    186771, 312641, 108221, 468059, 183361, 60395, 518981, 95185, 357119, 452205, 208871, 475887,
    266447, 422933, 430403, 500499, 355973, 242641, 223307, 102353, 193493, 219745, 9837, 249881,
    77253, 89109, 420441, 285933, 78891, 476481, 430281, 232495, 218143, 480443, 468589, 405479,
    259239, 175361, 508393, 392719, 79299, 227091, 487101, 445381, 226257, 166541, 298961, 507153,
    239213, 364923, 471015, 290307, 204905, 64885, 523541, 133307, 170593, 78911, 248883, 410595,
    299109, 5073, 16045, 292263, 497911, 255597, 47807, 48415, 284717, 428577, 27627, 445047,
    483265, 13479, 465219, 21535, 283391, 161219, 302849, 281647, 504353, 35795, 75373, 333315,
    19521, 48715, 421935, 485553, 338381, 421509, 344815, 494639, 270551, 186977, 139479, 386669,
    515093, 222685, 210729, 497063, 14121, 168599, 233673, 83265, 152893, 253737, 168143, 35887,
    459415, 147671, 93295, 384809, 56693, 313559, 488191, 412245, 271981, 475351, 352713, 41801,
    376617, 160725, 371681, 377341, 510167, 19503, 118009, 215693, 452005, 36817, 28293, 61043,
    190061, 406587, 335221, 386463, 354835, 364457, 309951, 161605, 429103, 245009, 402265, 153135,
    297561, 419593, 201101, 214469, 203155, 357855, 486607, 387909, 245421, 486379, 37373, 74847,
    363777, 401295, 79033, 157373, 213177, 443105, 218747, 199165, 11659, 308349, 192115, 514451,
    56829, 283679, 225327, 125999, 235295, 412737, 382011, 375487, 495995, 364941, 350817, 104223,
    500715, 423335, 304749, 77899, 511681, 180975, 120799, 416881, 168137, 306433, 125153, 26515,
    485871, 430411, 55699, 420065, 463245, 464671, 22495, 196793, 174325, 159791, 26849, 111987,
    219539, 71723, 102797, 240609, 487217, 136991, 345409, 301665, 379135, 186335, 363097, 379989,
    155573, 489285, 82671, 62421, 323187, 337517, 399135, 298605, 68865, 5141, 290437, 275515,
    489275, 164759, 141345, 153923, 321713, 191135, 75797, 157449, 68659, 147117, 511023, 390623,
    317843, 356399, 218891, 246497, 239649, 449445, 55905, 516187, 222415, 234919, 387297, 339397,
    42605, 152319, 169909, 279279, 469025, 233851, 447675, 227131, 295831, 283021, 496125, 299209,
    249649, 471999, 154645, 481683, 411811, 364497, 97393, 436469, 337953, 92051, 326933, 327029,
    121441, 365521, 284543, 226727, 19413, 38417, 36097, 238337, 322905, 403489, 48401, 311785,
    297157, 359529, 393713, 512025, 161555, 284639, 379845, 366915, 43253, 26377, 194373, 477837,
    398357, 42399, 102501, 35417, 518169, 464387, 148451, 2593, 193279, 436257, 363563, 367849,
    115027, 63233, 4553, 333647, 434239, 170471, 216579, 35013, 81169, 228457, 174035, 430287,
    55263, 474399, 230039, 454259, 275207, 7947, 290615, 517741, 448267, 242623, 91551, 183233,
    199513, 10273, 514179, 161191, 467947, 240897, 371153, 441931, 436613, 102313, 421225, 2245,
    17135, 301165, 501793, 394135, 165641, 300561, 158927, 407275, 306571, 443713, 257071, 316979,
    223361, 382943, 309819, 449121, 146947, 120555, 159235, 100953, 485621, 321213, 167169, 126297,
    398523, 493765, 78907, 88031, 179473, 362683, 224235, 426903, 415037, 122993, 235767, 6245,
    68651, 411691, 329173, 169453, 75809, 494221, 72283, 488927, 403633, 435615, 461309, 518043,
    278867, 475873, 76021, 437505, 119867, 421687, 174113, 128827, 187901, 487471, 277777, 508307,
    158831, 130153, 215939, 249537, 37071, 124827, 100925, 435179, 514015, 166959, 48967, 516341,
    514657, 258451, 27119, 497773, 252757, 366217, 160511, 137317, 286645, 38667, 448479, 96059,
    388143, 9387, 343313, 250427, 97385, 416067, 435371, 350175, 147053, 40705, 93877, 255899,
    250075, 101355, 398507, 468383, 301873, 445505, 300981, 74843, 389045, 191467, 515881, 351061,
    319093, 371969, 249781, 274213, 35003, 522043, 207093, 272417, 59617, 52165, 259443, 70827,
    168393, 430589, 12069, 169807, 262795, 386971, 392297, 246511, 514901, 79327, 422869, 119003,
    333153, 317407, 281557, 73101, 185531, 15981, 173227, 356151, 68693, 483109, 222623, 245023,
    332455, 271531, 481381, 90203, 512219, 331009, 349229, 147795, 395461, 469237, 193707, 415711,
    130575, 287237, 405285, 490601, 453461, 441617, 448491, 399461, 369643, 190489, 41179, 74923,
    206881, 60983, 123125, 148801, 173471, 175909, 125781, 30523, 226047, 377235, 158767, 338165,
    94001, 154003, 352475, 88917, 113693, 170093, 219237, 103953, 251871, 455851, 130325, 164751,
    368421, 144135, 523369, 322045, 419517, 60245, 443119, 306981, 321435, 51773, 245655, 68437,
    353695, 373695, 280085,
];

/// Largest dimension covered by the embedded vector.
pub const MAX_LATTICE_DIMENSION: usize = DEFAULT_LATTICE_VECTOR.len();

/// Generating vector `z` of a rank-1 lattice with resolution `m`.
///
/// The lattice supports at most `2^m` points; entries are stored modulo
/// `2^m`.
///
/// # Examples
///
/// ```
/// use qmc_core::tables::GeneratingVector;
///
/// let vector = GeneratingVector::new(vec![1, 433461, 315689], 20).unwrap();
/// assert_eq!(vector.dimension(), 3);
/// assert_eq!(vector.resolution(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratingVector {
    entries: Vec<u64>,
    resolution: u32,
}

impl GeneratingVector {
    /// Wraps explicit entries with resolution `m`, reducing them modulo
    /// `2^m`.
    ///
    /// # Arguments
    ///
    /// * `entries` - Generating vector `z`, one entry per dimension
    /// * `resolution` - Resolution `m`; the lattice holds up to `2^m` points
    ///
    /// # Errors
    ///
    /// `InvalidResolution` unless `1 <= m <= 63`; `MalformedTable` if
    /// `entries` is empty.
    pub fn new(mut entries: Vec<u64>, resolution: u32) -> Result<Self> {
        if resolution == 0 || resolution > MAX_LATTICE_RESOLUTION {
            return Err(QmcError::InvalidResolution {
                requested: resolution,
                supported: MAX_LATTICE_RESOLUTION,
            });
        }
        if entries.is_empty() {
            return Err(QmcError::MalformedTable {
                line: 0,
                reason: "generating vector has no entries".to_string(),
            });
        }
        let mask = (1u64 << resolution) - 1;
        entries.iter_mut().for_each(|z| *z &= mask);
        Ok(Self {
            entries,
            resolution,
        })
    }

    /// The embedded default vector truncated to `dimension` entries.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `dimension` exceeds the embedded vector.
    pub fn lattice_default(dimension: usize) -> Result<Self> {
        Self::new(DEFAULT_LATTICE_VECTOR.to_vec(), DEFAULT_LATTICE_RESOLUTION)?.truncated(dimension)
    }

    /// Parses entries from text, one per line (extra tokens on a line are
    /// read as further entries). Entries may be integers of any size.
    pub fn parse(text: &str, resolution: u32) -> Result<Self> {
        let entries = parse_residue_rows(text)?
            .into_iter()
            .flat_map(|(_, row)| row)
            .collect();
        Self::new(entries, resolution)
    }

    /// Reads a vector file. When `resolution` is `None` it is taken from an
    /// `_m<digits>` token in the file name, e.g. `exod8_base2_m13.txt`.
    ///
    /// # Arguments
    ///
    /// * `path` - Text file with one entry per line
    /// * `resolution` - Resolution `m`, or `None` to read it from the file name
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read; `MalformedTable` if it does not parse
    /// or no resolution can be determined.
    pub fn from_file<P: AsRef<Path>>(path: P, resolution: Option<u32>) -> Result<Self> {
        let path = path.as_ref();
        let resolution = match resolution {
            Some(m) => m,
            None => path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(resolution_from_stem)
                .ok_or_else(|| QmcError::MalformedTable {
                    line: 0,
                    reason: format!(
                        "no resolution supplied and none found in '{}'",
                        path.display()
                    ),
                })?,
        };
        let text = std::fs::read_to_string(path)?;
        let vector = Self::parse(&text, resolution)?;
        tracing::debug!(
            path = %path.display(),
            dimension = vector.dimension(),
            resolution,
            "loaded generating vector"
        );
        Ok(vector)
    }

    /// Keeps the first `dimension` entries.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if fewer entries are available.
    pub fn truncated(&self, dimension: usize) -> Result<Self> {
        ensure_dimension(dimension)?;
        if dimension > self.entries.len() {
            return Err(QmcError::DimensionMismatch {
                requested: dimension,
                available: self.entries.len(),
            });
        }
        Ok(Self {
            entries: self.entries[..dimension].to_vec(),
            resolution: self.resolution,
        })
    }

    /// Number of entries.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.entries.len()
    }

    /// Resolution `m`.
    #[inline]
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Generating vector entries.
    #[inline]
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vector_entries_are_odd() {
        // odd entries make every one-dimensional projection a full grid
        for &z in DEFAULT_LATTICE_VECTOR {
            assert_eq!(z % 2, 1);
            assert!(z < 1 << DEFAULT_LATTICE_RESOLUTION);
        }
    }

    #[test]
    fn test_default_vector_has_distinct_components() {
        assert_eq!(MAX_LATTICE_DIMENSION, 1024);
        let modulus = 1u64 << DEFAULT_LATTICE_RESOLUTION;
        let mut seen = std::collections::HashSet::new();
        for &z in DEFAULT_LATTICE_VECTOR {
            // z and -z give the same projection
            assert!(seen.insert(z.min(modulus - z)), "repeated component {}", z);
        }
    }

    #[test]
    fn test_default_truncation() {
        let vector = GeneratingVector::lattice_default(3).unwrap();
        assert_eq!(vector.entries(), &[1, 433461, 315689]);
        assert!(GeneratingVector::lattice_default(MAX_LATTICE_DIMENSION + 1).is_err());
    }

    #[test]
    fn test_resolution_bounds() {
        assert!(matches!(
            GeneratingVector::new(vec![1], 0),
            Err(QmcError::InvalidResolution { .. })
        ));
        assert!(matches!(
            GeneratingVector::new(vec![1], 64),
            Err(QmcError::InvalidResolution { .. })
        ));
        assert!(GeneratingVector::new(vec![1], 63).is_ok());
        assert!(GeneratingVector::new(vec![], 10).is_err());
    }

    #[test]
    fn test_parse_one_entry_per_line() {
        let vector = GeneratingVector::parse("1\n182667\n469891\n", 20).unwrap();
        assert_eq!(vector.entries(), &[1, 182667, 469891]);
    }

    #[test]
    fn test_entries_reduced_modulo_resolution() {
        // 2^64 + 1 and 2^70 + 5 reduce to 1 and 5
        let vector = GeneratingVector::parse(
            "1\n18446744073709551617\n1180591620717411303429\n",
            3,
        )
        .unwrap();
        assert_eq!(vector.entries(), &[1, 1, 5]);

        let explicit = GeneratingVector::new(vec![9, 13], 3).unwrap();
        assert_eq!(explicit.entries(), &[1, 5]);
    }

    #[test]
    fn test_from_file_without_resolution_in_name() {
        let err = GeneratingVector::from_file("lattice.txt", None).unwrap_err();
        assert!(matches!(err, QmcError::MalformedTable { .. }));
    }
}
