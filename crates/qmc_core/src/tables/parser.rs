//! Text parser for generating-matrix and generating-vector tables.
//!
//! Tables are whitespace-separated decimal integers. Blank lines and lines
//! starting with `#` are skipped. Each remaining line is one row.

use crate::types::{QmcError, Result};
use num_traits::Num;

/// Parses every non-empty line into a row of integers.
///
/// Returns `(line_number, row)` pairs with one-based line numbers so that
/// callers can report shape errors against the source.
pub(crate) fn parse_rows<T: Num>(text: &str) -> Result<Vec<(usize, Vec<T>)>> {
    parse_rows_with(text, |token| T::from_str_radix(token, 10).ok())
}

/// Parses every token into its residue modulo `2^64`, so integers of any
/// length are accepted.
pub(crate) fn parse_residue_rows(text: &str) -> Result<Vec<(usize, Vec<u64>)>> {
    parse_rows_with(text, residue)
}

fn residue(token: &str) -> Option<u64> {
    if token.is_empty() {
        return None;
    }
    token.bytes().try_fold(0u64, |acc, byte| {
        let digit = (byte as char).to_digit(10)?;
        Some(acc.wrapping_mul(10).wrapping_add(digit as u64))
    })
}

fn parse_rows_with<T, F>(text: &str, parse: F) -> Result<Vec<(usize, Vec<T>)>>
where
    F: Fn(&str) -> Option<T>,
{
    let mut rows = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let row = trimmed
            .split_whitespace()
            .map(|token| {
                parse(token).ok_or_else(|| QmcError::MalformedTable {
                    line: line_number,
                    reason: format!("'{}' is not an unsigned integer", token),
                })
            })
            .collect::<Result<Vec<T>>>()?;
        rows.push((line_number, row));
    }
    if rows.is_empty() {
        return Err(QmcError::MalformedTable {
            line: 0,
            reason: "table contains no entries".to_string(),
        });
    }
    Ok(rows)
}

/// Reads `m` from an `_m<digits>` token in a file stem such as
/// `exod8_base2_m13`.
pub(crate) fn resolution_from_stem(stem: &str) -> Option<u32> {
    stem.split(['_', '-', '.'])
        .filter_map(|token| token.strip_prefix('m'))
        .find_map(|digits| digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_skips_comments_and_blanks() {
        let text = "# two dimensions\n1 2 4\n\n1 3 5\n";
        let rows: Vec<(usize, Vec<u64>)> = parse_rows(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], (2, vec![1, 2, 4]));
        assert_eq!(rows[1], (4, vec![1, 3, 5]));
    }

    #[test]
    fn test_parse_rows_rejects_garbage() {
        let err = parse_rows::<u64>("1 2\n3 x\n").unwrap_err();
        match err {
            QmcError::MalformedTable { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("'x'"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_parse_rows_rejects_negative_and_empty() {
        assert!(parse_rows::<u64>("-1\n").is_err());
        assert!(parse_rows::<u64>("# nothing\n\n").is_err());
    }

    #[test]
    fn test_parse_wide_entries() {
        let rows: Vec<(usize, Vec<u128>)> = parse_rows("18446744073709551616\n").unwrap();
        assert_eq!(rows[0].1[0], 1u128 << 64);
    }

    #[test]
    fn test_residue_rows_accept_any_length() {
        let rows = parse_residue_rows("18446744073709551621 7\n").unwrap();
        assert_eq!(rows[0].1, vec![5, 7]);
        assert!(parse_residue_rows("12a\n").is_err());
        assert!(parse_residue_rows("+1\n").is_err());
    }

    #[test]
    fn test_resolution_from_stem() {
        assert_eq!(resolution_from_stem("exod8_base2_m13"), Some(13));
        assert_eq!(resolution_from_stem("lattice_m20"), Some(20));
        assert_eq!(resolution_from_stem("lattice"), None);
        assert_eq!(resolution_from_stem("mps_mx"), None);
    }
}
