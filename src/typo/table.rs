//! Symmetric typographic similarity tables.
//!
//! A typo table maps pairs of characters that are likely to be confused
//! for each other (by a typist, OCR software, or a bad phone line) to a
//! similarity score. The table is symmetric by construction: inserting
//! the pair (A, E) makes both `A -> E` and `E -> A` score the same.
//!
//! # Examples
//!
//! ```
//! use jarow::typo::table::build_typo_table;
//!
//! let table = build_typo_table(&['B', '8', '0', 'O', '0', 'Q'], 2.0).unwrap();
//! assert_eq!(table.score('B', '8'), Some(2.0));
//! assert_eq!(table.score('8', 'B'), Some(2.0));
//! assert_eq!(table.score('B', 'Q'), None);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, Result};

/// Score assigned to a typo pair when none is specified.
pub const DEFAULT_TYPO_SCORE: f64 = 3.0;

/// The typo pairs from Winkler's strcmp95 routine.
///
/// Covers ASCII capital letters and digits only; callers working with
/// lower-case text or other alphabets need to build their own table.
const STRCMP95_TYPO_PAIRS: &[char] = &[
    'A', 'E', 'A', 'I', 'A', 'O', 'A', 'U', 'B', 'V', 'E', 'I', 'E', 'O', 'E', 'U', //
    'I', 'O', 'I', 'U', 'O', 'U', 'I', 'Y', 'E', 'Y', 'C', 'G', 'E', 'F', //
    'W', 'U', 'W', 'V', 'X', 'K', 'S', 'Z', 'X', 'S', 'Q', 'C', 'U', 'V', //
    'M', 'N', 'L', 'I', 'Q', 'O', 'P', 'R', 'I', 'J', '2', 'Z', '5', 'S', //
    '8', 'B', '1', 'I', '1', 'L', '0', 'O', '0', 'Q', 'C', 'K', 'G', 'J',
];

/// The strcmp95 typo table, each pair scored at [`DEFAULT_TYPO_SCORE`].
pub static DEFAULT_TYPO_TABLE: LazyLock<TypoTable> = LazyLock::new(|| {
    TypoTable::from_pairs(STRCMP95_TYPO_PAIRS, DEFAULT_TYPO_SCORE)
        .expect("builtin typo pairs are well formed")
});

/// A symmetric character similarity table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypoTable {
    rows: HashMap<char, HashMap<char, f64>>,
}

impl TypoTable {
    /// Create a new empty table.
    pub fn new() -> Self {
        TypoTable {
            rows: HashMap::new(),
        }
    }

    /// Build a table from a flat list of character pairs.
    ///
    /// The list is read as consecutive (row, col) pairs; each pair is
    /// inserted in both directions with the given score. Fails if the
    /// list has odd length or if any pair (in either direction) is
    /// already present, since that would silently overwrite a score.
    pub fn from_pairs(pairs: &[char], score: f64) -> Result<Self> {
        if pairs.len() % 2 != 0 {
            return Err(MetricError::UnpairedChar(pairs.len()));
        }

        let mut table = TypoTable::new();
        for pair in pairs.chunks_exact(2) {
            table.insert(pair[0], pair[1], score)?;
        }
        Ok(table)
    }

    /// Insert a symmetric pair into the table.
    ///
    /// Fails with [`MetricError::ConflictingEntry`] if either direction of
    /// the pair already has a score. Note that a character paired with
    /// itself always conflicts, since both directions are the same entry.
    pub fn insert(&mut self, a: char, b: char, score: f64) -> Result<()> {
        for (row, col) in [(a, b), (b, a)] {
            let row_map = self.rows.entry(row).or_default();
            if row_map.contains_key(&col) {
                return Err(MetricError::ConflictingEntry { row, col });
            }
            row_map.insert(col, score);
        }
        Ok(())
    }

    /// Get the similarity score for a pair of characters, if any.
    pub fn score(&self, a: char, b: char) -> Option<f64> {
        self.rows.get(&a).and_then(|row| row.get(&b).copied())
    }

    /// Get the similarity row for a character, if any.
    pub fn row(&self, a: char) -> Option<&HashMap<char, f64>> {
        self.rows.get(&a)
    }

    /// Check whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of characters that have at least one similarity entry.
    pub fn char_count(&self) -> usize {
        self.rows.len()
    }
}

/// Build a symmetric typo table from a flat list of character pairs.
///
/// Construction helper mirroring [`TypoTable::from_pairs`]; use
/// [`DEFAULT_TYPO_SCORE`] for the historical per-pair score.
pub fn build_typo_table(pairs: &[char], score: f64) -> Result<TypoTable> {
    TypoTable::from_pairs(pairs, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_symmetric() {
        let table = build_typo_table(&['A', 'E'], DEFAULT_TYPO_SCORE).unwrap();
        assert_eq!(table.score('A', 'E'), Some(3.0));
        assert_eq!(table.score('E', 'A'), Some(3.0));
        assert_eq!(table.score('A', 'A'), None);
        assert_eq!(table.score('E', 'E'), None);
    }

    #[test]
    fn test_duplicate_pair_conflicts() {
        // Re-inserting a pair is an error even with the same score.
        let result = build_typo_table(&['A', 'E', 'A', 'E'], 3.0);
        assert_eq!(
            result.unwrap_err(),
            MetricError::ConflictingEntry { row: 'A', col: 'E' }
        );

        // The reversed duplicate conflicts too, through the symmetry.
        let result = build_typo_table(&['A', 'E', 'E', 'A'], 3.0);
        assert!(matches!(result, Err(MetricError::ConflictingEntry { .. })));
    }

    #[test]
    fn test_self_pair_conflicts() {
        let result = build_typo_table(&['A', 'A'], 3.0);
        assert!(matches!(result, Err(MetricError::ConflictingEntry { .. })));
    }

    #[test]
    fn test_odd_pair_list_fails() {
        let result = build_typo_table(&['A', 'E', 'B'], 3.0);
        assert_eq!(result.unwrap_err(), MetricError::UnpairedChar(3));
    }

    #[test]
    fn test_empty_table() {
        let table = build_typo_table(&[], 3.0).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.char_count(), 0);
        assert_eq!(table.score('A', 'E'), None);
    }

    #[test]
    fn test_builtin_table_spot_checks() {
        let table = &*DEFAULT_TYPO_TABLE;
        assert_eq!(table.score('A', 'E'), Some(3.0));
        assert_eq!(table.score('E', 'A'), Some(3.0));
        assert_eq!(table.score('0', 'O'), Some(3.0));
        assert_eq!(table.score('1', 'L'), Some(3.0));
        assert_eq!(table.score('M', 'N'), Some(3.0));
        // Lower case is deliberately absent.
        assert_eq!(table.score('a', 'e'), None);
        // 36 pairs over 28 distinct characters.
        assert_eq!(table.char_count(), 28);
    }

    #[test]
    fn test_serde_round_trip() {
        let table = build_typo_table(&['B', '8', '0', 'O'], 2.0).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: TypoTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
