//! Typo scoring for unmatched characters.

use std::collections::HashMap;

use crate::metric::matching::CharFlag;
use crate::typo::table::TypoTable;

/// Score typographic similarity among unmatched characters.
///
/// For each unmatched character of the shorter string (in index order)
/// that has a row in the typo table, scan the still-free characters of the
/// longer string (in index order) for the first one present in that row.
/// On a hit the row's score is added to the running total and the claimed
/// position is marked [`CharFlag::TypoMatched`] so it can never be
/// credited again.
///
/// Only called when the shorter string still has unmatched characters.
/// Returns the cumulative, un-normalized score; the weight calculation
/// divides it by the typo scale.
pub fn count_typos(
    s1: &[char],
    s2: &[char],
    flags1: &[bool],
    flags2: &mut [CharFlag],
    typo_table: &TypoTable,
) -> f64 {
    debug_assert!(flags1.contains(&false));

    let mut typo_score = 0.0;

    for (i, &flag1) in flags1.iter().enumerate() {
        if flag1 {
            continue;
        }
        let Some(typo_row) = typo_table.row(s1[i]) else {
            continue;
        };

        typo_score += claim_similar_char(s2, flags2, typo_row);
    }

    typo_score
}

/// Claim the first free character of `s2` present in `typo_row`.
fn claim_similar_char(s2: &[char], flags2: &mut [CharFlag], typo_row: &HashMap<char, f64>) -> f64 {
    for (j, flag2) in flags2.iter_mut().enumerate() {
        if *flag2 != CharFlag::Free {
            continue;
        }
        if let Some(&score) = typo_row.get(&s2[j]) {
            *flag2 = CharFlag::TypoMatched;
            return score;
        }
    }
    0.0
}
