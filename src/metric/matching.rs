//! Bounded-window character matching and transposition counting.
//!
//! The matching pass pairs up equal characters between two strings, looking
//! only within a window derived from the longer string's length. The pass
//! is greedy, index-ordered, and first-fit: for every character of the
//! shorter string it accepts the first unclaimed equal character in the
//! window. This is deliberately not an optimal bipartite assignment; the
//! occasionally suboptimal pairings it produces are part of the metric's
//! definition and must not be "improved".

/// Per-character claim state for the longer string.
///
/// The longer string needs a third state because the typo scorer may later
/// claim characters the matching pass left free; a claimed character must
/// never be credited twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharFlag {
    /// Not paired with anything yet.
    Free,
    /// Paired with an equal character by the matching pass.
    Matched,
    /// Claimed by the typo scorer as typographically similar.
    TypoMatched,
}

/// Output of the character matching pass.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Number of character pairs found.
    pub num_matches: usize,
    /// Which positions of the shorter string were paired.
    pub flags1: Vec<bool>,
    /// Claim state of each position of the longer string.
    pub flags2: Vec<CharFlag>,
}

/// Find the bounded-window character alignment between two strings.
///
/// `s1` must be the shorter string (callers pre-swap) and both strings must
/// be non-empty. Each character of `s1` scans the inclusive window
/// `[i - search_range, i + search_range]` of `s2`, where `search_range` is
/// `max(len2 / 2 - 1, 0)`, and claims the first free equal character. Once
/// a window has no candidate the character stays unmatched; there are no
/// retries.
#[allow(clippy::needless_range_loop)]
pub fn count_matches(s1: &[char], s2: &[char]) -> MatchResult {
    debug_assert!(!s1.is_empty() && s1.len() <= s2.len());

    let len2 = s2.len();
    let search_range = (len2 / 2).saturating_sub(1);

    let mut num_matches = 0;
    let mut flags1 = vec![false; s1.len()];
    let mut flags2 = vec![CharFlag::Free; len2];

    for (i, &ch) in s1.iter().enumerate() {
        let lolim = i.saturating_sub(search_range);
        let hilim = (i + search_range).min(len2 - 1);
        for j in lolim..=hilim {
            if flags2[j] == CharFlag::Free && s2[j] == ch {
                flags1[i] = true;
                flags2[j] = CharFlag::Matched;
                num_matches += 1;
                break;
            }
        }
    }

    MatchResult {
        num_matches,
        flags1,
        flags2,
    }
}

/// Count the half transpositions between two strings.
///
/// The i-th matched character of `s1` is paired with the i-th matched
/// character of `s2` in appearance order, using a single forward cursor
/// that never rewinds. Every unequal pair counts as one half
/// transposition; the classic transposition count used by the weight
/// formula is this value divided by two, rounding down.
pub fn count_half_transpositions(
    s1: &[char],
    s2: &[char],
    flags1: &[bool],
    flags2: &[CharFlag],
) -> usize {
    let mut half_transposes = 0;
    let mut k = 0;

    for (i, &flag) in flags1.iter().enumerate() {
        if !flag {
            continue;
        }

        // Advance to the next matched char in the second string.
        while flags2[k] != CharFlag::Matched {
            k += 1;
        }

        if s1[i] != s2[k] {
            half_transposes += 1;
        }
        k += 1;
    }

    half_transposes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn matches(s1: &str, s2: &str) -> (usize, usize) {
        let mut c1 = chars(s1);
        let mut c2 = chars(s2);
        if c2.len() < c1.len() {
            std::mem::swap(&mut c1, &mut c2);
        }
        let result = count_matches(&c1, &c2);
        let half = count_half_transpositions(&c1, &c2, &result.flags1, &result.flags2);
        (result.num_matches, half)
    }

    #[test]
    fn test_count_matches_identical() {
        assert_eq!(matches("MARTHA", "MARTHA"), (6, 0));
        assert_eq!(matches("A", "A"), (1, 0));
    }

    #[test]
    fn test_count_matches_swapped_chars() {
        // Swapped adjacent characters still match, but out of order.
        assert_eq!(matches("MARTHA", "MARHTA"), (6, 2));
        assert_eq!(matches("DWAYNE", "DYUANE"), (5, 2));
    }

    #[test]
    fn test_count_matches_window_excludes_far_chars() {
        // In DIXON vs DICKSONX the X at position 7 lies outside the search
        // window of X at position 2, so only 4 characters match.
        assert_eq!(matches("DIXON", "DICKSONX"), (4, 0));
    }

    #[test]
    fn test_count_matches_disjoint() {
        let c1 = chars("ABC");
        let c2 = chars("XYZ");
        let result = count_matches(&c1, &c2);
        assert_eq!(result.num_matches, 0);
        assert!(result.flags1.iter().all(|&f| !f));
        assert!(result.flags2.iter().all(|&f| f == CharFlag::Free));
    }

    #[test]
    fn test_count_matches_single_char_strings() {
        // len2 == 1 makes the raw search range negative; it must clamp to 0.
        assert_eq!(matches("A", "B"), (0, 0));
        assert_eq!(matches("A", "AB"), (1, 0));
    }

    #[test]
    fn test_greedy_first_fit_is_positional() {
        // The first free equal character wins even when a later one would
        // give a better alignment overall.
        assert_eq!(matches("ABCVWXYZ", "CABVWXYZ"), (8, 3));
        assert_eq!(matches("ABCAWXYZ", "BCAWXYZ"), (7, 3));
        assert_eq!(matches("ABBBUVWXYZ", "BBBAUVWXYZ"), (10, 2));
    }

    #[test]
    fn test_half_transpositions_odd_count() {
        // WIBBELLY vs WOBRELBLY produces an odd half-transposition count;
        // the weight formula later floors the halving.
        assert_eq!(matches("WIBBELLY", "WOBRELBLY"), (7, 3));
    }

    #[test]
    fn test_flags_mark_matched_positions() {
        let c1 = chars("CRATE");
        let c2 = chars("TRACE");
        let result = count_matches(&c1, &c2);
        assert_eq!(result.num_matches, 3);
        let claimed = result
            .flags2
            .iter()
            .filter(|&&f| f == CharFlag::Matched)
            .count();
        assert_eq!(claimed, result.num_matches);
        let claimed1 = result.flags1.iter().filter(|&&f| f).count();
        assert_eq!(claimed1, result.num_matches);
    }
}
