//! Weight calculation for the Jaro family of metrics.
//!
//! Pure numeric functions that turn the counts produced by the matching,
//! transposition, and typo passes into a score in [0.0, 1.0].

/// Calculate the classic Jaro weight from pass counts.
///
/// `len1` and `len2` are the string lengths in characters, `num_matches`
/// and `half_transposes` the output of the matching passes. `typo_score`
/// is the optional typo credit for unmatched characters, scaled down by
/// `typo_scale` before being added to the match count.
///
/// Two empty strings compare as a perfect match (1.0); one empty string or
/// zero matches is no match at all (0.0).
pub fn jaro_weight(
    len1: usize,
    len2: usize,
    num_matches: usize,
    half_transposes: usize,
    typo_score: f64,
    typo_scale: f64,
) -> f64 {
    if len1 == 0 {
        if len2 == 0 {
            return 1.0;
        }
        return 0.0;
    }
    if num_matches == 0 {
        return 0.0;
    }

    let matches = num_matches as f64;
    let similar = typo_score / typo_scale + matches;
    // The halving of half transpositions rounds down on purpose.
    let weight = similar / len1 as f64
        + similar / len2 as f64
        + (matches - (half_transposes / 2) as f64) / matches;

    weight / 3.0
}

/// Boost a Jaro weight by `pre_scale` units per agreeing prefix character.
///
/// The result stays within 1.0 as long as the caller keeps
/// `pre_scale * pre_len <= 1`; that constraint is a configuration
/// invariant, not something checked here at run time.
pub fn winkler_boost(weight: f64, pre_matches: usize, pre_scale: f64) -> f64 {
    let weight = weight + pre_matches as f64 * pre_scale * (1.0 - weight);
    debug_assert!(weight <= 1.0);
    weight
}

/// Apply the long-string tail adjustment to an already boosted weight.
///
/// Requires `num_matches > pre_matches + 1`; the engine gates the call on
/// that condition along with the other long-string criteria.
pub fn long_string_adjust(
    weight: f64,
    len1: usize,
    len2: usize,
    num_matches: usize,
    pre_matches: usize,
) -> f64 {
    debug_assert!(num_matches > pre_matches + 1);
    let num = (num_matches - pre_matches - 1) as f64;
    let den = (len1 + len2 + 2 - 2 * pre_matches) as f64;
    weight + (1.0 - weight) * num / den
}
