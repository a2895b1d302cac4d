//! The metric engine: pass sequencing and the four metric variants.
//!
//! The variants are one parameterized pipeline plus named wrappers, not a
//! type hierarchy. [`string_metrics`] runs the matching, transposition,
//! and typo passes and decides which adjustments apply; the entry points
//! feed its counts through the weight functions.
//!
//! # Examples
//!
//! ```
//! use jarow::metric::engine::{jaro, jaro_winkler, original};
//!
//! assert!((jaro("MARTHA", "MARHTA") - 0.94444).abs() < 1e-5);
//! assert!((jaro_winkler("MARTHA", "MARHTA") - 0.96111).abs() < 1e-5);
//! assert!((original("MARTHA", "MARHTA") - 0.97083).abs() < 1e-5);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{MetricError, Result};
use crate::metric::matching::{count_half_transpositions, count_matches};
use crate::metric::weights::{jaro_weight, long_string_adjust, winkler_boost};
use crate::typo::scorer::count_typos;
use crate::typo::table::{DEFAULT_TYPO_TABLE, TypoTable};

/// Parameters for a metric computation.
///
/// Immutable per invocation; there is no global configuration state. The
/// defaults do the least work necessary for the plain Jaro metric.
#[derive(Debug, Clone)]
pub struct MetricParams<'a> {
    /// Typo table for crediting similar unmatched characters.
    pub typo_table: Option<&'a TypoTable>,
    /// Divisor applied to the raw typo score. Must be positive.
    pub typo_scale: f64,
    /// Jaro weight above which the Winkler prefix boost applies. Must be
    /// positive when present; absent disables all boosting.
    pub boost_threshold: Option<f64>,
    /// Maximum prefix length considered for the boost.
    pub pre_len: usize,
    /// Boost per agreeing prefix character, in [0, 1]. Keep
    /// `pre_scale * pre_len <= 1` or scores can exceed 1.0.
    pub pre_scale: f64,
    /// Enable the long-string tail adjustment.
    pub longer_prob: bool,
}

impl Default for MetricParams<'_> {
    fn default() -> Self {
        MetricParams {
            typo_table: None,
            typo_scale: 1.0,
            boost_threshold: None,
            pre_len: 0,
            pre_scale: 0.0,
            longer_prob: false,
        }
    }
}

impl MetricParams<'_> {
    /// Validate the parameter ranges, failing fast on configuration errors.
    pub fn validate(&self) -> Result<()> {
        if self.typo_scale <= 0.0 {
            return Err(MetricError::invalid_parameter(format!(
                "typo_scale must be positive, got {}",
                self.typo_scale
            )));
        }
        if let Some(threshold) = self.boost_threshold
            && threshold <= 0.0
        {
            return Err(MetricError::invalid_parameter(format!(
                "boost_threshold must be positive, got {threshold}"
            )));
        }
        if !(0.0..=1.0).contains(&self.pre_scale) {
            return Err(MetricError::invalid_parameter(format!(
                "pre_scale must lie in [0, 1], got {}",
                self.pre_scale
            )));
        }
        Ok(())
    }
}

/// The counts and flags a metric computation threads between its passes.
///
/// Lengths and counts are reported in canonical orientation: `len1` always
/// belongs to the shorter input. For the plain Jaro metric (no boost
/// threshold) `pre_matches` and `adjust_long` stay zeroed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StringCounts {
    /// Length of the shorter string, in characters.
    pub len1: usize,
    /// Length of the longer string, in characters.
    pub len2: usize,
    /// Characters paired by the matching pass.
    pub num_matches: usize,
    /// Ordering disagreements among the paired characters.
    pub half_transposes: usize,
    /// Un-normalized typo credit for unmatched characters.
    pub typo_score: f64,
    /// Agreeing alphabetic prefix length, when the boost applies.
    pub pre_matches: usize,
    /// Whether the long-string adjustment is warranted.
    pub adjust_long: bool,
}

/// Calculate the counts and flags required by the Jaro-Winkler routines.
///
/// Validates the parameters, then runs the pass pipeline: normalize the
/// orientation, find matches, count half transpositions, credit typos, and
/// (when a boost threshold is set and exceeded) measure the agreeing
/// prefix and decide the long-string adjustment.
pub fn string_metrics(s1: &str, s2: &str, params: &MetricParams<'_>) -> Result<StringCounts> {
    params.validate()?;
    Ok(compute_counts(s1, s2, params))
}

/// The pass pipeline proper. Parameters must already be validated.
fn compute_counts(s1: &str, s2: &str, params: &MetricParams<'_>) -> StringCounts {
    let mut chars1: Vec<char> = s1.chars().collect();
    let mut chars2: Vec<char> = s2.chars().collect();
    if chars2.len() < chars1.len() {
        std::mem::swap(&mut chars1, &mut chars2);
    }
    let len1 = chars1.len();
    let len2 = chars2.len();

    let mut counts = StringCounts {
        len1,
        len2,
        ..StringCounts::default()
    };

    if len1 == 0 || len2 == 0 {
        return counts;
    }

    let mut matched = count_matches(&chars1, &chars2);

    // No characters in common - return
    if matched.num_matches == 0 {
        return counts;
    }
    counts.num_matches = matched.num_matches;

    counts.half_transposes =
        count_half_transpositions(&chars1, &chars2, &matched.flags1, &matched.flags2);

    // Adjust for similarities in non-matched characters.
    if let Some(typo_table) = params.typo_table
        && len1 > counts.num_matches
    {
        counts.typo_score = count_typos(
            &chars1,
            &chars2,
            &matched.flags1,
            &mut matched.flags2,
            typo_table,
        );
    }

    let Some(boost_threshold) = params.boost_threshold else {
        return counts;
    };

    let weight_typo = jaro_weight(
        len1,
        len2,
        counts.num_matches,
        counts.half_transposes,
        counts.typo_score,
        params.typo_scale,
    );

    // Continue to boost the weight only if the strings are similar.
    if weight_typo > boost_threshold {
        // Count up to the first `pre_len` chars (not digits) in common.
        let limit = len1.min(params.pre_len);
        while counts.pre_matches < limit {
            let char1 = chars1[counts.pre_matches];
            if !(char1.is_alphabetic() && char1 == chars2[counts.pre_matches]) {
                break;
            }
            counts.pre_matches += 1;
        }

        // After the agreeing prefix, at least two more characters must
        // agree and the agreeing characters must be more than half of the
        // remaining characters.
        if params.longer_prob {
            counts.adjust_long = len1 > params.pre_len
                && counts.num_matches > counts.pre_matches + 1
                && 2 * counts.num_matches >= len1 + counts.pre_matches
                && chars1[0].is_alphabetic();
        }
    }

    counts
}

/// Chain the weight functions over a set of counts.
fn finish_weight(counts: &StringCounts, typo_scale: f64, pre_scale: f64) -> f64 {
    let weight_typo = jaro_weight(
        counts.len1,
        counts.len2,
        counts.num_matches,
        counts.half_transposes,
        counts.typo_score,
        typo_scale,
    );
    let weight_winkler = winkler_boost(weight_typo, counts.pre_matches, pre_scale);

    if counts.adjust_long {
        long_string_adjust(
            weight_winkler,
            counts.len1,
            counts.len2,
            counts.num_matches,
            counts.pre_matches,
        )
    } else {
        weight_winkler
    }
}

/// The standard, basic Jaro string metric.
pub fn jaro(s1: &str, s2: &str) -> f64 {
    let counts = compute_counts(s1, s2, &MetricParams::default());
    jaro_weight(
        counts.len1,
        counts.len2,
        counts.num_matches,
        counts.half_transposes,
        0.0,
        1.0,
    )
}

/// The Jaro metric with Winkler's modification, which boosts the score of
/// strings whose prefixes match.
pub fn jaro_winkler(s1: &str, s2: &str) -> f64 {
    let params = MetricParams {
        boost_threshold: Some(0.7),
        pre_len: 4,
        pre_scale: 0.1,
        ..MetricParams::default()
    };
    let counts = compute_counts(s1, s2, &params);
    finish_weight(&counts, params.typo_scale, params.pre_scale)
}

/// The metric that the strcmp95 reference code returns, taking into
/// account its typo table and the adjustment for longer strings.
///
/// Uses the builtin table, which covers only ASCII capital letters and
/// digits; to credit lower-case letters or other character sets, build
/// your own table and use [`custom`].
pub fn original(s1: &str, s2: &str) -> f64 {
    let params = MetricParams {
        typo_table: Some(&DEFAULT_TYPO_TABLE),
        typo_scale: 10.0,
        boost_threshold: Some(0.7),
        pre_len: 4,
        pre_scale: 0.1,
        longer_prob: true,
    };
    let counts = compute_counts(s1, s2, &params);
    finish_weight(&counts, params.typo_scale, params.pre_scale)
}

/// Calculate the Jaro-Winkler metric with parameters of your own choosing.
///
/// Any similar but unmatched characters found in `typo_table` increase the
/// effective match count, scaled down by `typo_scale`. When the raw weight
/// exceeds `boost_threshold`, the score is boosted by `pre_scale` for each
/// of up to `pre_len` agreeing alphabetic prefix characters; keep
/// `pre_scale` no larger than `1 / pre_len` or the score can exceed 1.0.
/// `longer_prob` enables a further adjustment for long, similar strings
/// with an agreeing prefix.
#[allow(clippy::too_many_arguments)]
pub fn custom(
    s1: &str,
    s2: &str,
    typo_table: Option<&TypoTable>,
    typo_scale: f64,
    boost_threshold: Option<f64>,
    pre_len: usize,
    pre_scale: f64,
    longer_prob: bool,
) -> Result<f64> {
    let params = MetricParams {
        typo_table,
        typo_scale,
        boost_threshold,
        pre_len,
        pre_scale,
        longer_prob,
    };
    let counts = string_metrics(s1, s2, &params)?;
    Ok(finish_weight(&counts, params.typo_scale, params.pre_scale))
}
