//! # Jarow
//!
//! Jaro and Jaro-Winkler string metrics for record linkage.
//!
//! The scores returned range from 0.0 (no match) to 1.0 (perfect match) and
//! reproduce the output of the strcmp95 routine used by record-linkage
//! software, including its typo table and long-string adjustment. Strings
//! are compared as given; the caller is responsible for case folding and
//! trimming.
//!
//! ## Features
//!
//! - Plain Jaro metric
//! - Jaro-Winkler metric with prefix boost
//! - The historical strcmp95 metric (typo table + long-string adjustment)
//! - Fully parameterized custom metrics
//!
//! # Examples
//!
//! ```
//! use jarow::prelude::*;
//!
//! let score = jaro_winkler("MARTHA", "MARHTA");
//! assert!((score - 0.96111).abs() < 1e-5);
//! ```

pub mod error;
pub mod metric;
pub mod typo;

pub mod prelude {
    //! Convenience re-exports of the metric entry points.

    pub use crate::metric::engine::{custom, jaro, jaro_winkler, original};
    pub use crate::typo::table::build_typo_table;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
