//! Typographic similarity tables and scoring for jarow.
//!
//! Unmatched characters can still earn partial credit when a typo table
//! declares them confusable (OCR errors, adjacent keys, look-alike
//! digits). This module provides the symmetric table type, the builtin
//! strcmp95 table, and the scorer that walks unmatched characters.

pub mod scorer;
pub mod table;

// Re-export commonly used types
pub use scorer::*;
pub use table::*;
