//! Jaro family metric computation for jarow.
//!
//! This module provides the character matching and weight calculation
//! passes, and the engine that sequences them into the plain Jaro,
//! Jaro-Winkler, strcmp95-original, and custom metric variants.

pub mod engine;
pub mod matching;
pub mod weights;

// Re-export commonly used types
pub use engine::*;
pub use matching::*;
pub use weights::*;
