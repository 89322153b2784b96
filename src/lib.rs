//! # approxmatch
//!
//! Brute-force approximate dictionary matching.
//!
//! Given a dictionary and a batch of patterns, finds for every pattern each
//! dictionary word within a distance threshold `k`, under Hamming distance
//! (equal lengths, substitutions only) or Levenshtein distance (insertions,
//! deletions and substitutions). The matcher compares every pattern with
//! every word and serves as the reference result for faster indexed search.
//!
//! ## Example
//!
//! ```rust
//! use approxmatch::prelude::*;
//!
//! let dictionary = ["cat", "cot", "dog"];
//! let matcher = BatchMatcher::new(&dictionary, MatchConfig::new(DistanceModel::Hamming, 1));
//!
//! for set in &matcher.run(&["cat"]).sets {
//!     for m in set {
//!         println!("{} matches #{} {}", set.pattern, m.index, m.word);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod corpus;
pub mod distance;
pub mod matcher;
pub mod report;
pub mod verify;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::config::{MatchConfig, RunConfig};
    pub use crate::corpus::{LoadOptions, WordList};
    pub use crate::distance::{distance, edit_distance, hamming_distance, DistanceError, DistanceModel};
    pub use crate::matcher::{BatchMatcher, BatchResult, Match, MatchSet};
    pub use crate::report::{InputSummary, ReportFormat, ReportOptions, Reporter};
    pub use crate::verify::{check, Verification};
}
