//! Batch approximate matching.
//!
//! For each pattern, in input order, the matcher scans every dictionary word,
//! in input order, and keeps the words within the configured distance:
//!
//! - **Hamming**: `len(word) == len(pattern) && hamming(pattern, word) <= k`
//! - **Levenshtein**: `edit_distance(pattern, word) <= k`
//!
//! This is the unindexed baseline. There is no pruning, sorting or candidate
//! generation, and the cost is `O(patterns × words × distance)`.
//!
//! ## Example
//!
//! ```rust
//! use approxmatch::prelude::*;
//!
//! let dictionary = ["kitten"];
//! let config = MatchConfig::new(DistanceModel::Levenshtein, 3);
//! let result = BatchMatcher::new(&dictionary, config).run(&["sitting"]);
//!
//! assert_eq!(result.total_matches(), 1);
//! ```

pub mod batch;
pub mod result;

pub use batch::BatchMatcher;
pub use result::{BatchResult, Match, MatchSet};
