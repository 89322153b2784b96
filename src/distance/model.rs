//! Distance model selection.

use super::{edit_distance, mismatch_count};

/// Distance model used to score a pattern against a dictionary word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceModel {
    /// Hamming distance.
    ///
    /// Substitutions only; strings of different lengths never match.
    #[default]
    #[serde(alias = "ham")]
    Hamming,

    /// Levenshtein distance.
    ///
    /// Insertions, deletions and substitutions, each with cost 1. No length
    /// constraint.
    #[serde(alias = "lev")]
    Levenshtein,
}

impl DistanceModel {
    /// Get a human-readable name for this model
    pub fn name(&self) -> &'static str {
        match self {
            DistanceModel::Hamming => "hamming",
            DistanceModel::Levenshtein => "levenshtein",
        }
    }

    /// Check whether `word` lies within distance `k` of `pattern`.
    ///
    /// Under Hamming, a length mismatch is silently not a match, so the
    /// Hamming precondition is never violated here.
    ///
    /// # Example
    ///
    /// ```rust
    /// use approxmatch::distance::DistanceModel;
    ///
    /// assert!(DistanceModel::Hamming.is_match("cat", "cot", 1));
    /// assert!(!DistanceModel::Hamming.is_match("cat", "cats", 5));
    /// assert!(DistanceModel::Levenshtein.is_match("cat", "cats", 1));
    /// ```
    pub fn is_match(&self, pattern: &str, word: &str, k: usize) -> bool {
        match self {
            DistanceModel::Hamming => {
                pattern.chars().count() == word.chars().count()
                    && mismatch_count(pattern, word) <= k
            }
            DistanceModel::Levenshtein => edit_distance(pattern, word) <= k,
        }
    }
}

impl std::fmt::Display for DistanceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DistanceModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hamming" | "ham" => Ok(DistanceModel::Hamming),
            "levenshtein" | "lev" | "edit" => Ok(DistanceModel::Levenshtein),
            _ => Err(format!(
                "Unknown distance model: {}. Valid options: hamming (ham), levenshtein (lev)",
                s
            )),
        }
    }
}
