//! Run configuration.
//!
//! [`MatchConfig`] is the immutable configuration the batch matcher consumes.
//! [`RunConfig`] is the optional-field file form used by the command line:
//! values are read from a JSON file, overridden by explicit arguments, and
//! then resolved into a [`MatchConfig`] plus [`LoadOptions`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::corpus::LoadOptions;
use crate::distance::DistanceModel;

/// Pattern limit value meaning "use every pattern".
///
/// Any non-positive limit has the same effect.
pub const ALL_PATTERNS: i64 = -1;

/// Errors that can occur while building or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {}", path.display())]
    Io {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`RunConfig`].
    #[error("Failed to parse config file {}", path.display())]
    Parse {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

/// A specialized `Result` type for configuration handling.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration of one matching run.
///
/// # Example
///
/// ```rust
/// use approxmatch::config::MatchConfig;
/// use approxmatch::distance::DistanceModel;
///
/// let config = MatchConfig::new(DistanceModel::Levenshtein, 2).with_pattern_limit(10);
/// assert_eq!(config.limit(), Some(10));
/// assert_eq!(config.with_pattern_limit(0).limit(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Distance model used to score pairs
    pub distance_model: DistanceModel,
    /// Maximum allowed distance (inclusive)
    pub k: usize,
    /// Number of leading patterns to process; zero or negative means all
    pub pattern_limit: i64,
}

impl MatchConfig {
    /// Create a configuration that processes every pattern.
    pub fn new(distance_model: DistanceModel, k: usize) -> Self {
        Self {
            distance_model,
            k,
            pattern_limit: ALL_PATTERNS,
        }
    }

    /// Restrict the run to the first `limit` patterns.
    ///
    /// Non-positive values are ignored: every pattern is processed.
    pub fn with_pattern_limit(mut self, limit: i64) -> Self {
        self.pattern_limit = limit;
        self
    }

    /// Pattern limit as a count, `None` meaning all patterns.
    pub fn limit(&self) -> Option<usize> {
        match self.pattern_limit {
            limit if limit > 0 => usize::try_from(limit).ok(),
            _ => None,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DistanceModel::Hamming, 1)
    }
}

/// File-level run settings.
///
/// Every field is optional so that a file may set only some of them; see
/// [`RunConfig::merge`] for how command-line values take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RunConfig {
    /// Dictionary file path
    pub dict: Option<PathBuf>,
    /// Pattern file path
    pub patterns: Option<PathBuf>,
    /// Distance model
    #[serde(alias = "model")]
    pub distance_model: Option<DistanceModel>,
    /// Maximum allowed distance
    pub k: Option<usize>,
    /// Pattern limit (zero or negative for all)
    pub pattern_limit: Option<i64>,
    /// Maximum number of dictionary words read
    pub word_limit: Option<usize>,
    /// Only read patterns with exactly this many characters
    pub pattern_size: Option<usize>,
    /// Separator characters for both input files
    pub separator: Option<String>,
    /// Print the contents of each match set
    pub show_matches: Option<bool>,
}

impl RunConfig {
    /// Load settings from a JSON file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "loaded run configuration");
        Ok(config)
    }

    /// Merge with overriding values (the overrides take precedence).
    pub fn merge(&self, overrides: &RunConfig) -> Self {
        Self {
            dict: overrides.dict.clone().or_else(|| self.dict.clone()),
            patterns: overrides.patterns.clone().or_else(|| self.patterns.clone()),
            distance_model: overrides.distance_model.or(self.distance_model),
            k: overrides.k.or(self.k),
            pattern_limit: overrides.pattern_limit.or(self.pattern_limit),
            word_limit: overrides.word_limit.or(self.word_limit),
            pattern_size: overrides.pattern_size.or(self.pattern_size),
            separator: overrides.separator.clone().or_else(|| self.separator.clone()),
            show_matches: overrides.show_matches.or(self.show_matches),
        }
    }

    /// Resolve into a [`MatchConfig`], filling in defaults.
    pub fn match_config(&self) -> MatchConfig {
        let defaults = MatchConfig::default();
        MatchConfig {
            distance_model: self.distance_model.unwrap_or(defaults.distance_model),
            k: self.k.unwrap_or(defaults.k),
            pattern_limit: self.pattern_limit.unwrap_or(defaults.pattern_limit),
        }
    }

    /// Load options for the dictionary file.
    pub fn dictionary_options(&self) -> LoadOptions {
        LoadOptions {
            separators: self.separator.clone(),
            limit: self.word_limit,
            length: None,
        }
    }

    /// Load options for the pattern file.
    pub fn pattern_options(&self) -> LoadOptions {
        LoadOptions {
            separators: self.separator.clone(),
            limit: None,
            length: self.pattern_size,
        }
    }
}
