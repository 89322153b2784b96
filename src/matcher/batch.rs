//! Brute-force batch matcher.

use crate::config::MatchConfig;

use super::result::{BatchResult, Match, MatchSet};

/// Matches patterns against a dictionary by exhaustive comparison.
///
/// Every pattern is compared with every dictionary word. The only shortcut
/// is the constant-time length check that Hamming matching requires.
///
/// # Example
///
/// ```rust
/// use approxmatch::config::MatchConfig;
/// use approxmatch::distance::DistanceModel;
/// use approxmatch::matcher::BatchMatcher;
///
/// let dictionary = ["cat", "cot", "dog"];
/// let matcher = BatchMatcher::new(&dictionary, MatchConfig::new(DistanceModel::Hamming, 1));
///
/// let result = matcher.run(&["cat"]);
/// assert_eq!(result.total_matches(), 2);
/// assert_eq!(result.sets[0].indices().collect::<Vec<_>>(), vec![0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct BatchMatcher<'a, S> {
    dictionary: &'a [S],
    config: MatchConfig,
}

impl<'a, S: AsRef<str>> BatchMatcher<'a, S> {
    /// Create a matcher over `dictionary`.
    pub fn new(dictionary: &'a [S], config: MatchConfig) -> Self {
        Self { dictionary, config }
    }

    /// Find every dictionary word within distance `k` of one pattern.
    ///
    /// `position` is the pattern's place in its batch and is only recorded
    /// in the returned set.
    pub fn match_pattern<'p>(&self, position: usize, pattern: &'p str) -> MatchSet<'p>
    where
        'a: 'p,
    {
        let model = self.config.distance_model;
        let k = self.config.k;

        let matches: Vec<Match<'p>> = self
            .dictionary
            .iter()
            .enumerate()
            .filter_map(|(index, word)| {
                let word = word.as_ref();
                model
                    .is_match(pattern, word, k)
                    .then_some(Match { index, word })
            })
            .collect();

        tracing::debug!(
            position,
            pattern,
            matches = matches.len(),
            "matched pattern"
        );
        for m in &matches {
            tracing::trace!(position, index = m.index, word = m.word, "match");
        }

        MatchSet {
            position,
            pattern,
            matches,
        }
    }

    /// Match every pattern (up to the configured limit), in order.
    pub fn run<'p, P: AsRef<str>>(&self, patterns: &'p [P]) -> BatchResult<'p>
    where
        'a: 'p,
    {
        let sets = self
            .limited(patterns)
            .iter()
            .enumerate()
            .map(|(position, pattern)| self.match_pattern(position, pattern.as_ref()))
            .collect();

        self.finish(sets)
    }

    /// Match every pattern on the rayon thread pool.
    ///
    /// Produces exactly the same result as [`run`](Self::run): sets are
    /// collected in pattern order.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<'p, P>(&self, patterns: &'p [P]) -> BatchResult<'p>
    where
        'a: 'p,
        S: Sync,
        P: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let sets = self
            .limited(patterns)
            .par_iter()
            .enumerate()
            .map(|(position, pattern)| self.match_pattern(position, pattern.as_ref()))
            .collect();

        self.finish(sets)
    }

    fn limited<'p, P>(&self, patterns: &'p [P]) -> &'p [P] {
        match self.config.limit() {
            Some(limit) if limit < patterns.len() => &patterns[..limit],
            _ => patterns,
        }
    }

    fn finish<'p>(&self, sets: Vec<MatchSet<'p>>) -> BatchResult<'p> {
        let result = BatchResult {
            model: self.config.distance_model,
            k: self.config.k,
            dictionary_size: self.dictionary.len(),
            sets,
        };

        tracing::info!(
            model = %result.model,
            k = result.k,
            patterns = result.pattern_count(),
            words = result.dictionary_size,
            total_matches = result.total_matches(),
            "batch complete"
        );

        result
    }
}
