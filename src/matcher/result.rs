//! Match results.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::distance::DistanceModel;

/// A dictionary word matching one pattern.
///
/// Matches are identified by the word's dictionary index, so equal words at
/// different indices are distinct matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct Match<'a> {
    /// 0-based position of the word in the dictionary
    pub index: usize,
    /// The word itself
    pub word: &'a str,
}

/// All matches found for one pattern.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MatchSet<'a> {
    /// 0-based position of the pattern in the batch
    pub position: usize,
    /// The pattern itself
    pub pattern: &'a str,
    /// Matches in dictionary order
    pub matches: Vec<Match<'a>>,
}

impl<'a> MatchSet<'a> {
    /// Number of matches.
    #[inline]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the pattern matched nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Whether the word at `index` is among the matches.
    pub fn contains_index(&self, index: usize) -> bool {
        self.matches.iter().any(|m| m.index == index)
    }

    /// Dictionary indices of the matches.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches.iter().map(|m| m.index)
    }

    /// Iterate over the matches.
    pub fn iter(&self) -> std::slice::Iter<'_, Match<'a>> {
        self.matches.iter()
    }

    /// Whether every match of `self` is also a match of `other`.
    pub fn is_subset(&self, other: &MatchSet<'_>) -> bool {
        self.indices().all(|index| other.contains_index(index))
    }
}

impl<'s, 'a> IntoIterator for &'s MatchSet<'a> {
    type Item = &'s Match<'a>;
    type IntoIter = std::slice::Iter<'s, Match<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Outcome of matching a batch of patterns against a dictionary.
///
/// Statistics are derived from the match sets on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchResult<'a> {
    /// Distance model used
    pub model: DistanceModel,
    /// Threshold used
    pub k: usize,
    /// Number of dictionary words scanned
    pub dictionary_size: usize,
    /// One set per processed pattern, in pattern order
    pub sets: Vec<MatchSet<'a>>,
}

impl<'a> BatchResult<'a> {
    /// Number of patterns processed (after any pattern limit).
    #[inline]
    pub fn pattern_count(&self) -> usize {
        self.sets.len()
    }

    /// Sum of all match set sizes.
    pub fn total_matches(&self) -> usize {
        self.sets.iter().map(MatchSet::len).sum()
    }

    /// Running totals after each pattern, in pattern order.
    pub fn running_totals(&self) -> impl Iterator<Item = usize> + '_ {
        self.sets.iter().scan(0, |total, set| {
            *total += set.len();
            Some(*total)
        })
    }
}

impl Serialize for BatchResult<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BatchResult", 6)?;
        state.serialize_field("model", &self.model)?;
        state.serialize_field("k", &self.k)?;
        state.serialize_field("dictionarySize", &self.dictionary_size)?;
        state.serialize_field("patternCount", &self.pattern_count())?;
        state.serialize_field("totalMatches", &self.total_matches())?;
        state.serialize_field("sets", &self.sets)?;
        state.end()
    }
}
