//! Distance metric implementations.
//!
//! Two metrics are provided for direct distance computation between two
//! strings:
//! - **Hamming**: number of differing positions between equal-length strings
//! - **Levenshtein**: minimum number of unit-cost insertions, deletions and
//!   substitutions
//!
//! Strings are compared as sequences of Unicode scalar values, so lengths are
//! character counts rather than byte counts.

mod model;

pub use model::DistanceModel;

use smallvec::SmallVec;
use thiserror::Error;

/// Errors raised by distance computations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DistanceError {
    /// Hamming distance was requested for strings of different lengths.
    ///
    /// Lengths are reported in characters.
    #[error("Hamming distance requires equal lengths, got {left} and {right}")]
    LengthMismatch {
        /// Character count of the first string
        left: usize,
        /// Character count of the second string
        right: usize,
    },
}

/// A specialized `Result` type for distance computations.
pub type Result<T> = std::result::Result<T, DistanceError>;

/// Compute the Hamming distance between two equal-length strings.
///
/// Returns [`DistanceError::LengthMismatch`] when the character counts
/// differ. Unequal inputs are never truncated or padded.
///
/// # Example
///
/// ```rust
/// use approxmatch::distance::{hamming_distance, DistanceError};
///
/// assert_eq!(hamming_distance("cat", "cot"), Ok(1));
/// assert_eq!(hamming_distance("karolin", "kathrin"), Ok(3));
/// assert_eq!(
///     hamming_distance("cat", "cats"),
///     Err(DistanceError::LengthMismatch { left: 3, right: 4 })
/// );
/// ```
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    let left = a.chars().count();
    let right = b.chars().count();

    if left != right {
        return Err(DistanceError::LengthMismatch { left, right });
    }

    Ok(mismatch_count(a, b))
}

/// Count differing positions, assuming the caller checked the lengths.
#[inline]
pub(crate) fn mismatch_count(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Compute the Levenshtein distance between two strings.
///
/// Uses the standard dynamic-programming recurrence over the
/// `(|a|+1) × (|b|+1)` table, filled row by row while keeping only the
/// previous and current rows. Every operation costs 1.
///
/// # Example
///
/// ```rust
/// use approxmatch::distance::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("test", "test"), 0);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: SmallVec<[char; 32]> = a.chars().collect();
    let b_chars: SmallVec<[char; 32]> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0; n + 1];

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Compute the distance between two strings under the given model.
///
/// This is the single entry point dispatching on [`DistanceModel`]. Under
/// [`DistanceModel::Hamming`] it fails on unequal lengths exactly like
/// [`hamming_distance`].
///
/// # Example
///
/// ```rust
/// use approxmatch::distance::{distance, DistanceModel};
///
/// assert_eq!(distance("kitten", "sitten", DistanceModel::Hamming), Ok(1));
/// assert_eq!(distance("kitten", "sitting", DistanceModel::Levenshtein), Ok(3));
/// assert!(distance("kitten", "sitting", DistanceModel::Hamming).is_err());
/// ```
pub fn distance(a: &str, b: &str, model: DistanceModel) -> Result<usize> {
    match model {
        DistanceModel::Hamming => hamming_distance(a, b),
        DistanceModel::Levenshtein => Ok(edit_distance(a, b)),
    }
}
