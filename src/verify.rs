//! Result checking.
//!
//! Compares the total match count recorded in a report against an expected
//! value. A disagreement is a test outcome, returned as
//! [`Verification::Mismatch`], not an error.

use thiserror::Error;

/// Default line (counted from the end, 1-based) carrying the total in this
/// crate's own text reports.
pub const DEFAULT_LINE_FROM_END: usize = 1;

/// Errors that prevent a report from being checked at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VerifyError {
    /// The report has fewer non-empty lines than requested.
    #[error("Report has {available} non-empty line(s), cannot read line {requested} from the end")]
    NotEnoughLines {
        /// Requested position from the end (1-based)
        requested: usize,
        /// Number of non-empty lines in the report
        available: usize,
    },

    /// The final token of the selected line is not an integer.
    #[error("Expected an integer at the end of line {line:?}")]
    NotAnInteger {
        /// The offending line
        line: String,
    },
}

/// A specialized `Result` type for report checking.
pub type Result<T> = std::result::Result<T, VerifyError>;

/// Outcome of comparing a report's total with the expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The totals agree.
    Match {
        /// Total found in the report
        actual: usize,
    },
    /// The totals disagree.
    Mismatch {
        /// Total found in the report
        actual: usize,
        /// Total the caller expected
        expected: usize,
    },
}

impl Verification {
    /// Whether the report agreed with the expected value.
    pub fn is_ok(&self) -> bool {
        matches!(self, Verification::Match { .. })
    }
}

impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verification::Match { actual } => write!(f, "OK (#matches = {})", actual),
            Verification::Mismatch { actual, expected } => {
                write!(f, "ERROR: {} != {}", actual, expected)
            }
        }
    }
}

/// Extract the total match count from a report.
///
/// Takes the `line_from_end`-th non-empty line counted from the end
/// (1 = last) and parses its final whitespace-separated token.
///
/// # Example
///
/// ```rust
/// use approxmatch::verify::extract_total;
///
/// let report = "#patterns = 3, k = 1\nTotal #matches = 42\n\n";
/// assert_eq!(extract_total(report, 1), Ok(42));
/// ```
pub fn extract_total(report: &str, line_from_end: usize) -> Result<usize> {
    let lines: Vec<&str> = report.lines().filter(|line| !line.trim().is_empty()).collect();

    if line_from_end == 0 || line_from_end > lines.len() {
        return Err(VerifyError::NotEnoughLines {
            requested: line_from_end,
            available: lines.len(),
        });
    }

    let line = lines[lines.len() - line_from_end];
    line.split_whitespace()
        .last()
        .and_then(|token| token.parse().ok())
        .ok_or_else(|| VerifyError::NotAnInteger {
            line: line.to_string(),
        })
}

/// Check a report against the expected total.
pub fn check(report: &str, expected: usize, line_from_end: usize) -> Result<Verification> {
    let actual = extract_total(report, line_from_end)?;

    let outcome = if actual == expected {
        Verification::Match { actual }
    } else {
        Verification::Mismatch { actual, expected }
    };

    match outcome {
        Verification::Match { .. } => tracing::info!(actual, "report total verified"),
        Verification::Mismatch { .. } => {
            tracing::warn!(actual, expected, "report total differs from expected")
        }
    }

    Ok(outcome)
}
