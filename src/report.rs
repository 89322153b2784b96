//! Report formatting.
//!
//! The text report is the artifact the result checker parses
//! (see [`crate::verify`]):
//!
//! ```text
//! Using distance: hamming
//! Read #words = 3
//! Read #patterns = 1
//!
//! Pattern: cat (1/1)
//! #matches = 2
//! Matches: [(0, cat), (1, cot)]
//!
//! #patterns = 1, k = 1
//! Total #matches = 2
//! ```
//!
//! The last non-empty line always ends with the total match count.

use std::io::{self, Write};

use crate::matcher::{BatchResult, MatchSet};

/// Output format of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Line-oriented text, parseable by the result checker
    #[default]
    Text,
    /// A single JSON document
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Report options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Print the contents of each non-empty match set
    pub show_matches: bool,
    /// Output format
    pub format: ReportFormat,
}

/// Input sizes as read by the loader, before any pattern limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSummary {
    /// Number of dictionary words read
    pub words: usize,
    /// Number of patterns read
    pub patterns: usize,
}

/// Writes match reports to any [`Write`] sink.
pub struct Reporter<W: Write> {
    out: W,
    options: ReportOptions,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W, options: ReportOptions) -> Self {
        Self { out, options }
    }

    /// Write the complete report for a batch.
    pub fn write_report(&mut self, inputs: &InputSummary, result: &BatchResult<'_>) -> io::Result<()> {
        match self.options.format {
            ReportFormat::Text => {
                writeln!(self.out, "Using distance: {}", result.model)?;
                writeln!(self.out, "Read #words = {}", inputs.words)?;
                writeln!(self.out, "Read #patterns = {}", inputs.patterns)?;

                let count = result.pattern_count();
                for set in &result.sets {
                    self.write_set(set, count)?;
                }

                self.write_summary(result)
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut self.out, result)?;
                writeln!(self.out)
            }
        }
    }

    /// Write the block for one pattern (text format).
    pub fn write_set(&mut self, set: &MatchSet<'_>, pattern_count: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "Pattern: {} ({}/{})",
            set.pattern,
            set.position + 1,
            pattern_count
        )?;
        writeln!(self.out, "#matches = {}", set.len())?;

        if self.options.show_matches && !set.is_empty() {
            let entries = set
                .iter()
                .map(|m| format!("({}, {})", m.index, m.word))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(self.out, "Matches: [{}]", entries)?;
        }

        Ok(())
    }

    /// Write the closing summary (text format).
    pub fn write_summary(&mut self, result: &BatchResult<'_>) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "#patterns = {}, k = {}", result.pattern_count(), result.k)?;
        writeln!(self.out, "Total #matches = {}", result.total_matches())?;
        self.out.flush()
    }

    /// Consume the reporter, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render a text report into a string.
pub fn format_report(inputs: &InputSummary, result: &BatchResult<'_>, show_matches: bool) -> String {
    let options = ReportOptions {
        show_matches,
        format: ReportFormat::Text,
    };
    let mut reporter = Reporter::new(Vec::new(), options);
    // Writing into a Vec cannot fail.
    let _ = reporter.write_report(inputs, result);
    String::from_utf8_lossy(&reporter.into_inner()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::distance::DistanceModel;
    use crate::matcher::BatchMatcher;

    #[test]
    fn test_text_report_layout() {
        let dictionary = ["cat", "cot", "dog"];
        let patterns = ["cat", "xyz"];
        let result = BatchMatcher::new(&dictionary, MatchConfig::new(DistanceModel::Hamming, 1))
            .run(&patterns);
        let inputs = InputSummary { words: 3, patterns: 2 };

        let text = format_report(&inputs, &result, true);
        let expected = "\
Using distance: hamming
Read #words = 3
Read #patterns = 2

Pattern: cat (1/2)
#matches = 2
Matches: [(0, cat), (1, cot)]

Pattern: xyz (2/2)
#matches = 0

#patterns = 2, k = 1
Total #matches = 2
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_matches_hidden_by_default() {
        let dictionary = ["ant", "ant"];
        let result = BatchMatcher::new(&dictionary, MatchConfig::new(DistanceModel::Hamming, 0))
            .run(&["ant"]);
        let text = format_report(&InputSummary::default(), &result, false);

        assert!(text.contains("#matches = 2"));
        assert!(!text.contains("Matches:"));
    }

    #[test]
    fn test_empty_batch_report() {
        let dictionary = ["cat"];
        let patterns: [&str; 0] = [];
        let result = BatchMatcher::new(&dictionary, MatchConfig::new(DistanceModel::Levenshtein, 2))
            .run(&patterns);
        let text = format_report(&InputSummary { words: 1, patterns: 0 }, &result, false);

        assert!(text.contains("#patterns = 0, k = 2"));
        assert!(text.trim_end().ends_with("Total #matches = 0"));
    }

    #[test]
    fn test_json_report() {
        let dictionary = ["cat", "cot"];
        let result = BatchMatcher::new(&dictionary, MatchConfig::new(DistanceModel::Hamming, 1))
            .run(&["cat"]);

        let options = ReportOptions {
            show_matches: false,
            format: ReportFormat::Json,
        };
        let mut reporter = Reporter::new(Vec::new(), options);
        reporter
            .write_report(&InputSummary { words: 2, patterns: 1 }, &result)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert_eq!(value["totalMatches"], 2);
        assert_eq!(value["model"], "hamming");
    }
}
