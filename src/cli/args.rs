//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::distance::DistanceModel;
use crate::report::ReportFormat;
use crate::verify::DEFAULT_LINE_FROM_END;

/// Command-line arguments
#[derive(Parser)]
#[command(name = "approxmatch")]
#[command(about = "Brute-force approximate dictionary matching (Hamming / Levenshtein)")]
#[command(version)]
pub struct Cli {
    /// Log level filter (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Match a pattern file against a dictionary file
    Match {
        #[command(flatten)]
        run: RunArgs,

        /// JSON configuration file (command-line values take precedence)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Report format
        #[arg(short = 'f', long, default_value = "text")]
        format: ReportFormat,

        /// Write the report to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,

        /// Match patterns on all cores (needs the `parallel` feature)
        #[arg(long)]
        parallel: bool,
    },

    /// Compute the distance between two strings
    Distance {
        /// First string
        a: String,

        /// Second string
        b: String,

        /// Distance model: ham (Hamming) or lev (Levenshtein)
        #[arg(short = 'D', long = "distance", default_value = "lev")]
        distance_model: DistanceModel,
    },

    /// Check the total match count of a report
    Check {
        /// Report file
        report: PathBuf,

        /// Expected total match count
        expected: usize,

        /// Non-empty line, counted from the end, holding the total
        #[arg(short = 'l', long, default_value_t = DEFAULT_LINE_FROM_END)]
        line_from_end: usize,
    },
}

/// Matching options of the `match` subcommand.
///
/// Each value overrides the same setting from the configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Dictionary file
    pub dict: Option<PathBuf>,

    /// Pattern file
    pub patterns: Option<PathBuf>,

    /// Distance model: ham (Hamming) or lev (Levenshtein)
    #[arg(short = 'D', long = "distance")]
    pub distance_model: Option<DistanceModel>,

    /// Maximum distance (inclusive)
    #[arg(short = 'k', long = "threshold")]
    pub k: Option<usize>,

    /// Process only the first N patterns (non-positive values are ignored)
    #[arg(short = 'p', long, allow_negative_numbers = true)]
    pub patterns_limit: Option<i64>,

    /// Read only the first N dictionary words
    #[arg(short = 'w', long)]
    pub words_limit: Option<usize>,

    /// Read only patterns with exactly this many characters
    #[arg(long)]
    pub pattern_size: Option<usize>,

    /// Input separator characters (default: any whitespace)
    #[arg(short = 's', long)]
    pub separator: Option<String>,

    /// Print the contents of each match set
    #[arg(short = 'm', long)]
    pub show_matches: bool,
}

impl From<RunArgs> for RunConfig {
    fn from(args: RunArgs) -> Self {
        RunConfig {
            dict: args.dict,
            patterns: args.patterns,
            distance_model: args.distance_model,
            k: args.k,
            pattern_limit: args.patterns_limit,
            word_limit: args.words_limit,
            pattern_size: args.pattern_size,
            separator: args.separator,
            // A bare flag can only switch this on
            show_matches: args.show_matches.then_some(true),
        }
    }
}
