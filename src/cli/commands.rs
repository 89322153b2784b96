//! CLI command implementations

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::RunConfig;
use crate::corpus::WordList;
use crate::distance::{distance, DistanceModel};
use crate::matcher::BatchMatcher;
use crate::report::{InputSummary, ReportFormat, ReportOptions, Reporter};
use crate::verify::{self, Verification};

use super::args::Commands;

/// Execute a CLI command
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Match {
            run,
            config,
            format,
            output,
            parallel,
        } => cmd_match(config.as_deref(), &run.into(), format, output, parallel),
        Commands::Distance {
            a,
            b,
            distance_model,
        } => cmd_distance(&a, &b, distance_model).map(|_| ()),
        Commands::Check {
            report,
            expected,
            line_from_end,
        } => cmd_check(&report, expected, line_from_end).map(|_| ()),
    }
}

/// Match command
fn cmd_match(
    config_path: Option<&Path>,
    overrides: &RunConfig,
    format: ReportFormat,
    output: Option<PathBuf>,
    parallel: bool,
) -> Result<()> {
    let file_config = match config_path {
        Some(path) => RunConfig::load_from(path)?,
        None => RunConfig::default(),
    };
    let run = file_config.merge(overrides);

    let mut sink: Box<dyn Write> = match &output {
        Some(path) => Box::new(BufWriter::new(
            std::fs::File::create(path)
                .with_context(|| format!("Failed to create report file: {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let total = run_match(&run, format, parallel, &mut sink)?;
    sink.flush().context("Failed to flush report")?;
    drop(sink);

    if let Some(path) = output {
        eprintln!(
            "{}  Report written to {} ({} match(es))",
            "→".cyan(),
            path.display().to_string().yellow(),
            total.to_string().green()
        );
    }

    Ok(())
}

/// Load both word lists, run the matcher and write the report.
///
/// Returns the total match count.
pub fn run_match(
    run: &RunConfig,
    format: ReportFormat,
    parallel: bool,
    out: &mut dyn Write,
) -> Result<usize> {
    let Some(dict_path) = run.dict.as_deref() else {
        bail!("No dictionary file given (pass it as an argument or set \"dict\" in the config file)");
    };
    let Some(patterns_path) = run.patterns.as_deref() else {
        bail!("No pattern file given (pass it as an argument or set \"patterns\" in the config file)");
    };

    let config = run.match_config();

    let dictionary = WordList::load(dict_path, &run.dictionary_options())?;
    let patterns = WordList::load(patterns_path, &run.pattern_options())?;

    let matcher = BatchMatcher::new(dictionary.as_slice(), config);
    let result = if parallel {
        run_batch_parallel(&matcher, patterns.as_slice())
    } else {
        matcher.run(patterns.as_slice())
    };

    let options = ReportOptions {
        show_matches: run.show_matches.unwrap_or(false),
        format,
    };
    let inputs = InputSummary {
        words: dictionary.len(),
        patterns: patterns.len(),
    };
    Reporter::new(out, options)
        .write_report(&inputs, &result)
        .context("Failed to write report")?;

    Ok(result.total_matches())
}

#[cfg(feature = "parallel")]
fn run_batch_parallel<'a>(
    matcher: &BatchMatcher<'a, String>,
    patterns: &'a [String],
) -> crate::matcher::BatchResult<'a> {
    matcher.run_parallel(patterns)
}

#[cfg(not(feature = "parallel"))]
fn run_batch_parallel<'a>(
    matcher: &BatchMatcher<'a, String>,
    patterns: &'a [String],
) -> crate::matcher::BatchResult<'a> {
    tracing::warn!("built without the `parallel` feature, matching sequentially");
    matcher.run(patterns)
}

/// Distance command
///
/// Prints and returns the distance between `a` and `b`.
pub fn cmd_distance(a: &str, b: &str, model: DistanceModel) -> Result<usize> {
    let d = distance(a, b, model).with_context(|| format!("Cannot compare {:?} and {:?}", a, b))?;
    println!("{}", d);
    Ok(d)
}

/// Check command
///
/// A mismatch is reported but is not an error.
pub fn cmd_check(report: &Path, expected: usize, line_from_end: usize) -> Result<Verification> {
    let text = std::fs::read_to_string(report)
        .with_context(|| format!("Failed to read report: {}", report.display()))?;

    let outcome = verify::check(&text, expected, line_from_end)
        .with_context(|| format!("Failed to parse report: {}", report.display()))?;

    match outcome {
        Verification::Match { .. } => println!("{}", outcome.to_string().green()),
        Verification::Mismatch { .. } => println!("{}", outcome.to_string().red().bold()),
    }

    Ok(outcome)
}
