//! Dataset analysis sessions.
//!
//! The thin shell over the core entry points: stream storms, print
//! reports, fold tallies, and keep user-input failures (missing file,
//! unknown storm ID) as plain messages rather than process exits.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use hurdat2_parser::{Hurdat2Error, StormReader};
use track_analysis::{
    classify, metrics, AccuracyAggregator, AccuracySummary, Report, YearSummary,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    /// Anything other than an explicit `json` falls back to the table.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Table
        }
    }
}

/// JSON payload for a whole-dataset analysis.
#[derive(Serialize)]
struct AnalysisOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    storms: Option<Vec<Report>>,
    accuracy: AccuracySummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    years: Option<Vec<YearSummary>>,
}

/// Analyze a dataset file end to end.
///
/// A missing file is a user-facing message, not a failure of the process.
pub fn analyze_file(path: &Path, details: bool, by_year: bool, output: OutputFormat) -> Result<()> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("Cannot find the file requested. Please check the filename.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };
    run_analysis(BufReader::new(file), details, by_year, output)
}

/// Stream every storm once: report, classify, fold.
pub fn run_analysis<R: BufRead>(
    input: R,
    details: bool,
    by_year: bool,
    output: OutputFormat,
) -> Result<()> {
    let mut reader = StormReader::new(input);
    let mut aggregator = AccuracyAggregator::new();
    // Reports are only held onto for the JSON payload; the table mode
    // prints them as the stream advances.
    let mut collected: Vec<Report> = Vec::new();

    if details && output == OutputFormat::Table {
        println!("Each Storm:");
    }

    while let Some(storm) = reader.next_storm()? {
        if details {
            if let Some(report) = metrics::report(&storm) {
                match output {
                    OutputFormat::Table => println!("{report}"),
                    OutputFormat::Json => collected.push(report),
                }
            }
        }
        aggregator.record(&storm, classify(&storm));
    }

    let summary = aggregator.summary();
    info!(
        storms = summary.storms,
        total = summary.total,
        "dataset analysis complete"
    );

    match output {
        OutputFormat::Table => {
            print_accuracy(&summary);
            if by_year {
                print_year_summaries(&aggregator.year_summaries());
            }
        }
        OutputFormat::Json => {
            let payload = AnalysisOutput {
                storms: details.then_some(collected),
                accuracy: summary,
                years: by_year.then(|| aggregator.year_summaries()),
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    Ok(())
}

/// Locate one storm by identifier and print its report.
pub fn report_single(path: &Path, storm_id: &str, output: OutputFormat) -> Result<()> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            println!("Cannot find the file requested. Please check the filename.");
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    let mut reader = StormReader::new(BufReader::new(file));
    match reader.find_storm(storm_id) {
        Ok(storm) => match metrics::report(&storm) {
            Some(report) => match output {
                OutputFormat::Table => println!("{report}"),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            },
            None => println!("Storm {storm_id} has no records."),
        },
        Err(Hurdat2Error::StormNotFound(id)) => {
            println!("Cannot find a storm with ID {id}. Please check if the storm ID is correct.");
        }
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// The prompt-driven flow: dataset pass first, then an optional lookup.
pub fn interactive() -> Result<()> {
    let details =
        crate::prompt::yes_no("Would you like to review the details of every storm (Y=Yes, N=No)? ")?;
    let by_year =
        crate::prompt::yes_no("Would you like to review the summary by year (Y=Yes, N=No)? ")?;
    let filename = crate::prompt::line(
        "Please input the filename of a HURDAT2 dataset (e.g. hurdat2-1851-2016-041117.txt): ",
    )?;

    println!("Loading... Please wait...");
    analyze_file(Path::new(&filename), details, by_year, OutputFormat::Table)?;

    if crate::prompt::yes_no("Would you like to check a specific storm (Y=Yes, N=No)? ")? {
        let filename = crate::prompt::line(
            "Please input the filename of a HURDAT2 dataset (e.g. hurdat2-1851-2016-041117.txt): ",
        )?;
        let storm_id = crate::prompt::line("Please input a valid storm ID (e.g. AL012015): ")?;
        report_single(Path::new(&filename), &storm_id, OutputFormat::Table)?;
    }

    Ok(())
}

fn print_accuracy(summary: &AccuracySummary) {
    match summary.hit_rate {
        Some(rate) => println!("{:.2}% cases support the hypothesis.", rate * 100.0),
        None => println!("Hypothesis accuracy unavailable: no classifiable observations."),
    }
}

fn print_year_summaries(years: &[YearSummary]) {
    println!("Season summary:");
    for year in years {
        let rate = year
            .hit_rate
            .map_or_else(|| "n/a".to_string(), |r| format!("{:.2}%", r * 100.0));
        println!(
            "  {}: {} storms, {}/{} correct ({})",
            year.year, year.storms, year.correct, year.total, rate
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_run_analysis_over_canned_dataset() {
        let input = Cursor::new(test_utils::THREE_STORM_DATASET);
        run_analysis(input, true, true, OutputFormat::Table).unwrap();
    }

    #[test]
    fn test_run_analysis_json_mode() {
        let input = Cursor::new(test_utils::MODERN_STORM_WITH_RADII);
        run_analysis(input, true, false, OutputFormat::Json).unwrap();
    }

    #[test]
    fn test_missing_file_is_a_message_not_an_error() {
        let missing = Path::new("/definitely/not/here/hurdat2.txt");
        analyze_file(missing, false, false, OutputFormat::Table).unwrap();
        report_single(missing, "AL012015", OutputFormat::Table).unwrap();
    }

    #[test]
    fn test_lookup_against_real_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(test_utils::THREE_STORM_DATASET.as_bytes())
            .unwrap();

        report_single(file.path(), "AL011852", OutputFormat::Table).unwrap();
        // Unknown IDs are user-facing messages, not errors.
        report_single(file.path(), "EP999999", OutputFormat::Table).unwrap();
    }
}
