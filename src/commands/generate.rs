//! Timesheet generation command.
//!
//! Synthesizes one row per day between two dates and writes the table to a
//! file. Absence tables are passed per kind: `--sick` and `--vacation` files
//! need no category column, `--special` files must carry one.
//!
//! ```bash
//! # Q4 2022 for Baden-Wuerttemberg, reproducible
//! shiftgen generate 2022-10-01 2022-12-31 \
//!     --sick inputs/2022_sick_days.csv \
//!     --vacation inputs/2022_vacation_days.csv \
//!     --region BW --seed 7 --output outputs/work_hours_report.csv
//! ```

use crate::{
    libs::{
        config::Config,
        export::ExportFormat,
        generator::{generate_report, parse_iso_date, ReportRequest},
        messages::Message,
        report::ReportSummary,
        special_days::SpecialDaySource,
        view::View,
    },
    msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Command-line arguments for the generate command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// First day of the report (YYYY-MM-DD)
    first_date: String,

    /// Last day of the report, inclusive (YYYY-MM-DD)
    last_date: String,

    /// Sick-day table; rows without category count as illness
    #[arg(long = "sick", value_name = "FILE")]
    sick: Vec<PathBuf>,

    /// Vacation table; rows without category count as vacation
    #[arg(long = "vacation", value_name = "FILE")]
    vacation: Vec<PathBuf>,

    /// Absence table with its own category column
    #[arg(long = "special", value_name = "FILE")]
    special: Vec<PathBuf>,

    /// Holiday region code, overrides the configured one (e.g. BW, BY, DE)
    #[arg(short, long)]
    region: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Output file; defaults to work_hours_report.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for reproducible start times and breaks
    #[arg(long)]
    seed: Option<u64>,

    /// Only hours, no start/end/break clock times
    #[arg(long = "no-times")]
    no_times: bool,

    /// Print every generated day as a table
    #[arg(long)]
    preview: bool,

    /// Skip the summary table
    #[arg(short, long)]
    quiet: bool,
}

impl GenerateArgs {
    /// Absence sources in load order: sick, vacation, then categorized tables.
    fn sources(&self) -> Vec<SpecialDaySource> {
        self.sick
            .iter()
            .map(SpecialDaySource::sick)
            .chain(self.vacation.iter().map(SpecialDaySource::vacation))
            .chain(self.special.iter().map(SpecialDaySource::categorized))
            .collect()
    }

    fn request(&self) -> Result<ReportRequest> {
        let parse = |value: &String| parse_iso_date(value).map_err(|_| msg_error_anyhow!(Message::InvalidDateArgument(value.clone())));
        let first_date = parse(&self.first_date)?;
        let last_date = parse(&self.last_date)?;

        let mut request = ReportRequest::new(first_date, last_date);
        request.sources = self.sources();
        request.region = self.region.clone();
        request.output = self.output.clone();
        request.format = self.format;
        request.seed = self.seed;
        request.clock_times = if self.no_times { Some(false) } else { None };
        Ok(request)
    }
}

/// Executes the generate command.
///
/// Input errors (unreadable tables, bad dates, inverted ranges, unknown
/// regions) abort before anything is written.
pub fn cmd(args: GenerateArgs) -> Result<()> {
    let config = Config::read()?;
    let request = args.request()?;
    let region = request.region.clone().unwrap_or_else(|| config.region.clone());

    msg_info!(Message::GeneratingReport(
        request.first_date.to_string(),
        request.last_date.to_string(),
        region.to_ascii_uppercase()
    ));

    let report = generate_report(&request, &config)?;
    msg_info!(Message::SpecialDaysLoaded(report.special_days));

    if args.preview {
        msg_print!(Message::ReportPreviewHeader, true);
        View::records(&report.records);
    }
    if !args.quiet {
        msg_print!(Message::ReportSummaryHeader, true);
        View::summary(&ReportSummary::from_records(&report.records));
    }

    msg_success!(Message::ReportWritten(report.path.display().to_string()));
    Ok(())
}
