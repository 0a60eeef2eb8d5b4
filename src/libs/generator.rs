//! End-to-end report generation.
//!
//! [`generate_report`] wires the pieces together: it loads the absence
//! tables, resolves the holiday region, builds the samplers from the schedule
//! configuration, synthesizes every day of the requested range and writes the
//! table. Any input error aborts the run before a file is written.

use super::config::Config;
use super::error::SheetError;
use super::export::{ExportFormat, Exporter};
use super::holidays::GermanHolidays;
use super::report::DayRecord;
use super::schedule::{BreakSampler, StartTimeSampler};
use super::special_days::{SpecialDayIndex, SpecialDaySource};
use super::synthesizer::DaySynthesizer;
use anyhow::Result;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Everything a single report run needs besides the configuration.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub sources: Vec<SpecialDaySource>,
    /// Region code; falls back to the configured region.
    pub region: Option<String>,
    pub output: Option<PathBuf>,
    pub format: ExportFormat,
    /// Fixed seed for reproducible output; entropy when `None`.
    pub seed: Option<u64>,
    /// Overrides the configured clock-time setting.
    pub clock_times: Option<bool>,
}

impl ReportRequest {
    pub fn new(first_date: NaiveDate, last_date: NaiveDate) -> Self {
        Self {
            first_date,
            last_date,
            sources: Vec::new(),
            region: None,
            output: None,
            format: ExportFormat::Csv,
            seed: None,
            clock_times: None,
        }
    }
}

/// Result of a report run.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub path: PathBuf,
    pub records: Vec<DayRecord>,
    /// Number of absence ranges read from the input tables.
    pub special_days: usize,
}

/// Parses an ISO `YYYY-MM-DD` date argument.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, SheetError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| SheetError::InvalidDate {
        value: value.to_string(),
        location: "expected YYYY-MM-DD".to_string(),
    })
}

/// Synthesizes the requested range without writing anything.
pub fn build_records(request: &ReportRequest, config: &Config) -> Result<Vec<DayRecord>> {
    Ok(synthesize(request, config)?.0)
}

fn synthesize(request: &ReportRequest, config: &Config) -> Result<(Vec<DayRecord>, usize)> {
    let region = request.region.as_deref().unwrap_or(&config.region);
    let calendar = GermanHolidays::new(region)?;
    let index = SpecialDayIndex::load(&request.sources, &config.special_days)?;
    let start_sampler = StartTimeSampler::from_config(&config.schedule)?;
    let break_sampler = BreakSampler::from_config(&config.schedule)?;
    let rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let clock_times = request.clock_times.unwrap_or(config.schedule.clock_times);

    tracing::info!(
        first = %request.first_date,
        last = %request.last_date,
        region = %calendar.region(),
        special_days = index.len(),
        clock_times,
        "synthesizing timesheet"
    );

    let special_days = index.len();
    let mut synthesizer = DaySynthesizer::new(calendar, index, start_sampler, break_sampler, rng)?.with_clock_times(clock_times);
    Ok((synthesizer.synthesize_range(request.first_date, request.last_date)?, special_days))
}

/// Generates the report and writes it; returns the path and the rows.
pub fn generate_report(request: &ReportRequest, config: &Config) -> Result<GeneratedReport> {
    let (records, special_days) = synthesize(request, config)?;
    let clock_times = request.clock_times.unwrap_or(config.schedule.clock_times);
    let path = Exporter::new(request.format, request.output.clone()).export(&records, clock_times)?;

    Ok(GeneratedReport { path, records, special_days })
}
