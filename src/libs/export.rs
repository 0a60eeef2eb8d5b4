//! Writing generated timesheets to disk.
//!
//! The report is a single table, one row per day, in one of three formats:
//!
//! - **CSV**: comma-separated with a header row; clock times as `HH:MM`,
//!   empty cells where a day has no time. Without clock times the four time
//!   columns are left out entirely.
//! - **JSON**: pretty-printed array of row objects, absent times as `null`.
//! - **Excel**: one worksheet with a bold header row, hours as numbers.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftgen::libs::export::{Exporter, ExportFormat};
//! # let records = Vec::new();
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let path = exporter.export(&records, true)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::report::{DayRecord, HEADERS, HEADERS_WITHOUT_TIMES};
use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, Workbook};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default file stem of generated reports.
pub const DEFAULT_FILE_STEM: &str = "work_hours_report";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values, the classic report layout.
    Csv,

    /// Pretty-printed JSON array.
    Json,

    /// Excel workbook.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Writes report rows to one output file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without a path the report goes to
    /// `work_hours_report.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", DEFAULT_FILE_STEM, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Writes `records` and returns the path written to.
    pub fn export(&self, records: &[DayRecord], clock_times: bool) -> Result<PathBuf> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
        }

        match self.format {
            ExportFormat::Csv => self.export_csv(records, clock_times),
            ExportFormat::Json => self.export_json(records),
            ExportFormat::Excel => self.export_excel(records, clock_times),
        }
        .with_context(|| format!("failed to write report to {}", self.output_path.display()))?;

        Ok(self.output_path.clone())
    }

    fn export_csv(&self, records: &[DayRecord], clock_times: bool) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        if clock_times {
            wtr.write_record(HEADERS)?;
            for record in records {
                wtr.write_record(record.to_row())?;
            }
        } else {
            wtr.write_record(HEADERS_WITHOUT_TIMES)?;
            for record in records {
                wtr.write_record(record.to_row_without_times())?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, records: &[DayRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, records: &[DayRecord], clock_times: bool) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        let headers: &[&str] = if clock_times { &HEADERS } else { &HEADERS_WITHOUT_TIMES };
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (idx, record) in records.iter().enumerate() {
            let row = idx as u32 + 1;
            let cells = if clock_times { record.to_row() } else { record.to_row_without_times() };
            for (col, cell) in cells.iter().enumerate() {
                let col = col as u16;
                match col {
                    2 => worksheet.write_number(row, col, record.hours_worked)?,
                    3 => worksheet.write_number(row, col, record.hours_break)?,
                    _ => worksheet.write_string(row, col, cell)?,
                };
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
