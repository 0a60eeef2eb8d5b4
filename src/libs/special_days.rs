//! Special-day index: sick leave, vacation and related absence ranges.
//!
//! Absence tables are exported from HR or spreadsheet tools as
//! semicolon-separated files in a Latin-1 family encoding, one inclusive
//! date range per row:
//!
//! ```text
//! Von;Bis;Halber Tag;Art
//! 10.10.2022;12.10.2022;nein;Krankheit
//! 14.10.2022;14.10.2022;ja;Urlaub
//! ```
//!
//! The category column is optional. Tables without it take the category of
//! the source they were loaded as (a sick-day table yields `Illness`, a
//! vacation table yields `Vacation`).
//!
//! ## Lookup semantics
//!
//! [`SpecialDayIndex::lookup`] scans ranges in load order and returns the
//! half-day flag of the first range containing the date whose category is in
//! the requested set. Overlapping ranges are not merged or ranked; which
//! category wins is decided by the caller's query order (see
//! [`crate::libs::classifier::LEAVE_PRIORITY`]).
//!
//! Rows with `start > end` are rejected at load time instead of silently
//! never matching.

use super::config::SpecialDaysConfig;
use super::error::{SheetError, SheetResult};
use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Day-first date layouts accepted in absence tables, tried in order.
const DATE_FORMATS: [&str; 4] = ["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d"];

/// Two-digit year layouts, tried after the four-digit ones.
const SHORT_YEAR_FORMATS: [&str; 2] = ["%d.%m.%y", "%d/%m/%y"];

/// Kind of absence a range describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialDayCategory {
    Illness,
    ChildIll,
    Vacation,
    CompanyHoliday,
    FurtherTraining,
}

impl SpecialDayCategory {
    pub const ALL: [SpecialDayCategory; 5] = [
        SpecialDayCategory::Illness,
        SpecialDayCategory::ChildIll,
        SpecialDayCategory::Vacation,
        SpecialDayCategory::CompanyHoliday,
        SpecialDayCategory::FurtherTraining,
    ];

    /// Tokens accepted in the category column, lowercase.
    fn tokens(&self) -> &'static [&'static str] {
        match self {
            SpecialDayCategory::Illness => &["illness", "sick", "krankheit", "krank"],
            SpecialDayCategory::ChildIll => &["childill", "child ill", "kind krank", "kinderkrankheit"],
            SpecialDayCategory::Vacation => &["vacation", "urlaub"],
            SpecialDayCategory::CompanyHoliday => &["companyholiday", "company holiday", "betriebsurlaub"],
            SpecialDayCategory::FurtherTraining => &["furthertraining", "further training", "fortbildung"],
        }
    }
}

impl FromStr for SpecialDayCategory {
    type Err = SheetError;

    fn from_str(s: &str) -> SheetResult<Self> {
        let token = s.trim().to_lowercase();
        SpecialDayCategory::ALL
            .iter()
            .copied()
            .find(|category| category.tokens().contains(&token.as_str()))
            .ok_or_else(|| SheetError::UnknownCategory {
                value: s.trim().to_string(),
                location: "expected illness, child ill, vacation, company holiday or further training".to_string(),
            })
    }
}

impl fmt::Display for SpecialDayCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// One inclusive absence range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialDayRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub category: SpecialDayCategory,
    pub half_day: bool,
}

impl SpecialDayRange {
    /// Builds a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate, category: SpecialDayCategory, half_day: bool) -> SheetResult<Self> {
        if start > end {
            return Err(SheetError::InvertedRange {
                start,
                end,
                location: "range definition".to_string(),
            });
        }
        Ok(Self {
            start,
            end,
            category,
            half_day,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// A table file plus the category its rows default to.
#[derive(Debug, Clone)]
pub struct SpecialDaySource {
    pub path: PathBuf,
    pub default_category: Option<SpecialDayCategory>,
}

impl SpecialDaySource {
    pub fn sick(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_category: Some(SpecialDayCategory::Illness),
        }
    }

    pub fn vacation(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_category: Some(SpecialDayCategory::Vacation),
        }
    }

    /// A table that must carry its own category column.
    pub fn categorized(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            default_category: None,
        }
    }
}

/// Ordered collection of absence ranges.
#[derive(Debug, Clone, Default)]
pub struct SpecialDayIndex {
    ranges: Vec<SpecialDayRange>,
}

impl SpecialDayIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranges(ranges: Vec<SpecialDayRange>) -> Self {
        Self { ranges }
    }

    /// Loads all sources in order; ranges keep file order, then row order.
    pub fn load(sources: &[SpecialDaySource], config: &SpecialDaysConfig) -> Result<Self> {
        let mut index = Self::new();
        for source in sources {
            let ranges = read_source(source, config).with_context(|| format!("failed to load special days from {}", source.path.display()))?;
            tracing::debug!(path = %source.path.display(), rows = ranges.len(), "loaded special-day table");
            index.ranges.extend(ranges);
        }
        Ok(index)
    }

    pub fn ranges(&self) -> &[SpecialDayRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Half-day flag of the first range containing `date` whose category is
    /// one of `categories`, or `None` when nothing matches.
    pub fn lookup(&self, date: NaiveDate, categories: &[SpecialDayCategory]) -> Option<bool> {
        self.ranges
            .iter()
            .find(|range| range.contains(date) && categories.contains(&range.category))
            .map(|range| range.half_day)
    }
}

/// Decodes table bytes: UTF-8 when valid, Windows-1252 otherwise.
pub fn decode_table(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    if let Ok(utf8) = std::str::from_utf8(bytes) {
        return utf8.to_string();
    }
    encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
}

/// Parses a day-first date cell.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    // `%Y` happily reads "22" as year 22, so short years need their own pass.
    DATE_FORMATS
        .iter()
        .filter_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .find(|date| date.year() >= 1000)
        .or_else(|| SHORT_YEAR_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(value, format).ok()))
}

fn read_source(source: &SpecialDaySource, config: &SpecialDaysConfig) -> Result<Vec<SpecialDayRange>> {
    let bytes = fs::read(&source.path)?;
    let text = decode_table(&bytes);
    Ok(parse_table(&text, &source.path, source.default_category, config)?)
}

/// Parses decoded table text into ranges.
pub fn parse_table(
    text: &str,
    origin: &Path,
    default_category: Option<SpecialDayCategory>,
    config: &SpecialDaysConfig,
) -> SheetResult<Vec<SpecialDayRange>> {
    let source_name = origin.display().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter_byte())
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().cloned().map_err(|e| SheetError::MalformedRow {
        location: format!("{} header", source_name),
        reason: e.to_string(),
    })?;
    let column = |name: &str| headers.iter().position(|header| header.eq_ignore_ascii_case(name));
    let required = |name: &str| {
        column(name).ok_or_else(|| SheetError::MissingColumn {
            column: name.to_string(),
            source_name: source_name.clone(),
        })
    };

    let start_idx = required(&config.start_column)?;
    let end_idx = required(&config.end_column)?;
    let half_idx = required(&config.half_day_column)?;
    let category_idx = column(&config.category_column);

    if category_idx.is_none() && default_category.is_none() {
        return Err(SheetError::MissingCategory(source_name));
    }

    let mut ranges = Vec::new();
    for (row, record) in reader.records().enumerate() {
        // Header is line 1.
        let location = format!("{} line {}", source_name, row + 2);
        let record = record.map_err(|e| SheetError::MalformedRow {
            location: location.clone(),
            reason: e.to_string(),
        })?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let cell = |idx: usize| record.get(idx).unwrap_or("").trim();
        let date = |idx: usize| {
            parse_day_first(cell(idx)).ok_or_else(|| SheetError::InvalidDate {
                value: cell(idx).to_string(),
                location: location.clone(),
            })
        };

        let start = date(start_idx)?;
        let end = date(end_idx)?;
        let half_day = config.parse_half_day(cell(half_idx)).ok_or_else(|| SheetError::InvalidHalfDayFlag {
            value: cell(half_idx).to_string(),
            location: location.clone(),
        })?;
        let category = match category_idx.map(cell).filter(|value| !value.is_empty()) {
            Some(value) => value.parse::<SpecialDayCategory>().map_err(|_| SheetError::UnknownCategory {
                value: value.to_string(),
                location: location.clone(),
            })?,
            None => default_category.ok_or_else(|| SheetError::MissingCategory(location.clone()))?,
        };

        if start > end {
            return Err(SheetError::InvertedRange { start, end, location });
        }
        ranges.push(SpecialDayRange {
            start,
            end,
            category,
            half_day,
        });
    }

    Ok(ranges)
}
