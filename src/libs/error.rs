//! Typed errors for timesheet input parsing and validation.
//!
//! Everything that can go wrong while reading special-day tables, resolving a
//! region or validating the schedule configuration is represented here. All
//! of these are fatal for a run: the generator never writes a partial report.
//! Command handlers wrap them in `anyhow::Error` and add file context.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while loading inputs or validating settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SheetError {
    /// A date cell or argument could not be parsed.
    #[error("invalid date '{value}' ({location})")]
    InvalidDate { value: String, location: String },

    /// A row the CSV reader could not split into fields.
    #[error("malformed row ({location}): {reason}")]
    MalformedRow { location: String, reason: String },

    /// A required column is missing from a special-day table header.
    #[error("missing column '{column}' in {source_name}")]
    MissingColumn { column: String, source_name: String },

    /// A special-day row whose start lies after its end.
    #[error("range starts after it ends: {start} > {end} ({location})")]
    InvertedRange {
        start: NaiveDate,
        end: NaiveDate,
        location: String,
    },

    /// A category cell that matches no known special-day category.
    #[error("unknown special-day category '{value}' ({location})")]
    UnknownCategory { value: String, location: String },

    /// A half-day cell that is neither the yes nor the no token.
    #[error("invalid half-day flag '{value}' ({location})")]
    InvalidHalfDayFlag { value: String, location: String },

    /// A source without category column and without default category.
    #[error("no category for rows in {0}: add a category column or load it as sick/vacation table")]
    MissingCategory(String),

    /// Region code that no holiday calendar knows about.
    #[error("unknown region code '{0}'")]
    UnknownRegion(String),

    /// First date of the report lies after the last one.
    #[error("first date {first} is after last date {last}")]
    InvalidDateRange { first: NaiveDate, last: NaiveDate },

    /// Schedule settings that cannot produce start times or breaks.
    #[error("invalid schedule: {0}")]
    InvalidSchedule(String),
}

pub type SheetResult<T> = Result<T, SheetError>;
