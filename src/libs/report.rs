//! Report rows and their aggregate summary.

use super::classifier::DayKind;
use super::formatter::{format_clock, format_hours};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One synthesized day. Built once per date and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub weekday: String,
    #[serde(rename = "hours worked")]
    pub hours_worked: f64,
    #[serde(rename = "hours break")]
    pub hours_break: f64,
    #[serde(serialize_with = "serialize_clock")]
    pub work_start: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_clock")]
    pub work_end: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_clock")]
    pub break_start: Option<NaiveTime>,
    #[serde(serialize_with = "serialize_clock")]
    pub break_end: Option<NaiveTime>,
    pub comment: String,
    #[serde(skip)]
    pub kind: DayKind,
}

fn serialize_clock<S: serde::Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => serializer.serialize_str(&format_clock(time)),
        None => serializer.serialize_none(),
    }
}

/// Column headers, in output order.
pub const HEADERS: [&str; 9] = [
    "date",
    "weekday",
    "hours worked",
    "hours break",
    "work_start",
    "work_end",
    "break_start",
    "break_end",
    "comment",
];

/// Column headers when clock times are not part of the report.
pub const HEADERS_WITHOUT_TIMES: [&str; 5] = ["date", "weekday", "hours worked", "hours break", "comment"];

impl DayRecord {
    /// Row cells as strings, in [`HEADERS`] order. Absent times are empty.
    pub fn to_row(&self) -> Vec<String> {
        let clock = |time: &Option<NaiveTime>| time.as_ref().map(format_clock).unwrap_or_default();
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.weekday.clone(),
            format_hours(self.hours_worked),
            format_hours(self.hours_break),
            clock(&self.work_start),
            clock(&self.work_end),
            clock(&self.break_start),
            clock(&self.break_end),
            self.comment.clone(),
        ]
    }

    /// Row cells in [`HEADERS_WITHOUT_TIMES`] order.
    pub fn to_row_without_times(&self) -> Vec<String> {
        vec![
            self.date.format("%Y-%m-%d").to_string(),
            self.weekday.clone(),
            format_hours(self.hours_worked),
            format_hours(self.hours_break),
            self.comment.clone(),
        ]
    }
}

/// Totals over a generated report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportSummary {
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub days: usize,
    pub regular_days: usize,
    pub weekend_days: usize,
    pub holiday_days: usize,
    /// Sick days; half days count as 0.5.
    pub sick_days: f64,
    /// Vacation days; half days count as 0.5.
    pub vacation_days: f64,
    pub hours_worked: f64,
    pub hours_break: f64,
}

impl ReportSummary {
    pub fn from_records(records: &[DayRecord]) -> Self {
        let mut summary = ReportSummary {
            first_date: records.first().map(|r| r.date),
            last_date: records.last().map(|r| r.date),
            days: records.len(),
            ..Default::default()
        };

        for record in records {
            summary.hours_worked += record.hours_worked;
            summary.hours_break += record.hours_break;
            let share = |half_day: bool| if half_day { 0.5 } else { 1.0 };
            match record.kind {
                DayKind::Regular => summary.regular_days += 1,
                DayKind::Weekend => summary.weekend_days += 1,
                DayKind::PublicHoliday => summary.holiday_days += 1,
                DayKind::Sick { half_day } => summary.sick_days += share(half_day),
                DayKind::Vacation { half_day } => summary.vacation_days += share(half_day),
            }
        }

        summary
    }
}
