//! Day classification.
//!
//! A date is classified by an ordered list of rules, first match wins:
//!
//! 1. Saturday or Sunday → [`DayKind::Weekend`]
//! 2. public holiday in the configured region → [`DayKind::PublicHoliday`]
//! 3. each entry of [`LEAVE_PRIORITY`] in order, looked up in the
//!    special-day index → [`DayKind::Sick`] or [`DayKind::Vacation`]
//! 4. otherwise → [`DayKind::Regular`]
//!
//! Classification says nothing about break lengths or clock times; those are
//! derived afterwards by the synthesizer.

use super::holidays::HolidayCalendar;
use super::special_days::{SpecialDayCategory, SpecialDayIndex};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// Hours of a regular work day.
pub const FULL_DAY_HOURS: f64 = 8.0;

/// Hours worked on a half sick or vacation day.
pub const HALF_DAY_HOURS: f64 = 4.0;

/// Kind of leave a group of special-day categories maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveKind {
    Sick,
    Vacation,
}

/// Leave lookups in priority order; sick leave beats vacation.
pub const LEAVE_PRIORITY: [(LeaveKind, &[SpecialDayCategory]); 2] = [
    (LeaveKind::Sick, &[SpecialDayCategory::Illness, SpecialDayCategory::ChildIll]),
    (
        LeaveKind::Vacation,
        &[
            SpecialDayCategory::Vacation,
            SpecialDayCategory::CompanyHoliday,
            SpecialDayCategory::FurtherTraining,
        ],
    ),
];

/// Outcome of classifying one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DayKind {
    Weekend,
    PublicHoliday,
    Sick { half_day: bool },
    Vacation { half_day: bool },
    Regular,
}

impl DayKind {
    fn leave(kind: LeaveKind, half_day: bool) -> Self {
        match kind {
            LeaveKind::Sick => DayKind::Sick { half_day },
            LeaveKind::Vacation => DayKind::Vacation { half_day },
        }
    }

    /// Hours worked on a day of this kind.
    pub fn hours_worked(&self) -> f64 {
        match self {
            DayKind::Regular => FULL_DAY_HOURS,
            DayKind::Sick { half_day: true } | DayKind::Vacation { half_day: true } => HALF_DAY_HOURS,
            _ => 0.0,
        }
    }

    /// Report comment for the day.
    pub fn comment(&self) -> &'static str {
        match self {
            DayKind::Weekend => "weekend",
            DayKind::PublicHoliday => "public holiday",
            DayKind::Sick { half_day: false } => "sick leave",
            DayKind::Sick { half_day: true } => "sick leave (half day)",
            DayKind::Vacation { half_day: false } => "vacation",
            DayKind::Vacation { half_day: true } => "vacation (half day)",
            DayKind::Regular => "regular work day",
        }
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Classifies `date`, evaluating rules top to bottom.
pub fn classify<C: HolidayCalendar + ?Sized>(date: NaiveDate, calendar: &C, index: &SpecialDayIndex) -> DayKind {
    if is_weekend(date) {
        return DayKind::Weekend;
    }
    if calendar.is_holiday(date) {
        return DayKind::PublicHoliday;
    }
    LEAVE_PRIORITY
        .iter()
        .find_map(|(kind, categories)| index.lookup(date, categories).map(|half_day| DayKind::leave(*kind, half_day)))
        .unwrap_or(DayKind::Regular)
}
