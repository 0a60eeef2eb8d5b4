use super::formatter::{format_duration, format_hours};
use super::report::{DayRecord, ReportSummary, HEADERS};
use super::schedule::hours_to_duration;
use chrono::NaiveDate;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Prints every report row as a table.
    pub fn records(records: &[DayRecord]) {
        let mut table = Table::new();
        table.set_titles(HEADERS.iter().collect());
        for record in records {
            table.add_row(record.to_row().iter().collect());
        }
        table.printstd();
    }

    /// Prints the totals of a generated report.
    pub fn summary(summary: &ReportSummary) {
        let mut table = Table::new();
        let date = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();

        table.add_row(row!["PERIOD", format!("{} .. {}", date(summary.first_date), date(summary.last_date))]);
        table.add_row(row!["DAYS", summary.days]);
        table.add_row(row!["REGULAR WORK DAYS", summary.regular_days]);
        table.add_row(row!["WEEKEND DAYS", summary.weekend_days]);
        table.add_row(row!["PUBLIC HOLIDAYS", summary.holiday_days]);
        table.add_row(row!["SICK DAYS", format_hours(summary.sick_days)]);
        table.add_row(row!["VACATION DAYS", format_hours(summary.vacation_days)]);
        table.add_row(row!["HOURS WORKED", format_duration(&hours_to_duration(summary.hours_worked))]);
        table.add_row(row!["HOURS BREAK", format_duration(&hours_to_duration(summary.hours_break))]);
        table.printstd();
    }

    /// Prints holidays as a date / weekday / name table.
    pub fn holidays(holidays: &[(NaiveDate, &'static str)]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "WEEKDAY", "HOLIDAY"]);
        for (date, name) in holidays {
            table.add_row(row![date.format("%Y-%m-%d"), date.format("%A"), name]);
        }
        table.printstd();
    }
}
