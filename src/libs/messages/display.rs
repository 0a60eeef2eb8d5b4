//! Display implementation for application messages.
//!
//! All message text is defined here, in one match, so wording stays
//! consistent and parameters are interpolated in a single place.
//!
//! ```rust
//! use shiftgen::libs::messages::Message;
//!
//! let message = Message::ReportWritten("work_hours_report.csv".to_string());
//! assert_eq!(message.to_string(), "Report written to work_hours_report.csv");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::GeneratingReport(first, last, region) => {
                format!("Generating timesheet from {} to {} for region {}", first, last, region)
            }
            Message::SpecialDaysLoaded(count) => format!("Loaded {} special-day range(s)", count),
            Message::ReportWritten(path) => format!("Report written to {}", path),
            Message::ReportSummaryHeader => "Summary".to_string(),
            Message::ReportPreviewHeader => "Generated days".to_string(),

            // === HOLIDAY MESSAGES ===
            Message::HolidaysHeader(region, year) => format!("Public holidays {} in {}", year, region),
            Message::NoHolidaysFound(region, year) => format!("No public holidays found for {} in {}", region, year),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigNotSaved => "Configuration left unchanged".to_string(),
            Message::ConfigModuleRegion => "Holiday region".to_string(),
            Message::ConfigModuleSchedule => "Schedule".to_string(),
            Message::ConfigModuleSpecialDays => "Special-day tables".to_string(),

            // === ERROR MESSAGES ===
            Message::InvalidDateArgument(value) => format!("Invalid date '{}', expected YYYY-MM-DD", value),
            Message::FailedToLoadConfig(error) => format!("Failed to load configuration: {}", error),
            Message::CommandFailed(error) => error.clone(),

            // === PROMPTS ===
            Message::PromptRegion => "Region code (e.g. BW, BY, DE)".to_string(),
            Message::PromptEarliestStart => "Earliest work start (HH:MM)".to_string(),
            Message::PromptLatestStart => "Latest work start (HH:MM)".to_string(),
            Message::PromptSlotMinutes => "Start time granularity (minutes)".to_string(),
            Message::PromptClockTimes => "Synthesize start, end and break times?".to_string(),
            Message::PromptHalfDayYes => "Half-day flag meaning 'yes'".to_string(),
            Message::PromptHalfDayNo => "Half-day flag meaning 'no'".to_string(),
            Message::PromptSaveConfig => "Save configuration?".to_string(),
        };

        write!(f, "{}", text)
    }
}
