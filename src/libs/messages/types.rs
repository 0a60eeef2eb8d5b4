/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`, so call sites
/// only pick a variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    GeneratingReport(String, String, String), // first date, last date, region
    SpecialDaysLoaded(usize),                 // range count
    ReportWritten(String),                    // path
    ReportSummaryHeader,
    ReportPreviewHeader,

    // === HOLIDAY MESSAGES ===
    HolidaysHeader(String, i32), // region, year
    NoHolidaysFound(String, i32),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigNotSaved,
    ConfigModuleRegion,
    ConfigModuleSchedule,
    ConfigModuleSpecialDays,

    // === ERROR MESSAGES ===
    InvalidDateArgument(String),
    FailedToLoadConfig(String),
    CommandFailed(String),

    // === PROMPTS ===
    PromptRegion,
    PromptEarliestStart,
    PromptLatestStart,
    PromptSlotMinutes,
    PromptClockTimes,
    PromptHalfDayYes,
    PromptHalfDayNo,
    PromptSaveConfig,
}
