//! Configuration management for shiftgen.
//!
//! Settings that rarely change between runs live in a JSON file in the
//! platform-specific application data directory. Every section has defaults,
//! so a missing file (or a partially filled one) still yields a complete
//! configuration.
//!
//! ## Sections
//!
//! - **`region`**: holiday region code (`BW`, `BY`, ..., or `DE`)
//! - **`schedule`**: start-time window, slot length, break options and whether
//!   clock times are synthesized at all
//! - **`special_days`**: layout of the absence tables (column names, delimiter
//!   and the half-day yes/no tokens)
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\gurkenlab\shiftgen\config.json`
//! - **macOS**: `~/Library/Application Support/gurkenlab/shiftgen/config.json`
//! - **Linux**: `~/.local/share/gurkenlab/shiftgen/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use shiftgen::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.region = "BY".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::error::{SheetError, SheetResult};
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use chrono::NaiveTime;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// One possible break length on a regular work day and its draw weight.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BreakOption {
    /// Break length in hours.
    pub hours: f64,
    /// Relative weight; weights need not sum to one.
    pub weight: f64,
}

/// How the break length of a regular work day is drawn.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BreakMode {
    /// Use the configured weights.
    #[default]
    Weighted,
    /// Every configured length is equally likely; weights are ignored.
    Uniform,
}

/// Start-time window and break settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Earliest possible work start, `HH:MM`.
    pub earliest_start: String,

    /// Latest possible work start, `HH:MM`, inclusive.
    pub latest_start: String,

    /// Distance between candidate start slots in minutes.
    pub slot_minutes: u32,

    /// Whether start/end/break clock times are synthesized.
    ///
    /// When disabled the report only carries hours and the time columns are
    /// left out of CSV output.
    pub clock_times: bool,

    /// Break lengths for regular work days with their weights.
    pub break_options: Vec<BreakOption>,

    pub break_mode: BreakMode,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            earliest_start: "07:00".to_string(),
            latest_start: "09:45".to_string(),
            slot_minutes: 15,
            clock_times: true,
            break_options: vec![
                BreakOption { hours: 0.5, weight: 0.7 },
                BreakOption { hours: 0.75, weight: 0.2 },
                BreakOption { hours: 1.0, weight: 0.1 },
            ],
            break_mode: BreakMode::Weighted,
        }
    }
}

impl ScheduleConfig {
    pub fn earliest(&self) -> SheetResult<NaiveTime> {
        parse_clock(&self.earliest_start)
    }

    pub fn latest(&self) -> SheetResult<NaiveTime> {
        parse_clock(&self.latest_start)
    }
}

/// Layout of the absence tables.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SpecialDaysConfig {
    /// Header of the range start column.
    pub start_column: String,
    /// Header of the range end column.
    pub end_column: String,
    /// Header of the half-day flag column.
    pub half_day_column: String,
    /// Header of the optional category column.
    pub category_column: String,
    /// Field separator.
    pub delimiter: char,
    /// Token meaning "half day".
    pub half_day_yes: String,
    /// Token meaning "full day". Empty cells mean the same.
    pub half_day_no: String,
}

impl Default for SpecialDaysConfig {
    fn default() -> Self {
        SpecialDaysConfig {
            start_column: "Von".to_string(),
            end_column: "Bis".to_string(),
            half_day_column: "Halber Tag".to_string(),
            category_column: "Art".to_string(),
            delimiter: ';',
            half_day_yes: "ja".to_string(),
            half_day_no: "nein".to_string(),
        }
    }
}

impl SpecialDaysConfig {
    /// Delimiter as a CSV byte; non-ASCII delimiters fall back to `;`.
    pub fn delimiter_byte(&self) -> u8 {
        if self.delimiter.is_ascii() {
            self.delimiter as u8
        } else {
            b';'
        }
    }

    /// Interprets a half-day cell, `None` if it is neither token.
    pub fn parse_half_day(&self, value: &str) -> Option<bool> {
        let value = value.trim();
        if value.eq_ignore_ascii_case(self.half_day_yes.trim()) {
            Some(true)
        } else if value.is_empty() || value.eq_ignore_ascii_case(self.half_day_no.trim()) {
            Some(false)
        } else {
            None
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Holiday region code.
    #[serde(default = "default_region")]
    pub region: String,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub special_days: SpecialDaysConfig,
}

fn default_region() -> String {
    "BW".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            region: default_region(),
            schedule: ScheduleConfig::default(),
            special_days: SpecialDaysConfig::default(),
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::FailedToLoadConfig(e.to_string())))?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, starting from the stored configuration.
    ///
    /// The returned configuration is not saved; the caller decides.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let theme = ColorfulTheme::default();

        msg_print!(Message::ConfigModuleRegion);
        config.region = Input::with_theme(&theme)
            .with_prompt(Message::PromptRegion.to_string())
            .default(config.region.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                input.parse::<crate::libs::holidays::Region>().map(|_| ()).map_err(|e| e.to_string())
            })
            .interact_text()?
            .to_ascii_uppercase();

        msg_print!(Message::ConfigModuleSchedule);
        let schedule = config.schedule.clone();
        config.schedule.earliest_start = Input::with_theme(&theme)
            .with_prompt(Message::PromptEarliestStart.to_string())
            .default(schedule.earliest_start)
            .validate_with(|input: &String| -> Result<(), String> { parse_clock(input).map(|_| ()).map_err(|e| e.to_string()) })
            .interact_text()?;
        config.schedule.latest_start = Input::with_theme(&theme)
            .with_prompt(Message::PromptLatestStart.to_string())
            .default(schedule.latest_start)
            .validate_with(|input: &String| -> Result<(), String> { parse_clock(input).map(|_| ()).map_err(|e| e.to_string()) })
            .interact_text()?;
        config.schedule.slot_minutes = Input::with_theme(&theme)
            .with_prompt(Message::PromptSlotMinutes.to_string())
            .default(schedule.slot_minutes)
            .interact_text()?;
        config.schedule.clock_times = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptClockTimes.to_string())
            .default(schedule.clock_times)
            .interact()?;

        msg_print!(Message::ConfigModuleSpecialDays);
        let special_days = config.special_days.clone();
        config.special_days.half_day_yes = Input::with_theme(&theme)
            .with_prompt(Message::PromptHalfDayYes.to_string())
            .default(special_days.half_day_yes)
            .interact_text()?;
        config.special_days.half_day_no = Input::with_theme(&theme)
            .with_prompt(Message::PromptHalfDayNo.to_string())
            .default(special_days.half_day_no)
            .interact_text()?;

        Ok(config)
    }
}

/// Parses an `HH:MM` clock time.
pub fn parse_clock(value: &str) -> SheetResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| SheetError::InvalidSchedule(format!("'{}' is not an HH:MM time", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_day_tokens_are_case_insensitive() {
        let config = SpecialDaysConfig::default();
        assert_eq!(config.parse_half_day("ja"), Some(true));
        assert_eq!(config.parse_half_day(" JA "), Some(true));
        assert_eq!(config.parse_half_day("Nein"), Some(false));
        assert_eq!(config.parse_half_day(""), Some(false));
        assert_eq!(config.parse_half_day("maybe"), None);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "region": "BY", "schedule": { "slot_minutes": 30 } }"#).unwrap();
        assert_eq!(config.region, "BY");
        assert_eq!(config.schedule.slot_minutes, 30);
        assert_eq!(config.schedule.earliest_start, "07:00");
        assert_eq!(config.special_days, SpecialDaysConfig::default());
        assert_eq!(config.schedule.break_mode, BreakMode::Weighted);
    }

    #[test]
    fn break_mode_reads_lowercase() {
        let config: Config = serde_json::from_str(r#"{ "schedule": { "break_mode": "uniform" } }"#).unwrap();
        assert_eq!(config.schedule.break_mode, BreakMode::Uniform);
        assert_eq!(config.schedule.break_options, ScheduleConfig::default().break_options);
    }

    #[test]
    fn parse_clock_rejects_garbage() {
        assert_eq!(parse_clock("07:30").unwrap(), NaiveTime::from_hms_opt(7, 30, 0).unwrap());
        assert!(parse_clock("7.30").is_err());
    }
}
