//! Day synthesizer: turns dates into timesheet rows.
//!
//! For every date the synthesizer first classifies the day completely
//! (weekend, holiday, sick leave, vacation or regular), then derives the
//! numeric hours, and only then, for days with worked hours, draws a start
//! time and computes end and break times from it.
//!
//! ## Randomness
//!
//! The generator is injected at construction. Production code passes an
//! entropy-seeded `StdRng`; tests pass `StdRng::seed_from_u64` for
//! reproducible output. Days share nothing but the generator, so each row
//! depends only on its date and the draws made for it.
//!
//! ## Usage
//!
//! ```rust
//! use shiftgen::libs::holidays::GermanHolidays;
//! use shiftgen::libs::schedule::{BreakSampler, StartTimeSampler};
//! use shiftgen::libs::special_days::SpecialDayIndex;
//! use shiftgen::libs::synthesizer::DaySynthesizer;
//! use shiftgen::libs::config::ScheduleConfig;
//! use chrono::NaiveDate;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let schedule = ScheduleConfig::default();
//! let mut synthesizer = DaySynthesizer::new(
//!     GermanHolidays::new("BW").unwrap(),
//!     SpecialDayIndex::new(),
//!     StartTimeSampler::from_config(&schedule).unwrap(),
//!     BreakSampler::new(&schedule.break_options).unwrap(),
//!     StdRng::seed_from_u64(7),
//! )
//! .unwrap();
//! let first = NaiveDate::from_ymd_opt(2022, 10, 1).unwrap();
//! let last = NaiveDate::from_ymd_opt(2022, 10, 31).unwrap();
//! let records = synthesizer.synthesize_range(first, last).unwrap();
//! assert_eq!(records.len(), 31);
//! ```

use super::classifier::{classify, DayKind, FULL_DAY_HOURS};
use super::error::{SheetError, SheetResult};
use super::holidays::HolidayCalendar;
use super::report::DayRecord;
use super::schedule::{derive_clock_times, ensure_fits_in_day, BreakSampler, ClockTimes, StartTimeSampler};
use super::special_days::SpecialDayIndex;
use rand::Rng;

use chrono::NaiveDate;

/// Produces one [`DayRecord`] per date.
pub struct DaySynthesizer<C: HolidayCalendar, R: Rng> {
    calendar: C,
    index: SpecialDayIndex,
    start_sampler: StartTimeSampler,
    break_sampler: BreakSampler,
    rng: R,
    clock_times: bool,
}

impl<C: HolidayCalendar, R: Rng> DaySynthesizer<C, R> {
    /// Fails when a full day started at the latest slot would run past
    /// midnight.
    pub fn new(calendar: C, index: SpecialDayIndex, start_sampler: StartTimeSampler, break_sampler: BreakSampler, rng: R) -> SheetResult<Self> {
        ensure_fits_in_day(&start_sampler, &break_sampler, FULL_DAY_HOURS)?;
        Ok(Self {
            calendar,
            index,
            start_sampler,
            break_sampler,
            rng,
            clock_times: true,
        })
    }

    /// Enables or disables clock-time synthesis.
    pub fn with_clock_times(mut self, enabled: bool) -> Self {
        self.clock_times = enabled;
        self
    }

    /// Classifies `date` and derives its hours and clock times.
    pub fn synthesize(&mut self, date: NaiveDate) -> DayRecord {
        let kind = classify(date, &self.calendar, &self.index);
        let hours_worked = kind.hours_worked();
        let hours_break = match kind {
            DayKind::Regular => self.break_sampler.sample(&mut self.rng),
            _ => 0.0,
        };

        let times = if self.clock_times && hours_worked > 0.0 {
            let start = self.start_sampler.sample(&mut self.rng);
            derive_clock_times(start, hours_worked, hours_break)
        } else {
            ClockTimes::default()
        };

        tracing::debug!(%date, ?kind, hours_worked, hours_break, "classified day");

        DayRecord {
            date,
            weekday: date.format("%A").to_string(),
            hours_worked,
            hours_break,
            work_start: times.work_start,
            work_end: times.work_end,
            break_start: times.break_start,
            break_end: times.break_end,
            comment: kind.comment().to_string(),
            kind,
        }
    }

    /// One record per day from `first` to `last` inclusive, ascending.
    pub fn synthesize_range(&mut self, first: NaiveDate, last: NaiveDate) -> SheetResult<Vec<DayRecord>> {
        if first > last {
            return Err(SheetError::InvalidDateRange { first, last });
        }
        Ok(first.iter_days().take_while(|date| *date <= last).map(|date| self.synthesize(date)).collect())
    }
}
