//! Randomized but bounded clock times for synthesized work days.
//!
//! Two samplers feed the synthesizer:
//!
//! - [`StartTimeSampler`] picks a work start from evenly spaced candidate
//!   slots. Slots in the middle of the window are the most likely and the
//!   ones at its edges the least, following a discretized bell shape.
//! - [`BreakSampler`] picks the break length of a regular work day from a
//!   small weighted set (30 minutes most of the time, sometimes 45 or 60).
//!
//! [`derive_clock_times`] turns a start time and the day's hours into the end
//! time and the midday break window.
//!
//! Both samplers draw from a caller-supplied [`rand::Rng`], so a seeded
//! generator gives reproducible reports.

use super::config::{BreakMode, BreakOption, ScheduleConfig};
use super::error::{SheetError, SheetResult};
use chrono::{Duration, NaiveTime};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Hours worked before the midday break starts.
pub const HOURS_BEFORE_BREAK: f64 = 4.0;

/// Upper bound for a single break length.
pub const MAX_BREAK_HOURS: f64 = 24.0;

/// Converts fractional hours into a whole-minute duration.
pub fn hours_to_duration(hours: f64) -> Duration {
    Duration::minutes((hours * 60.0).round() as i64)
}

/// Bell-shaped weights for `count` slots, normalized to sum to one.
///
/// For slot `i` with midpoint `m = count / 2` the raw weight is
/// `max_j (j - m)^2 - (i - m)^2`. Returns an empty vector when every raw
/// weight is zero (a single slot), which callers treat as a uniform draw.
pub fn bell_weights(count: usize) -> Vec<f64> {
    let mid = count as f64 / 2.0;
    let squared: Vec<f64> = (0..count).map(|i| (i as f64 - mid).powi(2)).collect();
    let max = squared.iter().cloned().fold(0.0_f64, f64::max);
    let raw: Vec<f64> = squared.iter().map(|sq| max - sq).collect();
    let total: f64 = raw.iter().sum();

    if total <= 0.0 {
        return Vec::new();
    }
    raw.into_iter().map(|w| w / total).collect()
}

/// Weighted sampler over quarter-hour (or other) start slots.
#[derive(Debug, Clone)]
pub struct StartTimeSampler {
    slots: Vec<NaiveTime>,
    distribution: Option<WeightedIndex<f64>>,
}

impl StartTimeSampler {
    /// Slots every `slot_minutes` from `earliest` up to and including `latest`.
    pub fn new(earliest: NaiveTime, latest: NaiveTime, slot_minutes: u32) -> SheetResult<Self> {
        if slot_minutes == 0 {
            return Err(SheetError::InvalidSchedule("slot length must be at least one minute".to_string()));
        }
        if earliest > latest {
            return Err(SheetError::InvalidSchedule(format!(
                "earliest start {} is after latest start {}",
                earliest.format("%H:%M"),
                latest.format("%H:%M")
            )));
        }

        let step = Duration::minutes(slot_minutes as i64);
        let mut slots = Vec::new();
        let mut slot = earliest;
        while slot <= latest {
            slots.push(slot);
            let (next, wrapped) = slot.overflowing_add_signed(step);
            if wrapped != 0 {
                break;
            }
            slot = next;
        }

        let weights = bell_weights(slots.len());
        let distribution = if weights.is_empty() {
            None
        } else {
            Some(WeightedIndex::new(&weights).map_err(|e| SheetError::InvalidSchedule(e.to_string()))?)
        };

        Ok(Self { slots, distribution })
    }

    pub fn from_config(config: &ScheduleConfig) -> SheetResult<Self> {
        Self::new(config.earliest()?, config.latest()?, config.slot_minutes)
    }

    pub fn slots(&self) -> &[NaiveTime] {
        &self.slots
    }

    pub fn latest(&self) -> NaiveTime {
        // `new` always yields at least the earliest slot.
        self.slots[self.slots.len() - 1]
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveTime {
        let idx = match &self.distribution {
            Some(distribution) => distribution.sample(rng),
            None => rng.gen_range(0..self.slots.len()),
        };
        self.slots[idx]
    }
}

/// Weighted sampler over break lengths for regular work days.
#[derive(Debug, Clone)]
pub struct BreakSampler {
    hours: Vec<f64>,
    distribution: WeightedIndex<f64>,
}

impl BreakSampler {
    pub fn new(options: &[BreakOption]) -> SheetResult<Self> {
        if options.is_empty() {
            return Err(SheetError::InvalidSchedule("at least one break option is required".to_string()));
        }
        if let Some(bad) = options.iter().find(|option| !(0.0..=MAX_BREAK_HOURS).contains(&option.hours)) {
            return Err(SheetError::InvalidSchedule(format!("invalid break length {}", bad.hours)));
        }

        let distribution = WeightedIndex::new(options.iter().map(|option| option.weight))
            .map_err(|e| SheetError::InvalidSchedule(format!("invalid break weights: {}", e)))?;

        Ok(Self {
            hours: options.iter().map(|option| option.hours).collect(),
            distribution,
        })
    }

    /// Sampler for the configured break options and mode.
    pub fn from_config(config: &ScheduleConfig) -> SheetResult<Self> {
        match config.break_mode {
            BreakMode::Weighted => Self::new(&config.break_options),
            BreakMode::Uniform => Self::uniform(&config.break_options.iter().map(|option| option.hours).collect::<Vec<_>>()),
        }
    }

    /// Equal chance for each of `hours`.
    pub fn uniform(hours: &[f64]) -> SheetResult<Self> {
        let options: Vec<BreakOption> = hours.iter().map(|&hours| BreakOption { hours, weight: 1.0 }).collect();
        Self::new(&options)
    }

    pub fn options(&self) -> &[f64] {
        &self.hours
    }

    pub fn longest(&self) -> f64 {
        self.hours.iter().cloned().fold(0.0, f64::max)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.hours[self.distribution.sample(rng)]
    }
}

/// Checks that a day of `hours_worked` plus the longest break, started at
/// the latest slot, still ends before midnight.
pub fn ensure_fits_in_day(starts: &StartTimeSampler, breaks: &BreakSampler, hours_worked: f64) -> SheetResult<()> {
    let latest = starts.latest();
    let (_, wrapped) = latest.overflowing_add_signed(hours_to_duration(hours_worked + breaks.longest()));
    if wrapped != 0 {
        return Err(SheetError::InvalidSchedule(format!(
            "a day starting at {} with {} hours of work and a {} hour break ends after midnight",
            latest.format("%H:%M"),
            hours_worked,
            breaks.longest()
        )));
    }
    Ok(())
}

/// Clock times of one day; all `None` on days without work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockTimes {
    pub work_start: Option<NaiveTime>,
    pub work_end: Option<NaiveTime>,
    pub break_start: Option<NaiveTime>,
    pub break_end: Option<NaiveTime>,
}

/// Derives end and break window from a start time.
///
/// The break window exists only on days with more than four hours of work
/// and begins four hours after the start.
pub fn derive_clock_times(start: NaiveTime, hours_worked: f64, hours_break: f64) -> ClockTimes {
    if hours_worked <= 0.0 {
        return ClockTimes::default();
    }

    let work_end = start + hours_to_duration(hours_worked + hours_break);
    let (break_start, break_end) = if hours_worked > HOURS_BEFORE_BREAK {
        let break_start = start + hours_to_duration(HOURS_BEFORE_BREAK);
        (Some(break_start), Some(break_start + hours_to_duration(hours_break)))
    } else {
        (None, None)
    };

    ClockTimes {
        work_start: Some(start),
        work_end: Some(work_end),
        break_start,
        break_end,
    }
}
