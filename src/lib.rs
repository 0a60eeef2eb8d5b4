//! # Shiftgen - synthetic work-hours timesheets
//!
//! Generates a plausible daily timesheet for a date range: one row per day
//! with hours worked, break length, start/end and break clock times and a
//! comment naming the kind of day.
//!
//! ## Features
//!
//! - **Day classification**: weekends, German public holidays per state,
//!   sick leave and vacation read from semicolon-separated tables
//! - **Randomized schedules**: bell-shaped start times on a quarter-hour
//!   grid and weighted break lengths, reproducible with a seed
//! - **Export**: CSV, JSON and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftgen::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
