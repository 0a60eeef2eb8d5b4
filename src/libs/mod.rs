//! Core library modules.
//!
//! - **Inputs**: absence tables ([`special_days`]) and holiday calendars
//!   ([`holidays`])
//! - **Generation**: day classification, time sampling and row synthesis
//! - **Output**: report rows, export formats and terminal tables
//! - **Infrastructure**: configuration, storage paths, errors, messages

pub mod classifier;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod formatter;
pub mod generator;
pub mod holidays;
pub mod messages;
pub mod report;
pub mod schedule;
pub mod special_days;
pub mod synthesizer;
pub mod view;
