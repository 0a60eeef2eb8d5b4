//! Lists the public holidays of a region for one year.

use crate::{
    libs::{
        config::Config,
        holidays::GermanHolidays,
        messages::Message,
        view::View,
    },
    msg_print, msg_warning,
};
use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Args;

#[derive(Debug, Args)]
pub struct HolidaysArgs {
    /// Year to list; defaults to the current year
    #[arg(short, long)]
    year: Option<i32>,

    /// Holiday region code; defaults to the configured one
    #[arg(short, long)]
    region: Option<String>,
}

pub fn cmd(args: HolidaysArgs) -> Result<()> {
    let config = Config::read()?;
    let region = args.region.unwrap_or(config.region);
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let calendar = GermanHolidays::new(&region)?;
    let holidays = calendar.holidays_in_year(year);

    if holidays.is_empty() {
        msg_warning!(Message::NoHolidaysFound(calendar.region().to_string(), year));
        return Ok(());
    }

    msg_print!(Message::HolidaysHeader(calendar.region().to_string(), year), true);
    View::holidays(&holidays);
    Ok(())
}
