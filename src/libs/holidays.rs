//! Public-holiday calendars for German federal states.
//!
//! The synthesizer only needs a yes/no answer per date, so the calendar is a
//! small trait. [`GermanHolidays`] implements it for the nationwide holidays
//! plus the additions of each federal state, computed per year from fixed
//! dates and the Easter date.
//!
//! ## Region codes
//!
//! - **`DE`**: nationwide holidays only
//! - **`BW`, `BY`, `BE`, `BB`, `HB`, `HH`, `HE`, `MV`, `NI`, `NW`, `RP`,
//!   `SL`, `SN`, `ST`, `SH`, `TH`**: nationwide plus state holidays
//!
//! ## Usage
//!
//! ```rust
//! use shiftgen::libs::holidays::{GermanHolidays, HolidayCalendar};
//! use chrono::NaiveDate;
//!
//! let calendar = GermanHolidays::new("BW").unwrap();
//! let epiphany = NaiveDate::from_ymd_opt(2022, 1, 6).unwrap();
//! assert!(calendar.is_holiday(epiphany));
//! ```

use super::error::{SheetError, SheetResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// Lookup of public holidays by date.
pub trait HolidayCalendar {
    /// Name of the holiday falling on `date`, if any.
    fn holiday_name(&self, date: NaiveDate) -> Option<&'static str>;

    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }
}

/// Calendar without any public holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn holiday_name(&self, _date: NaiveDate) -> Option<&'static str> {
        None
    }
}

/// Jurisdiction whose holidays apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// Nationwide holidays only.
    Germany,
    BadenWuerttemberg,
    Bavaria,
    Berlin,
    Brandenburg,
    Bremen,
    Hamburg,
    Hesse,
    MecklenburgVorpommern,
    LowerSaxony,
    NorthRhineWestphalia,
    RhinelandPalatinate,
    Saarland,
    Saxony,
    SaxonyAnhalt,
    SchleswigHolstein,
    Thuringia,
}

impl Region {
    pub const ALL: [Region; 17] = [
        Region::Germany,
        Region::BadenWuerttemberg,
        Region::Bavaria,
        Region::Berlin,
        Region::Brandenburg,
        Region::Bremen,
        Region::Hamburg,
        Region::Hesse,
        Region::MecklenburgVorpommern,
        Region::LowerSaxony,
        Region::NorthRhineWestphalia,
        Region::RhinelandPalatinate,
        Region::Saarland,
        Region::Saxony,
        Region::SaxonyAnhalt,
        Region::SchleswigHolstein,
        Region::Thuringia,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Germany => "DE",
            Region::BadenWuerttemberg => "BW",
            Region::Bavaria => "BY",
            Region::Berlin => "BE",
            Region::Brandenburg => "BB",
            Region::Bremen => "HB",
            Region::Hamburg => "HH",
            Region::Hesse => "HE",
            Region::MecklenburgVorpommern => "MV",
            Region::LowerSaxony => "NI",
            Region::NorthRhineWestphalia => "NW",
            Region::RhinelandPalatinate => "RP",
            Region::Saarland => "SL",
            Region::Saxony => "SN",
            Region::SaxonyAnhalt => "ST",
            Region::SchleswigHolstein => "SH",
            Region::Thuringia => "TH",
        }
    }

    fn is_one_of(&self, regions: &[Region]) -> bool {
        regions.contains(self)
    }
}

impl FromStr for Region {
    type Err = SheetError;

    fn from_str(s: &str) -> SheetResult<Self> {
        let code = s.trim().to_ascii_uppercase();
        Region::ALL
            .iter()
            .copied()
            .find(|region| region.code() == code)
            .ok_or_else(|| SheetError::UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Holiday calendar for Germany or one of its federal states.
#[derive(Debug, Clone, Copy)]
pub struct GermanHolidays {
    region: Region,
}

impl GermanHolidays {
    /// Creates the calendar for a region code such as `BW` or `DE`.
    pub fn new(region_code: &str) -> SheetResult<Self> {
        Ok(Self {
            region: region_code.parse()?,
        })
    }

    pub fn for_region(region: Region) -> Self {
        Self { region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// All holidays of `year`, sorted by date.
    pub fn holidays_in_year(&self, year: i32) -> Vec<(NaiveDate, &'static str)> {
        use Region::*;

        let region = self.region;
        let easter = easter_sunday(year);
        let mut days: Vec<(NaiveDate, &'static str)> = Vec::new();
        let mut fixed = |month: u32, day: u32, name: &'static str| {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                days.push((date, name));
            }
        };

        fixed(1, 1, "New Year's Day");
        fixed(5, 1, "Labour Day");
        fixed(10, 3, "German Unity Day");
        fixed(12, 25, "Christmas Day");
        fixed(12, 26, "Second Day of Christmas");

        if region.is_one_of(&[BadenWuerttemberg, Bavaria, SaxonyAnhalt]) {
            fixed(1, 6, "Epiphany");
        }
        if (region == Berlin && year >= 2019) || (region == MecklenburgVorpommern && year >= 2023) {
            fixed(3, 8, "International Women's Day");
        }
        // One-off anniversaries of the end of the Second World War.
        if region == Berlin && (year == 2020 || year == 2025) {
            fixed(5, 8, "Liberation Day");
        }
        if region == Saarland {
            fixed(8, 15, "Assumption Day");
        }
        if region == Thuringia && year >= 2019 {
            fixed(9, 20, "World Children's Day");
        }
        let reformation = year == 2017
            || region.is_one_of(&[Brandenburg, MecklenburgVorpommern, Saxony, SaxonyAnhalt, Thuringia])
            || (year >= 2018 && region.is_one_of(&[Bremen, Hamburg, LowerSaxony, SchleswigHolstein]));
        if reformation {
            fixed(10, 31, "Reformation Day");
        }
        if region.is_one_of(&[BadenWuerttemberg, Bavaria, NorthRhineWestphalia, RhinelandPalatinate, Saarland]) {
            fixed(11, 1, "All Saints' Day");
        }

        days.push((easter - Duration::days(2), "Good Friday"));
        days.push((easter + Duration::days(1), "Easter Monday"));
        days.push((easter + Duration::days(39), "Ascension Day"));
        days.push((easter + Duration::days(50), "Whit Monday"));
        if region == Brandenburg {
            days.push((easter, "Easter Sunday"));
            days.push((easter + Duration::days(49), "Whit Sunday"));
        }
        if region.is_one_of(&[BadenWuerttemberg, Bavaria, Hesse, NorthRhineWestphalia, RhinelandPalatinate, Saarland]) {
            days.push((easter + Duration::days(60), "Corpus Christi"));
        }
        if region == Saxony {
            days.push((repentance_day(year), "Repentance and Prayer Day"));
        }

        days.sort_by_key(|(date, _)| *date);
        days
    }
}

impl HolidayCalendar for GermanHolidays {
    fn holiday_name(&self, date: NaiveDate) -> Option<&'static str> {
        self.holidays_in_year(date.year())
            .into_iter()
            .find(|(day, _)| *day == date)
            .map(|(_, name)| name)
    }
}

/// Easter Sunday of `year` (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32).unwrap_or(NaiveDate::MIN)
}

/// Wednesday before November 23rd.
fn repentance_day(year: i32) -> NaiveDate {
    let anchor = NaiveDate::from_ymd_opt(year, 11, 22).unwrap_or(NaiveDate::MIN);
    let back = (anchor.weekday().num_days_from_monday() + 7 - Weekday::Wed.num_days_from_monday()) % 7;
    anchor - Duration::days(back as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn easter_dates() {
        assert_eq!(easter_sunday(2022), date(2022, 4, 17));
        assert_eq!(easter_sunday(2023), date(2023, 4, 9));
        assert_eq!(easter_sunday(2024), date(2024, 3, 31));
        assert_eq!(easter_sunday(2019), date(2019, 4, 21));
    }

    #[test]
    fn repentance_day_is_wednesday_before_23rd() {
        assert_eq!(repentance_day(2022), date(2022, 11, 16));
        assert_eq!(repentance_day(2023), date(2023, 11, 22));
    }

    #[test]
    fn region_codes_parse_case_insensitively() {
        assert_eq!("bw".parse::<Region>().unwrap(), Region::BadenWuerttemberg);
        assert_eq!(" DE ".parse::<Region>().unwrap(), Region::Germany);
        assert!(matches!("XX".parse::<Region>(), Err(SheetError::UnknownRegion(_))));
    }

    #[test]
    fn no_holidays_calendar() {
        assert!(!NoHolidays.is_holiday(date(2022, 12, 25)));
    }
}
