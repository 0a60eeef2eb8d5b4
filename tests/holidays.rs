#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftgen::libs::holidays::{GermanHolidays, HolidayCalendar, Region};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn baden_wuerttemberg_2022() {
        let calendar = GermanHolidays::new("BW").unwrap();
        let dates: Vec<NaiveDate> = calendar.holidays_in_year(2022).into_iter().map(|(d, _)| d).collect();

        assert_eq!(
            dates,
            vec![
                date(2022, 1, 1),
                date(2022, 1, 6),
                date(2022, 4, 15),
                date(2022, 4, 18),
                date(2022, 5, 1),
                date(2022, 5, 26),
                date(2022, 6, 6),
                date(2022, 6, 16),
                date(2022, 10, 3),
                date(2022, 11, 1),
                date(2022, 12, 25),
                date(2022, 12, 26),
            ]
        );
    }

    #[test]
    fn unity_day_is_nationwide() {
        for region in Region::ALL {
            let calendar = GermanHolidays::for_region(region);
            assert!(calendar.is_holiday(date(2022, 10, 3)), "{} misses Unity Day", region);
        }
    }

    #[test]
    fn state_specific_days() {
        let bavaria = GermanHolidays::new("by").unwrap();
        let saxony = GermanHolidays::new("SN").unwrap();
        let berlin = GermanHolidays::new("BE").unwrap();
        let thuringia = GermanHolidays::new("TH").unwrap();

        assert!(bavaria.is_holiday(date(2022, 11, 1)));
        assert!(!saxony.is_holiday(date(2022, 11, 1)));
        assert!(saxony.is_holiday(date(2022, 10, 31)));
        assert!(saxony.is_holiday(date(2022, 11, 16)));
        assert!(!bavaria.is_holiday(date(2022, 11, 16)));
        assert!(berlin.is_holiday(date(2022, 3, 8)));
        assert!(!berlin.is_holiday(date(2018, 3, 8)));
        assert!(thuringia.is_holiday(date(2022, 9, 20)));
    }

    #[test]
    fn berlin_liberation_day_anniversaries() {
        let berlin = GermanHolidays::new("BE").unwrap();
        assert_eq!(berlin.holiday_name(date(2020, 5, 8)), Some("Liberation Day"));
        assert!(berlin.is_holiday(date(2025, 5, 8)));
        assert!(!berlin.is_holiday(date(2021, 5, 8)));
        assert!(!GermanHolidays::new("BB").unwrap().is_holiday(date(2025, 5, 8)));
    }

    #[test]
    fn reformation_anniversary_2017() {
        let bw = GermanHolidays::new("BW").unwrap();
        assert!(bw.is_holiday(date(2017, 10, 31)));
        assert!(!bw.is_holiday(date(2018, 10, 31)));
    }

    #[test]
    fn holiday_names() {
        let calendar = GermanHolidays::new("DE").unwrap();
        assert!(calendar.holiday_name(date(2022, 10, 3)).is_some());
        assert_eq!(calendar.holiday_name(date(2022, 10, 4)), None);
    }

    #[test]
    fn unknown_region_fails() {
        assert!(GermanHolidays::new("XX").is_err());
    }
}
