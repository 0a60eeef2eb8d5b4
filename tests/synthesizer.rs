#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use shiftgen::libs::config::{BreakOption, ScheduleConfig};
    use shiftgen::libs::holidays::GermanHolidays;
    use shiftgen::libs::report::DayRecord;
    use shiftgen::libs::schedule::{hours_to_duration, BreakSampler, StartTimeSampler};
    use shiftgen::libs::error::SheetError;
    use shiftgen::libs::special_days::{SpecialDayCategory, SpecialDayIndex, SpecialDayRange};
    use shiftgen::libs::synthesizer::DaySynthesizer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn synthesizer(ranges: Vec<SpecialDayRange>, seed: u64) -> DaySynthesizer<GermanHolidays, StdRng> {
        let schedule = ScheduleConfig::default();
        DaySynthesizer::new(
            GermanHolidays::new("BW").unwrap(),
            SpecialDayIndex::from_ranges(ranges),
            StartTimeSampler::from_config(&schedule).unwrap(),
            BreakSampler::new(&schedule.break_options).unwrap(),
            StdRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    fn range(start: NaiveDate, end: NaiveDate, category: SpecialDayCategory, half_day: bool) -> SpecialDayRange {
        SpecialDayRange::new(start, end, category, half_day).unwrap()
    }

    fn quarter_2022(seed: u64) -> Vec<DayRecord> {
        synthesizer(Vec::new(), seed).synthesize_range(date(2022, 10, 1), date(2022, 12, 31)).unwrap()
    }

    #[test]
    fn weekend_days_have_no_hours() {
        let records = synthesizer(Vec::new(), 1).synthesize_range(date(2022, 10, 1), date(2022, 10, 2)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].weekday, "Saturday");
        assert_eq!(records[1].weekday, "Sunday");
        for record in &records {
            assert_eq!(record.hours_worked, 0.0);
            assert_eq!(record.hours_break, 0.0);
            assert_eq!(record.comment, "weekend");
            assert!(record.work_start.is_none() && record.work_end.is_none());
            assert!(record.break_start.is_none() && record.break_end.is_none());
        }
    }

    #[test]
    fn public_holiday_on_weekday() {
        let record = synthesizer(Vec::new(), 1).synthesize(date(2022, 10, 3));

        assert_eq!(record.hours_worked, 0.0);
        assert_eq!(record.comment, "public holiday");
        assert!(record.work_start.is_none());
    }

    #[test]
    fn full_vacation_day() {
        let day = date(2022, 10, 4);
        let record = synthesizer(vec![range(day, day, SpecialDayCategory::Vacation, false)], 1).synthesize(day);

        assert_eq!(record.hours_worked, 0.0);
        assert_eq!(record.hours_break, 0.0);
        assert_eq!(record.comment, "vacation");
        assert!(record.work_start.is_none());
    }

    #[test]
    fn half_day_sick_leave() {
        let day = date(2022, 10, 4);
        let record = synthesizer(vec![range(day, day, SpecialDayCategory::Illness, true)], 1).synthesize(day);

        assert_eq!(record.hours_worked, 4.0);
        assert_eq!(record.hours_break, 0.0);
        assert_eq!(record.comment, "sick leave (half day)");
        let start = record.work_start.unwrap();
        assert_eq!(record.work_end.unwrap() - start, Duration::hours(4));
        assert!(record.break_start.is_none() && record.break_end.is_none());
    }

    #[test]
    fn sick_leave_wins_over_vacation() {
        let day = date(2022, 10, 5);
        let ranges = vec![
            range(date(2022, 10, 4), date(2022, 10, 7), SpecialDayCategory::Vacation, false),
            range(day, day, SpecialDayCategory::ChildIll, false),
        ];
        let record = synthesizer(ranges, 1).synthesize(day);

        assert_eq!(record.comment, "sick leave");
    }

    #[test]
    fn holiday_wins_over_vacation() {
        let day = date(2022, 10, 3);
        let record = synthesizer(vec![range(day, day, SpecialDayCategory::Vacation, false)], 1).synthesize(day);

        assert_eq!(record.comment, "public holiday");
    }

    #[test]
    fn rows_cover_range_in_order() {
        let records = quarter_2022(3);

        assert_eq!(records.len(), 92);
        assert_eq!(records.first().unwrap().date, date(2022, 10, 1));
        assert_eq!(records.last().unwrap().date, date(2022, 12, 31));
        assert!(records.windows(2).all(|pair| pair[1].date == pair[0].date + Duration::days(1)));
    }

    #[test]
    fn clock_times_are_consistent() {
        let allowed_breaks = [0.5, 0.75, 1.0];
        let sampler = StartTimeSampler::from_config(&ScheduleConfig::default()).unwrap();

        for record in quarter_2022(11) {
            if record.hours_worked == 0.0 {
                assert!(record.work_start.is_none(), "{} has a start time", record.date);
                continue;
            }

            let start = record.work_start.unwrap();
            assert!(sampler.slots().contains(&start));
            assert_eq!(record.work_end.unwrap() - start, hours_to_duration(record.hours_worked + record.hours_break));

            if record.hours_worked > 4.0 {
                assert!(allowed_breaks.contains(&record.hours_break));
                let break_start = record.break_start.unwrap();
                assert_eq!(break_start - start, Duration::hours(4));
                assert_eq!(record.break_end.unwrap() - break_start, hours_to_duration(record.hours_break));
            } else {
                assert!(record.break_start.is_none());
            }
        }
    }

    #[test]
    fn start_times_peak_in_the_middle() {
        let sampler = StartTimeSampler::from_config(&ScheduleConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let mut counts: HashMap<NaiveTime, usize> = HashMap::new();

        for _ in 0..5000 {
            *counts.entry(sampler.sample(&mut rng)).or_default() += 1;
        }

        assert_eq!(sampler.slots().len(), 12);
        assert!(counts.keys().all(|t| *t >= time(7, 0) && *t <= time(9, 45)));
        let middle = counts.get(&time(8, 30)).copied().unwrap_or_default();
        let edge = counts.get(&time(7, 15)).copied().unwrap_or_default();
        assert!(middle > edge * 2, "middle {} vs edge {}", middle, edge);
    }

    #[test]
    fn break_lengths_follow_weights() {
        let sampler = BreakSampler::new(&ScheduleConfig::default().break_options).unwrap();
        let mut rng = StdRng::seed_from_u64(17);
        let draws = 20_000;
        let mut counts = [0usize; 3];

        for _ in 0..draws {
            match sampler.sample(&mut rng) {
                h if h == 0.5 => counts[0] += 1,
                h if h == 0.75 => counts[1] += 1,
                h if h == 1.0 => counts[2] += 1,
                other => panic!("unexpected break length {}", other),
            }
        }

        for (count, expected) in counts.iter().zip([0.7, 0.2, 0.1]) {
            let share = *count as f64 / draws as f64;
            assert!((share - expected).abs() < 0.02, "share {} expected {}", share, expected);
        }
    }

    #[test]
    fn window_running_past_midnight_is_rejected() {
        let schedule = ScheduleConfig {
            earliest_start: "20:00".to_string(),
            latest_start: "20:00".to_string(),
            ..ScheduleConfig::default()
        };
        let result = DaySynthesizer::new(
            GermanHolidays::new("BW").unwrap(),
            SpecialDayIndex::new(),
            StartTimeSampler::from_config(&schedule).unwrap(),
            BreakSampler::new(&schedule.break_options).unwrap(),
            StdRng::seed_from_u64(1),
        );

        assert!(matches!(result, Err(SheetError::InvalidSchedule(_))));
    }

    #[test]
    fn oversized_break_is_rejected() {
        let result = BreakSampler::new(&[BreakOption { hours: 1e18, weight: 1.0 }]);
        assert!(matches!(result, Err(SheetError::InvalidSchedule(_))));
    }

    #[test]
    fn seed_makes_output_reproducible() {
        assert_eq!(quarter_2022(5), quarter_2022(5));
    }
}
