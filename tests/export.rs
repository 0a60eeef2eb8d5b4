#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use shiftgen::libs::classifier::DayKind;
    use shiftgen::libs::export::{ExportFormat, Exporter};
    use shiftgen::libs::report::DayRecord;
    use std::fs;

    fn records() -> Vec<DayRecord> {
        let time = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0);
        vec![
            DayRecord {
                date: NaiveDate::from_ymd_opt(2022, 10, 2).unwrap(),
                weekday: "Sunday".to_string(),
                hours_worked: 0.0,
                hours_break: 0.0,
                work_start: None,
                work_end: None,
                break_start: None,
                break_end: None,
                comment: "weekend".to_string(),
                kind: DayKind::Weekend,
            },
            DayRecord {
                date: NaiveDate::from_ymd_opt(2022, 10, 4).unwrap(),
                weekday: "Tuesday".to_string(),
                hours_worked: 8.0,
                hours_break: 0.75,
                work_start: time(8, 15),
                work_end: time(17, 0),
                break_start: time(12, 15),
                break_end: time(13, 0),
                comment: "regular work day".to_string(),
                kind: DayKind::Regular,
            },
        ]
    }

    #[test]
    fn csv_with_clock_times() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("report.csv");

        let written = Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&records(), true).unwrap();

        assert_eq!(written, path);
        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "date,weekday,hours worked,hours break,work_start,work_end,break_start,break_end,comment");
        assert_eq!(lines[1], "2022-10-02,Sunday,0,0,,,,,weekend");
        assert_eq!(lines[2], "2022-10-04,Tuesday,8,0.75,08:15,17:00,12:15,13:00,regular work day");
    }

    #[test]
    fn csv_without_clock_times() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        Exporter::new(ExportFormat::Csv, Some(path.clone())).export(&records(), false).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "date,weekday,hours worked,hours break,comment");
        assert_eq!(lines[2], "2022-10-04,Tuesday,8,0.75,regular work day");
    }

    #[test]
    fn json_export() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        Exporter::new(ExportFormat::Json, Some(path.clone())).export(&records(), true).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["comment"], "weekend");
        assert!(rows[0]["work_start"].is_null());
        assert_eq!(rows[1]["hours worked"], 8.0);
        assert_eq!(rows[1]["work_start"], "08:15");
    }

    #[test]
    fn excel_export_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.xlsx");

        Exporter::new(ExportFormat::Excel, Some(path.clone())).export(&records(), true).unwrap();

        assert!(fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn default_output_name() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        assert_eq!(exporter.output_path().to_str(), Some("work_hours_report.json"));
    }
}
