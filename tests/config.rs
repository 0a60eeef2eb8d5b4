#[cfg(test)]
mod tests {
    use shiftgen::libs::config::{BreakOption, Config, SpecialDaysConfig};
    use shiftgen::libs::data_storage::DataStorage;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    // The only test touching the environment, so reads and writes in it
    // cannot race with another test's home directory.
    #[test_context(ConfigTestContext)]
    #[test]
    fn save_and_read_config(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        let mut config = Config::default();
        config.region = "BY".to_string();
        config.schedule.slot_minutes = 30;
        config.schedule.break_options = vec![BreakOption { hours: 1.0, weight: 1.0 }];
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        let path = DataStorage::new().get_path("config.json").unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.region, "BW");
        assert_eq!(config.schedule.earliest_start, "07:00");
        assert_eq!(config.schedule.latest_start, "09:45");
        assert_eq!(config.schedule.slot_minutes, 15);
        assert!(config.schedule.clock_times);
        assert_eq!(config.special_days, SpecialDaysConfig::default());
    }
}
