#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use studman::libs::config::{Config, DEFAULT_DEGREE_PROGRAMS};
    use studman::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static HOME_LOCK: Mutex<()> = Mutex::new(());

    /// Points the home/appdata directory at a fresh temporary directory for the
    /// duration of one test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.degree_programs, DEFAULT_DEGREE_PROGRAMS.to_vec());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(_ctx: &mut ConfigTestContext) {
        let config = Config {
            degree_programs: vec!["Nursing".to_string(), "Architecture".to_string()],
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config.degree_programs, vec!["Nursing", "Architecture"]);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_programs_fall_back_to_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path("config.json").unwrap();
        std::fs::write(path, "{}").unwrap();

        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_config_is_an_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path("config.json").unwrap();
        std::fs::write(path, "{ not json").unwrap();

        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_app_directory(ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path("students.db").unwrap();

        assert!(path.starts_with(ctx._temp_dir.path()));
        assert!(path.parent().unwrap().is_dir());
        assert!(path.parent().unwrap().ends_with("studman"));
    }
}
