#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use studman::commands::{add, delete, filter, list, report_store_error, search, update};
    use studman::db::students::{StoreError, Students};
    use studman::libs::config::DEFAULT_DEGREE_PROGRAMS;
    use studman::libs::student::{SortKey, StudentPatch};
    use studman::libs::validation::Validator;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static HOME_LOCK: Mutex<()> = Mutex::new(());

    struct CommandTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for CommandTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CommandTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    fn add_args(id: &str, name: &str, birthday: &str) -> add::AddArgs {
        add::AddArgs {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            birthday: Some(birthday.to_string()),
            address: Some("Davao City".to_string()),
            gender: Some("Male".to_string()),
            degree: Some("Information Technology".to_string()),
            year: Some("1".to_string()),
        }
    }

    fn stored_ids() -> Vec<u32> {
        let mut students = Students::open_default().unwrap();
        students.list_all().unwrap().iter().map(|student| student.id).collect()
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_stores_valid_student(_ctx: &mut CommandTestContext) {
        add::cmd(add_args(" 111111 ", "Jose Rizal", "6/19/1961")).unwrap();

        let mut students = Students::open_default().unwrap();
        let stored = students.find_by_id(111111).unwrap().unwrap();
        assert_eq!(stored.full_name, "Jose Rizal");
        assert_eq!(stored.birthday_text(), "06/19/1961");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_rejects_invalid_input_without_writing(_ctx: &mut CommandTestContext) {
        add::cmd(add_args("11111", "Jose Rizal", "06/19/1961")).unwrap();
        add::cmd(add_args("111112", "Jose Rizal 2", "06/19/1961")).unwrap();
        add::cmd(add_args("111113", "Jose Rizal", "19/06/1961")).unwrap();

        assert!(stored_ids().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_add_command_duplicate_is_reported(_ctx: &mut CommandTestContext) {
        add::cmd(add_args("222222", "Andres Bonifacio", "11/30/1963")).unwrap();
        add::cmd(add_args("222222", "Another Person", "01/01/1990")).unwrap();

        let mut students = Students::open_default().unwrap();
        assert_eq!(students.list_all().unwrap().len(), 1);
        assert_eq!(students.find_by_id(222222).unwrap().unwrap().full_name, "Andres Bonifacio");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_update_command(_ctx: &mut CommandTestContext) {
        add::cmd(add_args("333333", "Emilio Aguinaldo", "03/22/1969")).unwrap();

        update::cmd(update::UpdateArgs {
            id: "333333".to_string(),
            name: None,
            birthday: None,
            address: Some("Kawit, Cavite".to_string()),
            gender: None,
            degree: None,
            year: Some("3".to_string()),
        })
        .unwrap();

        let mut students = Students::open_default().unwrap();
        let stored = students.find_by_id(333333).unwrap().unwrap();
        assert_eq!(stored.address, "Kawit, Cavite");
        assert_eq!(stored.year_level, 3);
        assert_eq!(stored.full_name, "Emilio Aguinaldo");
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_delete_command_with_confirmation_flag(_ctx: &mut CommandTestContext) {
        add::cmd(add_args("444444", "Apolinario Mabini", "07/23/1964")).unwrap();
        add::cmd(add_args("555555", "Marcelo del Pilar", "08/30/1950")).unwrap();

        delete::cmd(delete::DeleteArgs {
            id: "444444".to_string(),
            yes: true,
        })
        .unwrap();
        delete::cmd(delete::DeleteArgs {
            id: "999999".to_string(),
            yes: true,
        })
        .unwrap();

        assert_eq!(stored_ids(), vec![555555]);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_read_only_commands(_ctx: &mut CommandTestContext) {
        add::cmd(add_args("666666", "Gregorio del Pilar", "11/14/1975")).unwrap();

        list::cmd().unwrap();
        search::cmd(search::SearchArgs { id: "666666".to_string() }).unwrap();
        search::cmd(search::SearchArgs { id: "000000".to_string() }).unwrap();
        search::cmd(search::SearchArgs { id: "abc".to_string() }).unwrap();
        filter::cmd(filter::FilterArgs {
            year: "1".to_string(),
            degree: "All".to_string(),
            sort: Some(SortKey::FullName),
        })
        .unwrap();
        filter::cmd(filter::FilterArgs {
            year: "nine".to_string(),
            degree: "All".to_string(),
            sort: None,
        })
        .unwrap();

        assert_eq!(stored_ids(), vec![666666]);
    }

    #[test_context(CommandTestContext)]
    #[test]
    fn test_update_missing_student_reported_before_empty_patch(_ctx: &mut CommandTestContext) {
        add::cmd(add_args("777777", "Melchora Aquino", "01/06/1950")).unwrap();

        let validator = Validator::new(DEFAULT_DEGREE_PROGRAMS.iter().map(|p| p.to_string()).collect(), 2024);
        let mut students = Students::open_default().unwrap();
        let empty = StudentPatch::default();

        assert!(matches!(
            update::apply(&mut students, 999999, &empty, &validator),
            Err(StoreError::NotFound(999999))
        ));
        assert!(update::apply(&mut students, 777777, &empty, &validator).unwrap().is_none());

        let patch = StudentPatch {
            year_level: Some("2".to_string()),
            ..StudentPatch::default()
        };
        let updated = update::apply(&mut students, 777777, &patch, &validator).unwrap().unwrap();
        assert_eq!(updated.year_level, 2);

        update::cmd(update::UpdateArgs {
            id: "999999".to_string(),
            name: None,
            birthday: None,
            address: None,
            gender: None,
            degree: None,
            year: None,
        })
        .unwrap();
        assert_eq!(stored_ids(), vec![777777]);
    }

    #[test]
    fn test_report_store_error_returns_only_database_failures() {
        assert!(report_store_error(StoreError::DuplicateKey(111111)).is_ok());
        assert!(report_store_error(StoreError::NotFound(111111)).is_ok());

        let error = report_store_error(StoreError::StoreFailure(rusqlite::Error::QueryReturnedNoRows)).unwrap_err();
        assert!(error.to_string().starts_with("Database operation failed"));
    }
}
