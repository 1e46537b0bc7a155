#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use studman::db::db::Db;
    use studman::db::students::Students;
    use studman::libs::student::{Gender, SortKey, Student, StudentFilter};
    use test_context::{test_context, TestContext};

    struct QueryTestContext {
        students: Students,
    }

    impl TestContext for QueryTestContext {
        fn setup() -> Self {
            let mut students = Students::new(Db::open_in_memory().unwrap()).unwrap();
            let rows = [
                (400004, "Zenaida Ramos", "Data Science", 2),
                (100001, "Carlos Reyes", "Computer Science", 1),
                (300003, "Bea Santos", "Computer Science", 2),
                (200002, "Andrea Cruz", "Data Science", 2),
                (500005, "Diego Lim", "Cybersecurity", 4),
            ];
            for (id, name, program, year_level) in rows {
                students
                    .insert(&Student {
                        id,
                        full_name: name.to_string(),
                        birthday: NaiveDate::from_ymd_opt(2002, 7, 21).unwrap(),
                        address: "Cebu City".to_string(),
                        gender: Gender::Other,
                        degree_program: program.to_string(),
                        year_level,
                    })
                    .unwrap();
            }
            QueryTestContext { students }
        }
    }

    fn ids(students: &[Student]) -> Vec<u32> {
        students.iter().map(|student| student.id).collect()
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|student| student.full_name.as_str()).collect()
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_list_all_is_ordered_by_id(ctx: &mut QueryTestContext) {
        let all = ctx.students.list_all().unwrap();
        assert_eq!(ids(&all), vec![100001, 200002, 300003, 400004, 500005]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_year_level_sorted_by_name(ctx: &mut QueryTestContext) {
        let filter = StudentFilter::default().with_year_level(2);

        let first = ctx.students.query(&filter, Some(SortKey::FullName)).unwrap();
        assert_eq!(names(&first), vec!["Andrea Cruz", "Bea Santos", "Zenaida Ramos"]);
        assert!(first.iter().all(|student| student.year_level == 2));

        let second = ctx.students.query(&filter, Some(SortKey::FullName)).unwrap();
        assert_eq!(first, second);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_degree_program(ctx: &mut QueryTestContext) {
        let filter = StudentFilter::default().with_degree_program("Computer Science");
        let found = ctx.students.query(&filter, Some(SortKey::Id)).unwrap();
        assert_eq!(ids(&found), vec![100001, 300003]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_combined_filters(ctx: &mut QueryTestContext) {
        let filter = StudentFilter::default().with_year_level(2).with_degree_program("Data Science");
        let found = ctx.students.query(&filter, Some(SortKey::Id)).unwrap();
        assert_eq!(ids(&found), vec![200002, 400004]);

        let none = StudentFilter::default().with_year_level(3).with_degree_program("Data Science");
        assert!(ctx.students.query(&none, None).unwrap().is_empty());
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_sort_by_year_level(ctx: &mut QueryTestContext) {
        let found = ctx.students.query(&StudentFilter::default(), Some(SortKey::YearLevel)).unwrap();
        let levels: Vec<u8> = found.iter().map(|student| student.year_level).collect();
        assert_eq!(levels, vec![1, 2, 2, 2, 4]);
        // Equal year levels keep id order.
        assert_eq!(ids(&found[1..4]), vec![200002, 300003, 400004]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_unsorted_query_returns_everything(ctx: &mut QueryTestContext) {
        let mut found = ids(&ctx.students.query(&StudentFilter::default(), None).unwrap());
        found.sort();
        assert_eq!(found, vec![100001, 200002, 300003, 400004, 500005]);
    }

    #[test_context(QueryTestContext)]
    #[test]
    fn test_filter_values_are_bound_not_interpolated(ctx: &mut QueryTestContext) {
        let hostile = StudentFilter::default().with_degree_program("x' OR '1'='1");
        assert!(ctx.students.query(&hostile, None).unwrap().is_empty());

        let dropper = StudentFilter::default().with_degree_program("'; DROP TABLE students; --");
        assert!(ctx.students.query(&dropper, Some(SortKey::Id)).unwrap().is_empty());
        assert_eq!(ctx.students.list_all().unwrap().len(), 5);
    }
}
