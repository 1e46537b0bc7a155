use super::config::Config;
use super::student::Student;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn students(students: &[Student]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "BIRTHDAY", "ADDRESS", "GENDER", "PROGRAM", "YEAR"]);
        for student in students {
            table.add_row(row![
                format!("{:06}", student.id),
                student.full_name,
                student.birthday_text(),
                student.address,
                student.gender,
                student.degree_program,
                student.year_level
            ]);
        }
        table.printstd();
    }

    pub fn degree_programs(config: &Config) {
        let mut table = Table::new();

        table.add_row(row!["#", "PROGRAM"]);
        for (index, program) in config.degree_programs.iter().enumerate() {
            table.add_row(row![index + 1, program]);
        }
        table.printstd();
    }
}
