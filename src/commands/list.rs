use super::show_students;
use crate::db::students::Students;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut students = Students::open_default()?;
    let all = students.list_all()?;
    show_students(&all);

    students.close()?;
    Ok(())
}
