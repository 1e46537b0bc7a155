use super::db::Db;
use crate::libs::student::{SortKey, Student, StudentFilter, StudentPatch, BIRTHDAY_FORMAT};
use crate::libs::validation::{ValidationError, Validator};
use crate::msg_debug;
use chrono::NaiveDate;
use rusqlite::types::{Type, Value};
use rusqlite::{ffi, params, params_from_iter, ErrorCode, OptionalExtension, Row};
use thiserror::Error;

const SCHEMA_STUDENTS: &str = "CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY,
    full_name TEXT NOT NULL,
    birthday TEXT NOT NULL,
    address TEXT NOT NULL,
    gender TEXT NOT NULL CHECK (gender IN ('Male', 'Female', 'Other')),
    degree_program TEXT NOT NULL,
    year_level INTEGER NOT NULL CHECK (year_level BETWEEN 1 AND 4)
);";
const INSERT_STUDENT: &str = "INSERT INTO students (id, full_name, birthday, address, gender, degree_program, year_level) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const UPDATE_STUDENT: &str = "UPDATE students SET full_name = ?2, birthday = ?3, address = ?4, gender = ?5, degree_program = ?6, year_level = ?7 WHERE id = ?1";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE id = ?1";
const SELECT_STUDENTS: &str = "SELECT id, full_name, birthday, address, gender, degree_program, year_level FROM students";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_ANY: &str = "WHERE 1=1";
const AND_YEAR_LEVEL: &str = "AND year_level = ?";
const AND_DEGREE_PROGRAM: &str = "AND degree_program = ?";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Student ID {0:06} already exists")]
    DuplicateKey(u32),

    #[error("Student {0:06} not found")]
    NotFound(u32),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database operation failed: {0}")]
    StoreFailure(#[from] rusqlite::Error),
}

/// Record store for the `students` table.
///
/// Owns the database handle for its whole lifetime; the connection is
/// released by [`Students::close`] or when the store is dropped.
pub struct Students {
    db: Db,
}

impl Students {
    pub fn new(db: Db) -> Result<Students, StoreError> {
        db.conn.execute(SCHEMA_STUDENTS, [])?;

        Ok(Students { db })
    }

    /// Opens the store on the database in the per-user data directory.
    pub fn open_default() -> anyhow::Result<Students> {
        Ok(Self::new(Db::new()?)?)
    }

    pub fn close(self) -> Result<(), StoreError> {
        self.db.close()?;
        Ok(())
    }

    pub fn insert(&mut self, student: &Student) -> Result<(), StoreError> {
        let inserted = self.db.conn.execute(
            INSERT_STUDENT,
            params![
                student.id,
                student.full_name,
                student.birthday_text(),
                student.address,
                student.gender,
                student.degree_program,
                student.year_level
            ],
        );

        match inserted {
            Ok(_) => {
                msg_debug!("Inserted student {:06}", student.id);
                Ok(())
            }
            Err(error) if is_primary_key_violation(&error) => Err(StoreError::DuplicateKey(student.id)),
            Err(error) => Err(error.into()),
        }
    }

    /// Loads the stored record, merges the patch over it, validates the
    /// merged record as a whole and only then writes it back.
    pub fn update(&mut self, id: u32, patch: &StudentPatch, validator: &Validator) -> Result<Student, StoreError> {
        let current = self.find_by_id(id)?.ok_or(StoreError::NotFound(id))?;
        let merged = validator.validate_form(&current.to_form().merge(patch))?;

        let affected = self.db.conn.execute(
            UPDATE_STUDENT,
            params![
                merged.id,
                merged.full_name,
                merged.birthday_text(),
                merged.address,
                merged.gender,
                merged.degree_program,
                merged.year_level
            ],
        )?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        msg_debug!("Updated student {:06}", id);
        Ok(merged)
    }

    pub fn delete(&mut self, id: u32) -> Result<(), StoreError> {
        let affected = self.db.conn.execute(DELETE_STUDENT, params![id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }

        msg_debug!("Deleted student {:06}", id);
        Ok(())
    }

    pub fn find_by_id(&mut self, id: u32) -> Result<Option<Student>, StoreError> {
        let student = self
            .db
            .conn
            .query_row(&format!("{} {}", SELECT_STUDENTS, WHERE_ID), params![id], row_to_student)
            .optional()?;

        Ok(student)
    }

    /// Lists the students matching every filter that is set, ordered
    /// ascending by the sort column when one is given.
    ///
    /// Filter values are bound as parameters; only the fixed column name of
    /// the sort key is written into the statement text.
    pub fn query(&mut self, filter: &StudentFilter, sort: Option<SortKey>) -> Result<Vec<Student>, StoreError> {
        let mut sql = format!("{} {}", SELECT_STUDENTS, WHERE_ANY);
        let mut values: Vec<Value> = Vec::new();

        if let Some(year_level) = filter.year_level {
            sql = format!("{} {}", sql, AND_YEAR_LEVEL);
            values.push(Value::Integer(year_level.into()));
        }
        if let Some(degree_program) = &filter.degree_program {
            sql = format!("{} {}", sql, AND_DEGREE_PROGRAM);
            values.push(Value::Text(degree_program.clone()));
        }
        if let Some(sort) = sort {
            // Ties fall back to id so repeated reads return the same order.
            sql = match sort {
                SortKey::Id => format!("{} ORDER BY {}", sql, sort.column()),
                _ => format!("{} ORDER BY {}, {}", sql, sort.column(), SortKey::Id.column()),
            };
        }

        msg_debug!("Student query: {} ({} parameter(s))", sql, values.len());

        let mut stmt = self.db.conn.prepare(&sql)?;
        let student_iter = stmt.query_map(params_from_iter(values.iter()), row_to_student)?;

        let mut students = Vec::new();
        for student in student_iter {
            students.push(student?);
        }

        Ok(students)
    }

    pub fn list_all(&mut self) -> Result<Vec<Student>, StoreError> {
        self.query(&StudentFilter::default(), Some(SortKey::Id))
    }
}

fn row_to_student(row: &Row<'_>) -> rusqlite::Result<Student> {
    let birthday: String = row.get(2)?;
    let birthday = NaiveDate::parse_from_str(&birthday, BIRTHDAY_FORMAT)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(error)))?;

    Ok(Student {
        id: row.get(0)?,
        full_name: row.get(1)?,
        birthday,
        address: row.get(3)?,
        gender: row.get(4)?,
        degree_program: row.get(5)?,
        year_level: row.get(6)?,
    })
}

fn is_primary_key_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation
                && (failure.extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || failure.extended_code == ffi::SQLITE_CONSTRAINT_ROWID)
    )
}
