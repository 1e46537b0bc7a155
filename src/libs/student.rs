//! Student record types shared by the form, store and view layers.
//!
//! A [`Student`] is the typed, validated seven-field record that the store
//! persists. Raw user input travels as a [`StudentForm`] until it passes
//! validation, and partial edits travel as a [`StudentPatch`] that is merged
//! over the stored record before the merged form is validated again.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studman::libs::student::{StudentFilter, SortKey};
//! use studman::db::students::Students;
//!
//! let mut students = Students::open_default()?;
//! let second_years = students.query(&StudentFilter::default().with_year_level(2), Some(SortKey::FullName))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use chrono::NaiveDate;
use clap::ValueEnum;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt::{self, Display, Formatter};

/// Text format of birthdays, both on input and in the `students` table.
pub const BIRTHDAY_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Exact, case-sensitive match against the stored labels.
    pub fn parse(raw: &str) -> Option<Gender> {
        Self::ALL.into_iter().find(|gender| gender.as_str() == raw)
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for Gender {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Gender {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Gender::parse(value.as_str()?).ok_or(FromSqlError::InvalidType)
    }
}

/// A validated student record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: u32,
    pub full_name: String,
    pub birthday: NaiveDate,
    pub address: String,
    pub gender: Gender,
    pub degree_program: String,
    pub year_level: u8,
}

impl Student {
    /// Birthday as stored and displayed, always zero-padded `MM/DD/YYYY`.
    pub fn birthday_text(&self) -> String {
        self.birthday.format(BIRTHDAY_FORMAT).to_string()
    }

    /// Converts the record back into raw form input, the starting point of a partial update.
    pub fn to_form(&self) -> StudentForm {
        StudentForm {
            id: format!("{:06}", self.id),
            full_name: self.full_name.clone(),
            birthday: self.birthday_text(),
            address: self.address.clone(),
            gender: self.gender.to_string(),
            degree_program: self.degree_program.clone(),
            year_level: self.year_level.to_string(),
        }
    }
}

/// Raw, unvalidated field input exactly as the user entered it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentForm {
    pub id: String,
    pub full_name: String,
    pub birthday: String,
    pub address: String,
    pub gender: String,
    pub degree_program: String,
    pub year_level: String,
}

impl StudentForm {
    /// Strips surrounding whitespace from every field.
    pub fn trimmed(self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            birthday: self.birthday.trim().to_string(),
            address: self.address.trim().to_string(),
            gender: self.gender.trim().to_string(),
            degree_program: self.degree_program.trim().to_string(),
            year_level: self.year_level.trim().to_string(),
        }
    }

    /// Applies a partial update over this form. Fields the patch leaves out,
    /// or supplies as blank text, keep their current value. The id never changes.
    pub fn merge(self, patch: &StudentPatch) -> Self {
        Self {
            id: self.id,
            full_name: pick(self.full_name, &patch.full_name),
            birthday: pick(self.birthday, &patch.birthday),
            address: pick(self.address, &patch.address),
            gender: pick(self.gender, &patch.gender),
            degree_program: pick(self.degree_program, &patch.degree_program),
            year_level: pick(self.year_level, &patch.year_level),
        }
    }
}

fn pick(current: String, replacement: &Option<String>) -> String {
    match replacement {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => current,
    }
}

/// The mutable fields of a partial update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub full_name: Option<String>,
    pub birthday: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub degree_program: Option<String>,
    pub year_level: Option<String>,
}

impl StudentPatch {
    pub fn is_empty(&self) -> bool {
        [&self.full_name, &self.birthday, &self.address, &self.gender, &self.degree_program, &self.year_level]
            .iter()
            .all(|field| field.as_deref().map_or(true, |value| value.trim().is_empty()))
    }
}

/// Columns a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Id,
    #[value(name = "name")]
    FullName,
    #[value(name = "year")]
    YearLevel,
}

impl SortKey {
    /// Fixed column name for `ORDER BY`; the only text ever interpolated into a query.
    pub fn column(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::FullName => "full_name",
            SortKey::YearLevel => "year_level",
        }
    }
}

/// Equality filters over the listing. `None` means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub year_level: Option<u8>,
    pub degree_program: Option<String>,
}

impl StudentFilter {
    pub fn with_year_level(mut self, year_level: u8) -> Self {
        self.year_level = Some(year_level);
        self
    }

    pub fn with_degree_program(mut self, degree_program: impl Into<String>) -> Self {
        self.degree_program = Some(degree_program.into());
        self
    }
}
