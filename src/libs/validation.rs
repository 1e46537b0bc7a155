//! Field validation for student input.
//!
//! Every rule is a pure function of its input: the same raw text always
//! yields the same verdict. Rules that depend on outside context take it as
//! an argument (the evaluation year for birthdays, the configured program
//! list for degrees). [`Validator`] bundles that context so the store and
//! the commands share a single validation pass over a whole [`StudentForm`].
//!
//! ## Age rule
//!
//! A birthday is accepted when `birth_year <= current_year - MIN_AGE_YEARS`.
//! Only years are compared, so a student born late in the cutoff year passes
//! even if they have not yet turned sixteen.
//!
//! ## Usage
//!
//! ```rust
//! use studman::libs::validation::{validate_birthday, validate_id, ValidationError};
//!
//! assert_eq!(validate_id("123456").unwrap(), 123456);
//! assert!(matches!(validate_birthday("01/01/2010", 2024), Err(ValidationError::InvalidAge { .. })));
//! ```

use super::config::Config;
use super::student::{Gender, Student, StudentForm, BIRTHDAY_FORMAT};
use chrono::{Datelike, Local, NaiveDate};
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::sync::OnceLock;
use thiserror::Error;

/// Minimum age, in calendar years, of a registered student.
pub const MIN_AGE_YEARS: i32 = 16;

/// Selector value meaning "no filter on this column".
pub const FILTER_ALL: &str = "All";

pub const YEAR_LEVELS: [u8; 4] = [1, 2, 3, 4];

const ID_LENGTH: usize = 6;
const NAME_PATTERN: &str = r"^[A-Za-z\s]+$";

static NAME_RE: OnceLock<Regex> = OnceLock::new();

fn name_re() -> &'static Regex {
    NAME_RE.get_or_init(|| Regex::new(NAME_PATTERN).expect("valid name regex"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Id,
    FullName,
    Birthday,
    Address,
    Gender,
    DegreeProgram,
    YearLevel,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Id => "Student ID",
            Field::FullName => "Full Name",
            Field::Birthday => "Birthday",
            Field::Address => "Address",
            Field::Gender => "Gender",
            Field::DegreeProgram => "Degree Program",
            Field::YearLevel => "Year Level",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} {reason}")]
    InvalidFormat { field: Field, reason: &'static str },

    #[error("Invalid Birthday! Birth year {birth_year} means the student is younger than {min_age}")]
    InvalidAge { birth_year: i32, min_age: i32 },

    #[error("Invalid {field} '{value}'! Choose from: {allowed}")]
    InvalidChoice { field: Field, value: String, allowed: String },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::InvalidFormat { field, .. } | ValidationError::InvalidChoice { field, .. } => *field,
            ValidationError::InvalidAge { .. } => Field::Birthday,
        }
    }
}

pub fn validate_id(raw: &str) -> Result<u32, ValidationError> {
    let invalid = || ValidationError::InvalidFormat {
        field: Field::Id,
        reason: "must be a 6-digit number",
    };

    if raw.len() != ID_LENGTH || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse().map_err(|_| invalid())
}

pub fn validate_name(raw: &str) -> Result<String, ValidationError> {
    if !name_re().is_match(raw) {
        return Err(ValidationError::InvalidFormat {
            field: Field::FullName,
            reason: "must only contain letters and spaces",
        });
    }
    Ok(raw.to_string())
}

/// Parses `month/day/year` (month and day may be unpadded) and applies the
/// year-only age rule against `current_year`.
pub fn validate_birthday(raw: &str, current_year: i32) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidFormat {
        field: Field::Birthday,
        reason: "format must be MM/DD/YYYY",
    };

    let parts: Vec<&str> = raw.split('/').collect();
    let shaped = matches!(
        parts.as_slice(),
        [month, day, year]
            if (1..=2).contains(&month.len())
                && (1..=2).contains(&day.len())
                && year.len() == 4
                && parts.iter().all(|part| part.bytes().all(|b| b.is_ascii_digit()))
    );
    if !shaped {
        return Err(invalid());
    }

    let birthday = NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT).map_err(|_| invalid())?;

    if birthday.year() > current_year - MIN_AGE_YEARS {
        return Err(ValidationError::InvalidAge {
            birth_year: birthday.year(),
            min_age: MIN_AGE_YEARS,
        });
    }
    Ok(birthday)
}

pub fn validate_address(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: Field::Address,
            reason: "must not be empty",
        });
    }
    Ok(raw.to_string())
}

pub fn validate_gender(raw: &str) -> Result<Gender, ValidationError> {
    Gender::parse(raw).ok_or_else(|| ValidationError::InvalidChoice {
        field: Field::Gender,
        value: raw.to_string(),
        allowed: join(Gender::ALL.iter()),
    })
}

pub fn validate_degree(raw: &str, programs: &[String]) -> Result<String, ValidationError> {
    if programs.iter().any(|program| program == raw) {
        return Ok(raw.to_string());
    }
    Err(ValidationError::InvalidChoice {
        field: Field::DegreeProgram,
        value: raw.to_string(),
        allowed: join(programs.iter()),
    })
}

pub fn validate_year_level(raw: &str) -> Result<u8, ValidationError> {
    let invalid = || ValidationError::InvalidChoice {
        field: Field::YearLevel,
        value: raw.to_string(),
        allowed: join(YEAR_LEVELS.iter()),
    };

    // Integer parsing accepts a leading sign; only plain digits are a choice.
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<u8>()
        .ok()
        .filter(|level| YEAR_LEVELS.contains(level))
        .ok_or_else(invalid)
}

/// Year-level selector of the filter controls: blank or exactly "All" disables the filter.
pub fn validate_year_filter(raw: &str) -> Result<Option<u8>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() || raw == FILTER_ALL {
        return Ok(None);
    }
    validate_year_level(raw).map(Some)
}

/// Degree selector of the filter controls. The value is bound as a query
/// parameter, so it is not checked against the program list.
pub fn degree_filter(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == FILTER_ALL {
        return None;
    }
    Some(raw.to_string())
}

fn join<T: Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}

/// Validation context shared by the store and the commands.
#[derive(Debug, Clone)]
pub struct Validator {
    degree_programs: Vec<String>,
    current_year: i32,
}

impl Validator {
    pub fn new(degree_programs: Vec<String>, current_year: i32) -> Self {
        Self {
            degree_programs,
            current_year,
        }
    }

    /// Uses the configured programs and the current local year.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.degree_programs.clone(), Local::now().year())
    }

    /// Runs every field rule over the form and builds the typed record.
    /// The first failing field is reported.
    pub fn validate_form(&self, form: &StudentForm) -> Result<Student, ValidationError> {
        let id = validate_id(&form.id)?;
        let full_name = validate_name(&form.full_name)?;
        let birthday = validate_birthday(&form.birthday, self.current_year)?;
        let address = validate_address(&form.address)?;
        let year_level = validate_year_level(&form.year_level)?;
        let gender = validate_gender(&form.gender)?;
        let degree_program = validate_degree(&form.degree_program, &self.degree_programs)?;

        Ok(Student {
            id,
            full_name,
            birthday,
            address,
            gender,
            degree_program,
            year_level,
        })
    }
}
