//! Core library modules: record types, validation, configuration,
//! messaging and console rendering.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studman::db::{db::Db, students::Students};
//! use studman::libs::student::StudentForm;
//! use studman::libs::validation::Validator;
//!
//! let validator = Validator::new(vec!["Data Science".to_string()], 2024);
//! let student = validator.validate_form(&StudentForm {
//!     id: "123456".to_string(),
//!     full_name: "Ada Lovelace".to_string(),
//!     birthday: "12/10/2000".to_string(),
//!     address: "12 St James Square".to_string(),
//!     gender: "Female".to_string(),
//!     degree_program: "Data Science".to_string(),
//!     year_level: "2".to_string(),
//! })?;
//!
//! let mut students = Students::new(Db::open_in_memory()?)?;
//! students.insert(&student)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod student;
pub mod validation;
pub mod view;
