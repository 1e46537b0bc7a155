//! Database layer built on SQLite.
//!
//! [`db::Db`] owns the connection; [`students::Students`] takes that handle
//! at construction, creates the `students` table if needed and performs
//! every read and write against it.
//!
//! ## Usage
//!
//! ```rust
//! use studman::db::{db::Db, students::Students};
//!
//! let mut students = Students::new(Db::open_in_memory()?)?;
//! assert!(students.list_all()?.is_empty());
//! students.close()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection handle and data-file location.
pub mod db;

/// Student record store: insert, update, delete, lookup and filtered listing.
pub mod students;
