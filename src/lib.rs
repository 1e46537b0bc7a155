//! # Studman - Student records manager
//!
//! A command-line utility for keeping student records in a local SQLite
//! database.
//!
//! ## Features
//!
//! - **Validated Entry**: Every field is checked before anything is written
//! - **Partial Updates**: Change only the fields you name
//! - **Search and Filter**: Look up by ID, filter by year level and degree program
//! - **Sorting**: Order listings by ID, name or year level
//! - **Configurable Programs**: Maintain the degree program list in `config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use studman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
