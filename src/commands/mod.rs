//! Command-line front end.
//!
//! Each subcommand is one user action: it validates the raw input, aborts
//! with the failure reason if any field is rejected, and otherwise calls
//! the record store. Successful changes are followed by the full listing.

pub mod add;
pub mod delete;
pub mod filter;
pub mod init;
pub mod list;
pub mod programs;
pub mod search;
pub mod update;

use crate::db::students::{StoreError, Students};
use crate::libs::messages::Message;
use crate::libs::student::Student;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print};
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure the degree program list")]
    Init(init::InitArgs),
    #[command(about = "Add a student")]
    Add(add::AddArgs),
    #[command(about = "Update fields of a student", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Delete a student", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Search a student by ID", arg_required_else_help = true)]
    Search(search::SearchArgs),
    #[command(about = "Show all students")]
    List,
    #[command(about = "Show students by year level and degree program")]
    Filter(filter::FilterArgs),
    #[command(about = "Show the configured degree programs")]
    Programs,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Update(args) => update::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::List => list::cmd(),
            Commands::Filter(args) => filter::cmd(args),
            Commands::Programs => programs::cmd(),
        }
    }
}

/// Prints a rejected store operation and ends the action. Database failures
/// are returned unprinted; the binary reports them once and exits non-zero.
pub fn report_store_error(error: StoreError) -> Result<()> {
    match error {
        StoreError::DuplicateKey(id) => msg_error!(Message::StudentAlreadyExists(id)),
        StoreError::NotFound(id) => msg_error!(Message::StudentNotFound(id)),
        StoreError::Validation(error) => msg_error!(Message::InvalidInput(error.to_string())),
        StoreError::StoreFailure(error) => return Err(anyhow!(Message::StoreFailure(error.to_string()))),
    }
    Ok(())
}

fn refresh_listing(students: &mut Students) -> Result<()> {
    let all = students.list_all()?;
    show_students(&all);
    Ok(())
}

fn show_students(students: &[Student]) {
    if students.is_empty() {
        msg_info!(Message::NoStudentsFound);
        return;
    }

    msg_print!(Message::StudentsHeader);
    View::students(students);
    msg_print!(Message::StudentsFound(students.len()));
}
