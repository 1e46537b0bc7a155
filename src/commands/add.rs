//! Add a new student record.
//!
//! Fields may be passed as flags; any field left out is asked for
//! interactively, with the fixed-choice fields offered as selection lists.

use super::{refresh_listing, report_store_error};
use crate::{
    db::students::Students,
    libs::{
        config::Config,
        messages::Message,
        student::{Gender, StudentForm},
        validation::{Validator, YEAR_LEVELS},
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Six-digit student ID
    #[arg(long)]
    pub id: Option<String>,
    /// Full name, letters and spaces only
    #[arg(long)]
    pub name: Option<String>,
    /// Birthday as MM/DD/YYYY
    #[arg(long)]
    pub birthday: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    /// Male, Female or Other
    #[arg(long)]
    pub gender: Option<String>,
    /// One of the configured degree programs
    #[arg(long)]
    pub degree: Option<String>,
    /// Year level, 1 to 4
    #[arg(long)]
    pub year: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let form = fill_form(args, &config)?.trimmed();

    let student = match Validator::from_config(&config).validate_form(&form) {
        Ok(student) => student,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };

    let mut students = Students::open_default()?;
    match students.insert(&student) {
        Ok(()) => {
            msg_success!(Message::StudentAdded(student.id));
            refresh_listing(&mut students)?;
        }
        Err(error) => report_store_error(error)?,
    }

    students.close()?;
    Ok(())
}

fn fill_form(args: AddArgs, config: &Config) -> Result<StudentForm> {
    let genders: Vec<&str> = Gender::ALL.iter().map(|gender| gender.as_str()).collect();
    let year_levels: Vec<String> = YEAR_LEVELS.iter().map(|level| level.to_string()).collect();

    Ok(StudentForm {
        id: text_or_prompt(args.id, Message::PromptStudentId)?,
        full_name: text_or_prompt(args.name, Message::PromptFullName)?,
        birthday: text_or_prompt(args.birthday, Message::PromptBirthday)?,
        address: text_or_prompt(args.address, Message::PromptAddress)?,
        gender: choice_or_prompt(args.gender, Message::PromptGender, &genders)?,
        degree_program: choice_or_prompt(args.degree, Message::PromptDegreeProgram, &config.degree_programs)?,
        year_level: choice_or_prompt(args.year, Message::PromptYearLevel, &year_levels)?,
    })
}

fn text_or_prompt(value: Option<String>, prompt: Message) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => Ok(Input::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .allow_empty(true)
            .interact_text()?),
    }
}

fn choice_or_prompt<T: ToString>(value: Option<String>, prompt: Message, choices: &[T]) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => {
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt.to_string())
                .items(choices)
                .default(0)
                .interact()?;
            Ok(choices[selection].to_string())
        }
    }
}
