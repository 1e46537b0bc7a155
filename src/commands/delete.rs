use super::{refresh_listing, report_store_error};
use crate::{
    db::students::Students,
    libs::{messages::Message, validation::validate_id},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Six-digit ID of the student to delete
    #[arg(required = true)]
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let id = match validate_id(args.id.trim()) {
        Ok(id) => id,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };

    let mut students = Students::open_default()?;

    let student = match students.find_by_id(id)? {
        Some(student) => student,
        None => {
            msg_error!(Message::StudentNotFound(id));
            students.close()?;
            return Ok(());
        }
    };

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteStudent(student.full_name.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        match students.delete(id) {
            Ok(()) => {
                msg_success!(Message::StudentDeleted(id));
                refresh_listing(&mut students)?;
            }
            Err(error) => report_store_error(error)?,
        }
    } else {
        msg_info!(Message::DeletionCancelled);
    }

    students.close()?;
    Ok(())
}
