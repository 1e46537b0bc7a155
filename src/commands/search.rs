use crate::{
    db::students::Students,
    libs::{messages::Message, validation::validate_id, view::View},
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Six-digit ID of the student to look up
    #[arg(required = true)]
    pub id: String,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let id = match validate_id(args.id.trim()) {
        Ok(id) => id,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };

    let mut students = Students::open_default()?;
    match students.find_by_id(id)? {
        Some(student) => View::students(&[student]),
        None => msg_error!(Message::StudentNotFound(id)),
    }

    students.close()?;
    Ok(())
}
