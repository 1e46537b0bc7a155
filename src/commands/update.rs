use super::{refresh_listing, report_store_error};
use crate::{
    db::students::{StoreError, Students},
    libs::{config::Config, messages::Message, student::{Student, StudentPatch}, validation::{validate_id, Validator}},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

/// Only the fields that are given change; the rest keep their stored value.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Six-digit ID of the student to update
    #[arg(required = true)]
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    /// Birthday as MM/DD/YYYY
    #[arg(long)]
    pub birthday: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub degree: Option<String>,
    #[arg(long)]
    pub year: Option<String>,
}

impl UpdateArgs {
    fn patch(&self) -> StudentPatch {
        StudentPatch {
            full_name: self.name.clone(),
            birthday: self.birthday.clone(),
            address: self.address.clone(),
            gender: self.gender.clone(),
            degree_program: self.degree.clone(),
            year_level: self.year.clone(),
        }
    }
}

pub fn cmd(args: UpdateArgs) -> Result<()> {
    let id = match validate_id(args.id.trim()) {
        Ok(id) => id,
        Err(error) => {
            msg_error!(Message::InvalidInput(error.to_string()));
            return Ok(());
        }
    };

    let validator = Validator::from_config(&Config::read()?);
    let mut students = Students::open_default()?;
    match apply(&mut students, id, &args.patch(), &validator) {
        Ok(Some(student)) => {
            msg_success!(Message::StudentUpdated(student.id));
            refresh_listing(&mut students)?;
        }
        Ok(None) => msg_info!(Message::NoChangesProvided),
        Err(error) => report_store_error(error)?,
    }

    students.close()?;
    Ok(())
}

/// Applies the patch to an existing student. A missing student is reported
/// before an empty patch; `Ok(None)` means there was nothing to change.
pub fn apply(students: &mut Students, id: u32, patch: &StudentPatch, validator: &Validator) -> Result<Option<Student>, StoreError> {
    if students.find_by_id(id)?.is_none() {
        return Err(StoreError::NotFound(id));
    }
    if patch.is_empty() {
        return Ok(None);
    }
    students.update(id, patch, validator).map(Some)
}
