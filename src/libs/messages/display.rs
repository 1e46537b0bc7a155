//! Display implementation for application messages.
//!
//! All message text is defined here, so wording stays consistent between
//! commands and can be changed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === STUDENT MESSAGES ===
            Message::StudentAdded(id) => format!("Student {:06} added successfully!", id),
            Message::StudentUpdated(id) => format!("Student {:06} record updated!", id),
            Message::StudentDeleted(id) => format!("Student {:06} deleted successfully!", id),
            Message::StudentNotFound(id) => format!("Student {:06} not found!", id),
            Message::StudentAlreadyExists(id) => format!("Student ID {:06} already exists!", id),
            Message::StudentsHeader => "Students:".to_string(),
            Message::StudentsFound(count) => format!("{} student(s) found", count),
            Message::NoStudentsFound => "No students found.".to_string(),
            Message::NoChangesProvided => "No fields to update were provided.".to_string(),
            Message::ConfirmDeleteStudent(name) => format!("Are you sure you want to delete student {}?", name),
            Message::DeletionCancelled => "Deletion cancelled.".to_string(),
            Message::InvalidInput(reason) => format!("Error: {}", reason),

            // === FORM PROMPTS ===
            Message::PromptStudentId => "ID".to_string(),
            Message::PromptFullName => "Full Name".to_string(),
            Message::PromptBirthday => "Birthday (MM/DD/YYYY)".to_string(),
            Message::PromptAddress => "Address".to_string(),
            Message::PromptGender => "Gender".to_string(),
            Message::PromptDegreeProgram => "Degree Program".to_string(),
            Message::PromptYearLevel => "Year Level".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDegrees => "Degree program settings".to_string(),
            Message::DegreeProgramsHeader => "Degree programs:".to_string(),
            Message::PromptKeepPrograms => "Programs to keep (space to toggle, enter to confirm)".to_string(),
            Message::PromptNewProgram => "Add a program (leave empty to finish)".to_string(),
            Message::NoProgramsConfigured => "At least one degree program must be configured".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Opened database at {}", path),
            Message::DatabaseClosed => "Database connection closed".to_string(),
            Message::StoreFailure(error) => format!("Database operation failed: {}", error),
        };

        write!(f, "{}", text)
    }
}
