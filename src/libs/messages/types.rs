/// Every piece of user-facing text the application prints.
///
/// The text itself lives in the `Display` implementation in
/// [`display`](super::display); this enum only names the messages and carries
/// their parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === STUDENT MESSAGES ===
    StudentAdded(u32),
    StudentUpdated(u32),
    StudentDeleted(u32),
    StudentNotFound(u32),
    StudentAlreadyExists(u32),
    StudentsHeader,
    StudentsFound(usize),
    NoStudentsFound,
    NoChangesProvided,
    ConfirmDeleteStudent(String),
    DeletionCancelled,
    InvalidInput(String),

    // === FORM PROMPTS ===
    PromptStudentId,
    PromptFullName,
    PromptBirthday,
    PromptAddress,
    PromptGender,
    PromptDegreeProgram,
    PromptYearLevel,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDegrees,
    DegreeProgramsHeader,
    PromptKeepPrograms,
    PromptNewProgram,
    NoProgramsConfigured,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseClosed,
    StoreFailure(String),
}
