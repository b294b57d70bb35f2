use thiserror::Error;

/// Errors that can occur before or during a generation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("At least one step is required to generate pairwise combinations")]
    NoSteps,

    #[error("The steps expand to {count} assignments, which exceeds the limit of {limit}")]
    TooManyAssignments { count: u128, limit: u128 },
}

/// Errors that can occur while loading a pairwise document or custom step format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse document JSON: {0}")]
    InvalidJson(String),

    #[error("Document is missing the required field '{0}'")]
    MissingField(&'static str),

    #[error("Document field '{field}' has the wrong shape: expected {expected}")]
    WrongShape {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur while writing results to disk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Could not write '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Serialization failed: {0}")]
    Serialization(String),
}
