//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, NodeId};
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),

    #[error("cannot render output: {0}")]
    Output(String),

    #[error("map is incomplete: {incomplete} of {total} nodes need title and content (root {root})")]
    Incomplete {
        root: NodeId,
        incomplete: usize,
        total: usize,
    },
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Incomplete { .. } => crate::exitcode::DATAERR,
            CliError::Output(_) => crate::exitcode::SOFTWARE,
            CliError::Infra(InfraError::Application(app)) => match app {
                ApplicationError::Domain(DomainError::NodeNotFound(_)) => crate::exitcode::USAGE,
                ApplicationError::Domain(DomainError::DuplicateNodeId(_))
                | ApplicationError::Parse { .. } => crate::exitcode::DATAERR,
                ApplicationError::UnsupportedFormat(_) => crate::exitcode::USAGE,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::OperationFailed { .. } => crate::exitcode::NOINPUT,
            },
        }
    }
}
