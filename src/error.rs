use std::path::PathBuf;

use thiserror::Error;

/// Errors with a user-facing meaning and a distinct exit code.
///
/// Anything else (plain I/O failures, etc.) travels as a bare
/// `anyhow::Error` and exits with code 1.
#[derive(Debug, Error)]
pub enum Error {
    #[error("deployment '{0}' not found")]
    NotFound(String),

    #[error("deployment '{0}' already exists")]
    DuplicateName(String),

    #[error("no docker-compose file found in {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("settings file at {} is not valid YAML", .0.display())]
    CorruptStore(PathBuf, #[source] serde_yaml::Error),

    #[error("docker compose failed: {0}")]
    ExternalTool(String),

    #[error("--start and --restart cannot be used together")]
    ConflictingOptions,
}

impl Error {
    /// Exit code for this error kind
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::NotFound(_) => 2,
            Error::DuplicateName(_) => 3,
            Error::ManifestMissing(_) => 4,
            Error::CorruptStore(_, _) => 5,
            Error::ExternalTool(_) => 6,
            Error::ConflictingOptions => 7,
        }
    }
}

/// Map any error chain to a process exit code
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<Error>().map_or(1, Error::exit_code)
}
