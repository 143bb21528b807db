use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("Failed to execute {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Exit { command: String, status: ExitStatus },

    #[error("Invalid package specification: {0}")]
    InvalidPackage(String),

    #[error("Invalid version format {0:?}: expected exactly two %s placeholders")]
    InvalidFormat(String),

    #[error("Refusing to run an empty command")]
    EmptyCommand,
}

impl PackageError {
    /// Exit code reported by the package manager, if it ran to completion.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PackageError::Exit { status, .. } => status.code(),
            _ => None,
        }
    }
}
