use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the shell itself (not by its collaborators)
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("window label must not be empty")]
    EmptyLabel,

    #[error("failed to read window config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid window config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of a single backend command invocation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("backend rejected `{command}`: {message}")]
    Rejected {
        command: &'static str,
        message: String,
    },

    #[error("backend went away before `{command}` completed")]
    Disconnected { command: &'static str },
}

impl CommandError {
    pub fn rejected(command: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            command,
            message: message.into(),
        }
    }

    /// Name of the command that failed
    pub fn command(&self) -> &'static str {
        match self {
            Self::Rejected { command, .. } | Self::Disconnected { command } => command,
        }
    }
}
