use thiserror::Error;

use mogit_wardrobe_lib::RunError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Generation run failed
    #[error(transparent)]
    Run(#[from] RunError),

    /// Settings could not be read or saved
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
