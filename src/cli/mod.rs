pub mod io;
pub mod login;
pub mod output;
pub mod signup;

pub use io::{PromptResponse, Prompter};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Api(#[from] crate::errors::ApiError),
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),
    #[error("Login failed")]
    LoginFailed,
}
