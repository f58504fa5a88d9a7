//! Prompt layer for the CLI commands.
//!
//! Interactive mode wraps dialoguer; script mode (enabled by setting
//! `BANKDASH_CLI_SCRIPT=1`) reads answers line by line from stdin so
//! integration tests can drive the flows without a TTY. `:back` and
//! `:cancel` work as navigation tokens in both modes.

use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password, Select};

use super::CliError;

pub const SCRIPT_MODE_ENV: &str = "BANKDASH_CLI_SCRIPT";

const BACK_TOKEN: &str = ":back";
const CANCEL_TOKEN: &str = ":cancel";

/// How a prompt was answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Value(String),
    Back,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromptMode {
    Interactive,
    Script,
}

/// Issues prompts in interactive or scripted mode.
pub struct Prompter {
    mode: PromptMode,
    theme: ColorfulTheme,
}

impl Prompter {
    pub fn from_env() -> Self {
        let mode = if std::env::var(SCRIPT_MODE_ENV).map_or(false, |value| value == "1") {
            PromptMode::Script
        } else {
            PromptMode::Interactive
        };
        Self {
            mode,
            theme: ColorfulTheme::default(),
        }
    }

    /// Free-form text input. The current value, when non-empty, is offered as
    /// the editable initial text.
    pub fn text(&self, label: &str, current: &str) -> Result<PromptResponse, CliError> {
        match self.mode {
            PromptMode::Script => self.scripted(),
            PromptMode::Interactive => {
                let input = Input::<String>::with_theme(&self.theme)
                    .with_prompt(label)
                    .with_initial_text(current)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(classify(input))
            }
        }
    }

    /// Hidden input for secrets.
    pub fn password(&self, label: &str) -> Result<PromptResponse, CliError> {
        match self.mode {
            PromptMode::Script => self.scripted(),
            PromptMode::Interactive => {
                let input = Password::with_theme(&self.theme)
                    .with_prompt(label)
                    .allow_empty_password(true)
                    .interact()?;
                Ok(classify(input))
            }
        }
    }

    /// Pick one of `options`. Scripted answers may be the option text
    /// (case-insensitive) or its 1-based index; anything else passes through
    /// as a raw value and is left to schema validation.
    pub fn select(&self, label: &str, options: &[&str]) -> Result<PromptResponse, CliError> {
        match self.mode {
            PromptMode::Script => {
                let raw = match self.scripted()? {
                    PromptResponse::Value(raw) => raw,
                    other => return Ok(other),
                };
                let trimmed = raw.trim();
                if let Ok(index) = trimmed.parse::<usize>() {
                    if index >= 1 && index <= options.len() {
                        return Ok(PromptResponse::Value(options[index - 1].to_string()));
                    }
                }
                let matched = options
                    .iter()
                    .find(|option| option.eq_ignore_ascii_case(trimmed));
                Ok(PromptResponse::Value(
                    matched.map_or_else(|| trimmed.to_string(), |option| option.to_string()),
                ))
            }
            PromptMode::Interactive => {
                let index = Select::with_theme(&self.theme)
                    .with_prompt(label)
                    .items(options)
                    .default(0)
                    .interact()?;
                Ok(PromptResponse::Value(options[index].to_string()))
            }
        }
    }

    /// Yes/no toggle; the value is `"true"` or `"false"`.
    pub fn toggle(&self, label: &str, current: bool) -> Result<PromptResponse, CliError> {
        match self.mode {
            PromptMode::Script => {
                let raw = match self.scripted()? {
                    PromptResponse::Value(raw) => raw,
                    other => return Ok(other),
                };
                let on = matches!(
                    raw.trim().to_ascii_lowercase().as_str(),
                    "y" | "yes" | "true" | "1"
                );
                Ok(PromptResponse::Value(on.to_string()))
            }
            PromptMode::Interactive => {
                let on = Confirm::with_theme(&self.theme)
                    .with_prompt(label)
                    .default(current)
                    .interact()?;
                Ok(PromptResponse::Value(on.to_string()))
            }
        }
    }

    fn scripted(&self) -> Result<PromptResponse, CliError> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            // EOF: nothing left in the script.
            return Ok(PromptResponse::Cancel);
        }
        Ok(classify(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn classify(input: String) -> PromptResponse {
    match input.trim() {
        BACK_TOKEN => PromptResponse::Back,
        CANCEL_TOKEN => PromptResponse::Cancel,
        _ => PromptResponse::Value(input),
    }
}
