//! Login command: exchanges credentials for a token pair and persists it.

use crate::api::AuthApi;
use crate::config::{ApiConfig, CredentialStore};

use super::io::{PromptResponse, Prompter};
use super::{output, CliError};

pub fn run(prompter: &Prompter) -> Result<(), CliError> {
    output::section("BankDash. — Login");

    let PromptResponse::Value(username) = prompter.text("Username", "")? else {
        output::warning("Login cancelled.");
        return Ok(());
    };
    let PromptResponse::Value(password) = prompter.password("Password")? else {
        output::warning("Login cancelled.");
        return Ok(());
    };

    let auth = AuthApi::from_config(&ApiConfig::from_env())?;
    let tokens = match auth.login(username.trim(), &password) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::error(format!("{err} — enter valid credentials."));
            return Err(CliError::LoginFailed);
        }
    };

    let store = CredentialStore::default_location();
    store.save(&tokens)?;
    output::success(format!(
        "Signed in. Tokens stored at {}.",
        store.path().display()
    ));
    Ok(())
}
