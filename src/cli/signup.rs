//! Interactive signup command: drives one [`SignupWizard`] session through
//! the prompt layer and submits the record to the registration endpoint.

use crate::api::AuthApi;
use crate::config::ApiConfig;
use crate::signup::{Field, FieldValue, SignupStep, SignupWizard, SubmitOutcome};

use super::io::{PromptResponse, Prompter};
use super::{output, CliError};

const CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];
const TIME_ZONES: [&str; 3] = ["UTC", "EST", "PST"];
const TOGGLES: [Field; 4] = [
    Field::SentOrReceiveDigitalCurrency,
    Field::ReceiveMerchantOrder,
    Field::AccountRecommendations,
    Field::TwoFactorAuthentication,
];

enum StepControl {
    Filled,
    Back,
    Cancelled,
}

pub fn run(prompter: &Prompter) -> Result<(), CliError> {
    output::section("BankDash. — Sign Up");
    let mut wizard = SignupWizard::new();

    loop {
        let step = wizard.step();
        output::section(format!(
            "Step {} of {}: {}",
            step.number(),
            SignupStep::COUNT,
            step.title()
        ));

        match fill_step(prompter, &mut wizard)? {
            StepControl::Cancelled => {
                output::warning("Signup cancelled.");
                return Ok(());
            }
            StepControl::Back => {
                if step == SignupStep::FIRST {
                    output::warning("Already at the first step.");
                } else {
                    wizard.back();
                }
                continue;
            }
            StepControl::Filled => {}
        }

        if !step.is_last() {
            if !wizard.advance() {
                report_errors(&wizard);
            }
            continue;
        }

        let auth = AuthApi::from_config(&ApiConfig::from_env())?;
        match wizard.submit(&auth) {
            SubmitOutcome::Completed => {
                output::success("Account created. You can now sign in.");
                return Ok(());
            }
            SubmitOutcome::Rejected => {
                report_errors(&wizard);
                if let Some(message) = wizard.failure_message() {
                    output::error(message);
                }
                output::info("Review your entries and submit again, or type :cancel to quit.");
            }
            SubmitOutcome::Ignored => {}
        }
    }
}

/// Prompts every field of the current step (plus the preference toggles on
/// the final step). `:back` returns to the previous step; validation itself
/// happens when the wizard advances or submits.
fn fill_step(prompter: &Prompter, wizard: &mut SignupWizard) -> Result<StepControl, CliError> {
    let step = wizard.step();
    for field in step.fields() {
        match prompt_field(prompter, wizard, *field)? {
            PromptResponse::Value(value) => wizard.update_field(*field, FieldValue::text(value)),
            PromptResponse::Back => return Ok(StepControl::Back),
            PromptResponse::Cancel => return Ok(StepControl::Cancelled),
        }
    }
    if step.is_last() {
        for toggle in TOGGLES {
            let current = wizard.record().text(toggle) == "true";
            match prompter.toggle(toggle.label(), current)? {
                PromptResponse::Value(value) => {
                    wizard.update_field(toggle, FieldValue::Toggle(value == "true"))
                }
                PromptResponse::Back => return Ok(StepControl::Back),
                PromptResponse::Cancel => return Ok(StepControl::Cancelled),
            }
        }
    }
    Ok(StepControl::Filled)
}

fn prompt_field(
    prompter: &Prompter,
    wizard: &SignupWizard,
    field: Field,
) -> Result<PromptResponse, CliError> {
    let current = wizard.record().text(field);
    match field {
        Field::Password => prompter.password(field.label()),
        Field::Currency => prompter.select("Preferred Currency", &CURRENCIES),
        Field::TimeZone => prompter.select("Time Zone", &TIME_ZONES),
        Field::DateOfBirth => prompter.text("Date of Birth (YYYY-MM-DD)", &current),
        Field::ProfilePicture => prompter.text("Profile picture URL (optional)", &current),
        _ => prompter.text(field.label(), &current),
    }
}

fn report_errors(wizard: &SignupWizard) {
    for (_, message) in wizard.visible_errors() {
        output::error(message);
    }
}
