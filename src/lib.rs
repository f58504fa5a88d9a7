#![doc(test(attr(deny(warnings))))]

//! BankDash Core provides the signup wizard state machine, validation schema,
//! and auth API client that power the BankDash onboarding flows and CLI.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod signup;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("BankDash Core tracing initialized.");
    });
}
