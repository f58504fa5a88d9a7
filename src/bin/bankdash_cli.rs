use std::{env, process};

use bankdash_core::{
    cli::{login, signup, Prompter},
    init,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| {
        print_usage();
        process::exit(1);
    });

    let prompter = Prompter::from_env();
    match command.as_str() {
        "signup" => signup::run(&prompter)?,
        "login" => login::run(&prompter)?,
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
    Ok(())
}

fn print_usage() {
    println!("BankDash CLI");
    println!();
    println!("Usage: bankdash_cli <command>");
    println!();
    println!("Commands:");
    println!("  signup    Create an account via the step-by-step wizard");
    println!("  login     Sign in and store the issued token pair");
    println!("  help      Show this message");
    println!();
    println!(
        "Set BANKDASH_CLI_SCRIPT=1 to read prompt answers from stdin (\":back\" and \":cancel\" navigate)."
    );
    println!("Set BANKDASH_API_URL to override the API base URL.");
}
