//! Command-line front end.
//!
//! ```sh
//! numclass-cli 7919
//! numclass-cli --mode armstrong 9474
//! numclass-cli --mode perfect -6
//! ```

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use numclass_core::{Category, Classification, DisplayMessage, InvalidInputError, try_classify};

use crate::version;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    #[default]
    Prime,
    Perfect,
    Armstrong,
}

impl From<Mode> for Category {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Prime => Self::Prime,
            Mode::Perfect => Self::Perfect,
            Mode::Armstrong => Self::Armstrong,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
pub struct Args {
    /// Category to test the number against.
    #[arg(short, long, value_name = "MODE", value_enum, default_value_t)]
    pub mode: Mode,

    /// Integer to classify.
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub number: String,
}

/// Classifies the requested number, keeping the parse error on failure.
pub fn classify_args(args: &Args) -> Result<Classification, InvalidInputError> {
    try_classify(&args.number, Category::from(args.mode))
}

/// Classifies the requested number, returning the message to print.
#[must_use]
pub fn run(args: &Args) -> DisplayMessage {
    match classify_args(args) {
        Ok(classification) => {
            log::debug!("classified {:?}: {classification}", args.number);
            DisplayMessage::Classified(classification)
        }
        Err(err) => {
            log::warn!("rejected input for {}: {err}", Category::from(args.mode));
            DisplayMessage::InvalidInput
        }
    }
}

/// Prints `message` and maps it to the process exit status.
pub fn report(message: &DisplayMessage) -> ExitCode {
    if message.is_invalid_input() {
        eprintln!("{message}");
        ExitCode::FAILURE
    } else {
        println!("{message}");
        ExitCode::SUCCESS
    }
}
