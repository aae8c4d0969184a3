//! Number checker command-line application.
//!
//! Classifies a single integer and prints the verdict.

use std::process::ExitCode;

use clap::Parser as _;
use numclass_app::{cli, version};

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = cli::Args::parse();
    log::debug!("numclass-cli version={}", version::build_version());

    let message = cli::run(&args);
    cli::report(&message)
}
