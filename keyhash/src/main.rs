// SPDX-License-Identifier: MIT
//
// Copyright IBM Corp. 2026
//
//! keyhash - print the Facebook key hash of an Android signing certificate
//

mod cli;
mod config;
mod digest;
mod error;
mod keytool;
mod report;
mod reporter;

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches};
use cli::{CliOptions, Format};
use config::KeystoreConfig;
use error::KeyHashExitCode;
use keytool::Keytool;
use log::trace;
use report::Outcome;
use reporter::KeyHashReporter;
use std::io::Write;
use std::process::ExitCode;
use utils::{print_cli_error, print_version, ExitCodeTrait, StderrLogger};

static LOGGER: StderrLogger = StderrLogger;

fn write_report(outcome: &Outcome, format: Format) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    match format {
        Format::Human => outcome.write_human(&mut out),
        Format::Json => outcome.write_json(&mut out),
    }
    .and_then(|()| out.flush())
    .context("Cannot write the report to stdout")
}

fn main() -> ExitCode {
    let mut cmd =
        CliOptions::command().after_long_help(KeyHashExitCode::exit_code_doc().to_string());
    let cli = match cmd
        .try_get_matches_from_mut(std::env::args_os())
        .and_then(|m| CliOptions::from_arg_matches(&m))
    {
        Ok(cli) => cli,
        Err(e) => return print_cli_error(e, cmd),
    };

    // set up logger/stderr
    let log_level = cli.verbosity.to_level_filter();
    if let Err(e) = LOGGER.start(log_level) {
        // should(TM) never happen
        eprintln!("Logger error: {e:?}");
        return KeyHashExitCode::LoggerError.into();
    }

    // NOTE trace verbosity is disabled in release builds
    trace!("Trace verbosity, may leak secrets to command-line");
    trace!("Options {cli:?}");

    if cli.version {
        print_version!("2026", log_level);
        return ExitCode::SUCCESS;
    }

    let outcome = match KeystoreConfig::from_cli(&cli) {
        Ok(config) => {
            trace!("Config {config:?}");
            KeyHashReporter::new(&config, Keytool).run()
        }
        Err(e) => Outcome::Failed(e),
    };

    match write_report(&outcome, cli.format) {
        Ok(()) => outcome.exit_code().into(),
        Err(e) => {
            eprintln!("error: {e:?}");
            KeyHashExitCode::GenericError.into()
        }
    }
}
