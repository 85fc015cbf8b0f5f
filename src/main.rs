mod cli_args;
mod config;
mod error;
mod git;
mod llm;
mod locale;
mod logging;
mod pipeline;
mod process;
mod setup;
mod style;
mod validate;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;

use crate::cli_args::{Cli, Command};
use crate::config::Settings;
use crate::error::GcaiError;
use crate::git::GitCli;
use crate::llm::catalog::OllamaCli;

fn generate(cli: &Cli) -> Result<String, GcaiError> {
    let settings = Settings::from_sources(cli);
    log::debug!("Resolved settings: {settings:?}");

    let config = validate::validate_config(&settings, &OllamaCli)?;
    log::info!(
        "Generating a {} commit message in {} with {}",
        config.style,
        config.locale.display_name(),
        config.model
    );

    let client = setup::build_inference_client(&config)?;
    pipeline::run_generate(&config, &OllamaCli, &GitCli, client.as_ref())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit 1 like every other fatal error.
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };
    logging::init_logger(cli.verbose);

    match &cli.command {
        Some(Command::Generate) => match generate(&cli) {
            Ok(body) => {
                println!("{body}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("{e}");
                ExitCode::FAILURE
            }
        },
        None => {
            if let Err(e) = Cli::command().print_help() {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}
