use agcli::actions::{self, CliActionError};
use agcli::commands::create_cli_commands;
use agcli::commands::params::{
    COMMAND_BOUNDARIES, COMMAND_CLEAR, COMMAND_CONFIG, COMMAND_CREATE, COMMAND_FARMS,
    COMMAND_FIELDS, COMMAND_GET, COMMAND_HARVEST, COMMAND_LIST, COMMAND_PATH, COMMAND_PLANTING,
    COMMAND_SET, COMMAND_SHOW,
};
use agcli::configuration::Configuration;
use clap::ArgMatches;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Undefined or unsupported subcommand")]
    UnsupportedSubcommand(String),
    #[error("{0}")]
    ActionError(#[from] CliActionError),
}

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    let name = match sub_matches.subcommand() {
        Some(m) => m.0,
        None => "unknown",
    };

    name.to_string()
}

/// Routes each parsed subcommand to exactly one action handler.
pub async fn execute_command(mut configuration: Configuration) -> Result<(), CliError> {
    let commands = create_cli_commands();

    match commands.subcommand() {
        // Configuration
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_SET, sub_matches)) => {
                Ok(actions::config::set(&mut configuration, sub_matches)?)
            }
            Some((COMMAND_SHOW, sub_matches)) => {
                Ok(actions::config::show(&configuration, sub_matches)?)
            }
            Some((COMMAND_CLEAR, _)) => Ok(actions::config::clear(&mut configuration)?),
            Some((COMMAND_PATH, _)) => Ok(actions::config::path()?),
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        // Fields
        Some((COMMAND_FIELDS, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::fields::list(&configuration, sub_matches).await?)
            }
            Some((COMMAND_GET, sub_matches)) => {
                Ok(actions::fields::get(&configuration, sub_matches).await?)
            }
            Some((COMMAND_CREATE, sub_matches)) => {
                Ok(actions::fields::create(&configuration, sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        // Farms
        Some((COMMAND_FARMS, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::farms::list(&configuration, sub_matches).await?)
            }
            Some((COMMAND_GET, sub_matches)) => {
                Ok(actions::farms::get(&configuration, sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        // Boundaries
        Some((COMMAND_BOUNDARIES, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::boundaries::list(&configuration, sub_matches).await?)
            }
            Some((COMMAND_GET, sub_matches)) => {
                Ok(actions::boundaries::get(&configuration, sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        // Harvest activity summaries
        Some((COMMAND_HARVEST, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::activities::list_harvest(&configuration, sub_matches).await?)
            }
            Some((COMMAND_GET, sub_matches)) => {
                Ok(actions::activities::get_harvest(&configuration, sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        // Planting activity summaries
        Some((COMMAND_PLANTING, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_LIST, sub_matches)) => {
                Ok(actions::activities::list_planting(&configuration, sub_matches).await?)
            }
            Some((COMMAND_GET, sub_matches)) => {
                Ok(actions::activities::get_planting(&configuration, sub_matches).await?)
            }
            None => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
            _ => unreachable!(),
        },
        None => Err(CliError::UnsupportedSubcommand(String::from("unknown"))),
        _ => unreachable!(),
    }
}
