//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the
//! clap crate, one file per command group.

use clap::{ArgMatches, Command};

pub mod activities;
pub mod boundaries;
pub mod config;
pub mod farms;
pub mod fields;
pub mod params;

/// Create and configure all CLI commands and their arguments.
///
/// # Returns
///
/// An `ArgMatches` instance containing the parsed command-line arguments.
pub fn create_cli_commands() -> ArgMatches {
    build_cli().get_matches()
}

/// The full command tree, separated from parsing so tests can inspect it.
pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(config::config_command())
        .subcommand(fields::fields_command())
        .subcommand(farms::farms_command())
        .subcommand(boundaries::boundaries_command())
        .subcommand(activities::harvest_command())
        .subcommand(activities::planting_command())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn every_resource_group_is_registered() {
        let cli = build_cli();
        let groups: Vec<&str> = cli.get_subcommands().map(|c| c.get_name()).collect();
        for group in [
            params::COMMAND_CONFIG,
            params::COMMAND_FIELDS,
            params::COMMAND_FARMS,
            params::COMMAND_BOUNDARIES,
            params::COMMAND_HARVEST,
            params::COMMAND_PLANTING,
        ] {
            assert!(groups.contains(&group), "missing command group {group}");
        }
    }
}
