//! Boundary command definitions.

use crate::commands::params::{
    id_parameter, json_parameter, limit_parameter, COMMAND_BOUNDARIES, COMMAND_GET, COMMAND_LIST,
};
use clap::Command;

pub fn boundaries_command() -> Command {
    Command::new(COMMAND_BOUNDARIES)
        .about("Work with field boundaries")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List boundaries")
                .visible_alias("ls")
                .arg(limit_parameter())
                .arg(json_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get boundary details")
                .arg(id_parameter())
                .arg(json_parameter()),
        )
}
