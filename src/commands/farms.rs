//! Farm command definitions.

use crate::commands::params::{
    id_parameter, json_parameter, limit_parameter, COMMAND_FARMS, COMMAND_GET, COMMAND_LIST,
};
use clap::Command;

pub fn farms_command() -> Command {
    Command::new(COMMAND_FARMS)
        .about("Work with farms")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List farms")
                .visible_alias("ls")
                .arg(limit_parameter())
                .arg(json_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get farm details")
                .arg(id_parameter())
                .arg(json_parameter()),
        )
}
