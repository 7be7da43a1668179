//! Field command definitions.

use crate::commands::params::{
    acres_parameter, boundary_parameter, id_parameter, json_parameter, limit_parameter,
    name_parameter, COMMAND_CREATE, COMMAND_FIELDS, COMMAND_GET, COMMAND_LIST,
};
use clap::Command;

pub fn fields_command() -> Command {
    Command::new(COMMAND_FIELDS)
        .about("Work with fields")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List fields")
                .visible_alias("ls")
                .arg(limit_parameter())
                .arg(json_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get field details")
                .arg(id_parameter())
                .arg(json_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create a new field")
                .arg(name_parameter())
                .arg(acres_parameter())
                .arg(boundary_parameter())
                .arg(json_parameter()),
        )
}
