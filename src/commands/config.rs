//! Configuration command definitions.

use crate::commands::params::{
    json_parameter, key_parameter, value_parameter, COMMAND_CLEAR, COMMAND_CONFIG, COMMAND_PATH,
    COMMAND_SET, COMMAND_SHOW,
};
use clap::Command;

pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Manage client configuration")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Set a configuration property")
                .arg(key_parameter())
                .arg(value_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_SHOW)
                .about("Display the current configuration")
                .arg(json_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_CLEAR).about("Reset the configuration to its defaults"),
        )
        .subcommand(Command::new(COMMAND_PATH).about("Print the configuration file path"))
}
