//! Harvest and planting activity command definitions.
//!
//! The two groups share a shape: activity summaries are read-only, so each
//! offers only `list` and `get`.

use crate::commands::params::{
    id_parameter, json_parameter, limit_parameter, COMMAND_GET, COMMAND_HARVEST, COMMAND_LIST,
    COMMAND_PLANTING,
};
use clap::Command;

pub fn harvest_command() -> Command {
    activity_command(COMMAND_HARVEST, "Work with harvest activity summaries")
}

pub fn planting_command() -> Command {
    activity_command(COMMAND_PLANTING, "Work with planting activity summaries")
}

fn activity_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List activity summaries")
                .visible_alias("ls")
                .arg(limit_parameter())
                .arg(json_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get activity summary details")
                .arg(id_parameter())
                .arg(json_parameter()),
        )
}
