//! Shared command and parameter definitions.
//!
//! All command and parameter names are defined here as constants so the
//! dispatcher and the handlers refer to the same strings as the builders.

use crate::configuration::CONFIGURATION_KEYS;
use clap::{Arg, ArgAction};

pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_FIELDS: &str = "fields";
pub const COMMAND_FARMS: &str = "farms";
pub const COMMAND_BOUNDARIES: &str = "boundaries";
pub const COMMAND_HARVEST: &str = "harvest";
pub const COMMAND_PLANTING: &str = "planting";

pub const COMMAND_LIST: &str = "list";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_SET: &str = "set";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_CLEAR: &str = "clear";
pub const COMMAND_PATH: &str = "path";

pub const PARAMETER_JSON: &str = "json";
pub const PARAMETER_LIMIT: &str = "limit";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_KEY: &str = "key";
pub const PARAMETER_VALUE: &str = "value";
pub const PARAMETER_NAME: &str = "name";
pub const PARAMETER_ACRES: &str = "acres";
pub const PARAMETER_BOUNDARY: &str = "boundary";

pub fn json_parameter() -> Arg {
    Arg::new(PARAMETER_JSON)
        .long(PARAMETER_JSON)
        .action(ArgAction::SetTrue)
        .help("Print the response as pretty JSON")
}

pub fn limit_parameter() -> Arg {
    Arg::new(PARAMETER_LIMIT)
        .short('l')
        .long(PARAMETER_LIMIT)
        .num_args(1)
        .required(false)
        .default_value("50")
        .value_parser(clap::value_parser!(u32))
        .help("Maximum number of records to return")
}

pub fn id_parameter() -> Arg {
    Arg::new(PARAMETER_ID)
        .num_args(1)
        .required(true)
        .help("Resource identifier")
}

pub fn key_parameter() -> Arg {
    Arg::new(PARAMETER_KEY)
        .num_args(1)
        .required(true)
        .value_parser(CONFIGURATION_KEYS)
        .help("Configuration property to set")
}

pub fn value_parameter() -> Arg {
    Arg::new(PARAMETER_VALUE)
        .num_args(1)
        .required(true)
        .help("New value for the property")
}

pub fn name_parameter() -> Arg {
    Arg::new(PARAMETER_NAME)
        .short('n')
        .long(PARAMETER_NAME)
        .num_args(1)
        .required(true)
        .help("Field name")
}

pub fn acres_parameter() -> Arg {
    Arg::new(PARAMETER_ACRES)
        .short('a')
        .long(PARAMETER_ACRES)
        .num_args(1)
        .required(false)
        .value_parser(clap::value_parser!(f64))
        .help("Field size in acres")
}

pub fn boundary_parameter() -> Arg {
    Arg::new(PARAMETER_BOUNDARY)
        .short('b')
        .long(PARAMETER_BOUNDARY)
        .num_args(1)
        .required(false)
        .help("Field boundary as a GeoJSON polygon")
}
