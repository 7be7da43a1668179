//! Boundary action implementations.

use clap::ArgMatches;

use crate::{
    actions::{require_api_key, utils, CliActionError},
    api::ApiClient,
    commands::params::{PARAMETER_ID, PARAMETER_JSON, PARAMETER_LIMIT},
    configuration::Configuration,
    format::{self, Column, OutputFormat},
};

const LIST_COLUMNS: [Column; 4] = [
    Column::new("id", "ID"),
    Column::new("name", "NAME"),
    Column::new("fieldId", "FIELD ID"),
    Column::with_formatter("createdTime", "CREATED", format::format_date),
];

const DETAIL_LABELS: [(&str, &str); 4] = [
    ("Boundary ID", "id"),
    ("Name", "name"),
    ("Field ID", "fieldId"),
    ("Created", "createdTime"),
];

pub async fn list(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let limit = sub_matches.get_one::<u32>(PARAMETER_LIMIT).copied();
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration).list_boundaries(limit).await?;
    utils::print_list(&response, &LIST_COLUMNS, format)
}

pub async fn get(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let id = sub_matches.get_one::<String>(PARAMETER_ID).unwrap(); // safe, the argument is mandatory
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration).get_boundary(id).await?;
    utils::print_detail(&response, &DETAIL_LABELS, format)
}
