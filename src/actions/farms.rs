//! Farm action implementations.

use clap::ArgMatches;

use crate::{
    actions::{require_api_key, utils, CliActionError},
    api::ApiClient,
    commands::params::{PARAMETER_ID, PARAMETER_JSON, PARAMETER_LIMIT},
    configuration::Configuration,
    format::{Column, OutputFormat},
};

const LIST_COLUMNS: [Column; 2] = [Column::new("id", "ID"), Column::new("name", "NAME")];

const DETAIL_LABELS: [(&str, &str); 2] = [("Farm ID", "id"), ("Name", "name")];

pub async fn list(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let limit = sub_matches.get_one::<u32>(PARAMETER_LIMIT).copied();
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration).list_farms(limit).await?;
    utils::print_list(&response, &LIST_COLUMNS, format)
}

pub async fn get(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let id = sub_matches.get_one::<String>(PARAMETER_ID).unwrap(); // safe, the argument is mandatory
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration).get_farm(id).await?;
    utils::print_detail(&response, &DETAIL_LABELS, format)
}
