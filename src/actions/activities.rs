//! Harvest and planting activity action implementations.
//!
//! Both activity kinds carry the same summary attributes (crop, area,
//! timestamps), so the rendering is shared and only the API call differs.

use clap::ArgMatches;

use crate::{
    actions::{require_api_key, utils, CliActionError},
    api::ApiClient,
    commands::params::{PARAMETER_ID, PARAMETER_JSON, PARAMETER_LIMIT},
    configuration::Configuration,
    format::{self, Column, OutputFormat},
};

const LIST_COLUMNS: [Column; 5] = [
    Column::new("id", "ID"),
    Column::new("crop", "CROP"),
    Column::with_formatter("area", "AREA", format::format_area),
    Column::with_formatter("startDate", "START DATE", format::format_date),
    Column::with_formatter("endDate", "END DATE", format::format_date),
];

const DETAIL_LABELS: [(&str, &str); 6] = [
    ("Activity ID", "id"),
    ("Crop", "crop"),
    ("Area", "area"),
    ("Field ID", "fieldId"),
    ("Start Date", "startDate"),
    ("End Date", "endDate"),
];

pub async fn list_harvest(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let limit = sub_matches.get_one::<u32>(PARAMETER_LIMIT).copied();
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration)
        .list_harvest_activities(limit)
        .await?;
    utils::print_list(&response, &LIST_COLUMNS, format)
}

pub async fn get_harvest(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let id = sub_matches.get_one::<String>(PARAMETER_ID).unwrap(); // safe, the argument is mandatory
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration).get_harvest_activity(id).await?;
    utils::print_detail(&response, &DETAIL_LABELS, format)
}

pub async fn list_planting(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let limit = sub_matches.get_one::<u32>(PARAMETER_LIMIT).copied();
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration)
        .list_planting_activities(limit)
        .await?;
    utils::print_list(&response, &LIST_COLUMNS, format)
}

pub async fn get_planting(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let id = sub_matches.get_one::<String>(PARAMETER_ID).unwrap(); // safe, the argument is mandatory
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration)
        .get_planting_activity(id)
        .await?;
    utils::print_detail(&response, &DETAIL_LABELS, format)
}
