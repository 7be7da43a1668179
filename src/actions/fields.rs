//! Field action implementations.

use clap::ArgMatches;
use tracing::debug;

use crate::{
    actions::{require_api_key, utils, CliActionError},
    api::ApiClient,
    commands::params::{
        PARAMETER_ACRES, PARAMETER_BOUNDARY, PARAMETER_ID, PARAMETER_JSON, PARAMETER_LIMIT,
        PARAMETER_NAME,
    },
    configuration::Configuration,
    format::{self, Column, OutputFormat, MISSING_VALUE},
    model,
};

const LIST_COLUMNS: [Column; 4] = [
    Column::new("id", "ID"),
    Column::new("name", "NAME"),
    Column::with_formatter("acres", "ACRES", format::format_area),
    Column::new("farmId", "FARM ID"),
];

const DETAIL_LABELS: [(&str, &str); 4] = [
    ("Field ID", "id"),
    ("Name", "name"),
    ("Acres", "acres"),
    ("Farm ID", "farmId"),
];

pub async fn list(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let limit = sub_matches.get_one::<u32>(PARAMETER_LIMIT).copied();
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration).list_fields(limit).await?;
    utils::print_list(&response, &LIST_COLUMNS, format)
}

pub async fn get(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let id = sub_matches.get_one::<String>(PARAMETER_ID).unwrap(); // safe, the argument is mandatory
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    let response = ApiClient::new(configuration).get_field(id).await?;
    utils::print_detail(&response, &DETAIL_LABELS, format)
}

pub async fn create(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    require_api_key(configuration)?;
    let name = sub_matches.get_one::<String>(PARAMETER_NAME).unwrap(); // safe, the argument is mandatory
    let acres = sub_matches.get_one::<f64>(PARAMETER_ACRES).copied();
    let boundary = sub_matches
        .get_one::<String>(PARAMETER_BOUNDARY)
        .map(String::as_str);
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));

    debug!("Creating field {:?}...", name);
    let response = ApiClient::new(configuration)
        .create_field(name, acres, boundary)
        .await?;

    match format {
        OutputFormat::Json => println!("{}", format::to_pretty_json(&response)?),
        OutputFormat::Table => {
            let created_name =
                model::record_text(&response, "name").unwrap_or_else(|| name.clone());
            let created_id = model::record_text(&response, "id")
                .unwrap_or_else(|| MISSING_VALUE.to_string());
            println!("Field created: {}", created_name);
            println!("Field ID:  {}", created_id);
        }
    }
    Ok(())
}
