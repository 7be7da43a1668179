//! Configuration action implementations.
//!
//! These handlers never touch the network; they read and write the local
//! settings store only.

use clap::ArgMatches;
use tracing::debug;

use crate::{
    actions::CliActionError,
    commands::params::{PARAMETER_JSON, PARAMETER_KEY, PARAMETER_VALUE},
    configuration::Configuration,
    format::{self, OutputFormat},
};

pub fn set(
    configuration: &mut Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let key = sub_matches.get_one::<String>(PARAMETER_KEY).unwrap(); // safe, the argument is mandatory
    let value = sub_matches.get_one::<String>(PARAMETER_VALUE).unwrap(); // safe, the argument is mandatory

    debug!("Setting configuration property {}...", key);
    configuration.set_value(key, value)?;
    configuration.save_to_default()?;
    Ok(())
}

pub fn show(
    configuration: &Configuration,
    sub_matches: &ArgMatches,
) -> Result<(), CliActionError> {
    let format = OutputFormat::from_json_flag(sub_matches.get_flag(PARAMETER_JSON));
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                format::to_pretty_json(&serde_json::to_value(configuration)?)?
            );
        }
        OutputFormat::Table => {
            print!("{}", serde_yaml::to_string(configuration)?);
            println!("tokenStatus: {}", token_status(configuration));
        }
    }
    Ok(())
}

pub fn clear(configuration: &mut Configuration) -> Result<(), CliActionError> {
    configuration.clear();
    configuration.save_to_default()?;
    Ok(())
}

pub fn path() -> Result<(), CliActionError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

fn token_status(configuration: &Configuration) -> &'static str {
    if configuration.access_token.is_empty() {
        "none"
    } else if configuration.has_valid_token() {
        "valid"
    } else {
        "expired"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_status_reflects_cache_state() {
        let mut configuration = Configuration::default();
        assert_eq!(token_status(&configuration), "none");

        configuration.access_token = "token".to_string();
        configuration.token_expiry = 0;
        assert_eq!(token_status(&configuration), "expired");

        configuration.token_expiry = u64::MAX;
        assert_eq!(token_status(&configuration), "valid");
    }
}
