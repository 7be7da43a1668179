//! Command handler implementations.
//!
//! Each submodule handles one command group: it reads typed options out of
//! the parsed arguments, performs the single API call, and prints the
//! rendered result. Errors bubble up to the dispatcher unchanged.

use crate::configuration::Configuration;
use thiserror::Error;

pub mod activities;
pub mod boundaries;
pub mod config;
pub mod farms;
pub mod fields;
pub mod utils;

#[derive(Debug, Error)]
pub enum CliActionError {
    #[error("{0}")]
    ApiError(#[from] crate::api::ApiError),

    #[error("{0}")]
    ConfigurationError(#[from] crate::configuration::ConfigurationError),

    #[error("{0}")]
    FormattingError(#[from] crate::format::FormattingError),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("No API key configured. Run 'agcli config set api-key <your-key>' to get started.")]
    NotConfigured,
}

/// Fails with the fixed configuration-required message when no API key has
/// been set. Called before any network I/O.
pub fn require_api_key(configuration: &Configuration) -> Result<(), CliActionError> {
    if configuration.is_configured() {
        Ok(())
    } else {
        Err(CliActionError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_is_rejected_locally() {
        let configuration = Configuration::default();
        assert!(matches!(
            require_api_key(&configuration),
            Err(CliActionError::NotConfigured)
        ));
    }

    #[test]
    fn configured_key_passes() {
        let mut configuration = Configuration::default();
        configuration.api_key = "k-123".to_string();
        assert!(require_api_key(&configuration).is_ok());
    }
}
