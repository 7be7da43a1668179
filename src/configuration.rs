//! Configuration management for the AgroView CLI client.
//!
//! Settings are persisted as a YAML file under the platform configuration
//! directory. The location can be overridden with the `AGCLI_CONFIG_DIR`
//! environment variable, which is also how the integration tests isolate
//! themselves from a developer's real configuration.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "agcli";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const DEFAULT_BASE_URL: &str = "https://api.agroview.io";

/// A cached access token counts as valid only while its expiry is at least
/// this far in the future.
pub const TOKEN_EXPIRY_MARGIN_MILLIS: u64 = 60_000;

pub const KEY_API_KEY: &str = "api-key";
pub const KEY_CLIENT_ID: &str = "client-id";
pub const KEY_CLIENT_SECRET: &str = "client-secret";
pub const KEY_ACCESS_TOKEN: &str = "access-token";
pub const KEY_TOKEN_EXPIRY: &str = "token-expiry";
pub const KEY_BASE_URL: &str = "base-url";

/// All property names accepted by `config set`.
pub const CONFIGURATION_KEYS: [&str; 6] = [
    KEY_API_KEY,
    KEY_CLIENT_ID,
    KEY_CLIENT_SECRET,
    KEY_ACCESS_TOKEN,
    KEY_TOKEN_EXPIRY,
    KEY_BASE_URL,
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause:?}")]
    FailedToLoadData { cause: Box<dyn std::error::Error> },
    #[error("failed to write configuration data to file, because of: {cause:?}")]
    FailedToWriteData { cause: Box<dyn std::error::Error> },
    #[error("unknown configuration property {name:?}")]
    UnknownProperty { name: String },
    #[error("invalid value for {name}: {cause}")]
    InvalidPropertyValue { name: String, cause: String },
}

/// The full set of client settings.
///
/// The on-disk representation uses camelCase names, matching what the
/// AgroView web console exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    pub api_key: String,
    pub client_id: String,
    pub client_secret: String,
    pub access_token: String,
    /// Expiry of `access_token` as epoch milliseconds; 0 when no token is cached.
    pub token_expiry: u64,
    pub base_url: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            client_id: String::new(),
            client_secret: String::new(),
            access_token: String::new(),
            token_expiry: 0,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Configuration {
    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        // Check for AGCLI_CONFIG_DIR environment variable first
        if let Ok(config_dir_str) = std::env::var("AGCLI_CONFIG_DIR") {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match dirs::config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);

                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    pub fn load_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {:?}...", default_file_path);
        Configuration::load_from_file(default_file_path)
    }

    /// Load the default configuration, creating one from the built-in
    /// defaults if none exists yet. First-time users get a working file
    /// instead of an error.
    pub fn load_or_create_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        match Configuration::load_from_file(default_file_path.clone()) {
            Ok(configuration) => Ok(configuration),
            Err(ConfigurationError::FailedToLoadData { cause })
                if cause
                    .downcast_ref::<std::io::Error>()
                    .map(|e| e.kind() == std::io::ErrorKind::NotFound)
                    .unwrap_or(false) =>
            {
                debug!("Configuration file not found, creating default configuration");
                let default_configuration = Configuration::default();
                default_configuration.save(&default_file_path)?;
                Ok(default_configuration)
            }
            Err(e) => Err(e),
        }
    }

    pub fn load_from_file(path: PathBuf) -> Result<Configuration, ConfigurationError> {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(configuration) => Ok(configuration),
                Err(cause) => Err(ConfigurationError::FailedToLoadData {
                    cause: Box::new(cause),
                }),
            },
            Err(cause) => Err(ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            }),
        }
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        match serde_yaml::to_writer(writer, self) {
            Ok(()) => Ok(()),
            Err(e) => Err(ConfigurationError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save(&self, path: &PathBuf) -> Result<(), ConfigurationError> {
        // first check if the parent directory exists and try to create it if not
        match path.parent() {
            Some(parent) => {
                if fs::create_dir_all(parent).is_err() {
                    return Err(ConfigurationError::FailedToFindConfigurationDirectory);
                }
            }
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        match File::create(path) {
            Ok(file) => {
                let writer: Box<dyn Write> = Box::new(file);
                self.write(writer)
            }
            Err(e) => Err(ConfigurationError::FailedToWriteData { cause: Box::new(e) }),
        }
    }

    pub fn save_to_default(&self) -> Result<(), ConfigurationError> {
        self.save(&Self::get_default_configuration_file_path()?)
    }

    /// Returns the current value of a property by its `config set` name.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigurationError> {
        match key {
            KEY_API_KEY => Ok(self.api_key.clone()),
            KEY_CLIENT_ID => Ok(self.client_id.clone()),
            KEY_CLIENT_SECRET => Ok(self.client_secret.clone()),
            KEY_ACCESS_TOKEN => Ok(self.access_token.clone()),
            KEY_TOKEN_EXPIRY => Ok(self.token_expiry.to_string()),
            KEY_BASE_URL => Ok(self.base_url.clone()),
            _ => Err(ConfigurationError::UnknownProperty {
                name: key.to_string(),
            }),
        }
    }

    /// Updates a property by its `config set` name.
    ///
    /// `token-expiry` must parse as epoch milliseconds and `base-url` must be
    /// a valid absolute URL; everything else is stored as given.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigurationError> {
        match key {
            KEY_API_KEY => self.api_key = value.to_string(),
            KEY_CLIENT_ID => self.client_id = value.to_string(),
            KEY_CLIENT_SECRET => self.client_secret = value.to_string(),
            KEY_ACCESS_TOKEN => self.access_token = value.to_string(),
            KEY_TOKEN_EXPIRY => {
                self.token_expiry =
                    value
                        .parse::<u64>()
                        .map_err(|e| ConfigurationError::InvalidPropertyValue {
                            name: key.to_string(),
                            cause: e.to_string(),
                        })?
            }
            KEY_BASE_URL => {
                let url =
                    Url::parse(value).map_err(|e| ConfigurationError::InvalidPropertyValue {
                        name: key.to_string(),
                        cause: e.to_string(),
                    })?;
                self.base_url = url.to_string().trim_end_matches('/').to_string();
            }
            _ => {
                return Err(ConfigurationError::UnknownProperty {
                    name: key.to_string(),
                })
            }
        }
        Ok(())
    }

    /// Resets every property to its default value.
    pub fn clear(&mut self) {
        *self = Configuration::default();
    }

    /// True once an API key has been set; every authenticated command
    /// requires this before issuing any request.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    pub fn has_valid_token(&self) -> bool {
        let now_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.has_valid_token_at(now_millis)
    }

    /// True iff a token is cached and its expiry is more than the freshness
    /// margin past `now_millis`.
    pub fn has_valid_token_at(&self, now_millis: u64) -> bool {
        !self.access_token.is_empty()
            && self.token_expiry > now_millis + TOKEN_EXPIRY_MARGIN_MILLIS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty_except_base_url() {
        let configuration = Configuration::default();
        assert_eq!(configuration.api_key, "");
        assert_eq!(configuration.client_id, "");
        assert_eq!(configuration.client_secret, "");
        assert_eq!(configuration.access_token, "");
        assert_eq!(configuration.token_expiry, 0);
        assert_eq!(configuration.base_url, DEFAULT_BASE_URL);
        assert!(!configuration.is_configured());
    }

    #[test]
    fn set_and_get_round_trip_every_key() {
        let mut configuration = Configuration::default();
        configuration.set_value(KEY_API_KEY, "k-123").unwrap();
        configuration.set_value(KEY_CLIENT_ID, "client").unwrap();
        configuration.set_value(KEY_CLIENT_SECRET, "secret").unwrap();
        configuration.set_value(KEY_ACCESS_TOKEN, "token").unwrap();
        configuration
            .set_value(KEY_TOKEN_EXPIRY, "1700000000000")
            .unwrap();
        configuration
            .set_value(KEY_BASE_URL, "https://sandbox.agroview.io")
            .unwrap();

        assert_eq!(configuration.get_value(KEY_API_KEY).unwrap(), "k-123");
        assert_eq!(configuration.get_value(KEY_CLIENT_ID).unwrap(), "client");
        assert_eq!(
            configuration.get_value(KEY_CLIENT_SECRET).unwrap(),
            "secret"
        );
        assert_eq!(configuration.get_value(KEY_ACCESS_TOKEN).unwrap(), "token");
        assert_eq!(
            configuration.get_value(KEY_TOKEN_EXPIRY).unwrap(),
            "1700000000000"
        );
        assert_eq!(
            configuration.get_value(KEY_BASE_URL).unwrap(),
            "https://sandbox.agroview.io"
        );
        assert!(configuration.is_configured());
    }

    #[test]
    fn token_expiry_must_be_numeric() {
        let mut configuration = Configuration::default();
        let result = configuration.set_value(KEY_TOKEN_EXPIRY, "tomorrow");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPropertyValue { .. })
        ));
    }

    #[test]
    fn base_url_must_parse() {
        let mut configuration = Configuration::default();
        let result = configuration.set_value(KEY_BASE_URL, "not a url");
        assert!(matches!(
            result,
            Err(ConfigurationError::InvalidPropertyValue { .. })
        ));
    }

    #[test]
    fn unknown_property_is_rejected() {
        let mut configuration = Configuration::default();
        assert!(matches!(
            configuration.set_value("color-scheme", "dark"),
            Err(ConfigurationError::UnknownProperty { .. })
        ));
        assert!(matches!(
            configuration.get_value("color-scheme"),
            Err(ConfigurationError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn token_validity_respects_margin() {
        let now = 1_700_000_000_000u64;
        let mut configuration = Configuration::default();

        // no token cached
        assert!(!configuration.has_valid_token_at(now));

        configuration.access_token = "token".to_string();

        // expiry exactly at the margin boundary does not count
        configuration.token_expiry = now + TOKEN_EXPIRY_MARGIN_MILLIS;
        assert!(!configuration.has_valid_token_at(now));

        configuration.token_expiry = now + TOKEN_EXPIRY_MARGIN_MILLIS + 1;
        assert!(configuration.has_valid_token_at(now));

        configuration.token_expiry = now - 1;
        assert!(!configuration.has_valid_token_at(now));
    }

    #[test]
    fn clear_resets_to_defaults() {
        let mut configuration = Configuration::default();
        configuration.set_value(KEY_API_KEY, "k-123").unwrap();
        configuration
            .set_value(KEY_BASE_URL, "https://sandbox.agroview.io")
            .unwrap();
        configuration.clear();
        assert_eq!(configuration, Configuration::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let directory = tempfile::tempdir().unwrap();
        let mut path = directory.path().to_path_buf();
        path.push(DEFAULT_CONFIGURATION_FILE_NAME);

        let mut configuration = Configuration::default();
        configuration.set_value(KEY_API_KEY, "k-123").unwrap();
        configuration.set_value(KEY_TOKEN_EXPIRY, "42").unwrap();
        configuration.save(&path).unwrap();

        let loaded = Configuration::load_from_file(path).unwrap();
        assert_eq!(loaded, configuration);
    }
}
