use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::types::SettingsError;

pub const DEFAULT_DATA_PATH: &str = "restaurant_data.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// JSON file holding the whole restaurant.
    pub data_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Settings {
    /// Defaults, then an optional `nnn.*` config file, then `NNN_*` environment variables.
    pub fn load() -> Result<Self, SettingsError> {
        let config = Config::builder()
            .set_default("data_path", DEFAULT_DATA_PATH)?
            .add_source(File::with_name("nnn").required(false))
            .add_source(Environment::with_prefix("NNN"))
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        Ok(config.try_deserialize()?)
    }
}
