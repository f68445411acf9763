use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::services::models::Restaurant;
use crate::settings::Settings;
use crate::types::StoreError;

/// Whole-file JSON persistence for the restaurant.
///
/// Reservations are stored with their user and table embedded. On load those tables are
/// rebuilt from the embedded objects and are not linked back to the restaurant's table list.
#[derive(Debug, Clone)]
pub struct DataStore {
    path: PathBuf,
}

impl DataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.data_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty restaurant when the file does not exist yet.
    pub fn load_data(&self) -> Result<Restaurant, StoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No data file, starting empty");
            return Ok(Restaurant::default());
        }

        let json = fs::read_to_string(&self.path)?;
        let restaurant: Restaurant = serde_json::from_str(&json)?;

        info!(
            path = %self.path.display(),
            tables = restaurant.tables.len(),
            reservations = restaurant.reservations.len(),
            "Restaurant loaded"
        );
        Ok(restaurant)
    }

    /// Overwrites the file in place.
    pub fn save_data(&self, restaurant: &Restaurant) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(restaurant)?;
        fs::write(&self.path, json)?;

        info!(
            path = %self.path.display(),
            tables = restaurant.tables.len(),
            reservations = restaurant.reservations.len(),
            "Restaurant saved"
        );
        Ok(())
    }
}
