use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::services::models::{Restaurant, RestaurantTable};

pub type TableId = i64;
pub type ReservationId = i64;

/// Table shared between the restaurant's table list and the reservations booked on it.
pub type TableHandle = Rc<RefCell<RestaurantTable>>;

/// Aggregate shared by the table and reservation managers.
pub type SharedRestaurant = Rc<RefCell<Restaurant>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access data file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Data file is not a valid restaurant record: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
#[error("Unable to load settings: {0}")]
pub struct SettingsError(#[from] pub config::ConfigError);
