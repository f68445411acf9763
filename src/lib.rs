//! Restaurant table-reservation ledger.
//!
//! A [`Restaurant`](services::models::Restaurant) holds the tables and the reservations made on
//! them. [`TableManager`](services::tables::TableManager) and
//! [`ReservationManager`](services::reservations::ReservationManager) share one restaurant and
//! keep each table's availability flag in step with bookings;
//! [`UserManager`](services::users::UserManager) keeps the registered users. The whole
//! restaurant is loaded from and saved to a single JSON file by
//! [`DataStore`](services::store::DataStore).

pub mod services;
pub mod settings;
pub mod types;
