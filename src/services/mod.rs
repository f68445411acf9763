pub mod events;
pub mod models;
pub mod reservations;
pub mod store;
pub mod tables;
pub mod users;
