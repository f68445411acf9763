use std::cell::RefCell;
use std::rc::Rc;

use dotenv::dotenv;
use tracing::info;

use nnn_reservations::services::reservations::{ReservationManager, ReservationService};
use nnn_reservations::services::store::DataStore;
use nnn_reservations::services::tables::{TableManager, TableService};
use nnn_reservations::services::users::UserManager;
use nnn_reservations::settings::Settings;

type BoxError = Box<dyn std::error::Error>;

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nnn_reservations=info".into()),
        )
        .init();
}

fn main() -> Result<(), BoxError> {
    dotenv().ok();
    init_tracing();

    let settings = Settings::load()?;
    let store = DataStore::from_settings(&settings);
    let restaurant = Rc::new(RefCell::new(store.load_data()?));

    let mut users = UserManager::new();
    users.on_user_registered(|user| info!(username = %user.username, "Welcome"));

    let tables = TableManager::new(restaurant.clone());
    let mut reservations = ReservationManager::new(restaurant);
    reservations.on_reservation_confirmed(|reservation| {
        info!(
            reservation_id = reservation.reservation_id,
            username = %reservation.user.username,
            "Booking confirmed"
        );
    });

    info!(
        tables = tables.get_all_tables().len(),
        available = tables.get_available_tables().len(),
        reservations = reservations.get_all_reservations().len(),
        "Ledger ready"
    );

    Ok(())
}
