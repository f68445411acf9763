use tracing::{debug, info};

use crate::services::events::{EventHub, ListenerId};
use crate::services::models::Reservation;
use crate::types::{ReservationId, SharedRestaurant};

pub trait ReservationService {
    /// Records the reservation as given, notifies "reservation confirmed" listeners and then
    /// marks the reserved table unavailable.
    ///
    /// Nothing is checked here: overlapping bookings, unknown table ids and undersized tables
    /// are all accepted. Use [`TableService`](crate::services::tables::TableService) queries
    /// before booking. A panicking listener unwinds out of this call with the reservation
    /// already recorded and the table flag untouched.
    fn make_reservation(&mut self, reservation: Reservation);

    /// Removes the first reservation with `reservation_id` and frees its table.
    /// Silently ignores an unknown id.
    fn cancel_reservation(&mut self, reservation_id: ReservationId);

    /// Snapshot of the current reservations. Their table handles stay live.
    fn get_all_reservations(&self) -> Vec<Reservation>;
}

#[derive(Debug)]
pub struct ReservationManager {
    restaurant: SharedRestaurant,
    reservation_confirmed: EventHub<Reservation>,
}

impl ReservationManager {
    pub fn new(restaurant: SharedRestaurant) -> Self {
        Self {
            restaurant,
            reservation_confirmed: EventHub::new(),
        }
    }

    pub fn on_reservation_confirmed(
        &mut self,
        listener: impl Fn(&Reservation) + 'static,
    ) -> ListenerId {
        self.reservation_confirmed.on(listener)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.reservation_confirmed.off(id)
    }
}

impl ReservationService for ReservationManager {
    fn make_reservation(&mut self, reservation: Reservation) {
        let table_id = reservation.table_id();
        self.restaurant
            .borrow_mut()
            .reservations
            .push(reservation.clone());

        info!(
            reservation_id = reservation.reservation_id,
            table_id,
            time = %reservation.reservation_time,
            "Reservation confirmed"
        );
        // The aggregate is not borrowed here, listeners may query it.
        self.reservation_confirmed.emit(&reservation);

        let found = self
            .restaurant
            .borrow()
            .set_table_availability(table_id, false);
        if !found {
            debug!(table_id, "Reserved table is not part of the restaurant");
        }
    }

    fn cancel_reservation(&mut self, reservation_id: ReservationId) {
        let removed = {
            let mut restaurant = self.restaurant.borrow_mut();
            restaurant
                .reservations
                .iter()
                .position(|r| r.reservation_id == reservation_id)
                .map(|index| restaurant.reservations.remove(index))
        };

        match removed {
            Some(reservation) => {
                let table_id = reservation.table_id();
                self.restaurant
                    .borrow()
                    .set_table_availability(table_id, true);
                info!(reservation_id, table_id, "Reservation cancelled");
            }
            None => debug!(reservation_id, "No reservation to cancel"),
        }
    }

    fn get_all_reservations(&self) -> Vec<Reservation> {
        self.restaurant.borrow().reservations.clone()
    }
}
