use chrono::NaiveDateTime;
use tracing::debug;

use crate::types::{SharedRestaurant, TableHandle, TableId};

/// Availability queries over the restaurant's tables.
///
/// Every query returns handles to the restaurant's own tables in storage order. The returned
/// list is a snapshot of which tables matched; the state behind each handle stays live.
pub trait TableService {
    fn get_available_tables(&self) -> Vec<TableHandle>;

    /// Silently ignores an unknown `table_id`.
    fn update_table_availability(&self, table_id: TableId, is_available: bool);

    fn get_all_tables(&self) -> Vec<TableHandle>;

    /// Available tables seating at least `capacity`, not ordered by fit.
    fn get_tables_by_capacity(&self, capacity: i32) -> Vec<TableHandle>;

    /// Available tables seating at least `capacity` that also have no reservation at exactly
    /// `time`. The reservation check runs independently of the availability flag.
    fn get_available_tables_by_capacity_and_time(
        &self,
        capacity: i32,
        time: NaiveDateTime,
    ) -> Vec<TableHandle>;
}

#[derive(Debug, Clone)]
pub struct TableManager {
    restaurant: SharedRestaurant,
}

impl TableManager {
    pub fn new(restaurant: SharedRestaurant) -> Self {
        Self { restaurant }
    }

    fn filter_tables(&self, predicate: impl Fn(&TableHandle) -> bool) -> Vec<TableHandle> {
        self.restaurant
            .borrow()
            .tables
            .iter()
            .filter(|t| predicate(t))
            .cloned()
            .collect()
    }
}

impl TableService for TableManager {
    fn get_available_tables(&self) -> Vec<TableHandle> {
        self.filter_tables(|t| t.borrow().is_available)
    }

    fn update_table_availability(&self, table_id: TableId, is_available: bool) {
        let found = self
            .restaurant
            .borrow()
            .set_table_availability(table_id, is_available);
        if !found {
            debug!(table_id, "No table to update");
        }
    }

    fn get_all_tables(&self) -> Vec<TableHandle> {
        self.restaurant.borrow().tables.clone()
    }

    fn get_tables_by_capacity(&self, capacity: i32) -> Vec<TableHandle> {
        self.filter_tables(|t| {
            let table = t.borrow();
            table.capacity >= capacity && table.is_available
        })
    }

    fn get_available_tables_by_capacity_and_time(
        &self,
        capacity: i32,
        time: NaiveDateTime,
    ) -> Vec<TableHandle> {
        self.filter_tables(|t| {
            let table = t.borrow();
            table.capacity >= capacity
                && table.is_available
                && !self.restaurant.borrow().is_booked_at(table.table_id, time)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::NaiveDate;

    use super::*;
    use crate::services::models::{Reservation, Restaurant, RestaurantTable, User};

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 8)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn ids(tables: &[TableHandle]) -> Vec<TableId> {
        tables.iter().map(|t| t.borrow().table_id).collect()
    }

    fn setup(tables: Vec<RestaurantTable>) -> (SharedRestaurant, TableManager) {
        let restaurant = Rc::new(RefCell::new(Restaurant::new(tables)));
        let manager = TableManager::new(restaurant.clone());
        (restaurant, manager)
    }

    #[test]
    fn available_tables_keep_storage_order() {
        let (_, manager) = setup(vec![
            RestaurantTable::new(3, 2),
            RestaurantTable::new(1, 4),
            RestaurantTable {
                table_id: 2,
                capacity: 6,
                is_available: false,
            },
        ]);

        assert_eq!(ids(&manager.get_available_tables()), vec![3, 1]);
    }

    #[test]
    fn update_table_availability_flips_flag() {
        let (_, manager) = setup(vec![
            RestaurantTable::new(1, 2),
            RestaurantTable::new(2, 4),
        ]);

        manager.update_table_availability(1, false);
        assert_eq!(ids(&manager.get_available_tables()), vec![2]);

        manager.update_table_availability(1, true);
        assert_eq!(ids(&manager.get_available_tables()), vec![1, 2]);
    }

    #[test]
    fn update_unknown_table_changes_nothing() {
        let (restaurant, manager) = setup(vec![RestaurantTable::new(1, 2)]);
        let before = restaurant.borrow().clone();

        manager.update_table_availability(99, false);

        assert_eq!(*restaurant.borrow(), before);
    }

    #[test]
    fn all_tables_are_live_handles() {
        let (_, manager) = setup(vec![RestaurantTable::new(1, 2)]);
        let all = manager.get_all_tables();

        manager.update_table_availability(1, false);

        assert!(!all[0].borrow().is_available);
    }

    #[test]
    fn tables_by_capacity_skips_small_and_booked() {
        let (_, manager) = setup(vec![
            RestaurantTable::new(1, 2),
            RestaurantTable::new(2, 4),
            RestaurantTable::new(3, 8),
            RestaurantTable {
                table_id: 4,
                capacity: 10,
                is_available: false,
            },
        ]);

        assert_eq!(ids(&manager.get_tables_by_capacity(3)), vec![2, 3]);
        assert_eq!(ids(&manager.get_tables_by_capacity(4)), vec![2, 3]);
        assert!(manager.get_tables_by_capacity(11).is_empty());
    }

    #[test]
    fn capacity_and_time_excludes_reservation_at_same_time() {
        let (restaurant, manager) = setup(vec![
            RestaurantTable::new(1, 4),
            RestaurantTable::new(2, 4),
        ]);
        {
            let mut restaurant = restaurant.borrow_mut();
            let table = restaurant.tables[0].clone();
            // Booked without touching the flag, so only the time check can exclude it.
            let reservation = Reservation::new(1, User::new("ann", "pw"), table, at(19));
            restaurant.reservations.push(reservation);
        }

        let at_seven = manager.get_available_tables_by_capacity_and_time(2, at(19));
        let at_eight = manager.get_available_tables_by_capacity_and_time(2, at(20));
        assert_eq!(ids(&at_seven), vec![2]);
        assert_eq!(ids(&at_eight), vec![1, 2]);
    }

    #[test]
    fn capacity_and_time_still_honours_flag() {
        let (_, manager) = setup(vec![
            RestaurantTable::new(1, 4),
            RestaurantTable::new(2, 2),
        ]);

        manager.update_table_availability(1, false);

        let matching = manager.get_available_tables_by_capacity_and_time(3, at(19));
        assert!(matching.is_empty());
    }
}
