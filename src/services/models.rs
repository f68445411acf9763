use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::{ReservationId, TableHandle, TableId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub username: String,
    // Stored as plain text, same as the data files this ledger reads.
    pub password: String,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestaurantTable {
    pub table_id: TableId,
    pub capacity: i32,
    pub is_available: bool,
}

impl RestaurantTable {
    pub fn new(table_id: TableId, capacity: i32) -> Self {
        Self {
            table_id,
            capacity,
            is_available: true,
        }
    }

    pub fn into_handle(self) -> TableHandle {
        Rc::new(RefCell::new(self))
    }
}

/// A booking of one table by one user.
///
/// `table` is a handle, not a copy: when it was taken from [`Restaurant::tables`] any change to
/// the table's availability is observed here as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub user: User,
    pub table: TableHandle,
    #[serde(deserialize_with = "reservation_time::deserialize")]
    pub reservation_time: NaiveDateTime,
}

impl Reservation {
    pub fn new(
        reservation_id: ReservationId,
        user: User,
        table: TableHandle,
        reservation_time: NaiveDateTime,
    ) -> Self {
        Self {
            reservation_id,
            user,
            table,
            reservation_time,
        }
    }

    pub fn table_id(&self) -> TableId {
        self.table.borrow().table_id
    }
}

mod reservation_time {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer};

    /// Reads `2024-03-08T19:30:00` as well as `2024-03-08T19:30:00+03:00`.
    ///
    /// An offset is dropped and the wall-clock time as written is kept, so the value is
    /// written back unzoned on the next save.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if let Ok(time) = raw.parse::<NaiveDateTime>() {
            return Ok(time);
        }

        DateTime::parse_from_rfc3339(&raw)
            .map(|time| time.naive_local())
            .map_err(de::Error::custom)
    }
}

/// Aggregate root: the unit that is loaded and saved as a whole.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Restaurant {
    #[serde(default)]
    pub tables: Vec<TableHandle>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
}

impl Restaurant {
    pub fn new(tables: Vec<RestaurantTable>) -> Self {
        Self {
            tables: tables
                .into_iter()
                .map(RestaurantTable::into_handle)
                .collect(),
            reservations: Vec::new(),
        }
    }

    /// First table with the given id, if any.
    pub fn find_table(&self, table_id: TableId) -> Option<&TableHandle> {
        self.tables.iter().find(|t| t.borrow().table_id == table_id)
    }

    /// Sets the flag on the first table with `table_id`. Returns `false` when no table matched.
    pub fn set_table_availability(&self, table_id: TableId, is_available: bool) -> bool {
        match self.find_table(table_id) {
            Some(table) => {
                table.borrow_mut().is_available = is_available;
                true
            }
            None => false,
        }
    }

    /// Whether any reservation books `table_id` at exactly `time`.
    pub fn is_booked_at(&self, table_id: TableId, time: NaiveDateTime) -> bool {
        self.reservations
            .iter()
            .any(|r| r.table_id() == table_id && r.reservation_time == time)
    }
}
