//! Core record type for flightrecords.
//!
//! A [`Flight`] is a plain, owned copy of one row in the `flights` table.
//! Changing a `Flight` in memory never touches the stored row; only an
//! explicit update through the data-access layer does.

use serde::{Deserialize, Serialize};

/// A flight between two cities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flight {
    /// Unique identifier (assigned by storage on insert).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// City the flight departs from.
    pub departure_city: String,

    /// City the flight arrives in.
    pub arrival_city: String,
}

impl Flight {
    /// Create a flight that has not been persisted yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use flightrecords::Flight;
    ///
    /// let flight = Flight::new("tampa", "dallas");
    /// assert!(flight.id.is_none());
    /// assert_eq!(flight.departure_city, "tampa");
    /// ```
    #[must_use]
    pub fn new(departure_city: impl Into<String>, arrival_city: impl Into<String>) -> Self {
        Self {
            id: None,
            departure_city: departure_city.into(),
            arrival_city: arrival_city.into(),
        }
    }

    /// Create a flight carrying a storage-assigned id.
    #[must_use]
    pub fn with_id(
        id: i64,
        departure_city: impl Into<String>,
        arrival_city: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            departure_city: departure_city.into(),
            arrival_city: arrival_city.into(),
        }
    }

    /// Whether this flight has been assigned an id by storage.
    #[must_use]
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Whether this flight runs between exactly the given cities.
    ///
    /// Comparison is case-sensitive, matching the storage query.
    #[must_use]
    pub fn connects(&self, departure_city: &str, arrival_city: &str) -> bool {
        self.departure_city == departure_city && self.arrival_city == arrival_city
    }
}

impl std::fmt::Display for Flight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{id} {} -> {}", self.departure_city, self.arrival_city),
            None => write!(f, "(unsaved) {} -> {}", self.departure_city, self.arrival_city),
        }
    }
}
