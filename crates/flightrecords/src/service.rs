//! Service layer for flights.
//!
//! [`FlightService`] is the façade external callers use. It forwards every
//! call to its [`FlightDao`] unchanged and adds no rules of its own, so any
//! `FlightDao` (including a test double) can stand behind it.

use tracing::debug;

use crate::dao::FlightDao;
use crate::error::Result;
use crate::flight::Flight;

/// Pass-through façade over a [`FlightDao`].
#[derive(Debug, Clone)]
pub struct FlightService<D> {
    dao: D,
}

impl<D: FlightDao> FlightService<D> {
    /// Create a service backed by `dao`.
    #[must_use]
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    /// Borrow the underlying data-access object.
    #[must_use]
    pub fn dao(&self) -> &D {
        &self.dao
    }

    /// All stored flights, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns any storage error from the DAO.
    pub fn get_all_flights(&self) -> Result<Vec<Flight>> {
        self.dao.get_all_flights()
    }

    /// The flight with the given id, or `None`.
    ///
    /// # Errors
    ///
    /// Returns any storage error from the DAO.
    pub fn get_flight_by_id(&self, id: i64) -> Result<Option<Flight>> {
        self.dao.get_flight_by_id(id)
    }

    /// Persist `flight` and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns any storage error from the DAO.
    pub fn add_flight(&self, flight: &Flight) -> Result<Flight> {
        self.dao.insert_flight(flight)
    }

    /// Flights from `departure_city` to `arrival_city`.
    ///
    /// # Errors
    ///
    /// Returns any storage error from the DAO.
    pub fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>> {
        self.dao
            .get_all_flights_from_city_to_city(departure_city, arrival_city)
    }

    /// Overwrite the cities of flight `id`.
    ///
    /// Returns the flight as now stored, or `None` when no flight has that id.
    ///
    /// # Errors
    ///
    /// Returns any storage error from the DAO.
    pub fn update_flight(&self, id: i64, flight: &Flight) -> Result<Option<Flight>> {
        if self.dao.update_flight(id, flight)? {
            Ok(Some(Flight::with_id(
                id,
                flight.departure_city.clone(),
                flight.arrival_city.clone(),
            )))
        } else {
            debug!("Flight {} not updated: no such flight", id);
            Ok(None)
        }
    }
}
