//! Data access for flights.
//!
//! [`FlightDao`] is the contract the service layer depends on;
//! [`SqliteFlightDao`] implements it over a borrowed `SQLite` connection.
//! Nothing here retries: storage failures are logged and returned.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, warn};

use crate::error::Result;
use crate::flight::Flight;

/// Column list shared by every flight query, in `row_to_flight` order.
const FLIGHT_COLUMNS: &str = "id, departure_city, arrival_city";

/// Data-access operations over stored flights.
pub trait FlightDao {
    /// All stored flights, in insertion order. Empty when there are none.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_all_flights(&self) -> Result<Vec<Flight>>;

    /// The flight with the given id, or `None` if no row matches.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_flight_by_id(&self, id: i64) -> Result<Option<Flight>>;

    /// Flights whose departure and arrival cities both match exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>>;

    /// Persist a new flight and return it with its assigned id.
    ///
    /// Any id already set on `flight` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    fn insert_flight(&self, flight: &Flight) -> Result<Flight>;

    /// Overwrite the cities of the flight with the given id.
    ///
    /// Returns `false` when no row has that id; nothing is modified then.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    fn update_flight(&self, id: i64, flight: &Flight) -> Result<bool>;
}

/// `SQLite`-backed [`FlightDao`].
#[derive(Debug, Clone, Copy)]
pub struct SqliteFlightDao<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFlightDao<'conn> {
    /// Create a DAO over an open connection.
    ///
    /// The `flights` table must already exist.
    #[must_use]
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_flights(
        &self,
        operation: &'static str,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<Flight>> {
        let run = || -> rusqlite::Result<Vec<Flight>> {
            let mut stmt = self.conn.prepare_cached(sql)?;
            let flights = stmt
                .query_map(params, Self::row_to_flight)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(flights)
        };
        Ok(logged(operation, run())?)
    }

    /// Convert a database row to a Flight.
    fn row_to_flight(row: &rusqlite::Row) -> rusqlite::Result<Flight> {
        Ok(Flight {
            id: Some(row.get(0)?),
            departure_city: row.get(1)?,
            arrival_city: row.get(2)?,
        })
    }
}

impl FlightDao for SqliteFlightDao<'_> {
    fn get_all_flights(&self) -> Result<Vec<Flight>> {
        let sql = format!("SELECT {FLIGHT_COLUMNS} FROM flights ORDER BY id");
        let flights = self.query_flights("get_all_flights", &sql, [])?;
        debug!("Fetched {} flights", flights.len());
        Ok(flights)
    }

    fn get_flight_by_id(&self, id: i64) -> Result<Option<Flight>> {
        let sql = format!("SELECT {FLIGHT_COLUMNS} FROM flights WHERE id = ?1");
        let flight = logged(
            "get_flight_by_id",
            self.conn
                .query_row(&sql, [id], Self::row_to_flight)
                .optional(),
        )?;
        if flight.is_none() {
            debug!("No flight with id {}", id);
        }
        Ok(flight)
    }

    fn get_all_flights_from_city_to_city(
        &self,
        departure_city: &str,
        arrival_city: &str,
    ) -> Result<Vec<Flight>> {
        let sql = format!(
            "SELECT {FLIGHT_COLUMNS} FROM flights \
             WHERE departure_city = ?1 AND arrival_city = ?2 ORDER BY id"
        );
        let flights = self.query_flights(
            "get_all_flights_from_city_to_city",
            &sql,
            params![departure_city, arrival_city],
        )?;
        debug!(
            "Found {} flights from {} to {}",
            flights.len(),
            departure_city,
            arrival_city
        );
        Ok(flights)
    }

    fn insert_flight(&self, flight: &Flight) -> Result<Flight> {
        logged(
            "insert_flight",
            self.conn.execute(
                "INSERT INTO flights (departure_city, arrival_city) VALUES (?1, ?2)",
                params![flight.departure_city, flight.arrival_city],
            ),
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Inserted flight with id {}", id);
        Ok(Flight::with_id(
            id,
            flight.departure_city.clone(),
            flight.arrival_city.clone(),
        ))
    }

    fn update_flight(&self, id: i64, flight: &Flight) -> Result<bool> {
        let affected = logged(
            "update_flight",
            self.conn.execute(
                "UPDATE flights SET departure_city = ?1, arrival_city = ?2 WHERE id = ?3",
                params![flight.departure_city, flight.arrival_city, id],
            ),
        )?;

        if affected == 0 {
            debug!("Update matched no flight with id {}", id);
        } else {
            debug!("Updated flight with id {}", id);
        }
        Ok(affected > 0)
    }
}

/// Log a failed storage operation before handing the error back.
fn logged<T>(operation: &'static str, result: rusqlite::Result<T>) -> rusqlite::Result<T> {
    if let Err(e) = &result {
        warn!("Flight storage operation {} failed: {}", operation, e);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::bootstrap::seed_flights;
    use crate::storage::Database;

    fn seeded_db() -> Database {
        let db = Database::open_in_memory().expect("failed to create test database");
        db.reset_and_seed().expect("failed to seed test database");
        db
    }

    #[test]
    fn test_get_all_flights_returns_seed_rows() {
        let db = seeded_db();
        let flights = db.flight_dao().get_all_flights().unwrap();

        for expected in seed_flights() {
            assert!(flights.contains(&expected), "missing {expected}");
        }
        assert_eq!(flights, seed_flights());
    }

    #[test]
    fn test_get_all_flights_empty_table() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.flight_dao().get_all_flights().unwrap().is_empty());
    }

    #[test]
    fn test_get_flight_by_id() {
        let db = seeded_db();
        let dao = db.flight_dao();

        assert_eq!(
            dao.get_flight_by_id(6).unwrap(),
            Some(Flight::with_id(6, "dallas", "tampa"))
        );
        assert_eq!(
            dao.get_flight_by_id(4).unwrap(),
            Some(Flight::with_id(4, "morgantown", "dallas"))
        );
    }

    #[test]
    fn test_get_flight_by_id_missing() {
        let db = seeded_db();
        let dao = db.flight_dao();

        assert_eq!(dao.get_flight_by_id(99_999).unwrap(), None);
        assert_eq!(dao.get_flight_by_id(0).unwrap(), None);
        assert_eq!(dao.get_flight_by_id(-1).unwrap(), None);
    }

    #[test]
    fn test_city_to_city_single_match() {
        let db = seeded_db();
        let flights = db
            .flight_dao()
            .get_all_flights_from_city_to_city("reston", "morgantown")
            .unwrap();

        assert_eq!(flights, vec![Flight::with_id(3, "reston", "morgantown")]);
    }

    #[test]
    fn test_city_to_city_multiple_matches() {
        let db = seeded_db();
        let flights = db
            .flight_dao()
            .get_all_flights_from_city_to_city("tampa", "dallas")
            .unwrap();

        assert_eq!(
            flights,
            vec![
                Flight::with_id(1, "tampa", "dallas"),
                Flight::with_id(5, "tampa", "dallas"),
            ]
        );
        assert!(!flights.contains(&Flight::with_id(3, "reston", "morgantown")));
    }

    #[test]
    fn test_city_to_city_is_the_exact_subset() {
        let db = seeded_db();
        let dao = db.flight_dao();
        let all = dao.get_all_flights().unwrap();

        for (departure, arrival) in [("tampa", "dallas"), ("dallas", "tampa"), ("tampa", "reston")] {
            let expected: Vec<Flight> = all
                .iter()
                .filter(|f| f.connects(departure, arrival))
                .cloned()
                .collect();
            assert_eq!(
                dao.get_all_flights_from_city_to_city(departure, arrival)
                    .unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_city_to_city_excludes_partial_and_case_mismatches() {
        let db = seeded_db();
        let dao = db.flight_dao();

        assert!(dao
            .get_all_flights_from_city_to_city("tampa", "morgantown")
            .unwrap()
            .is_empty());
        assert!(dao
            .get_all_flights_from_city_to_city("Tampa", "Dallas")
            .unwrap()
            .is_empty());
        assert!(dao
            .get_all_flights_from_city_to_city("tamp", "dallas")
            .unwrap()
            .is_empty());
        assert!(dao
            .get_all_flights_from_city_to_city("%", "%")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_insert_flight_assigns_next_id() {
        let db = seeded_db();
        let dao = db.flight_dao();

        let saved = dao
            .insert_flight(&Flight::new("tampa", "morgantown"))
            .unwrap();

        let expected = Flight::with_id(7, "tampa", "morgantown");
        assert_eq!(saved, expected);
        assert_eq!(dao.get_flight_by_id(7).unwrap(), Some(expected.clone()));
        assert!(dao.get_all_flights().unwrap().contains(&expected));
    }

    #[test]
    fn test_insert_flight_ignores_input_id() {
        let db = seeded_db();
        let dao = db.flight_dao();

        let saved = dao
            .insert_flight(&Flight::with_id(1, "reston", "tampa"))
            .unwrap();

        assert_eq!(saved.id, Some(7));
        assert_eq!(
            dao.get_flight_by_id(1).unwrap(),
            Some(Flight::with_id(1, "tampa", "dallas"))
        );
    }

    #[test]
    fn test_insert_preserves_insertion_order() {
        let db = Database::open_in_memory().unwrap();
        let dao = db.flight_dao();

        let inserted: Vec<Flight> = [("b", "c"), ("a", "z"), ("c", "a")]
            .into_iter()
            .map(|(d, a)| dao.insert_flight(&Flight::new(d, a)).unwrap())
            .collect();

        assert_eq!(dao.get_all_flights().unwrap(), inserted);
    }

    #[test]
    fn test_insert_accepts_empty_and_unicode_cities() {
        let db = Database::open_in_memory().unwrap();
        let dao = db.flight_dao();

        let empty = dao.insert_flight(&Flight::new("", "")).unwrap();
        let unicode = dao
            .insert_flight(&Flight::new("São Paulo", "Zürich"))
            .unwrap();

        assert_eq!(dao.get_flight_by_id(empty.id.unwrap()).unwrap(), Some(empty));
        assert_eq!(
            dao.get_flight_by_id(unicode.id.unwrap()).unwrap(),
            Some(unicode)
        );
    }

    #[test]
    fn test_update_flight() {
        let db = seeded_db();
        let dao = db.flight_dao();

        let updated = dao
            .update_flight(1, &Flight::new("reston", "dallas"))
            .unwrap();

        assert!(updated);
        assert_eq!(
            dao.get_flight_by_id(1).unwrap(),
            Some(Flight::with_id(1, "reston", "dallas"))
        );
        assert_eq!(dao.get_all_flights().unwrap().len(), 6);
    }

    #[test]
    fn test_update_flight_ignores_input_id() {
        let db = seeded_db();
        let dao = db.flight_dao();

        dao.update_flight(2, &Flight::with_id(5, "morgantown", "tampa"))
            .unwrap();

        assert_eq!(
            dao.get_flight_by_id(2).unwrap(),
            Some(Flight::with_id(2, "morgantown", "tampa"))
        );
        assert_eq!(
            dao.get_flight_by_id(5).unwrap(),
            Some(Flight::with_id(5, "tampa", "dallas"))
        );
    }

    #[test]
    fn test_update_missing_flight_modifies_nothing() {
        let db = seeded_db();
        let dao = db.flight_dao();

        let updated = dao
            .update_flight(42, &Flight::new("reston", "dallas"))
            .unwrap();

        assert!(!updated);
        assert_eq!(dao.get_all_flights().unwrap(), seed_flights());
    }

    #[test]
    fn test_in_memory_copy_is_disconnected() {
        let db = seeded_db();
        let dao = db.flight_dao();

        let mut copy = dao.get_flight_by_id(3).unwrap().unwrap();
        copy.arrival_city = "dallas".to_string();

        assert_eq!(
            dao.get_flight_by_id(3).unwrap(),
            Some(Flight::with_id(3, "reston", "morgantown"))
        );
    }

    #[test]
    fn test_missing_table_is_an_error() {
        let db = Database::open_in_memory().unwrap();
        db.connection()
            .execute("DROP TABLE flights", [])
            .unwrap();
        let dao = db.flight_dao();

        let err = dao.get_all_flights().unwrap_err();
        assert!(err.is_storage_error());
        assert!(dao.get_flight_by_id(1).is_err());
        assert!(dao
            .get_all_flights_from_city_to_city("tampa", "dallas")
            .is_err());
        assert!(dao.insert_flight(&Flight::new("a", "b")).is_err());
        assert!(dao.update_flight(1, &Flight::new("a", "b")).is_err());
    }
}
