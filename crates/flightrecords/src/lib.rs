//! `flightrecords` - Flight records kept in `SQLite`
//!
//! This library provides a data-access layer over a single `flights` table
//! and a thin service façade that external callers (such as the `flights`
//! CLI) go through.
//!
//! ```
//! use flightrecords::{Database, Flight, FlightService};
//!
//! let db = Database::open_in_memory()?;
//! db.reset_and_seed()?;
//!
//! let service = FlightService::new(db.flight_dao());
//! let added = service.add_flight(&Flight::new("tampa", "morgantown"))?;
//! assert_eq!(added.id, Some(7));
//! assert_eq!(service.get_all_flights_from_city_to_city("tampa", "dallas")?.len(), 2);
//! # Ok::<(), flightrecords::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod dao;
pub mod error;
pub mod flight;
pub mod logging;
pub mod service;
pub mod storage;

pub use config::Config;
pub use dao::{FlightDao, SqliteFlightDao};
pub use error::{Error, Result};
pub use flight::Flight;
pub use logging::init_logging;
pub use service::FlightService;
pub use storage::Database;
