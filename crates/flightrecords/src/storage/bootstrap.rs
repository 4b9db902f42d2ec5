//! Database bootstrap: recreate the flights table and load seed rows.
//!
//! Used by the `setup` command and by tests that need the well-known
//! six-flight data set with ids 1 through 6.

use rusqlite::{params, Connection};
use tracing::{debug, info};

use crate::error::Result;
use crate::flight::Flight;

use super::schema::{DROP_FLIGHTS_TABLE, FLIGHTS_STATEMENTS};

/// Seed rows as `(id, departure_city, arrival_city)`.
const SEED_ROWS: &[(i64, &str, &str)] = &[
    (1, "tampa", "dallas"),
    (2, "tampa", "reston"),
    (3, "reston", "morgantown"),
    (4, "morgantown", "dallas"),
    (5, "tampa", "dallas"),
    (6, "dallas", "tampa"),
];

/// The flights loaded by [`reset_and_seed`], in id order.
#[must_use]
pub fn seed_flights() -> Vec<Flight> {
    SEED_ROWS
        .iter()
        .map(|&(id, departure, arrival)| Flight::with_id(id, departure, arrival))
        .collect()
}

/// Drop and recreate the flights table, then insert the seed rows.
///
/// The id sequence restarts, so the next inserted flight gets id 7.
/// Runs in a single transaction: on failure the previous table is left intact.
///
/// # Errors
///
/// Returns an error if any statement fails.
pub fn reset_and_seed(conn: &Connection) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute(DROP_FLIGHTS_TABLE, [])?;
    for statement in FLIGHTS_STATEMENTS {
        tx.execute(statement, [])?;
    }
    // Dropping the table clears its sequence entry; be explicit anyway
    tx.execute("DELETE FROM sqlite_sequence WHERE name = 'flights'", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO flights (id, departure_city, arrival_city) VALUES (?1, ?2, ?3)",
        )?;
        for &(id, departure, arrival) in SEED_ROWS {
            stmt.execute(params![id, departure, arrival])?;
            debug!("Seeded flight {} {} -> {}", id, departure, arrival);
        }
    }

    tx.commit()?;
    info!("Flights table reset with {} seed rows", SEED_ROWS.len());
    Ok(())
}
