//! `SQLite` schema definitions for flightrecords.

/// SQL statement to create the flights table.
pub const CREATE_FLIGHTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS flights (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    departure_city TEXT NOT NULL,
    arrival_city TEXT NOT NULL
)
";

/// SQL statement to create an index for city-pair lookups.
pub const CREATE_ROUTE_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_flights_route ON flights(departure_city, arrival_city)
";

/// SQL statement to drop the flights table (and its id sequence).
pub const DROP_FLIGHTS_TABLE: &str = "DROP TABLE IF EXISTS flights";

/// SQL statement to create the metadata table for storing key-value pairs.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// Statements that create the flights table and its indexes, in order.
pub const FLIGHTS_STATEMENTS: &[&str] = &[CREATE_FLIGHTS_TABLE, CREATE_ROUTE_INDEX];

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_FLIGHTS_TABLE,
    CREATE_ROUTE_INDEX,
    CREATE_METADATA_TABLE,
];
