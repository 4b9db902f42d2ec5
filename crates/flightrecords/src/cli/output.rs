//! Rendering of flights for terminal output.

use std::fmt::Write as _;

use crate::error::Result;
use crate::flight::Flight;

use super::OutputFormat;

/// Render a list of flights in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flights(flights: &[Flight], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(flights)?),
        OutputFormat::Plain => Ok(flights
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Table => Ok(render_table(flights)),
    }
}

/// Render a single flight in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_flight(flight: &Flight, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(flight)?),
        OutputFormat::Plain => Ok(flight.to_string()),
        OutputFormat::Table => Ok(render_table(std::slice::from_ref(flight))),
    }
}

fn render_table(flights: &[Flight]) -> String {
    if flights.is_empty() {
        return "No flights.".to_string();
    }

    let from_width = column_width("FROM", flights.iter().map(|f| f.departure_city.as_str()));

    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:<from_width$}  TO", "ID", "FROM");
    for flight in flights {
        let id = flight.id.map_or_else(|| "-".to_string(), |id| id.to_string());
        let _ = writeln!(
            out,
            "{id:>6}  {:<from_width$}  {}",
            flight.departure_city, flight.arrival_city
        );
    }
    out.truncate(out.trim_end().len());
    out
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}
