//! `flights` - CLI for flightrecords
//!
//! This binary opens the configured database and drives the flight service.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use flightrecords::cli::output::{render_flight, render_flights};
use flightrecords::cli::{Cli, Command, ConfigCommand, StorageCommand};
use flightrecords::{init_logging, Config, Database, Flight, FlightService, SqliteFlightDao};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbosity());

    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;

    // Config commands never touch storage
    match cli.command {
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
        Command::Storage(storage_cmd) => run(&config, storage_cmd),
    }
}

fn run(config: &Config, command: StorageCommand) -> anyhow::Result<()> {
    let db = Database::open_with_config(config)
        .with_context(|| format!("opening database {}", config.database_path().display()))?;
    let service = FlightService::new(db.flight_dao());

    match command {
        StorageCommand::Setup(cmd) => {
            if cmd.yes {
                db.reset_and_seed().context("resetting flights table")?;
                println!("Flights table recreated with seed data.");
            } else {
                println!("This will discard all stored flights and load the seed data.");
                println!("Use --yes to confirm.");
            }
        }
        StorageCommand::List(cmd) => {
            let flights = service.get_all_flights().context("listing flights")?;
            println!("{}", render_flights(&flights, cmd.format)?);
        }
        StorageCommand::Get(cmd) => {
            match service
                .get_flight_by_id(cmd.id)
                .with_context(|| format!("fetching flight {}", cmd.id))?
            {
                Some(flight) => println!("{}", render_flight(&flight, cmd.format)?),
                None => println!("Flight {} not found.", cmd.id),
            }
        }
        StorageCommand::Route(cmd) => {
            let flights = service
                .get_all_flights_from_city_to_city(&cmd.from, &cmd.to)
                .with_context(|| format!("finding flights from {} to {}", cmd.from, cmd.to))?;
            println!("{}", render_flights(&flights, cmd.format)?);
        }
        StorageCommand::Add(cmd) => {
            let flight = service
                .add_flight(&Flight::new(cmd.from, cmd.to))
                .context("adding flight")?;
            println!("{}", render_flight(&flight, cmd.format)?);
        }
        StorageCommand::Update(cmd) => update(&service, cmd)?,
    }

    Ok(())
}

fn update(
    service: &FlightService<SqliteFlightDao<'_>>,
    cmd: flightrecords::cli::UpdateCommand,
) -> anyhow::Result<()> {
    let change = Flight::new(cmd.from, cmd.to);
    match service
        .update_flight(cmd.id, &change)
        .with_context(|| format!("updating flight {}", cmd.id))?
    {
        Some(flight) => println!("{}", render_flight(&flight, cmd.format)?),
        None => println!("Flight {} not found; nothing updated.", cmd.id),
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                if config.storage.in_memory {
                    println!("  Database:           in-memory");
                } else {
                    println!("  Database path:      {}", config.database_path().display());
                }
                println!("  Busy timeout (ms):  {}", config.storage.busy_timeout_ms);
                println!();
                println!("[Bootstrap]");
                println!("  Seed on open:       {}", config.bootstrap.seed_on_open);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
