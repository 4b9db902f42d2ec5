//! Command-line interface for flightrecords.
//!
//! This module provides the CLI structure for the `flights` binary.

mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, GetCommand, ListCommand, OutputFormat, RouteCommand, SetupCommand,
    UpdateCommand,
};

/// flights - Store and query flights between cities
///
/// Lists, looks up, adds and updates flight records kept in a local
/// `SQLite` database.
#[derive(Debug, Parser)]
#[command(name = "flights")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors (command results are still printed)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Storage(StorageCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Commands that work against the flights database.
#[derive(Debug, Subcommand)]
pub enum StorageCommand {
    /// Recreate the flights table and load the seed flights
    Setup(SetupCommand),

    /// List all flights
    List(ListCommand),

    /// Show one flight by id
    Get(GetCommand),

    /// List flights between two cities
    Route(RouteCommand),

    /// Add a new flight
    Add(AddCommand),

    /// Change the cities of an existing flight
    Update(UpdateCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
