//! CLI module for the registration service
//!
//! - `serve`: run the HTTP API
//! - `migrate`: apply database migrations and exit

pub mod migrate;
pub mod serve;

use clap::{Parser, Subcommand};

/// AutoHack registration intake service
#[derive(Parser)]
#[command(name = "autohack-registration")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the registration API (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,
}
