//! Command-line interface, parsed with clap.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// City Explorer - location data aggregator
/// Resolves places and serves cached weather, restaurants, movies, meetups and trails
#[derive(Parser)]
#[command(name = "city-explorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    #[command(alias = "web")]
    Serve,

    /// Resolve a place and print every category for it
    #[command(alias = "l")]
    Lookup {
        /// Place name
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
