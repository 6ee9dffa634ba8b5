//! CLI module - Command-line interface for Larder
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Larder - Recipe Store Server
/// Serves a read-only recipe API over a JSON-loaded SQLite store
#[derive(Parser)]
#[command(name = "larder")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    #[command(alias = "s")]
    Serve,

    /// Load a recipe dataset JSON into the database
    #[command(alias = "l")]
    Load {
        /// Dataset path (defaults to the configured dataset_path)
        path: Option<PathBuf>,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
