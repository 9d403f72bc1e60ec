//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shorturl using clap's derive macros.

use clap::{Parser, Subcommand};

/// shorturl - shorten and expand URLs through Sina Weibo's short-URL API
#[derive(Parser, Debug)]
#[command(name = "shorturl")]
#[command(version)]
#[command(about = "Shorten and expand URLs through Sina Weibo's short-URL API", long_about = None)]
pub struct Cli {
    /// Configuration file path (default: shorturl.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten one or more long URLs
    Shorten {
        /// Long URLs to shorten
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,

        /// Output the mapping as JSON
        #[arg(long)]
        json: bool,

        /// Skip local URL validation before calling the API
        #[arg(long)]
        no_validate: bool,
    },

    /// Expand one or more short URLs
    #[command(visible_alias = "lengthen")]
    Expand {
        /// Short URLs to expand
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,

        /// Output the mapping as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: shorturl.example.toml)
        output_path: Option<String>,

        /// Force overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}
