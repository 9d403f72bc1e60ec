//! CLI interface module
//!
//! This module provides command-line interface functionality for shorturl.

pub mod commands;

use std::fmt;

use crate::cli::Commands;
use crate::config::StaticConfig;
use crate::errors::ConvertError;
use crate::http::UreqClient;
use crate::providers::sina_converter;
use commands::{config_management, expand_urls, shorten_urls};

#[derive(Debug)]
pub enum CliError {
    Convert(ConvertError),
    IoError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::Convert(e) => e.format_simple(),
            CliError::IoError(msg) => format!("IO error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::Convert(e) => e.format_colored(),
            CliError::IoError(msg) => format!("{} {}", "IO error:".red().bold(), msg.white()),
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Convert(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConvertError> for CliError {
    fn from(err: ConvertError) -> Self {
        CliError::Convert(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError(err.to_string())
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, config: &StaticConfig) -> Result<(), CliError> {
    // Config commands don't need the HTTP client
    if let Commands::Config { action } = cmd {
        return config_management::run_config_command(config, action);
    }

    let converter = sina_converter(&config.sina, UreqClient::shared(&config.http))?;

    match cmd {
        Commands::Shorten {
            urls,
            json,
            no_validate,
        } => shorten_urls(&converter, urls, json, !no_validate),

        Commands::Expand { urls, json } => expand_urls(&converter, urls, json),

        Commands::Config { .. } => unreachable!("handled above"),
    }
}
