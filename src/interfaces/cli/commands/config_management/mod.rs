//! Configuration management CLI commands
//!
//! Generates sample files and prints the effective configuration.

mod config_gen;

use crate::cli::ConfigCommands;
use crate::config::StaticConfig;
use crate::interfaces::cli::CliError;

pub use config_gen::{DEFAULT_SAMPLE_PATH, config_generate};

/// Run a config subcommand
pub fn run_config_command(config: &StaticConfig, cmd: ConfigCommands) -> Result<(), CliError> {
    match cmd {
        ConfigCommands::Generate { output_path, force } => config_generate(output_path, force),
        ConfigCommands::Show => {
            print!("{}", config.to_toml());
            Ok(())
        }
    }
}
