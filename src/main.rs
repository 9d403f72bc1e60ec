use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use shorturl::cli::Cli;
use shorturl::config::init_config;
use shorturl::interfaces::cli::run_cli_command;
use shorturl::system::init_logging;

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match init_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };

    // guard 需要存活到程序结束，保证日志刷盘
    let _guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };
    debug!("Using Sina API app key {}", config.sina.app_key);

    match run_cli_command(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}
