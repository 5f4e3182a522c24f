//! Carfinder CLI - Command-line interface
//!
//! Starts the web server or runs a single search from the terminal.

mod commands;

use carfinder_core::tracing_setup::{CliLogLevel, init_tracing};
use clap::Parser;

#[derive(Parser)]
#[command(name = "carfinder")]
#[command(about = "Vehicle specifications, photos and news in one search")]
struct Cli {
    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value = "info")]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), None)?;

    commands::handle_command(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Commands;

    #[test]
    fn test_parse_server_defaults() {
        let cli = Cli::try_parse_from(["carfinder", "server"]).unwrap();
        assert_eq!(cli.log_level, CliLogLevel::Info);
        match cli.command {
            Commands::Server {
                host,
                port,
                static_dir,
                templates_dir,
                demo,
            } => {
                assert!(host.is_none());
                assert!(port.is_none());
                assert!(static_dir.is_none());
                assert!(templates_dir.is_none());
                assert!(!demo);
            }
            _ => panic!("expected server command"),
        }
    }

    #[test]
    fn test_parse_server_overrides_and_log_level() {
        let cli = Cli::try_parse_from([
            "carfinder",
            "server",
            "--port",
            "8080",
            "--demo",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, CliLogLevel::Debug);
        assert!(matches!(
            cli.command,
            Commands::Server {
                port: Some(8080),
                demo: true,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_search_requires_query() {
        assert!(Cli::try_parse_from(["carfinder", "search"]).is_err());

        let cli = Cli::try_parse_from(["carfinder", "search", "Toyota Camry", "--demo"]).unwrap();
        match cli.command {
            Commands::Search { query, demo } => {
                assert_eq!(query, "Toyota Camry");
                assert!(demo);
            }
            _ => panic!("expected search command"),
        }
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(Cli::try_parse_from(["carfinder", "--log-level", "loud", "server"]).is_err());
    }
}
