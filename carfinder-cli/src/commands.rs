//! CLI command implementations

use std::path::PathBuf;

use anyhow::{Context, Result};
use carfinder_core::CarfinderConfig;
use carfinder_search::VehicleSearchService;
use clap::Subcommand;
use tracing::info;

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory served under /static
        #[arg(long)]
        static_dir: Option<PathBuf>,
        /// Directory holding a custom base.html
        #[arg(long)]
        templates_dir: Option<PathBuf>,
        /// Use canned demo data instead of the live providers
        #[arg(long)]
        demo: bool,
    },
    /// Run one search and print the results as JSON
    Search {
        /// Free text, e.g. "Toyota Camry"
        query: String,
        /// Use canned demo data instead of the live providers
        #[arg(long)]
        demo: bool,
    },
}

/// Handle the CLI command
///
/// # Errors
/// Returns an error when configuration is invalid or the server fails
pub async fn handle_command(command: Commands) -> Result<()> {
    let config = CarfinderConfig::from_env().context("Invalid configuration")?;

    match command {
        Commands::Server {
            host,
            port,
            static_dir,
            templates_dir,
            demo,
        } => {
            let config = apply_server_overrides(config, host, port, static_dir, templates_dir);
            start_server(config, demo).await
        }
        Commands::Search { query, demo } => run_search(&config, &query, demo).await,
    }
}

/// Command-line flags win over environment and defaults.
fn apply_server_overrides(
    mut config: CarfinderConfig,
    host: Option<String>,
    port: Option<u16>,
    static_dir: Option<PathBuf>,
    templates_dir: Option<PathBuf>,
) -> CarfinderConfig {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(static_dir) = static_dir {
        config.server.static_dir = static_dir;
    }
    if templates_dir.is_some() {
        config.server.templates_dir = templates_dir;
    }
    config
}

fn search_service(config: &CarfinderConfig, demo: bool) -> Result<VehicleSearchService> {
    if demo {
        info!("Demo mode: using canned data, no external calls");
        return Ok(VehicleSearchService::new_demo());
    }
    VehicleSearchService::from_config(config).context("Failed to set up providers")
}

/// Start the web server and block until it stops.
///
/// # Errors
/// Returns an error when providers cannot be built, the page template
/// cannot be loaded or the address cannot be bound
pub async fn start_server(config: CarfinderConfig, demo: bool) -> Result<()> {
    let service = search_service(&config, demo)?;
    info!(
        "Starting Carfinder on http://{} ({} mode)",
        config.server.bind_address(),
        if demo { "demo" } else { "live" }
    );

    carfinder_web::run_server(config, service)
        .await
        .context("Web server failed")
}

/// Run one search and print the bundle as pretty JSON.
///
/// # Errors
/// Returns an error when providers cannot be built or output fails
pub async fn run_search(config: &CarfinderConfig, query: &str, demo: bool) -> Result<()> {
    let service = search_service(config, demo)?;
    let bundle = service.orchestrate(query).await;

    let json = serde_json::to_string_pretty(&bundle).context("Failed to encode results")?;
    println!("{json}");
    Ok(())
}
