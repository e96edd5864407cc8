//! akamai-gtm - CLI for Akamai Global Traffic Management configuration
//!
//! Manages GTM domains, data centers, properties, traffic targets and
//! liveness tests through the EdgeGrid-authenticated `config-gtm` API.

mod api;
mod cli;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api::GtmClient;
use crate::cli::{data_centers, domains, properties, status, Cli, Commands};
use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // One client per invocation, handed to every command
    let config = Config::from_args(&cli.credentials);
    let client = GtmClient::new(&config)?;

    // Execute command
    match cli.command {
        Commands::Domains => domains::list(&client).await,
        Commands::Domain(args) => domains::show(&client, args).await,
        Commands::DomainCreate(args) => domains::create(&client, args).await,
        Commands::DomainUpdate(args) => domains::update(&client, args).await,
        Commands::DataCenters(args) => data_centers::list(&client, args).await,
        Commands::DataCentersDelete(args) => data_centers::delete_many(&client, args).await,
        Commands::DataCentersDeleteAll(args) => data_centers::delete_all(&client, args).await,
        Commands::DataCenter(args) => data_centers::show(&client, args).await,
        Commands::DataCenterCreate(args) => data_centers::create(&client, args).await,
        Commands::DataCenterUpdate(args) => data_centers::update(&client, args).await,
        Commands::DataCenterDelete(args) => data_centers::delete(&client, args).await,
        Commands::Properties(args) => properties::list(&client, args).await,
        Commands::PropertiesDelete(args) => properties::delete_named(&client, args).await,
        Commands::PropertiesDeleteAll(args) => properties::delete_all(&client, args).await,
        Commands::Property(args) => properties::show(&client, args).await,
        Commands::PropertyCreate(args) => properties::create(&client, args).await,
        Commands::PropertyUpdate(args) => properties::update(&client, args).await,
        Commands::PropertyDelete(args) => properties::delete(&client, args).await,
        Commands::TrafficTargets(args) => properties::traffic_targets(&client, args).await,
        Commands::LivenessTests(args) => properties::liveness_tests(&client, args).await,
        Commands::Status(args) => status::show(&client, args).await,
    }
}
