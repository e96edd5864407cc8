//! Domain commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::api::models::Domain;
use crate::api::GtmClient;
use crate::cli::{read_json, DomainArg};
use crate::output::{self, Listing};

#[derive(Args, Debug, Clone)]
pub struct DomainCreateArgs {
    /// The domain type (e.g. basic, failover-only, full)
    #[arg(long = "type")]
    pub domain_type: String,

    /// Domain name, e.g. example.akadns.net
    pub domain: String,
}

#[derive(Args, Debug, Clone)]
pub struct DomainUpdateArgs {
    /// Path to a JSON file holding the domain
    #[arg(long)]
    pub json: PathBuf,
}

pub async fn list(client: &GtmClient) -> Result<()> {
    listing(client)
        .await?
        .print(&["Name", "Status", "Last Modified"]);
    Ok(())
}

async fn listing(client: &GtmClient) -> Result<Listing> {
    let domains = client.domains().await?;

    if domains.is_empty() {
        return Ok(Listing::Empty("No domains found".to_string()));
    }
    Ok(Listing::Rows(output::domain_list_rows(&domains)))
}

pub async fn show(client: &GtmClient, args: DomainArg) -> Result<()> {
    let domain = client.domain(&args.domain).await?;
    output::print_basic_table(&output::domain_rows(&domain));
    Ok(())
}

pub async fn create(client: &GtmClient, args: DomainCreateArgs) -> Result<()> {
    let domain = client
        .domain_create(&args.domain, &args.domain_type)
        .await
        .with_context(|| format!("Failed to create domain {}", args.domain))?;

    output::success(&format!("Created {}", domain.name));
    Ok(())
}

pub async fn update(client: &GtmClient, args: DomainUpdateArgs) -> Result<()> {
    let domain: Domain = read_json(&args.json)?;
    let updated = client.domain_update(&domain).await?;

    output::success(&format!("Updated domain: {}", updated.name));
    Ok(())
}
