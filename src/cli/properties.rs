//! Property commands, including the traffic target and liveness test views

use anyhow::{bail, Result};
use clap::Args;
use tracing::debug;

use crate::api::models::Property;
use crate::api::GtmClient;
use crate::cli::{read_json, DomainArg, JsonFileArgs};
use crate::output::{self, BatchReport, Listing};

#[derive(Args, Debug, Clone)]
pub struct PropertyNameArgs {
    /// The property name
    #[arg(long)]
    pub name: String,

    /// Domain name, e.g. example.akadns.net
    pub domain: String,
}

#[derive(Args, Debug, Clone)]
pub struct PropertyNamesArgs {
    /// Comma-separated list of property names
    #[arg(long)]
    pub names: String,

    /// Domain name, e.g. example.akadns.net
    pub domain: String,
}

/// Split a comma-separated name list, dropping blank entries
pub fn parse_names(names: &str) -> Vec<String> {
    names
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

pub async fn list(client: &GtmClient, args: DomainArg) -> Result<()> {
    listing(client, &args.domain)
        .await?
        .print(&["Name", "Type", "Traffic Targets"]);
    Ok(())
}

async fn listing(client: &GtmClient, domain: &str) -> Result<Listing> {
    let props = client.properties(domain).await?;

    if props.is_empty() {
        return Ok(Listing::Empty(format!(
            "No properties found for domain: {}",
            domain
        )));
    }
    Ok(Listing::Rows(output::property_list_rows(props)))
}

pub async fn show(client: &GtmClient, args: PropertyNameArgs) -> Result<()> {
    let prop = client.property(&args.domain, &args.name).await?;
    output::print_basic_table(&output::property_rows(&prop));
    Ok(())
}

pub async fn create(client: &GtmClient, args: JsonFileArgs) -> Result<()> {
    let prop: Property = read_json(&args.json)?;
    let created = client.property_create(&args.domain, &prop).await?;

    output::success(&format!("Created property {}", created.name));
    output::print_basic_table(&output::property_rows(&created));
    Ok(())
}

pub async fn update(client: &GtmClient, args: JsonFileArgs) -> Result<()> {
    let prop: Property = read_json(&args.json)?;
    let updated = client.property_update(&args.domain, &prop).await?;

    output::success(&format!("Updated property {}", updated.name));
    output::print_basic_table(&output::property_rows(&updated));
    Ok(())
}

pub async fn delete(client: &GtmClient, args: PropertyNameArgs) -> Result<()> {
    client.property_delete(&args.domain, &args.name).await?;
    output::success(&format!("Deleted property {}", args.name));
    Ok(())
}

/// Delete each named property, stopping at the first failure
pub async fn delete_named(client: &GtmClient, args: PropertyNamesArgs) -> Result<()> {
    delete_names(client, args, &mut BatchReport::default()).await
}

async fn delete_names(
    client: &GtmClient,
    args: PropertyNamesArgs,
    report: &mut BatchReport,
) -> Result<()> {
    for name in parse_names(&args.names) {
        if let Err(e) = client.property_delete(&args.domain, &name).await {
            report.failed(format!("Failed to delete Property: {}", name));
            return Err(e.into());
        }

        report.deleted(format!("Deleted Property: {}", name));
    }

    Ok(())
}

/// Delete every property of the domain, attempting all of them even when some fail
pub async fn delete_all(client: &GtmClient, args: DomainArg) -> Result<()> {
    delete_every(client, args, &mut BatchReport::default()).await
}

async fn delete_every(client: &GtmClient, args: DomainArg, report: &mut BatchReport) -> Result<()> {
    let props = client.properties(&args.domain).await?;
    let total = props.len();

    for prop in props {
        match client.property_delete(&args.domain, &prop.name).await {
            Ok(()) => report.deleted(format!("Deleted Property: {}", prop.name)),
            Err(e) => report.failed(format!("Failed to delete Property: {}: {}", prop.name, e)),
        }
    }

    let failed = report.failures();
    debug!("Deleted {} of {} properties", total - failed, total);

    if failed > 0 {
        bail!("{} of {} property deletions failed", failed, total);
    }
    Ok(())
}

pub async fn traffic_targets(client: &GtmClient, args: PropertyNameArgs) -> Result<()> {
    let prop = client.property(&args.domain, &args.name).await?;

    if prop.traffic_targets.is_empty() {
        output::info(&format!("No traffic targets found for property: {}", args.name));
        return Ok(());
    }

    for target in &prop.traffic_targets {
        output::heading("Traffic target");
        output::print_basic_table(&output::traffic_target_rows(target));
    }
    Ok(())
}

pub async fn liveness_tests(client: &GtmClient, args: PropertyNameArgs) -> Result<()> {
    let prop = client.property(&args.domain, &args.name).await?;

    if prop.liveness_tests.is_empty() {
        output::info(&format!("No liveness tests found for property: {}", args.name));
        return Ok(());
    }

    for test in &prop.liveness_tests {
        output::heading("Liveness test");
        output::print_basic_table(&output::liveness_test_rows(test));
    }
    Ok(())
}
