//! Data center commands

use anyhow::Result;
use clap::Args;

use crate::api::models::DataCenter;
use crate::api::GtmClient;
use crate::cli::{read_json, DomainArg, JsonFileArgs};
use crate::output::{self, BatchReport, Listing};

#[derive(Args, Debug, Clone)]
pub struct DataCenterIdArgs {
    /// The data center ID
    #[arg(long)]
    pub id: i64,

    /// Domain name, e.g. example.akadns.net
    pub domain: String,
}

#[derive(Args, Debug, Clone)]
pub struct DataCenterIdsArgs {
    /// Data center ID to delete; repeat for several
    #[arg(long = "id", required = true)]
    pub ids: Vec<i64>,

    /// Domain name, e.g. example.akadns.net
    pub domain: String,
}

pub async fn list(client: &GtmClient, args: DomainArg) -> Result<()> {
    listing(client, &args.domain)
        .await?
        .print(&["Nickname", "DataCenter ID"]);
    Ok(())
}

async fn listing(client: &GtmClient, domain: &str) -> Result<Listing> {
    let dcs = client.data_centers(domain).await?;

    if dcs.is_empty() {
        return Ok(Listing::Empty(none_found(domain)));
    }
    Ok(Listing::Rows(output::data_center_list_rows(&dcs)))
}

fn none_found(domain: &str) -> String {
    format!("No data centers found for domain: {}", domain)
}

pub async fn show(client: &GtmClient, args: DataCenterIdArgs) -> Result<()> {
    let dc = client.data_center(&args.domain, args.id).await?;
    output::print_basic_table(&output::data_center_rows(&dc));
    Ok(())
}

pub async fn create(client: &GtmClient, args: JsonFileArgs) -> Result<()> {
    let dc: DataCenter = read_json(&args.json)?;
    let created = client.data_center_create(&args.domain, &dc).await?;

    output::success(&format!(
        "Created {}",
        created.nickname.as_deref().unwrap_or_default()
    ));
    Ok(())
}

pub async fn update(client: &GtmClient, args: JsonFileArgs) -> Result<()> {
    let dc: DataCenter = read_json(&args.json)?;
    let updated = client.data_center_update(&args.domain, &dc).await?;

    output::success(&format!(
        "Updated {}",
        updated.nickname.as_deref().unwrap_or_default()
    ));
    Ok(())
}

pub async fn delete(client: &GtmClient, args: DataCenterIdArgs) -> Result<()> {
    client.data_center_delete(&args.domain, args.id).await?;
    output::success(&format!("Deleted data center {}", args.id));
    Ok(())
}

/// Delete each listed data center, stopping at the first failure
pub async fn delete_many(client: &GtmClient, args: DataCenterIdsArgs) -> Result<()> {
    delete_ids(client, args, &mut BatchReport::default()).await
}

async fn delete_ids(
    client: &GtmClient,
    args: DataCenterIdsArgs,
    report: &mut BatchReport,
) -> Result<()> {
    for id in args.ids {
        if let Err(e) = client.data_center_delete(&args.domain, id).await {
            report.failed(format!("Failed to delete DataCenter: {}", id));
            return Err(e.into());
        }

        report.deleted(format!("Deleted DataCenter: {}", id));
    }

    Ok(())
}

/// Delete every data center of the domain, stopping at the first failure
pub async fn delete_all(client: &GtmClient, args: DomainArg) -> Result<()> {
    delete_every(client, args, &mut BatchReport::default()).await
}

async fn delete_every(client: &GtmClient, args: DomainArg, report: &mut BatchReport) -> Result<()> {
    let dcs = client.data_centers(&args.domain).await?;

    if dcs.is_empty() {
        output::info(&none_found(&args.domain));
        return Ok(());
    }

    for dc in dcs {
        let nickname = dc.nickname.as_deref().unwrap_or_default();
        if let Err(e) = client.data_center_delete(&args.domain, dc.datacenter_id).await {
            report.failed(format!("Failed to delete DataCenter: {}", nickname));
            return Err(e.into());
        }

        report.deleted(format!("Deleted DC: {} ({})", nickname, dc.datacenter_id));
    }

    Ok(())
}
