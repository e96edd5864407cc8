//! CLI commands module

pub mod data_centers;
pub mod domains;
pub mod properties;
pub mod status;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;

use crate::api::error::{GtmError, Result};

/// akamai-gtm - Akamai GTM configuration CLI
#[derive(Parser, Debug)]
#[command(name = "akamai-gtm")]
#[command(version)]
#[command(about = "A CLI to Akamai GTM configuration", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// EdgeGrid credentials, each overridable by its environment variable
#[derive(Args, Debug, Clone)]
pub struct CredentialArgs {
    /// Luna API hostname
    #[arg(long, global = true, env = "AKAMAI_EDGEGRID_HOST")]
    pub host: Option<String>,

    /// Luna API client token
    #[arg(
        long,
        visible_alias = "ct",
        alias = "client_token",
        global = true,
        env = "AKAMAI_EDGEGRID_CLIENT_TOKEN",
        hide_env_values = true
    )]
    pub client_token: Option<String>,

    /// Luna API access token
    #[arg(
        long,
        visible_alias = "at",
        alias = "access_token",
        global = true,
        env = "AKAMAI_EDGEGRID_ACCESS_TOKEN",
        hide_env_values = true
    )]
    pub access_token: Option<String>,

    /// Luna API client secret
    #[arg(
        long,
        short = 's',
        alias = "client_secret",
        global = true,
        env = "AKAMAI_EDGEGRID_CLIENT_SECRET",
        hide_env_values = true
    )]
    pub client_secret: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all GTM domains
    Domains,

    /// View the details of a domain
    Domain(DomainArg),

    /// Create a domain
    DomainCreate(domains::DomainCreateArgs),

    /// Update a domain from a JSON file
    DomainUpdate(domains::DomainUpdateArgs),

    /// List all data centers associated with a domain
    DataCenters(DomainArg),

    /// Delete the given data centers of a domain
    DataCentersDelete(data_centers::DataCenterIdsArgs),

    /// Delete ALL data centers of a domain
    DataCentersDeleteAll(DomainArg),

    /// View the details of a data center
    DataCenter(data_centers::DataCenterIdArgs),

    /// Create a data center from a JSON file
    DataCenterCreate(JsonFileArgs),

    /// Update a data center from a JSON file
    DataCenterUpdate(JsonFileArgs),

    /// Delete a data center
    DataCenterDelete(data_centers::DataCenterIdArgs),

    /// List all properties of a domain
    Properties(DomainArg),

    /// Delete the given properties of a domain
    PropertiesDelete(properties::PropertyNamesArgs),

    /// Delete ALL properties of a domain
    PropertiesDeleteAll(DomainArg),

    /// View the details of a property
    Property(properties::PropertyNameArgs),

    /// Create a property from a JSON file
    PropertyCreate(JsonFileArgs),

    /// Update a property from a JSON file
    PropertyUpdate(JsonFileArgs),

    /// Delete a property
    PropertyDelete(properties::PropertyNameArgs),

    /// View traffic targets of a property
    TrafficTargets(properties::PropertyNameArgs),

    /// View liveness tests of a property
    LivenessTests(properties::PropertyNameArgs),

    /// View the status of a domain
    Status(DomainArg),
}

/// A lone domain name argument
#[derive(Args, Debug, Clone)]
pub struct DomainArg {
    /// Domain name, e.g. example.akadns.net
    pub domain: String,
}

#[derive(Args, Debug, Clone)]
pub struct JsonFileArgs {
    /// Path to a JSON file holding the resource
    #[arg(long)]
    pub json: PathBuf,

    /// Domain name, e.g. example.akadns.net
    pub domain: String,
}

/// Read and parse a resource from a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|source| GtmError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| GtmError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}
