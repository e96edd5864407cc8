//! Configuration management

use reqwest::Url;

use crate::api::error::{GtmError, Result};
use crate::cli::CredentialArgs;

/// EdgeGrid credentials for one invocation
///
/// Values come from global flags, which clap backs with the
/// `AKAMAI_EDGEGRID_*` environment variables. Nothing is validated here:
/// a missing value is sent as-is and rejected by the API.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API hostname, e.g. `akab-xxxx.luna.akamaiapis.net`
    pub host: String,

    pub client_token: String,

    pub access_token: String,

    pub client_secret: String,
}

impl Config {
    /// Resolve configuration from parsed global flags
    pub fn from_args(args: &CredentialArgs) -> Self {
        Self {
            host: args.host.clone().unwrap_or_default(),
            client_token: args.client_token.clone().unwrap_or_default(),
            access_token: args.access_token.clone().unwrap_or_default(),
            client_secret: args.client_secret.clone().unwrap_or_default(),
        }
    }

    /// Base URL for API requests
    ///
    /// A bare hostname is served over https; a value with a scheme is used verbatim.
    pub fn base_url(&self) -> Result<Url> {
        let host = self.host.trim().trim_end_matches('/');
        let raw = if host.contains("://") {
            host.to_string()
        } else {
            format!("https://{}", host)
        };

        Url::parse(&raw).map_err(|_| GtmError::InvalidHost(self.host.clone()))
    }
}
