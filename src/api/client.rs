//! HTTP client for the GTM configuration API

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, trace};

use crate::api::edgegrid::EdgeGridSigner;
use crate::api::error::{GtmError, Result};
use crate::api::models::{
    DataCenter, Domain, DomainStatus, DomainSummary, ItemList, Property, ResourceResponse,
};
use crate::config::Config;

const GTM_API_BASE: [&str; 2] = ["config-gtm", "v1"];

/// GTM API client
pub struct GtmClient {
    client: Client,
    base_url: Url,
    signer: EdgeGridSigner,
}

impl GtmClient {
    /// Create a new GTM API client bound to one set of credentials
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("akamai-gtm/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url()?,
            signer: EdgeGridSigner::new(
                &config.client_token,
                &config.access_token,
                &config.client_secret,
            ),
        })
    }

    /// Build `{base}/config-gtm/v1/{segments...}`, escaping each segment
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GtmError::InvalidHost(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(GTM_API_BASE)
            .extend(segments);
        Ok(url)
    }

    /// Sign and send a request, returning the body of a successful response
    async fn execute<B: Serialize>(&self, method: Method, url: Url, body: Option<&B>) -> Result<String> {
        let payload = match body {
            Some(body) => serde_json::to_vec(body)?,
            None => Vec::new(),
        };
        debug!("{} {}", method, url);

        let authorization = self.signer.authorization(&method, &url, &payload);
        let mut req = self
            .client
            .request(method, url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json");

        if body.is_some() {
            trace!("Request body: {}", String::from_utf8_lossy(&payload));
            req = req.header(CONTENT_TYPE, "application/json").body(payload);
        }

        let response = req.send().await?;

        let status = response.status();
        let text = response.text().await?;
        trace!("Response: {}", text);

        if !status.is_success() {
            return Err(GtmError::from_response(status, &text));
        }

        Ok(text)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let text = self.execute::<()>(Method::GET, url, None).await?;
        Ok(serde_json::from_str(&text)?)
    }

    async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let text = self.execute(method, url, Some(body)).await?;
        let response: ResourceResponse<T> = serde_json::from_str(&text)?;
        if let Some(status) = response.status.as_ref().and_then(|s| s.propagation_status.as_deref()) {
            debug!("Propagation status: {}", status);
        }
        Ok(response.resource)
    }

    async fn delete(&self, url: Url) -> Result<()> {
        self.execute::<()>(Method::DELETE, url, None).await?;
        Ok(())
    }

    // Domains

    pub async fn domains(&self) -> Result<Vec<DomainSummary>> {
        let list: ItemList<DomainSummary> = self.get(self.url(&["domains"])?).await?;
        Ok(list.items)
    }

    pub async fn domain(&self, name: &str) -> Result<Domain> {
        self.get(self.url(&["domains", name])?).await
    }

    pub async fn domain_create(&self, name: &str, domain_type: &str) -> Result<Domain> {
        let body = json!({ "name": name, "type": domain_type });
        self.send(Method::PUT, self.url(&["domains", name])?, &body).await
    }

    pub async fn domain_update(&self, domain: &Domain) -> Result<Domain> {
        self.send(Method::PUT, self.url(&["domains", &domain.name])?, domain).await
    }

    pub async fn domain_status(&self, name: &str) -> Result<DomainStatus> {
        self.get(self.url(&["domains", name, "status", "current"])?).await
    }

    // Data centers

    pub async fn data_centers(&self, domain: &str) -> Result<Vec<DataCenter>> {
        let list: ItemList<DataCenter> = self
            .get(self.url(&["domains", domain, "datacenters"])?)
            .await?;
        Ok(list.items)
    }

    pub async fn data_center(&self, domain: &str, id: i64) -> Result<DataCenter> {
        let id = id.to_string();
        self.get(self.url(&["domains", domain, "datacenters", &id])?).await
    }

    pub async fn data_center_create(&self, domain: &str, dc: &DataCenter) -> Result<DataCenter> {
        self.send(
            Method::POST,
            self.url(&["domains", domain, "datacenters"])?,
            dc,
        ).await
    }

    pub async fn data_center_update(&self, domain: &str, dc: &DataCenter) -> Result<DataCenter> {
        let id = dc.datacenter_id.to_string();
        self.send(
            Method::PUT,
            self.url(&["domains", domain, "datacenters", &id])?,
            dc,
        ).await
    }

    pub async fn data_center_delete(&self, domain: &str, id: i64) -> Result<()> {
        let id = id.to_string();
        self.delete(self.url(&["domains", domain, "datacenters", &id])?).await
    }

    // Properties

    pub async fn properties(&self, domain: &str) -> Result<Vec<Property>> {
        let list: ItemList<Property> = self
            .get(self.url(&["domains", domain, "properties"])?)
            .await?;
        Ok(list.items)
    }

    pub async fn property(&self, domain: &str, name: &str) -> Result<Property> {
        self.get(self.url(&["domains", domain, "properties", name])?).await
    }

    /// Create a property; the API creates and replaces through the same PUT
    pub async fn property_create(&self, domain: &str, property: &Property) -> Result<Property> {
        self.put_property(domain, property).await
    }

    pub async fn property_update(&self, domain: &str, property: &Property) -> Result<Property> {
        self.put_property(domain, property).await
    }

    async fn put_property(&self, domain: &str, property: &Property) -> Result<Property> {
        self.send(
            Method::PUT,
            self.url(&["domains", domain, "properties", &property.name])?,
            property,
        ).await
    }

    pub async fn property_delete(&self, domain: &str, name: &str) -> Result<()> {
        self.delete(self.url(&["domains", domain, "properties", name])?).await
    }
}
