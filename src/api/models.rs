//! GTM resource types and API envelopes

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Decode an explicit `null` as the type's zero value, the way a missing key is
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Collection envelope returned by list endpoints
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ItemList<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_default")]
    pub items: Vec<T>,
}

/// Envelope returned by create/update endpoints
#[derive(Debug, Deserialize)]
pub struct ResourceResponse<T> {
    pub resource: T,
    pub status: Option<ResourceStatus>,
}

/// Problem detail body returned on API errors
#[derive(Debug, Deserialize)]
pub struct Problem {
    pub title: Option<String>,
    pub detail: Option<String>,
}

/// A field the API sends as a number, a string, or not at all
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Loose {
    Integer(i64),
    Float(f64),
    Text(String),
    #[default]
    Absent,
    Other(Value),
}

impl Loose {
    pub fn is_absent(&self) -> bool {
        matches!(self, Loose::Absent)
    }
}

/// Propagation state attached to a domain and to mutation responses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceStatus {
    pub message: Option<String>,
    pub change_id: Option<String>,
    pub propagation_status: Option<String>,
    pub propagation_status_date: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub passing_validation: bool,
}

/// Domain as returned by the domains listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSummary {
    pub name: String,
    pub status: Option<String>,
    pub last_modified: Option<String>,
}

/// Full GTM domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    pub name: String,
    #[serde(rename = "type")]
    pub domain_type: Option<String>,
    #[serde(default, deserialize_with = "null_default", skip_serializing_if = "Vec::is_empty")]
    pub datacenters: Vec<DataCenter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    pub last_modified: Option<String>,
    pub last_modified_by: Option<String>,
    pub modification_comments: Option<String>,

    /// Fields not shown by this tool, kept so updates round-trip
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCenter {
    #[serde(default, deserialize_with = "null_default")]
    pub datacenter_id: i64,
    pub nickname: Option<String>,
    pub city: Option<String>,
    pub clone_of: Option<i64>,
    pub continent: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub state_or_province: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub r#virtual: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub cloud_server_targeting: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficTarget {
    #[serde(default, deserialize_with = "null_default")]
    pub datacenter_id: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub weight: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub servers: Vec<String>,
    #[serde(default, skip_serializing_if = "Loose::is_absent")]
    pub name: Loose,
    #[serde(rename = "handoutCName", default, skip_serializing_if = "Loose::is_absent")]
    pub handout_cname: Loose,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LivenessTest {
    pub name: String,
    #[serde(rename = "httpError3xx", default, deserialize_with = "null_default")]
    pub http_error_3xx: bool,
    #[serde(rename = "httpError4xx", default, deserialize_with = "null_default")]
    pub http_error_4xx: bool,
    #[serde(rename = "httpError5xx", default, deserialize_with = "null_default")]
    pub http_error_5xx: bool,
    #[serde(default, deserialize_with = "null_default")]
    pub test_interval: i64,
    pub test_object: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub test_object_port: i64,
    pub test_object_protocol: Option<String>,
    pub test_object_username: Option<String>,
    pub test_object_password: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub test_timeout: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub disable_nonstandard_port_warning: bool,
    pub request_string: Option<String>,
    pub response_string: Option<String>,
    pub ssl_client_private_key: Option<String>,
    pub ssl_client_certificate: Option<String>,
    pub host_header: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub traffic_targets: Vec<TrafficTarget>,
    #[serde(default, deserialize_with = "null_default")]
    pub liveness_tests: Vec<LivenessTest>,
    #[serde(rename = "backupCName")]
    pub backup_cname: Option<String>,
    pub backup_ip: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub balance_by_download_score: bool,
    pub cname: Option<String>,
    pub comments: Option<String>,
    #[serde(rename = "dynamicTTL", default, deserialize_with = "null_default")]
    pub dynamic_ttl: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub failback_delay: i64,
    #[serde(default, deserialize_with = "null_default")]
    pub failover_delay: i64,
    pub handout_mode: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub health_max: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub health_multiplier: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub health_threshold: f64,
    #[serde(default, deserialize_with = "null_default")]
    pub ipv6: bool,
    pub last_modified: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub load_imbalance_percentage: f64,
    #[serde(default, skip_serializing_if = "Loose::is_absent")]
    pub map_name: Loose,
    #[serde(default, skip_serializing_if = "Loose::is_absent")]
    pub max_unreachable_penalty: Loose,
    #[serde(default, deserialize_with = "null_default")]
    pub mx_records: Vec<Loose>,
    pub score_aggregation_type: Option<String>,
    #[serde(rename = "staticTTL", default, skip_serializing_if = "Loose::is_absent")]
    pub static_ttl: Loose,
    #[serde(default, skip_serializing_if = "Loose::is_absent")]
    pub stickiness_bonus_constant: Loose,
    #[serde(default, skip_serializing_if = "Loose::is_absent")]
    pub stickiness_bonus_percentage: Loose,
    #[serde(default, skip_serializing_if = "Loose::is_absent")]
    pub unreachable_threshold: Loose,
    #[serde(default, deserialize_with = "null_default")]
    pub use_computed_targets: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Property {
    /// Trailing segment of the dotted name, e.g. `web` for `foo.com.web`
    pub fn product(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or_default()
    }
}

/// Current propagation status of a domain
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainStatus {
    pub propagation_status: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub passing_validation: bool,
    pub message: Option<String>,
    pub change_id: Option<String>,
    pub propagation_status_date: Option<String>,
}
