//! Output formatting module

use comfy_table::{presets::ASCII_FULL, Table};
use owo_colors::OwoColorize;

use crate::api::models::{
    DataCenter, Domain, DomainStatus, DomainSummary, LivenessTest, Loose, Property, TrafficTarget,
};

/// Label/value rows of a single-resource view
pub type Rows = Vec<(&'static str, String)>;

/// Headerless two-column table, one row per attribute
pub fn basic_table(rows: &Rows) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value.clone()]);
    }
    table
}

/// Table with a header row, used for collections
pub fn headed_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(headers.to_vec());
    for row in rows {
        table.add_row(row);
    }
    table
}

pub fn print_basic_table(rows: &Rows) {
    println!("{}", basic_table(rows));
}

pub fn print_table_with_headers(headers: &[&str], rows: Vec<Vec<String>>) {
    println!("{}", headed_table(headers, rows));
}

/// Print success message
pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg);
}

/// Print error message
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Print info message
pub fn info(msg: &str) {
    println!("{} {}", "ℹ".blue().bold(), msg);
}

/// Print a section heading above a nested record
pub fn heading(title: &str) {
    println!("\n{}", title.bold());
}

/// A collection view: a notice when there is nothing to list, otherwise table rows
#[derive(Debug, PartialEq)]
pub enum Listing {
    Empty(String),
    Rows(Vec<Vec<String>>),
}

impl Listing {
    pub fn print(self, headers: &[&str]) {
        match self {
            Listing::Empty(msg) => info(&msg),
            Listing::Rows(rows) => print_table_with_headers(headers, rows),
        }
    }
}

/// One printed line of a batch delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Deleted(String),
    Failed(String),
}

/// Per-item lines of a batch delete, in the order they were printed
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<Outcome>,
}

impl BatchReport {
    pub fn deleted(&mut self, msg: String) {
        success(&msg);
        self.outcomes.push(Outcome::Deleted(msg));
    }

    pub fn failed(&mut self, msg: String) {
        error(&msg);
        self.outcomes.push(Outcome::Failed(msg));
    }

    pub fn failures(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, Outcome::Failed(_)))
            .count()
    }
}

// Value formatting

pub fn format_bool(value: bool) -> String {
    value.to_string()
}

/// Floats always carry six decimals
pub fn format_float(value: f64) -> String {
    format!("{:.6}", value)
}

pub fn format_loose(value: &Loose) -> String {
    match value {
        Loose::Integer(n) => n.to_string(),
        Loose::Float(f) => format_float(*f),
        Loose::Text(s) => s.clone(),
        Loose::Absent | Loose::Other(_) => String::new(),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

pub fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Data center ids of a property's traffic targets
pub fn target_ids(targets: &[TrafficTarget]) -> String {
    join(targets.iter().map(|t| t.datacenter_id.to_string()))
}

// Collections

pub fn domain_list_rows(domains: &[DomainSummary]) -> Vec<Vec<String>> {
    domains
        .iter()
        .map(|d| vec![d.name.clone(), text(&d.status), text(&d.last_modified)])
        .collect()
}

pub fn data_center_list_rows(dcs: &[DataCenter]) -> Vec<Vec<String>> {
    dcs.iter()
        .map(|dc| vec![text(&dc.nickname), dc.datacenter_id.to_string()])
        .collect()
}

/// Stable sort by product, the trailing segment of the property name
pub fn sort_by_product(props: &mut [Property]) {
    props.sort_by(|a, b| a.product().cmp(b.product()));
}

pub fn property_list_rows(mut props: Vec<Property>) -> Vec<Vec<String>> {
    sort_by_product(&mut props);
    props
        .iter()
        .map(|p| {
            vec![
                p.name.clone(),
                text(&p.property_type),
                target_ids(&p.traffic_targets),
            ]
        })
        .collect()
}

// Single resources

pub fn domain_rows(domain: &Domain) -> Rows {
    let status = domain.status.clone().unwrap_or_default();
    vec![
        ("Name", domain.name.clone()),
        ("Type", text(&domain.domain_type)),
        (
            "DataCenters",
            join(domain.datacenters.iter().map(|dc| text(&dc.nickname))),
        ),
        ("Status", text(&status.message)),
        ("Propagation Status", text(&status.propagation_status)),
        ("Last Modified By", text(&domain.last_modified_by)),
        ("Last Modified", text(&domain.last_modified)),
        ("Modification Comments", text(&domain.modification_comments)),
    ]
}

pub fn data_center_rows(dc: &DataCenter) -> Rows {
    vec![
        ("Nickname", text(&dc.nickname)),
        ("DataCenterID", dc.datacenter_id.to_string()),
        ("City", text(&dc.city)),
        ("CloneOf", dc.clone_of.unwrap_or_default().to_string()),
        ("Continent", text(&dc.continent)),
        ("Country", text(&dc.country)),
        ("Latitude", format_float(dc.latitude.unwrap_or_default())),
        ("Longitude", format_float(dc.longitude.unwrap_or_default())),
        ("StateOrProvince", text(&dc.state_or_province)),
        ("Virtual", format_bool(dc.r#virtual)),
        ("CloudServerTargeting", format_bool(dc.cloud_server_targeting)),
    ]
}

pub fn property_rows(p: &Property) -> Rows {
    vec![
        ("BackupCname", text(&p.backup_cname)),
        ("BackupIP", text(&p.backup_ip)),
        ("BalanceByDownloadScore", format_bool(p.balance_by_download_score)),
        ("Cname", text(&p.cname)),
        ("Comments", text(&p.comments)),
        ("DynamicTTL", p.dynamic_ttl.to_string()),
        ("FailbackDelay", p.failback_delay.to_string()),
        ("FailoverDelay", p.failover_delay.to_string()),
        ("HandoutMode", text(&p.handout_mode)),
        ("HealthMax", format_float(p.health_max)),
        ("HealthMultiplier", format_float(p.health_multiplier)),
        ("HealthThreshold", format_float(p.health_threshold)),
        ("Ipv6", format_bool(p.ipv6)),
        ("LastModified", text(&p.last_modified)),
        (
            "LivenessTests",
            join(p.liveness_tests.iter().map(|t| t.name.as_str())),
        ),
        ("LoadImbalancePercentage", format_float(p.load_imbalance_percentage)),
        ("MapName", format_loose(&p.map_name)),
        ("MaxUnreachablePenalty", format_loose(&p.max_unreachable_penalty)),
        ("MxRecords", join(p.mx_records.iter().map(format_loose))),
        ("Name", p.name.clone()),
        ("ScoreAggregationType", text(&p.score_aggregation_type)),
        ("StaticTTL", format_loose(&p.static_ttl)),
        ("StickinessBonusConstant", format_loose(&p.stickiness_bonus_constant)),
        ("StickinessBonusPercentage", format_loose(&p.stickiness_bonus_percentage)),
        ("TrafficTargets", target_ids(&p.traffic_targets)),
        ("Type", text(&p.property_type)),
        ("UnreachableThreshold", format_loose(&p.unreachable_threshold)),
        ("UseComputedTargets", format_bool(p.use_computed_targets)),
    ]
}

pub fn traffic_target_rows(target: &TrafficTarget) -> Rows {
    vec![
        ("Name", format_loose(&target.name)),
        ("DCId", target.datacenter_id.to_string()),
        ("Enabled", format_bool(target.enabled)),
        ("HandoutCname", format_loose(&target.handout_cname)),
        ("Servers", join(&target.servers)),
        ("Weight", format_float(target.weight)),
    ]
}

pub fn liveness_test_rows(test: &LivenessTest) -> Rows {
    vec![
        ("Name", test.name.clone()),
        ("HTTPError3xx", format_bool(test.http_error_3xx)),
        ("HTTPError4xx", format_bool(test.http_error_4xx)),
        ("HTTPError5xx", format_bool(test.http_error_5xx)),
        ("TestInterval", test.test_interval.to_string()),
        ("TestObject", text(&test.test_object)),
        ("TestObjectPort", test.test_object_port.to_string()),
        ("TestObjectProtocol", text(&test.test_object_protocol)),
        ("TestObjectUsername", text(&test.test_object_username)),
        ("TestObjectPassword", text(&test.test_object_password)),
        ("TestTimeout", format_float(test.test_timeout)),
        (
            "DisableNonstandardPortWarning",
            format_bool(test.disable_nonstandard_port_warning),
        ),
        ("RequestString", text(&test.request_string)),
        ("ResponseString", text(&test.response_string)),
        ("SSLClientPrivateKey", text(&test.ssl_client_private_key)),
        ("SSLCertificate", text(&test.ssl_client_certificate)),
        ("HostHeader", text(&test.host_header)),
    ]
}

pub fn status_rows(status: &DomainStatus) -> Rows {
    vec![
        ("PropagationStatus", text(&status.propagation_status)),
        ("PassingValidation", format_bool(status.passing_validation)),
        ("Message", text(&status.message)),
        ("ChangeID", text(&status.change_id)),
        ("PropagationStatusDate", text(&status.propagation_status_date)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn prop(name: &str) -> Property {
        Property {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn value_of<'a>(rows: &'a Rows, label: &str) -> &'a str {
        rows.iter()
            .find(|(l, _)| *l == label)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn floats_have_six_decimals() {
        assert_eq!(format_float(37.5), "37.500000");
        assert_eq!(format_float(0.0), "0.000000");
        assert_eq!(format_float(-122.0833), "-122.083300");
    }

    #[test]
    fn booleans_are_literal() {
        assert_eq!(format_bool(true), "true");
        assert_eq!(format_bool(false), "false");
    }

    #[test]
    fn loose_values_coerce() {
        assert_eq!(format_loose(&Loose::Integer(300)), "300");
        assert_eq!(format_loose(&Loose::Text("map-1".into())), "map-1");
        assert_eq!(format_loose(&Loose::Float(1.25)), "1.250000");
        assert_eq!(format_loose(&Loose::Absent), "");
        assert_eq!(format_loose(&Loose::Other(json!([1, 2]))), "");
    }

    #[test]
    fn properties_sort_by_product_keeping_ties_in_order() {
        let mut props = vec![
            prop("foo.com.web"),
            prop("bar.com.api"),
            prop("zed.com.web"),
            prop("abc.com.web"),
        ];
        sort_by_product(&mut props);

        let names: Vec<_> = props.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["bar.com.api", "foo.com.web", "zed.com.web", "abc.com.web"]);
    }

    #[test]
    fn property_list_rows_show_target_ids() {
        let mut web = prop("foo.com.web");
        web.property_type = Some("weighted-round-robin".into());
        web.traffic_targets = vec![
            TrafficTarget {
                datacenter_id: 3131,
                ..Default::default()
            },
            TrafficTarget {
                datacenter_id: 3132,
                ..Default::default()
            },
        ];

        let rows = property_list_rows(vec![web, prop("bar.com.api")]);
        assert_eq!(rows[0][0], "bar.com.api");
        assert_eq!(rows[1], ["foo.com.web", "weighted-round-robin", "3131, 3132"]);
    }

    #[test]
    fn data_center_rows_in_fixed_order() {
        let dc = DataCenter {
            datacenter_id: 42,
            nickname: Some("sjc".into()),
            latitude: Some(37.5),
            r#virtual: true,
            ..Default::default()
        };
        let rows = data_center_rows(&dc);

        let labels: Vec<_> = rows.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            [
                "Nickname",
                "DataCenterID",
                "City",
                "CloneOf",
                "Continent",
                "Country",
                "Latitude",
                "Longitude",
                "StateOrProvince",
                "Virtual",
                "CloudServerTargeting",
            ]
        );
        assert_eq!(value_of(&rows, "Latitude"), "37.500000");
        assert_eq!(value_of(&rows, "Longitude"), "0.000000");
        assert_eq!(value_of(&rows, "CloneOf"), "0");
        assert_eq!(value_of(&rows, "Virtual"), "true");

        let rendered = basic_table(&rows).to_string();
        assert!(rendered
            .lines()
            .any(|l| l.contains("Latitude") && l.contains("37.500000")));
    }

    #[test]
    fn property_rows_render_loose_and_lists() {
        let mut p = prop("www.example.web");
        p.static_ttl = Loose::Integer(600);
        p.map_name = Loose::Text("cidr-map".into());
        p.stickiness_bonus_percentage = Loose::Float(12.5);
        p.mx_records = vec![Loose::Text("mx1".into()), Loose::Text("mx2".into())];
        p.liveness_tests = vec![
            LivenessTest {
                name: "http".into(),
                ..Default::default()
            },
            LivenessTest {
                name: "https".into(),
                ..Default::default()
            },
        ];

        let rows = property_rows(&p);
        assert_eq!(rows.len(), 28);
        assert_eq!(rows[0].0, "BackupCname");
        assert_eq!(rows[27].0, "UseComputedTargets");
        assert_eq!(value_of(&rows, "StaticTTL"), "600");
        assert_eq!(value_of(&rows, "MapName"), "cidr-map");
        assert_eq!(value_of(&rows, "StickinessBonusPercentage"), "12.500000");
        assert_eq!(value_of(&rows, "UnreachableThreshold"), "");
        assert_eq!(value_of(&rows, "MxRecords"), "mx1, mx2");
        assert_eq!(value_of(&rows, "LivenessTests"), "http, https");
        assert_eq!(value_of(&rows, "HealthMax"), "0.000000");
    }

    #[test]
    fn traffic_target_rows_join_servers() {
        let target = TrafficTarget {
            datacenter_id: 7,
            enabled: true,
            weight: 50.0,
            servers: vec!["1.2.3.4".into(), "5.6.7.8".into()],
            handout_cname: Loose::Text("edge.example.net".into()),
            ..Default::default()
        };
        let rows = traffic_target_rows(&target);
        assert_eq!(value_of(&rows, "Servers"), "1.2.3.4, 5.6.7.8");
        assert_eq!(value_of(&rows, "Weight"), "50.000000");
        assert_eq!(value_of(&rows, "Enabled"), "true");
        assert_eq!(value_of(&rows, "HandoutCname"), "edge.example.net");
        assert_eq!(value_of(&rows, "Name"), "");
    }

    /// Border and separator lines, e.g. `+----+` or `|----+---|`
    fn rule_count(rendered: &str) -> usize {
        rendered
            .lines()
            .filter(|l| !l.is_empty() && l.chars().all(|c| matches!(c, '|' | '+' | '-' | '=')))
            .count()
    }

    #[test]
    fn basic_table_has_a_line_between_every_row() {
        let rows: Rows = vec![
            ("Name", "a".into()),
            ("Type", "b".into()),
            ("Cname", "c".into()),
        ];
        let rendered = basic_table(&rows).to_string();
        // top border, one line between each pair of rows, bottom border
        assert_eq!(rule_count(&rendered), rows.len() + 1);
        assert_eq!(rendered.lines().count(), rows.len() * 2 + 1);
    }

    #[test]
    fn headed_table_has_a_line_between_every_row() {
        let rows = vec![
            vec!["sjc".to_string(), "42".to_string()],
            vec!["iad".to_string(), "43".to_string()],
        ];
        let rendered = headed_table(&["Nickname", "DataCenter ID"], rows).to_string();
        // top border, header separator, one line between the rows, bottom border
        assert_eq!(rule_count(&rendered), 4);
        assert_eq!(rendered.lines().count(), 7);
    }

    #[test]
    fn headed_table_includes_headers() {
        let rendered = headed_table(
            &["Nickname", "DataCenter ID"],
            vec![vec!["sjc".into(), "42".into()]],
        )
        .to_string();
        assert!(rendered.contains("Nickname"));
        assert!(rendered.contains("DataCenter ID"));
        assert!(rendered.contains("42"));
    }

    #[test]
    fn null_fields_render_as_zero_values() {
        let p: Property = serde_json::from_value(json!({
            "name": "www.example.web",
            "healthMax": null,
            "ipv6": null,
            "mxRecords": null,
            "staticTTL": null,
            "trafficTargets": [{ "datacenterId": 3131, "weight": null, "servers": null }]
        }))
        .unwrap();

        let rows = property_rows(&p);
        assert_eq!(value_of(&rows, "HealthMax"), "0.000000");
        assert_eq!(value_of(&rows, "Ipv6"), "false");
        assert_eq!(value_of(&rows, "MxRecords"), "");
        assert_eq!(value_of(&rows, "StaticTTL"), "");
        assert_eq!(value_of(&rows, "TrafficTargets"), "3131");

        let target = traffic_target_rows(&p.traffic_targets[0]);
        assert_eq!(value_of(&target, "Weight"), "0.000000");
        assert_eq!(value_of(&target, "Servers"), "");
    }
}
