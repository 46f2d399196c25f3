//! Public cloud wire records
//!
//! Nullable fields are `Option`s so an absent field never reads as its zero
//! value. Enumerations travel as their raw string or integer token and are
//! only interpreted by the domain adapters.

use crate::api::common::Metadata;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cpu {
    pub value: i64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpeed {
    pub value: i64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub cpu: Cpu,
    pub memory: Memory,
    pub public_network_speed: NetworkSpeed,
    pub private_network_speed: NetworkSpeed,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageSize {
    pub size: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    pub family: String,
    pub flavour: String,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub state_reason: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub storage_size: Option<StorageSize>,
    #[serde(default)]
    pub market_apps: Vec<String>,
    #[serde(default)]
    pub storage_types: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub billing_frequency: i64,
    pub term: i64,
    #[serde(rename = "type")]
    pub contract_type: String,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub renewals_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ddos {
    pub detection_profile: String,
    pub protection_type: String,
}

/// IP as embedded in compact instance and load balancer listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ip {
    pub ip: String,
    pub prefix_length: String,
    pub version: i64,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: String,
    #[serde(default)]
    pub reverse_lookup: Option<String>,
}

/// IP as embedded in instance details, carries DDoS settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpDetails {
    pub ip: String,
    pub prefix_length: String,
    pub version: i64,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: String,
    #[serde(default)]
    pub reverse_lookup: Option<String>,
    #[serde(default)]
    pub ddos: Option<Ddos>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Iso {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivateNetwork {
    #[serde(rename = "privateNetworkId")]
    pub id: String,
    pub status: String,
    pub subnet: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub size: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StickySession {
    pub enabled: bool,
    pub max_life_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub method: String,
    pub uri: String,
    #[serde(default)]
    pub host: Option<String>,
    pub port: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerConfiguration {
    #[serde(default)]
    pub sticky_session: Option<StickySession>,
    pub balance: String,
    #[serde(default)]
    pub health_check: Option<HealthCheck>,
    #[serde(rename = "xForwardedFor")]
    pub x_forwarded_for: bool,
    pub idle_timeout: i64,
    pub target_port: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancer {
    pub id: String,
    #[serde(rename = "type")]
    pub load_balancer_type: String,
    pub resources: Resources,
    pub region: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub state: String,
    pub contract: Contract,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ips: Vec<Ip>,
    #[serde(default)]
    pub configuration: Option<LoadBalancerConfiguration>,
    #[serde(default)]
    pub private_network: Option<PrivateNetwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoScalingGroup {
    pub id: String,
    #[serde(rename = "type")]
    pub auto_scaling_group_type: String,
    pub state: String,
    #[serde(default)]
    pub desired_amount: Option<i64>,
    pub region: String,
    pub reference: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub minimum_amount: Option<i64>,
    #[serde(default)]
    pub maximum_amount: Option<i64>,
    #[serde(default)]
    pub cpu_threshold: Option<i64>,
    #[serde(default)]
    pub warmup_time: Option<i64>,
    #[serde(default)]
    pub cooldown_time: Option<i64>,
    #[serde(default)]
    pub load_balancer: Option<LoadBalancer>,
}

/// Instance as returned by the listing endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub id: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub resources: Resources,
    pub region: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub image: Image,
    pub state: String,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub has_public_ip_v4: Option<bool>,
    #[serde(default)]
    pub has_private_network: Option<bool>,
    pub root_disk_size: i64,
    pub root_disk_storage_type: String,
    pub contract: Contract,
    #[serde(default)]
    pub ips: Vec<Ip>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub market_app_id: Option<String>,
    #[serde(default)]
    pub auto_scaling_group: Option<AutoScalingGroup>,
}

/// Instance as returned by the single instance endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDetails {
    pub id: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub resources: Resources,
    pub region: String,
    #[serde(default)]
    pub reference: Option<String>,
    pub image: Image,
    pub state: String,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub has_public_ip_v4: Option<bool>,
    #[serde(default)]
    pub has_private_network: Option<bool>,
    pub root_disk_size: i64,
    pub root_disk_storage_type: String,
    pub contract: Contract,
    #[serde(default)]
    pub ips: Vec<IpDetails>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub market_app_id: Option<String>,
    #[serde(default)]
    pub auto_scaling_group: Option<AutoScalingGroup>,
    #[serde(default)]
    pub iso: Option<Iso>,
    #[serde(default)]
    pub private_network: Option<PrivateNetwork>,
    #[serde(default)]
    pub volume: Option<Volume>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InstanceList {
    #[serde(default)]
    pub instances: Vec<Instance>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub hourly_price: String,
    pub monthly_price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Storage {
    pub local: Price,
    pub central: Price,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prices {
    pub currency: String,
    pub currency_symbol: String,
    pub compute: Price,
    pub storage: Storage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceType {
    pub name: String,
    pub resources: Resources,
    pub prices: Prices,
    #[serde(default)]
    pub storage_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceTypeList {
    #[serde(default)]
    pub instance_types: Vec<InstanceType>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegionList {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

/// Body of `POST /instances`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceOpts {
    pub region: String,
    #[serde(rename = "type")]
    pub instance_type: String,
    pub image_id: String,
    pub contract_type: String,
    pub contract_term: i64,
    pub billing_frequency: i64,
    pub root_disk_storage_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i64>,
}

/// Body of `PUT /instances/{id}`; absent fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceOpts {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_term: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_frequency: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_disk_size: Option<i64>,
}
