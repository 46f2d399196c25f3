//! Dedicated server wire records

use crate::api::common::Metadata;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerContract {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
    #[serde(default)]
    pub delivery_status: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub sales_org_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub rack: Option<String>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub suite: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerNetworkInterface {
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub null_routed: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerNetworkInterfaces {
    #[serde(default)]
    pub public: Option<ServerNetworkInterface>,
    #[serde(default)]
    pub internal: Option<ServerNetworkInterface>,
    #[serde(default)]
    pub remote_management: Option<ServerNetworkInterface>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub id: String,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default)]
    pub contract: Option<ServerContract>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub network_interfaces: Option<ServerNetworkInterfaces>,
}

impl Server {
    pub fn reference(&self) -> Option<&str> {
        self.contract.as_ref()?.reference.as_deref()
    }

    /// Main public IP without its prefix length
    pub fn public_ip(&self) -> Option<&str> {
        let ip = self.network_interfaces.as_ref()?.public.as_ref()?.ip.as_deref()?;
        Some(strip_prefix_length(ip))
    }

    pub fn remote_management_ip(&self) -> Option<&str> {
        let ip = self
            .network_interfaces
            .as_ref()?
            .remote_management
            .as_ref()?
            .ip
            .as_deref()?;
        Some(strip_prefix_length(ip))
    }

    pub fn internal_mac(&self) -> Option<&str> {
        self.network_interfaces
            .as_ref()?
            .internal
            .as_ref()?
            .mac
            .as_deref()
    }
}

/// `10.0.0.1/27` becomes `10.0.0.1`
pub fn strip_prefix_length(ip: &str) -> &str {
    ip.split('/').next().unwrap_or(ip)
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerList {
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

/// Query filters of `GET /servers`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListServersOpts {
    pub reference: Option<String>,
    pub site: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerStatus {
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerInfo {
    #[serde(default)]
    pub ipmi: Option<PowerStatus>,
    #[serde(default)]
    pub pdu: Option<PowerStatus>,
}

impl PowerInfo {
    /// Powered on unless either the PDU or IPMI reports `off`
    pub fn is_powered_on(&self) -> bool {
        let is_off = |status: &Option<PowerStatus>| {
            status
                .as_ref()
                .map(|s| s.status.eq_ignore_ascii_case("off"))
                .unwrap_or(false)
        };

        !is_off(&self.pdu) && !is_off(&self.ipmi)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpDdos {
    #[serde(default)]
    pub detection_profile: Option<String>,
    #[serde(default)]
    pub protection_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ip {
    pub ip: String,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub network_type: Option<String>,
    #[serde(default)]
    pub null_routed: bool,
    #[serde(default)]
    pub main_ip: Option<bool>,
    #[serde(default)]
    pub reverse_lookup: Option<String>,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub ddos: Option<IpDdos>,
}

/// Body of `PUT /servers/{id}/ips/{ip}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIpProfileOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detection_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_lookup: Option<String>,
}

/// Body of `POST /servers/{id}/ips/{ip}/null`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NullRouteOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhcpOption {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DhcpReservation {
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub options: Vec<DhcpOption>,
}

impl DhcpReservation {
    pub fn bootfile(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.name == "bootfile")
            .and_then(|o| o.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DhcpReservationList {
    #[serde(default)]
    pub leases: Vec<DhcpReservation>,
    #[serde(rename = "_metadata", default)]
    pub metadata: Metadata,
}

/// Body of `POST /servers/{id}/leases`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDhcpReservationOpts {
    pub bootfile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterface {
    #[serde(default)]
    pub link_speed: Option<String>,
    #[serde(default)]
    pub oper_status: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub switch_interface: Option<String>,
    #[serde(default)]
    pub switch_name: Option<String>,
    #[serde(default, rename = "type")]
    pub interface_type: Option<String>,
}

impl NetworkInterface {
    pub fn is_open(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.eq_ignore_ascii_case("open"))
            .unwrap_or(false)
    }
}

/// Body of `PUT /servers/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServerReferenceOpts {
    pub reference: String,
}
