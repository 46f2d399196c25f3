use super::enums::NetworkType;
use super::Ddos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ip {
    pub ip: String,
    pub prefix_length: String,
    pub version: i64,
    pub null_routed: bool,
    pub main_ip: bool,
    pub network_type: NetworkType,
    pub reverse_lookup: Option<String>,
    pub ddos: Option<Ddos>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalIpValues {
    pub reverse_lookup: Option<String>,
    pub ddos: Option<Ddos>,
}

impl Ip {
    pub fn new(
        ip: impl Into<String>,
        prefix_length: impl Into<String>,
        version: i64,
        null_routed: bool,
        main_ip: bool,
        network_type: NetworkType,
        optional: OptionalIpValues,
    ) -> Self {
        Self {
            ip: ip.into(),
            prefix_length: prefix_length.into(),
            version,
            null_routed,
            main_ip,
            network_type,
            reverse_lookup: optional.reverse_lookup,
            ddos: optional.ddos,
        }
    }
}
