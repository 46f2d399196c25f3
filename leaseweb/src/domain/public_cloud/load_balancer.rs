use super::enums::{InstanceType, State};
use super::value_object::Uuid;
use super::{Contract, Ip, LoadBalancerConfiguration, PrivateNetwork, Region, Resources};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct LoadBalancer {
    pub id: Uuid,
    pub load_balancer_type: InstanceType,
    pub resources: Resources,
    pub region: Region,
    pub state: State,
    pub contract: Contract,
    pub ips: Vec<Ip>,
    pub reference: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub private_network: Option<PrivateNetwork>,
    pub configuration: Option<LoadBalancerConfiguration>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalLoadBalancerValues {
    pub reference: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub private_network: Option<PrivateNetwork>,
    pub configuration: Option<LoadBalancerConfiguration>,
}

impl LoadBalancer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Uuid,
        load_balancer_type: InstanceType,
        resources: Resources,
        region: Region,
        state: State,
        contract: Contract,
        ips: Vec<Ip>,
        optional: OptionalLoadBalancerValues,
    ) -> Self {
        Self {
            id,
            load_balancer_type,
            resources,
            region,
            state,
            contract,
            ips,
            reference: optional.reference,
            started_at: optional.started_at,
            private_network: optional.private_network,
            configuration: optional.configuration,
        }
    }
}
