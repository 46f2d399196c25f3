use super::enums::Balance;
use super::{HealthCheck, StickySession};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerConfiguration {
    pub balance: Balance,
    pub x_forwarded_for: bool,
    pub idle_timeout: i64,
    pub target_port: i64,
    pub sticky_session: Option<StickySession>,
    pub health_check: Option<HealthCheck>,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalLoadBalancerConfigurationValues {
    pub sticky_session: Option<StickySession>,
    pub health_check: Option<HealthCheck>,
}

impl LoadBalancerConfiguration {
    pub fn new(
        balance: Balance,
        x_forwarded_for: bool,
        idle_timeout: i64,
        target_port: i64,
        optional: OptionalLoadBalancerConfigurationValues,
    ) -> Self {
        Self {
            balance,
            x_forwarded_for,
            idle_timeout,
            target_port,
            sticky_session: optional.sticky_session,
            health_check: optional.health_check,
        }
    }
}
