//! Public cloud domain model

mod auto_scaling_group;
mod contract;
mod ddos;
mod errors;
mod health_check;
mod image;
mod instance;
mod instance_type;
mod ip;
mod iso;
mod load_balancer;
mod load_balancer_configuration;
mod prices;
mod private_network;
mod region;
mod resources;
mod sticky_session;
mod storage_size;
mod volume;

pub mod enums;
pub mod value_object;

pub use auto_scaling_group::{AutoScalingGroup, OptionalAutoScalingGroupValues};
pub use contract::Contract;
pub use ddos::Ddos;
pub use errors::DomainError;
pub use health_check::HealthCheck;
pub use image::{Image, OptionalImageValues};
pub use instance::{
    Instance, InstanceUpdate, OptionalCreateInstanceValues, OptionalInstanceValues,
    OptionalUpdateInstanceValues, ReasonInstanceCannotBeTerminated,
};
pub use instance_type::InstanceTypeDetails;
pub use ip::{Ip, OptionalIpValues};
pub use iso::Iso;
pub use load_balancer::{LoadBalancer, OptionalLoadBalancerValues};
pub use load_balancer_configuration::{
    LoadBalancerConfiguration, OptionalLoadBalancerConfigurationValues,
};
pub use prices::{Price, Prices, Storage};
pub use private_network::PrivateNetwork;
pub use region::Region;
pub use resources::{Cpu, Memory, NetworkSpeed, Resources};
pub use sticky_session::StickySession;
pub use storage_size::StorageSize;
pub use volume::Volume;
