//! Resource implementations

pub mod dedicated_server;
pub mod public_cloud;

pub use dedicated_server::DedicatedServerResource;
pub use public_cloud::InstanceResource;
