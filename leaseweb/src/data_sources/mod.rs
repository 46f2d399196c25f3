//! Data source implementations

pub mod dedicated_server;
pub mod public_cloud;

pub use dedicated_server::DedicatedServersDataSource;
pub use public_cloud::InstancesDataSource;
