//! Public cloud resources

pub mod instance;

pub use instance::InstanceResource;
