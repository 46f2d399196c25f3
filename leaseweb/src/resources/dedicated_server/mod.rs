//! Dedicated server resources

pub mod server;

pub use server::DedicatedServerResource;
