//! Dedicated server data sources

pub mod servers;

pub use servers::DedicatedServersDataSource;
