//! Public cloud data sources

pub mod instances;

pub use instances::InstancesDataSource;
