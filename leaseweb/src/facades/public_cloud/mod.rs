//! Public cloud façade, its data adapters and plan-time validators

pub mod data_adapters;
mod facade;
pub mod validators;

pub use facade::PublicCloudFacade;

#[cfg(test)]
#[path = "./facade_test.rs"]
mod facade_test;
