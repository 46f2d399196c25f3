//! Dedicated server façade

mod facade;

pub use facade::DedicatedServerFacade;
