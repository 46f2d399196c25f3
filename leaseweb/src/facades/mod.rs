//! Façades between the resources and the wire SDK
//!
//! A façade owns the shared client and sequences decode, domain adaptation,
//! the remote call and re-encoding for every lifecycle operation.

pub mod dedicated_server;
pub mod public_cloud;
