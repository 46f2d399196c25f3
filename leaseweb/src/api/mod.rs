//! Leaseweb REST API client

mod client;
pub mod common;
pub mod dedicated_server;
mod error;
pub mod public_cloud;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use client::{Client, AUTH_HEADER};
pub use error::ApiError;
