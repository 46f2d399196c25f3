//! Errors surfaced at the façade boundary

use crate::api::ApiError;
use crate::domain::public_cloud::{DomainError, ReasonInstanceCannotBeTerminated};
use crate::facades::public_cloud::data_adapters::AdapterError;
use tfplug::types::Diagnostic;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error("instance {id} is not allowed to be terminated: {reason}")]
    InstanceNotTerminable {
        id: String,
        reason: ReasonInstanceCannotBeTerminated,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Single diagnostic for a failed operation; the detail is the error text
    pub fn to_diagnostic(&self, summary: impl Into<String>) -> Diagnostic {
        Diagnostic::error(summary, self.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api(e) if e.is_not_found())
    }
}
