//! Adapters between the wire, domain and model representations of public cloud data
//!
//! Every adapter is a pure function. Errors name the adapter that detected
//! them and are wrapped by each enclosing adapter, so a failure deep inside
//! an instance reads `adapt_instance_details: adapt_contract: ...`.

mod from_resource_model;
mod to_data_source_model;
mod to_domain_entity;
mod to_resource_model;
mod to_sdk_opts;

pub use from_resource_model::{
    adapt_to_create_instance, adapt_to_update_instance, decode_instance_resource_model,
};
pub use to_data_source_model::adapt_instances as adapt_instances_to_data_source_model;
pub use to_domain_entity::{
    adapt_instance, adapt_instance_details, adapt_instance_type, adapt_region,
};
pub use to_resource_model::adapt_instance as adapt_instance_to_resource_model;
pub use to_sdk_opts::{adapt_to_launch_instance_opts, adapt_to_update_instance_opts};

use crate::domain::public_cloud::DomainError;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tfplug::types::{AttributePath, Diagnostics};
use tfplug::value::{object_value_from, ObjectType, ToDynamic};
use tfplug::Value;

/// Canonical textual form of timestamps in state
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z %Z";

#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    #[error("{function}: {source}")]
    Domain {
        function: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("{function}: {field}: {source}")]
    InvalidField {
        function: &'static str,
        field: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("{function}: {source}")]
    Nested {
        function: &'static str,
        #[source]
        source: Box<AdapterError>,
    },

    #[error("{function}: {diagnostics}")]
    ConfigDecode {
        function: &'static str,
        diagnostics: Diagnostics,
    },

    #[error("{function}: {diagnostics}")]
    AttributeTypeMismatch {
        function: &'static str,
        diagnostics: Diagnostics,
    },
}

impl AdapterError {
    /// Innermost domain error, if the failure came from a domain invariant
    pub fn domain_error(&self) -> Option<&DomainError> {
        match self {
            AdapterError::Domain { source, .. } | AdapterError::InvalidField { source, .. } => {
                Some(source)
            }
            AdapterError::Nested { source, .. } => source.domain_error(),
            _ => None,
        }
    }
}

pub(crate) fn domain_err(function: &'static str) -> impl FnOnce(DomainError) -> AdapterError {
    move |source| AdapterError::Domain { function, source }
}

pub(crate) fn field_err(
    function: &'static str,
    field: &'static str,
) -> impl FnOnce(DomainError) -> AdapterError {
    move |source| AdapterError::InvalidField {
        function,
        field,
        source,
    }
}

pub(crate) fn nested_err(function: &'static str) -> impl FnOnce(AdapterError) -> AdapterError {
    move |source| AdapterError::Nested {
        function,
        source: Box::new(source),
    }
}

pub(crate) fn format_time(time: Option<&DateTime<Utc>>) -> Value<String> {
    Value::from_option(time.map(|t| t.format(TIME_FORMAT).to_string()))
}

/// Encodes a model and checks it against its declared attribute types
pub(crate) fn check_model<T: ToDynamic + ObjectType>(
    function: &'static str,
    model: T,
) -> Result<T, AdapterError> {
    object_value_from(&model, &AttributePath::root())
        .map_err(|diagnostics| AdapterError::AttributeTypeMismatch {
            function,
            diagnostics,
        })?;
    Ok(model)
}
