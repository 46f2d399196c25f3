//! tfplug - provider framework for Rust
//!
//! Types and traits for writing infrastructure-as-code providers: tri-state
//! values, schemas with attached validators and plan modifiers, diagnostics,
//! and the provider, resource and data source traits. The host transport is
//! not part of this crate.

// Core modules
pub mod context;
pub mod error;
pub mod schema;
pub mod types;
pub mod value;

// Provider API modules
pub mod data_source;
pub mod provider;
pub mod resource;

// Helper modules
pub mod import;
pub mod logging;
pub mod plan_modifier;
pub mod validator;

pub use context::Context;
pub use data_source::{DataSource, DataSourceWithConfigure};
pub use error::{Result, TfplugError};
pub use import::import_state_passthrough_id;
pub use logging::{init_logging, try_init_logging};
pub use provider::{DataSourceFactory, Provider, ResourceFactory};
pub use resource::{
    Resource, ResourceWithConfigure, ResourceWithImportState, ResourceWithModifyPlan,
};
pub use schema::{AttributeBuilder, AttributeType, NestedType, Schema, SchemaBuilder};
pub use types::{AttributePath, Diagnostic, Diagnostics, Dynamic, DynamicValue};
pub use value::{FromDynamic, ObjectReader, ObjectType, ObjectWriter, ToDynamic, Value};
