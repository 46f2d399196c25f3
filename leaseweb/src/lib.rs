//! Leaseweb provider
//!
//! Manages public cloud instances and the settings of dedicated servers
//! through the Leaseweb REST API.

#[macro_use]
pub mod models;

pub mod api;
pub mod config;
pub mod data_sources;
pub mod domain;
pub mod error;
pub mod facades;
pub mod provider_data;
pub mod resources;

pub use error::{Error, Result};
pub use provider_data::LeasewebProviderData;

use async_trait::async_trait;
use config::ProviderConfig;
use std::collections::HashMap;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::provider::{
    ConfigureProviderRequest, ConfigureProviderResponse, DataSourceFactory, Provider,
    ProviderMetadataRequest, ProviderMetadataResponse, ProviderSchemaRequest,
    ProviderSchemaResponse, ResourceFactory, ValidateProviderConfigRequest,
    ValidateProviderConfigResponse,
};
use tfplug::schema::{AttributeBuilder, AttributeType, Schema, SchemaBuilder};
use tfplug::types::Diagnostics;
use tfplug::validator::OneOf;

pub const PROVIDER_NAME: &str = "leaseweb";

#[derive(Default)]
pub struct LeasewebProvider {
    config: Option<ProviderConfig>,
}

impl LeasewebProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration resolved by the last successful `configure`
    pub fn config(&self) -> Option<&ProviderConfig> {
        self.config.as_ref()
    }

    pub fn schema_static() -> Schema {
        SchemaBuilder::new()
            .version(0)
            .description("Interact with the Leaseweb API")
            .attribute(
                AttributeBuilder::new("token", AttributeType::String)
                    .description("API token, defaults to the LEASEWEB_TOKEN environment variable")
                    .optional()
                    .sensitive()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("host", AttributeType::String)
                    .description("API host, defaults to api.leaseweb.com")
                    .optional()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("scheme", AttributeType::String)
                    .description("API scheme, defaults to https")
                    .optional()
                    .string_validator(OneOf::new(["http", "https"]))
                    .build(),
            )
            .build()
    }
}

#[async_trait]
impl Provider for LeasewebProvider {
    fn type_name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: ProviderMetadataRequest,
    ) -> ProviderMetadataResponse {
        ProviderMetadataResponse {
            type_name: PROVIDER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    async fn schema(&self, _ctx: Context, _request: ProviderSchemaRequest) -> ProviderSchemaResponse {
        ProviderSchemaResponse {
            schema: Self::schema_static(),
            diagnostics: Diagnostics::new(),
        }
    }

    async fn validate(
        &self,
        ctx: Context,
        request: ValidateProviderConfigRequest,
    ) -> ValidateProviderConfigResponse {
        ValidateProviderConfigResponse {
            diagnostics: Self::schema_static()
                .validate_config(&ctx, &request.config)
                .await,
        }
    }

    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureProviderRequest,
    ) -> ConfigureProviderResponse {
        let mut diagnostics = Diagnostics::new();

        let config = match ProviderConfig::from_config(&request.config) {
            Ok(config) => config,
            Err(errors) => {
                diagnostics.extend(errors);
                return ConfigureProviderResponse {
                    diagnostics,
                    provider_data: None,
                };
            }
        };

        tracing::info!(
            terraform_version = %request.terraform_version,
            base_url = %config.base_url(),
            "Configuring Leaseweb provider"
        );

        let client = match config.client() {
            Ok(client) => client,
            Err(e) => {
                diagnostics.push(e.to_diagnostic("Unable to create Leaseweb API client"));
                return ConfigureProviderResponse {
                    diagnostics,
                    provider_data: None,
                };
            }
        };

        self.config = Some(config);

        ConfigureProviderResponse {
            diagnostics,
            provider_data: Some(Arc::new(LeasewebProviderData::new(client))),
        }
    }

    fn resources(&self) -> HashMap<String, ResourceFactory> {
        let mut resources: HashMap<String, ResourceFactory> = HashMap::new();
        resources.insert(
            resources::public_cloud::instance::TYPE_NAME.to_string(),
            Box::new(|| Box::new(resources::InstanceResource::new())),
        );
        resources.insert(
            resources::dedicated_server::server::TYPE_NAME.to_string(),
            Box::new(|| Box::new(resources::DedicatedServerResource::new())),
        );
        resources
    }

    fn data_sources(&self) -> HashMap<String, DataSourceFactory> {
        let mut data_sources: HashMap<String, DataSourceFactory> = HashMap::new();
        data_sources.insert(
            data_sources::public_cloud::instances::TYPE_NAME.to_string(),
            Box::new(|| Box::new(data_sources::InstancesDataSource::new())),
        );
        data_sources.insert(
            data_sources::dedicated_server::servers::TYPE_NAME.to_string(),
            Box::new(|| Box::new(data_sources::DedicatedServersDataSource::new())),
        );
        data_sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tfplug::data_source::DataSource;
    use tfplug::resource::{ConfigureResourceRequest, ResourceWithConfigure};
    use tfplug::types::{AttributePath, DynamicValue};

    fn configure_request(config: DynamicValue) -> ConfigureProviderRequest {
        ConfigureProviderRequest {
            terraform_version: "1.9.0".to_string(),
            config,
        }
    }

    fn provider_block(token: &str) -> DynamicValue {
        let mut config = DynamicValue::object();
        config
            .set_string(&AttributePath::new("token"), token.to_string())
            .unwrap();
        config
    }

    #[tokio::test]
    #[serial]
    async fn provider_configures_from_env() {
        std::env::set_var(config::TOKEN_ENV, "env-token");

        let mut provider = LeasewebProvider::new();
        let response = provider
            .configure(Context::new(), configure_request(DynamicValue::null()))
            .await;

        assert!(response.diagnostics.is_empty(), "{}", response.diagnostics);
        assert!(response.provider_data.is_some());
        let resolved = provider.config().unwrap();
        assert_eq!(resolved.token, "env-token");
        assert_eq!(resolved.base_url(), "https://api.leaseweb.com");

        std::env::remove_var(config::TOKEN_ENV);
    }

    #[tokio::test]
    #[serial]
    async fn provider_configure_requires_token() {
        std::env::remove_var(config::TOKEN_ENV);

        let mut provider = LeasewebProvider::new();
        let response = provider
            .configure(Context::new(), configure_request(DynamicValue::object()))
            .await;

        assert!(response.provider_data.is_none());
        assert_eq!(response.diagnostics.errors[0].summary, "Missing API Token");
        assert!(provider.config().is_none());
    }

    #[tokio::test]
    #[serial]
    async fn provider_data_reaches_resources() {
        std::env::remove_var(config::TOKEN_ENV);

        let mut provider = LeasewebProvider::new();
        let response = provider
            .configure(Context::new(), configure_request(provider_block("block-token")))
            .await;
        assert!(response.diagnostics.is_empty());

        let factories = provider.resources();
        let mut resource = factories[resources::public_cloud::instance::TYPE_NAME]();
        let configured = resource
            .configure(
                Context::new(),
                ConfigureResourceRequest {
                    provider_data: response.provider_data,
                },
            )
            .await;
        assert!(configured.diagnostics.is_empty());
    }

    #[tokio::test]
    async fn provider_rejects_unsupported_scheme() {
        let mut config = provider_block("token");
        config
            .set_string(&AttributePath::new("scheme"), "ftp".to_string())
            .unwrap();

        let response = LeasewebProvider::new()
            .validate(
                Context::new(),
                ValidateProviderConfigRequest { config },
            )
            .await;

        assert_eq!(response.diagnostics.errors.len(), 1);
        assert_eq!(
            response.diagnostics.errors[0].attribute,
            Some(AttributePath::new("scheme"))
        );
    }

    #[tokio::test]
    async fn provider_lists_every_type() {
        let provider = LeasewebProvider::new();

        let mut resources: Vec<String> = provider.resources().into_keys().collect();
        resources.sort();
        assert_eq!(
            resources,
            vec!["leaseweb_dedicated_server", "leaseweb_public_cloud_instance"]
        );

        let mut data_sources: Vec<String> = provider.data_sources().into_keys().collect();
        data_sources.sort();
        assert_eq!(
            data_sources,
            vec!["leaseweb_dedicated_servers", "leaseweb_public_cloud_instances"]
        );

        for factory in provider.data_sources().values() {
            assert!(factory().type_name().starts_with(PROVIDER_NAME));
        }
    }

    #[tokio::test]
    async fn provider_metadata_reports_crate_version() {
        let response = LeasewebProvider::new()
            .metadata(Context::new(), ProviderMetadataRequest)
            .await;

        assert_eq!(response.type_name, "leaseweb");
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
    }
}
