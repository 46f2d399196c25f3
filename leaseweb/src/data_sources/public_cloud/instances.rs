//! `leaseweb_public_cloud_instances` data source
//!
//! Lists every public cloud instance of the account with its full details.

use crate::facades::public_cloud::PublicCloudFacade;
use crate::provider_data::LeasewebProviderData;
use async_trait::async_trait;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::data_source::{
    ConfigureDataSourceRequest, ConfigureDataSourceResponse, DataSource, DataSourceMetadataRequest,
    DataSourceMetadataResponse, DataSourceSchemaRequest, DataSourceSchemaResponse,
    DataSourceWithConfigure, ReadDataSourceRequest, ReadDataSourceResponse,
    ValidateDataSourceConfigRequest, ValidateDataSourceConfigResponse,
};
use tfplug::schema::{Attribute, AttributeBuilder, AttributeType, NestedType, Schema, SchemaBuilder};
use tfplug::types::{Diagnostics, DynamicValue};
use tfplug::value::ToDynamic;

pub const TYPE_NAME: &str = "leaseweb_public_cloud_instances";

fn computed(name: &str, type_: AttributeType) -> Attribute {
    AttributeBuilder::new(name, type_).computed().build()
}

fn string(name: &str) -> Attribute {
    computed(name, AttributeType::String)
}

fn number(name: &str) -> Attribute {
    computed(name, AttributeType::Number)
}

fn boolean(name: &str) -> Attribute {
    computed(name, AttributeType::Bool)
}

fn object(name: &str, attributes: Vec<Attribute>) -> Attribute {
    AttributeBuilder::nested(name, NestedType::single(attributes))
        .computed()
        .build()
}

fn list(name: &str, attributes: Vec<Attribute>) -> Attribute {
    AttributeBuilder::nested(name, NestedType::list(attributes))
        .computed()
        .build()
}

fn value_with_unit(name: &str) -> Attribute {
    object(name, vec![number("value"), string("unit")])
}

fn resources() -> Attribute {
    object(
        "resources",
        vec![
            value_with_unit("cpu"),
            value_with_unit("memory"),
            value_with_unit("public_network_speed"),
            value_with_unit("private_network_speed"),
        ],
    )
}

fn contract() -> Attribute {
    object(
        "contract",
        vec![
            number("billing_frequency"),
            number("term"),
            string("type"),
            string("ends_at"),
            string("renewals_at"),
            string("created_at"),
            string("state"),
        ],
    )
}

fn ips() -> Attribute {
    list(
        "ips",
        vec![
            string("ip"),
            string("prefix_length"),
            number("version"),
            boolean("null_routed"),
            boolean("main_ip"),
            string("network_type"),
            string("reverse_lookup"),
            object("ddos", vec![string("detection_profile"), string("protection_type")]),
        ],
    )
}

fn private_network() -> Attribute {
    object("private_network", vec![string("id"), string("status"), string("subnet")])
}

fn image() -> Attribute {
    object(
        "image",
        vec![
            string("id"),
            string("name"),
            string("version"),
            string("family"),
            string("flavour"),
            string("architecture"),
            string("state"),
            string("state_reason"),
            string("region"),
            string("created_at"),
            string("updated_at"),
            boolean("custom"),
            object("storage_size", vec![number("size"), string("unit")]),
            computed("market_apps", AttributeType::list_of(AttributeType::String)),
            computed("storage_types", AttributeType::list_of(AttributeType::String)),
        ],
    )
}

fn load_balancer() -> Attribute {
    object(
        "load_balancer",
        vec![
            string("id"),
            string("type"),
            resources(),
            string("region"),
            string("reference"),
            string("state"),
            contract(),
            string("started_at"),
            ips(),
            private_network(),
            object(
                "configuration",
                vec![
                    string("balance"),
                    boolean("x_forwarded_for"),
                    number("idle_timeout"),
                    number("target_port"),
                    object("sticky_session", vec![boolean("enabled"), number("max_life_time")]),
                    object(
                        "health_check",
                        vec![string("method"), string("uri"), string("host"), number("port")],
                    ),
                ],
            ),
        ],
    )
}

fn auto_scaling_group() -> Attribute {
    object(
        "auto_scaling_group",
        vec![
            string("id"),
            string("type"),
            string("state"),
            string("region"),
            string("reference"),
            string("created_at"),
            string("updated_at"),
            number("desired_amount"),
            string("starts_at"),
            string("ends_at"),
            number("minimum_amount"),
            number("maximum_amount"),
            number("cpu_threshold"),
            number("warmup_time"),
            number("cooldown_time"),
            load_balancer(),
        ],
    )
}

#[derive(Default)]
pub struct InstancesDataSource {
    provider_data: Option<LeasewebProviderData>,
}

impl InstancesDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_static() -> Schema {
        SchemaBuilder::new()
            .version(0)
            .description("Lists the public cloud instances of the account")
            .attribute(list(
                "instances",
                vec![
                    string("id"),
                    string("region"),
                    string("reference"),
                    resources(),
                    image(),
                    string("state"),
                    string("type"),
                    number("root_disk_size"),
                    string("root_disk_storage_type"),
                    ips(),
                    string("started_at"),
                    contract(),
                    string("market_app_id"),
                    object("iso", vec![string("id"), string("name")]),
                    private_network(),
                    auto_scaling_group(),
                    object("volume", vec![number("size"), string("unit")]),
                ],
            ))
            .build()
    }

    fn facade(&self, diagnostics: &mut Diagnostics) -> Option<Arc<PublicCloudFacade>> {
        match &self.provider_data {
            Some(data) => Some(data.public_cloud.clone()),
            None => {
                diagnostics.add_error(
                    "Provider not configured",
                    "Provider data was not properly configured",
                );
                None
            }
        }
    }
}

#[async_trait]
impl DataSource for InstancesDataSource {
    fn type_name(&self) -> &str {
        TYPE_NAME
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: DataSourceMetadataRequest,
    ) -> DataSourceMetadataResponse {
        DataSourceMetadataResponse {
            type_name: self.type_name().to_string(),
        }
    }

    async fn schema(
        &self,
        _ctx: Context,
        _request: DataSourceSchemaRequest,
    ) -> DataSourceSchemaResponse {
        DataSourceSchemaResponse {
            schema: Self::schema_static(),
            diagnostics: Diagnostics::new(),
        }
    }

    async fn validate(
        &self,
        _ctx: Context,
        _request: ValidateDataSourceConfigRequest,
    ) -> ValidateDataSourceConfigResponse {
        ValidateDataSourceConfigResponse {
            diagnostics: Diagnostics::new(),
        }
    }

    async fn read(&self, ctx: Context, _request: ReadDataSourceRequest) -> ReadDataSourceResponse {
        let mut diagnostics = Diagnostics::new();

        let Some(facade) = self.facade(&mut diagnostics) else {
            return ReadDataSourceResponse {
                state: DynamicValue::null(),
                diagnostics,
            };
        };

        match facade.get_all_instances(&ctx).await {
            Ok(model) => ReadDataSourceResponse {
                state: DynamicValue::new(model.to_dynamic()),
                diagnostics,
            },
            Err(e) => {
                tracing::error!(error = %e, "Failed to list public cloud instances");
                diagnostics.push(e.to_diagnostic("Unable to read instances"));
                ReadDataSourceResponse {
                    state: DynamicValue::null(),
                    diagnostics,
                }
            }
        }
    }
}

#[async_trait]
impl DataSourceWithConfigure for InstancesDataSource {
    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureDataSourceRequest,
    ) -> ConfigureDataSourceResponse {
        let mut diagnostics = Diagnostics::new();
        self.provider_data = LeasewebProviderData::from_any(request.provider_data, &mut diagnostics);
        ConfigureDataSourceResponse { diagnostics }
    }
}
