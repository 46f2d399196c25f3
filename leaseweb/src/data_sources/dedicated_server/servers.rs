//! `leaseweb_dedicated_servers` data source

use crate::models::dedicated_server::DedicatedServersDataSourceModel;
use crate::provider_data::LeasewebProviderData;
use async_trait::async_trait;
use tfplug::context::Context;
use tfplug::data_source::{
    ConfigureDataSourceRequest, ConfigureDataSourceResponse, DataSource, DataSourceMetadataRequest,
    DataSourceMetadataResponse, DataSourceSchemaRequest, DataSourceSchemaResponse,
    DataSourceWithConfigure, ReadDataSourceRequest, ReadDataSourceResponse,
    ValidateDataSourceConfigRequest, ValidateDataSourceConfigResponse,
};
use tfplug::schema::{AttributeBuilder, AttributeType, Schema, SchemaBuilder};
use tfplug::types::{AttributePath, Diagnostics, DynamicValue};
use tfplug::value::{FromDynamic, ToDynamic};

pub const TYPE_NAME: &str = "leaseweb_dedicated_servers";

#[derive(Default)]
pub struct DedicatedServersDataSource {
    provider_data: Option<LeasewebProviderData>,
}

impl DedicatedServersDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_static() -> Schema {
        SchemaBuilder::new()
            .version(0)
            .description("Lists the ids of the dedicated servers matching the filters")
            .attribute(
                AttributeBuilder::new("reference", AttributeType::String)
                    .description("Return only servers with this reference")
                    .optional()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("site", AttributeType::String)
                    .description("Return only servers located in this site")
                    .optional()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("ids", AttributeType::list_of(AttributeType::String))
                    .description("Ids of the matching dedicated servers")
                    .computed()
                    .build(),
            )
            .build()
    }
}

#[async_trait]
impl DataSource for DedicatedServersDataSource {
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
        ctx: Context,
        request: ValidateDataSourceConfigRequest,
    ) -> ValidateDataSourceConfigResponse {
        ValidateDataSourceConfigResponse {
            diagnostics: Self::schema_static()
                .validate_config(&ctx, &request.config)
                .await,
        }
    }

    async fn read(&self, ctx: Context, request: ReadDataSourceRequest) -> ReadDataSourceResponse {
        let mut diagnostics = Diagnostics::new();

        let Some(data) = &self.provider_data else {
            diagnostics.add_error(
                "Provider not configured",
                "Provider data was not properly configured",
            );
            return ReadDataSourceResponse {
                state: DynamicValue::null(),
                diagnostics,
            };
        };

        let filter = if request.config.is_null() {
            DedicatedServersDataSourceModel::default()
        } else {
            match DedicatedServersDataSourceModel::from_dynamic(
                &request.config.value,
                &AttributePath::root(),
            ) {
                Ok(filter) => filter,
                Err(decode) => {
                    diagnostics.extend(decode);
                    return ReadDataSourceResponse {
                        state: DynamicValue::null(),
                        diagnostics,
                    };
                }
            }
        };

        match data.dedicated_server.list_server_ids(&ctx, &filter).await {
            Ok(model) => {
                tracing::debug!(
                    count = model.ids.as_known().map(Vec::len).unwrap_or_default(),
                    "Listed dedicated servers"
                );
                ReadDataSourceResponse {
                    state: DynamicValue::new(model.to_dynamic()),
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(e.to_diagnostic("Unable to list dedicated servers"));
                ReadDataSourceResponse {
                    state: DynamicValue::null(),
                    diagnostics,
                }
            }
        }
    }
}

#[async_trait]
impl DataSourceWithConfigure for DedicatedServersDataSource {
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
