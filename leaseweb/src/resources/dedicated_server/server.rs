//! `leaseweb_dedicated_server` resource
//!
//! Dedicated servers cannot be ordered through the API. Creating the resource
//! adopts an existing server by id and applies the configured settings;
//! deleting it only forgets the server.

use crate::error::Error;
use crate::facades::dedicated_server::DedicatedServerFacade;
use crate::models::dedicated_server::DedicatedServerResourceModel;
use crate::provider_data::LeasewebProviderData;
use async_trait::async_trait;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::import_state_passthrough_id;
use tfplug::plan_modifier::{RequiresReplaceIfChanged, UseStateForUnknown};
use tfplug::resource::{
    ConfigureResourceRequest, ConfigureResourceResponse, CreateResourceRequest,
    CreateResourceResponse, DeleteResourceRequest, DeleteResourceResponse,
    ImportResourceStateRequest, ImportResourceStateResponse, ReadResourceRequest,
    ReadResourceResponse, Resource, ResourceMetadataRequest, ResourceMetadataResponse,
    ResourceSchemaRequest, ResourceSchemaResponse, ResourceWithConfigure,
    ResourceWithImportState, UpdateResourceRequest, UpdateResourceResponse,
    ValidateResourceConfigRequest, ValidateResourceConfigResponse,
};
use tfplug::schema::{AttributeBuilder, AttributeType, NestedType, Schema, SchemaBuilder};
use tfplug::types::{AttributePath, Diagnostics, DynamicValue};
use tfplug::validator::LengthAtMost;
use tfplug::value::{FromDynamic, ToDynamic};

pub const TYPE_NAME: &str = "leaseweb_dedicated_server";

const MAX_REFERENCE_LENGTH: usize = 100;

#[derive(Default)]
pub struct DedicatedServerResource {
    provider_data: Option<LeasewebProviderData>,
}

impl DedicatedServerResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_static() -> Schema {
        let computed_string = |name: &str, description: &str| {
            AttributeBuilder::new(name, AttributeType::String)
                .description(description)
                .computed()
                .plan_modifier(UseStateForUnknown)
                .build()
        };
        let setting = |name: &str, type_: AttributeType, description: &str| {
            AttributeBuilder::new(name, type_)
                .description(description)
                .optional()
                .computed()
                .plan_modifier(UseStateForUnknown)
        };

        SchemaBuilder::new()
            .version(0)
            .description("Manages the settings of an existing Leaseweb dedicated server")
            .attribute(
                AttributeBuilder::new("id", AttributeType::String)
                    .description("The unique identifier of the server")
                    .required()
                    .plan_modifier(RequiresReplaceIfChanged)
                    .build(),
            )
            .attribute(
                setting("reference", AttributeType::String, "Reference of the server")
                    .string_validator(LengthAtMost {
                        max: MAX_REFERENCE_LENGTH,
                    })
                    .build(),
            )
            .attribute(
                setting(
                    "reverse_lookup",
                    AttributeType::String,
                    "The reverse lookup associated with the dedicated server public IP",
                )
                .build(),
            )
            .attribute(
                setting(
                    "dhcp_lease",
                    AttributeType::String,
                    "The URL of PXE boot the dedicated server is booting from, empty to remove it",
                )
                .build(),
            )
            .attribute(
                setting(
                    "powered_on",
                    AttributeType::Bool,
                    "Whether the dedicated server is powered on or not",
                )
                .build(),
            )
            .attribute(
                setting(
                    "public_network_interface_opened",
                    AttributeType::Bool,
                    "Whether the public network interface of the dedicated server is opened or not",
                )
                .build(),
            )
            .attribute(
                setting(
                    "public_ip_null_routed",
                    AttributeType::Bool,
                    "Whether the public IP of the dedicated server is null routed or not",
                )
                .build(),
            )
            .attribute(computed_string("public_ip", "The public IP of the dedicated server"))
            .attribute(computed_string(
                "remote_management_ip",
                "The remote management IP of the dedicated server",
            ))
            .attribute(computed_string(
                "internal_mac",
                "The MAC address of the interface connected to internal private network",
            ))
            .attribute(
                AttributeBuilder::nested(
                    "location",
                    NestedType::single(vec![
                        AttributeBuilder::new("rack", AttributeType::String).computed().build(),
                        AttributeBuilder::new("site", AttributeType::String).computed().build(),
                        AttributeBuilder::new("suite", AttributeType::String).computed().build(),
                        AttributeBuilder::new("unit", AttributeType::String).computed().build(),
                    ]),
                )
                .description("Location of the dedicated server")
                .computed()
                .plan_modifier(UseStateForUnknown)
                .build(),
            )
            .build()
    }

    fn facade(&self, diagnostics: &mut Diagnostics) -> Option<Arc<DedicatedServerFacade>> {
        match &self.provider_data {
            Some(data) => Some(data.dedicated_server.clone()),
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

fn decode(value: &DynamicValue, diagnostics: &mut Diagnostics) -> Option<DedicatedServerResourceModel> {
    match DedicatedServerResourceModel::from_dynamic(&value.value, &AttributePath::root()) {
        Ok(model) => Some(model),
        Err(decode) => {
            diagnostics.extend(decode);
            None
        }
    }
}

fn encode(model: &DedicatedServerResourceModel) -> DynamicValue {
    DynamicValue::new(model.to_dynamic())
}

fn server_id(model: &DedicatedServerResourceModel) -> String {
    model.id.as_known().cloned().unwrap_or_default()
}

#[async_trait]
impl Resource for DedicatedServerResource {
    fn type_name(&self) -> &str {
        TYPE_NAME
    }

    async fn metadata(
        &self,
        _ctx: Context,
        _request: ResourceMetadataRequest,
    ) -> ResourceMetadataResponse {
        ResourceMetadataResponse {
            type_name: self.type_name().to_string(),
        }
    }

    async fn schema(
        &self,
        _ctx: Context,
        _request: ResourceSchemaRequest,
    ) -> ResourceSchemaResponse {
        ResourceSchemaResponse {
            schema: Self::schema_static(),
            diagnostics: Diagnostics::new(),
        }
    }

    async fn validate(
        &self,
        ctx: Context,
        request: ValidateResourceConfigRequest,
    ) -> ValidateResourceConfigResponse {
        ValidateResourceConfigResponse {
            diagnostics: Self::schema_static()
                .validate_config(&ctx, &request.config)
                .await,
        }
    }

    async fn create(&self, ctx: Context, request: CreateResourceRequest) -> CreateResourceResponse {
        let mut diagnostics = Diagnostics::new();

        let (Some(facade), Some(plan)) = (
            self.facade(&mut diagnostics),
            decode(&request.planned_state, &mut diagnostics),
        ) else {
            return CreateResourceResponse {
                new_state: request.planned_state,
                diagnostics,
            };
        };
        let id = server_id(&plan);

        let result = match facade.get_server(&ctx, &id).await {
            Ok(current) => facade.apply(&ctx, &id, &plan, &current).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(server) => CreateResourceResponse {
                new_state: encode(&server),
                diagnostics,
            },
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to adopt dedicated server");
                diagnostics.push(e.to_diagnostic(format!("Error adopting dedicated server {}", id)));
                CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                }
            }
        }
    }

    async fn read(&self, ctx: Context, request: ReadResourceRequest) -> ReadResourceResponse {
        let mut diagnostics = Diagnostics::new();

        let (Some(facade), Some(state)) = (
            self.facade(&mut diagnostics),
            decode(&request.current_state, &mut diagnostics),
        ) else {
            return ReadResourceResponse {
                new_state: Some(request.current_state),
                diagnostics,
            };
        };
        let id = server_id(&state);

        match facade.get_server(&ctx, &id).await {
            Ok(server) => ReadResourceResponse {
                new_state: Some(encode(&server)),
                diagnostics,
            },
            Err(e) if e.is_not_found() => ReadResourceResponse {
                new_state: None,
                diagnostics,
            },
            Err(e) => {
                diagnostics.push(e.to_diagnostic(format!("Error reading dedicated server {}", id)));
                ReadResourceResponse {
                    new_state: Some(request.current_state),
                    diagnostics,
                }
            }
        }
    }

    async fn update(&self, ctx: Context, request: UpdateResourceRequest) -> UpdateResourceResponse {
        let mut diagnostics = Diagnostics::new();

        let (Some(facade), Some(plan), Some(prior)) = (
            self.facade(&mut diagnostics),
            decode(&request.planned_state, &mut diagnostics),
            decode(&request.prior_state, &mut diagnostics),
        ) else {
            return UpdateResourceResponse {
                new_state: request.prior_state,
                diagnostics,
            };
        };
        let id = server_id(&prior);

        match facade.apply(&ctx, &id, &plan, &prior).await {
            Ok(server) => UpdateResourceResponse {
                new_state: encode(&server),
                diagnostics,
            },
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to update dedicated server");
                diagnostics.push(e.to_diagnostic(format!("Error updating dedicated server {}", id)));
                UpdateResourceResponse {
                    new_state: request.prior_state,
                    diagnostics,
                }
            }
        }
    }

    async fn delete(&self, _ctx: Context, request: DeleteResourceRequest) -> DeleteResourceResponse {
        let mut diagnostics = Diagnostics::new();
        if let Some(state) = decode(&request.prior_state, &mut diagnostics) {
            tracing::debug!(id = %server_id(&state), "Removing dedicated server from state");
        }
        DeleteResourceResponse { diagnostics }
    }
}

#[async_trait]
impl ResourceWithConfigure for DedicatedServerResource {
    async fn configure(
        &mut self,
        _ctx: Context,
        request: ConfigureResourceRequest,
    ) -> ConfigureResourceResponse {
        let mut diagnostics = Diagnostics::new();
        self.provider_data = LeasewebProviderData::from_any(request.provider_data, &mut diagnostics);
        ConfigureResourceResponse { diagnostics }
    }
}

#[async_trait]
impl ResourceWithImportState for DedicatedServerResource {
    async fn import_state(
        &self,
        ctx: Context,
        request: ImportResourceStateRequest,
    ) -> ImportResourceStateResponse {
        let mut response = ImportResourceStateResponse {
            imported_resources: vec![],
            diagnostics: Diagnostics::new(),
        };

        if request.id.trim().is_empty() {
            response.diagnostics.push(
                Error::Configuration("server id cannot be empty".to_string())
                    .to_diagnostic("Invalid import ID"),
            );
            return response;
        }

        import_state_passthrough_id(&ctx, AttributePath::new("id"), &request, &mut response);
        response
    }
}
