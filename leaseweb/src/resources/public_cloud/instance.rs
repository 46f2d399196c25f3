//! `leaseweb_public_cloud_instance` resource

use crate::error::Error;
use crate::facades::public_cloud::data_adapters::decode_instance_resource_model;
use crate::facades::public_cloud::validators::{
    ContractTermValidator, InstanceTerminationValidator, InstanceTypeValidator,
    NonUpdatableStringValidator, RegionValidator,
};
use crate::facades::public_cloud::PublicCloudFacade;
use crate::models::public_cloud::InstanceResourceModel;
use crate::provider_data::LeasewebProviderData;
use async_trait::async_trait;
use regex::Regex;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::import_state_passthrough_id;
use tfplug::plan_modifier::{RequiresReplaceIfChanged, UseStateForUnknown};
use tfplug::resource::{
    ConfigureResourceRequest, ConfigureResourceResponse, CreateResourceRequest,
    CreateResourceResponse, DeleteResourceRequest, DeleteResourceResponse,
    ImportResourceStateRequest, ImportResourceStateResponse, ModifyPlanRequest,
    ModifyPlanResponse, ReadResourceRequest, ReadResourceResponse, Resource,
    ResourceMetadataRequest, ResourceMetadataResponse, ResourceSchemaRequest,
    ResourceSchemaResponse, ResourceWithConfigure, ResourceWithImportState,
    ResourceWithModifyPlan, UpdateResourceRequest, UpdateResourceResponse,
    ValidateResourceConfigRequest, ValidateResourceConfigResponse,
};
use tfplug::schema::{AttributeBuilder, AttributeType, NestedType, Schema, SchemaBuilder};
use tfplug::types::{AttributePath, Diagnostic, Diagnostics, DynamicValue};
use tfplug::validator::{
    Int64Between, Int64OneOf, LengthAtMost, ObjectRequest, ObjectValidator, OneOf, RegexMatches,
    StringRequest, StringValidator,
};
use tfplug::value::ToDynamic;
use tfplug::Value;

pub const TYPE_NAME: &str = "leaseweb_public_cloud_instance";

const MAX_REFERENCE_LENGTH: usize = 255;

#[derive(Default)]
pub struct InstanceResource {
    provider_data: Option<LeasewebProviderData>,
}

impl InstanceResource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schema_static() -> Schema {
        let mut ssh_key = AttributeBuilder::new("ssh_key", AttributeType::String)
            .description("Public SSH key to be installed into the instance")
            .optional()
            .sensitive()
            .plan_modifier(RequiresReplaceIfChanged);
        if let Ok(pattern) = Regex::new(PublicCloudFacade::get_ssh_key_regular_expression()) {
            ssh_key = ssh_key.string_validator(RegexMatches::new(
                pattern,
                "must be a valid RSA or ED25519 public key",
            ));
        }

        SchemaBuilder::new()
            .version(0)
            .description("Manages a Leaseweb public cloud instance")
            .attribute(
                AttributeBuilder::new("id", AttributeType::String)
                    .description("The instance unique identifier")
                    .computed()
                    .plan_modifier(UseStateForUnknown)
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("region", AttributeType::String)
                    .description("Region to launch the instance into")
                    .required()
                    .plan_modifier(RequiresReplaceIfChanged)
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("reference", AttributeType::String)
                    .description("The identifying name set to the instance")
                    .optional()
                    .string_validator(LengthAtMost {
                        max: MAX_REFERENCE_LENGTH,
                    })
                    .build(),
            )
            .attribute(
                AttributeBuilder::nested(
                    "image",
                    NestedType::single(vec![
                        AttributeBuilder::new("id", AttributeType::String)
                            .description("Image ID")
                            .required()
                            .string_validator(OneOf::new(PublicCloudFacade::get_image_ids()))
                            .build(),
                        AttributeBuilder::new("name", AttributeType::String)
                            .computed()
                            .build(),
                        AttributeBuilder::new("family", AttributeType::String)
                            .computed()
                            .build(),
                        AttributeBuilder::new("flavour", AttributeType::String)
                            .computed()
                            .build(),
                        AttributeBuilder::new("custom", AttributeType::Bool)
                            .description("Standard or Custom image")
                            .computed()
                            .build(),
                    ]),
                )
                .required()
                .plan_modifier(RequiresReplaceIfChanged)
                .build(),
            )
            .attribute(
                AttributeBuilder::new("state", AttributeType::String)
                    .description("The instance's current state")
                    .computed()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("type", AttributeType::String)
                    .description("Instance type")
                    .required()
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("root_disk_size", AttributeType::Number)
                    .description("The root disk's size in GB")
                    .optional()
                    .computed()
                    .int64_validator(Int64Between {
                        min: PublicCloudFacade::get_min_root_disk_size(),
                        max: PublicCloudFacade::get_max_root_disk_size(),
                    })
                    .build(),
            )
            .attribute(
                AttributeBuilder::new("root_disk_storage_type", AttributeType::String)
                    .description("The root disk's storage type")
                    .required()
                    .string_validator(OneOf::new(
                        PublicCloudFacade::get_root_disk_storage_types(),
                    ))
                    .plan_modifier(RequiresReplaceIfChanged)
                    .build(),
            )
            .attribute(
                AttributeBuilder::nested(
                    "ips",
                    NestedType::list(vec![AttributeBuilder::new("ip", AttributeType::String)
                        .computed()
                        .build()]),
                )
                .computed()
                .build(),
            )
            .attribute(
                AttributeBuilder::new("started_at", AttributeType::String)
                    .description("Date and time when the instance was started for the first time")
                    .computed()
                    .build(),
            )
            .attribute(
                AttributeBuilder::nested(
                    "contract",
                    NestedType::single(vec![
                        AttributeBuilder::new("billing_frequency", AttributeType::Number)
                            .description("The billing frequency (in months)")
                            .required()
                            .int64_validator(Int64OneOf::new(
                                PublicCloudFacade::get_billing_frequencies(),
                            ))
                            .build(),
                        AttributeBuilder::new("term", AttributeType::Number)
                            .description("Contract term (in months). Used only when type is MONTHLY")
                            .required()
                            .int64_validator(Int64OneOf::new(PublicCloudFacade::get_contract_terms()))
                            .build(),
                        AttributeBuilder::new("type", AttributeType::String)
                            .description("Select HOURLY for billing based on hourly usage, else MONTHLY")
                            .required()
                            .string_validator(OneOf::new(PublicCloudFacade::get_contract_types()))
                            .build(),
                        AttributeBuilder::new("ends_at", AttributeType::String)
                            .computed()
                            .build(),
                        AttributeBuilder::new("state", AttributeType::String)
                            .computed()
                            .build(),
                    ]),
                )
                .required()
                .object_validator(ContractTermValidator)
                .build(),
            )
            .attribute(
                AttributeBuilder::new("market_app_id", AttributeType::String)
                    .description("Market App ID that must be installed into the instance")
                    .optional()
                    .computed()
                    .build(),
            )
            .attribute(ssh_key.build())
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

    /// Runs the validators that need remote knowledge or the prior state
    async fn validate_plan(
        &self,
        ctx: &Context,
        facade: Arc<PublicCloudFacade>,
        request: &ModifyPlanRequest,
        diagnostics: &mut Diagnostics,
    ) {
        if request.proposed_new_state.is_null() {
            if request.prior_state.is_null() {
                return;
            }
            let termination = ObjectRequest {
                path: AttributePath::root(),
                config_value: request.prior_state.value.clone(),
                config: request.config.clone(),
            };
            InstanceTerminationValidator::new(facade)
                .validate_object(ctx, &termination, diagnostics)
                .await;
            return;
        }

        let plan = match decode_instance_resource_model(&request.proposed_new_state) {
            Ok(plan) => plan,
            Err(e) => {
                diagnostics.push(Error::from(e).to_diagnostic("Cannot decode planned instance"));
                return;
            }
        };
        let state = if request.prior_state.is_null() {
            InstanceResourceModel::default()
        } else {
            match decode_instance_resource_model(&request.prior_state) {
                Ok(state) => state,
                Err(e) => {
                    diagnostics.push(Error::from(e).to_diagnostic("Cannot decode instance state"));
                    return;
                }
            }
        };

        if plan.region != state.region {
            RegionValidator::new(facade.clone())
                .validate_string(
                    ctx,
                    &string_request("region", &plan.region, &request.config),
                    diagnostics,
                )
                .await;
        }

        if plan.instance_type != state.instance_type {
            if plan.region.is_known() {
                InstanceTypeValidator::new(facade.clone(), state.id.clone(), plan.region.clone())
                    .validate_string(
                        ctx,
                        &string_request("type", &plan.instance_type, &request.config),
                        diagnostics,
                    )
                    .await;
            } else {
                tracing::warn!("Region is not known yet, skipping instance type validation");
            }
        }

        NonUpdatableStringValidator::new(state.market_app_id.clone())
            .validate_string(
                ctx,
                &string_request("market_app_id", &plan.market_app_id, &request.config),
                diagnostics,
            )
            .await;
    }
}

fn string_request(name: &str, value: &Value<String>, config: &DynamicValue) -> StringRequest {
    StringRequest {
        path: AttributePath::new(name),
        config_value: value.clone(),
        config: config.clone(),
    }
}

fn decode(value: &DynamicValue, diagnostics: &mut Diagnostics) -> Option<InstanceResourceModel> {
    match decode_instance_resource_model(value) {
        Ok(model) => Some(model),
        Err(e) => {
            diagnostics.push(Error::from(e).to_diagnostic("Cannot decode instance"));
            None
        }
    }
}

/// Attributes the service never returns are carried over from the previous model
fn keep_write_only(mut model: InstanceResourceModel, previous: &InstanceResourceModel) -> InstanceResourceModel {
    model.ssh_key = match &previous.ssh_key {
        Value::Unknown => Value::null(),
        ssh_key => ssh_key.clone(),
    };
    model
}

fn encode(model: &InstanceResourceModel) -> DynamicValue {
    DynamicValue::new(model.to_dynamic())
}

#[async_trait]
impl Resource for InstanceResource {
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
        let diagnostics = Self::schema_static()
            .validate_config(&ctx, &request.config)
            .await;

        ValidateResourceConfigResponse { diagnostics }
    }

    async fn create(&self, ctx: Context, request: CreateResourceRequest) -> CreateResourceResponse {
        let mut diagnostics = Diagnostics::new();

        let Some(facade) = self.facade(&mut diagnostics) else {
            return CreateResourceResponse {
                new_state: request.planned_state,
                diagnostics,
            };
        };
        let Some(plan) = decode(&request.planned_state, &mut diagnostics) else {
            return CreateResourceResponse {
                new_state: request.planned_state,
                diagnostics,
            };
        };

        match facade.create_instance(&ctx, &plan).await {
            Ok(instance) => {
                tracing::debug!(id = ?instance.id.as_known(), "Created public cloud instance");
                CreateResourceResponse {
                    new_state: encode(&keep_write_only(instance, &plan)),
                    diagnostics,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to create public cloud instance");
                diagnostics.push(e.to_diagnostic("Error launching public cloud instance"));
                CreateResourceResponse {
                    new_state: request.planned_state,
                    diagnostics,
                }
            }
        }
    }

    async fn read(&self, ctx: Context, request: ReadResourceRequest) -> ReadResourceResponse {
        let mut diagnostics = Diagnostics::new();

        let Some(facade) = self.facade(&mut diagnostics) else {
            return ReadResourceResponse {
                new_state: Some(request.current_state),
                diagnostics,
            };
        };
        let Some(state) = decode(&request.current_state, &mut diagnostics) else {
            return ReadResourceResponse {
                new_state: Some(request.current_state),
                diagnostics,
            };
        };
        let id = state.id.as_known().cloned().unwrap_or_default();

        match facade.get_instance(&ctx, &id).await {
            Ok(instance) => ReadResourceResponse {
                new_state: Some(encode(&keep_write_only(instance, &state))),
                diagnostics,
            },
            Err(e) if e.is_not_found() => {
                tracing::debug!(id = %id, "Public cloud instance is gone, removing it from state");
                ReadResourceResponse {
                    new_state: None,
                    diagnostics,
                }
            }
            Err(e) => {
                diagnostics.push(e.to_diagnostic(format!("Error reading public cloud instance {}", id)));
                ReadResourceResponse {
                    new_state: Some(request.current_state),
                    diagnostics,
                }
            }
        }
    }

    async fn update(&self, ctx: Context, request: UpdateResourceRequest) -> UpdateResourceResponse {
        let mut diagnostics = Diagnostics::new();

        let Some(facade) = self.facade(&mut diagnostics) else {
            return UpdateResourceResponse {
                new_state: request.prior_state,
                diagnostics,
            };
        };
        let Some(mut plan) = decode(&request.planned_state, &mut diagnostics) else {
            return UpdateResourceResponse {
                new_state: request.prior_state,
                diagnostics,
            };
        };
        if plan.id.is_unknown() {
            if let Some(state) = decode(&request.prior_state, &mut diagnostics) {
                plan.id = state.id;
            }
        }

        match facade.update_instance(&ctx, &plan).await {
            Ok(instance) => UpdateResourceResponse {
                new_state: encode(&keep_write_only(instance, &plan)),
                diagnostics,
            },
            Err(e) => {
                tracing::error!(id = ?plan.id.as_known(), error = %e, "Failed to update public cloud instance");
                diagnostics.push(e.to_diagnostic("Error updating public cloud instance"));
                UpdateResourceResponse {
                    new_state: request.prior_state,
                    diagnostics,
                }
            }
        }
    }

    async fn delete(&self, ctx: Context, request: DeleteResourceRequest) -> DeleteResourceResponse {
        let mut diagnostics = Diagnostics::new();

        let Some(facade) = self.facade(&mut diagnostics) else {
            return DeleteResourceResponse { diagnostics };
        };
        let Some(state) = decode(&request.prior_state, &mut diagnostics) else {
            return DeleteResourceResponse { diagnostics };
        };
        let id = state.id.as_known().cloned().unwrap_or_default();

        match facade.ensure_instance_can_be_terminated(&ctx, &id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                tracing::debug!(id = %id, "Public cloud instance already terminated");
                return DeleteResourceResponse { diagnostics };
            }
            Err(e @ Error::InstanceNotTerminable { .. }) => {
                diagnostics.push(e.to_diagnostic("Instance is not allowed to be terminated"));
                return DeleteResourceResponse { diagnostics };
            }
            Err(e) => {
                diagnostics.push(e.to_diagnostic(format!("Error terminating public cloud instance {}", id)));
                return DeleteResourceResponse { diagnostics };
            }
        }

        match facade.delete_instance(&ctx, &id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => {
                tracing::debug!(id = %id, "Public cloud instance already terminated");
            }
            Err(e) => {
                diagnostics.push(e.to_diagnostic(format!("Error terminating public cloud instance {}", id)));
            }
        }

        DeleteResourceResponse { diagnostics }
    }
}

#[async_trait]
impl ResourceWithConfigure for InstanceResource {
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
impl ResourceWithModifyPlan for InstanceResource {
    async fn modify_plan(&self, ctx: Context, request: ModifyPlanRequest) -> ModifyPlanResponse {
        let mut diagnostics = Diagnostics::new();

        // Validation is deferred until the provider has been configured
        if let Some(data) = &self.provider_data {
            self.validate_plan(&ctx, data.public_cloud.clone(), &request, &mut diagnostics)
                .await;
        }

        ModifyPlanResponse {
            planned_state: request.proposed_new_state,
            requires_replace: Vec::new(),
            diagnostics,
        }
    }
}

#[async_trait]
impl ResourceWithImportState for InstanceResource {
    async fn import_state(
        &self,
        ctx: Context,
        request: ImportResourceStateRequest,
    ) -> ImportResourceStateResponse {
        let mut response = ImportResourceStateResponse {
            imported_resources: vec![],
            diagnostics: Diagnostics::new(),
        };

        if let Err(e) = crate::domain::public_cloud::value_object::Uuid::parse(&request.id) {
            response.diagnostics.push(Diagnostic::error(
                "Invalid import ID",
                format!("Import ID must be an instance UUID: {}", e),
            ));
            return response;
        }

        import_state_passthrough_id(&ctx, AttributePath::new("id"), &request, &mut response);
        response
    }
}

#[cfg(test)]
#[path = "./instance_test.rs"]
mod instance_test;
