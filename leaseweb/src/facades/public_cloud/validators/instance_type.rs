use super::{quoted_list, InstanceTypeCapability};
use async_trait::async_trait;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::types::Diagnostics;
use tfplug::validator::{StringRequest, StringValidator};
use tfplug::Value;

/// Checks the planned instance type against what the service offers.
///
/// Without a known instance id the type must be offered in the region;
/// with one, the existing instance must be able to switch to it.
pub struct InstanceTypeValidator {
    capability: Arc<dyn InstanceTypeCapability>,
    instance_id: Option<String>,
    region: String,
}

impl InstanceTypeValidator {
    /// # Panics
    ///
    /// Panics if `region` is not known; callers resolve the region first.
    pub fn new(
        capability: Arc<dyn InstanceTypeCapability>,
        instance_id: Value<String>,
        region: Value<String>,
    ) -> Self {
        let region = match region {
            Value::Known(region) => region,
            _ => panic!("InstanceTypeValidator requires a known region"),
        };

        Self {
            capability,
            instance_id: instance_id.into_option(),
            region,
        }
    }
}

#[async_trait]
impl StringValidator for InstanceTypeValidator {
    fn description(&self) -> String {
        match &self.instance_id {
            Some(id) => format!("instance type must be usable with instance {}", id),
            None => format!("instance type must be available in region {}", self.region),
        }
    }

    async fn validate_string(
        &self,
        ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(instance_type) = request.config_value.as_known() else {
            return;
        };

        let (result, summary) = match &self.instance_id {
            Some(id) => (
                self.capability
                    .can_instance_type_be_used_with_instance(ctx, id, instance_type)
                    .await,
                "Invalid Instance Type For Instance",
            ),
            None => (
                self.capability
                    .is_instance_type_available_for_region(ctx, instance_type, &self.region)
                    .await,
                "Invalid Instance Type For Region",
            ),
        };

        match result {
            Ok((true, _)) => {}
            Ok((false, allowed)) => diagnostics.add_attribute_error(
                request.path.clone(),
                summary,
                format!(
                    "Attribute {} value must be one of: {}, got: \"{}\"",
                    request.path,
                    quoted_list(&allowed),
                    instance_type
                ),
            ),
            Err(e) => {
                tracing::error!(instance_type = %instance_type, error = %e, "Instance type lookup failed");
                diagnostics.push(
                    e.to_diagnostic("Cannot look up instance types")
                        .with_attribute(request.path.clone()),
                );
            }
        }
    }
}
