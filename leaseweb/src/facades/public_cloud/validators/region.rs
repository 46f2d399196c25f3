use super::{quoted_list, RegionCapability};
use async_trait::async_trait;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::types::Diagnostics;
use tfplug::validator::{StringRequest, StringValidator};

/// Region must be one the service knows about
pub struct RegionValidator {
    capability: Arc<dyn RegionCapability>,
}

impl RegionValidator {
    pub fn new(capability: Arc<dyn RegionCapability>) -> Self {
        Self { capability }
    }
}

#[async_trait]
impl StringValidator for RegionValidator {
    fn description(&self) -> String {
        "region must exist".to_string()
    }

    async fn validate_string(
        &self,
        ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(region) = request.config_value.as_known() else {
            return;
        };

        match self.capability.does_region_exist(ctx, region).await {
            Ok((true, _)) => {}
            Ok((false, available)) => diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid Region",
                format!(
                    "Attribute {} value must be one of: {}, got: \"{}\"",
                    request.path,
                    quoted_list(&available),
                    region
                ),
            ),
            Err(e) => {
                tracing::error!(region = %region, error = %e, "Region lookup failed");
                diagnostics.push(
                    e.to_diagnostic("Cannot look up regions")
                        .with_attribute(request.path.clone()),
                );
            }
        }
    }
}
