use super::InstanceTerminationCapability;
use async_trait::async_trait;
use std::sync::Arc;
use tfplug::context::Context;
use tfplug::types::Diagnostics;
use tfplug::validator::{ObjectRequest, ObjectValidator};

/// Blocks destroys the service would refuse.
///
/// Runs against the prior state of the whole instance, so the request value
/// is the instance object and its `id` attribute names the instance.
pub struct InstanceTerminationValidator {
    capability: Arc<dyn InstanceTerminationCapability>,
}

impl InstanceTerminationValidator {
    pub fn new(capability: Arc<dyn InstanceTerminationCapability>) -> Self {
        Self { capability }
    }
}

#[async_trait]
impl ObjectValidator for InstanceTerminationValidator {
    fn description(&self) -> String {
        "instance must be in a state that allows termination".to_string()
    }

    async fn validate_object(
        &self,
        ctx: &Context,
        request: &ObjectRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(id) = request
            .config_value
            .as_map()
            .and_then(|attributes| attributes.get("id"))
            .and_then(|id| id.as_string())
        else {
            return;
        };

        match self.capability.can_instance_be_terminated(ctx, id).await {
            Ok(None) => {}
            Ok(Some(reason)) => {
                diagnostics.add_error("Instance is not allowed to be terminated", reason.to_string());
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Termination check failed");
                diagnostics.push(e.to_diagnostic("Cannot check if instance can be terminated"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::fakes::{FakeTermination, Unreachable};
    use super::*;
    use crate::domain::public_cloud::enums::State;
    use crate::domain::public_cloud::ReasonInstanceCannotBeTerminated;
    use std::collections::HashMap;
    use tfplug::types::{AttributePath, Dynamic, DynamicValue};

    fn state(id: Dynamic) -> ObjectRequest {
        ObjectRequest {
            path: AttributePath::root(),
            config_value: Dynamic::Map(HashMap::from([("id".to_string(), id)])),
            config: DynamicValue::null(),
        }
    }

    async fn validate(
        capability: Arc<dyn InstanceTerminationCapability>,
        request: ObjectRequest,
    ) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();
        InstanceTerminationValidator::new(capability)
            .validate_object(&Context::new(), &request, &mut diagnostics)
            .await;
        diagnostics
    }

    #[tokio::test]
    async fn destroying_instance_cannot_be_terminated() {
        let capability = Arc::new(FakeTermination {
            reason: Some(ReasonInstanceCannotBeTerminated::StateIs(State::Destroying)),
        });

        let diagnostics = validate(
            capability,
            state(Dynamic::String("ace712e9-a166-47f1-9065-4af0f7e7fce1".to_string())),
        )
        .await;

        assert_eq!(diagnostics.errors.len(), 1);
        assert_eq!(
            diagnostics.errors[0].summary,
            "Instance is not allowed to be terminated"
        );
        assert!(diagnostics.errors[0].detail.contains("DESTROYING"));
        assert!(diagnostics.errors[0].attribute.is_none());
    }

    #[tokio::test]
    async fn terminable_instance_passes() {
        let capability = Arc::new(FakeTermination { reason: None });

        let diagnostics = validate(capability, state(Dynamic::String("id".to_string()))).await;

        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn missing_id_is_skipped() {
        let capability = Arc::new(FakeTermination {
            reason: Some(ReasonInstanceCannotBeTerminated::ContractEndsAtIsSet),
        });

        let diagnostics = validate(capability, state(Dynamic::Null)).await;

        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn lookup_failure_is_reported() {
        let diagnostics = validate(Arc::new(Unreachable), state(Dynamic::String("id".into()))).await;

        assert_eq!(diagnostics.errors.len(), 1);
        assert_eq!(diagnostics.errors[0].detail, "503: Service Unavailable");
    }
}
