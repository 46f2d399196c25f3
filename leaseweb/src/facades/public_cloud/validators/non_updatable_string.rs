use async_trait::async_trait;
use tfplug::context::Context;
use tfplug::types::Diagnostics;
use tfplug::validator::{StringRequest, StringValidator};
use tfplug::Value;

/// Rejects changes to a string once it has been written to state
pub struct NonUpdatableStringValidator {
    state_value: Value<String>,
}

impl NonUpdatableStringValidator {
    pub fn new(state_value: Value<String>) -> Self {
        Self { state_value }
    }
}

#[async_trait]
impl StringValidator for NonUpdatableStringValidator {
    fn description(&self) -> String {
        "value cannot change after creation".to_string()
    }

    async fn validate_string(
        &self,
        _ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let (Some(was), Some(got)) = (self.state_value.as_known(), request.config_value.as_known())
        else {
            return;
        };

        if was != got {
            diagnostics.add_attribute_error(
                request.path.clone(),
                "Invalid Attribute Change",
                format!("Attribute value is not allowed to change, was {} got {}", was, got),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tfplug::types::{AttributePath, DynamicValue};

    async fn validate(state: Value<String>, config: Value<String>) -> Diagnostics {
        let request = StringRequest {
            path: AttributePath::new("market_app_id"),
            config_value: config,
            config: DynamicValue::null(),
        };
        let mut diagnostics = Diagnostics::new();
        NonUpdatableStringValidator::new(state)
            .validate_string(&Context::new(), &request, &mut diagnostics)
            .await;
        diagnostics
    }

    #[tokio::test]
    async fn changed_value_is_rejected() {
        let diagnostics = validate(
            Value::known("CPANEL_30".to_string()),
            Value::known("PLESK".to_string()),
        )
        .await;

        assert_eq!(diagnostics.errors.len(), 1);
        assert_eq!(
            diagnostics.errors[0].detail,
            "Attribute value is not allowed to change, was CPANEL_30 got PLESK"
        );
    }

    #[tokio::test]
    async fn unchanged_value_passes() {
        let value = Value::known("CPANEL_30".to_string());

        assert!(validate(value.clone(), value).await.is_empty());
    }

    #[tokio::test]
    async fn creation_and_unresolved_plans_are_skipped() {
        let known = Value::known("CPANEL_30".to_string());

        assert!(validate(Value::null(), known.clone()).await.is_empty());
        assert!(validate(known.clone(), Value::unknown()).await.is_empty());
        assert!(validate(known, Value::null()).await.is_empty());
    }
}
