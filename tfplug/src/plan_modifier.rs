use crate::types::{AttributePath, Diagnostics, Dynamic};

#[derive(Debug, Clone)]
pub struct PlanModifyRequest {
    pub state: Dynamic,
    pub plan: Dynamic,
    pub config: Dynamic,
    pub path: AttributePath,
}

#[derive(Debug, Clone)]
pub struct PlanModifyResponse {
    pub plan_value: Dynamic,
    pub requires_replace: bool,
    pub diagnostics: Diagnostics,
}

/// Adjusts the planned value of a single attribute
///
/// Modifiers run in declaration order while a resource plan is being shaped.
/// They can rewrite the planned value or flag the attribute as forcing a replacement.
pub trait PlanModifier: Send + Sync {
    fn description(&self) -> String;

    fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse;
}

/// Forces replacement when the prior value differs from a known planned value
///
/// Resource creation is handled by the caller: modifiers only run against an existing state.
pub struct RequiresReplaceIfChanged;

impl PlanModifier for RequiresReplaceIfChanged {
    fn description(&self) -> String {
        "changing this value destroys and recreates the resource".to_string()
    }

    fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse {
        let requires_replace = !matches!(
            (&request.state, &request.plan),
            (Dynamic::Unknown, _) | (_, Dynamic::Unknown)
        ) && !values_equal(&request.state, &request.plan);

        PlanModifyResponse {
            plan_value: request.plan,
            requires_replace,
            diagnostics: Diagnostics::new(),
        }
    }
}

/// Carries the prior state value forward while the planned value is unknown
pub struct UseStateForUnknown;

impl PlanModifier for UseStateForUnknown {
    fn description(&self) -> String {
        "once set, the value is kept unless the configuration changes it".to_string()
    }

    fn modify_plan(&self, request: PlanModifyRequest) -> PlanModifyResponse {
        let plan_value = match (&request.plan, &request.state) {
            (Dynamic::Unknown, Dynamic::Null) => request.plan,
            (Dynamic::Unknown, state) => state.clone(),
            _ => request.plan,
        };

        PlanModifyResponse {
            plan_value,
            requires_replace: false,
            diagnostics: Diagnostics::new(),
        }
    }
}

pub(crate) fn values_equal(a: &Dynamic, b: &Dynamic) -> bool {
    match (a, b) {
        (Dynamic::Null, Dynamic::Null) => true,
        (Dynamic::Unknown, Dynamic::Unknown) => true,
        (Dynamic::Bool(a), Dynamic::Bool(b)) => a == b,
        (Dynamic::Number(a), Dynamic::Number(b)) => (a - b).abs() < f64::EPSILON,
        (Dynamic::String(a), Dynamic::String(b)) => a == b,
        (Dynamic::List(a), Dynamic::List(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| values_equal(x, y))
        }
        (Dynamic::Map(a), Dynamic::Map(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).is_some_and(|v2| values_equal(v, v2)))
        }
        _ => false,
    }
}
