//! Schema types and builders for tfplug
//!
//! A schema describes the attributes of a provider, resource or data source.
//! Attributes carry their validators and plan modifiers, so the schema is also
//! what drives config validation and plan shaping.

use crate::context::Context;
use crate::plan_modifier::{PlanModifier, PlanModifyRequest};
use crate::types::{AttributePath, Diagnostic, Diagnostics, Dynamic, DynamicValue};
use crate::validator::{
    Int64Request, Int64Validator, ObjectRequest, ObjectValidator, StringRequest, StringValidator,
};
use crate::value::{FromDynamic, Value};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

/// AttributeType defines the type system for attributes
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Number, // Always f64
    Bool,
    List(Box<AttributeType>),
    Set(Box<AttributeType>),
    Map(Box<AttributeType>),
    Object(HashMap<String, AttributeType>),
}

impl AttributeType {
    pub fn type_name(&self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Number => "number",
            AttributeType::Bool => "bool",
            AttributeType::List(_) => "list",
            AttributeType::Set(_) => "set",
            AttributeType::Map(_) => "map",
            AttributeType::Object(_) => "object",
        }
    }

    pub fn list_of(element: AttributeType) -> Self {
        AttributeType::List(Box::new(element))
    }
}

#[derive(Debug, Clone)]
pub struct Schema {
    pub version: i64,
    pub block: Block,
}

#[derive(Debug, Clone)]
pub struct Block {
    pub attributes: Vec<Attribute>,
    pub description: String,
    pub deprecated: bool,
}

/// A validator attached to an attribute, tagged by the value kind it checks
#[derive(Clone)]
pub enum AttributeValidator {
    String(Arc<dyn StringValidator>),
    Int64(Arc<dyn Int64Validator>),
    Object(Arc<dyn ObjectValidator>),
}

impl AttributeValidator {
    pub fn description(&self) -> String {
        match self {
            AttributeValidator::String(v) => v.description(),
            AttributeValidator::Int64(v) => v.description(),
            AttributeValidator::Object(v) => v.description(),
        }
    }
}

#[derive(Clone)]
pub struct Attribute {
    pub name: String,
    pub r#type: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub validators: Vec<AttributeValidator>,
    pub plan_modifiers: Vec<Arc<dyn PlanModifier>>,
    pub nested_type: Option<NestedType>,
    pub deprecated: bool,
}

// Validators and modifiers are trait objects without Debug
impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .field("type", &self.r#type)
            .field("required", &self.required)
            .field("optional", &self.optional)
            .field("computed", &self.computed)
            .field("sensitive", &self.sensitive)
            .field(
                "validators",
                &self
                    .validators
                    .iter()
                    .map(AttributeValidator::description)
                    .collect::<Vec<_>>(),
            )
            .field(
                "plan_modifiers",
                &self
                    .plan_modifiers
                    .iter()
                    .map(|m| m.description())
                    .collect::<Vec<_>>(),
            )
            .field("nested_type", &self.nested_type)
            .finish()
    }
}

/// Attributes of a nested object, or of each element of a nested list
#[derive(Debug, Clone)]
pub struct NestedType {
    pub attributes: Vec<Attribute>,
    pub nesting: ObjectNestingMode,
}

impl NestedType {
    pub fn single(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            nesting: ObjectNestingMode::Single,
        }
    }

    pub fn list(attributes: Vec<Attribute>) -> Self {
        Self {
            attributes,
            nesting: ObjectNestingMode::List,
        }
    }

    pub fn object_type(&self) -> AttributeType {
        AttributeType::Object(attribute_types(&self.attributes))
    }
}

/// Attribute name to type mapping of a list of attributes
pub fn attribute_types(attributes: &[Attribute]) -> HashMap<String, AttributeType> {
    attributes
        .iter()
        .map(|a| (a.name.clone(), a.r#type.clone()))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectNestingMode {
    Single,
    List,
}

/// AttributeBuilder provides fluent API for building attributes
pub struct AttributeBuilder {
    attribute: Attribute,
}

impl AttributeBuilder {
    pub fn new(name: &str, type_: AttributeType) -> Self {
        Self {
            attribute: Attribute {
                name: name.to_string(),
                r#type: type_,
                description: String::new(),
                required: false,
                optional: false,
                computed: false,
                sensitive: false,
                validators: Vec::new(),
                plan_modifiers: Vec::new(),
                nested_type: None,
                deprecated: false,
            },
        }
    }

    /// Nested attribute; the attribute type is derived from the nested attributes
    pub fn nested(name: &str, nested: NestedType) -> Self {
        let object_type = nested.object_type();
        let type_ = match nested.nesting {
            ObjectNestingMode::Single => object_type,
            ObjectNestingMode::List => AttributeType::list_of(object_type),
        };
        let mut builder = Self::new(name, type_);
        builder.attribute.nested_type = Some(nested);
        builder
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.attribute.description = desc.to_string();
        self
    }

    pub fn required(mut self) -> Self {
        self.attribute.required = true;
        self.attribute.optional = false;
        self
    }

    pub fn optional(mut self) -> Self {
        self.attribute.optional = true;
        self.attribute.required = false;
        self
    }

    pub fn computed(mut self) -> Self {
        self.attribute.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.attribute.sensitive = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.attribute.deprecated = true;
        self
    }

    pub fn string_validator(mut self, validator: impl StringValidator + 'static) -> Self {
        self.attribute
            .validators
            .push(AttributeValidator::String(Arc::new(validator)));
        self
    }

    pub fn int64_validator(mut self, validator: impl Int64Validator + 'static) -> Self {
        self.attribute
            .validators
            .push(AttributeValidator::Int64(Arc::new(validator)));
        self
    }

    pub fn object_validator(mut self, validator: impl ObjectValidator + 'static) -> Self {
        self.attribute
            .validators
            .push(AttributeValidator::Object(Arc::new(validator)));
        self
    }

    pub fn plan_modifier(mut self, modifier: impl PlanModifier + 'static) -> Self {
        self.attribute.plan_modifiers.push(Arc::new(modifier));
        self
    }

    pub fn build(self) -> Attribute {
        self.attribute
    }
}

/// SchemaBuilder provides fluent API for building schemas
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self {
            schema: Schema {
                version: 0,
                block: Block {
                    attributes: Vec::new(),
                    description: String::new(),
                    deprecated: false,
                },
            },
        }
    }

    pub fn version(mut self, version: i64) -> Self {
        self.schema.version = version;
        self
    }

    pub fn attribute(mut self, attr: Attribute) -> Self {
        self.schema.block.attributes.push(attr);
        self
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.schema.block.description = desc.to_string();
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.schema.block.deprecated = true;
        self
    }

    pub fn build(self) -> Schema {
        self.schema
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of running the attribute plan modifiers
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub planned_state: DynamicValue,
    pub requires_replace: Vec<AttributePath>,
    pub diagnostics: Diagnostics,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.block.attributes.iter().find(|a| a.name == name)
    }

    /// Object type of the whole schema
    pub fn object_type(&self) -> AttributeType {
        AttributeType::Object(
            self.block
                .attributes
                .iter()
                .map(|a| (a.name.clone(), a.r#type.clone()))
                .collect(),
        )
    }

    /// Checks required and read-only attributes, then runs every attached validator
    ///
    /// Nested attributes are walked breadth first so diagnostics come out in
    /// declaration order for each level.
    pub async fn validate_config(&self, ctx: &Context, config: &DynamicValue) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        let root = match &config.value {
            Dynamic::Map(attributes) => attributes,
            Dynamic::Null | Dynamic::Unknown => return diagnostics,
            other => {
                diagnostics.add_error(
                    "Invalid Configuration",
                    format!("expected an object, got {}", other.type_name()),
                );
                return diagnostics;
            }
        };

        let mut pending: VecDeque<(&Attribute, Dynamic, AttributePath)> = self
            .block
            .attributes
            .iter()
            .map(|a| {
                (
                    a,
                    root.get(&a.name).cloned().unwrap_or(Dynamic::Null),
                    AttributePath::new(&a.name),
                )
            })
            .collect();

        while let Some((attribute, value, path)) = pending.pop_front() {
            if value.is_null() && attribute.required {
                diagnostics.push(
                    Diagnostic::error(
                        "Missing Required Attribute",
                        format!(
                            "The argument \"{}\" is required, but no definition was found.",
                            path
                        ),
                    )
                    .with_attribute(path.clone()),
                );
                continue;
            }

            if !value.is_null() && attribute.computed && !attribute.optional && !attribute.required
            {
                diagnostics.push(
                    Diagnostic::error(
                        "Invalid Configuration for Read-Only Attribute",
                        format!("Cannot set value for attribute \"{}\"", path),
                    )
                    .with_attribute(path.clone()),
                );
                continue;
            }

            for validator in &attribute.validators {
                run_validator(ctx, validator, &value, &path, config, &mut diagnostics).await;
            }

            let Some(nested) = &attribute.nested_type else {
                continue;
            };

            match (nested.nesting, &value) {
                (ObjectNestingMode::Single, Dynamic::Map(object)) => {
                    for child in &nested.attributes {
                        pending.push_back((
                            child,
                            object.get(&child.name).cloned().unwrap_or(Dynamic::Null),
                            path.clone().attribute(&child.name),
                        ));
                    }
                }
                (ObjectNestingMode::List, Dynamic::List(items)) => {
                    for (i, item) in items.iter().enumerate() {
                        let Dynamic::Map(object) = item else {
                            continue;
                        };
                        let element_path = path.clone().index(i as i64);
                        for child in &nested.attributes {
                            pending.push_back((
                                child,
                                object.get(&child.name).cloned().unwrap_or(Dynamic::Null),
                                element_path.clone().attribute(&child.name),
                            ));
                        }
                    }
                }
                _ => {}
            }
        }

        diagnostics
    }

    /// Runs top-level plan modifiers against an existing resource
    ///
    /// A null prior state means the resource is being created and the proposed
    /// state is returned untouched.
    pub fn plan(
        &self,
        prior_state: &DynamicValue,
        config: &DynamicValue,
        proposed_new_state: &DynamicValue,
    ) -> PlanOutcome {
        let mut outcome = PlanOutcome {
            planned_state: proposed_new_state.clone(),
            requires_replace: Vec::new(),
            diagnostics: Diagnostics::new(),
        };

        if prior_state.is_null() || proposed_new_state.is_null() {
            return outcome;
        }

        for attribute in &self.block.attributes {
            if attribute.plan_modifiers.is_empty() {
                continue;
            }

            let path = AttributePath::new(&attribute.name);
            let state = prior_state.get(&path).cloned().unwrap_or(Dynamic::Null);
            let config_value = config.get(&path).cloned().unwrap_or(Dynamic::Null);
            let mut plan = outcome
                .planned_state
                .get(&path)
                .cloned()
                .unwrap_or(Dynamic::Null);

            for modifier in &attribute.plan_modifiers {
                let response = modifier.modify_plan(PlanModifyRequest {
                    state: state.clone(),
                    plan,
                    config: config_value.clone(),
                    path: path.clone(),
                });

                plan = response.plan_value;
                outcome.diagnostics.extend(response.diagnostics);
                if response.requires_replace && !outcome.requires_replace.contains(&path) {
                    outcome.requires_replace.push(path.clone());
                }
            }

            if let Err(e) = outcome.planned_state.set(&path, plan) {
                outcome.diagnostics.push(
                    Diagnostic::error("Plan Modification Failed", e.to_string())
                        .with_attribute(path),
                );
            }
        }

        outcome
    }
}

async fn run_validator(
    ctx: &Context,
    validator: &AttributeValidator,
    value: &Dynamic,
    path: &AttributePath,
    config: &DynamicValue,
    diagnostics: &mut Diagnostics,
) {
    match validator {
        AttributeValidator::String(v) => match Value::<String>::from_dynamic(value, path) {
            Ok(config_value) => {
                let request = StringRequest {
                    path: path.clone(),
                    config_value,
                    config: config.clone(),
                };
                v.validate_string(ctx, &request, diagnostics).await;
            }
            Err(d) => diagnostics.extend(d),
        },
        AttributeValidator::Int64(v) => match Value::<i64>::from_dynamic(value, path) {
            Ok(config_value) => {
                let request = Int64Request {
                    path: path.clone(),
                    config_value,
                    config: config.clone(),
                };
                v.validate_int64(ctx, &request, diagnostics).await;
            }
            Err(d) => diagnostics.extend(d),
        },
        AttributeValidator::Object(v) => {
            let request = ObjectRequest {
                path: path.clone(),
                config_value: value.clone(),
                config: config.clone(),
            };
            v.validate_object(ctx, &request, diagnostics).await;
        }
    }
}
