//! Attribute validators
//!
//! Validators run during config validation, after the host has decoded the
//! configuration and before any plan is produced. They never fail; they push
//! diagnostics into the accumulator they are handed. Validators may await
//! remote lookups, which is why the traits are async and receive a [`Context`].
//!
//! Every built-in validator skips values that are Null or Unknown.

use crate::context::Context;
use crate::types::{AttributePath, Diagnostic, Diagnostics, Dynamic, DynamicValue};
use crate::value::Value;
use async_trait::async_trait;
use regex::Regex;

/// Request handed to string validators
#[derive(Debug, Clone)]
pub struct StringRequest {
    pub path: AttributePath,
    pub config_value: Value<String>,
    pub config: DynamicValue,
}

/// Request handed to integer validators
#[derive(Debug, Clone)]
pub struct Int64Request {
    pub path: AttributePath,
    pub config_value: Value<i64>,
    pub config: DynamicValue,
}

/// Request handed to object validators; the value is the raw object
#[derive(Debug, Clone)]
pub struct ObjectRequest {
    pub path: AttributePath,
    pub config_value: Dynamic,
    pub config: DynamicValue,
}

#[async_trait]
pub trait StringValidator: Send + Sync {
    fn description(&self) -> String;

    async fn validate_string(
        &self,
        ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    );
}

#[async_trait]
pub trait Int64Validator: Send + Sync {
    fn description(&self) -> String;

    async fn validate_int64(
        &self,
        ctx: &Context,
        request: &Int64Request,
        diagnostics: &mut Diagnostics,
    );
}

#[async_trait]
pub trait ObjectValidator: Send + Sync {
    fn description(&self) -> String;

    async fn validate_object(
        &self,
        ctx: &Context,
        request: &ObjectRequest,
        diagnostics: &mut Diagnostics,
    );
}

fn quoted_list<T: std::fmt::Display>(values: &[T], quote: bool) -> String {
    let items: Vec<String> = values
        .iter()
        .map(|v| {
            if quote {
                format!("\"{}\"", v)
            } else {
                v.to_string()
            }
        })
        .collect();
    format!("[{}]", items.join(" "))
}

/// String must be at most `max` characters long
pub struct LengthAtMost {
    pub max: usize,
}

#[async_trait]
impl StringValidator for LengthAtMost {
    fn description(&self) -> String {
        format!("string length must be at most {}", self.max)
    }

    async fn validate_string(
        &self,
        _ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(value) = request.config_value.as_known() else {
            return;
        };

        let length = value.chars().count();
        if length > self.max {
            diagnostics.push(
                Diagnostic::error(
                    "Invalid Attribute Value Length",
                    format!(
                        "Attribute {} {}, got: {}",
                        request.path,
                        self.description(),
                        length
                    ),
                )
                .with_attribute(request.path.clone()),
            );
        }
    }
}

/// String must be at least `min` characters long
pub struct LengthAtLeast {
    pub min: usize,
}

#[async_trait]
impl StringValidator for LengthAtLeast {
    fn description(&self) -> String {
        format!("string length must be at least {}", self.min)
    }

    async fn validate_string(
        &self,
        _ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(value) = request.config_value.as_known() else {
            return;
        };

        let length = value.chars().count();
        if length < self.min {
            diagnostics.push(
                Diagnostic::error(
                    "Invalid Attribute Value Length",
                    format!(
                        "Attribute {} {}, got: {}",
                        request.path,
                        self.description(),
                        length
                    ),
                )
                .with_attribute(request.path.clone()),
            );
        }
    }
}

/// String must match a regular expression
pub struct RegexMatches {
    pub pattern: Regex,
    pub message: String,
}

impl RegexMatches {
    pub fn new(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            pattern,
            message: message.into(),
        }
    }
}

#[async_trait]
impl StringValidator for RegexMatches {
    fn description(&self) -> String {
        self.message.clone()
    }

    async fn validate_string(
        &self,
        _ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(value) = request.config_value.as_known() else {
            return;
        };

        if !self.pattern.is_match(value) {
            diagnostics.push(
                Diagnostic::error(
                    "Invalid Attribute Value Match",
                    format!(
                        "Attribute {} {}, got: {}",
                        request.path, self.message, value
                    ),
                )
                .with_attribute(request.path.clone()),
            );
        }
    }
}

/// String must be one of a fixed set of values
pub struct OneOf {
    pub values: Vec<String>,
}

impl OneOf {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl StringValidator for OneOf {
    fn description(&self) -> String {
        format!("value must be one of: {}", quoted_list(&self.values, true))
    }

    async fn validate_string(
        &self,
        _ctx: &Context,
        request: &StringRequest,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(value) = request.config_value.as_known() else {
            return;
        };

        if !self.values.iter().any(|v| v == value) {
            diagnostics.push(
                Diagnostic::error(
                    "Invalid Attribute Value Match",
                    format!(
                        "Attribute {} {}, got: \"{}\"",
                        request.path,
                        self.description(),
                        value
                    ),
                )
                .with_attribute(request.path.clone()),
            );
        }
    }
}

/// Integer must lie within an inclusive range
pub struct Int64Between {
    pub min: i64,
    pub max: i64,
}

#[async_trait]
impl Int64Validator for Int64Between {
    fn description(&self) -> String {
        format!("value must be between {} and {}", self.min, self.max)
    }

    async fn validate_int64(
        &self,
        _ctx: &Context,
        request: &Int64Request,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(value) = request.config_value.as_known() else {
            return;
        };

        if *value < self.min || *value > self.max {
            diagnostics.push(
                Diagnostic::error(
                    "Invalid Attribute Value",
                    format!(
                        "Attribute {} {}, got: {}",
                        request.path,
                        self.description(),
                        value
                    ),
                )
                .with_attribute(request.path.clone()),
            );
        }
    }
}

/// Integer must be one of a fixed set of values
pub struct Int64OneOf {
    pub values: Vec<i64>,
}

impl Int64OneOf {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

#[async_trait]
impl Int64Validator for Int64OneOf {
    fn description(&self) -> String {
        format!("value must be one of: {}", quoted_list(&self.values, false))
    }

    async fn validate_int64(
        &self,
        _ctx: &Context,
        request: &Int64Request,
        diagnostics: &mut Diagnostics,
    ) {
        let Some(value) = request.config_value.as_known() else {
            return;
        };

        if !self.values.contains(value) {
            diagnostics.push(
                Diagnostic::error(
                    "Invalid Attribute Value Match",
                    format!(
                        "Attribute {} {}, got: {}",
                        request.path,
                        self.description(),
                        value
                    ),
                )
                .with_attribute(request.path.clone()),
            );
        }
    }
}
