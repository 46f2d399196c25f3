//! Tri-state attribute values
//!
//! Every configuration, plan or state attribute is either `Null` (not supplied),
//! `Unknown` (supplied but only computed during apply) or `Known`. Providers decode
//! raw [`Dynamic`] trees into typed models built from [`Value<T>`] fields and encode
//! them back before handing state to the host runtime.
//!
//! Collections are tri-state twice: `Value<Vec<Value<String>>>` distinguishes a
//! null list from a list holding a null element.

use crate::schema::AttributeType;
use crate::types::{AttributePath, Diagnostic, Diagnostics, Dynamic};
use std::collections::HashMap;

/// Tri-state attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    Null,
    Unknown,
    Known(T),
}

impl<T> Value<T> {
    pub fn null() -> Self {
        Value::Null
    }

    pub fn unknown() -> Self {
        Value::Unknown
    }

    pub fn known(value: T) -> Self {
        Value::Known(value)
    }

    /// `Some` becomes `Known`, `None` becomes `Null`
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::Known(v),
            None => Value::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    pub fn is_null_or_unknown(&self) -> bool {
        !self.is_known()
    }

    pub fn as_known(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Null and Unknown both collapse to `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Value<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
            Value::Known(v) => Value::Known(f(v)),
        }
    }

    pub fn as_ref(&self) -> Value<&T> {
        match self {
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
            Value::Known(v) => Value::Known(v),
        }
    }
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        Value::from_option(value)
    }
}

/// Decode a typed value out of a raw [`Dynamic`]
pub trait FromDynamic: Sized {
    fn from_dynamic(value: &Dynamic, path: &AttributePath) -> Result<Self, Diagnostics>;
}

/// Encode a typed value into a raw [`Dynamic`]
pub trait ToDynamic {
    fn to_dynamic(&self) -> Dynamic;
}

/// Object models describe the attribute types they encode to
pub trait ObjectType {
    fn attribute_types() -> HashMap<String, AttributeType>;

    fn object_type() -> AttributeType {
        AttributeType::Object(Self::attribute_types())
    }
}

fn mismatch(path: &AttributePath, expected: &str, actual: &Dynamic) -> Diagnostics {
    Diagnostic::error(
        "Value Conversion Error",
        format!("expected {}, got {}", expected, actual.type_name()),
    )
    .with_attribute(path.clone())
    .into()
}

impl FromDynamic for String {
    fn from_dynamic(value: &Dynamic, path: &AttributePath) -> Result<Self, Diagnostics> {
        match value {
            Dynamic::String(s) => Ok(s.clone()),
            other => Err(mismatch(path, "string", other)),
        }
    }
}

impl ToDynamic for String {
    fn to_dynamic(&self) -> Dynamic {
        Dynamic::String(self.clone())
    }
}

impl FromDynamic for i64 {
    fn from_dynamic(value: &Dynamic, path: &AttributePath) -> Result<Self, Diagnostics> {
        match value {
            Dynamic::Number(n) if n.fract() == 0.0 => Ok(*n as i64),
            Dynamic::Number(n) => Err(Diagnostic::error(
                "Value Conversion Error",
                format!("expected a whole number, got {}", n),
            )
            .with_attribute(path.clone())
            .into()),
            other => Err(mismatch(path, "number", other)),
        }
    }
}

impl ToDynamic for i64 {
    fn to_dynamic(&self) -> Dynamic {
        Dynamic::Number(*self as f64)
    }
}

impl FromDynamic for f64 {
    fn from_dynamic(value: &Dynamic, path: &AttributePath) -> Result<Self, Diagnostics> {
        match value {
            Dynamic::Number(n) => Ok(*n),
            other => Err(mismatch(path, "number", other)),
        }
    }
}

impl ToDynamic for f64 {
    fn to_dynamic(&self) -> Dynamic {
        Dynamic::Number(*self)
    }
}

impl FromDynamic for bool {
    fn from_dynamic(value: &Dynamic, path: &AttributePath) -> Result<Self, Diagnostics> {
        match value {
            Dynamic::Bool(b) => Ok(*b),
            other => Err(mismatch(path, "bool", other)),
        }
    }
}

impl ToDynamic for bool {
    fn to_dynamic(&self) -> Dynamic {
        Dynamic::Bool(*self)
    }
}

impl<T: FromDynamic> FromDynamic for Vec<T> {
    fn from_dynamic(value: &Dynamic, path: &AttributePath) -> Result<Self, Diagnostics> {
        let items = match value {
            Dynamic::List(items) => items,
            other => return Err(mismatch(path, "list", other)),
        };

        let mut diagnostics = Diagnostics::new();
        let mut decoded = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            match T::from_dynamic(item, &path.clone().index(i as i64)) {
                Ok(v) => decoded.push(v),
                Err(d) => diagnostics.extend(d),
            }
        }

        if diagnostics.has_errors() {
            return Err(diagnostics);
        }
        Ok(decoded)
    }
}

impl<T: ToDynamic> ToDynamic for Vec<T> {
    fn to_dynamic(&self) -> Dynamic {
        Dynamic::List(self.iter().map(ToDynamic::to_dynamic).collect())
    }
}

impl<T: FromDynamic> FromDynamic for Value<T> {
    fn from_dynamic(value: &Dynamic, path: &AttributePath) -> Result<Self, Diagnostics> {
        match value {
            Dynamic::Null => Ok(Value::Null),
            Dynamic::Unknown => Ok(Value::Unknown),
            other => T::from_dynamic(other, path).map(Value::Known),
        }
    }
}

impl<T: ToDynamic> ToDynamic for Value<T> {
    fn to_dynamic(&self) -> Dynamic {
        match self {
            Value::Null => Dynamic::Null,
            Value::Unknown => Dynamic::Unknown,
            Value::Known(v) => v.to_dynamic(),
        }
    }
}

impl ToDynamic for Dynamic {
    fn to_dynamic(&self) -> Dynamic {
        self.clone()
    }
}

impl FromDynamic for Dynamic {
    fn from_dynamic(value: &Dynamic, _path: &AttributePath) -> Result<Self, Diagnostics> {
        Ok(value.clone())
    }
}

/// Reads the attributes of an object one at a time, collecting every decode failure
pub struct ObjectReader<'a> {
    attributes: &'a HashMap<String, Dynamic>,
    path: AttributePath,
    diagnostics: Diagnostics,
}

impl<'a> ObjectReader<'a> {
    pub fn new(value: &'a Dynamic, path: &AttributePath) -> Result<Self, Diagnostics> {
        match value {
            Dynamic::Map(attributes) => Ok(Self {
                attributes,
                path: path.clone(),
                diagnostics: Diagnostics::new(),
            }),
            other => Err(mismatch(path, "object", other)),
        }
    }

    /// Missing attributes decode as Null; failures are recorded and also yield Null
    pub fn get<T: FromDynamic>(&mut self, name: &str) -> Value<T> {
        let attr_path = self.path.clone().attribute(name);
        match self.attributes.get(name) {
            None => Value::Null,
            Some(raw) => match Value::<T>::from_dynamic(raw, &attr_path) {
                Ok(v) => v,
                Err(d) => {
                    self.diagnostics.extend(d);
                    Value::Null
                }
            },
        }
    }

    pub fn path(&self) -> &AttributePath {
        &self.path
    }

    pub fn finish<T>(self, model: T) -> Result<T, Diagnostics> {
        if self.diagnostics.has_errors() {
            return Err(self.diagnostics);
        }
        Ok(model)
    }
}

/// Builds an object value attribute by attribute
#[derive(Debug, Default)]
pub struct ObjectWriter {
    attributes: HashMap<String, Dynamic>,
}

impl ObjectWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<T: ToDynamic>(mut self, name: &str, value: &T) -> Self {
        self.attributes.insert(name.to_string(), value.to_dynamic());
        self
    }

    pub fn build(self) -> Dynamic {
        Dynamic::Map(self.attributes)
    }
}

/// Checks that a raw value conforms to a declared attribute type
pub fn check_type(
    expected: &AttributeType,
    value: &Dynamic,
    path: &AttributePath,
) -> Result<(), Diagnostics> {
    if value.is_null() || value.is_unknown() {
        return Ok(());
    }

    let type_error = |detail: String| -> Diagnostics {
        Diagnostic::error("Attribute Type Mismatch", detail)
            .with_attribute(path.clone())
            .into()
    };

    match (expected, value) {
        (AttributeType::String, Dynamic::String(_))
        | (AttributeType::Number, Dynamic::Number(_))
        | (AttributeType::Bool, Dynamic::Bool(_)) => Ok(()),
        (AttributeType::List(element), Dynamic::List(items))
        | (AttributeType::Set(element), Dynamic::List(items)) => {
            let mut diagnostics = Diagnostics::new();
            for (i, item) in items.iter().enumerate() {
                if let Err(d) = check_type(element, item, &path.clone().index(i as i64)) {
                    diagnostics.extend(d);
                }
            }
            if diagnostics.has_errors() {
                Err(diagnostics)
            } else {
                Ok(())
            }
        }
        (AttributeType::Map(element), Dynamic::Map(entries)) => {
            let mut diagnostics = Diagnostics::new();
            for (key, item) in entries {
                if let Err(d) = check_type(element, item, &path.clone().key(key)) {
                    diagnostics.extend(d);
                }
            }
            if diagnostics.has_errors() {
                Err(diagnostics)
            } else {
                Ok(())
            }
        }
        (AttributeType::Object(types), Dynamic::Map(attributes)) => {
            let mut diagnostics = Diagnostics::new();
            for name in attributes.keys() {
                if !types.contains_key(name) {
                    diagnostics.extend(type_error(format!(
                        "value carries attribute \"{}\" that the object type does not declare",
                        name
                    )));
                }
            }
            for (name, attribute_type) in types {
                match attributes.get(name) {
                    None => diagnostics.extend(type_error(format!(
                        "object type declares attribute \"{}\" that the value does not carry",
                        name
                    ))),
                    Some(item) => {
                        if let Err(d) = check_type(attribute_type, item, &path.clone().attribute(name))
                        {
                            diagnostics.extend(d);
                        }
                    }
                }
            }
            if diagnostics.has_errors() {
                Err(diagnostics)
            } else {
                Ok(())
            }
        }
        (expected, actual) => Err(type_error(format!(
            "expected {}, got {}",
            expected.type_name(),
            actual.type_name()
        ))),
    }
}

/// Encodes an object model and checks it against its declared attribute types
pub fn object_value_from<T: ToDynamic + ObjectType>(
    model: &T,
    path: &AttributePath,
) -> Result<Dynamic, Diagnostics> {
    let value = model.to_dynamic();
    check_type(&T::object_type(), &value, path)?;
    Ok(value)
}
