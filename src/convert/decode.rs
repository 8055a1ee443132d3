// Copyright (c) 2025 - Cowboy AI, Inc.
//! Forward mapping: API record → configuration model
//!
//! Absent and `null` fields decode to Null. Present fields are converted
//! according to the attribute type; a value that does not fit is recorded
//! as an error diagnostic, the attribute is set to Null and the walk moves on
//! to the next sibling. Decode never produces Unknown.

use serde_json::{Map, Value as JsonValue};
use tracing::debug;

use super::{json_kind, timestamp, ConfigModel, KeyStyle};
use crate::config::MapperConfig;
use crate::diagnostics::{AttributePath, Diagnostic, Diagnostics};
use crate::errors::ConversionError;
use crate::schema::{Attribute, AttributeType, ScalarType, Schema};
use crate::value::{AttrValue, Data, ObjectValue, Value};

/// A model with every top-level attribute Null
pub fn null_model(schema: &Schema) -> ConfigModel {
    schema
        .names()
        .map(|name| (name.to_string(), Value::Null))
        .collect()
}

pub(crate) struct Decoder<'c> {
    config: &'c MapperConfig,
    style: KeyStyle,
    diagnostics: Diagnostics,
}

impl<'c> Decoder<'c> {
    pub(crate) fn new(config: &'c MapperConfig, style: KeyStyle) -> Self {
        Self {
            config,
            style,
            diagnostics: Diagnostics::new(),
        }
    }

    pub(crate) fn run(
        mut self,
        schema: &Schema,
        record: Option<&JsonValue>,
    ) -> (Option<ConfigModel>, Diagnostics) {
        let root = AttributePath::root();
        let model = match record {
            None | Some(JsonValue::Null) => null_model(schema),
            Some(JsonValue::Object(fields)) => self.decode_object(schema, fields, &root),
            Some(other) => {
                self.diagnostics.append(Diagnostic::conversion(
                    root,
                    &ConversionError::TypeMismatch {
                        expected: "object",
                        found: json_kind(other).to_string(),
                    },
                ));
                return (None, self.diagnostics);
            }
        };

        debug!(
            attributes = model.len(),
            diagnostics = self.diagnostics.len(),
            "Decoded record"
        );

        if self.diagnostics.has_error() {
            (None, self.diagnostics)
        } else {
            (Some(model), self.diagnostics)
        }
    }

    fn key<'a>(&self, attr: &'a Attribute) -> Option<&'a str> {
        match self.style {
            KeyStyle::Api => attr.external_name(),
            KeyStyle::Attribute => Some(attr.name()),
        }
    }

    fn decode_object(
        &mut self,
        schema: &Schema,
        fields: &Map<String, JsonValue>,
        path: &AttributePath,
    ) -> ObjectValue {
        let mut out = ObjectValue::new();
        for attr in schema.attributes() {
            let child = path.attribute(attr.name());
            let raw = self.key(attr).and_then(|key| fields.get(key));
            let value = match raw {
                None | Some(JsonValue::Null) => Value::Null,
                Some(v) => self.decode_value(attr.attr_type(), v, &child),
            };
            out.insert(attr.name(), value);
        }

        // Model documents must match the schema exactly; API records may
        // carry fields the schema does not model.
        if self.style == KeyStyle::Attribute {
            for key in fields.keys().filter(|k| !schema.contains(k)) {
                self.diagnostics.append(Diagnostic::conversion(
                    path.attribute(key.as_str()),
                    &ConversionError::UnexpectedAttribute(key.clone()),
                ));
            }
        }
        out
    }

    fn decode_value(
        &mut self,
        attr_type: &AttributeType,
        raw: &JsonValue,
        path: &AttributePath,
    ) -> AttrValue {
        match (attr_type, raw) {
            (AttributeType::Scalar(scalar), _) => self.decode_scalar_at(*scalar, raw, path),
            (AttributeType::List(scalar), JsonValue::Array(items)) => {
                let values = items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| match item {
                        JsonValue::Null => Value::Null,
                        _ => self.decode_scalar_at(*scalar, item, &path.index(i)),
                    })
                    .collect();
                AttrValue::list(values)
            }
            (AttributeType::SingleNested(nested), JsonValue::Object(fields)) => {
                AttrValue::object(self.decode_object(nested, fields, path))
            }
            (AttributeType::ListNested(nested), JsonValue::Array(items)) => {
                let mut values = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let element = path.index(i);
                    let value = match item {
                        JsonValue::Null => Value::Null,
                        JsonValue::Object(fields) => {
                            AttrValue::object(self.decode_object(nested, fields, &element))
                        }
                        other => self.mismatch(&element, "object", other),
                    };
                    values.push(value);
                }
                AttrValue::list(values)
            }
            (AttributeType::SingleNested(_), other) => self.mismatch(path, "object", other),
            (AttributeType::List(_) | AttributeType::ListNested(_), other) => {
                self.mismatch(path, "array", other)
            }
        }
    }

    fn decode_scalar_at(
        &mut self,
        scalar: ScalarType,
        raw: &JsonValue,
        path: &AttributePath,
    ) -> AttrValue {
        match self.decode_scalar(scalar, raw) {
            Ok(data) => Value::Known(data),
            Err(err) => {
                self.diagnostics
                    .append(Diagnostic::conversion(path.clone(), &err));
                Value::Null
            }
        }
    }

    fn decode_scalar(&self, scalar: ScalarType, raw: &JsonValue) -> Result<Data, ConversionError> {
        let mismatch = || ConversionError::TypeMismatch {
            expected: scalar.name(),
            found: json_kind(raw).to_string(),
        };

        match scalar {
            ScalarType::String => raw
                .as_str()
                .map(|s| Data::String(s.to_string()))
                .ok_or_else(mismatch),
            ScalarType::Bool => raw.as_bool().map(Data::Bool).ok_or_else(mismatch),
            ScalarType::Int64 => match raw {
                JsonValue::Number(n) => match n.as_i64() {
                    Some(i) => Ok(Data::Int64(i)),
                    None if n.is_u64() => Err(ConversionError::IntegerOutOfRange(n.to_string())),
                    None => Err(mismatch()),
                },
                _ => Err(mismatch()),
            },
            ScalarType::Float64 => raw.as_f64().map(Data::Float64).ok_or_else(mismatch),
            ScalarType::Timestamp => {
                let text = raw.as_str().ok_or_else(mismatch)?;
                match self.style {
                    KeyStyle::Api => {
                        timestamp::normalize(text, &self.config.timestamp_format).map(Data::String)
                    }
                    KeyStyle::Attribute => Ok(Data::String(text.to_string())),
                }
            }
            ScalarType::Json => match self.style {
                KeyStyle::Api => serde_json::to_string(raw)
                    .map(Data::String)
                    .map_err(|e| ConversionError::InvalidJson(e.to_string())),
                KeyStyle::Attribute => raw
                    .as_str()
                    .map(|s| Data::String(s.to_string()))
                    .ok_or_else(mismatch),
            },
        }
    }

    fn mismatch(&mut self, path: &AttributePath, expected: &'static str, raw: &JsonValue) -> AttrValue {
        self.diagnostics.append(Diagnostic::conversion(
            path.clone(),
            &ConversionError::TypeMismatch {
                expected,
                found: json_kind(raw).to_string(),
            },
        ));
        Value::Null
    }
}
