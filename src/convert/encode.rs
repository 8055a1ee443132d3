// Copyright (c) 2025 - Cowboy AI, Inc.
//! Reverse mapping: configuration model → API request
//!
//! | model value        | request field           |
//! |--------------------|-------------------------|
//! | `Known(v)`         | `v`, freshly built      |
//! | `Null`             | omitted                 |
//! | `Unknown`          | omitted, plus a warning |
//! | `Known([])`        | `[]`                    |
//!
//! Computed-only attributes are left out of requests unless the config asks
//! for them. Path parameters never appear in the body.

use serde_json::{Map, Number, Value as JsonValue};
use tracing::{debug, warn};

use super::{timestamp, ConfigModel};
use crate::config::MapperConfig;
use crate::diagnostics::{AttributePath, Diagnostic, Diagnostics};
use crate::errors::ConversionError;
use crate::schema::{AttributeType, ScalarType, Schema};
use crate::value::{Data, ObjectValue, Value};

pub(crate) struct Encoder<'c> {
    config: &'c MapperConfig,
    diagnostics: Diagnostics,
}

impl<'c> Encoder<'c> {
    pub(crate) fn new(config: &'c MapperConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }

    pub(crate) fn run(mut self, schema: &Schema, model: &ConfigModel) -> (JsonValue, Diagnostics) {
        let body = self.encode_object(schema, model, &AttributePath::root());
        debug!(
            fields = body.len(),
            diagnostics = self.diagnostics.len(),
            "Encoded request"
        );
        (JsonValue::Object(body), self.diagnostics)
    }

    fn encode_object(
        &mut self,
        schema: &Schema,
        object: &ObjectValue,
        path: &AttributePath,
    ) -> Map<String, JsonValue> {
        for name in object.names().filter(|n| !schema.contains(n)) {
            self.diagnostics.append(Diagnostic::conversion(
                path.attribute(name),
                &ConversionError::UnexpectedAttribute(name.to_string()),
            ));
        }

        let mut body = Map::new();
        for attr in schema.attributes() {
            let Some(key) = attr.external_name() else {
                continue;
            };
            if attr.requiredness().is_read_only() && !self.config.include_computed {
                continue;
            }

            let child = path.attribute(attr.name());
            match object.value(attr.name()) {
                Value::Null => {}
                Value::Unknown => self.substitute_unknown(&child),
                Value::Known(data) => {
                    if let Some(json) = self.encode_data(attr.attr_type(), data, &child) {
                        body.insert(key.to_string(), json);
                    }
                }
            }
        }
        body
    }

    fn encode_data(
        &mut self,
        attr_type: &AttributeType,
        data: &Data,
        path: &AttributePath,
    ) -> Option<JsonValue> {
        match (attr_type, data) {
            (AttributeType::Scalar(scalar), _) => self.encode_scalar_at(*scalar, data, path),
            (AttributeType::List(scalar), Data::List(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let element = path.index(i);
                    match item {
                        Value::Null => out.push(JsonValue::Null),
                        Value::Unknown => self.substitute_unknown(&element),
                        Value::Known(d) => {
                            if let Some(json) = self.encode_scalar_at(*scalar, d, &element) {
                                out.push(json);
                            }
                        }
                    }
                }
                Some(JsonValue::Array(out))
            }
            (AttributeType::SingleNested(nested), Data::Object(object)) => {
                Some(JsonValue::Object(self.encode_object(nested, object, path)))
            }
            (AttributeType::ListNested(nested), Data::List(items)) => {
                let mut out = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    let element = path.index(i);
                    match item {
                        Value::Null => out.push(JsonValue::Null),
                        Value::Unknown => self.substitute_unknown(&element),
                        Value::Known(Data::Object(object)) => {
                            out.push(JsonValue::Object(self.encode_object(nested, object, &element)))
                        }
                        Value::Known(other) => self.mismatch(&element, "object", other),
                    }
                }
                Some(JsonValue::Array(out))
            }
            (AttributeType::SingleNested(_), other) => {
                self.mismatch(path, "object", other);
                None
            }
            (AttributeType::List(_) | AttributeType::ListNested(_), other) => {
                self.mismatch(path, "list", other);
                None
            }
        }
    }

    fn encode_scalar_at(
        &mut self,
        scalar: ScalarType,
        data: &Data,
        path: &AttributePath,
    ) -> Option<JsonValue> {
        match self.encode_scalar(scalar, data) {
            Ok(json) => Some(json),
            Err(err) => {
                self.diagnostics
                    .append(Diagnostic::conversion(path.clone(), &err));
                None
            }
        }
    }

    fn encode_scalar(&self, scalar: ScalarType, data: &Data) -> Result<JsonValue, ConversionError> {
        match (scalar, data) {
            (ScalarType::String, Data::String(s)) => Ok(JsonValue::String(s.clone())),
            (ScalarType::Bool, Data::Bool(b)) => Ok(JsonValue::Bool(*b)),
            (ScalarType::Int64, Data::Int64(i)) => Ok(JsonValue::Number((*i).into())),
            (ScalarType::Float64, Data::Float64(f)) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .ok_or_else(|| ConversionError::NonFiniteFloat(f.to_string())),
            (ScalarType::Timestamp, Data::String(s)) => {
                timestamp::to_api(s, &self.config.timestamp_format).map(JsonValue::String)
            }
            (ScalarType::Json, Data::String(s)) => {
                match serde_json::from_str(s) {
                    // A null document would decode back as an absent attribute
                    Ok(JsonValue::Null) => Err(ConversionError::InvalidJson(
                        "document is null, use a null attribute instead".to_string(),
                    )),
                    Ok(document) => Ok(document),
                    Err(e) => Err(ConversionError::InvalidJson(e.to_string())),
                }
            }
            (_, other) => Err(ConversionError::TypeMismatch {
                expected: scalar.name(),
                found: other.kind_name().to_string(),
            }),
        }
    }

    fn substitute_unknown(&mut self, path: &AttributePath) {
        warn!(path = %path, "Unknown value omitted from request");
        if self.config.warn_on_unknown {
            self.diagnostics.append(Diagnostic::warning(
                path.clone(),
                "Unknown value omitted",
                "the value is not resolved yet and was left out of the request",
            ));
        }
    }

    fn mismatch(&mut self, path: &AttributePath, expected: &'static str, found: &Data) {
        self.diagnostics.append(Diagnostic::conversion(
            path.clone(),
            &ConversionError::TypeMismatch {
                expected,
                found: found.kind_name().to_string(),
            },
        ));
    }
}
