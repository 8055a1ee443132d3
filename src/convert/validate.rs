// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration validation
//!
//! Checks a model against its schema before it is encoded. Unknown values
//! are skipped since they are resolved later.

use crate::diagnostics::{AttributePath, Diagnostic, Diagnostics};
use crate::errors::ConversionError;
use crate::schema::{Attribute, AttributeType, ScalarType, Schema};
use crate::value::{Data, ObjectValue, Value};

/// Validate a configuration model
pub fn validate(schema: &Schema, model: &ObjectValue) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    validate_object(schema, model, &AttributePath::root(), &mut diagnostics);
    diagnostics
}

fn validate_object(
    schema: &Schema,
    object: &ObjectValue,
    path: &AttributePath,
    diagnostics: &mut Diagnostics,
) {
    for name in object.names().filter(|n| !schema.contains(n)) {
        diagnostics.append(Diagnostic::conversion(
            path.attribute(name),
            &ConversionError::UnexpectedAttribute(name.to_string()),
        ));
    }

    for attr in schema.attributes() {
        let child = path.attribute(attr.name());
        match object.value(attr.name()) {
            Value::Null if attr.requiredness().is_required() => {
                diagnostics.append(Diagnostic::error(
                    child,
                    "Missing required attribute",
                    format!("attribute {:?} must be set", attr.name()),
                ));
            }
            Value::Null | Value::Unknown => {}
            Value::Known(data) => {
                if attr.requiredness().is_read_only() {
                    diagnostics.append(Diagnostic::warning(
                        child.clone(),
                        "Computed attribute set in configuration",
                        format!("attribute {:?} is computed by the API", attr.name()),
                    ));
                }
                validate_data(attr, data, &child, diagnostics);
            }
        }
    }
}

fn validate_data(attr: &Attribute, data: &Data, path: &AttributePath, diagnostics: &mut Diagnostics) {
    match (attr.attr_type(), data) {
        (AttributeType::Scalar(scalar), _) => {
            if !scalar_fits(*scalar, data) {
                mismatch(path, scalar.name(), data, diagnostics);
                return;
            }
            if let Data::String(text) = data {
                for validator in attr.validators() {
                    if let Err(reason) = validator.check(text) {
                        diagnostics.append(Diagnostic::error(
                            path.clone(),
                            "Invalid attribute value",
                            reason,
                        ));
                    }
                }
            }
        }
        (AttributeType::List(scalar), Data::List(items)) => {
            for (i, item) in items.iter().enumerate() {
                if let Value::Known(d) = item {
                    if !scalar_fits(*scalar, d) {
                        mismatch(&path.index(i), scalar.name(), d, diagnostics);
                    }
                }
            }
        }
        (AttributeType::SingleNested(nested), Data::Object(object)) => {
            validate_object(nested, object, path, diagnostics);
        }
        (AttributeType::ListNested(nested), Data::List(items)) => {
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Known(Data::Object(object)) => {
                        validate_object(nested, object, &path.index(i), diagnostics)
                    }
                    Value::Known(other) => mismatch(&path.index(i), "object", other, diagnostics),
                    Value::Null | Value::Unknown => {}
                }
            }
        }
        (AttributeType::SingleNested(_), other) => mismatch(path, "object", other, diagnostics),
        (AttributeType::List(_) | AttributeType::ListNested(_), other) => {
            mismatch(path, "list", other, diagnostics)
        }
    }
}

fn scalar_fits(scalar: ScalarType, data: &Data) -> bool {
    matches!(
        (scalar, data),
        (ScalarType::String | ScalarType::Timestamp | ScalarType::Json, Data::String(_))
            | (ScalarType::Bool, Data::Bool(_))
            | (ScalarType::Int64, Data::Int64(_))
            | (ScalarType::Float64, Data::Float64(_))
    )
}

fn mismatch(path: &AttributePath, expected: &'static str, found: &Data, diagnostics: &mut Diagnostics) {
    diagnostics.append(Diagnostic::conversion(
        path.clone(),
        &ConversionError::TypeMismatch {
            expected,
            found: found.kind_name().to_string(),
        },
    ));
}
