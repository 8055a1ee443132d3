// Copyright (c) 2025 - Cowboy AI, Inc.
//! Schema Descriptors
//!
//! A [`Schema`] is the static declaration of a resource's attributes: their
//! names, types, requiredness, validators and the name of the matching field
//! in the external API record. The decode, encode and validate passes are
//! all generic tree-walks parameterized by a schema; nothing in them is
//! written per resource.
//!
//! # Shape
//!
//! ```text
//! Schema
//!  ├── Attribute "name"            Scalar(String)   Required
//!  ├── Attribute "create_date"     Scalar(Timestamp) Computed
//!  ├── Attribute "bi_connector"    SingleNested(Schema)
//!  │    ├── "enabled"              Scalar(Bool)
//!  │    └── "read_preference"      Scalar(String)
//!  └── Attribute "replication_specs" ListNested(Schema)
//!       └── ...
//! ```
//!
//! # Invariants
//!
//! - Attribute names are unique within one schema level
//! - External names are unique within one schema level
//! - Nested attributes carry a non-empty child schema
//! - Validators are only attached to string-valued attributes
//!
//! A schema that breaks these is a programming error. [`SchemaBuilder::build`]
//! reports it as a [`SchemaError`]; the resource catalog turns that into a
//! panic when the descriptor is first built.

pub mod validators;

pub use validators::{PlanModifier, Validator};

use serde::Serialize;
use serde_json::{json, Value as JsonValue};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Malformed schema descriptor
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Attribute name is empty")]
    EmptyName,

    #[error("Attribute declared twice: {0}")]
    DuplicateAttribute(String),

    #[error("External name {external:?} used by more than one attribute (second: {attribute})")]
    DuplicateExternalName { attribute: String, external: String },

    #[error("Nested attribute {0} has no child attributes")]
    EmptyNested(String),

    #[error("Validators require a string attribute: {0}")]
    ValidatorOnNonString(String),

    #[error("Plan modifier {modifier:?} does not apply to attribute {attribute}")]
    PlanModifierNotApplicable {
        attribute: String,
        modifier: PlanModifier,
    },

    #[error("Invalid regular expression {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Invalid length bounds: min {min} > max {max}")]
    InvalidLengthBounds { min: usize, max: usize },
}

/// Who supplies an attribute's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requiredness {
    /// Must be set in configuration
    Required,
    /// May be set in configuration; never filled by the API
    Optional,
    /// Filled by the API only
    Computed,
    /// May be set in configuration; filled by the API when not
    OptionalComputed,
}

impl Requiredness {
    pub fn is_required(&self) -> bool {
        matches!(self, Requiredness::Required)
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Requiredness::Optional | Requiredness::OptionalComputed)
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Requiredness::Computed | Requiredness::OptionalComputed)
    }

    /// Computed and never set from configuration
    pub fn is_read_only(&self) -> bool {
        matches!(self, Requiredness::Computed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Requiredness::Required => "required",
            Requiredness::Optional => "optional",
            Requiredness::Computed => "computed",
            Requiredness::OptionalComputed => "optional_computed",
        }
    }
}

impl fmt::Display for Requiredness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Scalar attribute types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    Bool,
    Int64,
    Float64,
    /// String in the model, timestamp in the external record
    Timestamp,
    /// String in the model, arbitrary JSON in the external record
    Json,
}

impl ScalarType {
    pub fn name(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Bool => "bool",
            ScalarType::Int64 => "int64",
            ScalarType::Float64 => "float64",
            ScalarType::Timestamp => "timestamp",
            ScalarType::Json => "json",
        }
    }

    /// Held as a string in the model
    pub fn is_string_valued(&self) -> bool {
        matches!(
            self,
            ScalarType::String | ScalarType::Timestamp | ScalarType::Json
        )
    }
}

/// Attribute type, possibly nesting a child schema
#[derive(Debug, Clone)]
pub enum AttributeType {
    Scalar(ScalarType),
    /// Ordered list of scalars
    List(ScalarType),
    /// One nested object
    SingleNested(Schema),
    /// Ordered list of nested objects
    ListNested(Schema),
}

impl AttributeType {
    pub fn type_name(&self) -> String {
        match self {
            AttributeType::Scalar(s) => s.name().to_string(),
            AttributeType::List(s) => format!("list({})", s.name()),
            AttributeType::SingleNested(_) => "single_nested".to_string(),
            AttributeType::ListNested(_) => "list_nested".to_string(),
        }
    }

    pub fn nested_schema(&self) -> Option<&Schema> {
        match self {
            AttributeType::SingleNested(schema) | AttributeType::ListNested(schema) => Some(schema),
            _ => None,
        }
    }
}

/// Convert an attribute name to the API's camelCase field name
///
/// `group_id` → `groupId`, `change_stream_options` → `changeStreamOptions`.
pub fn camelize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// One attribute of a schema
#[derive(Debug, Clone)]
pub struct Attribute {
    name: String,
    external_name: Option<String>,
    attr_type: AttributeType,
    requiredness: Requiredness,
    description: String,
    validators: Vec<Validator>,
    plan_modifiers: Vec<PlanModifier>,
}

impl Attribute {
    /// New attribute; requiredness defaults to optional-computed and the
    /// external name to the camelCase form of `name`
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        let name = name.into();
        let external_name = Some(camelize(&name));
        Self {
            name,
            external_name,
            attr_type,
            requiredness: Requiredness::OptionalComputed,
            description: String::new(),
            validators: Vec::new(),
            plan_modifiers: Vec::new(),
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Scalar(ScalarType::String))
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Scalar(ScalarType::Bool))
    }

    pub fn int64(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Scalar(ScalarType::Int64))
    }

    pub fn float64(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Scalar(ScalarType::Float64))
    }

    pub fn timestamp(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Scalar(ScalarType::Timestamp))
    }

    pub fn json(name: impl Into<String>) -> Self {
        Self::new(name, AttributeType::Scalar(ScalarType::Json))
    }

    pub fn list(name: impl Into<String>, element: ScalarType) -> Self {
        Self::new(name, AttributeType::List(element))
    }

    pub fn single_nested(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(name, AttributeType::SingleNested(schema))
    }

    pub fn list_nested(name: impl Into<String>, schema: Schema) -> Self {
        Self::new(name, AttributeType::ListNested(schema))
    }

    pub fn required(mut self) -> Self {
        self.requiredness = Requiredness::Required;
        self
    }

    pub fn optional(mut self) -> Self {
        self.requiredness = Requiredness::Optional;
        self
    }

    pub fn computed(mut self) -> Self {
        self.requiredness = Requiredness::Computed;
        self
    }

    pub fn optional_computed(mut self) -> Self {
        self.requiredness = Requiredness::OptionalComputed;
        self
    }

    /// Override the external field name
    pub fn api_name(mut self, external: impl Into<String>) -> Self {
        self.external_name = Some(external.into());
        self
    }

    /// The value travels in the request URL, not in the record body
    pub fn path_parameter(mut self) -> Self {
        self.external_name = None;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn plan_modifier(mut self, modifier: PlanModifier) -> Self {
        self.plan_modifiers.push(modifier);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field name in the external record; `None` for path parameters
    pub fn external_name(&self) -> Option<&str> {
        self.external_name.as_deref()
    }

    pub fn attr_type(&self) -> &AttributeType {
        &self.attr_type
    }

    pub fn requiredness(&self) -> Requiredness {
        self.requiredness
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    pub fn plan_modifiers(&self) -> &[PlanModifier] {
        &self.plan_modifiers
    }

    fn check(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::EmptyName);
        }

        if let Some(nested) = self.attr_type.nested_schema() {
            if nested.is_empty() {
                return Err(SchemaError::EmptyNested(self.name.clone()));
            }
        }

        let string_valued = matches!(
            self.attr_type,
            AttributeType::Scalar(s) if s.is_string_valued()
        );
        if !self.validators.is_empty() && !string_valued {
            return Err(SchemaError::ValidatorOnNonString(self.name.clone()));
        }

        for modifier in &self.plan_modifiers {
            let applicable = match modifier {
                PlanModifier::UseStateForUnknown => self.requiredness.is_computed(),
                PlanModifier::DiffSuppressJson => matches!(
                    self.attr_type,
                    AttributeType::Scalar(ScalarType::Json | ScalarType::String)
                ),
            };
            if !applicable {
                return Err(SchemaError::PlanModifierNotApplicable {
                    attribute: self.name.clone(),
                    modifier: *modifier,
                });
            }
        }

        Ok(())
    }

    fn to_json(&self) -> JsonValue {
        let mut out = json!({
            "name": self.name,
            "external_name": self.external_name,
            "type": self.attr_type.type_name(),
            "requiredness": self.requiredness,
            "description": self.description,
        });
        if !self.validators.is_empty() {
            out["validators"] = json!(self.validators);
        }
        if !self.plan_modifiers.is_empty() {
            out["plan_modifiers"] = json!(self.plan_modifiers);
        }
        if let Some(nested) = self.attr_type.nested_schema() {
            out["attributes"] = nested.attributes_json();
        }
        out
    }
}

/// Immutable attribute declaration for one resource or nested object
#[derive(Debug, Clone, Default)]
pub struct Schema {
    description: String,
    attributes: Vec<Attribute>,
    index: HashMap<String, usize>,
}

impl Schema {
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attributes in declaration order
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.index.get(name).map(|&i| &self.attributes[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Every attribute, depth-first, with its dotted path
    pub fn walk(&self) -> Vec<(String, &Attribute)> {
        let mut out = Vec::new();
        self.walk_into("", &mut out);
        out
    }

    fn walk_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Attribute)>) {
        for attr in &self.attributes {
            let path = if prefix.is_empty() {
                attr.name.clone()
            } else {
                format!("{}.{}", prefix, attr.name)
            };
            if let Some(nested) = attr.attr_type.nested_schema() {
                out.push((path.clone(), attr));
                nested.walk_into(&path, out);
            } else {
                out.push((path, attr));
            }
        }
    }

    /// Export of the descriptor for documentation tooling
    pub fn to_json(&self) -> JsonValue {
        json!({
            "description": self.description,
            "attributes": self.attributes_json(),
        })
    }

    fn attributes_json(&self) -> JsonValue {
        JsonValue::Array(self.attributes.iter().map(Attribute::to_json).collect())
    }
}

/// Builder for [`Schema`]
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    description: String,
    attributes: Vec<Attribute>,
}

impl SchemaBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attributes<I: IntoIterator<Item = Attribute>>(mut self, attributes: I) -> Self {
        self.attributes.extend(attributes);
        self
    }

    /// Check the invariants and freeze the schema
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut index = HashMap::with_capacity(self.attributes.len());
        let mut external_names = HashSet::new();

        for (i, attr) in self.attributes.iter().enumerate() {
            attr.check()?;

            if index.insert(attr.name.clone(), i).is_some() {
                return Err(SchemaError::DuplicateAttribute(attr.name.clone()));
            }

            if let Some(external) = attr.external_name() {
                if !external_names.insert(external.to_string()) {
                    return Err(SchemaError::DuplicateExternalName {
                        attribute: attr.name.clone(),
                        external: external.to_string(),
                    });
                }
            }
        }

        Ok(Schema {
            description: self.description,
            attributes: self.attributes,
            index,
        })
    }
}
