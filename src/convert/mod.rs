// Copyright (c) 2025 - Cowboy AI, Inc.
//! Schema-driven conversion between API records and configuration models
//!
//! All conversions are one generic tree-walk over a [`Schema`]; there is no
//! per-resource mapping code.
//!
//! ```text
//!                    decode                         validate
//!  API record  ─────────────────▶  ConfigModel  ──────────────▶ Diagnostics
//!  (JSON)      ◀─────────────────  (tri-state)
//!                    encode
//! ```
//!
//! Every pass returns its [`Diagnostics`] alongside the result. Field
//! failures never abort the walk; decode withholds the model when any error
//! was recorded, encode always returns the body it could build and leaves
//! the decision to the caller.
//!
//! # Example
//!
//! ```
//! use cim_tfmodel::convert::{decode, encode};
//! use cim_tfmodel::schema::{Attribute, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::builder()
//!     .attribute(Attribute::string("name").required())
//!     .attribute(Attribute::bool("paused"))
//!     .build()
//!     .unwrap();
//!
//! let (model, diags) = decode(&schema, Some(&json!({"name": "c1"})));
//! assert!(diags.is_empty());
//! let model = model.unwrap();
//! assert!(model.value("paused").is_null());
//!
//! let (body, _) = encode(&schema, &model);
//! assert_eq!(body, json!({"name": "c1"}));
//! ```

mod decode;
mod encode;
pub mod timestamp;
mod validate;

pub use decode::null_model;
pub use validate::validate;

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::config::MapperConfig;
use crate::diagnostics::Diagnostics;
use crate::schema::Schema;
use crate::value::ObjectValue;

use decode::Decoder;
use encode::Encoder;

/// Root object of a configuration model
pub type ConfigModel = ObjectValue;

/// Which names key the fields of a JSON document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStyle {
    /// API record: external names, timestamps and JSON in API form
    #[default]
    Api,
    /// Model document: attribute names, every string-valued scalar as stored
    Attribute,
}

/// Decode/encode entry point bound to a [`MapperConfig`]
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// API record → model; `None` when any error diagnostic was recorded
    pub fn decode(
        &self,
        schema: &Schema,
        record: Option<&JsonValue>,
    ) -> (Option<ConfigModel>, Diagnostics) {
        debug!(attributes = schema.len(), "Decoding API record");
        Decoder::new(&self.config, KeyStyle::Api).run(schema, record)
    }

    /// Model document (attribute-keyed JSON) → model
    pub fn read_model(&self, schema: &Schema, document: &JsonValue) -> (Option<ConfigModel>, Diagnostics) {
        Decoder::new(&self.config, KeyStyle::Attribute).run(schema, Some(document))
    }

    /// Model → API request body
    pub fn encode(&self, schema: &Schema, model: &ConfigModel) -> (JsonValue, Diagnostics) {
        debug!(
            attributes = schema.len(),
            include_computed = self.config.include_computed,
            "Encoding API request"
        );
        Encoder::new(&self.config).run(schema, model)
    }
}

/// Decode with the default configuration
pub fn decode(schema: &Schema, record: Option<&JsonValue>) -> (Option<ConfigModel>, Diagnostics) {
    Mapper::default().decode(schema, record)
}

/// Encode with the default configuration
pub fn encode(schema: &Schema, model: &ConfigModel) -> (JsonValue, Diagnostics) {
    Mapper::default().encode(schema, model)
}

/// Kind of a JSON value, for mismatch messages
pub(crate) fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(n) if n.is_f64() => "float",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
