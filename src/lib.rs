// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tri-state attribute models for cloud database provider resources
//!
//! This crate maps API records of a cloud database platform onto the
//! tri-state (null / unknown / known) attribute models used by declarative
//! infrastructure-configuration tools, and back again.
//!
//! - [`value`]: the tri-state [`Value`] and untyped [`AttrValue`] tree
//! - [`schema`]: immutable attribute descriptors with validators
//! - [`convert`]: schema-driven decode, encode and validate passes
//! - [`diagnostics`]: field-level errors and warnings collected per pass
//! - [`resources`]: the resource catalog and typed API records
//!
//! The crate performs no I/O and installs no tracing subscriber.

pub mod config;
pub mod convert;
pub mod diagnostics;
pub mod errors;
pub mod resources;
pub mod schema;
pub mod value;

// Re-export commonly used types
pub use config::MapperConfig;
pub use convert::{decode, encode, validate, ConfigModel, Mapper};
pub use diagnostics::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use errors::{ConversionError, MapperError, MapperResult};
pub use resources::{decode_record, describe, encode_record, ApiRecord, ResourceKind};
pub use schema::{Attribute, Requiredness, Schema, SchemaError};
pub use value::{AttrValue, Data, ObjectValue, Value};
