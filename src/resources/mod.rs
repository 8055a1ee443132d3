// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource Catalog
//!
//! Each resource kind pairs a [`Schema`] with the typed API record it maps
//! to. Schemas are built once, on first use, and shared read-only for the
//! life of the process.
//!
//! ```text
//! ResourceKind ──describe──▶ &'static Schema
//!      ▲                           │
//!      │ KIND                      │ decode / encode
//!      │                           ▼
//! ApiRecord (serde struct) ◀──▶ JSON ◀──▶ ConfigModel
//! ```
//!
//! A schema that fails its own invariants is a programming error and panics
//! the first time it is described.

pub mod advanced_cluster;
pub mod employee_access_grant;
pub mod process_args;
pub mod push_based_log_export;
pub mod resource_policy;
pub mod stream_processor;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::convert::{ConfigModel, Mapper};
use crate::diagnostics::{AttributePath, Diagnostic, Diagnostics};
use crate::errors::{ConversionError, MapperError};
use crate::schema::{Schema, SchemaError};

/// Description shared by every project identifier attribute
pub(crate) const PROJECT_ID_DESCRIPTION: &str =
    "Unique 24-hexadecimal digit string that identifies your project.";

/// Resource and data source kinds known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    AdvancedCluster,
    ClusterProcessArgs,
    StreamProcessor,
    ResourcePolicy,
    /// Plural data source listing the policies of an organization
    ResourcePolicies,
    EmployeeAccessGrant,
    PushBasedLogExport,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::AdvancedCluster,
        ResourceKind::ClusterProcessArgs,
        ResourceKind::StreamProcessor,
        ResourceKind::ResourcePolicy,
        ResourceKind::ResourcePolicies,
        ResourceKind::EmployeeAccessGrant,
        ResourceKind::PushBasedLogExport,
    ];

    /// Type name without the provider prefix
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::AdvancedCluster => "advanced_cluster",
            ResourceKind::ClusterProcessArgs => "cluster_process_args",
            ResourceKind::StreamProcessor => "stream_processor",
            ResourceKind::ResourcePolicy => "resource_policy",
            ResourceKind::ResourcePolicies => "resource_policies",
            ResourceKind::EmployeeAccessGrant => "employee_access_grant",
            ResourceKind::PushBasedLogExport => "push_based_log_export",
        }
    }

    pub fn is_data_source(&self) -> bool {
        matches!(self, ResourceKind::ResourcePolicies)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

impl FromStr for ResourceKind {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.type_name() == s)
            .ok_or_else(|| MapperError::UnknownResourceKind(s.to_string()))
    }
}

fn build(kind: ResourceKind, schema: Result<Schema, SchemaError>) -> Schema {
    schema.unwrap_or_else(|err| panic!("malformed {} schema: {}", kind, err))
}

static ADVANCED_CLUSTER: Lazy<Schema> = Lazy::new(|| {
    build(ResourceKind::AdvancedCluster, advanced_cluster::schema())
});
static CLUSTER_PROCESS_ARGS: Lazy<Schema> = Lazy::new(|| {
    build(ResourceKind::ClusterProcessArgs, process_args::schema())
});
static STREAM_PROCESSOR: Lazy<Schema> = Lazy::new(|| {
    build(ResourceKind::StreamProcessor, stream_processor::schema())
});
static RESOURCE_POLICY: Lazy<Schema> = Lazy::new(|| {
    build(ResourceKind::ResourcePolicy, resource_policy::schema())
});
static RESOURCE_POLICIES: Lazy<Schema> = Lazy::new(|| {
    build(ResourceKind::ResourcePolicies, resource_policy::plural_schema())
});
static EMPLOYEE_ACCESS_GRANT: Lazy<Schema> = Lazy::new(|| {
    build(ResourceKind::EmployeeAccessGrant, employee_access_grant::schema())
});
static PUSH_BASED_LOG_EXPORT: Lazy<Schema> = Lazy::new(|| {
    build(ResourceKind::PushBasedLogExport, push_based_log_export::schema())
});

/// Shared schema of a resource kind
pub fn describe(kind: ResourceKind) -> &'static Schema {
    match kind {
        ResourceKind::AdvancedCluster => &ADVANCED_CLUSTER,
        ResourceKind::ClusterProcessArgs => &CLUSTER_PROCESS_ARGS,
        ResourceKind::StreamProcessor => &STREAM_PROCESSOR,
        ResourceKind::ResourcePolicy => &RESOURCE_POLICY,
        ResourceKind::ResourcePolicies => &RESOURCE_POLICIES,
        ResourceKind::EmployeeAccessGrant => &EMPLOYEE_ACCESS_GRANT,
        ResourceKind::PushBasedLogExport => &PUSH_BASED_LOG_EXPORT,
    }
}

/// Typed API record bound to the resource kind it maps to
pub trait ApiRecord: Serialize + DeserializeOwned {
    const KIND: ResourceKind;

    fn schema() -> &'static Schema {
        describe(Self::KIND)
    }
}

/// Decode a typed API record with the default configuration
pub fn decode_record<R: ApiRecord>(record: Option<&R>) -> (Option<ConfigModel>, Diagnostics) {
    decode_record_with(&Mapper::default(), record)
}

/// Decode a typed API record
pub fn decode_record_with<R: ApiRecord>(
    mapper: &Mapper,
    record: Option<&R>,
) -> (Option<ConfigModel>, Diagnostics) {
    debug!(kind = %R::KIND, present = record.is_some(), "Decoding typed record");
    match record.map(serde_json::to_value).transpose() {
        Ok(json) => mapper.decode(R::schema(), json.as_ref()),
        Err(err) => {
            let mut diagnostics = Diagnostics::new();
            diagnostics.append(Diagnostic::error(
                AttributePath::root(),
                "Invalid API record",
                err.to_string(),
            ));
            (None, diagnostics)
        }
    }
}

/// Encode a model into a typed API request with the default configuration
pub fn encode_record<R: ApiRecord>(model: &ConfigModel) -> (Option<R>, Diagnostics) {
    encode_record_with(&Mapper::default(), model)
}

/// Encode a model into a typed API request
///
/// Returns `None` when any error diagnostic was recorded, including a body
/// that does not deserialize into `R` (e.g. an integer too wide for the
/// record field).
pub fn encode_record_with<R: ApiRecord>(
    mapper: &Mapper,
    model: &ConfigModel,
) -> (Option<R>, Diagnostics) {
    debug!(kind = %R::KIND, "Encoding typed request");
    let (body, mut diagnostics) = mapper.encode(R::schema(), model);
    if diagnostics.has_error() {
        return (None, diagnostics);
    }
    match serde_json::from_value::<R>(body) {
        Ok(request) => (Some(request), diagnostics),
        Err(err) => {
            diagnostics.append(Diagnostic::conversion(
                AttributePath::root(),
                &ConversionError::RequestShape(err.to_string()),
            ));
            (None, diagnostics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_schema_builds() {
        for kind in ResourceKind::ALL {
            assert!(!describe(kind).is_empty(), "{} has no attributes", kind);
        }
    }

    #[test]
    fn test_describe_is_shared() {
        let a = describe(ResourceKind::StreamProcessor) as *const Schema;
        let b = describe(ResourceKind::StreamProcessor) as *const Schema;
        assert_eq!(a, b);
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(kind.to_string().parse::<ResourceKind>().unwrap(), kind);
        }
        assert!(matches!(
            "cluster".parse::<ResourceKind>(),
            Err(MapperError::UnknownResourceKind(_))
        ));
    }

    #[test]
    fn test_only_plural_policies_is_data_source() {
        let data_sources: Vec<_> = ResourceKind::ALL
            .into_iter()
            .filter(ResourceKind::is_data_source)
            .collect();
        assert_eq!(data_sources, vec![ResourceKind::ResourcePolicies]);
    }
}
