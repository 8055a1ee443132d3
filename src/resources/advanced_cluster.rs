// Copyright (c) 2025 - Cowboy AI, Inc.
//! Advanced cluster
//!
//! The deepest schema in the catalog:
//!
//! ```text
//! cluster
//!  ├── bi_connector            { enabled, read_preference }
//!  ├── connection_strings      (computed)
//!  ├── labels[]                { key, value }
//!  ├── tags[]                  { key, value }
//!  └── replication_specs[]
//!       └── region_configs[]
//!            ├── electable_specs / read_only_specs / analytics_specs
//!            └── auto_scaling / analytics_auto_scaling
//!                 ├── compute  { enabled, min/max_instance_size, scale_down_enabled }
//!                 └── disk_gb  { enabled }
//! ```
//!
//! Hardware specs and auto scaling settings share one nested schema each.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiRecord, ResourceKind, PROJECT_ID_DESCRIPTION};
use crate::schema::{Attribute, PlanModifier, Schema, SchemaError, Validator};

/// Cluster description as returned and accepted by the clusters API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_data_risks_and_force_replica_set_reconfig: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bi_connector: Option<BiConnector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_server_management_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_strings: Option<ConnectionStrings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_at_rest_provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_cluster_self_managed_sharding: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<ComponentLabel>>,
    #[serde(rename = "mongoDBMajorVersion", skip_serializing_if = "Option::is_none")]
    pub mongo_db_major_version: Option<String>,
    #[serde(rename = "mongoDBVersion", skip_serializing_if = "Option::is_none")]
    pub mongo_db_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paused: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pit_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redact_client_log_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_set_scaling_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replication_specs: Option<Vec<ReplicationSpec>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_cert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<ResourceTag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_protection_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_release_system: Option<String>,
}

impl ApiRecord for ClusterDescription {
    const KIND: ResourceKind = ResourceKind::AdvancedCluster;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiConnector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_preference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStrings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_srv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_srv: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentLabel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Tag; both halves are mandatory in requests
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceTag {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_configs: Option<Vec<CloudRegionConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudRegionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_auto_scaling: Option<AutoScalingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_specs: Option<HardwareSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling: Option<AutoScalingSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backing_provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub electable_specs: Option<HardwareSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_specs: Option<HardwareSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_name: Option<String>,
}

/// Electable, read-only and analytics node specs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareSpec {
    #[serde(rename = "diskIOPS", skip_serializing_if = "Option::is_none")]
    pub disk_iops: Option<i32>,
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_volume_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AutoScalingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compute: Option<ComputeAutoScaling>,
    #[serde(rename = "diskGB", skip_serializing_if = "Option::is_none")]
    pub disk_gb: Option<DiskGbAutoScaling>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeAutoScaling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_instance_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_instance_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DiskGbAutoScaling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

fn hardware_spec_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .attribute(
            Attribute::int64("disk_iops")
                .api_name("diskIOPS")
                .description("Target IOPS for provisioned storage."),
        )
        .attribute(
            Attribute::float64("disk_size_gb")
                .api_name("diskSizeGB")
                .description("Storage capacity of instance data volumes in gigabytes."),
        )
        .attribute(Attribute::string("ebs_volume_type").description("Type of storage volume."))
        .attribute(Attribute::string("instance_size").description("Hardware tier of the nodes."))
        .attribute(Attribute::int64("node_count").description("Number of nodes of this type."))
        .build()
}

fn auto_scaling_schema() -> Result<Schema, SchemaError> {
    let compute = Schema::builder()
        .attribute(Attribute::bool("enabled"))
        .attribute(Attribute::string("max_instance_size"))
        .attribute(Attribute::string("min_instance_size"))
        .attribute(Attribute::bool("scale_down_enabled"))
        .build()?;
    let disk_gb = Schema::builder()
        .attribute(Attribute::bool("enabled"))
        .build()?;

    Schema::builder()
        .attribute(
            Attribute::single_nested("compute", compute)
                .description("Compute capacity auto scaling options."),
        )
        .attribute(
            Attribute::single_nested("disk_gb", disk_gb)
                .api_name("diskGB")
                .description("Disk storage auto scaling options."),
        )
        .build()
}

fn region_config_schema() -> Result<Schema, SchemaError> {
    let specs = hardware_spec_schema()?;
    let scaling = auto_scaling_schema()?;

    Schema::builder()
        .attribute(Attribute::single_nested("analytics_auto_scaling", scaling.clone()))
        .attribute(Attribute::single_nested("analytics_specs", specs.clone()))
        .attribute(Attribute::single_nested("auto_scaling", scaling))
        .attribute(Attribute::string("backing_provider_name"))
        .attribute(Attribute::single_nested("electable_specs", specs.clone()))
        .attribute(
            Attribute::int64("priority")
                .required()
                .description("Precedence of the region for primary elections."),
        )
        .attribute(Attribute::string("provider_name").required())
        .attribute(Attribute::single_nested("read_only_specs", specs))
        .attribute(Attribute::string("region_name").required())
        .build()
}

fn key_value_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .attribute(Attribute::string("key").required())
        .attribute(Attribute::string("value").required())
        .build()
}

pub(crate) fn schema() -> Result<Schema, SchemaError> {
    let bi_connector = Schema::builder()
        .attribute(Attribute::bool("enabled"))
        .attribute(Attribute::string("read_preference"))
        .build()?;

    let connection_strings = Schema::builder()
        .attribute(Attribute::string("private").computed())
        .attribute(Attribute::string("private_srv").computed())
        .attribute(Attribute::string("standard").computed())
        .attribute(Attribute::string("standard_srv").computed())
        .build()?;

    let replication_spec = Schema::builder()
        .attribute(Attribute::string("id").computed())
        .attribute(Attribute::list_nested("region_configs", region_config_schema()?).required())
        .attribute(Attribute::string("zone_id").computed())
        .attribute(Attribute::string("zone_name"))
        .build()?;

    Schema::builder()
        .description("Advanced cluster with per-region hardware and auto scaling settings.")
        .attribute(Attribute::timestamp("accept_data_risks_and_force_replica_set_reconfig"))
        .attribute(Attribute::bool("backup_enabled"))
        .attribute(Attribute::single_nested("bi_connector", bi_connector))
        .attribute(
            Attribute::string("cluster_type")
                .required()
                .validator(Validator::one_of(["REPLICASET", "SHARDED", "GEOSHARDED"])),
        )
        .attribute(Attribute::string("config_server_management_mode"))
        .attribute(Attribute::single_nested("connection_strings", connection_strings).computed())
        .attribute(Attribute::timestamp("create_date").computed())
        .attribute(Attribute::string("encryption_at_rest_provider"))
        .attribute(Attribute::bool("global_cluster_self_managed_sharding"))
        .attribute(
            Attribute::string("id")
                .computed()
                .plan_modifier(PlanModifier::UseStateForUnknown),
        )
        .attribute(Attribute::list_nested("labels", key_value_schema()?))
        .attribute(Attribute::string("mongo_db_major_version").api_name("mongoDBMajorVersion"))
        .attribute(
            Attribute::string("mongo_db_version")
                .api_name("mongoDBVersion")
                .computed(),
        )
        .attribute(
            Attribute::string("name")
                .required()
                .description("Human-readable label that identifies the cluster."),
        )
        .attribute(Attribute::bool("paused"))
        .attribute(Attribute::bool("pit_enabled"))
        .attribute(
            Attribute::string("project_id")
                .required()
                .api_name("groupId")
                .description(PROJECT_ID_DESCRIPTION),
        )
        .attribute(Attribute::bool("redact_client_log_data"))
        .attribute(Attribute::string("replica_set_scaling_strategy"))
        .attribute(Attribute::list_nested("replication_specs", replication_spec).required())
        .attribute(Attribute::string("root_cert_type"))
        .attribute(Attribute::string("state_name").computed())
        .attribute(Attribute::list_nested("tags", key_value_schema()?))
        .attribute(Attribute::bool("termination_protection_enabled"))
        .attribute(Attribute::string("version_release_system"))
        .build()
}
