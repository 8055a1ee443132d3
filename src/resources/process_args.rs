// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster process arguments

use serde::{Deserialize, Serialize};

use super::{ApiRecord, ResourceKind, PROJECT_ID_DESCRIPTION};
use crate::schema::{Attribute, Schema, SchemaError, Validator};

/// Advanced `mongod` configuration of a cluster
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_stream_options_pre_and_post_images_expire_after_seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_migration_concurrency: Option<i32>,
    #[serde(rename = "defaultMaxTimeMS", skip_serializing_if = "Option::is_none")]
    pub default_max_time_ms: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_write_concern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_enabled_tls_protocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_table_scan: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oplog_min_retention_hours: Option<f64>,
    #[serde(rename = "oplogSizeMB", skip_serializing_if = "Option::is_none")]
    pub oplog_size_mb: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_stats_log_verbosity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_lifetime_limit_seconds: Option<i64>,
}

impl ApiRecord for ProcessArgs {
    const KIND: ResourceKind = ResourceKind::ClusterProcessArgs;
}

pub(crate) fn schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .description("Advanced configuration of the processes of one cluster.")
        .attribute(
            Attribute::int64("change_stream_options_pre_and_post_images_expire_after_seconds")
                .description("Lifetime of change stream pre- and post-images in seconds."),
        )
        .attribute(Attribute::string("cluster_name").required().path_parameter())
        .attribute(Attribute::int64("chunk_migration_concurrency"))
        .attribute(Attribute::int64("default_max_time_ms").api_name("defaultMaxTimeMS"))
        .attribute(Attribute::string("default_write_concern"))
        .attribute(Attribute::bool("javascript_enabled"))
        .attribute(
            Attribute::string("minimum_enabled_tls_protocol")
                .validator(Validator::one_of(["TLS1_0", "TLS1_1", "TLS1_2"])),
        )
        .attribute(Attribute::bool("no_table_scan"))
        .attribute(Attribute::float64("oplog_min_retention_hours"))
        .attribute(Attribute::int64("oplog_size_mb").api_name("oplogSizeMB"))
        .attribute(
            Attribute::string("project_id")
                .required()
                .path_parameter()
                .description(PROJECT_ID_DESCRIPTION),
        )
        .attribute(Attribute::int64("query_stats_log_verbosity"))
        .attribute(Attribute::int64("transaction_lifetime_limit_seconds"))
        .build()
}
