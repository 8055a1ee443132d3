// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for cim-tfmodel
//!
//! Deterministic API records for decode and encode tests. All identifiers
//! and timestamps are fixed constants so expected models can be written out
//! literally.
//!
//! Fixtures use whole-second timestamps, so a record survives a
//! decode/encode round trip unchanged.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde_json::json;

use cim_tfmodel::resources::advanced_cluster::{
    AutoScalingSettings, BiConnector, CloudRegionConfig, ClusterDescription, ComponentLabel,
    ComputeAutoScaling, ConnectionStrings, DiskGbAutoScaling, HardwareSpec, ReplicationSpec,
    ResourceTag,
};
use cim_tfmodel::resources::process_args::ProcessArgs;
use cim_tfmodel::resources::resource_policy::{Policy, ResourcePolicy, UserMetadata};
use cim_tfmodel::resources::stream_processor::{DeadLetterQueue, StreamProcessor, StreamsOptions};

// Fixed identifiers (24 hex digits, like the API's object ids)
pub const PROJECT_ID: &str = "664619d870c247237f4b86a6";
pub const ORG_ID: &str = "65def6ce0f722a1507105aa5";
pub const CLUSTER_ID: &str = "66b5a5e0b4f1a0473f2a9c11";
pub const POLICY_ID: &str = "66b5a5e0b4f1a0473f2a9c22";
pub const POLICY_ELEMENT_ID: &str = "66b5a5e0b4f1a0473f2a9c23";
pub const USER_ID: &str = "66b5a5e0b4f1a0473f2a9c33";
pub const PROCESSOR_ID: &str = "66b5a5e0b4f1a0473f2a9c44";

// Fixed timestamp, in the normalized model layout
pub const FIXED_TIMESTAMP: &str = "2024-08-05T10:30:15Z";

pub const FORBID_AWS_POLICY: &str =
    r#"forbid (principal, action == cloud::Action::"cluster.createEdit", resource) when { context.cluster.cloudProviders.containsAny([cloud::cloudProvider::"aws"]) };"#;

/// Parse the fixed timestamp
pub fn fixed_timestamp() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(FIXED_TIMESTAMP)
        .expect("Invalid timestamp in test fixture")
        .with_timezone(&Utc)
}

pub fn hardware_spec(instance_size: &str, node_count: i32) -> HardwareSpec {
    HardwareSpec {
        disk_iops: Some(3000),
        disk_size_gb: Some(10.0),
        ebs_volume_type: Some("STANDARD".to_string()),
        instance_size: Some(instance_size.to_string()),
        node_count: Some(node_count),
    }
}

pub fn auto_scaling() -> AutoScalingSettings {
    AutoScalingSettings {
        compute: Some(ComputeAutoScaling {
            enabled: Some(true),
            max_instance_size: Some("M40".to_string()),
            min_instance_size: Some("M10".to_string()),
            scale_down_enabled: Some(true),
        }),
        disk_gb: Some(DiskGbAutoScaling { enabled: Some(true) }),
    }
}

pub fn region_config(provider: &str, region: &str, priority: i32) -> CloudRegionConfig {
    CloudRegionConfig {
        auto_scaling: Some(auto_scaling()),
        electable_specs: Some(hardware_spec("M10", 3)),
        priority: Some(priority),
        provider_name: Some(provider.to_string()),
        read_only_specs: Some(hardware_spec("M10", 0)),
        region_name: Some(region.to_string()),
        ..Default::default()
    }
}

pub fn tag(key: &str, value: &str) -> ResourceTag {
    ResourceTag {
        key: key.to_string(),
        value: value.to_string(),
    }
}

/// Two-region replica set as the API returns it
pub fn cluster_fixture() -> ClusterDescription {
    ClusterDescription {
        backup_enabled: Some(true),
        bi_connector: Some(BiConnector {
            enabled: Some(false),
            read_preference: Some("secondary".to_string()),
        }),
        cluster_type: Some("REPLICASET".to_string()),
        connection_strings: Some(ConnectionStrings {
            standard: Some("mongodb://cluster0-shard-00-00.example.mongodb.net:27017".to_string()),
            standard_srv: Some("mongodb+srv://cluster0.example.mongodb.net".to_string()),
            ..Default::default()
        }),
        create_date: Some(fixed_timestamp()),
        group_id: Some(PROJECT_ID.to_string()),
        id: Some(CLUSTER_ID.to_string()),
        labels: Some(vec![ComponentLabel {
            key: Some("Infrastructure Tool".to_string()),
            value: Some("terraform".to_string()),
        }]),
        mongo_db_major_version: Some("8.0".to_string()),
        mongo_db_version: Some("8.0.3".to_string()),
        name: Some("Cluster0".to_string()),
        paused: Some(false),
        pit_enabled: Some(false),
        replication_specs: Some(vec![ReplicationSpec {
            id: Some("66b5a5e0b4f1a0473f2a9c55".to_string()),
            region_configs: Some(vec![
                region_config("AWS", "US_EAST_1", 7),
                region_config("AWS", "EU_WEST_1", 6),
            ]),
            zone_id: Some("66b5a5e0b4f1a0473f2a9c66".to_string()),
            zone_name: Some("Zone 1".to_string()),
        }]),
        root_cert_type: Some("ISRGROOTX1".to_string()),
        state_name: Some("IDLE".to_string()),
        tags: Some(vec![tag("env", "dev"), tag("team", "data"), tag("cost", "low")]),
        termination_protection_enabled: Some(false),
        version_release_system: Some("LTS".to_string()),
        ..Default::default()
    }
}

pub fn process_args_fixture() -> ProcessArgs {
    ProcessArgs {
        change_stream_options_pre_and_post_images_expire_after_seconds: Some(-1),
        default_write_concern: Some("majority".to_string()),
        javascript_enabled: Some(true),
        minimum_enabled_tls_protocol: Some("TLS1_2".to_string()),
        no_table_scan: Some(false),
        oplog_min_retention_hours: Some(24.0),
        transaction_lifetime_limit_seconds: Some(60),
        ..Default::default()
    }
}

pub fn resource_policy_fixture() -> ResourcePolicy {
    ResourcePolicy {
        created_by_user: Some(UserMetadata {
            id: Some(USER_ID.to_string()),
            name: Some("alice@example.com".to_string()),
        }),
        created_date: Some(fixed_timestamp()),
        id: Some(POLICY_ID.to_string()),
        last_updated_by_user: None,
        last_updated_date: Some(fixed_timestamp()),
        name: Some("forbid-aws".to_string()),
        org_id: Some(ORG_ID.to_string()),
        policies: Some(vec![Policy {
            body: Some(FORBID_AWS_POLICY.to_string()),
            id: Some(POLICY_ELEMENT_ID.to_string()),
        }]),
        version: Some("v1".to_string()),
    }
}

pub fn stream_processor_fixture() -> StreamProcessor {
    StreamProcessor {
        id: Some(PROCESSOR_ID.to_string()),
        name: Some("solar-processor".to_string()),
        options: Some(StreamsOptions {
            dlq: Some(DeadLetterQueue {
                coll: Some("dlq".to_string()),
                connection_name: Some("ClusterConnection".to_string()),
                db: Some("streams".to_string()),
            }),
        }),
        pipeline: Some(json!([
            {"$source": {"connectionName": "sample_stream_solar"}},
            {"$emit": {"connectionName": "__testLog"}}
        ])),
        state: Some("CREATED".to_string()),
        stats: None,
    }
}
