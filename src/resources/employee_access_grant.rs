// Copyright (c) 2025 - Cowboy AI, Inc.
//! Employee access grant on a cluster

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiRecord, ResourceKind, PROJECT_ID_DESCRIPTION};
use crate::schema::{Attribute, Schema, SchemaError, Validator};

/// Access levels accepted by the API
pub const GRANT_TYPES: [&str; 3] = [
    "CLUSTER_DATABASE_LOGS",
    "CLUSTER_INFRASTRUCTURE",
    "CLUSTER_INFRASTRUCTURE_AND_APP_SERVICES_SYNC_DATA",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAccessGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_type: Option<String>,
}

impl ApiRecord for EmployeeAccessGrant {
    const KIND: ResourceKind = ResourceKind::EmployeeAccessGrant;
}

pub(crate) fn schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .description("Temporary access for support staff to one cluster.")
        .attribute(
            Attribute::string("cluster_name")
                .required()
                .path_parameter()
                .description("Human-readable label that identifies this cluster."),
        )
        .attribute(
            Attribute::timestamp("expiration")
                .required()
                .api_name("expirationTime")
                .description("Expiration date for the employee access grant."),
        )
        .attribute(
            Attribute::string("grant_type")
                .required()
                .validator(Validator::one_of(GRANT_TYPES))
                .description("Level of access to grant to MongoDB Employees."),
        )
        .attribute(
            Attribute::string("project_id")
                .required()
                .path_parameter()
                .description(PROJECT_ID_DESCRIPTION),
        )
        .build()
}
