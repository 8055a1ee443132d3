// Copyright (c) 2025 - Cowboy AI, Inc.
//! Push-based log export configuration of a project

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiRecord, ResourceKind, PROJECT_ID_DESCRIPTION};
use crate::schema::{Attribute, Schema, SchemaError};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushBasedLogExport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

impl ApiRecord for PushBasedLogExport {
    const KIND: ResourceKind = ResourceKind::PushBasedLogExport;
}

pub(crate) fn schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .description("Export of project logs to an S3 bucket.")
        .attribute(
            Attribute::string("bucket_name")
                .description("The name of the bucket to which the agent will send the logs to."),
        )
        .attribute(
            Attribute::timestamp("create_date")
                .computed()
                .description("Date and time that this feature was enabled on."),
        )
        .attribute(
            Attribute::string("group_id")
                .required()
                .path_parameter()
                .description(PROJECT_ID_DESCRIPTION),
        )
        .attribute(
            Attribute::string("iam_role_id")
                .description("ID of the AWS IAM role that will be used to write to the S3 bucket."),
        )
        .attribute(
            Attribute::string("prefix_path")
                .description("S3 directory in which vector will write to in order to store the logs. An empty string denotes the root directory."),
        )
        .attribute(
            Attribute::string("state")
                .computed()
                .description("Describes whether or not the feature is enabled and what status it is in."),
        )
        .build()
}
