// Copyright (c) 2025 - Cowboy AI, Inc.
//! Resource policies
//!
//! One schema serves both the resource and the elements of the plural data
//! source. In the data source every attribute is computed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiRecord, ResourceKind};
use crate::schema::{Attribute, PlanModifier, Schema, SchemaError, Validator};

const ORG_ID_PATTERN: &str = "^([a-f0-9]{24})$";
const ORG_ID_DESCRIPTION: &str =
    "Unique 24-hexadecimal digit string that identifies the organization that contains your projects.";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by_user: Option<UserMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by_user: Option<UserMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<Policy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ApiRecord for ResourcePolicy {
    const KIND: ResourceKind = ResourceKind::ResourcePolicy;
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One Cedar policy
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Policy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Page of policies listed for an organization
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourcePolicies {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ResourcePolicy>>,
}

impl ApiRecord for ResourcePolicies {
    const KIND: ResourceKind = ResourceKind::ResourcePolicies;
}

fn org_id() -> Result<Attribute, SchemaError> {
    Ok(Attribute::string("org_id")
        .required()
        .validator(Validator::length_between(24, 24)?)
        .validator(Validator::regex_matches(ORG_ID_PATTERN, "")?)
        .description(ORG_ID_DESCRIPTION))
}

fn policy_schema(data_source: bool) -> Result<Schema, SchemaError> {
    let settable = |attr: Attribute| if data_source { attr.computed() } else { attr };

    let user = Schema::builder()
        .attribute(
            Attribute::string("id")
                .computed()
                .description("Unique 24-hexadecimal character string that identifies a user."),
        )
        .attribute(
            Attribute::string("name")
                .computed()
                .description("Human-readable label that describes a user."),
        )
        .build()?;

    let policy = Schema::builder()
        .attribute(settable(
            Attribute::string("body")
                .required()
                .description("A string that defines the permissions for the policy. The syntax used is the Cedar Policy language."),
        ))
        .attribute(
            Attribute::string("id")
                .computed()
                .description("Unique 24-hexadecimal character string that identifies the policy."),
        )
        .build()?;

    let org = if data_source {
        Attribute::string("org_id").computed().description(ORG_ID_DESCRIPTION)
    } else {
        org_id()?
    };

    Schema::builder()
        .description("Atlas resource policy.")
        .attribute(
            Attribute::single_nested("created_by_user", user.clone())
                .computed()
                .description("The user that created the atlas resource policy."),
        )
        .attribute(
            Attribute::timestamp("created_date")
                .computed()
                .description("Date and time in UTC when the atlas resource policy was created."),
        )
        .attribute(
            Attribute::string("id")
                .computed()
                .plan_modifier(PlanModifier::UseStateForUnknown)
                .description("Unique 24-hexadecimal character string that identifies the atlas resource policy."),
        )
        .attribute(
            Attribute::single_nested("last_updated_by_user", user)
                .computed()
                .description("The user that last updated the atlas resource policy."),
        )
        .attribute(
            Attribute::timestamp("last_updated_date")
                .computed()
                .description("Date and time in UTC when the atlas resource policy was last updated."),
        )
        .attribute(settable(
            Attribute::string("name")
                .required()
                .description("Human-readable label that describes the atlas resource policy."),
        ))
        .attribute(org)
        .attribute(settable(
            Attribute::list_nested("policies", policy)
                .required()
                .description("List of policies that make up the atlas resource policy."),
        ))
        .attribute(settable(
            Attribute::string("version")
                .description("A string that identifies the version of the atlas resource policy."),
        ))
        .build()
}

pub(crate) fn schema() -> Result<Schema, SchemaError> {
    policy_schema(false)
}

pub(crate) fn plural_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .description("Resource policies of one organization.")
        .attribute(org_id()?.path_parameter())
        .attribute(
            Attribute::list_nested("resource_policies", policy_schema(true)?)
                .api_name("results")
                .computed(),
        )
        .build()
}
