// Copyright (c) 2025 - Cowboy AI, Inc.
//! Stream processor
//!
//! `pipeline` and `stats` are arbitrary JSON in the API and compact JSON
//! strings in the model. The instance and project are path parameters.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::{ApiRecord, ResourceKind, PROJECT_ID_DESCRIPTION};
use crate::schema::{Attribute, PlanModifier, Schema, SchemaError, Validator};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamProcessor {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<StreamsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonValue>,
}

impl ApiRecord for StreamProcessor {
    const KIND: ResourceKind = ResourceKind::StreamProcessor;
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StreamsOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dlq: Option<DeadLetterQueue>,
}

/// Dead letter queue target
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadLetterQueue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coll: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
}

pub(crate) fn schema() -> Result<Schema, SchemaError> {
    let dlq = Schema::builder()
        .attribute(
            Attribute::string("coll")
                .required()
                .description("Name of the collection that will be used for the DLQ."),
        )
        .attribute(
            Attribute::string("connection_name")
                .required()
                .description("Connection name that will be used to write DLQ messages to."),
        )
        .attribute(
            Attribute::string("db")
                .required()
                .description("Name of the database that will be used for the DLQ."),
        )
        .build()?;

    let options = Schema::builder()
        .attribute(
            Attribute::single_nested("dlq", dlq)
                .required()
                .description("Dead letter queue for the stream processor."),
        )
        .build()?;

    Schema::builder()
        .description("Stream processor of a stream instance.")
        .attribute(
            Attribute::string("id")
                .api_name("_id")
                .computed()
                .plan_modifier(PlanModifier::UseStateForUnknown)
                .description("Unique 24-hexadecimal character string that identifies the stream processor."),
        )
        .attribute(
            Attribute::string("instance_name")
                .required()
                .path_parameter()
                .description("Human-readable label that identifies the stream instance."),
        )
        .attribute(
            Attribute::single_nested("options", options)
                .optional()
                .description("Optional configuration for the stream processor."),
        )
        .attribute(
            Attribute::json("pipeline")
                .required()
                .validator(Validator::StringIsJson)
                .plan_modifier(PlanModifier::DiffSuppressJson)
                .description("Stream aggregation pipeline you want to apply to your streaming data."),
        )
        .attribute(
            Attribute::string("processor_name")
                .required()
                .api_name("name")
                .description("Human-readable name of the stream processor."),
        )
        .attribute(
            Attribute::string("project_id")
                .required()
                .path_parameter()
                .description(PROJECT_ID_DESCRIPTION),
        )
        .attribute(
            Attribute::string("state")
                .validator(Validator::one_of(["CREATED", "STARTED", "STOPPED", "FAILED"]))
                .description("The state of the stream processor."),
        )
        .attribute(
            Attribute::json("stats")
                .computed()
                .description("The stats associated with the stream processor."),
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{decode_record, encode_record};
    use serde_json::json;

    #[test]
    fn test_pipeline_is_compact_json_in_model() {
        let record = StreamProcessor {
            name: Some("proc".to_string()),
            pipeline: Some(json!([{"$source": {"connectionName": "sample_stream_solar"}}])),
            stats: Some(json!({"inputMessageCount": 12})),
            ..Default::default()
        };
        let (model, diags) = decode_record(Some(&record));
        assert!(diags.is_empty());
        let model = model.unwrap();
        assert_eq!(model.value("processor_name").as_str(), Some("proc"));
        assert_eq!(
            model.value("pipeline").as_str(),
            Some(r#"[{"$source":{"connectionName":"sample_stream_solar"}}]"#)
        );
        assert_eq!(model.value("stats").as_str(), Some(r#"{"inputMessageCount":12}"#));
        assert!(model.value("instance_name").is_null());
    }

    #[test]
    fn test_request_leaves_out_stats_and_path_parameters() {
        let record = StreamProcessor {
            id: Some("65e0a2f1a1b2c3d4e5f60718".to_string()),
            name: Some("proc".to_string()),
            pipeline: Some(json!([])),
            stats: Some(json!({})),
            ..Default::default()
        };
        let (model, _) = decode_record(Some(&record));
        let model = model
            .unwrap()
            .with("project_id", crate::value::AttrValue::string("p1"));
        let (request, diags) = encode_record::<StreamProcessor>(&model);
        assert!(diags.is_empty());
        let request = request.unwrap();
        assert_eq!(request.name.as_deref(), Some("proc"));
        assert_eq!(request.pipeline, Some(json!([])));
        assert_eq!(request.stats, None);
        assert_eq!(request.id, None);
    }
}
