// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Decode/Encode
//!
//! Models are generated from the schemas themselves, so every kind in the
//! catalog is covered without per-resource strategies.

use chrono::{DateTime, TimeZone, Utc};
use cim_tfmodel::config::DEFAULT_TIMESTAMP_FORMAT;
use cim_tfmodel::resources::advanced_cluster::{ClusterDescription, ResourceTag};
use cim_tfmodel::resources::encode_record_with;
use cim_tfmodel::resources::process_args::ProcessArgs;
use cim_tfmodel::resources::resource_policy::{Policy, ResourcePolicy, UserMetadata};
use cim_tfmodel::schema::{AttributeType, ScalarType};
use cim_tfmodel::{
    decode_record, describe, AttrValue, Attribute, ConfigModel, Data, Mapper, MapperConfig,
    ObjectValue, ResourceKind, Schema, Value,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Seconds from the epoch up to 2100-01-01
fn epoch_seconds() -> impl Strategy<Value = i64> {
    0i64..4_102_444_800
}

fn datetime() -> impl Strategy<Value = DateTime<Utc>> {
    epoch_seconds().prop_map(|secs| Utc.timestamp_opt(secs, 0).unwrap())
}

/// Compact JSON object whose keys keep generation order, not sorted order
fn json_document() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-z]{1,8}", any::<i32>()), 0..5).prop_map(|entries| {
        let mut object = serde_json::Map::new();
        for (key, value) in entries {
            object.entry(key).or_insert(serde_json::Value::from(value));
        }
        serde_json::Value::Object(object).to_string()
    })
}

/// Known data for a scalar, in the form decode would produce it
fn scalar_data(scalar: ScalarType) -> BoxedStrategy<Data> {
    match scalar {
        ScalarType::String => "[a-zA-Z0-9_ -]{0,16}".prop_map(Data::String).boxed(),
        ScalarType::Bool => any::<bool>().prop_map(Data::Bool).boxed(),
        ScalarType::Int64 => any::<i64>().prop_map(Data::Int64).boxed(),
        ScalarType::Float64 => (-1e9f64..1e9).prop_map(Data::Float64).boxed(),
        ScalarType::Timestamp => datetime()
            .prop_map(|dt| Data::String(dt.format(DEFAULT_TIMESTAMP_FORMAT).to_string()))
            .boxed(),
        ScalarType::Json => json_document().prop_map(Data::String).boxed(),
    }
}

/// Null or Known value of one attribute; path parameters stay Null
fn attr_value(attr: &'static Attribute) -> BoxedStrategy<AttrValue> {
    if attr.external_name().is_none() {
        return Just(Value::Null).boxed();
    }

    let known = match attr.attr_type() {
        AttributeType::Scalar(scalar) => scalar_data(*scalar),
        AttributeType::List(scalar) => prop::collection::vec(
            prop_oneof![
                1 => Just(Value::Null),
                4 => scalar_data(*scalar).prop_map(Value::Known),
            ],
            0..4,
        )
        .prop_map(Data::List)
        .boxed(),
        AttributeType::SingleNested(nested) => {
            object_value(nested).prop_map(Data::Object).boxed()
        }
        AttributeType::ListNested(nested) => {
            prop::collection::vec(object_value(nested).prop_map(AttrValue::object), 0..3)
                .prop_map(Data::List)
                .boxed()
        }
    };

    prop_oneof![
        1 => Just(Value::Null),
        3 => known.prop_map(Value::Known),
    ]
    .boxed()
}

/// Object with every attribute of the schema present
fn object_value(schema: &'static Schema) -> BoxedStrategy<ObjectValue> {
    schema
        .attributes()
        .iter()
        .fold(Just(ObjectValue::new()).boxed(), |acc, attr| {
            (acc, attr_value(attr))
                .prop_map(move |(object, value)| object.with(attr.name(), value))
                .boxed()
        })
}

fn kind_and_model() -> impl Strategy<Value = (ResourceKind, ConfigModel)> {
    prop::sample::select(ResourceKind::ALL.to_vec())
        .prop_flat_map(|kind| (Just(kind), object_value(describe(kind))))
}

fn user_metadata() -> impl Strategy<Value = UserMetadata> {
    (
        proptest::option::of("[a-f0-9]{24}"),
        proptest::option::of("[a-z]{1,8}@example\\.com"),
    )
        .prop_map(|(id, name)| UserMetadata { id, name })
}

fn resource_policy() -> impl Strategy<Value = ResourcePolicy> {
    let policy = (proptest::option::of(".{0,32}"), proptest::option::of("[a-f0-9]{24}"))
        .prop_map(|(body, id)| Policy { body, id });

    (
        proptest::option::of(user_metadata()),
        proptest::option::of(datetime()),
        proptest::option::of("[a-f0-9]{24}"),
        proptest::option::of(user_metadata()),
        proptest::option::of(datetime()),
        proptest::option::of("[a-z-]{1,16}"),
        proptest::option::of("[a-f0-9]{24}"),
        proptest::option::of(prop::collection::vec(policy, 0..4)),
        proptest::option::of("v[0-9]"),
    )
        .prop_map(
            |(
                created_by_user,
                created_date,
                id,
                last_updated_by_user,
                last_updated_date,
                name,
                org_id,
                policies,
                version,
            )| ResourcePolicy {
                created_by_user,
                created_date,
                id,
                last_updated_by_user,
                last_updated_date,
                name,
                org_id,
                policies,
                version,
            },
        )
}

fn with_computed() -> Mapper {
    Mapper::new(MapperConfig::default().with_include_computed(true))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: decode(encode(model)) == model for every kind
    ///
    /// With computed attributes included, nothing but path parameters is
    /// left out of the body, and those are generated Null.
    #[test]
    fn prop_model_round_trip((kind, model) in kind_and_model()) {
        let mapper = with_computed();
        let schema = describe(kind);

        let (body, diags) = mapper.encode(schema, &model);
        prop_assert!(diags.is_empty(), "encode {}: {}", kind, diags);

        let (decoded, diags) = mapper.decode(schema, Some(&body));
        prop_assert!(diags.is_empty(), "decode {}: {}", kind, diags);
        prop_assert_eq!(decoded, Some(model));
    }

    /// Property: Json documents reach the wire with their key order intact
    #[test]
    fn prop_json_key_order_preserved(document in json_document()) {
        let schema = describe(ResourceKind::StreamProcessor);
        let model = ConfigModel::new()
            .with("processor_name", AttrValue::string("p"))
            .with("pipeline", AttrValue::string(document.clone()));

        let (body, diags) = Mapper::default().encode(schema, &model);
        prop_assert!(diags.is_empty(), "{}", diags);
        prop_assert_eq!(body["pipeline"].to_string(), document);
    }

    /// Property: typed records survive decode then encode unchanged
    #[test]
    fn prop_resource_policy_record_round_trip(record in resource_policy()) {
        let (model, diags) = decode_record(Some(&record));
        prop_assert!(diags.is_empty());

        let (request, diags) =
            encode_record_with::<ResourcePolicy>(&with_computed(), &model.unwrap());
        prop_assert!(diags.is_empty());
        prop_assert_eq!(request, Some(record));
    }

    /// Property: list order is kept in both directions
    #[test]
    fn prop_tag_order_preserved(
        tags in prop::collection::vec(("[a-z]{1,8}", "[a-z0-9]{0,8}"), 0..8)
    ) {
        let record = ClusterDescription {
            tags: Some(
                tags.iter()
                    .map(|(key, value)| ResourceTag { key: key.clone(), value: value.clone() })
                    .collect(),
            ),
            ..Default::default()
        };

        let (model, _) = decode_record(Some(&record));
        let model = model.unwrap();
        let decoded: Vec<(String, String)> = model
            .value("tags")
            .as_list()
            .unwrap()
            .iter()
            .filter_map(|tag| tag.as_object())
            .map(|tag| {
                (
                    tag.value("key").as_str().unwrap_or_default().to_string(),
                    tag.value("value").as_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        prop_assert_eq!(&decoded, &tags);

        let (request, _) = encode_record_with::<ClusterDescription>(&Mapper::default(), &model);
        prop_assert_eq!(request.and_then(|r| r.tags), record.tags);
    }

    /// Property: a field is Null in the model exactly when it is absent
    #[test]
    fn prop_absent_fields_decode_to_null(
        chunk_migration_concurrency in proptest::option::of(any::<i32>()),
        default_max_time_ms in proptest::option::of(any::<i32>()),
        default_write_concern in proptest::option::of("[a-z0-9]{1,8}"),
        javascript_enabled in proptest::option::of(any::<bool>()),
        oplog_size_mb in proptest::option::of(any::<i32>())
    ) {
        let record = ProcessArgs {
            chunk_migration_concurrency,
            default_max_time_ms,
            default_write_concern: default_write_concern.clone(),
            javascript_enabled,
            oplog_size_mb,
            ..Default::default()
        };

        let (model, diags) = decode_record(Some(&record));
        prop_assert!(diags.is_empty());
        let model = model.unwrap();

        prop_assert_eq!(
            model.value("chunk_migration_concurrency").as_i64(),
            chunk_migration_concurrency.map(i64::from)
        );
        prop_assert_eq!(
            model.value("default_max_time_ms").as_i64(),
            default_max_time_ms.map(i64::from)
        );
        prop_assert_eq!(
            model.value("default_write_concern").as_str(),
            default_write_concern.as_deref()
        );
        prop_assert_eq!(model.value("javascript_enabled").as_bool(), javascript_enabled);
        prop_assert_eq!(model.value("oplog_size_mb").is_null(), oplog_size_mb.is_none());
        prop_assert!(model.value("query_stats_log_verbosity").is_null());
        prop_assert!(!model.contains_unknown());
    }

    /// Property: Unknown encodes like Null plus exactly one warning
    #[test]
    fn prop_unknown_substitution(
        (kind, model) in kind_and_model(),
        pick in any::<prop::sample::Index>()
    ) {
        let mapper = with_computed();
        let schema = describe(kind);
        let settable: Vec<&Attribute> = schema
            .attributes()
            .iter()
            .filter(|attr| attr.external_name().is_some())
            .collect();
        let attr = settable[pick.index(settable.len())];

        let mut null_model = model.clone();
        null_model.insert(attr.name(), Value::Null);
        let mut unknown_model = model;
        unknown_model.insert(attr.name(), Value::Unknown);

        let (null_body, null_diags) = mapper.encode(schema, &null_model);
        let (unknown_body, unknown_diags) = mapper.encode(schema, &unknown_model);

        prop_assert_eq!(unknown_body, null_body);
        prop_assert!(null_diags.is_empty());
        prop_assert_eq!(unknown_diags.warning_count(), 1);
        prop_assert_eq!(unknown_diags.error_count(), 0);
        prop_assert_eq!(
            unknown_diags.warnings().next().map(|d| d.path.to_string()),
            Some(attr.name().to_string())
        );
    }
}
