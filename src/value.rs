// Copyright (c) 2025 - Cowboy AI, Inc.
//! Tri-State Attribute Values
//!
//! Every attribute of a configuration model is in exactly one of three
//! states:
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────────┐
//! │   Null   │   │ Unknown  │   │ Known(value) │
//! └──────────┘   └──────────┘   └──────────────┘
//!  explicitly     not resolved    resolved
//!  absent         until apply
//! ```
//!
//! [`Value<T>`] is the generic wrapper. [`AttrValue`] is the untyped form
//! used by the schema-driven walkers: its known payload is a [`Data`], which
//! is either a scalar or a container of further `AttrValue`s.
//!
//! Unknown is produced only by the planning engine. Nothing in this crate
//! creates it; the encoder replaces it with an omitted field.

use serde_json::{Map, Number, Value as JsonValue};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// A tri-state value: null, unknown, or known
#[derive(Debug, Clone, PartialEq)]
pub enum Value<T> {
    /// Explicitly absent
    Null,
    /// Not resolved yet (planning phase only)
    Unknown,
    /// Resolved value
    Known(T),
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T> Value<T> {
    /// `Some` becomes Known, `None` becomes Null
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::Known(v),
            None => Value::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    /// Borrow the known payload; Null and Unknown both give `None`
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Take the known payload; Null and Unknown both give `None`
    pub fn into_option(self) -> Option<T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Value<&T> {
        match self {
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
            Value::Known(v) => Value::Known(v),
        }
    }

    /// Map the known payload, keeping Null and Unknown as they are
    pub fn map<U, F>(self, f: F) -> Value<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
            Value::Known(v) => Value::Known(f(v)),
        }
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        Value::from_option(value)
    }
}

/// Untyped attribute value walked by the schema-driven mappers
pub type AttrValue = Value<Data>;

/// Known payload of an [`AttrValue`]
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    String(String),
    Bool(bool),
    Int64(i64),
    Float64(f64),
    /// Ordered list; order is significant
    List(Vec<AttrValue>),
    /// Named attributes of a nested object
    Object(ObjectValue),
}

impl Data {
    /// Short kind name used in type mismatch messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Data::String(_) => "string",
            Data::Bool(_) => "bool",
            Data::Int64(_) => "int64",
            Data::Float64(_) => "float64",
            Data::List(_) => "list",
            Data::Object(_) => "object",
        }
    }
}

impl AttrValue {
    pub fn string(value: impl Into<String>) -> Self {
        Value::Known(Data::String(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Value::Known(Data::Bool(value))
    }

    pub fn int64(value: i64) -> Self {
        Value::Known(Data::Int64(value))
    }

    pub fn float64(value: f64) -> Self {
        Value::Known(Data::Float64(value))
    }

    pub fn list(items: Vec<AttrValue>) -> Self {
        Value::Known(Data::List(items))
    }

    pub fn object(object: ObjectValue) -> Self {
        Value::Known(Data::Object(object))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Known(Data::String(s)) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Known(Data::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Known(Data::Int64(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Known(Data::Float64(f)) => Some(*f),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            Value::Known(Data::List(items)) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Known(Data::Object(obj)) => Some(obj),
            _ => None,
        }
    }

    /// Render as plain JSON for display.
    ///
    /// Null and Unknown both render as `null`; decoded models never hold
    /// Unknown, so the rendering of those is lossless.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null | Value::Unknown => JsonValue::Null,
            Value::Known(Data::String(s)) => JsonValue::String(s.clone()),
            Value::Known(Data::Bool(b)) => JsonValue::Bool(*b),
            Value::Known(Data::Int64(i)) => JsonValue::Number((*i).into()),
            Value::Known(Data::Float64(f)) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Value::Known(Data::List(items)) => {
                JsonValue::Array(items.iter().map(AttrValue::to_json).collect())
            }
            Value::Known(Data::Object(obj)) => obj.to_json(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "<null>"),
            Value::Unknown => write!(f, "<unknown>"),
            Value::Known(_) => write!(f, "{}", self.to_json()),
        }
    }
}

/// Named attribute values of one object (a whole model or a nested object)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectValue {
    attributes: BTreeMap<String, AttrValue>,
}

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: AttrValue) -> Option<AttrValue> {
        self.attributes.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut AttrValue> {
        self.attributes.get_mut(name)
    }

    /// Value of an attribute; a missing attribute reads as Null
    pub fn value(&self, name: &str) -> &AttrValue {
        static NULL: AttrValue = Value::Null;
        self.attributes.get(name).unwrap_or(&NULL)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.attributes.iter()
    }

    /// True when any value in the tree is Unknown
    pub fn contains_unknown(&self) -> bool {
        fn value_has_unknown(value: &AttrValue) -> bool {
            match value {
                Value::Unknown => true,
                Value::Known(Data::List(items)) => items.iter().any(value_has_unknown),
                Value::Known(Data::Object(obj)) => obj.contains_unknown(),
                _ => false,
            }
        }
        self.attributes.values().any(value_has_unknown)
    }

    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = self
            .attributes
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        JsonValue::Object(map)
    }
}

impl<'a> IntoIterator for &'a ObjectValue {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl FromIterator<(String, AttrValue)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (String, AttrValue)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}
