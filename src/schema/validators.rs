// Copyright (c) 2025 - Cowboy AI, Inc.
//! String Attribute Validators
//!
//! Validators are pure checks over the known string payload of an attribute.
//! They run in the validation pass before a model is encoded into a request;
//! Null and Unknown values are never validated.

use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::SchemaError;

/// Check applied to a known string value
#[derive(Debug, Clone)]
pub enum Validator {
    /// Value parses as a JSON document
    StringIsJson,
    /// Character count within `min..=max`
    LengthBetween { min: usize, max: usize },
    /// Value matches a regular expression
    RegexMatches { regex: Regex, message: String },
    /// Value is one of a fixed set
    OneOf(Vec<String>),
}

impl Validator {
    /// Length validator
    ///
    /// # Invariants
    /// - `min <= max`
    pub fn length_between(min: usize, max: usize) -> Result<Self, SchemaError> {
        if min > max {
            return Err(SchemaError::InvalidLengthBounds { min, max });
        }
        Ok(Validator::LengthBetween { min, max })
    }

    /// Regex validator; `message` replaces the default failure text when non-empty
    pub fn regex_matches(pattern: &str, message: impl Into<String>) -> Result<Self, SchemaError> {
        let regex = Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Validator::RegexMatches {
            regex,
            message: message.into(),
        })
    }

    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Validator::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Run the check; the error is a human-readable reason
    pub fn check(&self, value: &str) -> Result<(), String> {
        match self {
            Validator::StringIsJson => serde_json::from_str::<serde_json::Value>(value)
                .map(|_| ())
                .map_err(|e| format!("value must be valid JSON: {}", e)),
            Validator::LengthBetween { min, max } => {
                let len = value.chars().count();
                if len < *min || len > *max {
                    Err(format!(
                        "string length must be between {} and {}, got: {}",
                        min, max, len
                    ))
                } else {
                    Ok(())
                }
            }
            Validator::RegexMatches { regex, message } => {
                if regex.is_match(value) {
                    Ok(())
                } else if message.is_empty() {
                    Err(format!(
                        "value must match regular expression '{}', got: {}",
                        regex.as_str(),
                        value
                    ))
                } else {
                    Err(message.clone())
                }
            }
            Validator::OneOf(allowed) => {
                if allowed.iter().any(|a| a == value) {
                    Ok(())
                } else {
                    Err(format!(
                        "value must be one of: {:?}, got: {:?}",
                        allowed, value
                    ))
                }
            }
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Validator::StringIsJson => write!(f, "string_is_json"),
            Validator::LengthBetween { min, max } => write!(f, "length_between({}, {})", min, max),
            Validator::RegexMatches { regex, .. } => write!(f, "regex_matches({})", regex.as_str()),
            Validator::OneOf(values) => write!(f, "one_of({})", values.join(", ")),
        }
    }
}

impl Serialize for Validator {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Plan-time behavior attached to an attribute.
///
/// Carried as descriptor metadata; the planning engine applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanModifier {
    /// Reuse the prior state value instead of marking the attribute unknown
    UseStateForUnknown,
    /// Treat semantically equal JSON documents as unchanged
    DiffSuppressJson,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_json() {
        let v = Validator::StringIsJson;
        assert!(v.check(r#"[{"$match": {}}]"#).is_ok());
        assert!(v.check("not json").is_err());
    }

    #[test]
    fn test_length_between() {
        let v = Validator::length_between(24, 24).unwrap();
        assert!(v.check("0123456789abcdef01234567").is_ok());
        assert!(v.check("short").is_err());
        assert!(Validator::length_between(5, 1).is_err());
    }

    #[test]
    fn test_regex_matches() {
        let v = Validator::regex_matches("^([a-f0-9]{24})$", "").unwrap();
        assert!(v.check("0123456789abcdef01234567").is_ok());
        let err = v.check("0123456789ABCDEF01234567").unwrap_err();
        assert!(err.contains("regular expression"));

        let v = Validator::regex_matches("^x$", "must be x").unwrap();
        assert_eq!(v.check("y").unwrap_err(), "must be x");
    }

    #[test]
    fn test_invalid_pattern_is_schema_error() {
        assert!(matches!(
            Validator::regex_matches("([", ""),
            Err(SchemaError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_one_of() {
        let v = Validator::one_of(["CLUSTER_DATABASE_LOGS", "CLUSTER_INFRASTRUCTURE"]);
        assert!(v.check("CLUSTER_DATABASE_LOGS").is_ok());
        assert!(v.check("EVERYTHING").is_err());
    }
}
