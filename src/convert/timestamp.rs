// Copyright (c) 2025 - Cowboy AI, Inc.
//! Timestamp normalization
//!
//! Models hold timestamps as strings in one fixed layout (by default
//! `YYYY-MM-DDTHH:MM:SSZ`, UTC, whole seconds). API records carry RFC 3339.
//! Decode normalizes into the model layout; encode inverts it.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};
use std::fmt::Write;

use crate::errors::ConversionError;

/// Parse a timestamp given either as RFC 3339 or in the model layout
pub fn parse(value: &str, format: &str) -> Result<DateTime<Utc>, ConversionError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, format)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| ConversionError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// Render in the model layout, dropping sub-second precision
pub fn format(dt: &DateTime<Utc>, format: &str) -> Result<String, ConversionError> {
    let mut out = String::new();
    write!(out, "{}", dt.trunc_subsecs(0).format(format)).map_err(|_| {
        ConversionError::InvalidTimestamp {
            value: dt.to_rfc3339(),
            reason: format!("unusable timestamp format {:?}", format),
        }
    })?;
    Ok(out)
}

/// API value → model string
pub fn normalize(value: &str, layout: &str) -> Result<String, ConversionError> {
    format(&parse(value, layout)?, layout)
}

/// Model string → API value (RFC 3339, UTC, whole seconds)
pub fn to_api(value: &str, layout: &str) -> Result<String, ConversionError> {
    Ok(parse(value, layout)?
        .trunc_subsecs(0)
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}
