// Copyright (c) 2025 - Cowboy AI, Inc.
//! Mapper configuration

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::convert::timestamp;
use crate::errors::{MapperError, MapperResult};

/// Normalized timestamp layout: UTC, second granularity
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Options for decode and encode passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Emit computed-only attributes when encoding (off for requests)
    pub include_computed: bool,

    /// Record a warning diagnostic for every Unknown value dropped by encode
    pub warn_on_unknown: bool,

    /// chrono format string for timestamps held in the model
    pub timestamp_format: String,
}

impl MapperConfig {
    /// Read configuration from `TFMODEL_*` environment variables
    pub fn from_env() -> MapperResult<Self> {
        let defaults = Self::default();

        let include_computed = env_flag("TFMODEL_INCLUDE_COMPUTED")?
            .unwrap_or(defaults.include_computed);
        let warn_on_unknown =
            env_flag("TFMODEL_WARN_ON_UNKNOWN")?.unwrap_or(defaults.warn_on_unknown);
        let timestamp_format = std::env::var("TFMODEL_TIMESTAMP_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.timestamp_format);

        let config = Self {
            include_computed,
            warn_on_unknown,
            timestamp_format,
        };
        config.check()?;
        Ok(config)
    }

    /// Reject a timestamp layout that cannot read back what it writes
    ///
    /// Decode formats with the layout and encode parses with it, so a layout
    /// missing the date or time fields would fail every later encode.
    pub fn check(&self) -> MapperResult<()> {
        let layout = &self.timestamp_format;
        let unusable = |reason: String| {
            MapperError::Configuration(format!(
                "TFMODEL_TIMESTAMP_FORMAT {:?} is not reversible: {}",
                layout, reason
            ))
        };

        let sample = Utc
            .with_ymd_and_hms(2024, 8, 5, 10, 30, 15)
            .single()
            .ok_or_else(|| unusable("sample instant is ambiguous".to_string()))?;
        let written = timestamp::format(&sample, layout).map_err(|e| unusable(e.to_string()))?;
        let read = timestamp::parse(&written, layout).map_err(|e| unusable(e.to_string()))?;
        let rewritten = timestamp::format(&read, layout).map_err(|e| unusable(e.to_string()))?;

        if rewritten == written {
            Ok(())
        } else {
            Err(unusable(format!("{:?} reads back as {:?}", written, rewritten)))
        }
    }

    pub fn with_include_computed(mut self, include: bool) -> Self {
        self.include_computed = include;
        self
    }

    pub fn with_warn_on_unknown(mut self, warn: bool) -> Self {
        self.warn_on_unknown = warn;
        self
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            include_computed: false,
            warn_on_unknown: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

fn env_flag(name: &str) -> MapperResult<Option<bool>> {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw)
            .map(Some)
            .ok_or_else(|| MapperError::Configuration(format!("{} must be a boolean, got {:?}", name, raw))),
        Err(_) => Ok(None),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
