// Copyright (c) 2025 - Cowboy AI, Inc.
//! Diagnostics Collector
//!
//! A conversion pass never stops at the first bad field. Each failure is
//! recorded as a [`Diagnostic`] carrying the attribute path it belongs to,
//! and the walk carries on with the siblings. The caller inspects the
//! collected [`Diagnostics`] once the pass is over and decides whether to
//! abort the surrounding operation.
//!
//! Only [`Severity::Error`] entries count towards [`Diagnostics::has_error`].
//! Warnings are informational.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{ConversionError, MapperError, MapperResult};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One step of an attribute path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStep {
    Attribute(String),
    Index(usize),
}

/// Location of a value inside a model, e.g. `replication_specs[0].zone_name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributePath(Vec<PathStep>);

impl AttributePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a child attribute
    pub fn attribute(&self, name: impl Into<String>) -> Self {
        let mut steps = self.0.clone();
        steps.push(PathStep::Attribute(name.into()));
        Self(steps)
    }

    /// Path of a list element
    pub fn index(&self, index: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(PathStep::Index(index));
        Self(steps)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "<root>");
        }
        for (i, step) in self.0.iter().enumerate() {
            match step {
                PathStep::Attribute(name) if i == 0 => write!(f, "{}", name)?,
                PathStep::Attribute(name) => write!(f, ".{}", name)?,
                PathStep::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// A field-level error or warning
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: AttributePath,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(path: AttributePath, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            path,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn warning(
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            path,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// Error diagnostic for a failed field conversion
    pub fn conversion(path: AttributePath, err: &ConversionError) -> Self {
        let summary = match err {
            ConversionError::TypeMismatch { .. } => "Value conversion error",
            ConversionError::InvalidTimestamp { .. } => "Invalid timestamp",
            ConversionError::InvalidJson(_) => "Invalid JSON",
            ConversionError::IntegerOutOfRange(_) => "Integer out of range",
            ConversionError::NonFiniteFloat(_) => "Invalid float",
            ConversionError::UnexpectedAttribute(_) => "Unexpected attribute",
            ConversionError::RequestShape(_) => "Invalid request",
        };
        Self::error(path, summary, err.to_string())
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at {}: {}",
            self.severity, self.summary, self.path, self.detail
        )
    }
}

/// Accumulator of diagnostics for one conversion pass
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a diagnostic; an identical entry already present is not added twice
    pub fn append(&mut self, diagnostic: Diagnostic) {
        if !self.0.contains(&diagnostic) {
            self.0.push(diagnostic);
        }
    }

    /// Append every diagnostic of another collector
    pub fn extend(&mut self, other: Diagnostics) {
        for diagnostic in other.0 {
            self.append(diagnostic);
        }
    }

    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Turn into an error when any error diagnostic is present
    pub fn into_result(self) -> MapperResult<Diagnostics> {
        let first = self.errors().next().map(ToString::to_string);
        match first {
            Some(first) => Err(MapperError::Conversion {
                errors: self.error_count(),
                first,
            }),
            None => Ok(self),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diagnostic in &self.0 {
            writeln!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}
