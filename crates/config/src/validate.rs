//! Boot snapshot validation.
//!
//! Flags duplicate and missing identifiers so operators can see why an entry
//! is absent from discovery. Validation never fails a load; the live
//! subsystem tolerates a partially broken snapshot.

use std::collections::HashSet;

use crate::schema::BootSettings;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Category: "duplicate-id", "duplicate-name", "missing-field"
    pub category: &'static str,
    /// Dotted path, e.g. "datasources.ds-1.name"
    pub path: String,
    pub message: String,
}

/// Result of validating a boot snapshot.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    fn push(&mut self, severity: Severity, category: &'static str, path: String, message: String) {
        self.diagnostics.push(Diagnostic {
            severity,
            category,
            path,
            message,
        });
    }
}

/// Validate a boot snapshot, returning all diagnostics found.
#[must_use]
pub fn validate(settings: &BootSettings) -> ValidationResult {
    let mut result = ValidationResult::default();

    let mut ds_ids = HashSet::new();
    let mut ds_names = HashSet::new();
    for (i, ds) in settings.datasources.iter().enumerate() {
        if ds.id.is_empty() {
            result.push(
                Severity::Error,
                "missing-field",
                format!("datasources[{i}].id"),
                "datasource is missing an id".into(),
            );
        } else if !ds_ids.insert(ds.id.as_str()) {
            result.push(
                Severity::Error,
                "duplicate-id",
                format!("datasources[{i}].id"),
                format!("duplicate datasource id: {}", ds.id),
            );
        }
        if ds.name.is_empty() {
            result.push(
                Severity::Error,
                "missing-field",
                format!("datasources[{i}].name"),
                "datasource is missing a display name".into(),
            );
        } else if !ds_names.insert(ds.name.as_str()) {
            result.push(
                Severity::Warning,
                "duplicate-name",
                format!("datasources[{i}].name"),
                format!("duplicate datasource name: {}", ds.name),
            );
        }
        if ds.meta.live && ds.ty.is_empty() {
            result.push(
                Severity::Error,
                "missing-field",
                format!("datasources[{i}].type"),
                format!("live datasource {} has no type", ds.name),
            );
        }
    }

    let mut panel_ids = HashSet::new();
    for (i, panel) in settings.panels.iter().enumerate() {
        if panel.id.is_empty() {
            result.push(
                Severity::Error,
                "missing-field",
                format!("panels[{i}].id"),
                "panel is missing an id".into(),
            );
        } else if !panel_ids.insert(panel.id.as_str()) {
            result.push(
                Severity::Error,
                "duplicate-id",
                format!("panels[{i}].id"),
                format!("duplicate panel id: {}", panel.id),
            );
        }
    }

    result
}
