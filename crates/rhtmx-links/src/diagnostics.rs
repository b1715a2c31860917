// File: src/diagnostics.rs
// Purpose: Non-fatal findings returned alongside registration and generation results

use std::fmt;

use crate::error::ValidationError;

/// Category of a non-fatal finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// Route template and parameter schema disagree
    Configuration,
    /// A dynamic segment received no value; its token stayed in the URL
    MissingParameter,
    /// Values failed their schema and were used unvalidated
    Validation,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => f.write_str("configuration"),
            Self::MissingParameter => f.write_str("missing-parameter"),
            Self::Validation => f.write_str("validation"),
        }
    }
}

/// A warning tied to one route
///
/// Every diagnostic is logged through `tracing` when created and also handed
/// back to the caller, who decides whether to surface, fail on or ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// Path template of the route concerned
    pub route_path: String,
    pub message: String,
}

impl Diagnostic {
    fn emit(kind: DiagnosticKind, route_path: &str, message: String) -> Self {
        tracing::warn!(kind = %kind, route = %route_path, "{}", message);
        Self {
            kind,
            route_path: route_path.to_string(),
            message,
        }
    }

    pub fn configuration(route_path: &str, message: impl Into<String>) -> Self {
        Self::emit(DiagnosticKind::Configuration, route_path, message.into())
    }

    pub fn missing_parameters(route_path: &str, names: &[String]) -> Self {
        Self::emit(
            DiagnosticKind::MissingParameter,
            route_path,
            format!("no value supplied for: {}", names.join(", ")),
        )
    }

    pub fn validation(error: &ValidationError) -> Self {
        Self::emit(
            DiagnosticKind::Validation,
            &error.route_path,
            format!("invalid {} used as supplied: {}", error.target, error.issues),
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.route_path, self.message)
    }
}
