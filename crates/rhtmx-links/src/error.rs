// File: src/error.rs
// Purpose: Error types returned by registration and URL generation

use std::fmt;

use thiserror::Error;

use crate::schema::SchemaIssues;

/// Which part of a navigation request a schema rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationTarget {
    Params,
    Query,
}

impl fmt::Display for ValidationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Params => f.write_str("params"),
            Self::Query => f.write_str("query"),
        }
    }
}

/// Parameter or query values rejected by a route's schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {target} for route `{route_path}`: {issues}")]
pub struct ValidationError {
    /// Path template of the route that declared the schema
    pub route_path: String,
    pub target: ValidationTarget,
    pub issues: SchemaIssues,
}

impl ValidationError {
    pub fn new(route_path: impl Into<String>, target: ValidationTarget, issues: SchemaIssues) -> Self {
        Self {
            route_path: route_path.into(),
            target,
            issues,
        }
    }
}

/// Failures surfaced by the registry and the URL generator
///
/// Lookup misses are not errors; registry lookups return `Option`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("route `{path}` is missing values for: {}", .names.join(", "))]
    MissingParameters { path: String, names: Vec<String> },

    #[error("route `{path}` is misconfigured: {message}")]
    Configuration { path: String, message: String },

    #[error("a route with path `{path}` is already registered")]
    DuplicatePath { path: String },

    #[error("route `{path}` uses the name `{name}`, which is already registered")]
    DuplicateName { path: String, name: String },

    #[error("navigation to `{url}` failed: {message}")]
    Navigation {
        /// Template the URL was built from
        path: String,
        url: String,
        message: String,
    },
}

impl RouteError {
    /// Path template of the route involved
    pub fn route_path(&self) -> &str {
        match self {
            Self::Validation(err) => &err.route_path,
            Self::MissingParameters { path, .. }
            | Self::Configuration { path, .. }
            | Self::DuplicatePath { path }
            | Self::DuplicateName { path, .. }
            | Self::Navigation { path, .. } => path,
        }
    }
}
