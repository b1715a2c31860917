/// Route descriptors
///
/// A descriptor pairs a path template with optional parameter and query
/// schemas. It is built once with the chainable `with_*` methods, then shared
/// read-only (usually behind an `Arc` in a [`RouteRegistry`](crate::RouteRegistry)).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::diagnostics::Diagnostic;
use crate::pattern::PathTemplate;
use crate::schema::Schema;

/// Immutable description of one route
///
/// # Examples
///
/// ```
/// use rhtmx_links::RouteDescriptor;
/// use rhtmx_links::schema::{Field, ObjectSchema};
///
/// let route = RouteDescriptor::new("/user/:id")
///     .with_name("user.profile")
///     .with_params_schema(ObjectSchema::new().field("id", Field::numeric_string()));
///
/// assert_eq!(route.path(), "/user/:id");
/// assert_eq!(route.name(), Some("user.profile"));
/// assert!(route.check().is_empty());
/// ```
#[derive(Clone)]
pub struct RouteDescriptor {
    template: PathTemplate,
    name: Option<String>,
    params_schema: Option<Arc<dyn Schema>>,
    query_schema: Option<Arc<dyn Schema>>,
    meta: Option<Value>,
}

impl RouteDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            template: PathTemplate::new(path),
            name: None,
            params_schema: None,
            query_schema: None,
            meta: None,
        }
    }

    /// Sets the logical name used for registry lookups
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_params_schema(self, schema: impl Schema + 'static) -> Self {
        self.with_shared_params_schema(Arc::new(schema))
    }

    /// Uses a schema instance shared with other descriptors
    pub fn with_shared_params_schema(mut self, schema: Arc<dyn Schema>) -> Self {
        self.params_schema = Some(schema);
        self
    }

    pub fn with_query_schema(self, schema: impl Schema + 'static) -> Self {
        self.with_shared_query_schema(Arc::new(schema))
    }

    pub fn with_shared_query_schema(mut self, schema: Arc<dyn Schema>) -> Self {
        self.query_schema = Some(schema);
        self
    }

    /// Attaches opaque metadata (titles, permissions, analytics tags)
    pub fn with_meta(mut self, meta: impl Into<Value>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn path(&self) -> &str {
        self.template.as_str()
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn params_schema(&self) -> Option<&dyn Schema> {
        self.params_schema.as_deref()
    }

    pub fn query_schema(&self) -> Option<&dyn Schema> {
        self.query_schema.as_deref()
    }

    pub fn meta(&self) -> Option<&Value> {
        self.meta.as_ref()
    }

    /// Dynamic segments declared without a parameter schema to check them
    pub fn lacks_params_schema(&self) -> bool {
        self.template.has_params() && self.params_schema.is_none()
    }

    /// Compares the template's dynamic segments with the parameter schema
    ///
    /// Returns one configuration diagnostic per disagreement; an empty list
    /// means the descriptor is consistent. Schemas that cannot report their
    /// keys are only checked for presence.
    pub fn check(&self) -> Vec<Diagnostic> {
        let path = self.path();
        let names = self.template.param_names();
        let mut diagnostics = Vec::new();

        match (&self.params_schema, names.is_empty()) {
            (None, false) => diagnostics.push(Diagnostic::configuration(
                path,
                format!(
                    "dynamic segments ({}) have no parameter schema",
                    names.join(", ")
                ),
            )),
            (Some(_), true) => diagnostics.push(Diagnostic::configuration(
                path,
                "parameter schema declared but the path has no dynamic segments",
            )),
            _ => {}
        }

        if let Some(keys) = self.params_schema.as_ref().and_then(|s| s.keys()) {
            let missing: Vec<&str> = names
                .iter()
                .filter(|name| !keys.contains(*name))
                .map(String::as_str)
                .collect();
            if !missing.is_empty() && !keys.is_empty() {
                diagnostics.push(Diagnostic::configuration(
                    path,
                    format!("parameter schema does not declare: {}", missing.join(", ")),
                ));
            }

            let extra: Vec<&str> = keys
                .iter()
                .filter(|key| !names.contains(*key))
                .map(String::as_str)
                .collect();
            if !extra.is_empty() && !names.is_empty() {
                diagnostics.push(Diagnostic::configuration(
                    path,
                    format!("parameter schema declares keys not in the path: {}", extra.join(", ")),
                ));
            }
        }

        diagnostics
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path())
            .field("name", &self.name)
            .field("params_schema", &self.params_schema.is_some())
            .field("query_schema", &self.query_schema.is_some())
            .field("meta", &self.meta)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::schema::{Field, ObjectSchema, SchemaIssues};
    use serde_json::json;

    #[test]
    fn test_consistent_descriptor_has_no_diagnostics() {
        let route = RouteDescriptor::new("/blog/:slug")
            .with_params_schema(ObjectSchema::new().field("slug", Field::slug()));
        assert!(route.check().is_empty());
        assert!(!route.lacks_params_schema());
    }

    #[test]
    fn test_static_route_without_schema_is_fine() {
        assert!(RouteDescriptor::new("/about").check().is_empty());
    }

    #[test]
    fn test_dynamic_segments_without_schema() {
        let route = RouteDescriptor::new("/user/:id");
        let diagnostics = route.check();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Configuration);
        assert_eq!(diagnostics[0].message, "dynamic segments (id) have no parameter schema");
        assert!(route.lacks_params_schema());
    }

    #[test]
    fn test_schema_without_dynamic_segments() {
        let route = RouteDescriptor::new("/about")
            .with_params_schema(ObjectSchema::new().field("id", Field::string()));
        let diagnostics = route.check();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "parameter schema declared but the path has no dynamic segments"
        );
    }

    #[test]
    fn test_schema_key_mismatch() {
        let route = RouteDescriptor::new("/user/:id/post/:postId").with_params_schema(
            ObjectSchema::new()
                .field("id", Field::string())
                .field("slug", Field::string()),
        );
        let messages: Vec<String> = route.check().into_iter().map(|d| d.message).collect();
        assert_eq!(
            messages,
            vec![
                "parameter schema does not declare: postId".to_string(),
                "parameter schema declares keys not in the path: slug".to_string(),
            ]
        );
    }

    #[test]
    fn test_opaque_schema_only_checked_for_presence() {
        let route = RouteDescriptor::new("/user/:id")
            .with_params_schema(|value: &Value| -> Result<Value, SchemaIssues> { Ok(value.clone()) });
        assert!(route.check().is_empty());
    }

    #[test]
    fn test_meta_and_debug() {
        let route = RouteDescriptor::new("/admin").with_meta(json!({"title": "Admin"}));
        assert_eq!(route.meta(), Some(&json!({"title": "Admin"})));
        let debug = format!("{:?}", route);
        assert!(debug.contains("\"/admin\""));
        assert!(debug.contains("params_schema: false"));
    }
}
