/// Route registry
///
/// An explicit table of route descriptors, built once at startup and then
/// only read. Descriptors are kept in registration order and indexed by path
/// and by name for O(1) lookup.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::descriptor::RouteDescriptor;
use crate::diagnostics::Diagnostic;
use crate::error::RouteError;
use crate::generator::{GeneratorOptions, Href, RouteTarget, UrlGenerator};
use crate::value::{Params, Query};

/// What happens when a path or name is registered twice
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Registration fails with [`RouteError::DuplicatePath`] / [`RouteError::DuplicateName`]
    #[default]
    Reject,
    /// The later registration wins
    Replace,
}

/// What happens when a route has dynamic segments but no parameter schema
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSchemaPolicy {
    /// Record a configuration diagnostic
    #[default]
    Warn,
    /// Fail registration with [`RouteError::Configuration`]
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryOptions {
    pub duplicates: DuplicatePolicy,
    pub missing_schema: MissingSchemaPolicy,
}

/// Route table plus the generator used to build URLs for its routes
///
/// # Examples
///
/// ```
/// use rhtmx_links::{Params, Query, RouteDescriptor, RouteRegistry};
/// use rhtmx_links::schema::{Field, ObjectSchema};
///
/// let registry = RouteRegistry::new()
///     .with_route(
///         RouteDescriptor::new("/user/:id")
///             .with_name("user.profile")
///             .with_params_schema(ObjectSchema::new().field("id", Field::numeric_string())),
///     )
///     .unwrap();
///
/// let href = registry
///     .href("user.profile", Some(&Params::new().with("id", "42")), None)
///     .expect("route is registered")
///     .unwrap();
/// assert_eq!(href.as_str(), "/user/42");
///
/// assert!(registry.href("missing", None, None).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<Arc<RouteDescriptor>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
    diagnostics: Vec<Diagnostic>,
    options: RegistryOptions,
    generator: UrlGenerator,
}

impl RouteRegistry {
    /// Creates an empty registry with default policies and a lenient generator
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegistryOptions, generator: GeneratorOptions) -> Self {
        Self {
            options,
            generator: UrlGenerator::new(generator),
            ..Self::default()
        }
    }

    /// Adds a route (functional builder)
    pub fn with_route(mut self, descriptor: RouteDescriptor) -> Result<Self, RouteError> {
        self.register(descriptor)?;
        Ok(self)
    }

    /// Adds several routes, stopping at the first failure
    pub fn with_routes<I>(mut self, descriptors: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = RouteDescriptor>,
    {
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(self)
    }

    /// Registers a route and returns the configuration diagnostics it raised
    ///
    /// The diagnostics are also kept and available from [`RouteRegistry::diagnostics`].
    pub fn register(&mut self, descriptor: RouteDescriptor) -> Result<Vec<Diagnostic>, RouteError> {
        let path = descriptor.path().to_string();

        if descriptor.lacks_params_schema() && self.options.missing_schema == MissingSchemaPolicy::Error {
            return Err(RouteError::Configuration {
                path,
                message: format!(
                    "dynamic segments ({}) have no parameter schema",
                    descriptor.template().param_names().join(", ")
                ),
            });
        }

        let existing_path = self.by_path.get(&path).copied();
        let existing_name = descriptor
            .name()
            .and_then(|name| self.by_name.get(name).copied())
            .filter(|idx| Some(*idx) != existing_path);

        if self.options.duplicates == DuplicatePolicy::Reject {
            if existing_path.is_some() {
                return Err(RouteError::DuplicatePath { path });
            }
            if let (Some(_), Some(name)) = (existing_name, descriptor.name()) {
                return Err(RouteError::DuplicateName {
                    path,
                    name: name.to_string(),
                });
            }
        }

        let diagnostics = descriptor.check();
        let descriptor = Arc::new(descriptor);

        let idx = match existing_path {
            Some(idx) => {
                tracing::debug!(route = %path, "replacing registered route");
                // The old name may already point at another route
                if let Some(old_name) = self.routes[idx].name() {
                    if self.by_name.get(old_name) == Some(&idx) {
                        self.by_name.remove(old_name);
                    }
                }
                self.diagnostics.retain(|d| d.route_path != path);
                self.routes[idx] = Arc::clone(&descriptor);
                idx
            }
            None => {
                self.routes.push(Arc::clone(&descriptor));
                self.routes.len() - 1
            }
        };

        self.by_path.insert(path.clone(), idx);
        if let Some(name) = descriptor.name() {
            self.by_name.insert(name.to_string(), idx);
        }

        tracing::debug!(route = %path, name = ?descriptor.name(), "registered route");
        self.diagnostics.extend(diagnostics.iter().cloned());
        Ok(diagnostics)
    }

    /// Looks up a route by its logical name
    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.by_name.get(name).map(|&idx| self.routes[idx].as_ref())
    }

    /// Looks up a route by its exact path template
    pub fn get_by_path(&self, path: &str) -> Option<&RouteDescriptor> {
        self.by_path.get(path).map(|&idx| self.routes[idx].as_ref())
    }

    /// Shared handle to a named route
    pub fn get_shared(&self, name: &str) -> Option<Arc<RouteDescriptor>> {
        self.by_name.get(name).map(|&idx| Arc::clone(&self.routes[idx]))
    }

    /// Routes in registration order
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter().map(Arc::as_ref)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Configuration diagnostics collected during registration
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn generator(&self) -> &UrlGenerator {
        &self.generator
    }

    /// Builds the URL for a named route
    ///
    /// Returns `None` when no route has that name, so a lookup miss stays
    /// distinct from a route whose values were rejected.
    pub fn href(
        &self,
        name: &str,
        params: Option<&Params>,
        query: Option<&Query>,
    ) -> Option<Result<Href, RouteError>> {
        self.get(name)
            .map(|route| self.generator.generate(RouteTarget::Named(route), params, query))
    }

    /// Same as [`RouteRegistry::href`], keyed by path template
    pub fn href_for_path(
        &self,
        path: &str,
        params: Option<&Params>,
        query: Option<&Query>,
    ) -> Option<Result<Href, RouteError>> {
        self.get_by_path(path)
            .map(|route| self.generator.generate(RouteTarget::Named(route), params, query))
    }

    /// Convenience form of [`RouteRegistry::href`] taking `(name, value)` pairs
    pub fn url_for(&self, name: &str, params: &[(&str, &str)]) -> Option<Result<Href, RouteError>> {
        let params: Params = params.iter().copied().collect();
        self.href(name, Some(&params), None)
    }
}
