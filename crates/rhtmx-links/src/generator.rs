/// URL generation
///
/// Validates parameter and query values against a route's schemas, substitutes
/// the parameters into the path template and appends the encoded query.
/// Output is a pure function of the inputs and the generator's options.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::descriptor::RouteDescriptor;
use crate::diagnostics::Diagnostic;
use crate::error::{RouteError, ValidationTarget};
use crate::path::with_base_path;
use crate::pattern::PathTemplate;
use crate::query::append_query;
use crate::schema::{validate, Schema};
use crate::value::{Params, Query};

/// How schema failures and missing parameters are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Report a diagnostic and build the URL from the raw values
    #[default]
    Lenient,
    /// Fail generation with a [`RouteError`]
    Strict,
}

/// Options shared by every URL a generator builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub mode: ValidationMode,
    /// Percent-encode substituted path values (default: true)
    pub encode_path_params: bool,
    /// Prefix for root-relative paths, e.g. `/app`
    pub base_path: Option<String>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            encode_path_params: true,
            base_path: None,
        }
    }
}

impl GeneratorOptions {
    pub fn strict() -> Self {
        Self {
            mode: ValidationMode::Strict,
            ..Self::default()
        }
    }
}

/// What a navigation points at
#[derive(Debug, Clone, Copy)]
pub enum RouteTarget<'a> {
    /// A configured route; its schemas apply
    Named(&'a RouteDescriptor),
    /// A bare path template; never schema-checked
    Raw(&'a str),
}

impl<'a> RouteTarget<'a> {
    /// Path template the URL is built from
    pub fn template(&self) -> &'a str {
        match self {
            Self::Named(descriptor) => descriptor.path(),
            Self::Raw(template) => template,
        }
    }
}

impl<'a> From<&'a RouteDescriptor> for RouteTarget<'a> {
    fn from(descriptor: &'a RouteDescriptor) -> Self {
        Self::Named(descriptor)
    }
}

impl<'a> From<&'a str> for RouteTarget<'a> {
    fn from(template: &'a str) -> Self {
        Self::Raw(template)
    }
}

/// A target plus the values to build its URL from
///
/// # Examples
///
/// ```
/// use rhtmx_links::{NavigationRequest, Params, Query, UrlGenerator};
///
/// let request = NavigationRequest::to("/user/:id")
///     .params(Params::new().with("id", "42"))
///     .query(Query::new().with("tab", "settings"));
///
/// let href = UrlGenerator::default().resolve(&request).unwrap();
/// assert_eq!(href.as_str(), "/user/42?tab=settings");
/// ```
#[derive(Debug, Clone)]
pub struct NavigationRequest<'a> {
    pub target: RouteTarget<'a>,
    pub params: Option<Params>,
    pub query: Option<Query>,
}

impl<'a> NavigationRequest<'a> {
    pub fn to(target: impl Into<RouteTarget<'a>>) -> Self {
        Self {
            target: target.into(),
            params: None,
            query: None,
        }
    }

    pub fn params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = Some(query);
        self
    }
}

/// A generated URL and the warnings raised while building it
#[derive(Debug, Clone, PartialEq)]
pub struct Href {
    url: String,
    diagnostics: Vec<Diagnostic>,
}

impl Href {
    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn into_string(self) -> String {
        self.url
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when nothing had to be reported
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl AsRef<str> for Href {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl From<Href> for String {
    fn from(href: Href) -> Self {
        href.url
    }
}

/// Builds URLs for route targets
#[derive(Debug, Clone, Default)]
pub struct UrlGenerator {
    options: GeneratorOptions,
}

impl UrlGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn resolve(&self, request: &NavigationRequest<'_>) -> Result<Href, RouteError> {
        self.generate(request.target, request.params.as_ref(), request.query.as_ref())
    }

    /// Builds the URL for `target`
    ///
    /// In lenient mode every problem becomes a diagnostic on the returned
    /// [`Href`]; in strict mode schema failures and unresolved segments
    /// are returned as errors.
    pub fn generate(
        &self,
        target: RouteTarget<'_>,
        params: Option<&Params>,
        query: Option<&Query>,
    ) -> Result<Href, RouteError> {
        let parsed;
        let (template, descriptor) = match target {
            RouteTarget::Named(descriptor) => (descriptor.template(), Some(descriptor)),
            RouteTarget::Raw(raw) => {
                parsed = PathTemplate::new(raw);
                (&parsed, None)
            }
        };
        let route_path = template.as_str();
        let mut diagnostics = Vec::new();

        let params = match (descriptor.and_then(RouteDescriptor::params_schema), params) {
            (Some(schema), Some(params)) => {
                self.checked(schema, &params.to_json(), route_path, ValidationTarget::Params, &mut diagnostics)?
                    .and_then(|accepted| Params::from_json(&accepted))
                    .unwrap_or_else(|| params.clone())
            }
            (_, params) => params.cloned().unwrap_or_default(),
        };

        let rendered = template.render(|name| params.get(name), self.options.encode_path_params);
        if !rendered.unresolved.is_empty() {
            match self.options.mode {
                ValidationMode::Strict => {
                    return Err(RouteError::MissingParameters {
                        path: route_path.to_string(),
                        names: rendered.unresolved,
                    })
                }
                ValidationMode::Lenient => {
                    diagnostics.push(Diagnostic::missing_parameters(route_path, &rendered.unresolved));
                }
            }
        }

        let query = match descriptor.and_then(RouteDescriptor::query_schema) {
            Some(schema) => {
                let candidate = query
                    .map(Query::to_json)
                    .unwrap_or_else(|| Value::Object(Map::new()));
                let supplied = query.cloned().unwrap_or_default();
                self.checked(schema, &candidate, route_path, ValidationTarget::Query, &mut diagnostics)?
                    .and_then(|accepted| Query::from_json(&accepted))
                    .map(|accepted| accepted.aligned_to(&supplied))
                    .unwrap_or(supplied)
            }
            None => query.cloned().unwrap_or_default(),
        };

        let path = with_base_path(&rendered.path, self.options.base_path.as_deref());
        let url = append_query(&path, &query);
        tracing::debug!(route = %route_path, url = %url, diagnostics = diagnostics.len(), "generated href");

        Ok(Href { url, diagnostics })
    }

    /// Runs one schema; `Ok(None)` means "rejected, continue with raw values"
    fn checked(
        &self,
        schema: &dyn Schema,
        candidate: &Value,
        route_path: &str,
        target: ValidationTarget,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Option<Value>, RouteError> {
        match validate(Some(schema), candidate, route_path, target) {
            Ok(accepted) => Ok(Some(accepted)),
            Err(err) => match self.options.mode {
                ValidationMode::Strict => Err(err.into()),
                ValidationMode::Lenient => {
                    diagnostics.push(Diagnostic::validation(&err));
                    Ok(None)
                }
            },
        }
    }
}

/// Builds a URL from a bare template with default (lenient) options
///
/// Diagnostics are logged and dropped; use [`UrlGenerator`] to inspect them.
///
/// # Examples
///
/// ```
/// use rhtmx_links::{generate, Params, Query};
///
/// let url = generate(
///     "/blog/:slug",
///     Some(&Params::new().with("slug", "hello-world")),
///     Some(&Query::new().with("page", 2)),
/// );
/// assert_eq!(url, "/blog/hello-world?page=2");
/// assert_eq!(generate("/about", None, None), "/about");
/// ```
pub fn generate(template: &str, params: Option<&Params>, query: Option<&Query>) -> String {
    // Lenient generation of a raw target has no failure path
    UrlGenerator::default()
        .generate(RouteTarget::Raw(template), params, query)
        .map(Href::into_string)
        .unwrap_or_else(|_| template.to_string())
}
