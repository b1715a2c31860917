//! # RHTMX Links
//!
//! Type-checked route descriptors and URL generation for links, redirects
//! and programmatic navigation.
//!
//! A route is described once by a [`RouteDescriptor`]: a path template plus
//! optional schemas for its dynamic segments and its query string. Every
//! link, redirect and navigation call then builds its URL through the same
//! generator, so invalid parameters are caught in one place.
//!
//! ## Path Templates
//!
//! - Static paths (`/about`)
//! - Marker parameters (`/users/:id`)
//! - Bracket parameters (`/users/[id]`)
//! - Catch-all (`/docs/[...slug]`) and optional catch-all (`/docs/[[...slug]]`)
//!
//! ## Validation Modes
//!
//! - **Lenient** (default): schema failures and missing parameters become
//!   [`Diagnostic`]s on the returned [`Href`], and the URL is built from the
//!   raw values
//! - **Strict**: the same problems are returned as a [`RouteError`]
//!
//! ## Example
//!
//! ```
//! use rhtmx_links::{Params, Query, RouteDescriptor, RouteRegistry};
//! use rhtmx_links::schema::{Field, ObjectSchema};
//!
//! let registry = RouteRegistry::new()
//!     .with_route(
//!         RouteDescriptor::new("/blog/:slug")
//!             .with_name("blog.post")
//!             .with_params_schema(ObjectSchema::new().field("slug", Field::slug()))
//!             .with_query_schema(
//!                 ObjectSchema::new().field("page", Field::integer().coerce().min(1.0).optional()),
//!             ),
//!     )
//!     .unwrap();
//!
//! let href = registry
//!     .href(
//!         "blog.post",
//!         Some(&Params::new().with("slug", "hello-world")),
//!         Some(&Query::new().with("page", 2)),
//!     )
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(href.as_str(), "/blog/hello-world?page=2");
//! assert!(href.is_clean());
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod config;
mod descriptor;
mod diagnostics;
mod error;
mod generator;
mod navigate;
pub mod path;
pub mod pattern;
pub mod query;
mod registry;
pub mod schema;
mod value;

pub use config::{GenerationConfig, LinksConfig, RegistryConfig};
pub use descriptor::RouteDescriptor;
pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use error::{RouteError, ValidationError, ValidationTarget};
pub use generator::{
    generate, GeneratorOptions, Href, NavigationRequest, RouteTarget, UrlGenerator, ValidationMode,
};
pub use navigate::{Navigator, Redirect, RedirectStatus};
pub use pattern::{ParamKind, PathSegment, PathTemplate};
pub use registry::{DuplicatePolicy, MissingSchemaPolicy, RegistryOptions, RouteRegistry};
pub use schema::{Field, ObjectSchema, Schema, SchemaIssue, SchemaIssues, TypedSchema};
pub use value::{ParamValue, Params, Query};

#[cfg(feature = "garde")]
pub use schema::GardeSchema;
