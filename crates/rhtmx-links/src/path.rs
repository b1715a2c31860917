/// Path utilities for base-path handling
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use rhtmx_links::path::is_canonical_path;
///
/// assert!(is_canonical_path("/"));
/// assert!(is_canonical_path("/app"));
///
/// assert!(!is_canonical_path(""));
/// assert!(!is_canonical_path("app")); // Missing leading /
/// assert!(!is_canonical_path("/app/")); // Trailing /
/// assert!(!is_canonical_path("/app//docs")); // Double //
/// ```
pub fn is_canonical_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Prefixes a generated path with the application's base path
///
/// Only root-relative paths are prefixed; relative and absolute URLs pass
/// through. Trailing slashes on the base are ignored, so `/` is the same as
/// no base. Root maps to the base itself.
///
/// # Examples
///
/// ```
/// use rhtmx_links::path::with_base_path;
///
/// assert_eq!(with_base_path("/user/42", Some("/app")), "/app/user/42");
/// assert_eq!(with_base_path("/", Some("/app")), "/app");
/// assert_eq!(with_base_path("/user/42", None), "/user/42");
/// ```
pub fn with_base_path<'a>(path: &'a str, base_path: Option<&str>) -> Cow<'a, str> {
    match base_path.map(|base| base.trim_end_matches('/')) {
        Some(base) if !base.is_empty() && path.starts_with('/') && !path.starts_with("//") => {
            if path == "/" {
                Cow::Owned(base.to_string())
            } else {
                Cow::Owned(format!("{}{}", base, path))
            }
        }
        _ => Cow::Borrowed(path),
    }
}
