/// Path template parsing
///
/// Pure functional parsing of route path templates into typed segments.
/// All functions are **pure**: same input → same output, no side effects.
///
/// Two spellings of a dynamic segment are understood:
/// - `:name` (the reserved marker form used in links)
/// - `[name]`, `[...name]`, `[[...name]]` (the page directory form)

use std::borrow::Cow;

use crate::value::ParamValue;

/// Kind of a dynamic segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// `:id` or `[id]`: exactly one segment
    Single,
    /// `[...slug]`: one or more segments
    CatchAll,
    /// `[[...slug]]`: zero or more segments
    OptionalCatchAll,
}

/// One non-empty piece of a path template
///
/// # Examples
///
/// ```
/// use rhtmx_links::pattern::{parse, ParamKind, PathSegment};
///
/// let segments = parse("/user/:id");
/// assert_eq!(segments[0], PathSegment::Literal("user".to_string()));
/// assert_eq!(
///     segments[1],
///     PathSegment::Param { name: "id".to_string(), position: 1, kind: ParamKind::Single }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Literal(String),
    Param {
        name: String,
        /// Index of this segment among the template's non-empty segments
        position: usize,
        kind: ParamKind,
    },
}

impl PathSegment {
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::Param { name, .. } => Some(name),
            Self::Literal(_) => None,
        }
    }
}

/// Classifies a single template piece (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Bracket param**: `[name]`
/// 4. **Marker param**: `:name`
/// 5. **Literal**: anything else, including a bare `:` or `[]`
///
/// Returns `None` for literals.
pub fn classify_segment(piece: &str) -> Option<(&str, ParamKind)> {
    if let Some(inner) = piece.strip_prefix("[[").and_then(|s| s.strip_suffix("]]")) {
        if let Some(name) = inner.strip_prefix("...").filter(|n| !n.is_empty()) {
            return Some((name, ParamKind::OptionalCatchAll));
        }
    }

    if let Some(inner) = piece.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return match inner.strip_prefix("...") {
            Some(name) if !name.is_empty() => Some((name, ParamKind::CatchAll)),
            Some(_) => None,
            None if !inner.is_empty() && !inner.contains(['[', ']']) => Some((inner, ParamKind::Single)),
            None => None,
        };
    }

    piece
        .strip_prefix(':')
        .filter(|name| !name.is_empty())
        .map(|name| (name, ParamKind::Single))
}

/// Parses a template into its ordered non-empty segments
///
/// An empty template (or `/`) is the root route and has no segments.
pub fn parse(template: &str) -> Vec<PathSegment> {
    template
        .split('/')
        .filter(|piece| !piece.is_empty())
        .enumerate()
        .map(|(position, piece)| match classify_segment(piece) {
            Some((name, kind)) => PathSegment::Param {
                name: name.to_string(),
                position,
                kind,
            },
            None => PathSegment::Literal(piece.to_string()),
        })
        .collect()
}

/// Distinct parameter names of a template in first-seen order
///
/// # Examples
///
/// ```
/// use rhtmx_links::pattern::param_names;
///
/// assert_eq!(param_names("/:id/:identifier"), vec!["id", "identifier"]);
/// assert!(param_names("/about").is_empty());
/// ```
pub fn param_names(template: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for segment in parse(template) {
        if let PathSegment::Param { name, .. } = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Output of substituting values into a template
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Rendered {
    pub path: String,
    /// Parameters with no value (or an empty one); their tokens were left in `path` verbatim
    pub unresolved: Vec<String>,
}

/// A parsed path template, kept alongside its verbatim source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    raw: String,
    segments: Vec<PathSegment>,
    names: Vec<String>,
}

impl PathTemplate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = parse(&raw);
        let names = param_names(&raw);
        Self {
            raw,
            segments,
            names,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn param_names(&self) -> &[String] {
        &self.names
    }

    pub fn has_params(&self) -> bool {
        !self.names.is_empty()
    }

    /// Names whose segments must receive a value (optional catch-alls excluded)
    pub fn required_params(&self) -> Vec<&str> {
        let mut required: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let PathSegment::Param { name, kind, .. } = segment {
                if *kind != ParamKind::OptionalCatchAll && !required.contains(&name.as_str()) {
                    required.push(name);
                }
            }
        }
        required
    }

    /// Substitutes values token by token
    ///
    /// The template is split on `/` and reassembled with `/`, so only whole
    /// delimiter-bounded tokens are replaced and every separator of the
    /// source (leading, trailing or doubled) survives.
    pub(crate) fn render<'a, F>(&self, lookup: F, encode: bool) -> Rendered
    where
        F: Fn(&str) -> Option<&'a ParamValue>,
    {
        let mut pieces: Vec<Cow<'_, str>> = Vec::new();
        let mut unresolved: Vec<String> = Vec::new();
        let mut mark_unresolved = |name: &str| {
            if !unresolved.iter().any(|n| n == name) {
                unresolved.push(name.to_string());
            }
        };

        for piece in self.raw.split('/') {
            let Some((name, kind)) = classify_segment(piece) else {
                pieces.push(Cow::Borrowed(piece));
                continue;
            };

            match (kind, lookup(name)) {
                // An empty value would collapse the segment, so it counts as missing
                (ParamKind::Single, Some(value)) if !value.to_string().is_empty() => {
                    pieces.push(Cow::Owned(encode_value(&value.to_string(), encode)));
                }
                (ParamKind::CatchAll | ParamKind::OptionalCatchAll, Some(ParamValue::List(items)))
                    if !items.is_empty() =>
                {
                    let joined = items
                        .iter()
                        .map(|item| encode_value(&item.to_string(), encode))
                        .collect::<Vec<_>>()
                        .join("/");
                    pieces.push(Cow::Owned(joined));
                }
                (ParamKind::CatchAll | ParamKind::OptionalCatchAll, Some(value))
                    if value.as_list().is_none() && !value.to_string().is_empty() =>
                {
                    pieces.push(Cow::Owned(encode_value(&value.to_string(), encode)));
                }
                // Missing or empty optional catch-all: drop the segment entirely
                (ParamKind::OptionalCatchAll, _) => {}
                _ => {
                    mark_unresolved(name);
                    pieces.push(Cow::Borrowed(piece));
                }
            }
        }

        let mut path = pieces.join("/");
        if path.is_empty() {
            path.push('/');
        }

        Rendered { path, unresolved }
    }
}

fn encode_value(value: &str, encode: bool) -> String {
    if encode {
        urlencoding::encode(value).into_owned()
    } else {
        value.to_string()
    }
}

impl From<&str> for PathTemplate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for PathTemplate {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Params;

    fn render(template: &str, params: &Params) -> Rendered {
        PathTemplate::new(template).render(|name| params.get(name), true)
    }

    #[test]
    fn test_classify_literal() {
        assert_eq!(classify_segment("about"), None);
        assert_eq!(classify_segment(":"), None);
        assert_eq!(classify_segment("[]"), None);
        assert_eq!(classify_segment("[...]"), None);
        assert_eq!(classify_segment("[[...]]"), None);
    }

    #[test]
    fn test_classify_marker_param() {
        assert_eq!(classify_segment(":id"), Some(("id", ParamKind::Single)));
    }

    #[test]
    fn test_classify_bracket_forms() {
        assert_eq!(classify_segment("[id]"), Some(("id", ParamKind::Single)));
        assert_eq!(classify_segment("[...slug]"), Some(("slug", ParamKind::CatchAll)));
        assert_eq!(
            classify_segment("[[...slug]]"),
            Some(("slug", ParamKind::OptionalCatchAll))
        );
    }

    #[test]
    fn test_parse_empty_template() {
        assert!(parse("").is_empty());
        assert!(parse("/").is_empty());
    }

    #[test]
    fn test_parse_positions() {
        let segments = parse("/user/:id/post/:postId");
        assert_eq!(segments.len(), 4);
        assert_eq!(
            segments[3],
            PathSegment::Param {
                name: "postId".to_string(),
                position: 3,
                kind: ParamKind::Single
            }
        );
    }

    #[test]
    fn test_param_names_deduplicated() {
        assert_eq!(param_names("/:id/compare/:id"), vec!["id"]);
        assert_eq!(PathTemplate::new("/:a/:b/:a").param_names(), ["a", "b"]);
    }

    #[test]
    fn test_required_params_skip_optional_catch_all() {
        let template = PathTemplate::new("/docs/:lang/[[...slug]]");
        assert_eq!(template.required_params(), vec!["lang"]);
    }

    #[test]
    fn test_render_prefix_names_do_not_collide() {
        let params = Params::new().with("id", "1").with("identifier", "abc");
        assert_eq!(render("/:id/:identifier", &params).path, "/1/abc");
        assert_eq!(render("/:identifier/:id", &params).path, "/abc/1");
    }

    #[test]
    fn test_render_keeps_trailing_and_double_slashes() {
        let params = Params::new().with("id", "7");
        assert_eq!(render("/user/:id/", &params).path, "/user/7/");
        assert_eq!(render("/user//:id", &params).path, "/user//7");
    }

    #[test]
    fn test_render_unresolved_left_verbatim() {
        let rendered = render("/user/:id/post/:postId", &Params::new().with("id", 1));
        assert_eq!(rendered.path, "/user/1/post/:postId");
        assert_eq!(rendered.unresolved, vec!["postId"]);
    }

    #[test]
    fn test_render_empty_value_is_unresolved() {
        let rendered = render("/user/:id", &Params::new().with("id", ""));
        assert_eq!(rendered.path, "/user/:id");
        assert_eq!(rendered.unresolved, vec!["id"]);

        let rendered = render("/docs/[...slug]", &Params::new().with("slug", ""));
        assert_eq!(rendered.unresolved, vec!["slug"]);
    }

    #[test]
    fn test_render_encodes_values() {
        let params = Params::new().with("name", "a b/c");
        assert_eq!(render("/tag/:name", &params).path, "/tag/a%20b%2Fc");

        let raw = PathTemplate::new("/tag/:name").render(|name| params.get(name), false);
        assert_eq!(raw.path, "/tag/a b/c");
    }

    #[test]
    fn test_render_catch_all() {
        let params = Params::new().with("slug", vec!["guides", "intro"]);
        assert_eq!(render("/docs/[...slug]", &params).path, "/docs/guides/intro");

        let rendered = render("/docs/[...slug]", &Params::new());
        assert_eq!(rendered.path, "/docs/[...slug]");
        assert_eq!(rendered.unresolved, vec!["slug"]);
    }

    #[test]
    fn test_render_optional_catch_all_drops_segment() {
        assert_eq!(render("/docs/[[...slug]]", &Params::new()).path, "/docs");
        assert_eq!(render("/[[...slug]]", &Params::new()).path, "/");

        let empty: Vec<String> = Vec::new();
        let params = Params::new().with("slug", empty);
        assert_eq!(render("/docs/[[...slug]]", &params).path, "/docs");
    }

    #[test]
    fn test_render_root() {
        assert_eq!(render("", &Params::new()).path, "/");
        assert_eq!(render("/", &Params::new()).path, "/");
    }
}
