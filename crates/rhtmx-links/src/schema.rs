// File: src/schema.rs
// Purpose: Schema trait, built-in object schema and validation dispatch

use std::fmt;
use std::marker::PhantomData;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Number, Value};

use crate::error::{ValidationError, ValidationTarget};

// Numeric string: optional sign, digits, optional fraction
static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").unwrap());

// URL slug: lowercase words joined by single hyphens
static SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());

/// A single field-level diagnostic reported by a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dotted path to the offending member; empty for the value itself
    pub path: String,
    pub message: String,
}

impl SchemaIssue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// All issues a schema found in one candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaIssues(Vec<SchemaIssue>);

impl SchemaIssues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![SchemaIssue::new(path, message)])
    }

    pub fn push(&mut self, issue: SchemaIssue) {
        self.0.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SchemaIssue> {
        self.0.iter()
    }

    /// First issue reported for `path`
    pub fn get(&self, path: &str) -> Option<&SchemaIssue> {
        self.0.iter().find(|issue| issue.path == path)
    }
}

impl fmt::Display for SchemaIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, issue) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaIssues {}

impl FromIterator<SchemaIssue> for SchemaIssues {
    fn from_iter<I: IntoIterator<Item = SchemaIssue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SchemaIssues {
    type Item = SchemaIssue;
    type IntoIter = std::vec::IntoIter<SchemaIssue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Anything that can check an unknown value and hand back its parsed form
///
/// Coercion (string → number and the like) belongs to the schema; callers
/// only see the accepted value or the issues.
pub trait Schema: Send + Sync {
    fn parse(&self, candidate: &Value) -> Result<Value, SchemaIssues>;

    /// Top-level keys this schema declares, when it knows them
    fn keys(&self) -> Option<Vec<String>> {
        None
    }
}

impl<F> Schema for F
where
    F: Fn(&Value) -> Result<Value, SchemaIssues> + Send + Sync,
{
    fn parse(&self, candidate: &Value) -> Result<Value, SchemaIssues> {
        self(candidate)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone)]
enum FieldType {
    String,
    NumericString,
    Integer,
    Number,
    Boolean,
    List(Box<Field>),
    Any,
}

/// Rule set for one member of an [`ObjectSchema`]
///
/// # Examples
///
/// ```
/// use rhtmx_links::schema::Field;
///
/// let page = Field::integer().min(1.0).coerce().default(1);
/// let sort = Field::string().one_of(["asc", "desc"]).optional();
/// ```
#[derive(Debug, Clone)]
pub struct Field {
    ty: FieldType,
    optional: bool,
    default: Option<Value>,
    coerce: bool,
    pattern: Option<Regex>,
    min_len: Option<usize>,
    max_len: Option<usize>,
    min: Option<f64>,
    max: Option<f64>,
    one_of: Vec<String>,
}

impl Field {
    fn of(ty: FieldType) -> Self {
        Self {
            ty,
            optional: false,
            default: None,
            coerce: false,
            pattern: None,
            min_len: None,
            max_len: None,
            min: None,
            max: None,
            one_of: Vec::new(),
        }
    }

    pub fn string() -> Self {
        Self::of(FieldType::String)
    }

    /// String made only of digits, with an optional sign and fraction
    pub fn numeric_string() -> Self {
        Self::of(FieldType::NumericString)
    }

    /// Lowercase hyphenated slug such as `hello-world`
    pub fn slug() -> Self {
        Self::string().pattern(Regex::clone(&SLUG_REGEX))
    }

    pub fn integer() -> Self {
        Self::of(FieldType::Integer)
    }

    pub fn number() -> Self {
        Self::of(FieldType::Number)
    }

    pub fn boolean() -> Self {
        Self::of(FieldType::Boolean)
    }

    pub fn list(item: Field) -> Self {
        Self::of(FieldType::List(Box::new(item)))
    }

    pub fn any() -> Self {
        Self::of(FieldType::Any)
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Value used when the member is missing or `null`
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Accepts strings for numbers/booleans (and scalars for strings and lists)
    pub fn coerce(mut self) -> Self {
        self.coerce = true;
        self
    }

    pub fn pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Minimum length in characters (strings) or items (lists)
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn one_of<I, S>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_of = allowed.into_iter().map(Into::into).collect();
        self
    }

    /// Checks one member; `None` means "omit from the output"
    fn check(&self, path: &str, value: Option<&Value>, issues: &mut SchemaIssues) -> Option<Value> {
        let value = match value {
            None | Some(Value::Null) => {
                if let Some(default) = &self.default {
                    return Some(default.clone());
                }
                if !self.optional {
                    issues.push(SchemaIssue::new(path, "Required"));
                }
                return None;
            }
            Some(value) => value,
        };

        match &self.ty {
            FieldType::Any => Some(value.clone()),
            FieldType::String => self.check_string(path, value, issues),
            FieldType::NumericString => {
                let text = self.check_string(path, value, issues)?;
                match text.as_str() {
                    Some(s) if NUMERIC_REGEX.is_match(s) => Some(text),
                    _ => {
                        issues.push(SchemaIssue::new(path, "Expected numeric string"));
                        None
                    }
                }
            }
            FieldType::Integer => {
                let number = self.check_number(path, value, issues)?;
                match number.as_i64() {
                    Some(i) => Some(Value::Number(i.into())),
                    None => match number.as_f64() {
                        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                            Some(Value::Number((f as i64).into()))
                        }
                        _ => {
                            issues.push(SchemaIssue::new(path, "Expected integer"));
                            None
                        }
                    },
                }
            }
            FieldType::Number => self.check_number(path, value, issues).map(Value::Number),
            FieldType::Boolean => match value {
                Value::Bool(b) => Some(Value::Bool(*b)),
                Value::String(s) if self.coerce && (s == "true" || s == "false") => {
                    Some(Value::Bool(s == "true"))
                }
                other => {
                    issues.push(SchemaIssue::new(
                        path,
                        format!("Expected boolean, received {}", type_name(other)),
                    ));
                    None
                }
            },
            FieldType::List(item) => {
                let items: Vec<Value> = match value {
                    Value::Array(items) => items.clone(),
                    other if self.coerce => vec![other.clone()],
                    other => {
                        issues.push(SchemaIssue::new(
                            path,
                            format!("Expected array, received {}", type_name(other)),
                        ));
                        return None;
                    }
                };
                self.check_length(path, items.len(), "items", issues);
                let checked: Vec<Value> = items
                    .iter()
                    .enumerate()
                    .filter_map(|(idx, element)| {
                        item.check(&format!("{}[{}]", path, idx), Some(element), issues)
                    })
                    .collect();
                Some(Value::Array(checked))
            }
        }
    }

    fn check_string(&self, path: &str, value: &Value, issues: &mut SchemaIssues) -> Option<Value> {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) if self.coerce => n.to_string(),
            Value::Bool(b) if self.coerce => b.to_string(),
            other => {
                issues.push(SchemaIssue::new(
                    path,
                    format!("Expected string, received {}", type_name(other)),
                ));
                return None;
            }
        };

        let before = issues.len();
        self.check_length(path, text.chars().count(), "characters", issues);
        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(&text) {
                issues.push(SchemaIssue::new(
                    path,
                    format!("Does not match pattern {}", pattern.as_str()),
                ));
            }
        }
        if !self.one_of.is_empty() && !self.one_of.contains(&text) {
            issues.push(SchemaIssue::new(
                path,
                format!("Expected one of: {}", self.one_of.join(", ")),
            ));
        }

        (issues.len() == before).then_some(Value::String(text))
    }

    fn check_number(&self, path: &str, value: &Value, issues: &mut SchemaIssues) -> Option<Number> {
        let number = match value {
            Value::Number(n) => n.clone(),
            Value::String(s) if self.coerce => {
                match s.trim().parse::<i64>() {
                    Ok(i) => Number::from(i),
                    Err(_) => match s.trim().parse::<f64>().ok().and_then(Number::from_f64) {
                        Some(n) => n,
                        None => {
                            issues.push(SchemaIssue::new(
                                path,
                                format!("Expected number, received \"{}\"", s),
                            ));
                            return None;
                        }
                    },
                }
            }
            other => {
                issues.push(SchemaIssue::new(
                    path,
                    format!("Expected number, received {}", type_name(other)),
                ));
                return None;
            }
        };

        let as_f64 = number.as_f64().unwrap_or(f64::NAN);
        if let Some(min) = self.min {
            if as_f64 < min {
                issues.push(SchemaIssue::new(path, format!("Must be at least {}", min)));
                return None;
            }
        }
        if let Some(max) = self.max {
            if as_f64 > max {
                issues.push(SchemaIssue::new(path, format!("Must be at most {}", max)));
                return None;
            }
        }
        Some(number)
    }

    fn check_length(&self, path: &str, len: usize, unit: &str, issues: &mut SchemaIssues) {
        if let Some(min) = self.min_len {
            if len < min {
                issues.push(SchemaIssue::new(path, format!("Must have at least {} {}", min, unit)));
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                issues.push(SchemaIssue::new(path, format!("Must have at most {} {}", max, unit)));
            }
        }
    }
}

/// Declarative validator for a JSON object of route parameters or query values
///
/// Issues for every field are collected in one pass. Unknown keys pass
/// through unchanged unless [`ObjectSchema::strict`] is set.
///
/// # Examples
///
/// ```
/// use rhtmx_links::schema::{Field, ObjectSchema, Schema};
/// use serde_json::json;
///
/// let schema = ObjectSchema::new().field("id", Field::numeric_string());
///
/// assert!(schema.parse(&json!({"id": "42"})).is_ok());
/// let issues = schema.parse(&json!({"id": "abc"})).unwrap_err();
/// assert_eq!(issues.get("id").unwrap().message, "Expected numeric string");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    fields: Vec<(String, Field)>,
    strict: bool,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        let name = name.into();
        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, field));
        self
    }

    /// Rejects keys that no field declares
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

impl Schema for ObjectSchema {
    fn parse(&self, candidate: &Value) -> Result<Value, SchemaIssues> {
        let empty = Map::new();
        let object = match candidate {
            Value::Object(object) => object,
            Value::Null => &empty,
            other => {
                return Err(SchemaIssues::single(
                    "",
                    format!("Expected object, received {}", type_name(other)),
                ))
            }
        };

        let mut issues = SchemaIssues::new();
        let mut output = Map::new();

        for (key, value) in object {
            match self.fields.iter().find(|(name, _)| name == key) {
                Some((_, field)) => {
                    if let Some(checked) = field.check(key, Some(value), &mut issues) {
                        output.insert(key.clone(), checked);
                    }
                }
                None if self.strict => {
                    issues.push(SchemaIssue::new(key.as_str(), "Unrecognized key"));
                }
                None => {
                    output.insert(key.clone(), value.clone());
                }
            }
        }

        for (name, field) in &self.fields {
            if object.contains_key(name) {
                continue;
            }
            if let Some(checked) = field.check(name, None, &mut issues) {
                output.insert(name.clone(), checked);
            }
        }

        if issues.is_empty() {
            Ok(Value::Object(output))
        } else {
            Err(issues)
        }
    }

    fn keys(&self) -> Option<Vec<String>> {
        Some(self.fields.iter().map(|(name, _)| name.clone()).collect())
    }
}

/// Schema backed by a serde type: the candidate is valid when it deserializes into `T`
///
/// The accepted value is `T` serialized back, so any normalization the type
/// performs (defaults, renames, numeric widening) shows up in the URL.
pub struct TypedSchema<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypedSchema<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for TypedSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn deserialize_candidate<T: DeserializeOwned>(candidate: &Value) -> Result<T, SchemaIssues> {
    serde_json::from_value(candidate.clone()).map_err(|e| SchemaIssues::single("", e.to_string()))
}

fn serialize_output<T: Serialize>(value: &T) -> Result<Value, SchemaIssues> {
    serde_json::to_value(value).map_err(|e| SchemaIssues::single("", e.to_string()))
}

impl<T> Schema for TypedSchema<T>
where
    T: DeserializeOwned + Serialize,
{
    fn parse(&self, candidate: &Value) -> Result<Value, SchemaIssues> {
        let parsed: T = deserialize_candidate(candidate)?;
        serialize_output(&parsed)
    }
}

/// Schema backed by a `garde::Validate` type
///
/// The candidate is deserialized into `T` and then run through garde's rules;
/// each entry of garde's report becomes one [`SchemaIssue`].
#[cfg(feature = "garde")]
pub struct GardeSchema<T> {
    _marker: PhantomData<fn() -> T>,
}

#[cfg(feature = "garde")]
impl<T> GardeSchema<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

#[cfg(feature = "garde")]
impl<T> Default for GardeSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "garde")]
impl<T> Schema for GardeSchema<T>
where
    T: DeserializeOwned + Serialize + garde::Validate,
    T::Context: Default,
{
    fn parse(&self, candidate: &Value) -> Result<Value, SchemaIssues> {
        let parsed: T = deserialize_candidate(candidate)?;
        parsed.validate().map_err(|report| {
            report
                .iter()
                .map(|(path, error)| SchemaIssue::new(path.to_string(), error.to_string()))
                .collect::<SchemaIssues>()
        })?;
        serialize_output(&parsed)
    }
}

/// Checks `candidate` against an optional schema
///
/// With no schema the candidate passes through unchanged. Otherwise the
/// schema's parsed value is returned, or its issues wrapped with the route
/// path that triggered them.
pub fn validate(
    schema: Option<&dyn Schema>,
    candidate: &Value,
    route_path: &str,
    target: ValidationTarget,
) -> Result<Value, ValidationError> {
    match schema {
        None => Ok(candidate.clone()),
        Some(schema) => schema
            .parse(candidate)
            .map_err(|issues| ValidationError::new(route_path, target, issues)),
    }
}

/// Like [`validate`], then deserializes the accepted value into `T`
pub fn validate_as<T: DeserializeOwned>(
    schema: Option<&dyn Schema>,
    candidate: &Value,
    route_path: &str,
    target: ValidationTarget,
) -> Result<T, ValidationError> {
    let accepted = validate(schema, candidate, route_path, target)?;
    serde_json::from_value(accepted).map_err(|e| {
        ValidationError::new(route_path, target, SchemaIssues::single("", e.to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_numeric_string() {
        let schema = ObjectSchema::new().field("id", Field::numeric_string());
        assert_eq!(schema.parse(&json!({"id": "42"})).unwrap(), json!({"id": "42"}));
        assert_eq!(schema.parse(&json!({"id": "-1.5"})).unwrap(), json!({"id": "-1.5"}));

        let issues = schema.parse(&json!({"id": "abc"})).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues.get("id").unwrap().message, "Expected numeric string");
    }

    #[test]
    fn test_required_and_optional() {
        let schema = ObjectSchema::new()
            .field("id", Field::string())
            .field("tab", Field::string().optional());

        let issues = schema.parse(&json!({})).unwrap_err();
        assert_eq!(issues.to_string(), "id: Required");

        assert_eq!(schema.parse(&json!({"id": "1", "tab": null})).unwrap(), json!({"id": "1"}));
    }

    #[test]
    fn test_default_applied_after_supplied_keys() {
        let schema = ObjectSchema::new()
            .field("page", Field::integer().default(1))
            .field("sort", Field::string());
        let parsed = schema.parse(&json!({"sort": "asc"})).unwrap();
        let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["sort", "page"]);
        assert_eq!(parsed["page"], json!(1));
    }

    #[test]
    fn test_coercion() {
        let schema = ObjectSchema::new()
            .field("page", Field::integer().coerce().min(1.0))
            .field("draft", Field::boolean().coerce())
            .field("tags", Field::list(Field::string()).coerce());

        let parsed = schema
            .parse(&json!({"page": "3", "draft": "false", "tags": "rust"}))
            .unwrap();
        assert_eq!(parsed, json!({"page": 3, "draft": false, "tags": ["rust"]}));

        let issues = schema.parse(&json!({"page": "0"})).unwrap_err();
        assert_eq!(issues.get("page").unwrap().message, "Must be at least 1");
    }

    #[test]
    fn test_without_coerce_types_are_strict() {
        let schema = ObjectSchema::new().field("page", Field::integer());
        let issues = schema.parse(&json!({"page": "3"})).unwrap_err();
        assert_eq!(issues.get("page").unwrap().message, "Expected number, received string");
    }

    #[test]
    fn test_collects_all_issues() {
        let schema = ObjectSchema::new()
            .field("slug", Field::slug())
            .field("sort", Field::string().one_of(["asc", "desc"]))
            .field("q", Field::string().min_len(2));
        let issues = schema
            .parse(&json!({"slug": "Hello World", "sort": "up", "q": "a"}))
            .unwrap_err();
        assert_eq!(issues.len(), 3);
        assert_eq!(issues.get("sort").unwrap().message, "Expected one of: asc, desc");
        assert_eq!(issues.get("q").unwrap().message, "Must have at least 2 characters");
    }

    #[test]
    fn test_list_item_paths() {
        let schema = ObjectSchema::new().field("ids", Field::list(Field::numeric_string()));
        let issues = schema.parse(&json!({"ids": ["1", "x"]})).unwrap_err();
        assert_eq!(issues.get("ids[1]").unwrap().message, "Expected numeric string");
    }

    #[test]
    fn test_strict_rejects_unknown_keys() {
        let loose = ObjectSchema::new().field("id", Field::string());
        assert_eq!(
            loose.parse(&json!({"id": "1", "extra": true})).unwrap(),
            json!({"id": "1", "extra": true})
        );

        let strict = loose.strict();
        let issues = strict.parse(&json!({"id": "1", "extra": true})).unwrap_err();
        assert_eq!(issues.get("extra").unwrap().message, "Unrecognized key");
    }

    #[test]
    fn test_non_object_candidate() {
        let schema = ObjectSchema::new();
        let issues = schema.parse(&json!("nope")).unwrap_err();
        assert_eq!(issues.to_string(), "Expected object, received string");
        assert_eq!(schema.parse(&Value::Null).unwrap(), json!({}));
    }

    #[test]
    fn test_keys() {
        let schema = ObjectSchema::new().field("a", Field::any()).field("b", Field::any());
        assert_eq!(schema.keys(), Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct UserParams {
        id: u32,
    }

    #[test]
    fn test_typed_schema() {
        let schema = TypedSchema::<UserParams>::new();
        assert_eq!(schema.parse(&json!({"id": 42})).unwrap(), json!({"id": 42}));
        assert!(schema.parse(&json!({"id": "abc"})).is_err());
        assert_eq!(schema.keys(), None);
    }

    #[test]
    fn test_closure_schema() {
        let schema = |value: &Value| -> Result<Value, SchemaIssues> {
            match value.get("id").and_then(Value::as_str) {
                Some(id) if !id.is_empty() => Ok(value.clone()),
                _ => Err(SchemaIssues::single("id", "Missing id")),
            }
        };
        assert!(schema.parse(&json!({"id": "x"})).is_ok());
        assert_eq!(schema.parse(&json!({})).unwrap_err().to_string(), "id: Missing id");
    }

    #[test]
    fn test_validate_without_schema_passes_through() {
        let candidate = json!({"anything": [1, 2]});
        let accepted = validate(None, &candidate, "/x", ValidationTarget::Params).unwrap();
        assert_eq!(accepted, candidate);
    }

    #[test]
    fn test_validate_reports_route_path() {
        let schema = ObjectSchema::new().field("id", Field::numeric_string());
        let err = validate(
            Some(&schema),
            &json!({"id": "abc"}),
            "/user/:id",
            ValidationTarget::Params,
        )
        .unwrap_err();
        assert_eq!(err.route_path, "/user/:id");
        assert_eq!(err.target, ValidationTarget::Params);
        assert_eq!(
            err.to_string(),
            "invalid params for route `/user/:id`: id: Expected numeric string"
        );
    }

    #[test]
    fn test_validate_as_typed() {
        let schema = ObjectSchema::new().field("id", Field::integer().coerce());
        let params: UserParams = validate_as(
            Some(&schema),
            &json!({"id": "7"}),
            "/user/:id",
            ValidationTarget::Params,
        )
        .unwrap();
        assert_eq!(params, UserParams { id: 7 });
    }

    #[cfg(feature = "garde")]
    #[derive(Debug, Serialize, Deserialize, garde::Validate)]
    struct SearchQuery {
        #[garde(length(min = 2))]
        q: String,
        #[garde(range(min = 1))]
        page: u32,
    }

    #[cfg(feature = "garde")]
    #[test]
    fn test_garde_schema() {
        let schema = GardeSchema::<SearchQuery>::new();
        assert!(schema.parse(&json!({"q": "rust", "page": 1})).is_ok());

        let issues = schema.parse(&json!({"q": "r", "page": 0})).unwrap_err();
        assert_eq!(issues.len(), 2);
        assert!(issues.get("q").is_some());
        assert!(issues.get("page").is_some());
    }
}
