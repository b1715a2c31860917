/// Query-string assembly
///
/// Keys keep the order the caller inserted them in. Absent values are
/// skipped, lists become repeated keys and everything is percent-encoded.

use crate::value::{ParamValue, Query};

fn push_pair(out: &mut String, key: &str, value: &ParamValue) {
    if !out.is_empty() {
        out.push('&');
    }
    out.push_str(&urlencoding::encode(key));
    out.push('=');
    out.push_str(&urlencoding::encode(&value.to_string()));
}

/// Serializes a query into `key=value&...` form (no leading `?`)
///
/// # Examples
///
/// ```
/// use rhtmx_links::query::serialize_query;
/// use rhtmx_links::Query;
///
/// let query = Query::new().with("page", 2).with("sort", "asc");
/// assert_eq!(serialize_query(&query), "page=2&sort=asc");
///
/// let query = Query::new().absent("page").with("sort", "asc");
/// assert_eq!(serialize_query(&query), "sort=asc");
/// ```
pub fn serialize_query(query: &Query) -> String {
    let mut out = String::new();
    for (key, value) in query.present() {
        match value {
            ParamValue::List(items) => {
                for item in items {
                    push_pair(&mut out, key, item);
                }
            }
            scalar => push_pair(&mut out, key, scalar),
        }
    }
    out
}

/// Joins a path and a query with a single `?`, omitted when the query is empty
pub fn append_query(path: &str, query: &Query) -> String {
    let encoded = serialize_query(query);
    if encoded.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, encoded)
    }
}
