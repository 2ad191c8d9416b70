//! Request descriptor and query-string types shared by both API clients.

use reqwest::Method;
use serde::Serialize;

/// Query-string parameters for a single request.
///
/// Absent and empty-string values are dropped when inserted, so a filter
/// the caller left out never reaches the URL as `key=`. Whitespace is a
/// real value and is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key=value` unless the value is `None` or the empty string.
    pub fn with<V: ToString>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            let value = value.to_string();
            if !value.is_empty() {
                self.pairs.push((key.to_string(), value));
            }
        }
        self
    }

    /// Adds an enum value using its serde string form.
    ///
    /// # Errors
    ///
    /// Fails if the value does not serialize to a JSON string.
    pub fn with_enum<E: Serialize>(
        self,
        key: &str,
        value: Option<&E>,
    ) -> Result<Self, serde_json::Error> {
        let value = match value {
            Some(value) => match serde_json::to_value(value)? {
                serde_json::Value::String(s) => Some(s),
                other => {
                    return Err(serde::ser::Error::custom(format!(
                        "query parameter `{}` must serialize to a string, got {}",
                        key, other
                    )))
                }
            },
            None => None,
        };
        Ok(self.with(key, value))
    }

    /// Returns true if no parameter survived filtering.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The surviving `(key, value)` pairs in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Describes one HTTP call against an API base URL.
///
/// Built fresh for every operation and consumed by the transport.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Path relative to the API base, optionally carrying a fixed query
    /// suffix such as `?reload=true`.
    pub path: String,
    /// JSON body for writes.
    pub body: Option<serde_json::Value>,
    /// Optional query parameters.
    pub query: QueryParams,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            query: QueryParams::new(),
        }
    }

    /// GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Attaches a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Attaches query parameters.
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }
}

/// Percent-encodes one path segment so an identifier cannot alter the route.
pub fn segment(id: impl ToString) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

/// Inserts `value` under `key` when present.
pub(crate) fn insert_opt<T: Serialize>(
    map: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    value: Option<T>,
) -> Result<(), serde_json::Error> {
    if let Some(value) = value {
        map.insert(key.to_string(), serde_json::to_value(value)?);
    }
    Ok(())
}
