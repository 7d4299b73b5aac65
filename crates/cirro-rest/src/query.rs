//! Ordered query parameters.

use crate::error::{Error, ErrorKind, Result};

/// An ordered key → multivalue mapping appended to request URLs.
///
/// Values are passed through to the service opaquely: filter expressions,
/// field selections, and limits are encoded the way the service expects them
/// and are not interpreted locally. Repeating a key sends it more than once.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key/value pair, preserving insertion order.
    pub fn append(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Returns true if no parameters have been added.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of key/value pairs.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Encode as a urlencoded query string, in insertion order.
    pub(crate) fn encode(&self) -> Result<String> {
        serde_urlencoded::to_string(&self.params)
            .map_err(|e| Error::with_source(ErrorKind::Other(format!("query encoding: {e}")), e))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
