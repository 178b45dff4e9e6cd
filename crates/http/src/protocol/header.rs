//! Transport-neutral header collection.
//!
//! [`Headers`] keeps headers exactly as the message pipeline supplied them: insertion
//! order is significant, duplicate names stay distinct entries and names are never
//! case-normalized. This differs from `http::HeaderMap`, which lowercases names, so the
//! wire layer has its own container and only folds case when converting into `http` types.

use http::HeaderMap;

/// A single `name: value` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    name: String,
    value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.value)
    }
}

/// Ordered header set, duplicates preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    inner: Vec<Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { inner: Vec::with_capacity(capacity) }
    }

    /// Appends a header, keeping any existing entry with the same name.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push(Header::new(name, value));
    }

    pub fn push(&mut self, header: Header) {
        self.inner.push(header);
    }

    /// Returns the value of the first header matching `name`, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.iter().find(|h| h.name.eq_ignore_ascii_case(name)).map(Header::value)
    }

    /// Returns every value stored under `name`, ignoring ASCII case, in insertion order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inner.iter().filter(move |h| h.name.eq_ignore_ascii_case(name)).map(Header::value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.inner.iter()
    }
}

impl From<Vec<Header>> for Headers {
    fn from(inner: Vec<Header>) -> Self {
        Self { inner }
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<I: IntoIterator<Item = Header>>(iter: I) -> Self {
        Self { inner: iter.into_iter().collect() }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Headers {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter().map(|(name, value)| Header::new(name, value)).collect()
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

/// Collects the headers of an inbound message decoded by an `http`-based I/O layer.
///
/// Names come out lowercased since `HeaderMap` does not keep the original case. Values
/// that are not valid UTF-8 are converted lossily.
impl From<&HeaderMap> for Headers {
    fn from(map: &HeaderMap) -> Self {
        map.iter()
            .map(|(name, value)| Header::new(name.as_str(), String::from_utf8_lossy(value.as_bytes())))
            .collect()
    }
}
