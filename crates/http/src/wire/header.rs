//! Header adapter between [`Headers`] and the header container of wire messages.
//!
//! [`WireHeaders`] is a multi-valued, order preserving container that keeps header names
//! exactly as written. Writing a [`Headers`] set onto a wire message always appends, so
//! reading the headers back yields the same sequence, duplicates included.

use http::{HeaderMap, HeaderName, HeaderValue};
use tracing::trace;

use crate::protocol::{Header, Headers};
use crate::wire::WireError;

/// Header container of a [`WireRequest`](crate::wire::WireRequest) or
/// [`WireResponse`](crate::wire::WireResponse).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WireHeaders {
    entries: Vec<(String, String)>,
}

impl WireHeaders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry without touching entries already stored under `name`.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the first value stored under `name`, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries().find(|(n, _)| n.eq_ignore_ascii_case(name)).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional);
    }

    /// Converts into an `http::HeaderMap`, lowercasing names on the way.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::InvalidHeader`] when a name is not a valid header token or a
    /// value contains bytes not allowed in a header field.
    pub fn to_header_map(&self) -> Result<HeaderMap, WireError> {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        for (name, value) in self.entries() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| WireError::invalid_header(format!("{name}: {e}")))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| WireError::invalid_header(format!("{name}: {e}")))?;
            map.append(header_name, header_value);
        }
        Ok(map)
    }
}

/// A wire-level HTTP message carrying a [`WireHeaders`] container.
pub trait HttpMessage {
    fn headers(&self) -> &WireHeaders;

    fn headers_mut(&mut self) -> &mut WireHeaders;
}

/// Enumerates the headers of `message` into a new [`Headers`] set.
pub fn read_headers<M: HttpMessage + ?Sized>(message: &M) -> Headers {
    let wire_headers = message.headers();
    let mut headers = Headers::with_capacity(wire_headers.len());
    for (name, value) in wire_headers.entries() {
        headers.push(Header::new(name, value));
    }
    headers
}

/// Appends every header of `headers` onto `message`.
///
/// Existing entries are kept; entries sharing a name stay distinct and no case folding
/// happens.
pub fn write_headers<M: HttpMessage + ?Sized>(message: &mut M, headers: &Headers) {
    let wire_headers = message.headers_mut();
    wire_headers.reserve(headers.len());
    for header in headers {
        trace!(name = header.name(), "append header");
        wire_headers.append(header.name(), header.value());
    }
}
