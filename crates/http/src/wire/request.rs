//! Outbound HTTP request construction.
//!
//! A [`WireRequest`] is built from the properties and headers of a [`MessageView`]:
//!
//! - method from `HTTP_METHOD`, default `POST`
//! - version from `HTTP_VERSION`, default `HTTP/1.1`
//! - target from `TO`, default `/`
//!
//! Building is split in two steps. [`normalize`] records the default target on the message
//! itself so later readers of the message see the path that was actually sent, and
//! [`create_request`] is a pure read of the message. [`build_request`] runs both.

use http::{Method, Request, Uri, Version};
use tracing::debug;

use crate::protocol::property::{HTTP_METHOD, HTTP_VERSION, TO};
use crate::protocol::MessageView;
use crate::wire::header::{write_headers, HttpMessage, WireHeaders};
use crate::wire::version::{parse_version, DEFAULT_VERSION};
use crate::wire::WireError;

const DEFAULT_METHOD: &str = "POST";
const DEFAULT_PATH: &str = "/";

/// An outbound HTTP request head.
#[derive(Debug, Clone, PartialEq)]
pub struct WireRequest {
    method: Method,
    uri: Uri,
    version: Version,
    headers: WireHeaders,
}

impl WireRequest {
    pub fn new(method: Method, uri: Uri, version: Version) -> Self {
        Self { method, uri, version, headers: WireHeaders::new() }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Converts into a bodyless `http::Request` for I/O layers built on the `http` crate.
    ///
    /// # Errors
    ///
    /// Fails when a header name or value cannot be represented by `http::HeaderMap`.
    pub fn into_http(self) -> Result<Request<()>, WireError> {
        let headers = self.headers.to_header_map()?;
        let mut request = Request::builder().method(self.method).uri(self.uri).version(self.version).body(())?;
        *request.headers_mut() = headers;
        Ok(request)
    }
}

impl HttpMessage for WireRequest {
    #[inline]
    fn headers(&self) -> &WireHeaders {
        &self.headers
    }

    #[inline]
    fn headers_mut(&mut self) -> &mut WireHeaders {
        &mut self.headers
    }
}

impl TryFrom<WireRequest> for Request<()> {
    type Error = WireError;

    fn try_from(request: WireRequest) -> Result<Self, Self::Error> {
        request.into_http()
    }
}

/// Returns the request target of `view`, `/` when `TO` is absent.
///
/// Does not modify the message.
pub fn resolve_path<M: MessageView + ?Sized>(view: &M) -> Result<&str, WireError> {
    Ok(view.properties().get_or(TO, DEFAULT_PATH)?)
}

/// Records the default request target on `view` when `TO` is absent.
///
/// # Errors
///
/// Fails when `TO` is present but not a string; the message is left untouched then.
pub fn normalize<M: MessageView + ?Sized>(view: &mut M) -> Result<(), WireError> {
    let properties = view.properties_mut();
    if properties.try_get::<&str>(TO)?.is_none() {
        debug!(path = DEFAULT_PATH, "request target not set, using default");
        properties.set(TO, DEFAULT_PATH);
    }
    Ok(())
}

/// Builds a [`WireRequest`] from `view` without modifying it.
pub fn create_request<M: MessageView + ?Sized>(view: &M) -> Result<WireRequest, WireError> {
    let properties = view.properties();

    let method_text = properties.get_or(HTTP_METHOD, DEFAULT_METHOD)?;
    let method = Method::from_bytes(method_text.as_bytes()).map_err(|_| WireError::invalid_method(method_text))?;

    let version = parse_version(properties.get_or(HTTP_VERSION, DEFAULT_VERSION)?)?;

    let path = resolve_path(view)?;
    let uri = Uri::try_from(path).map_err(|_| WireError::invalid_uri(path))?;

    let mut request = WireRequest::new(method, uri, version);
    write_headers(&mut request, view.headers());
    Ok(request)
}

/// Normalizes `view` and builds a [`WireRequest`] from it.
///
/// After this returns, `TO` on `view` holds the target the request was built with.
pub fn build_request<M: MessageView + ?Sized>(view: &mut M) -> Result<WireRequest, WireError> {
    normalize(view)?;
    create_request(view)
}
