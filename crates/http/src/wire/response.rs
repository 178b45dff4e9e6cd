//! Outbound HTTP response construction.
//!
//! The response head takes its version from `HTTP_VERSION` (default `HTTP/1.1`) and its
//! status from `HTTP_STATUS_CODE` (default `200`). The reason phrase is the standard one
//! for the code; codes without a registered phrase get the name of their class.

use http::{Response, StatusCode, Version};

use crate::protocol::property::{HTTP_STATUS_CODE, HTTP_VERSION};
use crate::protocol::MessageView;
use crate::wire::header::{write_headers, HttpMessage, WireHeaders};
use crate::wire::version::{parse_version, DEFAULT_VERSION};
use crate::wire::WireError;

const DEFAULT_STATUS_CODE: i64 = 200;

/// Header portion of a response as understood by `http`-based I/O layers.
pub type ResponseHead = Response<()>;

/// An outbound HTTP response head.
#[derive(Debug, Clone, PartialEq)]
pub struct WireResponse {
    version: Version,
    status: StatusCode,
    reason: &'static str,
    headers: WireHeaders,
}

impl WireResponse {
    /// Creates a response head with the standard reason phrase of `status`.
    pub fn new(version: Version, status: StatusCode) -> Self {
        Self { version, status, reason: reason_phrase(status), headers: WireHeaders::new() }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn reason(&self) -> &'static str {
        self.reason
    }

    /// Converts into a [`ResponseHead`].
    ///
    /// The reason phrase is dropped since `http::Response` derives it from the status.
    ///
    /// # Errors
    ///
    /// Fails when a header name or value cannot be represented by `http::HeaderMap`.
    pub fn into_http(self) -> Result<ResponseHead, WireError> {
        let headers = self.headers.to_header_map()?;
        let mut response = Response::builder().status(self.status).version(self.version).body(())?;
        *response.headers_mut() = headers;
        Ok(response)
    }
}

impl HttpMessage for WireResponse {
    #[inline]
    fn headers(&self) -> &WireHeaders {
        &self.headers
    }

    #[inline]
    fn headers_mut(&mut self) -> &mut WireHeaders {
        &mut self.headers
    }
}

impl TryFrom<WireResponse> for ResponseHead {
    type Error = WireError;

    fn try_from(response: WireResponse) -> Result<Self, Self::Error> {
        response.into_http()
    }
}

/// Standard reason phrase of `status`, or the name of its class when none is registered.
pub fn reason_phrase(status: StatusCode) -> &'static str {
    if let Some(reason) = status.canonical_reason() {
        return reason;
    }

    match status.as_u16() {
        100..=199 => "Informational",
        200..=299 => "Successful",
        300..=399 => "Redirection",
        400..=499 => "Client Error",
        500..=599 => "Server Error",
        _ => "Unknown Status",
    }
}

/// Builds a [`WireResponse`] from `view`.
pub fn build_response<M: MessageView + ?Sized>(view: &M) -> Result<WireResponse, WireError> {
    let properties = view.properties();

    let version = parse_version(properties.get_or(HTTP_VERSION, DEFAULT_VERSION)?)?;

    let code = properties.get_int(HTTP_STATUS_CODE, DEFAULT_STATUS_CODE)?;
    let status = u16::try_from(code)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .ok_or(WireError::invalid_status(code))?;

    let mut response = WireResponse::new(version, status);
    write_headers(&mut response, view.headers());
    Ok(response)
}
