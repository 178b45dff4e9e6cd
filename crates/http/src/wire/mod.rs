//! Conversion between transport messages and wire-level HTTP objects.
//!
//! - Header adaptation ([`header`]): [`read_headers`] and [`write_headers`] move an
//!   ordered [`Headers`](crate::protocol::Headers) set in and out of [`WireHeaders`]
//! - Requests ([`request`]): [`build_request`] and its pure building blocks
//! - Responses ([`response`]): [`build_response`]
//!
//! Builders keep no state between calls and may be used from any number of threads.
//! Every builder copies the message headers verbatim; the only header processing happens
//! when a wire object is converted into an `http` crate type.

pub mod header;
pub use header::read_headers;
pub use header::write_headers;
pub use header::HttpMessage;
pub use header::WireHeaders;

pub mod request;
pub use request::build_request;
pub use request::create_request;
pub use request::normalize;
pub use request::resolve_path;
pub use request::WireRequest;

pub mod response;
pub use response::build_response;
pub use response::reason_phrase;
pub use response::ResponseHead;
pub use response::WireResponse;

mod version;
pub use version::parse_version;

mod error;
pub use error::WireError;
