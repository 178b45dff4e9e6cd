//! HTTP transport core: message to wire conversion and endpoint TLS configuration
//!
//! This crate sits between a message pipeline and a network I/O layer. It turns
//! transport-neutral messages into wire-level HTTP request and response heads, and it
//! validates the TLS settings of listening and sending endpoints before any socket is
//! opened.
//!
//! # Example
//!
//! ```
//! use http::{Method, StatusCode};
//! use transport_http::protocol::property::{HTTP_STATUS_CODE, TO};
//! use transport_http::protocol::{MessageView, TransportMessage};
//! use transport_http::wire::{build_request, build_response, read_headers};
//!
//! let mut message = TransportMessage::new().with_header("Content-Type", "application/json");
//!
//! let request = build_request(&mut message)?;
//! assert_eq!(request.method(), &Method::POST);
//! assert_eq!(request.uri().path(), "/");
//! assert_eq!(read_headers(&request), *message.headers());
//! assert!(message.properties().contains(TO));
//!
//! let message = message.with_property(HTTP_STATUS_CODE, 202_i64);
//! let response = build_response(&message)?;
//! assert_eq!(response.status(), StatusCode::ACCEPTED);
//! assert_eq!(response.reason(), "Accepted");
//! # Ok::<(), transport_http::wire::WireError>(())
//! ```
//!
//! # Architecture
//!
//! - [`protocol`]: the transport-neutral message model, headers and typed properties
//! - [`wire`]: header adaptation and the request/response builders
//! - [`ssl`]: listener and sender TLS configuration
//!
//! # Error Handling
//!
//! - [`protocol::PropertyError`]: a property holds a value of the wrong type
//! - [`wire::WireError`]: a message cannot be expressed as an HTTP head
//! - [`ssl::ConfigError`]: missing credentials or store files
//!
//! A property of the wrong type is never replaced by a default; it surfaces as an error
//! so type confusion in the pipeline is not masked.
//!
//! # Limitations
//!
//! - No body handling; bodies are streamed by the I/O layer
//! - Store files are only checked for existence, their format is left to the TLS engine

pub mod protocol;
pub mod ssl;
pub mod wire;

mod utils;
pub(crate) use utils::ensure;
