//! Transport-neutral message model.
//!
//! The message pipeline describes an outbound message with a property map and an ordered
//! header set; the [`wire`](crate::wire) builders turn it into an HTTP request or response.
//!
//! - **Headers** (`header`): ordered, case-preserving header set
//!   - [`Header`]: a single name/value pair
//!   - [`Headers`]: the ordered collection, duplicates kept
//!
//! - **Properties** ([`property`]): typed property values and strict accessors
//!   - [`PropertyValue`]: string, integer or boolean value
//!   - [`Properties`]: the property map with `get_string`/`get_int`/`get_bool`
//!
//! - **Messages** (`message`): the [`MessageView`] seam and the in-memory
//!   [`TransportMessage`]
//!
//! - **Errors** (`error`): [`PropertyError`] for type-confused property lookups

mod header;
pub use header::Header;
pub use header::Headers;

pub mod property;
pub use property::FromProperty;
pub use property::Properties;
pub use property::PropertyKind;
pub use property::PropertyValue;

mod message;
pub use message::MessageView;
pub use message::TransportMessage;

mod error;
pub use error::PropertyError;
