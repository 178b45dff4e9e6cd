use http::Version;

use crate::wire::WireError;

pub(crate) const DEFAULT_VERSION: &str = "HTTP/1.1";

/// Parses a protocol version such as `"HTTP/1.1"`, ignoring ASCII case and surrounding
/// whitespace.
pub fn parse_version(text: &str) -> Result<Version, WireError> {
    let version = match text.trim().to_ascii_uppercase().as_str() {
        "HTTP/0.9" => Version::HTTP_09,
        "HTTP/1.0" => Version::HTTP_10,
        "HTTP/1.1" => Version::HTTP_11,
        "HTTP/2" | "HTTP/2.0" => Version::HTTP_2,
        "HTTP/3" | "HTTP/3.0" => Version::HTTP_3,
        _ => return Err(WireError::invalid_version(text)),
    };
    Ok(version)
}
