use crate::protocol::{Headers, Properties, PropertyValue};

/// A transport-neutral message as seen by the wire builders.
///
/// The message pipeline owns the concrete message type; the builders only need its
/// properties and headers. Properties are mutable because request normalization may
/// record the default target path on the message.
pub trait MessageView {
    fn properties(&self) -> &Properties;

    fn properties_mut(&mut self) -> &mut Properties;

    fn headers(&self) -> &Headers;
}

/// Plain in-memory message with a property map and an ordered header set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransportMessage {
    properties: Properties,
    headers: Headers,
}

impl TransportMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(properties: Properties, headers: Headers) -> Self {
        Self { properties, headers }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.set(key, value);
        self
    }

    /// Builder-style header append.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.properties.set(key, value)
    }

    pub fn remove_property(&mut self, key: &str) -> Option<PropertyValue> {
        self.properties.remove(key)
    }

    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    pub fn into_parts(self) -> (Properties, Headers) {
        (self.properties, self.headers)
    }
}

impl MessageView for TransportMessage {
    #[inline]
    fn properties(&self) -> &Properties {
        &self.properties
    }

    #[inline]
    fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    #[inline]
    fn headers(&self) -> &Headers {
        &self.headers
    }
}
