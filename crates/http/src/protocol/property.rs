//! Typed message properties.
//!
//! Properties travel with a message through the pipeline and steer how it is put on the
//! wire. Lookups fall back to a default only when the key is absent; a value stored under
//! the wrong type is a caller bug and is reported as [`PropertyError::TypeMismatch`].

use std::collections::HashMap;
use std::fmt;

use crate::protocol::PropertyError;

/// HTTP method of an outbound request, e.g. `"GET"`.
pub const HTTP_METHOD: &str = "HTTP_METHOD";
/// Protocol version of an outbound request or response, e.g. `"HTTP/1.1"`.
pub const HTTP_VERSION: &str = "HTTP_VERSION";
/// Integer status code of an outbound response.
pub const HTTP_STATUS_CODE: &str = "HTTP_STATUS_CODE";
/// Request target path of an outbound request.
pub const TO: &str = "TO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Str(String),
    Int(i64),
    Bool(bool),
}

/// Discriminant of a [`PropertyValue`], used in mismatch reports.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PropertyKind {
    Str,
    Int,
    Bool,
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyKind::Str => "string",
            PropertyKind::Int => "integer",
            PropertyKind::Bool => "boolean",
        };
        f.write_str(name)
    }
}

impl PropertyValue {
    pub fn kind(&self) -> PropertyKind {
        match self {
            PropertyValue::Str(_) => PropertyKind::Str,
            PropertyValue::Int(_) => PropertyKind::Int,
            PropertyValue::Bool(_) => PropertyKind::Bool,
        }
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Str(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Str(value.to_owned())
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<u16> for PropertyValue {
    fn from(value: u16) -> Self {
        PropertyValue::Int(value.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

/// Borrowing extraction of a concrete type out of a [`PropertyValue`].
pub trait FromProperty<'a>: Sized {
    const KIND: PropertyKind;

    fn from_property(value: &'a PropertyValue) -> Option<Self>;
}

impl<'a> FromProperty<'a> for &'a str {
    const KIND: PropertyKind = PropertyKind::Str;

    fn from_property(value: &'a PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl<'a> FromProperty<'a> for i64 {
    const KIND: PropertyKind = PropertyKind::Int;

    fn from_property(value: &'a PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl<'a> FromProperty<'a> for bool {
    const KIND: PropertyKind = PropertyKind::Bool;

    fn from_property(value: &'a PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// String-keyed property map of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    inner: HashMap<String, PropertyValue>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.inner.get(key)
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<PropertyValue> {
        self.inner.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Looks up `key` as a `T`.
    ///
    /// Returns `Ok(None)` when the key is absent and an error when it holds another type.
    pub fn try_get<'a, T: FromProperty<'a>>(&'a self, key: &str) -> Result<Option<T>, PropertyError> {
        match self.inner.get(key) {
            None => Ok(None),
            Some(value) => T::from_property(value)
                .map(Some)
                .ok_or_else(|| PropertyError::type_mismatch(key, T::KIND, value.kind())),
        }
    }

    /// Looks up `key` as a `T`, returning `default` when the key is absent.
    pub fn get_or<'a, T: FromProperty<'a>>(&'a self, key: &str, default: T) -> Result<T, PropertyError> {
        self.try_get(key).map(|value| value.unwrap_or(default))
    }

    pub fn get_string(&self, key: &str, default: &str) -> Result<String, PropertyError> {
        self.get_or::<&str>(key, default).map(str::to_owned)
    }

    pub fn get_int(&self, key: &str, default: i64) -> Result<i64, PropertyError> {
        self.get_or(key, default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> Result<bool, PropertyError> {
        self.get_or(key, default)
    }
}

impl<K: Into<String>, V: Into<PropertyValue>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { inner: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
