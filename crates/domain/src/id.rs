//! Record identifier.
//!
//! Server-generated identifiers are short, URL-safe strings. An identifier
//! supplied by a client is kept exactly as sent, whatever its JSON type, so an
//! [`EventoId`] wraps any JSON value.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of characters in a generated identifier.
pub const GENERATED_ID_LEN: usize = 8;

/// URL-safe alphabet that generated identifiers are drawn from.
const ALPHABET: &[u8; 64] = b"useandom-26T198340PX75pxJACKVERYMINDBUSHWOLF_GQZbfghjklqvwyzrict";

/// Positions of fully random bytes in a v4 UUID (6 and 8 hold version and variant bits).
const RANDOM_BYTES: [usize; GENERATED_ID_LEN] = [0, 1, 2, 3, 4, 5, 7, 9];

/// Identifier of an [`Evento`](crate::evento::Evento).
///
/// Two identifiers match when they are equal, or when both are scalars with
/// the same text: the path segment `42` matches a stored `"42"` or `42`.
/// Objects, arrays and `null` only match an identical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", schema(value_type = String))]
pub struct EventoId(Value);

impl EventoId {
    /// Generate a new random identifier of [`GENERATED_ID_LEN`] characters.
    #[must_use]
    pub fn generate() -> Self {
        let bytes = uuid::Uuid::new_v4().into_bytes();
        let id = RANDOM_BYTES
            .iter()
            .map(|&index| char::from(ALPHABET[usize::from(bytes[index] & 63)]))
            .collect();
        Self(Value::String(id))
    }

    /// The identifier as a string slice, when it is a JSON string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }

    /// Whether `self` and `other` designate the same record.
    #[must_use]
    pub fn matches(&self, other: &EventoId) -> bool {
        if self == other {
            return true;
        }
        match (self.text(), other.text()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    fn text(&self) -> Option<Cow<'_, str>> {
        match &self.0 {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for EventoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

impl From<Value> for EventoId {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<String> for EventoId {
    fn from(value: String) -> Self {
        Self(Value::String(value))
    }
}

impl From<&str> for EventoId {
    fn from(value: &str) -> Self {
        Self(Value::String(value.to_string()))
    }
}
