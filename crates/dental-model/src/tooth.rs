//! Tooth identifiers.
//!
//! Upstream records carry tooth numbers in several encodings (numbers,
//! strings, two-digit FDI ids, bare single-digit legacy positions).
//! [`ToothRef`] keeps the raw value as received; [`ToothPosition`] is the
//! canonical quadrant/position pair the rest of the pipeline works with.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ModelError, Result};

/// Quadrant value used for bare single-digit references.
pub const LEGACY_QUADRANT: u8 = 0;

/// A raw tooth reference as supplied by the persistence layer.
///
/// Integral JSON floats (`11.0`) load as numbers. Any other value that is
/// neither an integer nor a string loads as [`ToothRef::Unresolved`] so one
/// malformed tooth never rejects the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToothRef {
    Number(i64),
    Text(String),
    Unresolved,
}

impl ToothRef {
    /// Canonical textual form: trimmed text, or the decimal rendering of a number.
    pub fn canonical_text(&self) -> Cow<'_, str> {
        match self {
            ToothRef::Number(value) => Cow::Owned(value.to_string()),
            ToothRef::Text(value) => Cow::Borrowed(value.trim()),
            ToothRef::Unresolved => Cow::Borrowed(""),
        }
    }
}

impl<'de> Deserialize<'de> for ToothRef {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ToothRefVisitor;

        impl<'de> Visitor<'de> for ToothRefVisitor {
            type Value = ToothRef;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a tooth number or string")
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<ToothRef, E> {
                Ok(ToothRef::Number(value))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<ToothRef, E> {
                Ok(i64::try_from(value).map_or(ToothRef::Unresolved, ToothRef::Number))
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<ToothRef, E> {
                // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
                let integral = value.fract() == 0.0
                    && value >= i64::MIN as f64
                    && value < i64::MAX as f64;
                if integral {
                    Ok(ToothRef::Number(value as i64))
                } else {
                    Ok(ToothRef::Unresolved)
                }
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<ToothRef, E> {
                Ok(ToothRef::Text(value.to_string()))
            }

            fn visit_string<E: de::Error>(self, value: String) -> std::result::Result<ToothRef, E> {
                Ok(ToothRef::Text(value))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> std::result::Result<ToothRef, E> {
                Ok(ToothRef::Unresolved)
            }

            fn visit_unit<E: de::Error>(self) -> std::result::Result<ToothRef, E> {
                Ok(ToothRef::Unresolved)
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<ToothRef, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(ToothRef::Unresolved)
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<ToothRef, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(ToothRef::Unresolved)
            }
        }

        deserializer.deserialize_any(ToothRefVisitor)
    }
}

impl From<i64> for ToothRef {
    fn from(value: i64) -> Self {
        ToothRef::Number(value)
    }
}

impl From<&str> for ToothRef {
    fn from(value: &str) -> Self {
        ToothRef::Text(value.to_string())
    }
}

impl From<String> for ToothRef {
    fn from(value: String) -> Self {
        ToothRef::Text(value)
    }
}

impl fmt::Display for ToothRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_text())
    }
}

/// Canonical identity of a tooth.
///
/// Equality and hashing go through [`ToothPosition::composite_id`].
/// Quadrant 0 marks an ambiguous legacy reference that only knows its
/// position; see [`ToothPosition::matches_legacy`].
#[derive(Debug, Clone, Copy)]
pub struct ToothPosition {
    quadrant: u8,
    position: u8,
}

impl ToothPosition {
    /// Strict constructor: quadrant 1-4 and position 1-8.
    pub fn new(quadrant: u8, position: u8) -> Result<Self> {
        if !(1..=4).contains(&quadrant) {
            return Err(ModelError::InvalidQuadrant(quadrant));
        }
        if !(1..=8).contains(&position) {
            return Err(ModelError::InvalidPosition(position));
        }
        Ok(Self { quadrant, position })
    }

    /// Unvalidated constructor for best-effort normalization of stored data.
    pub fn lenient(quadrant: u8, position: u8) -> Self {
        Self { quadrant, position }
    }

    pub fn quadrant(&self) -> u8 {
        self.quadrant
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn is_legacy(&self) -> bool {
        self.quadrant == LEGACY_QUADRANT
    }

    pub fn composite_id(&self) -> u16 {
        composite_id(self.quadrant, self.position)
    }

    /// Exact match, or a quadrant-0 reference on either side sharing the
    /// same position.
    ///
    /// Kept for records written before quadrants were stored.
    pub fn matches_legacy(&self, other: &ToothPosition) -> bool {
        if self == other {
            return true;
        }
        (self.is_legacy() || other.is_legacy()) && self.position == other.position
    }
}

/// `quadrant * 10 + position` for quadrants 1-4; the bare position for quadrant 0.
pub fn composite_id(quadrant: u8, position: u8) -> u16 {
    if quadrant == LEGACY_QUADRANT {
        u16::from(position)
    } else {
        u16::from(quadrant) * 10 + u16::from(position)
    }
}

impl PartialEq for ToothPosition {
    fn eq(&self, other: &Self) -> bool {
        self.composite_id() == other.composite_id()
    }
}

impl Eq for ToothPosition {}

impl Hash for ToothPosition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.composite_id().hash(state);
    }
}

impl fmt::Display for ToothPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.composite_id())
    }
}

impl FromStr for ToothPosition {
    type Err = ModelError;

    /// Strict parse of a two-digit tooth id such as `"11"` or `"48"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let bytes = trimmed.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ModelError::InvalidToothId(s.to_string()));
        }
        ToothPosition::new(bytes[0] - b'0', bytes[1] - b'0')
    }
}

impl Serialize for ToothPosition {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.composite_id())
    }
}
