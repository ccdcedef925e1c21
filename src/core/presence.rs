//! # Tri-state request fields
//!
//! This module contains the [`Presence`] type used by update requests to
//! distinguish fields that should be left untouched, cleared, or assigned.
//!
//! [`Presence`]: enum.Presence.html

use crate::core::XmsError;
use serde::{Serialize, Serializer};

/// Tri-state wrapper for an updatable request field.
///
/// The XMS API treats a key that is missing from an update payload, a key
/// set to JSON `null`, and a key set to a value as three different
/// operations: keep, clear, and assign. [`Presence`] makes the three states
/// explicit:
///
/// * [`Presence::Absent`] — the field is omitted from the payload,
/// * [`Presence::Reset`] — the field is emitted as JSON `null`,
/// * [`Presence::Value`] — the field is emitted with the given value.
///
/// A field left at its default is `Absent`; it only ever transitions to
/// `Reset` or `Value` through explicit assignment.
///
/// # Examples
/// ```
/// use xms::core::Presence;
///
/// let mut name: Presence<String> = Presence::absent();
/// assert!(name.is_absent());
///
/// name = Presence::of("new name".to_string());
/// assert_eq!(name.value().unwrap(), "new name");
///
/// name = Presence::reset();
/// assert!(name.is_reset());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence<T> {
    /// The field is not part of the update and is omitted from the payload.
    #[default]
    Absent,

    /// The field is cleared on the server and serializes to JSON `null`.
    Reset,

    /// The field is assigned the wrapped value.
    Value(T),
}

impl<T> Presence<T> {
    /// Create a field that is left out of the update.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Create a field that clears the current server-side value.
    pub fn reset() -> Self {
        Self::Reset
    }

    /// Create a field that assigns the given value.
    pub fn of(value: T) -> Self {
        Self::Value(value)
    }

    /// Whether the field is omitted from the payload.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the field serializes to an explicit `null`.
    pub fn is_reset(&self) -> bool {
        matches!(self, Self::Reset)
    }

    /// Borrow the assigned value.
    ///
    /// # Errors
    /// Returns [`XmsError::InvalidStateError`] if the field does not hold a
    /// value.
    pub fn value(&self) -> Result<&T, XmsError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Absent => Err(XmsError::InvalidStateError(
                "no value to read: field is absent".into(),
            )),
            Self::Reset => Err(XmsError::InvalidStateError(
                "no value to read: field is reset".into(),
            )),
        }
    }

    /// Borrow the wrapped value, keeping the tri-state.
    pub fn as_ref(&self) -> Presence<&T> {
        match self {
            Self::Absent => Presence::Absent,
            Self::Reset => Presence::Reset,
            Self::Value(value) => Presence::Value(value),
        }
    }

    /// Map the wrapped value, keeping the tri-state.
    pub fn map<U, F>(self, f: F) -> Presence<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Presence::Absent,
            Self::Reset => Presence::Reset,
            Self::Value(value) => Presence::Value(f(value)),
        }
    }

    /// Map the wrapped value through a fallible conversion, keeping the
    /// tri-state.
    pub fn try_map<U, F>(self, f: F) -> Result<Presence<U>, XmsError>
    where
        F: FnOnce(T) -> Result<U, XmsError>,
    {
        Ok(match self {
            Self::Absent => Presence::Absent,
            Self::Reset => Presence::Reset,
            Self::Value(value) => Presence::Value(f(value)?),
        })
    }
}

impl<T> From<T> for Presence<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

/// `Reset` serializes to `null` and `Value` to the wrapped value.
///
/// `Absent` fields must be skipped by the containing payload struct via
/// `#[serde(skip_serializing_if = "Presence::is_absent")]`; if one reaches
/// the serializer anyway it is emitted as `null`.
impl<T> Serialize for Presence<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent | Self::Reset => serializer.serialize_none(),
            Self::Value(value) => value.serialize(serializer),
        }
    }
}
