//! Serialization module
//!
//! This module provides a [`Serialize`] trait for canonical XMS request
//! payloads.
//!
//! The trait is implemented for every payload type through the serde
//! provider in [`providers::serialization_serde`].
//!
//! [`Serialize`]: trait.Serialize.html
//! [`providers::serialization_serde`]: ../../providers/serialization_serde/index.html

use super::XmsError;

/// Serialize values
///
/// This trait provides a [`serialize`] method producing the canonical JSON
/// body accepted by the XMS API.
///
/// [`serialize`]: #tymethod.serialize
///
/// # Examples
/// ```
/// use xms::core::Serialize as _;
///
/// #[derive(serde::Serialize)]
/// struct Foo {
///     bar: String,
/// }
///
/// let foo = Foo { bar: "baz".to_string() };
/// assert_eq!(foo.serialize().unwrap(), b"{\"bar\":\"baz\"}".to_vec());
/// ```
pub trait Serialize {
    /// Serialize the value
    ///
    /// # Errors
    /// Should return an [`XmsError::SerializationError`] if the value cannot
    /// be serialized.
    ///
    /// [`XmsError::SerializationError`]: ../error/enum.XmsError.html#variant.SerializationError
    fn serialize(&self) -> Result<Vec<u8>, XmsError>;
}
