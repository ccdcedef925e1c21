//! # Error types
//!
//! This module contains the error types for the [`xms`] crate.
//!
//! [`xms`]: ../index.html

/// XMS error type
///
/// This type is used to represent errors that can occur while preparing a
/// request for the XMS API. It is used as the error type for the [`Result`]
/// type.
///
/// # Examples
/// ```
/// use xms::core::XmsError;
///
/// fn foo() -> Result<(), XmsError> {
///   Ok(())
/// }
///
/// foo().map_err(|e| match e {
///   XmsError::ValidationError(_) => println!("Validation error"),
///   XmsError::EncodingError(_) => println!("Encoding error"),
///   _ => println!("Other error"),
/// });
/// ```
///
/// [`Result`]: https://doc.rust-lang.org/std/result/enum.Result.html
#[derive(thiserror::Error, Debug)]
pub enum XmsError {
    /// this error is returned when a required field is missing or empty, or
    /// when an enum wire value is not recognized
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// this error is returned when a field value cannot be converted to its
    /// wire representation
    #[error("Encoding error: {0}")]
    EncodingError(String),

    /// this error is returned when a tri-state field is read while not
    /// holding a value
    #[error("Invalid state error: {0}")]
    InvalidStateError(String),

    /// this error is returned when the serialization of the request fails
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
