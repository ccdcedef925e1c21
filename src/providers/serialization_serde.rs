//! Serde implementation for XMS [`Serialize`] trait.
//!
//! This module makes every serde-serializable payload usable as a canonical
//! XMS request body.
//!
//! # Examples
//! ```
//! use xms::core::Serialize as _;
//!
//! #[derive(serde::Serialize)]
//! struct Foo {
//!    bar: String,
//! }
//!
//! let foo = Foo { bar: "baz".to_string() };
//! assert_eq!(foo.serialize().unwrap(), b"{\"bar\":\"baz\"}".to_vec());
//! ```
//!
//! [`Serialize`]: ../../core/serialize/trait.Serialize.html
impl<S> crate::core::Serialize for S
where
    S: serde::Serialize,
{
    fn serialize(&self) -> Result<Vec<u8>, crate::core::XmsError> {
        serde_json::to_vec(self)
            .map_err(|e| crate::core::XmsError::SerializationError(e.to_string()))
    }
}
