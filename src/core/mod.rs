//! # XMS Core
//!
//! Core functionality of the XMS client.
//!
//! The `core` module contains the error taxonomy, the tri-state field
//! wrapper and the serialization contract shared by every request type. It
//! is intended to be used by the [`xms`] crate.
//!
//! [`xms`]: ../index.html

pub use error::XmsError;
pub mod error;

pub use presence::Presence;
pub mod presence;

pub use serialize::Serialize;
pub mod serialize;

pub(crate) mod utils;
