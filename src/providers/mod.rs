//! # Providers module
//!
//! This module contains the serialization provider used by the request
//! façade. It is intended to be used by the [`xms`] crate.
//!
//! [`xms`]: ../index.html

pub mod serialization_serde;
