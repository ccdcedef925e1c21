//! # XMS Developer Experience
//!
//! This module provides the request types for the [XMS] messaging service.
//! It is intended to be used by the [`xms`] crate.
//!
//! [`xms`]: ../index.html
//! [XMS]: https://www.sinch.com/products/apis/sms/

pub mod batch;
pub mod group;
pub mod tags;
