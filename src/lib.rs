//! # XMS SDK for Rust
//!
//! This crate contains the request layer of the XMS SMS messaging API: the
//! strongly-typed request objects for batch sending, group management and
//! tagging, and the serialization engine that turns them into the canonical
//! JSON bodies the REST endpoints accept.
//!
//! The HTTP transport, authentication and response handling are external
//! collaborators: they consume the serialized bodies produced here and are
//! not part of this crate.
//!
//! # Examples
//! ```
//! use xms::dx::batch::TextBatchCreate;
//!
//! let batch = TextBatchCreate::new(
//!     "12345",
//!     ["987654321".to_string()],
//!     "Hello, world!",
//! );
//!
//! let body = xms::serialize::text_batch(&batch)?;
//! # assert!(body.contains("mt_text"));
//! # Ok::<(), xms::core::XmsError>(())
//! ```

pub mod core;
pub mod dx;
pub mod providers;
pub mod serialize;

#[doc(inline)]
pub use crate::core::{Presence, XmsError};

#[doc(inline)]
pub use crate::dx::batch::{
    BinaryBatchCreate, BinaryBatchUpdate, DeliveryReport, TextBatchCreate, TextBatchUpdate,
};

#[doc(inline)]
pub use crate::dx::group::{GroupAutoUpdate, GroupCreate, GroupUpdate};
