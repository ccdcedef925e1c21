//! Tags module.
//!
//! Replace or amend the free-form tags attached to a batch or group.
//!
//! This module contains the wire shapes of the tag endpoints:
//! [`TagsPayload`] replaces the whole tag list, [`TagsUpdatePayload`]
//! applies an add/remove delta.
//!
//! [`TagsPayload`]: struct.TagsPayload.html
//! [`TagsUpdatePayload`]: struct.TagsUpdatePayload.html

/// Payload replacing the complete tag list of a batch or group.
///
/// Order and duplicates of the given tags are preserved as-is.
#[derive(serde::Serialize)]
pub(crate) struct TagsPayload<'request> {
    tags: &'request [String],
}

impl<'request> TagsPayload<'request> {
    pub(crate) fn new(tags: &'request [String]) -> Self {
        Self { tags }
    }
}

/// Payload amending the tag list of a batch or group.
///
/// Both keys are always emitted, even when one of the sets is empty. The
/// tag endpoints expect the complete delta shape, unlike the
/// omit-when-unset rule used by the other update payloads.
#[derive(serde::Serialize)]
pub(crate) struct TagsUpdatePayload<'request> {
    add: &'request [String],
    remove: &'request [String],
}

impl<'request> TagsUpdatePayload<'request> {
    pub(crate) fn new(add: &'request [String], remove: &'request [String]) -> Self {
        Self { add, remove }
    }
}
