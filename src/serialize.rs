//! Request serialization module.
//!
//! This module is the single entry point for turning request types into
//! the canonical JSON bodies accepted by the XMS API. Each function routes
//! its request to the matching payload builder, which validates the request
//! and applies the field encodings, and then serializes the payload to
//! text.
//!
//! Serialization is a pure data transformation: no I/O happens here, and a
//! failed call never produces a partial body.
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
//! assert!(body.contains("mt_text"));
//! # Ok::<(), xms::core::XmsError>(())
//! ```

use crate::core::{Serialize as _, XmsError};
use crate::dx::batch::payloads::{BatchCreatePayload, BatchUpdatePayload};
use crate::dx::batch::{
    BinaryBatchCreate, BinaryBatchUpdate, TextBatchCreate, TextBatchUpdate,
};
use crate::dx::group::payloads::{GroupCreatePayload, GroupUpdatePayload};
use crate::dx::group::{GroupCreate, GroupUpdate};
use crate::dx::tags::{TagsPayload, TagsUpdatePayload};
use log::debug;

/// Serialize a text batch submission.
///
/// # Errors
/// [`XmsError::ValidationError`] if the sender or the recipient list is
/// empty, [`XmsError::EncodingError`] if a timestamp cannot be encoded.
pub fn text_batch(request: &TextBatchCreate) -> Result<String, XmsError> {
    let payload = BatchCreatePayload::text(request)?;
    into_text("text batch", payload.serialize()?)
}

/// Serialize a binary batch submission.
///
/// # Errors
/// [`XmsError::ValidationError`] if the sender or the recipient list is
/// empty, [`XmsError::EncodingError`] if a timestamp cannot be encoded.
pub fn binary_batch(request: &BinaryBatchCreate) -> Result<String, XmsError> {
    let payload = BatchCreatePayload::binary(request)?;
    into_text("binary batch", payload.serialize()?)
}

/// Serialize a text batch update.
///
/// # Errors
/// [`XmsError::EncodingError`] if a timestamp cannot be encoded.
pub fn text_batch_update(request: &TextBatchUpdate) -> Result<String, XmsError> {
    let payload = BatchUpdatePayload::text(request)?;
    into_text("text batch update", payload.serialize()?)
}

/// Serialize a binary batch update.
///
/// # Errors
/// [`XmsError::EncodingError`] if a timestamp cannot be encoded.
pub fn binary_batch_update(request: &BinaryBatchUpdate) -> Result<String, XmsError> {
    let payload = BatchUpdatePayload::binary(request)?;
    into_text("binary batch update", payload.serialize()?)
}

/// Serialize a group creation.
pub fn group(request: &GroupCreate) -> Result<String, XmsError> {
    let payload = GroupCreatePayload::new(request);
    into_text("group", payload.serialize()?)
}

/// Serialize a group update.
///
/// A default-constructed update serializes to an empty object.
pub fn group_update(request: &GroupUpdate) -> Result<String, XmsError> {
    let payload = GroupUpdatePayload::new(request);
    into_text("group update", payload.serialize()?)
}

/// Serialize a tag list replacement.
pub fn tags(tags: &[String]) -> Result<String, XmsError> {
    let payload = TagsPayload::new(tags);
    into_text("tags", payload.serialize()?)
}

/// Serialize a tag list delta.
///
/// Both `add` and `remove` are always part of the body, even when empty.
pub fn tags_update(add: &[String], remove: &[String]) -> Result<String, XmsError> {
    let payload = TagsUpdatePayload::new(add, remove);
    into_text("tags update", payload.serialize()?)
}

fn into_text(kind: &str, body: Vec<u8>) -> Result<String, XmsError> {
    debug!("serialized {} request: {} bytes", kind, body.len());
    String::from_utf8(body).map_err(|e| XmsError::SerializationError(e.to_string()))
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::Presence;
    use crate::dx::batch::{DeliveryReport, ParameterSet};
    use crate::dx::group::GroupAutoUpdate;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use time::macros::datetime;

    fn as_value(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn serialize_text_batch_create() {
        let mut batch = TextBatchCreate::new(
            "12345",
            ["987654321".to_string(), "123456789".to_string()],
            "Hello, ${name}!",
        );
        batch.parameters.insert(
            "name".to_string(),
            HashMap::from([
                ("987654321".to_string(), "Mary".to_string()),
                ("123456789".to_string(), "Joe".to_string()),
                ("default".to_string(), "you".to_string()),
            ]),
        );
        batch.delivery_report = Some(DeliveryReport::None);
        batch.send_at = Some(datetime!(2016-12-01 11:03:13.192 UTC));
        batch.expire_at = Some(datetime!(2016-12-04 11:03:13.192 UTC));
        batch.callback_url = Some("http://localhost/callback".to_string());

        let actual = text_batch(&batch).unwrap();

        let expected = json!({
            "body": "Hello, ${name}!",
            "delivery_report": "none",
            "send_at": "2016-12-01T11:03:13+00:00",
            "expire_at": "2016-12-04T11:03:13+00:00",
            "from": "12345",
            "to": ["987654321", "123456789"],
            "parameters": {
                "name": {
                    "987654321": "Mary",
                    "123456789": "Joe",
                    "default": "you"
                }
            },
            "callback_url": "http://localhost/callback",
            "type": "mt_text"
        });
        assert_eq!(as_value(&actual), expected);
    }

    #[test]
    fn serialize_binary_batch_create() {
        let mut batch = BinaryBatchCreate::new(
            "12345",
            ["987654321".to_string(), "123456789".to_string()],
            [0x00, 0x01, 0x02, 0x03],
        );
        batch.udh = Some(vec![0xff, 0xfe, 0xfd]);
        batch.delivery_report = Some(DeliveryReport::Summary);
        batch.expire_at = Some(datetime!(2016-12-17 08:15:29.969 UTC));
        batch.tags = Some(vec!["tag1".to_string(), "таг2".to_string()]);

        let actual = binary_batch(&batch).unwrap();

        let expected = json!({
            "body": "AAECAw==",
            "delivery_report": "summary",
            "expire_at": "2016-12-17T08:15:29+00:00",
            "from": "12345",
            "tags": ["tag1", "таг2"],
            "to": ["987654321", "123456789"],
            "type": "mt_binary",
            "udh": "fffefd"
        });
        assert_eq!(as_value(&actual), expected);
    }

    #[test]
    fn serialize_text_batch_update_with_everything() {
        let mut parameters = ParameterSet::new();
        parameters.insert(
            "name".to_string(),
            HashMap::from([("default".to_string(), "you".to_string())]),
        );

        let update = TextBatchUpdate {
            sender: Some("12345".to_string()),
            recipient_insertions: Some(vec!["4242424242".to_string()]),
            recipient_removals: Some(vec!["987654321".to_string()]),
            body: Some("Hello, again!".to_string()),
            parameters: Presence::of(parameters),
            delivery_report: Presence::reset(),
            send_at: Presence::of(datetime!(2016-12-01 11:03:13 UTC)),
            expire_at: Presence::reset(),
            callback_url: Presence::of("http://localhost/callback".to_string()),
        };

        let actual = text_batch_update(&update).unwrap();

        let expected = json!({
            "from": "12345",
            "to_add": ["4242424242"],
            "to_remove": ["987654321"],
            "body": "Hello, again!",
            "parameters": { "name": { "default": "you" } },
            "delivery_report": null,
            "send_at": "2016-12-01T11:03:13+00:00",
            "expire_at": null,
            "callback_url": "http://localhost/callback",
            "type": "mt_text"
        });
        assert_eq!(as_value(&actual), expected);
    }

    #[test]
    fn serialize_untouched_batch_updates_to_bare_type_tag() {
        let actual = text_batch_update(&TextBatchUpdate::default()).unwrap();
        assert_eq!(as_value(&actual), json!({ "type": "mt_text" }));

        let actual = binary_batch_update(&BinaryBatchUpdate::default()).unwrap();
        assert_eq!(as_value(&actual), json!({ "type": "mt_binary" }));
    }

    #[test]
    fn serialize_binary_batch_update_bodies() {
        let update = BinaryBatchUpdate {
            body: Some(vec![0x00, 0x01, 0x02, 0x03]),
            udh: Some(vec![0xff, 0xfe, 0xfd]),
            ..Default::default()
        };

        let actual = binary_batch_update(&update).unwrap();

        let expected = json!({
            "body": "AAECAw==",
            "udh": "fffefd",
            "type": "mt_binary"
        });
        assert_eq!(as_value(&actual), expected);
    }

    #[test]
    fn serialize_group_create() {
        let group_create = GroupCreate {
            name: Some("test name".to_string()),
            members: Some(vec!["123456789".to_string(), "987654321".to_string()]),
            child_groups: Some(vec!["group1".to_string(), "group2".to_string()]),
            auto_update: Some(GroupAutoUpdate::new(
                "12345",
                ("ADD", "plz"),
                ("REMOVE", "ME"),
            )),
        };

        let actual = group(&group_create).unwrap();

        let expected = json!({
            "auto_update": {
                "to": "12345",
                "add": { "first_word": "ADD", "second_word": "plz" },
                "remove": { "first_word": "REMOVE", "second_word": "ME" }
            },
            "members": ["123456789", "987654321"],
            "child_groups": ["group1", "group2"],
            "name": "test name"
        });
        assert_eq!(as_value(&actual), expected);
    }

    #[test]
    fn serialize_group_update_with_everything() {
        let update = GroupUpdate {
            name: Presence::of("new name".to_string()),
            member_insertions: Some(vec!["123456789".to_string()]),
            member_removals: Some(vec![
                "987654321".to_string(),
                "4242424242".to_string(),
            ]),
            child_group_insertions: Some(vec![
                "groupId1".to_string(),
                "groupId2".to_string(),
            ]),
            child_group_removals: Some(vec!["groupId3".to_string()]),
            add_from_group: Some("group1".to_string()),
            remove_from_group: Some("group2".to_string()),
            auto_update: Presence::of(GroupAutoUpdate::new(
                "1111",
                ("kw0", "kw1"),
                ("kw2", "kw3"),
            )),
        };

        let actual = group_update(&update).unwrap();

        let expected = json!({
            "name": "new name",
            "add": ["123456789"],
            "remove": ["987654321", "4242424242"],
            "child_groups_add": ["groupId1", "groupId2"],
            "child_groups_remove": ["groupId3"],
            "add_from_group": "group1",
            "remove_from_group": "group2",
            "auto_update": {
                "to": "1111",
                "add": { "first_word": "kw0", "second_word": "kw1" },
                "remove": { "first_word": "kw2", "second_word": "kw3" }
            }
        });
        assert_eq!(as_value(&actual), expected);
    }

    #[test]
    fn serialize_minimal_group_update_to_empty_object() {
        let actual = group_update(&GroupUpdate::default()).unwrap();
        assert_eq!(as_value(&actual), json!({}));
    }

    #[test]
    fn serialize_group_update_resets_to_nulls() {
        let update = GroupUpdate {
            name: Presence::reset(),
            auto_update: Presence::reset(),
            ..Default::default()
        };

        let actual = group_update(&update).unwrap();

        // Reset keys are present with a null value, not dropped.
        let expected = json!({
            "name": null,
            "auto_update": null
        });
        assert_eq!(as_value(&actual), expected);
    }

    #[test]
    fn serialize_tags() {
        let actual = tags(&["tag1".to_string(), "tag2".to_string()]).unwrap();
        assert_eq!(as_value(&actual), json!({ "tags": ["tag1", "tag2"] }));
    }

    #[test]
    fn serialize_tags_update() {
        let actual = tags_update(
            &["tag_1".to_string(), "tag_2".to_string()],
            &["tag".to_string()],
        )
        .unwrap();

        assert_eq!(
            as_value(&actual),
            json!({ "add": ["tag_1", "tag_2"], "remove": ["tag"] })
        );
    }

    #[test]
    fn serialize_empty_tags_update_with_both_keys() {
        let actual = tags_update(&[], &[]).unwrap();
        assert_eq!(as_value(&actual), json!({ "add": [], "remove": [] }));
    }

    #[test]
    fn refuse_invalid_batches_without_partial_output() {
        let batch = TextBatchCreate::new("", ["987654321".to_string()], "Hello!");
        assert!(matches!(
            text_batch(&batch),
            Err(XmsError::ValidationError(_))
        ));
    }
}
