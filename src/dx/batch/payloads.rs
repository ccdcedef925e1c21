//! Request payloads module.
//!
//! This module contains the wire shapes of the batch endpoints:
//! [`BatchCreatePayload`] and [`BatchUpdatePayload`]. Both are tagged with
//! the `type` discriminator the XMS API dispatches on, which is derived
//! from the request variant and never caller-settable.

use crate::core::utils::encoding;
use crate::core::{Presence, XmsError};
use crate::dx::batch::{
    BinaryBatchCreate, BinaryBatchUpdate, DeliveryReport, ParameterSet, TextBatchCreate,
    TextBatchUpdate,
};

/// Payload for batch submission.
///
/// This type is built from a [`TextBatchCreate`] or [`BinaryBatchCreate`]
/// request; construction validates the request and applies the byte and
/// timestamp field encodings.
#[derive(serde::Serialize)]
#[serde(tag = "type")]
pub(crate) enum BatchCreatePayload<'request> {
    /// A textual batch, dispatched as `mt_text`.
    #[serde(rename = "mt_text")]
    Text {
        from: &'request str,
        to: &'request [String],
        body: &'request str,
        #[serde(skip_serializing_if = "Option::is_none")]
        parameters: Option<&'request ParameterSet>,
        #[serde(skip_serializing_if = "Option::is_none")]
        delivery_report: Option<DeliveryReport>,
        #[serde(skip_serializing_if = "Option::is_none")]
        send_at: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expire_at: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        callback_url: Option<&'request str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tags: Option<&'request [String]>,
    },

    /// A binary batch, dispatched as `mt_binary`.
    #[serde(rename = "mt_binary")]
    Binary {
        from: &'request str,
        to: &'request [String],
        body: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        udh: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        delivery_report: Option<DeliveryReport>,
        #[serde(skip_serializing_if = "Option::is_none")]
        send_at: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        expire_at: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        callback_url: Option<&'request str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tags: Option<&'request [String]>,
    },
}

impl<'request> BatchCreatePayload<'request> {
    /// Create the submission payload of a text batch.
    pub(crate) fn text(request: &'request TextBatchCreate) -> Result<Self, XmsError> {
        validate_batch(&request.sender, &request.recipients)?;

        Ok(Self::Text {
            from: &request.sender,
            to: &request.recipients,
            body: &request.body,
            parameters: if request.parameters.is_empty() {
                None
            } else {
                Some(&request.parameters)
            },
            delivery_report: request.delivery_report,
            send_at: encode_optional_timestamp(&request.send_at)?,
            expire_at: encode_optional_timestamp(&request.expire_at)?,
            callback_url: request.callback_url.as_deref(),
            tags: request.tags.as_deref(),
        })
    }

    /// Create the submission payload of a binary batch.
    pub(crate) fn binary(request: &'request BinaryBatchCreate) -> Result<Self, XmsError> {
        validate_batch(&request.sender, &request.recipients)?;

        Ok(Self::Binary {
            from: &request.sender,
            to: &request.recipients,
            body: encoding::encode_bytes(&request.body),
            udh: request.udh.as_deref().map(encoding::encode_hex),
            delivery_report: request.delivery_report,
            send_at: encode_optional_timestamp(&request.send_at)?,
            expire_at: encode_optional_timestamp(&request.expire_at)?,
            callback_url: request.callback_url.as_deref(),
            tags: request.tags.as_deref(),
        })
    }
}

/// Payload for changing an already submitted batch.
///
/// Fields follow the tri-state rule: untouched fields are left out of the
/// object, reset fields are emitted as explicit `null`, assigned fields are
/// emitted with their encoded value.
#[derive(serde::Serialize)]
#[serde(tag = "type")]
pub(crate) enum BatchUpdatePayload<'request> {
    /// A textual batch update, dispatched as `mt_text`.
    #[serde(rename = "mt_text")]
    Text {
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<&'request str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to_add: Option<&'request [String]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to_remove: Option<&'request [String]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<&'request str>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        parameters: Presence<&'request ParameterSet>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        delivery_report: Presence<DeliveryReport>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        send_at: Presence<String>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        expire_at: Presence<String>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        callback_url: Presence<&'request str>,
    },

    /// A binary batch update, dispatched as `mt_binary`.
    #[serde(rename = "mt_binary")]
    Binary {
        #[serde(skip_serializing_if = "Option::is_none")]
        from: Option<&'request str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to_add: Option<&'request [String]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        to_remove: Option<&'request [String]>,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        udh: Option<String>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        delivery_report: Presence<DeliveryReport>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        send_at: Presence<String>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        expire_at: Presence<String>,
        #[serde(skip_serializing_if = "Presence::is_absent")]
        callback_url: Presence<&'request str>,
    },
}

impl<'request> BatchUpdatePayload<'request> {
    /// Create the update payload of a text batch.
    pub(crate) fn text(request: &'request TextBatchUpdate) -> Result<Self, XmsError> {
        Ok(Self::Text {
            from: request.sender.as_deref(),
            to_add: request.recipient_insertions.as_deref(),
            to_remove: request.recipient_removals.as_deref(),
            body: request.body.as_deref(),
            parameters: request.parameters.as_ref(),
            delivery_report: request.delivery_report,
            send_at: encode_presence_timestamp(&request.send_at)?,
            expire_at: encode_presence_timestamp(&request.expire_at)?,
            callback_url: request.callback_url.as_ref().map(String::as_str),
        })
    }

    /// Create the update payload of a binary batch.
    pub(crate) fn binary(request: &'request BinaryBatchUpdate) -> Result<Self, XmsError> {
        Ok(Self::Binary {
            from: request.sender.as_deref(),
            to_add: request.recipient_insertions.as_deref(),
            to_remove: request.recipient_removals.as_deref(),
            body: request.body.as_deref().map(encoding::encode_bytes),
            udh: request.udh.as_deref().map(encoding::encode_hex),
            delivery_report: request.delivery_report,
            send_at: encode_presence_timestamp(&request.send_at)?,
            expire_at: encode_presence_timestamp(&request.expire_at)?,
            callback_url: request.callback_url.as_ref().map(String::as_str),
        })
    }
}

/// Ensure a batch has an originating address and at least one destination.
fn validate_batch(sender: &str, recipients: &[String]) -> Result<(), XmsError> {
    if sender.is_empty() {
        return Err(XmsError::ValidationError(
            "batch sender must not be empty".into(),
        ));
    }

    if recipients.is_empty() {
        return Err(XmsError::ValidationError(
            "batch must have at least one recipient".into(),
        ));
    }

    Ok(())
}

fn encode_optional_timestamp(
    value: &Option<time::OffsetDateTime>,
) -> Result<Option<String>, XmsError> {
    value.as_ref().map(encoding::encode_timestamp).transpose()
}

fn encode_presence_timestamp(
    value: &Presence<time::OffsetDateTime>,
) -> Result<Presence<String>, XmsError> {
    value.as_ref().try_map(encoding::encode_timestamp)
}
