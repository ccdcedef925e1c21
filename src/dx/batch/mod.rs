//! Batch module.
//!
//! Send a message batch to one or more recipients.
//!
//! This module contains the batch request types accepted by the batch
//! endpoints of the XMS API: [`TextBatchCreate`] and [`BinaryBatchCreate`]
//! for submitting new batches, and [`TextBatchUpdate`] and
//! [`BinaryBatchUpdate`] for changing batches that have already been
//! submitted.
//!
//! [`TextBatchCreate`]: struct.TextBatchCreate.html
//! [`BinaryBatchCreate`]: struct.BinaryBatchCreate.html
//! [`TextBatchUpdate`]: struct.TextBatchUpdate.html
//! [`BinaryBatchUpdate`]: struct.BinaryBatchUpdate.html

pub(crate) mod payloads;

use crate::core::{Presence, XmsError};
use derive_builder::Builder;
use std::collections::HashMap;
use std::str::FromStr;
use time::OffsetDateTime;

/// Per-recipient substitution table of a parameterized text batch.
///
/// Maps a substitution variable name to replacement strings keyed by
/// recipient, with the literal key `default` as the fallback entry.
pub type ParameterSet = HashMap<String, HashMap<String, String>>;

/// Level of delivery-status feedback requested for a batch.
///
/// The wire strings are fixed by the XMS API; values arriving from
/// configuration are parsed with [`FromStr`] and unrecognized strings are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryReport {
    /// No delivery report callback.
    None,

    /// A summary callback once the batch settles.
    Summary,

    /// A full callback including per-recipient statuses.
    Full,

    /// One callback per recipient.
    PerRecipient,
}

impl DeliveryReport {
    /// The wire string accepted by the XMS API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Summary => "summary",
            Self::Full => "full",
            Self::PerRecipient => "per_recipient",
        }
    }
}

impl FromStr for DeliveryReport {
    type Err = XmsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "none" => Ok(Self::None),
            "summary" => Ok(Self::Summary),
            "full" => Ok(Self::Full),
            "per_recipient" => Ok(Self::PerRecipient),
            other => Err(XmsError::ValidationError(format!(
                "unrecognized delivery report type '{other}'"
            ))),
        }
    }
}

/// A new text message batch.
///
/// `sender`, `recipients` and `body` are mandatory, everything else is
/// optional and omitted from the payload when unset.
///
/// # Examples
/// ```
/// use xms::dx::batch::TextBatchCreate;
///
/// let mut batch = TextBatchCreate::new(
///     "12345",
///     ["987654321".to_string()],
///     "Hello, world!",
/// );
/// batch.callback_url = Some("http://localhost/callback".to_string());
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned", setter(into))]
pub struct TextBatchCreate {
    /// Originating address of the batch.
    pub sender: String,

    /// Destination addresses, in submission order.
    pub recipients: Vec<String>,

    /// Message body, possibly containing `${variable}` placeholders.
    pub body: String,

    /// Substitutions for `${variable}` placeholders in the body.
    #[builder(default)]
    pub parameters: ParameterSet,

    /// Requested delivery report detail.
    #[builder(default)]
    pub delivery_report: Option<DeliveryReport>,

    /// When the batch leaves the submission queue.
    #[builder(default)]
    pub send_at: Option<OffsetDateTime>,

    /// When delivery attempts stop.
    #[builder(default)]
    pub expire_at: Option<OffsetDateTime>,

    /// URL receiving batch callbacks.
    #[builder(default)]
    pub callback_url: Option<String>,

    /// Free-form labels attached to the batch.
    #[builder(default)]
    pub tags: Option<Vec<String>>,
}

impl TextBatchCreate {
    /// Create a batch with the mandatory fields set and every optional field
    /// left out.
    pub fn new<S, R, B>(sender: S, recipients: R, body: B) -> Self
    where
        S: Into<String>,
        R: IntoIterator<Item = String>,
        B: Into<String>,
    {
        Self {
            sender: sender.into(),
            recipients: recipients.into_iter().collect(),
            body: body.into(),
            parameters: ParameterSet::new(),
            delivery_report: None,
            send_at: None,
            expire_at: None,
            callback_url: None,
            tags: None,
        }
    }
}

/// A new binary message batch.
///
/// The body and the user data header are raw bytes; their base64 and hex
/// wire encodings are applied during serialization.
#[derive(Debug, Clone, Builder)]
#[builder(pattern = "owned", setter(into))]
pub struct BinaryBatchCreate {
    /// Originating address of the batch.
    pub sender: String,

    /// Destination addresses, in submission order.
    pub recipients: Vec<String>,

    /// Raw message body.
    pub body: Vec<u8>,

    /// User data header bytes prefixed to the body by the carrier.
    #[builder(default)]
    pub udh: Option<Vec<u8>>,

    /// Requested delivery report detail.
    #[builder(default)]
    pub delivery_report: Option<DeliveryReport>,

    /// When the batch leaves the submission queue.
    #[builder(default)]
    pub send_at: Option<OffsetDateTime>,

    /// When delivery attempts stop.
    #[builder(default)]
    pub expire_at: Option<OffsetDateTime>,

    /// URL receiving batch callbacks.
    #[builder(default)]
    pub callback_url: Option<String>,

    /// Free-form labels attached to the batch.
    #[builder(default)]
    pub tags: Option<Vec<String>>,
}

impl BinaryBatchCreate {
    /// Create a batch with the mandatory fields set and every optional field
    /// left out.
    pub fn new<S, R, B>(sender: S, recipients: R, body: B) -> Self
    where
        S: Into<String>,
        R: IntoIterator<Item = String>,
        B: Into<Vec<u8>>,
    {
        Self {
            sender: sender.into(),
            recipients: recipients.into_iter().collect(),
            body: body.into(),
            udh: None,
            delivery_report: None,
            send_at: None,
            expire_at: None,
            callback_url: None,
            tags: None,
        }
    }
}

/// An update of a previously submitted text batch.
///
/// Every field defaults to "leave untouched". [`Presence`] fields can
/// additionally be [`reset`], which clears the server-side value with an
/// explicit `null`.
///
/// [`reset`]: crate::core::Presence::reset
#[derive(Debug, Clone, Default, Builder)]
#[builder(pattern = "owned", setter(into), default)]
pub struct TextBatchUpdate {
    /// Replacement originating address.
    pub sender: Option<String>,

    /// Destinations added to the batch.
    pub recipient_insertions: Option<Vec<String>>,

    /// Destinations removed from the batch.
    pub recipient_removals: Option<Vec<String>>,

    /// Replacement message body.
    pub body: Option<String>,

    /// Replacement substitution table, or a reset to none.
    pub parameters: Presence<ParameterSet>,

    /// Replacement delivery report detail, or a reset to the default.
    pub delivery_report: Presence<DeliveryReport>,

    /// Replacement queue departure time, or a reset to immediate.
    pub send_at: Presence<OffsetDateTime>,

    /// Replacement expiration time, or a reset to the default.
    pub expire_at: Presence<OffsetDateTime>,

    /// Replacement callback URL, or a reset to none.
    pub callback_url: Presence<String>,
}

/// An update of a previously submitted binary batch.
///
/// Every field defaults to "leave untouched". [`Presence`] fields can
/// additionally be [`reset`], which clears the server-side value with an
/// explicit `null`.
///
/// [`reset`]: crate::core::Presence::reset
#[derive(Debug, Clone, Default, Builder)]
#[builder(pattern = "owned", setter(into), default)]
pub struct BinaryBatchUpdate {
    /// Replacement originating address.
    pub sender: Option<String>,

    /// Destinations added to the batch.
    pub recipient_insertions: Option<Vec<String>>,

    /// Destinations removed from the batch.
    pub recipient_removals: Option<Vec<String>>,

    /// Replacement raw message body.
    pub body: Option<Vec<u8>>,

    /// Replacement user data header bytes.
    pub udh: Option<Vec<u8>>,

    /// Replacement delivery report detail, or a reset to the default.
    pub delivery_report: Presence<DeliveryReport>,

    /// Replacement queue departure time, or a reset to immediate.
    pub send_at: Presence<OffsetDateTime>,

    /// Replacement expiration time, or a reset to the default.
    pub expire_at: Presence<OffsetDateTime>,

    /// Replacement callback URL, or a reset to none.
    pub callback_url: Presence<String>,
}

#[cfg(test)]
mod should {
    use super::*;
    use test_case::test_case;

    #[test_case("none" => DeliveryReport::None; "none report")]
    #[test_case("summary" => DeliveryReport::Summary; "summary report")]
    #[test_case("full" => DeliveryReport::Full; "full report")]
    #[test_case("per_recipient" => DeliveryReport::PerRecipient; "per recipient report")]
    fn parse_recognized_delivery_reports(value: &str) -> DeliveryReport {
        value.parse().unwrap()
    }

    #[test_case(""; "empty string")]
    #[test_case("NONE"; "wrong case")]
    #[test_case("partial"; "unknown kind")]
    fn fail_closed_on_unrecognized_delivery_reports(value: &str) {
        assert!(matches!(
            value.parse::<DeliveryReport>(),
            Err(XmsError::ValidationError(_))
        ));
    }

    #[test_case(DeliveryReport::None => "none"; "none report")]
    #[test_case(DeliveryReport::Summary => "summary"; "summary report")]
    #[test_case(DeliveryReport::Full => "full"; "full report")]
    #[test_case(DeliveryReport::PerRecipient => "per_recipient"; "per recipient report")]
    fn serialize_delivery_reports_to_their_wire_strings(report: DeliveryReport) -> String {
        let wire = serde_json::to_value(report).unwrap();
        assert_eq!(wire, serde_json::json!(report.as_str()));
        wire.as_str().unwrap().to_string()
    }

    #[test]
    fn build_text_batch_with_builder() {
        let batch = TextBatchCreateBuilder::default()
            .sender("12345")
            .recipients(vec!["987654321".to_string()])
            .body("Hello!")
            .delivery_report(DeliveryReport::Summary)
            .build()
            .unwrap();

        assert_eq!(batch.sender, "12345");
        assert_eq!(batch.delivery_report, Some(DeliveryReport::Summary));
        assert!(batch.send_at.is_none());
    }

    #[test]
    fn leave_update_fields_untouched_by_default() {
        let update = TextBatchUpdate::default();

        assert!(update.sender.is_none());
        assert!(update.parameters.is_absent());
        assert!(update.delivery_report.is_absent());
        assert!(update.callback_url.is_absent());
    }
}
