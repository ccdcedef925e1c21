//! Request payloads module.
//!
//! This module contains the wire shapes of the group endpoints:
//! [`GroupCreatePayload`], [`GroupUpdatePayload`] and the nested
//! [`AutoUpdatePayload`].

use crate::core::Presence;
use crate::dx::group::{GroupAutoUpdate, GroupCreate, GroupUpdate};

/// Wire shape of a keyword trigger pair.
#[derive(serde::Serialize)]
pub(crate) struct KeywordPairPayload<'request> {
    first_word: &'request str,
    second_word: &'request str,
}

impl<'request> From<(&'request str, &'request str)> for KeywordPairPayload<'request> {
    fn from((first_word, second_word): (&'request str, &'request str)) -> Self {
        Self {
            first_word,
            second_word,
        }
    }
}

/// Wire shape of an auto-update rule.
///
/// All fields are always present; whether the rule is emitted at all is
/// decided by the containing payload.
#[derive(serde::Serialize)]
pub(crate) struct AutoUpdatePayload<'request> {
    to: &'request str,
    add: KeywordPairPayload<'request>,
    remove: KeywordPairPayload<'request>,
}

impl<'request> AutoUpdatePayload<'request> {
    pub(crate) fn new(rule: &'request GroupAutoUpdate) -> Self {
        Self {
            to: rule.recipient(),
            add: rule.add_trigger().into(),
            remove: rule.remove_trigger().into(),
        }
    }
}

/// Payload for group creation.
#[derive(serde::Serialize)]
pub(crate) struct GroupCreatePayload<'request> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'request str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<&'request [String]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    child_groups: Option<&'request [String]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    auto_update: Option<AutoUpdatePayload<'request>>,
}

impl<'request> GroupCreatePayload<'request> {
    pub(crate) fn new(request: &'request GroupCreate) -> Self {
        Self {
            name: request.name.as_deref(),
            members: request.members.as_deref(),
            child_groups: request.child_groups.as_deref(),
            auto_update: request.auto_update.as_ref().map(AutoUpdatePayload::new),
        }
    }
}

/// Payload for group modification.
///
/// Fields follow the tri-state rule: untouched fields are left out of the
/// object, reset fields are emitted as explicit `null`, assigned fields are
/// emitted with their value. An untouched request therefore serializes to
/// an empty object.
#[derive(serde::Serialize)]
pub(crate) struct GroupUpdatePayload<'request> {
    #[serde(skip_serializing_if = "Presence::is_absent")]
    name: Presence<&'request str>,

    #[serde(rename = "add", skip_serializing_if = "Option::is_none")]
    member_insertions: Option<&'request [String]>,

    #[serde(rename = "remove", skip_serializing_if = "Option::is_none")]
    member_removals: Option<&'request [String]>,

    #[serde(rename = "child_groups_add", skip_serializing_if = "Option::is_none")]
    child_group_insertions: Option<&'request [String]>,

    #[serde(
        rename = "child_groups_remove",
        skip_serializing_if = "Option::is_none"
    )]
    child_group_removals: Option<&'request [String]>,

    #[serde(skip_serializing_if = "Option::is_none")]
    add_from_group: Option<&'request str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    remove_from_group: Option<&'request str>,

    #[serde(skip_serializing_if = "Presence::is_absent")]
    auto_update: Presence<AutoUpdatePayload<'request>>,
}

impl<'request> GroupUpdatePayload<'request> {
    pub(crate) fn new(request: &'request GroupUpdate) -> Self {
        Self {
            name: request.name.as_ref().map(String::as_str),
            member_insertions: request.member_insertions.as_deref(),
            member_removals: request.member_removals.as_deref(),
            child_group_insertions: request.child_group_insertions.as_deref(),
            child_group_removals: request.child_group_removals.as_deref(),
            add_from_group: request.add_from_group.as_deref(),
            remove_from_group: request.remove_from_group.as_deref(),
            auto_update: request.auto_update.as_ref().map(AutoUpdatePayload::new),
        }
    }
}
