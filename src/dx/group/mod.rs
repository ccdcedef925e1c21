//! Group module.
//!
//! Manage named groups of recipients.
//!
//! This module contains the request types of the group endpoints of the XMS
//! API: [`GroupCreate`] for defining a new group and [`GroupUpdate`] for
//! changing an existing one, including membership deltas and cross-group
//! references. Both can carry a [`GroupAutoUpdate`] rule that lets
//! recipients join and leave the group through keyword replies.
//!
//! [`GroupCreate`]: struct.GroupCreate.html
//! [`GroupUpdate`]: struct.GroupUpdate.html
//! [`GroupAutoUpdate`]: struct.GroupAutoUpdate.html

pub(crate) mod payloads;

use crate::core::Presence;
use derive_builder::Builder;

/// A standing rule that maintains group membership from keyword replies.
///
/// Recipients text the trigger word pairs to the given address to be added
/// to or removed from the group. The rule is immutable once constructed;
/// replacing it means assigning a new rule to the containing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAutoUpdate {
    /// Address the keyword replies are sent to.
    recipient: String,

    /// First and second keyword that add the texting recipient.
    add_trigger: (String, String),

    /// First and second keyword that remove the texting recipient.
    remove_trigger: (String, String),
}

impl GroupAutoUpdate {
    /// Create an auto-update rule.
    pub fn new<S>(recipient: S, add_trigger: (S, S), remove_trigger: (S, S)) -> Self
    where
        S: Into<String>,
    {
        Self {
            recipient: recipient.into(),
            add_trigger: (add_trigger.0.into(), add_trigger.1.into()),
            remove_trigger: (remove_trigger.0.into(), remove_trigger.1.into()),
        }
    }

    /// Address the keyword replies are sent to.
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Keyword pair that adds the texting recipient.
    pub fn add_trigger(&self) -> (&str, &str) {
        (&self.add_trigger.0, &self.add_trigger.1)
    }

    /// Keyword pair that removes the texting recipient.
    pub fn remove_trigger(&self) -> (&str, &str) {
        (&self.remove_trigger.0, &self.remove_trigger.1)
    }
}

/// A new recipient group.
///
/// Every field is optional; the XMS API accepts an empty definition and
/// assigns the group identifier itself.
///
/// # Examples
/// ```
/// use xms::dx::group::{GroupAutoUpdate, GroupCreate};
///
/// let mut group = GroupCreate::default();
/// group.name = Some("My group".to_string());
/// group.members = Some(vec!["123456789".to_string()]);
/// group.auto_update = Some(GroupAutoUpdate::new(
///     "12345",
///     ("JOIN", "now"),
///     ("LEAVE", "now"),
/// ));
/// ```
#[derive(Debug, Clone, Default, Builder)]
#[builder(pattern = "owned", setter(into), default)]
pub struct GroupCreate {
    /// Human-readable group name.
    pub name: Option<String>,

    /// Initial members, in submission order.
    pub members: Option<Vec<String>>,

    /// Identifiers of groups whose members belong to this group as well.
    pub child_groups: Option<Vec<String>>,

    /// Keyword-reply membership rule.
    pub auto_update: Option<GroupAutoUpdate>,
}

/// An update of an existing recipient group.
///
/// Every field defaults to "leave untouched", so a default-constructed
/// update serializes to an empty object. `name` and `auto_update` are
/// tri-state and can also be [`reset`], which clears the server-side value
/// with an explicit `null`.
///
/// [`reset`]: crate::core::Presence::reset
#[derive(Debug, Clone, Default, Builder)]
#[builder(pattern = "owned", setter(into), default)]
pub struct GroupUpdate {
    /// Replacement group name, or a reset to unnamed.
    pub name: Presence<String>,

    /// Members added to the group.
    pub member_insertions: Option<Vec<String>>,

    /// Members removed from the group.
    pub member_removals: Option<Vec<String>>,

    /// Child groups attached to the group.
    pub child_group_insertions: Option<Vec<String>>,

    /// Child groups detached from the group.
    pub child_group_removals: Option<Vec<String>>,

    /// Identifier of a group whose membership is copied into this group.
    pub add_from_group: Option<String>,

    /// Identifier of a group whose membership is removed from this group.
    pub remove_from_group: Option<String>,

    /// Replacement keyword-reply membership rule, or a reset to none.
    pub auto_update: Presence<GroupAutoUpdate>,
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn expose_auto_update_triggers_in_order() {
        let sut = GroupAutoUpdate::new("12345", ("ADD", "plz"), ("REMOVE", "ME"));

        assert_eq!(sut.recipient(), "12345");
        assert_eq!(sut.add_trigger(), ("ADD", "plz"));
        assert_eq!(sut.remove_trigger(), ("REMOVE", "ME"));
    }

    #[test]
    fn leave_update_fields_untouched_by_default() {
        let update = GroupUpdate::default();

        assert!(update.name.is_absent());
        assert!(update.member_insertions.is_none());
        assert!(update.add_from_group.is_none());
        assert!(update.auto_update.is_absent());
    }

    #[test]
    fn build_group_update_with_builder() {
        let update = GroupUpdateBuilder::default()
            .name(Presence::of("new name".to_string()))
            .member_removals(vec!["987654321".to_string()])
            .build()
            .unwrap();

        assert_eq!(update.name.value().unwrap(), "new name");
        assert!(update.member_insertions.is_none());
    }
}
