//! Per-request page snapshot

use serde::{Deserialize, Serialize};

/// Snapshot of the current request, built fresh by the host for every page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContext {
    /// Whether the page belongs to the social network at all
    pub in_scope: bool,

    /// Body class tokens describing the page type, in source order
    pub body_classes: Vec<String>,

    /// Set on single-member pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_member: Option<DisplayedMember>,

    /// Id of the displayed group, set on single-group pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_group: Option<u64>,
}

/// The member whose pages are being viewed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayedMember {
    /// Types assigned to the member. `None` when the installation has no
    /// member type support.
    #[serde(default)]
    pub member_types: Option<Vec<String>>,
}

impl PageContext {
    /// A page outside the social network
    pub fn out_of_scope() -> Self {
        Self::default()
    }

    /// A social network page with the given body classes
    pub fn in_scope<I, S>(body_classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            in_scope: true,
            body_classes: body_classes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Mark the page as a single-member page
    pub fn with_member(mut self, member: DisplayedMember) -> Self {
        self.displayed_member = Some(member);
        self
    }

    /// Mark the page as a single-group page
    pub fn with_group(mut self, group_id: u64) -> Self {
        self.current_group = Some(group_id);
        self
    }

    pub fn is_single_member(&self) -> bool {
        self.displayed_member.is_some()
    }

    pub fn is_single_group(&self) -> bool {
        self.current_group.is_some()
    }
}

impl DisplayedMember {
    /// Member on a site with member types, carrying the assigned types
    pub fn with_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            member_types: Some(types.into_iter().map(Into::into).collect()),
        }
    }

    /// Member on a site without member type support
    pub fn without_type_support() -> Self {
        Self { member_types: None }
    }
}
