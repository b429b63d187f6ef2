//! Site-level inputs: which components are active, which member types and
//! groups exist.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A component of the social network that can be switched on or off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Activity,
    Groups,
    Forums,
    Profile,
    Friends,
    Messages,
    Notifications,
    Settings,
    Blogs,
}

impl Feature {
    /// Every feature, in catalog order
    pub const ALL: [Feature; 9] = [
        Feature::Activity,
        Feature::Groups,
        Feature::Forums,
        Feature::Profile,
        Feature::Friends,
        Feature::Messages,
        Feature::Notifications,
        Feature::Settings,
        Feature::Blogs,
    ];

    /// Component name as used by the host
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Activity => "activity",
            Feature::Groups => "groups",
            Feature::Forums => "forums",
            Feature::Profile => "profile",
            Feature::Friends => "friends",
            Feature::Messages => "messages",
            Feature::Notifications => "notifications",
            Feature::Settings => "settings",
            Feature::Blogs => "blogs",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which components are active in the current installation.
///
/// Missing fields deserialize as inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureAvailability {
    pub activity: bool,
    pub groups: bool,
    pub forums: bool,
    pub profile: bool,
    pub friends: bool,
    pub messages: bool,
    pub notifications: bool,
    pub settings: bool,
    pub blogs: bool,
}

impl FeatureAvailability {
    /// No component active
    pub fn none() -> Self {
        Self::default()
    }

    /// Every component active
    pub fn all() -> Self {
        Feature::ALL
            .iter()
            .fold(Self::default(), |acc, feature| acc.with(*feature))
    }

    /// Mark a component as active
    pub fn with(mut self, feature: Feature) -> Self {
        *self.flag_mut(feature) = true;
        self
    }

    /// Mark a component as inactive
    pub fn without(mut self, feature: Feature) -> Self {
        *self.flag_mut(feature) = false;
        self
    }

    /// Check whether a component is active
    pub fn is_active(&self, feature: Feature) -> bool {
        match feature {
            Feature::Activity => self.activity,
            Feature::Groups => self.groups,
            Feature::Forums => self.forums,
            Feature::Profile => self.profile,
            Feature::Friends => self.friends,
            Feature::Messages => self.messages,
            Feature::Notifications => self.notifications,
            Feature::Settings => self.settings,
            Feature::Blogs => self.blogs,
        }
    }

    /// Active components, in catalog order
    pub fn active(&self) -> Vec<Feature> {
        Feature::ALL
            .iter()
            .copied()
            .filter(|f| self.is_active(*f))
            .collect()
    }

    fn flag_mut(&mut self, feature: Feature) -> &mut bool {
        match feature {
            Feature::Activity => &mut self.activity,
            Feature::Groups => &mut self.groups,
            Feature::Forums => &mut self.forums,
            Feature::Profile => &mut self.profile,
            Feature::Friends => &mut self.friends,
            Feature::Messages => &mut self.messages,
            Feature::Notifications => &mut self.notifications,
            Feature::Settings => &mut self.settings,
            Feature::Blogs => &mut self.blogs,
        }
    }
}

/// An administrator-defined member type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberType {
    /// Type identifier (e.g. "teacher")
    pub name: String,

    /// Singular display name (e.g. "Teacher")
    pub singular_name: String,
}

impl MemberType {
    /// Create a new member type
    pub fn new(name: impl Into<String>, singular_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            singular_name: singular_name.into(),
        }
    }

    /// Reject types the host should never have handed over
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidMemberType(format!(
                "member type '{}' has an empty name",
                self.singular_name
            )));
        }
        Ok(())
    }
}

/// A single group of the social network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: u64,
    pub name: String,
}

impl GroupSummary {
    /// Create a new group summary
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidGroup(format!(
                "group {} has an empty name",
                self.id
            )));
        }
        Ok(())
    }
}
