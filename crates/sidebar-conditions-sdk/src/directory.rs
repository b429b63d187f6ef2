//! Site directory - where the engine gets its site-level facts from

use crate::config::EngineConfig;
use sidebar_conditions_core::{FeatureAvailability, GroupSummary, MemberType};

/// Source of site-level facts.
///
/// Hosts implement this over their own storage. Failures are reported to the
/// engine, which surfaces them as [`SdkError::Directory`](crate::SdkError).
pub trait SiteDirectory: Send + Sync {
    /// Active components
    fn availability(&self) -> anyhow::Result<FeatureAvailability>;

    /// Member types, `None` without member type support
    fn member_types(&self) -> anyhow::Result<Option<Vec<MemberType>>>;

    /// All groups, alphabetical
    fn groups(&self) -> anyhow::Result<Vec<GroupSummary>>;
}

/// Directory backed by fixed data, usually from [`EngineConfig`]
#[derive(Debug, Clone, Default)]
pub struct StaticDirectory {
    availability: FeatureAvailability,
    member_types: Option<Vec<MemberType>>,
    groups: Vec<GroupSummary>,
}

impl StaticDirectory {
    pub fn new(
        availability: FeatureAvailability,
        member_types: Option<Vec<MemberType>>,
        groups: Vec<GroupSummary>,
    ) -> Self {
        Self {
            availability,
            member_types,
            groups,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(
            config.availability,
            config.member_types.clone(),
            config.groups.clone(),
        )
    }
}

impl SiteDirectory for StaticDirectory {
    fn availability(&self) -> anyhow::Result<FeatureAvailability> {
        Ok(self.availability)
    }

    fn member_types(&self) -> anyhow::Result<Option<Vec<MemberType>>> {
        Ok(self.member_types.clone())
    }

    fn groups(&self) -> anyhow::Result<Vec<GroupSummary>> {
        Ok(self.groups.clone())
    }
}
