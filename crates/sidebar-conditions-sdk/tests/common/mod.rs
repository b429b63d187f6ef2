//! Common test utilities for SDK integration tests

use sidebar_conditions_sdk::{FeatureAvailability, GroupSummary, MemberType, SiteDirectory};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Full configuration used across tests
pub const SITE_YAML: &str = r#"
availability:
  activity: true
  groups: true
  forums: true
  profile: true
  friends: true
  messages: true
  notifications: true
  settings: true
  blogs: true
member_types:
  - name: teacher
    singular_name: Teacher
  - name: student
    singular_name: Student
groups:
  - id: 5
    name: Alpha
  - id: 2
    name: Beta
"#;

/// Directory whose group listing can be made to fail, counting lookups
pub struct FlakyDirectory {
    pub fail_groups: bool,
    pub lookups: AtomicUsize,
}

impl FlakyDirectory {
    pub fn new(fail_groups: bool) -> Self {
        Self {
            fail_groups,
            lookups: AtomicUsize::new(0),
        }
    }
}

impl SiteDirectory for FlakyDirectory {
    fn availability(&self) -> anyhow::Result<FeatureAvailability> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(FeatureAvailability::all())
    }

    fn member_types(&self) -> anyhow::Result<Option<Vec<MemberType>>> {
        Ok(None)
    }

    fn groups(&self) -> anyhow::Result<Vec<GroupSummary>> {
        if self.fail_groups {
            anyhow::bail!("groups table unavailable");
        }
        Ok(vec![GroupSummary::new(1, "Chess Club")])
    }
}
