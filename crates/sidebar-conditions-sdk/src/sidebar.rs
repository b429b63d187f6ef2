//! Sidebar selection
//!
//! The host stores, per sidebar, the condition keys it applies to. When
//! several sidebars match the current page the newest one (highest id) wins.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A sidebar and the conditions it was configured for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidebar {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub conditions: Vec<String>,
}

impl Sidebar {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            conditions: Vec::new(),
        }
    }

    /// Add a condition key
    pub fn with_condition(mut self, key: impl Into<String>) -> Self {
        self.conditions.push(key.into());
        self
    }

    /// Whether any of this sidebar's conditions is among `matched`
    pub fn applies_to(&self, matched: &HashSet<&str>) -> bool {
        self.conditions.iter().any(|c| matched.contains(c.as_str()))
    }
}

/// Picks the sidebar for a page
pub struct SidebarSelector;

impl SidebarSelector {
    /// The newest sidebar with at least one matched condition
    pub fn select<'a, S: AsRef<str>>(sidebars: &'a [Sidebar], matched: &[S]) -> Option<&'a Sidebar> {
        let matched: HashSet<&str> = matched.iter().map(|s| s.as_ref()).collect();

        sidebars
            .iter()
            .filter(|sidebar| sidebar.applies_to(&matched))
            .max_by_key(|sidebar| sidebar.id)
    }
}
