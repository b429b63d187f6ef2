//! Condition definitions, groups and the catalog tree

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Keys and headings of the catalog groups
pub mod group_keys {
    pub const BUDDYPRESS: &str = "buddypress";
    pub const MEMBERS: &str = "bp-members";
    pub const ACTIVITY: &str = "bp-activity";
    pub const GROUPS: &str = "bp-groups";
    pub const MESSAGES: &str = "bp-messages";
    pub const LOGGED_IN: &str = "bp-loggedin";

    /// Display heading for a group key
    pub fn heading(key: &str) -> Option<&'static str> {
        match key {
            BUDDYPRESS => Some("BuddyPress"),
            MEMBERS => Some("Members"),
            ACTIVITY => Some("Activity"),
            GROUPS => Some("Groups"),
            MESSAGES => Some("Messages"),
            LOGGED_IN => Some("My Pages"),
            _ => None,
        }
    }
}

/// A selectable condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDefinition {
    /// Unique, stable identifier
    pub key: String,

    /// Short display name
    pub label: String,

    /// Longer explanation, shown as a tooltip
    pub description: String,
}

impl ConditionDefinition {
    /// Create a new condition definition
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// An ordered, keyed list of conditions under one heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionGroup {
    pub key: String,
    pub heading: String,
    pub conditions: Vec<ConditionDefinition>,
}

impl ConditionGroup {
    /// Create an empty group. The heading falls back to the key for unknown
    /// groups.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let heading = group_keys::heading(&key).unwrap_or(key.as_str()).to_string();
        Self {
            key,
            heading,
            conditions: Vec::new(),
        }
    }

    /// Create a group from a list of definitions, later duplicates replacing
    /// earlier ones
    pub fn with_conditions(
        key: impl Into<String>,
        conditions: impl IntoIterator<Item = ConditionDefinition>,
    ) -> Self {
        let mut group = Self::new(key);
        group.extend(conditions);
        group
    }

    /// Insert a condition. An existing condition with the same key is
    /// replaced in place.
    pub fn insert(&mut self, condition: ConditionDefinition) {
        self.extend([condition]);
    }

    /// Insert many conditions with [`insert`](Self::insert) semantics in a
    /// single pass.
    pub fn extend(&mut self, conditions: impl IntoIterator<Item = ConditionDefinition>) {
        let mut positions: HashMap<String, usize> = self
            .conditions
            .iter()
            .enumerate()
            .map(|(i, c)| (c.key.clone(), i))
            .collect();

        for condition in conditions {
            match positions.get(&condition.key) {
                Some(&i) => self.conditions[i] = condition,
                None => {
                    positions.insert(condition.key.clone(), self.conditions.len());
                    self.conditions.push(condition);
                }
            }
        }
    }

    /// Union with another list: keys already present are kept as they are,
    /// new keys are appended in order.
    pub fn merge(&mut self, conditions: impl IntoIterator<Item = ConditionDefinition>) {
        let mut seen: HashSet<String> = self.conditions.iter().map(|c| c.key.clone()).collect();

        for condition in conditions {
            if seen.insert(condition.key.clone()) {
                self.conditions.push(condition);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&ConditionDefinition> {
        self.conditions.iter().find(|c| c.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Condition keys in display order
    pub fn keys(&self) -> Vec<&str> {
        self.conditions.iter().map(|c| c.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// The full, nested condition catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTree {
    pub groups: Vec<ConditionGroup>,
}

impl CatalogTree {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group. A group with the same key is replaced in place.
    pub fn push_group(&mut self, group: ConditionGroup) {
        match self.groups.iter_mut().find(|g| g.key == group.key) {
            Some(existing) => *existing = group,
            None => self.groups.push(group),
        }
    }

    pub fn group(&self, key: &str) -> Option<&ConditionGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// Group keys in display order
    pub fn group_keys(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.key.as_str()).collect()
    }

    /// Find a condition and the group it is listed under
    pub fn find(&self, condition_key: &str) -> Option<(&ConditionGroup, &ConditionDefinition)> {
        self.groups
            .iter()
            .find_map(|g| g.get(condition_key).map(|c| (g, c)))
    }

    pub fn contains(&self, condition_key: &str) -> bool {
        self.find(condition_key).is_some()
    }

    /// All condition keys, flattened in display order
    pub fn keys(&self) -> Vec<&str> {
        self.groups.iter().flat_map(|g| g.keys()).collect()
    }

    /// Total number of conditions across groups
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that no condition key is listed under two groups
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for group in &self.groups {
            for condition in &group.conditions {
                if let Some(first) = seen.insert(&condition.key, &group.key) {
                    return Err(CoreError::DuplicateKey {
                        key: condition.key.clone(),
                        first: first.to_string(),
                        second: group.key.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// JSON form for an external rendering layer
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(key: &str, label: &str) -> ConditionDefinition {
        ConditionDefinition::new(key, label, format!("{} description", label))
    }

    #[test]
    fn test_group_heading() {
        assert_eq!(ConditionGroup::new("bp-loggedin").heading, "My Pages");
        assert_eq!(ConditionGroup::new("custom").heading, "custom");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut group = ConditionGroup::new("bp-groups");
        group.insert(def("bp-group-1", "First"));
        group.insert(def("bp-group-2", "Second"));
        group.insert(def("bp-group-1", "Renamed"));

        assert_eq!(group.keys(), vec!["bp-group-1", "bp-group-2"]);
        assert_eq!(group.get("bp-group-1").unwrap().label, "Renamed");
    }

    #[test]
    fn test_extend_large_list_dedupes() {
        let mut group = ConditionGroup::new("bp-groups");
        group.extend((0..5_000u64).map(|i| def(&format!("bp-group-{}", i % 2_500), "Group")));
        group.extend([def("bp-group-7", "Seven")]);

        assert_eq!(group.len(), 2_500);
        assert_eq!(group.keys()[7], "bp-group-7");
        assert_eq!(group.get("bp-group-7").unwrap().label, "Seven");
    }

    #[test]
    fn test_merge_ignores_duplicates_within_input() {
        let mut group = ConditionGroup::new("bp-members");
        group.merge(vec![def("bp-blogs", "First"), def("bp-blogs", "Second")]);

        assert_eq!(group.keys(), vec!["bp-blogs"]);
        assert_eq!(group.get("bp-blogs").unwrap().label, "First");
    }

    #[test]
    fn test_merge_keeps_existing() {
        let mut group = ConditionGroup::with_conditions("bp-members", vec![def("bp-user", "User")]);
        group.merge(vec![def("bp-user", "Other"), def("bp-friends", "Friends")]);

        assert_eq!(group.keys(), vec!["bp-user", "bp-friends"]);
        assert_eq!(group.get("bp-user").unwrap().label, "User");
    }

    #[test]
    fn test_catalog_lookup() {
        let mut tree = CatalogTree::new();
        tree.push_group(ConditionGroup::with_conditions(
            "buddypress",
            vec![def("buddypress", "Any"), def("not-buddypress", "None")],
        ));
        tree.push_group(ConditionGroup::with_conditions(
            "bp-members",
            vec![def("bp-members", "Directory")],
        ));

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.group_keys(), vec!["buddypress", "bp-members"]);
        assert_eq!(tree.keys(), vec!["buddypress", "not-buddypress", "bp-members"]);

        let (group, condition) = tree.find("bp-members").unwrap();
        assert_eq!(group.key, "bp-members");
        assert_eq!(condition.label, "Directory");
        assert!(!tree.contains("bp-groups"));
    }

    #[test]
    fn test_validate_detects_cross_group_duplicates() {
        let mut tree = CatalogTree::new();
        tree.push_group(ConditionGroup::with_conditions("bp-members", vec![def("bp-friends", "A")]));
        assert!(tree.validate().is_ok());

        tree.push_group(ConditionGroup::with_conditions("bp-activity", vec![def("bp-friends", "B")]));
        assert_eq!(
            tree.validate(),
            Err(CoreError::DuplicateKey {
                key: "bp-friends".to_string(),
                first: "bp-members".to_string(),
                second: "bp-activity".to_string(),
            })
        );
    }

    #[test]
    fn test_catalog_to_json() {
        let mut tree = CatalogTree::new();
        tree.push_group(ConditionGroup::with_conditions("bp-messages", vec![def("bp-inbox", "Inbox")]));

        let json = tree.to_json();
        assert_eq!(json["groups"][0]["heading"], "Messages");
        assert_eq!(json["groups"][0]["conditions"][0]["key"], "bp-inbox");
    }
}
