//! Catalog annotated with the conditions a sidebar currently requires

use super::types::CatalogTree;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Everything a settings screen needs to render the condition checkboxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionView {
    pub groups: Vec<SelectionGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionGroup {
    pub key: String,
    pub heading: String,
    pub items: Vec<SelectionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionItem {
    pub key: String,
    pub label: String,
    pub description: String,
    pub selected: bool,
}

impl SelectionView {
    /// Keys of the selected items, in display order
    pub fn selected_keys(&self) -> Vec<&str> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .filter(|i| i.selected)
            .map(|i| i.key.as_str())
            .collect()
    }
}

impl CatalogTree {
    /// Mark every catalog entry whose key appears in `selected`.
    ///
    /// Selected keys unknown to the catalog (e.g. a group that was deleted)
    /// are ignored.
    pub fn selection_view<S: AsRef<str>>(&self, selected: &[S]) -> SelectionView {
        let selected: HashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();

        let groups = self
            .groups
            .iter()
            .map(|group| SelectionGroup {
                key: group.key.clone(),
                heading: group.heading.clone(),
                items: group
                    .conditions
                    .iter()
                    .map(|c| SelectionItem {
                        key: c.key.clone(),
                        label: c.label.clone(),
                        description: c.description.clone(),
                        selected: selected.contains(c.key.as_str()),
                    })
                    .collect(),
            })
            .collect();

        SelectionView { groups }
    }
}
