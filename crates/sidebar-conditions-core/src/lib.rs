//! Sidebar conditions core - condition catalog and page matcher for
//! BuddyPress-style social networks
//!
//! This crate provides:
//! - The condition catalog model (definitions, groups, tree)
//! - The catalog builder, driven by the active components of a site
//! - The page matcher, turning a page snapshot into condition keys
//! - Error types
//!
//! Everything here is pure and synchronous; the host supplies the facts and
//! consumes the keys.

pub mod condition;
pub mod error;
pub mod matcher;
pub mod registry;
pub mod types;

// Re-export commonly used types
pub use condition::{CatalogTree, ConditionDefinition, ConditionGroup, SelectionView};
pub use error::CoreError;
pub use matcher::{append_conditions, match_conditions, normalize_body_class};
pub use registry::build_catalog;
pub use types::{
    DisplayedMember, Feature, FeatureAvailability, GroupSummary, MemberType, PageContext,
};
