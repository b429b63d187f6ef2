//! Condition catalog types
//!
//! A condition is a named predicate over the current page. Conditions are
//! grouped by feature area for display:
//! - `buddypress` - any social network page, registration, directories
//! - `bp-members` - member directory, single member, profile, friends, blogs
//! - `bp-activity` - activity streams
//! - `bp-groups` - group directory, group pages, individual groups
//! - `bp-messages` - private messaging
//! - `bp-loggedin` - the logged-in member's own pages
//!
//! # Keys
//!
//! Condition keys are the contract with the host: a sidebar stores the keys
//! it applies to, and the matcher emits keys for the current page.
//!
//! ```text
//! bp-group-create        static key
//! bp-group-5             group with id 5
//! bp-member-type_teacher member type "teacher" (catalog side)
//! ```

mod selection;
mod types;

pub use selection::{SelectionGroup, SelectionItem, SelectionView};
pub use types::{group_keys, CatalogTree, ConditionDefinition, ConditionGroup};
