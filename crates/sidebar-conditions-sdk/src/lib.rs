//! Sidebar conditions SDK
//!
//! High-level API for building the condition catalog of a site, evaluating
//! pages and picking sidebars.

pub mod builder;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod sidebar;

// Re-export main types
pub use builder::ConditionEngineBuilder;
pub use config::EngineConfig;
pub use directory::{SiteDirectory, StaticDirectory};
pub use engine::ConditionEngine;
pub use error::{Result, SdkError};
pub use sidebar::{Sidebar, SidebarSelector};

// Re-export commonly used types from the core
pub use sidebar_conditions_core::{
    CatalogTree, ConditionDefinition, ConditionGroup, DisplayedMember, Feature,
    FeatureAvailability, GroupSummary, MemberType, PageContext, SelectionView,
};
