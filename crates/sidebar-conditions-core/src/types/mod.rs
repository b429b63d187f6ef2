//! Host-supplied facts
//!
//! This module contains the inputs the host hands to the core:
//! - Feature availability of the social network installation
//! - Member type and group catalogs
//! - The per-request page context

pub mod availability;
pub mod page;

pub use availability::{Feature, FeatureAvailability, GroupSummary, MemberType};
pub use page::{DisplayedMember, PageContext};
