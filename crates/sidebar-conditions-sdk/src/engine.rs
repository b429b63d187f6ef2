//! ConditionEngine - Main API for catalog building and page evaluation

use crate::config::EngineConfig;
use crate::directory::{SiteDirectory, StaticDirectory};
use crate::error::{Result, SdkError};
use crate::sidebar::{Sidebar, SidebarSelector};
use sidebar_conditions_core::{
    append_conditions, build_catalog, CatalogTree, Feature, PageContext, SelectionView,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main condition engine
///
/// Cheap to share: all state is immutable after construction.
pub struct ConditionEngine {
    /// Source of site-level facts
    directory: Arc<dyn SiteDirectory>,

    /// Configuration
    config: EngineConfig,
}

impl ConditionEngine {
    /// Create an engine whose site facts come from the configuration
    pub fn new(config: EngineConfig) -> Self {
        let directory = Arc::new(StaticDirectory::from_config(&config));
        Self { directory, config }
    }

    /// Create an engine backed by a host directory
    pub fn with_directory(config: EngineConfig, directory: Arc<dyn SiteDirectory>) -> Self {
        Self { directory, config }
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the condition catalog from the current site facts
    pub fn catalog(&self) -> Result<CatalogTree> {
        let mut availability = self.directory.availability().map_err(SdkError::Directory)?;
        let mut member_types = self.directory.member_types().map_err(SdkError::Directory)?;
        let mut groups = self.directory.groups().map_err(SdkError::Directory)?;

        if self.config.legacy_settings_lookup && availability.settings {
            debug!("Legacy settings lookup enabled, dropping settings condition");
            availability = availability.without(Feature::Settings);
        }

        if self.config.validate_catalog {
            if let Some(types) = member_types.as_mut() {
                types.retain(|member_type| match member_type.validate() {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Skipping member type: {}", e);
                        false
                    }
                });
            }
            groups.retain(|group| match group.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping group: {}", e);
                    false
                }
            });
        }

        let tree = build_catalog(&availability, member_types.as_deref(), &groups);

        if self.config.validate_catalog {
            tree.validate()?;
        }

        info!(
            groups = tree.groups.len(),
            conditions = tree.len(),
            "Condition catalog built"
        );

        Ok(tree)
    }

    /// Catalog annotated with the conditions a sidebar is configured for
    pub fn selection_view<S: AsRef<str>>(&self, selected: &[S]) -> Result<SelectionView> {
        Ok(self.catalog()?.selection_view(selected))
    }

    /// Condition keys for the current page
    pub fn evaluate(&self, ctx: &PageContext) -> Vec<String> {
        self.evaluate_into(Vec::new(), ctx)
    }

    /// Append the condition keys for the current page to the host's list
    pub fn evaluate_into(&self, existing: Vec<String>, ctx: &PageContext) -> Vec<String> {
        let before = existing.len();
        let conditions = append_conditions(existing, ctx);

        debug!(
            in_scope = ctx.in_scope,
            added = conditions.len() - before,
            "Page conditions: {:?}",
            &conditions[before..]
        );

        conditions
    }

    /// Pick the sidebar for the current page
    pub fn select_sidebar<'a>(&self, sidebars: &'a [Sidebar], ctx: &PageContext) -> Option<&'a Sidebar> {
        let conditions = self.evaluate(ctx);
        let selected = SidebarSelector::select(sidebars, &conditions);

        match selected {
            Some(sidebar) => debug!(sidebar = sidebar.id, "Sidebar selected: {}", sidebar.name),
            None => debug!("No sidebar matches the page"),
        }

        selected
    }
}
