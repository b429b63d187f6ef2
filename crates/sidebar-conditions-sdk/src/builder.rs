//! Builder pattern for ConditionEngine

use crate::config::EngineConfig;
use crate::directory::SiteDirectory;
use crate::engine::ConditionEngine;
use crate::error::Result;
use sidebar_conditions_core::{FeatureAvailability, GroupSummary, MemberType};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Builder for ConditionEngine
///
/// # Example
///
/// ```rust,ignore
/// use sidebar_conditions_sdk::ConditionEngineBuilder;
///
/// // From a configuration file
/// let engine = ConditionEngineBuilder::new()
///     .with_config_file("config/conditions.yaml")
///     .build()?;
///
/// // Backed by the host's own storage
/// let engine = ConditionEngineBuilder::new()
///     .with_directory(Arc::new(MySiteDirectory::new(db)))
///     .build()?;
/// ```
pub struct ConditionEngineBuilder {
    config: EngineConfig,
    config_file: Option<PathBuf>,
    directory: Option<Arc<dyn SiteDirectory>>,
}

impl ConditionEngineBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::new(),
            config_file: None,
            directory: None,
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Load the configuration from a YAML file at build time.
    ///
    /// The file replaces any configuration set on the builder.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Set component availability
    pub fn with_availability(mut self, availability: FeatureAvailability) -> Self {
        self.config.availability = availability;
        self
    }

    /// Set member types
    pub fn with_member_types(mut self, member_types: Vec<MemberType>) -> Self {
        self.config.member_types = Some(member_types);
        self
    }

    /// Set groups
    pub fn with_groups(mut self, groups: Vec<GroupSummary>) -> Self {
        self.config.groups = groups;
        self
    }

    /// Use a host directory instead of the configured site facts
    pub fn with_directory(mut self, directory: Arc<dyn SiteDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Enable the legacy settings lookup
    pub fn legacy_settings_lookup(mut self, enable: bool) -> Self {
        self.config.legacy_settings_lookup = enable;
        self
    }

    /// Enable catalog validation
    pub fn validate_catalog(mut self, enable: bool) -> Self {
        self.config.validate_catalog = enable;
        self
    }

    /// Build the engine.
    ///
    /// With static site facts and validation on, the catalog is built once
    /// here so skipped entries are reported at startup.
    pub fn build(self) -> Result<ConditionEngine> {
        let config = match &self.config_file {
            Some(path) => EngineConfig::from_file(path)?,
            None => self.config,
        };

        let engine = match self.directory {
            Some(directory) => {
                info!("Building condition engine with host directory");
                ConditionEngine::with_directory(config, directory)
            }
            None => {
                let validate = config.validate_catalog;
                let engine = ConditionEngine::new(config);
                if validate {
                    engine.catalog()?;
                }
                info!(
                    active = ?engine.config().availability.active(),
                    "Built condition engine from configuration"
                );
                engine
            }
        };

        Ok(engine)
    }
}

impl Default for ConditionEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
