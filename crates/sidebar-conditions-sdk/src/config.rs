//! Configuration types for ConditionEngine

use crate::error::{Result, SdkError};
use serde::{Deserialize, Serialize};
use sidebar_conditions_core::{FeatureAvailability, GroupSummary, MemberType};
use std::path::Path;
use tracing::debug;

/// Main engine configuration
///
/// ```yaml
/// availability:
///   activity: true
///   groups: true
/// member_types:
///   - name: teacher
///     singular_name: Teacher
/// groups:
///   - id: 5
///     name: Alpha
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Active components of the site
    pub availability: FeatureAvailability,

    /// Member types; absent when the site has no member type support
    pub member_types: Option<Vec<MemberType>>,

    /// Groups, alphabetical
    pub groups: Vec<GroupSummary>,

    /// Look the settings component up under its historical misspelled name,
    /// which no installation registers. Drops `bp-settings` from the catalog.
    pub legacy_settings_lookup: bool,

    /// Leave member types and groups with empty names out of the catalog
    /// (logged with `warn!`) and check that no condition key is listed under
    /// two groups
    pub validate_catalog: bool,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            availability: FeatureAvailability::default(),
            member_types: None,
            groups: Vec::new(),
            legacy_settings_lookup: false,
            validate_catalog: true,
        }
    }

    /// Parse configuration from YAML
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading condition config from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content).map_err(|e| match e {
            SdkError::YamlError(err) => {
                SdkError::ConfigError(format!("{}: {}", path.display(), err))
            }
            other => other,
        })
    }

    /// Set component availability
    pub fn with_availability(mut self, availability: FeatureAvailability) -> Self {
        self.availability = availability;
        self
    }

    /// Set member types
    pub fn with_member_types(mut self, member_types: Vec<MemberType>) -> Self {
        self.member_types = Some(member_types);
        self
    }

    /// Set groups
    pub fn with_groups(mut self, groups: Vec<GroupSummary>) -> Self {
        self.groups = groups;
        self
    }

    /// Enable the legacy settings lookup
    pub fn legacy_settings_lookup(mut self, enable: bool) -> Self {
        self.legacy_settings_lookup = enable;
        self
    }

    /// Enable catalog validation
    pub fn validate_catalog(mut self, enable: bool) -> Self {
        self.validate_catalog = enable;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.availability, FeatureAvailability::none());
        assert!(config.member_types.is_none());
        assert!(config.groups.is_empty());
        assert!(!config.legacy_settings_lookup);
        assert!(config.validate_catalog);
    }

    #[test]
    fn test_from_yaml_str() {
        let config = EngineConfig::from_yaml_str(
            r#"
availability:
  activity: true
  groups: true
member_types:
  - name: teacher
    singular_name: Teacher
groups:
  - id: 5
    name: Alpha
legacy_settings_lookup: true
"#,
        )
        .unwrap();

        assert!(config.availability.activity);
        assert!(config.availability.groups);
        assert!(!config.availability.messages);
        assert_eq!(
            config.member_types,
            Some(vec![MemberType::new("teacher", "Teacher")])
        );
        assert_eq!(config.groups, vec![GroupSummary::new(5, "Alpha")]);
        assert!(config.legacy_settings_lookup);
        assert!(config.validate_catalog);
    }

    #[test]
    fn test_from_yaml_str_invalid() {
        let result = EngineConfig::from_yaml_str("groups: [{id: \"five\"}]");
        assert!(matches!(result, Err(SdkError::YamlError(_))));
    }
}
