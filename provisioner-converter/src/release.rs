//! Kyma release metadata lookup

use std::collections::HashMap;

#[cfg(test)]
use mockall::automock;
use provisioner_models::release::Release;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReleaseError {
    #[error("release {version} not found")]
    NotFound { version: String },

    #[error("release metadata unavailable: {0}")]
    Unavailable(String),
}

impl ReleaseError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReleaseError::NotFound { .. })
    }
}

/// Looks up the default content of a Kyma release
#[cfg_attr(test, automock)]
pub trait ReleaseProvider: Send + Sync {
    fn get_release_by_version(&self, version: &str) -> Result<Release, ReleaseError>;
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid release catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("release {version} defined more than once")]
    DuplicateVersion { version: String },

    #[error("release with empty version")]
    EmptyVersion,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    releases: Vec<Release>,
}

/// In-memory set of releases, keyed by version
#[derive(Debug, Clone, Default)]
pub struct ReleaseCatalog {
    releases: HashMap<String, Release>,
}

impl ReleaseCatalog {
    pub fn new(releases: impl IntoIterator<Item = Release>) -> Result<Self, CatalogError> {
        let mut by_version = HashMap::new();
        for release in releases {
            if release.version.trim().is_empty() {
                return Err(CatalogError::EmptyVersion);
            }
            if by_version.contains_key(&release.version) {
                return Err(CatalogError::DuplicateVersion {
                    version: release.version,
                });
            }
            by_version.insert(release.version.clone(), release);
        }

        Ok(Self {
            releases: by_version,
        })
    }

    /// Parse a catalog document of the form `releases: [...]`
    pub fn from_yaml(document: &str) -> Result<Self, CatalogError> {
        let parsed: CatalogDocument = serde_yaml::from_str(document)?;
        Self::new(parsed.releases)
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// Releases sorted by version
    pub fn releases(&self) -> Vec<&Release> {
        let mut releases: Vec<&Release> = self.releases.values().collect();
        releases.sort_by(|a, b| a.version.cmp(&b.version));
        releases
    }
}

impl ReleaseProvider for ReleaseCatalog {
    fn get_release_by_version(&self, version: &str) -> Result<Release, ReleaseError> {
        self.releases
            .get(version)
            .cloned()
            .ok_or_else(|| ReleaseError::NotFound {
                version: version.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"
releases:
  - version: "1.12"
    components:
      - component: cluster-essentials
        namespace: kyma-system
      - component: core
        namespace: kyma-system
        configuration:
          - key: test.config.key
            value: value
  - version: "1.11"
"#;

    #[test]
    fn test_catalog_from_yaml_resolves_versions() {
        let catalog = ReleaseCatalog::from_yaml(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        let release = catalog.get_release_by_version("1.12").unwrap();
        assert_eq!(release.components.len(), 2);
        assert_eq!(release.components[1].component, "core");
        assert_eq!(release.components[1].configuration[0].key, "test.config.key");
        assert!(catalog.get_release_by_version("1.11").unwrap().components.is_empty());
    }

    #[test]
    fn test_catalog_reports_unknown_version_as_not_found() {
        let catalog = ReleaseCatalog::from_yaml(CATALOG).unwrap();

        let err = catalog.get_release_by_version("2.0").unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "release 2.0 not found");
    }

    #[test]
    fn test_catalog_rejects_duplicate_versions() {
        let releases = vec![
            Release {
                version: "1.12".to_string(),
                components: vec![],
            },
            Release {
                version: "1.12".to_string(),
                components: vec![],
            },
        ];

        let err = ReleaseCatalog::new(releases).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateVersion { version } if version == "1.12"));
    }

    #[test]
    fn test_catalog_rejects_empty_version() {
        let err = ReleaseCatalog::new(vec![Release::default()]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyVersion));
    }

    #[test]
    fn test_catalog_lists_releases_sorted() {
        let catalog = ReleaseCatalog::from_yaml(CATALOG).unwrap();

        let versions: Vec<&str> = catalog.releases().iter().map(|r| r.version.as_str()).collect();

        assert_eq!(versions, vec!["1.11", "1.12"]);
    }

    #[test]
    fn test_empty_document_gives_empty_catalog() {
        let catalog = ReleaseCatalog::from_yaml("releases: []").unwrap();
        assert!(catalog.is_empty());
    }
}
