use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    /// Gardener project every managed cluster is created in
    pub gardener_project: String,
    /// YAML release catalog; takes precedence over the database
    pub releases_file: Option<PathBuf>,
    pub database_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = Self {
            gardener_project: non_empty("GARDENER_PROJECT")
                .context("GARDENER_PROJECT must be set")?,
            releases_file: non_empty("RELEASES_FILE").map(PathBuf::from),
            database_url: non_empty("DATABASE_URL"),
        };

        if config.releases_file.is_none() && config.database_url.is_none() {
            anyhow::bail!("Either RELEASES_FILE or DATABASE_URL must be set");
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_load_with_releases_file() {
        let config = Config::from_lookup(lookup(&[
            ("GARDENER_PROJECT", "gardener-project"),
            ("RELEASES_FILE", "/etc/provisioner/releases.yaml"),
        ]))
        .unwrap();

        assert_eq!(config.gardener_project, "gardener-project");
        assert_eq!(
            config.releases_file,
            Some(PathBuf::from("/etc/provisioner/releases.yaml"))
        );
        assert_eq!(config.database_url, None);
    }

    #[test]
    fn test_gardener_project_is_required() {
        let err = Config::from_lookup(lookup(&[(
            "DATABASE_URL",
            "postgres://localhost/provisioner",
        )]))
        .unwrap_err();
        assert!(err.to_string().contains("GARDENER_PROJECT"));
    }

    #[test]
    fn test_a_release_source_is_required() {
        let err = Config::from_lookup(lookup(&[
            ("GARDENER_PROJECT", "gardener-project"),
            ("DATABASE_URL", " "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("RELEASES_FILE or DATABASE_URL"));
    }
}
