use anyhow::{Context, Result};
use provisioner_converter::ReleaseCatalog;

use crate::config::Config;
use crate::db;

/// Build the release catalog from the configured source
pub async fn load_catalog(config: &Config) -> Result<ReleaseCatalog> {
    if let Some(path) = &config.releases_file {
        let document = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read release catalog {}", path.display()))?;
        let catalog = ReleaseCatalog::from_yaml(&document)
            .with_context(|| format!("Failed to parse release catalog {}", path.display()))?;
        tracing::info!("Loaded {} release(s) from {}", catalog.len(), path.display());
        return Ok(catalog);
    }

    let Some(db_url) = &config.database_url else {
        anyhow::bail!("No release source configured");
    };

    let releases = db::load_releases(db_url).await?;
    ReleaseCatalog::new(releases).context("Invalid release data in database")
}
