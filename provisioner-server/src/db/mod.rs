use anyhow::{Context, Result};
use provisioner_models::gqlschema::ComponentConfigurationInput;
use provisioner_models::release::Release;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

async fn connect(db_url: &str) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(1)
        .connect(db_url)
        .await
        .context("Failed to connect to release database")
}

/// Verify that the release table exists
pub async fn verify_release_table(pool: &PgPool) -> Result<()> {
    let result: Option<(bool,)> = sqlx::query_as(
        "SELECT EXISTS (
            SELECT FROM information_schema.tables
            WHERE table_schema = 'provisioner'
            AND table_name = 'kyma_release'
        )"
    )
    .fetch_optional(pool)
    .await
    .context("Failed to check if release table exists")?;

    match result {
        Some((true,)) => Ok(()),
        _ => anyhow::bail!(
            "Release table not found. Please apply migrations/0001_kyma_release.sql\n\
             This creates the provisioner.kyma_release table."
        ),
    }
}

/// Load every release with its default components
pub async fn load_releases(db_url: &str) -> Result<Vec<Release>> {
    let pool = connect(db_url).await?;
    verify_release_table(&pool).await?;

    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT version, components::text FROM provisioner.kyma_release ORDER BY version"
    )
    .fetch_all(&pool)
    .await
    .context("Failed to load Kyma releases")?;

    tracing::info!("Loaded {} release(s) from database", rows.len());

    rows.into_iter()
        .map(|(version, components)| release_from_row(version, &components))
        .collect()
}

fn release_from_row(version: String, components: &str) -> Result<Release> {
    let components: Vec<ComponentConfigurationInput> = serde_json::from_str(components)
        .with_context(|| format!("Invalid component list stored for release {}", version))?;

    Ok(Release { version, components })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_from_row_parses_components() {
        let release = release_from_row(
            "1.12".to_string(),
            r#"[{
                "component": "core",
                "namespace": "kyma-system",
                "configuration": [{ "key": "k", "value": "v" }]
            }]"#,
        )
        .unwrap();

        assert_eq!(release.version, "1.12");
        assert_eq!(release.components[0].component, "core");
        assert_eq!(release.components[0].configuration[0].secret, None);
    }

    #[test]
    fn test_release_from_row_reports_version_on_bad_json() {
        let err = release_from_row("1.12".to_string(), "{").unwrap_err();
        assert!(err.to_string().contains("release 1.12"));
    }
}
