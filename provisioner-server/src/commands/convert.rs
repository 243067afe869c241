use std::path::Path;

use anyhow::{Context, Result};
use provisioner_converter::InputConverter;
use provisioner_models::gqlschema::ProvisionRuntimeInput;
use provisioner_models::model::{Cluster, ClusterConfig};
use uuid::Uuid;

/// Tenant used when only checking whether a request converts
const VALIDATION_TENANT: &str = "validation";

pub fn run_convert(
    converter: &InputConverter,
    input: &Path,
    tenant: &str,
    sub_account: Option<&str>,
    runtime_id: Option<String>,
    output: &str,
) -> Result<()> {
    let request = read_request(input)?;
    let runtime_id = runtime_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    let cluster = converter
        .convert(&runtime_id, &request, tenant, sub_account)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("{}", render(&cluster, output)?);
    Ok(())
}

pub fn run_validate(converter: &InputConverter, input: &Path) -> Result<()> {
    let request = read_request(input)?;
    let runtime_id = Uuid::new_v4().to_string();

    match converter.convert(&runtime_id, &request, VALIDATION_TENANT, None) {
        Ok(cluster) => {
            println!("✓ {} is valid", input.display());
            println!("  Provider:   {}", describe_provider(&cluster.cluster_config));
            println!("  Kyma:       {}", cluster.kyma_config.release_version);
            println!("  Components: {}", cluster.kyma_config.components.len());
            if let Some(details) = provider_details(&cluster.cluster_config) {
                println!("  Details:    {}", details);
            }
            Ok(())
        }
        Err(err) => {
            println!("✗ {} is invalid [{}]", input.display(), err.kind());
            println!("  {}", err);
            anyhow::bail!("Validation failed")
        }
    }
}

/// Parse a request, as JSON for `.json` files and as YAML otherwise
pub fn read_request(path: &Path) -> Result<ProvisionRuntimeInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request {}", path.display()))?;
    parse_request(&content, path)
}

fn parse_request(content: &str, path: &Path) -> Result<ProvisionRuntimeInput> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(content)
            .with_context(|| format!("Invalid JSON request {}", path.display()))
    } else {
        serde_yaml::from_str(content)
            .with_context(|| format!("Invalid YAML request {}", path.display()))
    }
}

fn render(cluster: &Cluster, output: &str) -> Result<String> {
    match output {
        "json" => Ok(serde_json::to_string_pretty(cluster)?),
        "yaml" => Ok(serde_yaml::to_string(cluster)?),
        other => anyhow::bail!("Unknown output format '{}' (expected json or yaml)", other),
    }
}

fn describe_provider(config: &ClusterConfig) -> String {
    match config {
        ClusterConfig::Gcp(gcp) => format!("gcp ({})", gcp.region),
        ClusterConfig::Gardener(gardener) => format!(
            "gardener/{} ({})",
            gardener.gardener_provider_config.provider_name(),
            gardener.region
        ),
    }
}

/// Provider-specific settings as persisted for Gardener clusters
fn provider_details(config: &ClusterConfig) -> Option<String> {
    match config {
        ClusterConfig::Gcp(_) => None,
        ClusterConfig::Gardener(gardener) => {
            Some(gardener.gardener_provider_config.provider_specific_config())
        }
    }
}
