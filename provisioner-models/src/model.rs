//! Internal cluster model handed to persistence and orchestration

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::gqlschema::{AwsProviderConfigInput, AzureProviderConfigInput, GcpProviderConfigInput};
use crate::ValidationError;

/// A runtime cluster as stored by the provisioner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Runtime ID assigned by the caller
    pub id: String,
    pub cluster_config: ClusterConfig,
    /// Filled in once the cluster has been created
    pub kubeconfig: Option<String>,
    pub kyma_config: KymaConfig,
    pub credentials_secret_name: String,
    pub creation_timestamp: Option<DateTime<Utc>>,
    pub deleted: bool,
    pub tenant: String,
    pub sub_account_id: Option<String>,
}

/// Provider configuration of a cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ClusterConfig {
    Gcp(GcpConfig),
    Gardener(GardenerConfig),
}

impl ClusterConfig {
    pub fn id(&self) -> &str {
        match self {
            ClusterConfig::Gcp(config) => &config.id,
            ClusterConfig::Gardener(config) => &config.id,
        }
    }

    pub fn cluster_id(&self) -> &str {
        match self {
            ClusterConfig::Gcp(config) => &config.cluster_id,
            ClusterConfig::Gardener(config) => &config.cluster_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcpConfig {
    pub id: String,
    pub name: String,
    pub project_name: String,
    pub number_of_nodes: i32,
    pub boot_disk_size_gb: i32,
    pub machine_type: String,
    pub region: String,
    /// Empty when the request did not pin a zone
    pub zone: String,
    pub kubernetes_version: String,
    pub cluster_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GardenerConfig {
    pub id: String,
    /// Generated shoot name
    pub name: String,
    /// Gardener project the shoot is created in
    pub project_name: String,
    pub machine_type: String,
    pub region: String,
    pub kubernetes_version: String,
    pub volume_size_gb: i32,
    pub disk_type: String,
    pub provider: String,
    /// Empty when Gardener should pick the seed
    pub seed: String,
    pub target_secret: String,
    pub worker_cidr: String,
    pub auto_scaler_min: i32,
    pub auto_scaler_max: i32,
    pub max_surge: i32,
    pub max_unavailable: i32,
    pub cluster_id: String,
    pub gardener_provider_config: GardenerProviderConfig,
}

// ============================================================================
// Gardener Provider Config
// ============================================================================

/// Cloud-specific part of a Gardener cluster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GardenerProviderConfig {
    Gcp(GcpGardenerConfig),
    Azure(AzureGardenerConfig),
    Aws(AwsGardenerConfig),
}

impl GardenerProviderConfig {
    pub fn id(&self) -> &str {
        match self {
            GardenerProviderConfig::Gcp(config) => &config.id,
            GardenerProviderConfig::Azure(config) => &config.id,
            GardenerProviderConfig::Aws(config) => &config.id,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            GardenerProviderConfig::Gcp(_) => "gcp",
            GardenerProviderConfig::Azure(_) => "azure",
            GardenerProviderConfig::Aws(_) => "aws",
        }
    }

    /// JSON document stored alongside the Gardener config row
    pub fn provider_specific_config(&self) -> String {
        let value = match self {
            GardenerProviderConfig::Gcp(config) => json!({ "zones": config.zones }),
            GardenerProviderConfig::Azure(config) => json!({
                "vnetCidr": config.vnet_cidr,
                "zones": config.zones,
            }),
            GardenerProviderConfig::Aws(config) => json!({
                "zone": config.zone,
                "internalCidr": config.internal_cidr,
                "vpcCidr": config.vpc_cidr,
                "publicCidr": config.public_cidr,
            }),
        };
        value.to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcpGardenerConfig {
    pub id: String,
    pub zones: Vec<String>,
}

impl GcpGardenerConfig {
    pub fn new(
        id: impl Into<String>,
        input: &GcpProviderConfigInput,
    ) -> Result<Self, ValidationError> {
        if input.zones.is_empty() {
            return Err(ValidationError::new("gcp provider config: at least one zone is required"));
        }
        validate_zones("gcp", &input.zones)?;

        Ok(Self {
            id: id.into(),
            zones: input.zones.clone(),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AzureGardenerConfig {
    pub id: String,
    pub vnet_cidr: String,
    /// Empty for a non-zonal cluster
    pub zones: Vec<String>,
}

impl AzureGardenerConfig {
    pub fn new(
        id: impl Into<String>,
        input: &AzureProviderConfigInput,
    ) -> Result<Self, ValidationError> {
        require("azure", "vnetCidr", &input.vnet_cidr)?;
        let zones = input.zones.clone().unwrap_or_default();
        validate_zones("azure", &zones)?;

        Ok(Self {
            id: id.into(),
            vnet_cidr: input.vnet_cidr.clone(),
            zones,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AwsGardenerConfig {
    pub id: String,
    pub zone: String,
    pub internal_cidr: String,
    pub vpc_cidr: String,
    pub public_cidr: String,
}

impl AwsGardenerConfig {
    pub fn new(
        id: impl Into<String>,
        input: &AwsProviderConfigInput,
    ) -> Result<Self, ValidationError> {
        require("aws", "zone", &input.zone)?;
        require("aws", "internalCidr", &input.internal_cidr)?;
        require("aws", "vpcCidr", &input.vpc_cidr)?;
        require("aws", "publicCidr", &input.public_cidr)?;

        Ok(Self {
            id: id.into(),
            zone: input.zone.clone(),
            internal_cidr: input.internal_cidr.clone(),
            vpc_cidr: input.vpc_cidr.clone(),
            public_cidr: input.public_cidr.clone(),
        })
    }
}

fn require(provider: &str, field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(format!(
            "{} provider config: {} must not be empty",
            provider, field
        )));
    }
    Ok(())
}

fn validate_zones(provider: &str, zones: &[String]) -> Result<(), ValidationError> {
    if zones.iter().any(|zone| zone.trim().is_empty()) {
        return Err(ValidationError::new(format!(
            "{} provider config: zones must not contain empty entries",
            provider
        )));
    }
    Ok(())
}

// ============================================================================
// Kyma Config
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KymaConfig {
    pub id: String,
    pub release_version: String,
    /// Components in installation order
    pub components: Vec<KymaComponentConfig>,
    pub global_configuration: Configuration,
    pub cluster_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KymaComponentConfig {
    pub id: String,
    pub component: String,
    pub namespace: String,
    pub source_url: Option<String>,
    pub configuration: Configuration,
    /// 1-based position in the installation order
    pub component_order: usize,
    pub kyma_config_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub config_entries: Vec<ConfigEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
    pub secret: bool,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, secret: bool) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            secret,
        }
    }
}
