//! API-facing request types for runtime provisioning
//!
//! These mirror the GraphQL input objects accepted by the provisioner API.
//! Oneof-shaped inputs (cluster config, Gardener provider config) are plain
//! optional fields on the wire; use [`ClusterConfigInput::provider`] and
//! [`ProviderSpecificInput::provider`] to get a checked sum type.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Free-form runtime labels
pub type Labels = BTreeMap<String, serde_json::Value>;

// ============================================================================
// Provision Runtime
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRuntimeInput {
    #[serde(default)]
    pub runtime_input: Option<RuntimeInput>,
    #[serde(default)]
    pub cluster_config: Option<ClusterConfigInput>,
    #[serde(default)]
    pub credentials: Option<CredentialsInput>,
    #[serde(default)]
    pub kyma_config: Option<KymaConfigInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeInput {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Option<Labels>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsInput {
    /// Name of the secret holding the target account credentials
    pub secret_name: String,
}

// ============================================================================
// Cluster Config
// ============================================================================

/// Exactly one of the provider configs is expected to be set
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfigInput {
    #[serde(default)]
    pub gcp_config: Option<GcpConfigInput>,
    #[serde(default)]
    pub gardener_config: Option<GardenerConfigInput>,
}

/// The provider shape selected by a [`ClusterConfigInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderInput<'a> {
    Gcp(&'a GcpConfigInput),
    Gardener(&'a GardenerConfigInput),
}

impl ClusterConfigInput {
    /// Resolve which provider this config targets
    pub fn provider(&self) -> Result<ProviderInput<'_>, ValidationError> {
        match (&self.gcp_config, &self.gardener_config) {
            (Some(gcp), None) => Ok(ProviderInput::Gcp(gcp)),
            (None, Some(gardener)) => Ok(ProviderInput::Gardener(gardener)),
            (None, None) => Err(ValidationError::new(
                "cluster config does not match any provider",
            )),
            (Some(_), Some(_)) => Err(ValidationError::new(
                "cluster config matches multiple providers: gcpConfig, gardenerConfig",
            )),
        }
    }
}

/// Direct GCP cluster, provisioned without Gardener
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcpConfigInput {
    pub name: String,
    pub project_name: String,
    pub number_of_nodes: i32,
    pub boot_disk_size_gb: i32,
    pub machine_type: String,
    pub region: String,
    #[serde(default)]
    pub zone: Option<String>,
    pub kubernetes_version: String,
}

/// Cluster managed by Gardener on one of the supported clouds
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GardenerConfigInput {
    pub kubernetes_version: String,
    pub volume_size_gb: i32,
    pub machine_type: String,
    pub region: String,
    /// Cloud provider name as understood by Gardener (e.g. "GCP", "Azure", "AWS")
    pub provider: String,
    #[serde(default)]
    pub seed: Option<String>,
    /// Gardener secret binding used to access the cloud account
    pub target_secret: String,
    pub disk_type: String,
    pub worker_cidr: String,
    pub auto_scaler_min: i32,
    pub auto_scaler_max: i32,
    pub max_surge: i32,
    pub max_unavailable: i32,
    #[serde(default)]
    pub provider_specific_config: Option<ProviderSpecificInput>,
}

// ============================================================================
// Gardener Provider Specific Config
// ============================================================================

/// Exactly one of the cloud configs is expected to be set
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSpecificInput {
    #[serde(default)]
    pub gcp_config: Option<GcpProviderConfigInput>,
    #[serde(default)]
    pub azure_config: Option<AzureProviderConfigInput>,
    #[serde(default)]
    pub aws_config: Option<AwsProviderConfigInput>,
}

/// The cloud backend selected by a [`ProviderSpecificInput`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenerProviderInput<'a> {
    Gcp(&'a GcpProviderConfigInput),
    Azure(&'a AzureProviderConfigInput),
    Aws(&'a AwsProviderConfigInput),
}

impl GardenerProviderInput<'_> {
    /// Field name of this backend in the request
    pub fn field_name(&self) -> &'static str {
        match self {
            GardenerProviderInput::Gcp(_) => "gcpConfig",
            GardenerProviderInput::Azure(_) => "azureConfig",
            GardenerProviderInput::Aws(_) => "awsConfig",
        }
    }
}

impl ProviderSpecificInput {
    /// Resolve which cloud backend is configured.
    ///
    /// Returns `Ok(None)` when no backend is set at all.
    pub fn provider(&self) -> Result<Option<GardenerProviderInput<'_>>, ValidationError> {
        let mut present: Vec<GardenerProviderInput<'_>> = [
            self.gcp_config.as_ref().map(GardenerProviderInput::Gcp),
            self.azure_config.as_ref().map(GardenerProviderInput::Azure),
            self.aws_config.as_ref().map(GardenerProviderInput::Aws),
        ]
        .into_iter()
        .flatten()
        .collect();

        if present.len() > 1 {
            let names: Vec<&str> = present.iter().map(|p| p.field_name()).collect();
            return Err(ValidationError::new(format!(
                "provider config matches multiple providers: {}",
                names.join(", ")
            )));
        }

        Ok(present.pop())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GcpProviderConfigInput {
    pub zones: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AzureProviderConfigInput {
    pub vnet_cidr: String,
    #[serde(default)]
    pub zones: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AwsProviderConfigInput {
    pub zone: String,
    pub internal_cidr: String,
    pub vpc_cidr: String,
    pub public_cidr: String,
}

// ============================================================================
// Kyma Config
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KymaConfigInput {
    /// Kyma release version, used to look up default components
    pub version: String,
    /// Explicit component list; empty means "use the release defaults"
    #[serde(default)]
    pub components: Vec<ComponentConfigurationInput>,
    /// Global configuration entries
    #[serde(default)]
    pub configuration: Vec<ConfigEntryInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConfigurationInput {
    pub component: String,
    pub namespace: String,
    /// Overrides the release's source for this component
    #[serde(default, rename = "sourceURL", alias = "sourceUrl")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub configuration: Vec<ConfigEntryInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigEntryInput {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub secret: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cluster_config_matches_no_provider() {
        let err = ClusterConfigInput::default().provider().unwrap_err();
        assert!(err.to_string().contains("does not match any provider"));
    }

    #[test]
    fn test_cluster_config_with_both_shapes_is_rejected() {
        let config = ClusterConfigInput {
            gcp_config: Some(GcpConfigInput::default()),
            gardener_config: Some(GardenerConfigInput::default()),
        };

        let err = config.provider().unwrap_err();
        assert!(err.to_string().contains("multiple providers"));
    }

    #[test]
    fn test_cluster_config_selects_populated_shape() {
        let config = ClusterConfigInput {
            gcp_config: None,
            gardener_config: Some(GardenerConfigInput::default()),
        };

        assert!(matches!(config.provider(), Ok(ProviderInput::Gardener(_))));
    }

    #[test]
    fn test_provider_specific_input_without_backend_is_none() {
        assert_eq!(ProviderSpecificInput::default().provider(), Ok(None));
    }

    #[test]
    fn test_provider_specific_input_with_two_backends_names_both() {
        let input = ProviderSpecificInput {
            gcp_config: Some(GcpProviderConfigInput::default()),
            azure_config: None,
            aws_config: Some(AwsProviderConfigInput::default()),
        };

        let err = input.provider().unwrap_err();
        assert_eq!(
            err.message(),
            "provider config matches multiple providers: gcpConfig, awsConfig"
        );
    }

    #[test]
    fn test_provision_runtime_input_parses_camel_case_json() {
        let json = r#"{
            "runtimeInput": { "name": "runtimeName" },
            "clusterConfig": {
                "gardenerConfig": {
                    "kubernetesVersion": "1.16",
                    "volumeSizeGb": 50,
                    "machineType": "Standard_D8_v3",
                    "region": "westeurope",
                    "provider": "Azure",
                    "targetSecret": "azure-secret",
                    "diskType": "Standard_LRS",
                    "workerCidr": "10.250.0.0/19",
                    "autoScalerMin": 2,
                    "autoScalerMax": 4,
                    "maxSurge": 4,
                    "maxUnavailable": 1,
                    "providerSpecificConfig": {
                        "azureConfig": { "vnetCidr": "10.250.0.0/19" }
                    }
                }
            },
            "kymaConfig": {
                "version": "1.12",
                "components": [
                    {
                        "component": "rafter",
                        "namespace": "kyma-system",
                        "sourceURL": "github.com/kyma-project/kyma.git//resources/rafter"
                    }
                ],
                "configuration": [
                    { "key": "global.secret.key", "value": "v", "secret": true }
                ]
            }
        }"#;

        let input: ProvisionRuntimeInput = serde_json::from_str(json).unwrap();

        let cluster_config = input.cluster_config.unwrap();
        let ProviderInput::Gardener(gardener) = cluster_config.provider().unwrap() else {
            panic!("expected gardener config");
        };
        assert_eq!(gardener.worker_cidr, "10.250.0.0/19");
        assert_eq!(gardener.seed, None);
        let specific = gardener.provider_specific_config.as_ref().unwrap();
        assert!(matches!(
            specific.provider(),
            Ok(Some(GardenerProviderInput::Azure(azure))) if azure.zones.is_none()
        ));

        let kyma = input.kyma_config.unwrap();
        assert_eq!(
            kyma.components[0].source_url.as_deref(),
            Some("github.com/kyma-project/kyma.git//resources/rafter")
        );
        assert_eq!(kyma.configuration[0].secret, Some(true));
        assert!(input.credentials.is_none());
    }

    #[test]
    fn test_provision_runtime_input_parses_yaml() {
        let yaml = r#"
clusterConfig:
  gcpConfig:
    name: cluster
    projectName: project
    numberOfNodes: 3
    bootDiskSizeGb: 256
    machineType: n1-standard-1
    region: europe-west3
    kubernetesVersion: "1.15"
credentials:
  secretName: gcp-secret
kymaConfig:
  version: "1.12"
"#;

        let input: ProvisionRuntimeInput = serde_yaml::from_str(yaml).unwrap();

        let cluster_config = input.cluster_config.unwrap();
        let ProviderInput::Gcp(gcp) = cluster_config.provider().unwrap() else {
            panic!("expected gcp config");
        };
        assert_eq!(gcp.zone, None);
        assert_eq!(gcp.kubernetes_version, "1.15");
        assert!(input.kyma_config.unwrap().components.is_empty());
    }
}
