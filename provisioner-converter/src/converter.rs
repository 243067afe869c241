//! Conversion of provisioning requests into the cluster model

use std::sync::Arc;

use provisioner_models::gqlschema::{
    ClusterConfigInput, ComponentConfigurationInput, ConfigEntryInput, GardenerConfigInput,
    GardenerProviderInput, GcpConfigInput, KymaConfigInput, ProviderInput, ProvisionRuntimeInput,
};
use provisioner_models::model::{
    AwsGardenerConfig, AzureGardenerConfig, Cluster, ClusterConfig, ConfigEntry, Configuration,
    GardenerConfig, GardenerProviderConfig, GcpConfig, GcpGardenerConfig, KymaComponentConfig,
    KymaConfig,
};
use provisioner_models::ValidationError;
use tracing::{debug, info, warn};

use crate::errors::ConversionError;
use crate::names::gardener_cluster_name;
use crate::release::ReleaseProvider;
use crate::uuid::UuidGenerator;

/// Converts provisioning requests into [`Cluster`] models.
///
/// Holds no per-call state; one instance can serve concurrent callers.
pub struct InputConverter {
    uuid_generator: Arc<dyn UuidGenerator>,
    release_provider: Arc<dyn ReleaseProvider>,
    gardener_project: String,
}

impl InputConverter {
    pub fn new(
        uuid_generator: Arc<dyn UuidGenerator>,
        release_provider: Arc<dyn ReleaseProvider>,
        gardener_project: impl Into<String>,
    ) -> Self {
        Self {
            uuid_generator,
            release_provider,
            gardener_project: gardener_project.into(),
        }
    }

    /// Build the cluster model for `runtime_id` from a provisioning request.
    ///
    /// The runtime ID becomes the cluster ID; nested objects get fresh IDs
    /// from the generator. The credentials secret name is not carried over.
    pub fn convert(
        &self,
        runtime_id: &str,
        input: &ProvisionRuntimeInput,
        tenant: &str,
        sub_account_id: Option<&str>,
    ) -> Result<Cluster, ConversionError> {
        let cluster_config_input = input.cluster_config.as_ref().ok_or_else(|| {
            ValidationError::new(
                "cluster config does not match any provider: clusterConfig not specified",
            )
        })?;
        let cluster_config = self.cluster_config_from_input(runtime_id, cluster_config_input)?;

        let kyma_config_input = input
            .kyma_config
            .as_ref()
            .ok_or_else(|| ValidationError::new("kyma config not specified"))?;
        let kyma_config = self.kyma_config_from_input(runtime_id, kyma_config_input)?;

        info!(
            runtime_id,
            tenant,
            provider = provider_label(&cluster_config),
            kyma_version = %kyma_config.release_version,
            components = kyma_config.components.len(),
            "Converted provisioning input to cluster"
        );

        Ok(Cluster {
            id: runtime_id.to_string(),
            cluster_config,
            kubeconfig: None,
            kyma_config,
            credentials_secret_name: String::new(),
            creation_timestamp: None,
            deleted: false,
            tenant: tenant.to_string(),
            sub_account_id: sub_account_id.map(str::to_string),
        })
    }

    // ========================================================================
    // Cluster Config
    // ========================================================================

    fn cluster_config_from_input(
        &self,
        runtime_id: &str,
        input: &ClusterConfigInput,
    ) -> Result<ClusterConfig, ConversionError> {
        match input.provider()? {
            ProviderInput::Gcp(gcp) => {
                debug!(runtime_id, "Cluster config targets GCP");
                Ok(ClusterConfig::Gcp(self.gcp_config_from_input(runtime_id, gcp)))
            }
            ProviderInput::Gardener(gardener) => {
                debug!(
                    runtime_id,
                    provider = %gardener.provider,
                    "Cluster config targets Gardener"
                );
                Ok(ClusterConfig::Gardener(
                    self.gardener_config_from_input(runtime_id, gardener)?,
                ))
            }
        }
    }

    fn gcp_config_from_input(&self, runtime_id: &str, input: &GcpConfigInput) -> GcpConfig {
        GcpConfig {
            id: self.uuid_generator.generate(),
            name: input.name.clone(),
            project_name: input.project_name.clone(),
            number_of_nodes: input.number_of_nodes,
            boot_disk_size_gb: input.boot_disk_size_gb,
            machine_type: input.machine_type.clone(),
            region: input.region.clone(),
            zone: input.zone.clone().unwrap_or_default(),
            kubernetes_version: input.kubernetes_version.clone(),
            cluster_id: runtime_id.to_string(),
        }
    }

    fn gardener_config_from_input(
        &self,
        runtime_id: &str,
        input: &GardenerConfigInput,
    ) -> Result<GardenerConfig, ConversionError> {
        let id = self.uuid_generator.generate();
        let name = gardener_cluster_name(&self.uuid_generator.generate());
        let gardener_provider_config = self.gardener_provider_config_from_input(input)?;

        Ok(GardenerConfig {
            id,
            name,
            project_name: self.gardener_project.clone(),
            machine_type: input.machine_type.clone(),
            region: input.region.clone(),
            kubernetes_version: input.kubernetes_version.clone(),
            volume_size_gb: input.volume_size_gb,
            disk_type: input.disk_type.clone(),
            provider: input.provider.clone(),
            seed: input.seed.clone().unwrap_or_default(),
            target_secret: input.target_secret.clone(),
            worker_cidr: input.worker_cidr.clone(),
            auto_scaler_min: input.auto_scaler_min,
            auto_scaler_max: input.auto_scaler_max,
            max_surge: input.max_surge,
            max_unavailable: input.max_unavailable,
            cluster_id: runtime_id.to_string(),
            gardener_provider_config,
        })
    }

    fn gardener_provider_config_from_input(
        &self,
        input: &GardenerConfigInput,
    ) -> Result<GardenerProviderConfig, ConversionError> {
        let provider = match &input.provider_specific_config {
            Some(specific) => specific.provider()?,
            None => None,
        };

        let config = match provider {
            Some(GardenerProviderInput::Gcp(gcp)) => GardenerProviderConfig::Gcp(
                GcpGardenerConfig::new(self.uuid_generator.generate(), gcp)?,
            ),
            Some(GardenerProviderInput::Azure(azure)) => GardenerProviderConfig::Azure(
                AzureGardenerConfig::new(self.uuid_generator.generate(), azure)?,
            ),
            Some(GardenerProviderInput::Aws(aws)) => GardenerProviderConfig::Aws(
                AwsGardenerConfig::new(self.uuid_generator.generate(), aws)?,
            ),
            None => return Err(ConversionError::ProviderConfigMissing),
        };

        debug!(backend = config.provider_name(), "Resolved Gardener provider config");
        Ok(config)
    }

    // ========================================================================
    // Kyma Config
    // ========================================================================

    fn kyma_config_from_input(
        &self,
        runtime_id: &str,
        input: &KymaConfigInput,
    ) -> Result<KymaConfig, ConversionError> {
        let release_components;
        let components = if input.components.is_empty() {
            debug!(version = %input.version, "No components requested, using release defaults");
            let release = self
                .release_provider
                .get_release_by_version(&input.version)
                .map_err(|source| {
                    warn!(version = %input.version, error = %source, "Failed to get Kyma release");
                    ConversionError::ReleaseLookup {
                        version: input.version.clone(),
                        source,
                    }
                })?;
            release_components = release.components;
            &release_components
        } else {
            &input.components
        };

        let kyma_config_id = self.uuid_generator.generate();
        let components = components
            .iter()
            .enumerate()
            .map(|(index, component)| {
                self.component_from_input(&kyma_config_id, index + 1, component)
            })
            .collect();

        Ok(KymaConfig {
            id: kyma_config_id,
            release_version: input.version.clone(),
            components,
            global_configuration: configuration_from_input(&input.configuration),
            cluster_id: runtime_id.to_string(),
        })
    }

    fn component_from_input(
        &self,
        kyma_config_id: &str,
        order: usize,
        input: &ComponentConfigurationInput,
    ) -> KymaComponentConfig {
        KymaComponentConfig {
            id: self.uuid_generator.generate(),
            component: input.component.clone(),
            namespace: input.namespace.clone(),
            source_url: input.source_url.clone(),
            configuration: configuration_from_input(&input.configuration),
            component_order: order,
            kyma_config_id: kyma_config_id.to_string(),
        }
    }
}

fn configuration_from_input(entries: &[ConfigEntryInput]) -> Configuration {
    Configuration {
        config_entries: entries
            .iter()
            .map(|entry| ConfigEntry::new(&entry.key, &entry.value, entry.secret.unwrap_or(false)))
            .collect(),
    }
}

fn provider_label(config: &ClusterConfig) -> &'static str {
    match config {
        ClusterConfig::Gcp(_) => "gcp",
        ClusterConfig::Gardener(gardener) => gardener.gardener_provider_config.provider_name(),
    }
}
