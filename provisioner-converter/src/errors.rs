use provisioner_models::ValidationError;
use thiserror::Error;

use crate::release::ReleaseError;

/// Why a provisioning request could not be converted
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("provider config not specified")]
    ProviderConfigMissing,

    #[error("failed to get Kyma release {version}: {source}")]
    ReleaseLookup {
        version: String,
        #[source]
        source: ReleaseError,
    },
}

impl ConversionError {
    /// Stable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::Validation(_) => "validation",
            ConversionError::ProviderConfigMissing => "provider_config_missing",
            ConversionError::ReleaseLookup { .. } => "release_lookup",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_release_lookup_keeps_source() {
        let err = ConversionError::ReleaseLookup {
            version: "1.5".to_string(),
            source: ReleaseError::NotFound {
                version: "1.5".to_string(),
            },
        };

        assert_eq!(err.kind(), "release_lookup");
        assert_eq!(
            err.to_string(),
            "failed to get Kyma release 1.5: release 1.5 not found"
        );
        assert!(err.source().is_some());
    }
}
