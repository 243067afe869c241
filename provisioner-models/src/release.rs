use serde::{Deserialize, Serialize};

use crate::gqlschema::ComponentConfigurationInput;

/// Default installation content of a Kyma release
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub version: String,
    /// Components installed when a request does not list its own, in order
    #[serde(default)]
    pub components: Vec<ComponentConfigurationInput>,
}
