use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::core::model::MappedModel;
use crate::errors::ModelError;

/// Quota limits for a new organization. Every limit is optional.
///
/// Unlike the strict request models this one is lenient: keys it does not
/// know are kept in `additional_properties` and written back out at the top
/// level on encode.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationQuota {
    pub total_cpu_quota: Option<f64>,
    pub total_memory_quota: Option<f64>,
    pub total_disk_quota: Option<f64>,
    pub max_cpu_per_sandbox: Option<f64>,
    pub max_memory_per_sandbox: Option<f64>,
    pub max_disk_per_sandbox: Option<f64>,
    pub snapshot_quota: Option<f64>,
    pub max_snapshot_size: Option<f64>,
    pub volume_quota: Option<f64>,

    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl MappedModel for CreateOrganizationQuota {}

impl CreateOrganizationQuota {
    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        serde_json::from_slice(bytes).map_err(ModelError::from_json)
    }
}
