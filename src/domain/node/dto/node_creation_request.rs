use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnNull};

use crate::core::model::{
    check_object, decode_strict, FiniteF32, MappedModel, Nullable, StrictModel,
};
use crate::core::util::secret_util::SecretUtil;
use crate::domain::runner::runner_region::RunnerRegion;
use crate::errors::ModelError;

/// Payload for provisioning a compute node.
///
/// Every field is required on the wire and always emitted, zero values
/// included. Decoding is strict: missing keys, unknown keys and mistyped
/// values are all rejected. An explicit `null` decodes to the zero value.
/// Numbers must fit a finite `f32` both ways; encoding NaN or an infinity
/// fails with [`ModelError::Encoding`].
#[serde_as]
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct NodeCreationRequest {
    /// Target domain name for the node.
    pub domain: String,
    /// API endpoint of the node.
    pub api_url: String,
    /// Credential the platform uses against the node API.
    pub api_key: String,
    /// Allocated CPU units.
    #[serde_as(serialize_as = "FiniteF32")]
    pub cpu: f32,
    #[serde_as(serialize_as = "FiniteF32")]
    pub memory: f32,
    #[serde_as(serialize_as = "FiniteF32")]
    pub disk: f32,
    /// Allocated GPU units. Zero is a valid allocation.
    #[serde_as(serialize_as = "FiniteF32")]
    pub gpu: f32,
    /// GPU model identifier.
    pub gpu_type: String,
    /// Node class / tier label.
    pub class: String,
    #[serde_as(serialize_as = "FiniteF32")]
    pub capacity: f32,
    /// Deployment region.
    pub region: String,
}

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawNodeCreationRequest {
    #[serde_as(as = "DefaultOnNull")]
    domain: String,
    #[serde_as(as = "DefaultOnNull")]
    api_url: String,
    #[serde_as(as = "DefaultOnNull")]
    api_key: String,
    #[serde_as(as = "DefaultOnNull<FiniteF32>")]
    cpu: f32,
    #[serde_as(as = "DefaultOnNull<FiniteF32>")]
    memory: f32,
    #[serde_as(as = "DefaultOnNull<FiniteF32>")]
    disk: f32,
    #[serde_as(as = "DefaultOnNull<FiniteF32>")]
    gpu: f32,
    #[serde_as(as = "DefaultOnNull")]
    gpu_type: String,
    #[serde_as(as = "DefaultOnNull")]
    class: String,
    #[serde_as(as = "DefaultOnNull<FiniteF32>")]
    capacity: f32,
    #[serde_as(as = "DefaultOnNull")]
    region: String,
}

impl From<RawNodeCreationRequest> for NodeCreationRequest {
    fn from(value: RawNodeCreationRequest) -> Self {
        Self {
            domain: value.domain,
            api_url: value.api_url,
            api_key: value.api_key,
            cpu: value.cpu,
            memory: value.memory,
            disk: value.disk,
            gpu: value.gpu,
            gpu_type: value.gpu_type,
            class: value.class,
            capacity: value.capacity,
            region: value.region,
        }
    }
}

const NODE_CREATION_PROPERTIES: &[&str] = &[
    "domain", "apiUrl", "apiKey", "cpu", "memory", "disk", "gpu", "gpuType", "class", "capacity",
    "region",
];

impl StrictModel for NodeCreationRequest {
    type Raw = RawNodeCreationRequest;
    const PROPERTIES: &'static [&'static str] = NODE_CREATION_PROPERTIES;
    const REQUIRED: &'static [&'static str] = NODE_CREATION_PROPERTIES;
}

impl MappedModel for NodeCreationRequest {}

impl TryFrom<Map<String, Value>> for NodeCreationRequest {
    type Error = ModelError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        check_object(map)
    }
}

impl NodeCreationRequest {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        domain: impl Into<String>,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        cpu: f32,
        memory: f32,
        disk: f32,
        gpu: f32,
        gpu_type: impl Into<String>,
        class: impl Into<String>,
        capacity: f32,
        region: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            cpu,
            memory,
            disk,
            gpu,
            gpu_type: gpu_type.into(),
            class: class.into(),
            capacity,
            region: region.into(),
        }
    }

    /// All fields at their zero value; a fill target before assignment or decoding.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        decode_strict(bytes)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ModelError> {
        Self::from_json(s.as_bytes())
    }

    /// Decode into `self`. On error `self` is left untouched.
    pub fn decode_into(&mut self, bytes: &[u8]) -> Result<(), ModelError> {
        *self = Self::from_json(bytes)?;
        Ok(())
    }

    /// The known runner region matching `region`, if any.
    pub fn runner_region(&self) -> Option<RunnerRegion> {
        RunnerRegion::from_code(&self.region)
    }

    pub fn masked_api_key(&self) -> String {
        SecretUtil::mask(&self.api_key)
    }
}

impl FromStr for NodeCreationRequest {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

impl fmt::Debug for NodeCreationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCreationRequest")
            .field("domain", &self.domain)
            .field("api_url", &self.api_url)
            .field("api_key", &self.masked_api_key())
            .field("cpu", &self.cpu)
            .field("memory", &self.memory)
            .field("disk", &self.disk)
            .field("gpu", &self.gpu)
            .field("gpu_type", &self.gpu_type)
            .field("class", &self.class)
            .field("capacity", &self.capacity)
            .field("region", &self.region)
            .finish()
    }
}

pub type NullableNodeCreationRequest = Nullable<NodeCreationRequest>;
