use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::core::model::{check_object, decode_strict, MappedModel, StrictModel};
use crate::errors::ModelError;

/// Kind of container registry being registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistryType {
    Internal,
    Organization,
    Public,
    Transient,
}

impl RegistryType {
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Organization => "organization",
            Self::Public => "public",
            Self::Transient => "transient",
        }
    }

    pub fn from_code<S: AsRef<str>>(code: S) -> Option<Self> {
        match code.as_ref().to_ascii_lowercase().as_str() {
            "internal" => Some(Self::Internal),
            "organization" => Some(Self::Organization),
            "public" => Some(Self::Public),
            "transient" => Some(Self::Transient),
            _ => None,
        }
    }
}

/// Payload for registering a docker registry.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Map<String, Value>")]
pub struct CreateDockerRegistry {
    /// Registry name
    pub name: String,
    /// Registry URL
    pub url: String,
    pub username: String,
    pub password: String,
    /// Registry project
    pub project: Option<String>,
    pub registry_type: RegistryType,
    /// Set as default registry
    pub is_default: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawCreateDockerRegistry {
    name: String,
    url: String,
    username: String,
    password: String,
    #[serde(default)]
    project: Option<String>,
    registry_type: RegistryType,
    #[serde(default)]
    is_default: Option<bool>,
}

impl From<RawCreateDockerRegistry> for CreateDockerRegistry {
    fn from(value: RawCreateDockerRegistry) -> Self {
        Self {
            name: value.name,
            url: value.url,
            username: value.username,
            password: value.password,
            project: value.project,
            registry_type: value.registry_type,
            is_default: value.is_default,
        }
    }
}

impl StrictModel for CreateDockerRegistry {
    type Raw = RawCreateDockerRegistry;
    const PROPERTIES: &'static [&'static str] = &[
        "name",
        "url",
        "username",
        "password",
        "project",
        "registryType",
        "isDefault",
    ];
    const REQUIRED: &'static [&'static str] =
        &["name", "url", "username", "password", "registryType"];
}

impl MappedModel for CreateDockerRegistry {}

impl TryFrom<Map<String, Value>> for CreateDockerRegistry {
    type Error = ModelError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        check_object(map)
    }
}

impl CreateDockerRegistry {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        registry_type: RegistryType,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            username: username.into(),
            password: password.into(),
            project: None,
            registry_type,
            is_default: None,
        }
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, ModelError> {
        decode_strict(bytes)
    }
}
