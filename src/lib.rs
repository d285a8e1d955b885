//! Typed request models for the node provisioning API, with strict JSON
//! decoding and a tri-state nullable wrapper.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod logging;

pub use crate::core::model::{MappedModel, Nullable, StrictModel};
pub use crate::domain::node::dto::node_creation_request::{
    NodeCreationRequest, NullableNodeCreationRequest,
};
pub use crate::errors::ModelError;
