use anyhow::{Context, Result};
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::core::model::MappedModel;
use crate::domain::node::dto::node_creation_request::NodeCreationRequest;
use crate::errors::ModelError;

/// Decode and check a node creation payload.
pub fn validate_node_request(bytes: &[u8]) -> Result<NodeCreationRequest> {
    match NodeCreationRequest::from_json(bytes) {
        Ok(req) => {
            info!(domain = %req.domain, region = %req.region, "Node creation request is valid");
            debug!(request = ?req, "Decoded node creation request");
            Ok(req)
        }
        Err(err) => {
            // Reported once by the caller; the kind rides along in the context.
            let kind = error_kind(&err);
            Err(err).with_context(|| format!("Invalid node creation request ({kind})"))
        }
    }
}

/// Decode a payload and write it back out in canonical form.
pub fn normalize_node_request(bytes: &[u8], pretty: bool) -> Result<String> {
    let req = validate_node_request(bytes)?;
    encode(&req, pretty)
}

/// JSON for a request with every field at its zero value.
pub fn template_node_request(pretty: bool) -> Result<String> {
    encode(&NodeCreationRequest::empty(), pretty)
}

pub fn encode(req: &NodeCreationRequest, pretty: bool) -> Result<String> {
    let out = if pretty {
        req.to_json_pretty()
    } else {
        req.to_json()
    };
    out.context("Failed to encode node creation request")
}

/// Short summary safe to print or log: the API key is masked.
pub fn summarize(req: &NodeCreationRequest) -> Value {
    json!({
        "domain": req.domain,
        "apiUrl": req.api_url,
        "apiKey": req.masked_api_key(),
        "class": req.class,
        "region": req.region,
        "knownRegion": req.runner_region().map(|r| r.as_code()),
    })
}

fn error_kind(err: &ModelError) -> &'static str {
    match err {
        ModelError::MalformedPayload(_) => "malformed_payload",
        ModelError::MissingRequiredField(_) => "missing_required_field",
        ModelError::UnknownField(_) => "unknown_field",
        ModelError::TypeMismatch(_) => "type_mismatch",
        ModelError::Encoding(_) => "encoding",
    }
}
