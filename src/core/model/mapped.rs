use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{encoding_error, ModelError};

/// Models that serialize to a JSON object.
pub trait MappedModel: Serialize {
    /// Key/value view of the model as it goes on the wire.
    fn to_map(&self) -> Result<Map<String, Value>, ModelError> {
        match serde_json::to_value(self).map_err(encoding_error)? {
            Value::Object(map) => Ok(map),
            other => Err(ModelError::Encoding(format!(
                "model serialized to a non-object value: {other}"
            ))),
        }
    }

    fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(encoding_error)
    }

    fn to_json_pretty(&self) -> Result<String, ModelError> {
        serde_json::to_string_pretty(self).map_err(encoding_error)
    }

    fn to_vec(&self) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec(self).map_err(encoding_error)
    }
}
