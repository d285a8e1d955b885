//! Two-phase strict decoding for request models.
//!
//! Phase one parses the payload into a generic map and checks that every
//! required key is present. Phase two rejects unknown keys and decodes the
//! typed record. A payload missing a required key never reaches phase two,
//! so callers always see "missing required property" before any shape error.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::ModelError;

/// A model with a fixed set of wire keys.
///
/// `Raw` is a plain serde mirror of the model (`deny_unknown_fields`, same
/// renames). Decoding goes through it so the model's own `Deserialize` impl
/// can route back into [`check_object`] without recursing.
pub trait StrictModel: Sized {
    type Raw: DeserializeOwned + Into<Self>;

    /// Every key the model knows about.
    const PROPERTIES: &'static [&'static str];

    /// Keys that must be present in the payload.
    const REQUIRED: &'static [&'static str];
}

/// Decode a model from raw JSON bytes.
pub fn decode_strict<T: StrictModel>(bytes: &[u8]) -> Result<T, ModelError> {
    let value: Value = serde_json::from_slice(bytes).map_err(ModelError::from_json)?;
    match value {
        Value::Object(map) => check_object(map),
        other => Err(ModelError::TypeMismatch(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

/// Run the presence, unknown-key and typed checks over an already parsed object.
pub fn check_object<T: StrictModel>(map: Map<String, Value>) -> Result<T, ModelError> {
    let missing: Vec<&str> = T::REQUIRED
        .iter()
        .copied()
        .filter(|key| !map.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(ModelError::missing(missing));
    }

    if let Some(unknown) = map
        .keys()
        .find(|key| !T::PROPERTIES.iter().any(|known| *known == key.as_str()))
    {
        return Err(ModelError::UnknownField(unknown.clone()));
    }

    let raw: T::Raw = serde_json::from_value(Value::Object(map)).map_err(ModelError::from_json)?;
    Ok(raw.into())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    struct Probe {
        name: String,
        size: u32,
        note: Option<String>,
    }

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RawProbe {
        name: String,
        size: u32,
        note: Option<String>,
    }

    impl From<RawProbe> for Probe {
        fn from(value: RawProbe) -> Self {
            Self {
                name: value.name,
                size: value.size,
                note: value.note,
            }
        }
    }

    impl StrictModel for Probe {
        type Raw = RawProbe;
        const PROPERTIES: &'static [&'static str] = &["name", "size", "note"];
        const REQUIRED: &'static [&'static str] = &["name", "size"];
    }

    fn bytes(value: Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn decodes_with_optional_key_absent() {
        let probe: Probe = decode_strict(&bytes(json!({ "name": "a", "size": 3 }))).unwrap();
        assert_eq!(
            probe,
            Probe {
                name: "a".into(),
                size: 3,
                note: None
            }
        );
    }

    #[test]
    fn reports_all_missing_keys_in_declaration_order() {
        let err = decode_strict::<Probe>(&bytes(json!({ "note": "x" }))).unwrap_err();
        assert_eq!(
            err,
            ModelError::MissingRequiredField(vec!["name".into(), "size".into()])
        );
    }

    #[test]
    fn presence_is_checked_before_unknown_and_types() {
        let payload = json!({ "size": "big", "extra": true });
        let err = decode_strict::<Probe>(&bytes(payload)).unwrap_err();
        assert!(matches!(err, ModelError::MissingRequiredField(_)));
    }

    #[test]
    fn rejects_unknown_key() {
        let payload = json!({ "name": "a", "size": 1, "colour": "red" });
        let err = decode_strict::<Probe>(&bytes(payload)).unwrap_err();
        assert_eq!(err, ModelError::UnknownField("colour".into()));
    }

    #[test]
    fn rejects_wrong_value_type() {
        let payload = json!({ "name": "a", "size": "one" });
        let err = decode_strict::<Probe>(&bytes(payload)).unwrap_err();
        assert!(matches!(err, ModelError::TypeMismatch(_)));
    }

    #[test]
    fn rejects_non_object_payloads() {
        let err = decode_strict::<Probe>(b"[1, 2]").unwrap_err();
        assert_eq!(
            err,
            ModelError::TypeMismatch("expected a JSON object, found an array".into())
        );

        let err = decode_strict::<Probe>(b"{\"name\": ").unwrap_err();
        assert!(matches!(err, ModelError::MalformedPayload(_)));
    }
}
