use nodegen_models::{MappedModel, ModelError, NodeCreationRequest, NullableNodeCreationRequest};
use serde_json::{json, Value};

const EXAMPLE: &str = r#"{"domain":"acme.io","apiUrl":"https://api.acme.io","apiKey":"k1","cpu":2,"memory":4096,"disk":50,"gpu":0,"gpuType":"none","class":"standard","capacity":10,"region":"us-east"}"#;

const KEYS: [&str; 11] = [
    "domain", "apiUrl", "apiKey", "cpu", "memory", "disk", "gpu", "gpuType", "class", "capacity",
    "region",
];

/// Numbers compared as f64 so `2` and `2.0` count as the same value.
fn same_json(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(k, v)| y.get(k).is_some_and(|other| same_json(v, other)))
        }
        _ => a == b,
    }
}

#[test]
fn example_payload_round_trips_semantically() {
    let req = NodeCreationRequest::from_json_str(EXAMPLE).unwrap();
    assert_eq!(req.domain, "acme.io");
    assert_eq!(req.memory, 4096.0);
    assert_eq!(req.gpu, 0.0);

    let original: Value = serde_json::from_str(EXAMPLE).unwrap();
    let reencoded: Value = serde_json::from_str(&req.to_json().unwrap()).unwrap();
    assert!(same_json(&original, &reencoded), "{reencoded}");
}

#[test]
fn constructed_records_round_trip() {
    let cases = [
        NodeCreationRequest::empty(),
        NodeCreationRequest::new("d", "u", "k", -4.0, 0.5, 1e-3, 0.0, "a100", "gpu", -1.0, "eu"),
        NodeCreationRequest::new("", "", "", 0.1, 3.3, 123456.7, 8.0, "", "", 0.0, ""),
    ];
    for req in cases {
        let back = NodeCreationRequest::from_json(&req.to_vec().unwrap()).unwrap();
        assert_eq!(back, req);
    }
}

#[test]
fn missing_key_wins_over_unknown_and_mismatch() {
    let mut value: Value = serde_json::from_str(EXAMPLE).unwrap();
    let obj = value.as_object_mut().unwrap();
    obj.remove("capacity");
    obj.insert("extra".into(), json!(1));
    obj.insert("cpu".into(), json!("four"));

    let err = NodeCreationRequest::from_json(value.to_string().as_bytes()).unwrap_err();
    assert_eq!(err, ModelError::MissingRequiredField(vec!["capacity".into()]));
}

#[test]
fn every_required_key_is_enforced() {
    for key in KEYS {
        let mut value: Value = serde_json::from_str(EXAMPLE).unwrap();
        value.as_object_mut().unwrap().remove(key);
        match NodeCreationRequest::from_json(value.to_string().as_bytes()) {
            Err(ModelError::MissingRequiredField(keys)) => assert_eq!(keys, vec![key.to_string()]),
            other => panic!("expected missing {key}, got {other:?}"),
        }
    }
}

#[test]
fn unknown_field_and_type_mismatch() {
    let mut value: Value = serde_json::from_str(EXAMPLE).unwrap();
    value["owner"] = json!("ops");
    assert!(matches!(
        NodeCreationRequest::from_json(value.to_string().as_bytes()),
        Err(ModelError::UnknownField(field)) if field == "owner"
    ));

    let mut value: Value = serde_json::from_str(EXAMPLE).unwrap();
    value["cpu"] = json!("four");
    assert!(matches!(
        NodeCreationRequest::from_json(value.to_string().as_bytes()),
        Err(ModelError::TypeMismatch(_))
    ));
}

#[test]
fn malformed_json_is_reported() {
    assert!(matches!(
        NodeCreationRequest::from_json(b"{\"domain\": \"acme.io\",}"),
        Err(ModelError::MalformedPayload(_))
    ));
    assert!(matches!(
        NodeCreationRequest::from_json(b""),
        Err(ModelError::MalformedPayload(_))
    ));
}

#[test]
fn nullable_wrapper_null_versus_unset() {
    let never_set = NullableNodeCreationRequest::default();
    assert!(!never_set.is_set());

    let mut explicit = NullableNodeCreationRequest::default();
    explicit.set(None);
    assert!(explicit.is_set());
    assert_eq!(serde_json::to_string(&explicit).unwrap(), "null");

    let present = NullableNodeCreationRequest::new(Some(NodeCreationRequest::empty()));
    let encoded = serde_json::to_value(&present).unwrap();
    assert_eq!(encoded.as_object().map(|m| m.len()), Some(11));
}

#[test]
fn out_of_range_number_is_rejected_not_narrowed() {
    let payload = EXAMPLE.replace("\"cpu\":2", "\"cpu\":1e300");
    assert!(matches!(
        NodeCreationRequest::from_json_str(&payload),
        Err(ModelError::TypeMismatch(_))
    ));
}

#[test]
fn non_finite_record_does_not_encode() {
    let mut req = NodeCreationRequest::from_json_str(EXAMPLE).unwrap();
    req.cpu = f32::NAN;
    assert!(matches!(req.to_json(), Err(ModelError::Encoding(_))));

    req.cpu = f32::INFINITY;
    assert!(matches!(req.to_json(), Err(ModelError::Encoding(_))));
}

#[test]
fn explicit_null_keeps_zero_value() {
    let payload = EXAMPLE.replace("\"gpuType\":\"none\"", "\"gpuType\":null");
    let req = NodeCreationRequest::from_json_str(&payload).unwrap();
    assert_eq!(req.gpu_type, "");
    assert_eq!(req.region, "us-east");
}
