use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use serde_with::{DeserializeAs, SerializeAs};

/// `f32` that must stay finite on the wire.
///
/// Decoding rejects numbers that overflow an `f32`; encoding rejects NaN and
/// infinities, which JSON cannot represent.
pub struct FiniteF32;

impl<'de> DeserializeAs<'de, f32> for FiniteF32 {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<f32, D::Error> {
        let wide = f64::deserialize(deserializer)?;
        let narrowed = wide as f32;
        if narrowed.is_finite() {
            Ok(narrowed)
        } else {
            Err(D::Error::custom(format!("number {wide} out of range for f32")))
        }
    }
}

impl SerializeAs<f32> for FiniteF32 {
    fn serialize_as<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f32(*value)
        } else {
            Err(S::Error::custom(format!("non-finite number {value} cannot be written as JSON")))
        }
    }
}
