use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value that can be unset, explicitly null, or present.
///
/// `Unset` and `Null` both serialize to `null`. Inside a container, pair the
/// field with `#[serde(default, skip_serializing_if = "Nullable::is_unset")]`
/// so an unset value is left out while an explicit null is still sent.
///
/// # Missing fields need `#[serde(default)]`
///
/// Serde feeds a missing field through the same path as an explicit `null`,
/// so without `#[serde(default)]` an absent key decodes as [`Nullable::Null`]
/// and `is_set()` reports `true`. Only the `default` attribute yields
/// [`Nullable::Unset`] for an absent key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    /// A wrapper in the set state, holding `value` or an explicit null.
    pub fn new(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Value(v),
            None => Nullable::Null,
        }
    }

    pub fn set(&mut self, value: Option<T>) {
        *self = Nullable::new(value);
    }

    pub fn unset(&mut self) {
        *self = Nullable::Unset;
    }

    pub fn is_set(&self) -> bool {
        !self.is_unset()
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Nullable::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Moves the value out, leaving the wrapper unset.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Unset
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Nullable::new(value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            Nullable::Null | Nullable::Unset => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::new)
    }
}
