pub mod mapped;
pub mod nullable;
pub mod strict;
pub mod wire_number;

pub use mapped::MappedModel;
pub use nullable::Nullable;
pub use strict::{check_object, decode_strict, StrictModel};
pub use wire_number::FiniteF32;
