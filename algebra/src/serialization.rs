//! Serde support for field and group elements: the canonical bytes, written as
//! base64 in human-readable formats and as a byte string otherwise.
use crate::bn254::{BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use ark_std::fmt::Formatter;
use serde::de::{Deserializer, Error, SeqAccess, Visitor};
use serde::Serializer;

/// Types with a canonical byte encoding.
pub trait CanonicalBytes: Sized {
    /// The encoding.
    fn canonical_bytes(&self) -> Vec<u8>;

    /// Decode, failing on anything `canonical_bytes` would not produce.
    fn from_canonical_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Serialize through `CanonicalBytes`.
pub fn serialize_canonical<T, S>(value: &T, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    T: CanonicalBytes,
    S: Serializer,
{
    let bytes = value.canonical_bytes();
    if serializer.is_human_readable() {
        serializer.serialize_str(&b64enc(&bytes))
    } else {
        serializer.serialize_bytes(&bytes)
    }
}

/// Deserialize through `CanonicalBytes`.
pub fn deserialize_canonical<'de, T, D>(deserializer: D) -> core::result::Result<T, D::Error>
where
    T: CanonicalBytes,
    D: Deserializer<'de>,
{
    let bytes = if deserializer.is_human_readable() {
        deserializer.deserialize_str(BytesVisitor)?
    } else {
        deserializer.deserialize_bytes(BytesVisitor)?
    };
    T::from_canonical_bytes(&bytes).map_err(D::Error::custom)
}

/// Collects a base64 string, a byte string or a sequence of bytes.
struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = Vec<u8>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> ark_std::fmt::Result {
        formatter.write_str("the canonical bytes of a field or group element")
    }

    fn visit_str<E: Error>(self, v: &str) -> core::result::Result<Vec<u8>, E> {
        b64dec(v).map_err(E::custom)
    }

    fn visit_bytes<E: Error>(self, v: &[u8]) -> core::result::Result<Vec<u8>, E> {
        Ok(v.to_vec())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> core::result::Result<Vec<u8>, A::Error> {
        let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element()? {
            bytes.push(byte);
        }
        Ok(bytes)
    }
}

/// Implement `Serialize` and `Deserialize` through `CanonicalBytes`.
#[macro_export]
macro_rules! serde_via_canonical_bytes {
    ($t:ty) => {
        impl serde::Serialize for $t {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> core::result::Result<S::Ok, S::Error> {
                $crate::serialization::serialize_canonical(self, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> core::result::Result<Self, D::Error> {
                $crate::serialization::deserialize_canonical(deserializer)
            }
        }
    };
}

impl CanonicalBytes for BN254Scalar {
    fn canonical_bytes(&self) -> Vec<u8> {
        self.to_bytes()
    }

    fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

macro_rules! canonical_group_bytes {
    ($($g:ty),*) => {
        $(
            impl CanonicalBytes for $g {
                fn canonical_bytes(&self) -> Vec<u8> {
                    self.to_compressed_bytes()
                }

                fn from_canonical_bytes(bytes: &[u8]) -> Result<Self> {
                    Self::from_compressed_bytes(bytes)
                }
            }
        )*
    };
}

canonical_group_bytes!(BN254G1, BN254G2);

serde_via_canonical_bytes!(BN254Scalar);
serde_via_canonical_bytes!(BN254G1);
serde_via_canonical_bytes!(BN254G2);
