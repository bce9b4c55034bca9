use crate::bn254::BN254Scalar;
use crate::errors::check_length;
use crate::prelude::*;
use ark_bn254::{G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{CurveGroup, Group as _, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::fmt::{Debug, Display, Formatter};

macro_rules! bn254_group {
    ($(#[$doc:meta])* $name:ident, $projective:ty, $affine:ty, $compressed:expr) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Default, PartialEq, Eq)]
        pub struct $name(pub(crate) $projective);

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
                Display::fmt(&self.0.into_affine(), f)
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl_binary_ops!($name, $name, Add, add, AddAssign, add_assign);
        impl_binary_ops!($name, $name, Sub, sub, SubAssign, sub_assign);
        impl_binary_ops!($name, BN254Scalar, Mul, mul);

        impl $name {
            fn encode(&self, compress: Compress) -> Vec<u8> {
                let affine = self.0.into_affine();
                let mut bytes = Vec::with_capacity(affine.serialized_size(compress));
                // writing into a vector cannot fail
                let _ = affine.serialize_with_mode(&mut bytes, compress);
                bytes
            }

            fn decode(bytes: &[u8], compress: Compress, validate: Validate) -> Result<Self> {
                let expected = match compress {
                    Compress::Yes => Self::COMPRESSED_LEN,
                    Compress::No => Self::UNCHECKED_LEN,
                };
                check_length(bytes, expected)?;
                <$affine>::deserialize_with_mode(bytes, compress, validate)
                    .map(|affine| Self(affine.into()))
                    .map_err(|_| AlgebraError::InvalidEncoding)
            }
        }

        impl Group for $name {
            type ScalarType = BN254Scalar;
            const COMPRESSED_LEN: usize = $compressed;
            const UNCHECKED_LEN: usize = 2 * $compressed;

            fn identity() -> Self {
                Self(<$projective>::zero())
            }

            fn generator() -> Self {
                Self(<$projective>::generator())
            }

            fn to_compressed_bytes(&self) -> Vec<u8> {
                self.encode(Compress::Yes)
            }

            fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
                Self::decode(bytes, Compress::Yes, Validate::Yes)
            }

            fn to_unchecked_bytes(&self) -> Vec<u8> {
                self.encode(Compress::No)
            }

            fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self> {
                Self::decode(bytes, Compress::No, Validate::No)
            }

            fn multi_exp(scalars: &[BN254Scalar], points: &[Self]) -> Self {
                let scalars = scalars.iter().map(|s| s.0).collect::<Vec<_>>();
                let points = points.iter().map(|p| p.0).collect::<Vec<_>>();
                let bases = <$projective>::normalize_batch(&points);
                Self(<$projective>::msm_unchecked(&bases, &scalars))
            }
        }
    };
}

bn254_group!(
    /// A point of the BN254 curve over the base field.
    BN254G1,
    G1Projective,
    G1Affine,
    32
);

bn254_group!(
    /// A point of the BN254 twist over the quadratic extension.
    BN254G2,
    G2Projective,
    G2Affine,
    64
);
