use crate::bn254::BN254_SCALAR_LEN;
use crate::errors::check_length;
use crate::prelude::*;
use ark_bn254::Fr;
use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    fmt::{Debug, Display, Formatter},
    UniformRand,
};

/// An element of the BN254 scalar field.
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BN254Scalar(pub(crate) Fr);

impl Debug for BN254Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Zero for BN254Scalar {
    fn zero() -> Self {
        Self(Fr::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for BN254Scalar {
    fn one() -> Self {
        Self(Fr::one())
    }
}

impl From<u32> for BN254Scalar {
    fn from(value: u32) -> Self {
        Self(Fr::from(value))
    }
}

impl From<u64> for BN254Scalar {
    fn from(value: u64) -> Self {
        Self(Fr::from(value))
    }
}

impl Neg for BN254Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl_binary_ops!(BN254Scalar, BN254Scalar, Add, add, AddAssign, add_assign);
impl_binary_ops!(BN254Scalar, BN254Scalar, Sub, sub, SubAssign, sub_assign);
impl_binary_ops!(BN254Scalar, BN254Scalar, Mul, mul, MulAssign, mul_assign);

impl Scalar for BN254Scalar {
    const BYTES_LEN: usize = BN254_SCALAR_LEN;

    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self(Fr::rand(rng))
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(Self::BYTES_LEN);
        // writing into a vector cannot fail
        let _ = self.0.serialize_compressed(&mut bytes);
        bytes
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        check_length(bytes, Self::BYTES_LEN)?;
        Fr::deserialize_compressed(bytes)
            .map(Self)
            .map_err(|_| AlgebraError::InvalidEncoding)
    }

    fn inv(&self) -> Result<Self> {
        self.0.inverse().map(Self).ok_or(AlgebraError::ZeroInverse)
    }

    fn square(&self) -> Self {
        Self(self.0.square())
    }
}
