//! The interface the proof system is written against: a prime field, the two
//! source groups of a pairing over it, and the pairing itself.
use crate::prelude::*;
use ark_std::fmt::Debug;
use serde::{Deserialize, Serialize};

/// An element of the prime field the circuits are defined over.
///
/// Arithmetic is available both on values and through references so that hot
/// loops can accumulate in place with `add_assign(&x)` and friends.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Eq
    + Send
    + Sync
    + Serialize
    + for<'de> Deserialize<'de>
    + Zero
    + One
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
{
    /// The length of the canonical encoding.
    const BYTES_LEN: usize;

    /// Sample a uniformly random element.
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// The canonical little-endian encoding, `BYTES_LEN` bytes long.
    fn to_bytes(&self) -> Vec<u8>;

    /// Decode a canonical encoding. Values not reduced modulo the field order
    /// are rejected.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// The multiplicative inverse.
    fn inv(&self) -> Result<Self>;

    /// `self * self`.
    fn square(&self) -> Self;
}

/// A prime order group written additively, with scalars in `ScalarType`.
pub trait Group:
    Copy
    + Default
    + Debug
    + Eq
    + Send
    + Sync
    + Serialize
    + for<'de> Deserialize<'de>
    + Neg<Output = Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
{
    /// The field of exponents.
    type ScalarType: Scalar;

    /// The length of the compressed encoding.
    const COMPRESSED_LEN: usize;

    /// The length of the unchecked (uncompressed, not validated) encoding.
    const UNCHECKED_LEN: usize;

    /// The neutral element.
    fn identity() -> Self;

    /// The fixed generator.
    fn generator() -> Self;

    /// The compressed encoding, used in proofs.
    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Decode a compressed point, checking it is on the curve and in the subgroup.
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// The uncompressed encoding, used for trusted parameters.
    fn to_unchecked_bytes(&self) -> Vec<u8>;

    /// Decode an uncompressed point without subgroup checks.
    fn from_unchecked_bytes(bytes: &[u8]) -> Result<Self>;

    /// `sum_i scalars[i] * points[i]`. Extra entries of the longer slice are ignored.
    fn multi_exp(scalars: &[Self::ScalarType], points: &[Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::identity(), |acc, (s, p)| acc + &(*p * s))
    }
}

/// A bilinear map `G1 x G2 -> Gt`.
pub trait Pairing {
    /// The common scalar field.
    type ScalarField: Scalar;
    /// The first source group.
    type G1: Group<ScalarType = Self::ScalarField>;
    /// The second source group.
    type G2: Group<ScalarType = Self::ScalarField>;
    /// The target group, written multiplicatively.
    type Gt: Copy + Debug + Eq + One;

    /// `e(a, b)`.
    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt;

    /// `prod_i e(a[i], b[i])`, sharing one final exponentiation.
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt;
}

#[cfg(test)]
pub(crate) mod laws {
    use crate::prelude::*;

    /// Field axioms on random elements.
    pub(crate) fn check_field<S: Scalar>() {
        let mut prng = test_rng();
        let (a, b, c) = (S::random(&mut prng), S::random(&mut prng), S::random(&mut prng));

        assert_eq!(a + b, b + a);
        assert_eq!((a * b) * c, a * (b * c));
        assert_eq!(a * (b + c), a * b + a * c);
        assert_eq!(a - a, S::zero());
        assert_eq!(a + a.neg(), S::zero());
        assert_eq!(a.square(), a * a);

        let mut acc = a;
        acc.add_assign(&b);
        acc.mul_assign(&c);
        acc.sub_assign(&(b * c));
        assert_eq!(acc, a * c);

        assert_eq!(a * a.inv().unwrap(), S::one());
        assert_eq!(S::zero().inv(), Err(AlgebraError::ZeroInverse));
        assert_eq!(S::from(u32::MAX) + S::one(), S::from(1u64 << 32));
    }

    /// The group law, scalar multiplication and the multi-exponentiation.
    pub(crate) fn check_group<G: Group>() {
        let mut prng = test_rng();
        let g = G::generator();
        let a = G::ScalarType::random(&mut prng);
        let b = G::ScalarType::random(&mut prng);

        assert_eq!(g * &a + &(g * &b), g * &(a + b));
        assert_eq!((g * &a) * &b, g * &(a * b));
        assert_eq!(g - &g, G::identity());
        assert_eq!(g + &g.neg(), G::identity());
        assert_eq!(g * &G::ScalarType::zero(), G::identity());

        assert_eq!(G::multi_exp(&[], &[]), G::identity());
        let points = [g, g * &a, g * &b];
        let scalars = [b, G::ScalarType::from(7u32), a];
        let expected = g * &(a * b + G::ScalarType::from(7u32) * a + a * b);
        assert_eq!(G::multi_exp(&scalars, &points), expected);
    }
}
