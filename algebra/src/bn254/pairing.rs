use crate::bn254::{BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use ark_bn254::{Bn254, Fq12};
use ark_ec::{pairing::Pairing as _, CurveGroup};

/// An element of the pairing target group, a subgroup of `Fq12`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct BN254Gt(pub(crate) Fq12);

impl Mul for BN254Gt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl One for BN254Gt {
    fn one() -> Self {
        Self(Fq12::one())
    }
}

/// The optimal ate pairing of BN254.
#[derive(Clone, Copy, Debug, Default)]
pub struct BN254PairingEngine;

impl Pairing for BN254PairingEngine {
    type ScalarField = BN254Scalar;
    type G1 = BN254G1;
    type G2 = BN254G2;
    type Gt = BN254Gt;

    fn pairing(a: &BN254G1, b: &BN254G2) -> BN254Gt {
        BN254Gt(Bn254::pairing(a.0, b.0).0)
    }

    fn product_of_pairings(a: &[BN254G1], b: &[BN254G2]) -> BN254Gt {
        let a = a.iter().map(|p| p.0.into_affine());
        let b = b.iter().map(|p| p.0.into_affine());
        BN254Gt(Bn254::multi_pairing(a, b).0)
    }
}
