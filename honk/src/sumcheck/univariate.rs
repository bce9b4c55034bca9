use crate::errors::{HonkError, Result};
use crate::poly_commit::transcript::TranscriptElement;
use honk_algebra::prelude::*;

/// A univariate polynomial of degree less than `N`, given by its evaluations
/// at `0, 1, ..., N - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Univariate<F, const N: usize> {
    /// the evaluations at `0, 1, ..., N - 1`.
    pub evaluations: [F; N],
}

impl<F: Scalar, const N: usize> Univariate<F, N> {
    /// Create from the evaluations.
    pub fn new(evaluations: [F; N]) -> Self {
        Self { evaluations }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self {
            evaluations: [F::zero(); N],
        }
    }

    /// Evaluate at `u` by barycentric interpolation over `0, 1, ..., N - 1`.
    pub fn evaluate(&self, u: &F) -> Result<F> {
        let domain = (0..N).map(|i| F::from(i as u64)).collect::<Vec<_>>();
        if let Some(i) = domain.iter().position(|x| x == u) {
            return Ok(self.evaluations[i]);
        }

        // L(u) = prod_j (u - j)
        let mut full = F::one();
        for x in domain.iter() {
            full.mul_assign(&(*u - x));
        }

        let mut sum = F::zero();
        for (i, (x_i, y_i)) in domain.iter().zip(self.evaluations.iter()).enumerate() {
            // prod_{j != i} (i - j) * (u - i)
            let mut denominator = *u - x_i;
            for (j, x_j) in domain.iter().enumerate() {
                if j != i {
                    denominator.mul_assign(&(*x_i - x_j));
                }
            }
            let inv = denominator.inv().map_err(|_| HonkError::DivisionByZero)?;
            sum.add_assign(&(*y_i * &inv));
        }
        Ok(full * &sum)
    }
}

impl<F: Scalar, const N: usize> TranscriptElement for Univariate<F, N> {
    fn transcript_size() -> usize {
        N * F::transcript_size()
    }

    fn to_transcript_bytes(&self) -> Vec<u8> {
        self.evaluations
            .iter()
            .flat_map(|value| value.to_transcript_bytes())
            .collect()
    }

    fn from_transcript_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::transcript_size() {
            return Err(HonkError::TranscriptError);
        }
        let values = bytes
            .chunks_exact(F::transcript_size())
            .map(F::from_transcript_bytes)
            .collect::<Result<Vec<_>>>()?;
        let evaluations: [F; N] = values
            .try_into()
            .map_err(|_| HonkError::TranscriptError)?;
        Ok(Self { evaluations })
    }
}

#[cfg(test)]
mod test {
    use crate::poly_commit::{field_polynomial::FpPolynomial, transcript::TranscriptElement};
    use crate::sumcheck::univariate::Univariate;
    use honk_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    #[test]
    fn test_barycentric_matches_polynomial() {
        let mut prng = test_rng();
        let poly = FpPolynomial::<F>::random(&mut prng, 4);
        let evaluations = [0u32, 1, 2, 3, 4].map(|i| poly.eval(&F::from(i)));
        let univariate = Univariate::new(evaluations);

        for _ in 0..4 {
            let u = F::random(&mut prng);
            assert_eq!(univariate.evaluate(&u).unwrap(), poly.eval(&u));
        }
        assert_eq!(univariate.evaluate(&F::from(3u32)).unwrap(), evaluations[3]);
        assert_eq!(
            univariate.evaluate(&F::from(17u32)).unwrap(),
            poly.eval(&F::from(17u32))
        );
    }

    #[test]
    fn test_transcript_bytes() {
        let univariate = Univariate::<F, 3>::new([F::one(), F::zero(), F::from(9u32)]);
        let bytes = univariate.to_transcript_bytes();
        assert_eq!(bytes.len(), 96);
        assert_eq!(
            Univariate::<F, 3>::from_transcript_bytes(&bytes).unwrap(),
            univariate
        );
        assert!(Univariate::<F, 4>::from_transcript_bytes(&bytes).is_err());
        assert!(Univariate::<F, 3>::zero().evaluations.iter().all(|x| x.is_zero()));
    }
}
