use honk_algebra::prelude::*;

/// Field polynomial, in coefficient form.
///
/// A multilinear table over the boolean hypercube is committed as the univariate
/// polynomial whose coefficients are the table entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients of the polynomial, low-order first
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use honk::poly_commit::field_polynomial::FpPolynomial;
    /// use honk_algebra::bn254::BN254Scalar;
    /// use honk_algebra::{Zero, One};
    /// let poly = FpPolynomial::<BN254Scalar>::zero();
    /// let zero = BN254Scalar::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.eval(&zero), zero);
    /// assert_eq!(poly.eval(&BN254Scalar::one()), zero);
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use honk::poly_commit::field_polynomial::FpPolynomial;
    /// use honk_algebra::bn254::BN254Scalar;
    /// use honk_algebra::{Zero, One, ops::*};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// let five = two.add(&two).add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&zero), one);
    /// assert_eq!(poly.eval(&one), two);
    /// assert_eq!(poly.eval(&two), five);
    /// let poly2 = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero, zero]);
    /// assert_eq!(poly2.degree(), 2);
    /// assert_eq!(poly, poly2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build a polynomial from its zeroes/roots.
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            let mut p = r.clone();
            r.coefs.insert(0, F::zero()); // multiply by X
            p.mul_scalar_assign(root);
            r.sub_assign(&p); // r = r * (X - root)
        }
        r.trim_coefs();
        r
    }

    /// Return a polynomial of `degree` + 1 uniformly random coefficients.
    pub fn random<R: CryptoRng + RngCore>(prng: &mut R, degree: usize) -> FpPolynomial<F> {
        let coefs = (0..=degree).map(|_| F::random(prng)).collect();
        Self::from_coefs(coefs)
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return degree of the polynomial
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate a polynomial on a point, by Horner's rule.
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtracts another polynomial from self.
    /// # Example:
    /// ```
    /// use honk::poly_commit::field_polynomial::FpPolynomial;
    /// use honk_algebra::bn254::BN254Scalar;
    /// use honk_algebra::{Zero, One, ops::*};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// let three = two.add(&one);
    /// let mut poly1 = FpPolynomial::from_coefs(vec![three, three, two]);
    /// let poly2 = FpPolynomial::from_coefs(vec![three, two, one, one]);
    /// poly1.sub_assign(&poly2);
    /// let poly_expected = FpPolynomial::from_coefs(vec![zero, one, one, one.neg()]);
    /// assert_eq!(poly1, poly_expected);
    /// ```
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            self.coefs
                .extend(other.coefs[n..].iter().map(|other_coef| other_coef.neg()));
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Negate the coefficients.
    pub fn neg(&self) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(&F::one().neg());
        new
    }

    /// Multiply polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Add `scalar * other` to self.
    pub fn add_scaled_assign(&mut self, other: &Self, scalar: &F) {
        if self.coefs.len() < other.coefs.len() {
            self.coefs.resize(other.coefs.len(), F::zero());
        }
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(&other_coef.mul(scalar));
        }
        self.trim_coefs();
    }

    /// Divide by `X - point`, returning the quotient and the remainder `f(point)`.
    /// # Example:
    /// ```
    /// use honk::poly_commit::field_polynomial::FpPolynomial;
    /// use honk_algebra::bn254::BN254Scalar;
    /// use honk_algebra::{Zero, One, ops::*};
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// // X^2 + X + 1 = (X - 1) * (X + 2) + 3
    /// let poly = FpPolynomial::from_coefs(vec![one, one, one]);
    /// let (q, r) = poly.divide_by_linear(&one);
    /// assert_eq!(q, FpPolynomial::from_coefs(vec![two, one]));
    /// assert_eq!(r, two.add(&one));
    /// ```
    pub fn divide_by_linear(&self, point: &F) -> (Self, F) {
        let mut quotient = vec![F::zero(); self.coefs.len().saturating_sub(1)];
        let mut carry = F::zero();
        for (i, coef) in self.coefs.iter().enumerate().rev() {
            carry = carry.mul(point).add(coef);
            if i > 0 {
                quotient[i - 1] = carry;
            }
        }
        (Self::from_coefs(quotient), carry)
    }
}

#[cfg(test)]
mod test {
    use crate::poly_commit::field_polynomial::FpPolynomial;
    use honk_algebra::{bn254::BN254Scalar, prelude::*};

    #[test]
    fn test_from_zeroes() {
        let one = BN254Scalar::one();
        let two = one.add(&one);
        let five = BN254Scalar::from(5u32);
        let zeroes = [one, BN254Scalar::zero(), five, two];
        let poly = FpPolynomial::from_zeroes(&zeroes);
        assert_eq!(poly.degree(), 4);
        for z in zeroes.iter() {
            assert!(poly.eval(z).is_zero());
        }
        assert!(!poly.eval(&BN254Scalar::from(3u32)).is_zero());
    }

    #[test]
    fn test_divide_by_linear_matches_evaluation() {
        let mut prng = test_rng();
        let poly = FpPolynomial::<BN254Scalar>::random(&mut prng, 17);
        let point = BN254Scalar::random(&mut prng);
        let (q, r) = poly.divide_by_linear(&point);
        assert_eq!(r, poly.eval(&point));

        // q(X) * (X - point) + r = poly(X)
        let x = BN254Scalar::random(&mut prng);
        assert_eq!(q.eval(&x).mul(&x.sub(&point)).add(&r), poly.eval(&x));
        assert_eq!(q.degree(), 16);
    }

    #[test]
    fn test_add_scaled() {
        let mut prng = test_rng();
        let a = FpPolynomial::<BN254Scalar>::random(&mut prng, 3);
        let b = FpPolynomial::<BN254Scalar>::random(&mut prng, 7);
        let s = BN254Scalar::random(&mut prng);
        let mut c = a.clone();
        c.add_scaled_assign(&b, &s);
        assert_eq!(c, a.add(&b.mul_scalar(&s)));
        assert_eq!(a.sub(&a), FpPolynomial::zero());
        assert!(a.add(&a.neg()).is_zero());
    }
}
