use crate::errors::{HonkError, Result};
use crate::poly_commit::{
    errors::PolyComSchemeError,
    field_polynomial::FpPolynomial,
    pcs::{HomomorphicPolyComElem, OpeningClaim, PolyComScheme, ProverOpeningClaim},
    transcript::{ProverTranscript, TranscriptElement, VerifierTranscript},
};
use honk_algebra::{bn254::BN254PairingEngine, prelude::*, traits::Pairing};

/// KZG commitment scheme over the `Group`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

impl<G: Group> HomomorphicPolyComElem for KZGCommitment<G> {
    type Scalar = G::ScalarType;

    fn get_base() -> Self {
        KZGCommitment(G::generator())
    }

    fn get_identity() -> Self {
        KZGCommitment(G::identity())
    }

    fn add(&self, other: &Self) -> Self {
        KZGCommitment(self.0.add(&other.0))
    }

    fn add_assign(&mut self, other: &Self) {
        self.0.add_assign(&other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        KZGCommitment(self.0.sub(&other.0))
    }

    fn sub_assign(&mut self, other: &Self) {
        self.0.sub_assign(&other.0)
    }

    fn mul(&self, exp: &G::ScalarType) -> Self {
        KZGCommitment(self.0.mul(exp))
    }

    fn mul_assign(&mut self, exp: &G::ScalarType) {
        self.0 = self.0.mul(exp)
    }
}

impl<G: Group> TranscriptElement for KZGCommitment<G> {
    fn transcript_size() -> usize {
        G::COMPRESSED_LEN
    }

    fn to_transcript_bytes(&self) -> Vec<u8> {
        self.0.to_compressed_bytes()
    }

    fn from_transcript_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != G::COMPRESSED_LEN {
            return Err(HonkError::TranscriptError);
        }
        G::from_compressed_bytes(bytes)
            .map(KZGCommitment)
            .map_err(|_| HonkError::TranscriptError)
    }
}

/// KZG commitment scheme about `PairingEngine`.
#[derive(Debug, Serialize, Deserialize)]
pub struct KZGCommitmentScheme<P: Pairing> {
    /// public parameter about G1.
    pub public_parameter_group_1: Vec<P::G1>,
    /// public parameter about G2.
    pub public_parameter_group_2: Vec<P::G2>,
}

impl<P: Pairing> KZGCommitmentScheme<P> {
    /// Create a new instance of a KZG polynomial commitment scheme.
    /// `max_degree` - max degree of the polynomial,
    /// `prng` - pseudo-random generator.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<P> {
        let s = P::ScalarField::random(prng);

        let mut public_parameter_group_1: Vec<P::G1> = Vec::with_capacity(max_degree + 1);
        let mut elem_g1 = P::G1::generator();
        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        let elem_g2 = P::G2::generator();
        let public_parameter_group_2 = vec![elem_g2, elem_g2.mul(&s)];

        KZGCommitmentScheme {
            public_parameter_group_1,
            public_parameter_group_2,
        }
    }

    /// Serialize the parameters to unchecked bytes.
    pub fn to_unchecked_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![];
        let len_1 = self.public_parameter_group_1.len() as u32;
        let len_2 = self.public_parameter_group_2.len() as u32;
        bytes.extend(len_1.to_le_bytes());
        bytes.extend(len_2.to_le_bytes());

        for i in &self.public_parameter_group_1 {
            bytes.extend(i.to_unchecked_bytes());
        }
        for i in &self.public_parameter_group_2 {
            bytes.extend(i.to_unchecked_bytes());
        }
        bytes
    }

    /// Deserialize the parameters from unchecked bytes.
    pub fn from_unchecked_bytes(
        bytes: &[u8],
    ) -> core::result::Result<Self, PolyComSchemeError> {
        if bytes.len() < 8 {
            return Err(PolyComSchemeError::DeserializationError);
        }
        let len_1 = read_u32_le(&bytes[0..4])
            .map_err(|_| PolyComSchemeError::DeserializationError)? as usize;
        let len_2 = read_u32_le(&bytes[4..8])
            .map_err(|_| PolyComSchemeError::DeserializationError)? as usize;
        let n_1 = P::G1::UNCHECKED_LEN;
        let n_2 = P::G2::UNCHECKED_LEN;
        if bytes.len() != 8 + n_1 * len_1 + n_2 * len_2 {
            return Err(PolyComSchemeError::DeserializationError);
        }

        let (bytes_1, bytes_2) = bytes[8..].split_at(n_1 * len_1);
        let p1 = bytes_1
            .chunks_exact(n_1)
            .map(P::G1::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(|_| PolyComSchemeError::DeserializationError)?;
        let p2 = bytes_2
            .chunks_exact(n_2)
            .map(P::G2::from_unchecked_bytes)
            .collect::<core::result::Result<Vec<_>, _>>()
            .map_err(|_| PolyComSchemeError::DeserializationError)?;

        Ok(Self {
            public_parameter_group_1: p1,
            public_parameter_group_2: p2,
        })
    }
}

/// KZG commitment scheme over the BN254 curve
pub type KZGCommitmentSchemeBN254 = KZGCommitmentScheme<BN254PairingEngine>;

impl<P: Pairing> PolyComScheme for KZGCommitmentScheme<P> {
    type Field = P::ScalarField;
    type Commitment = KZGCommitment<P::G1>;

    fn max_degree(&self) -> usize {
        self.public_parameter_group_1.len().saturating_sub(1)
    }

    fn commit(
        &self,
        polynomial: &FpPolynomial<Self::Field>,
    ) -> core::result::Result<Self::Commitment, PolyComSchemeError> {
        let coefs = polynomial.get_coefs_ref();
        let degree = polynomial.degree();

        if degree + 1 > self.public_parameter_group_1.len() {
            return Err(PolyComSchemeError::DegreeError);
        }

        Ok(KZGCommitment(P::G1::multi_exp(
            coefs,
            &self.public_parameter_group_1[..degree + 1],
        )))
    }

    fn prove(
        &self,
        poly: &FpPolynomial<Self::Field>,
        x: &Self::Field,
        max_degree: usize,
    ) -> core::result::Result<Self::Commitment, PolyComSchemeError> {
        if poly.degree() > max_degree {
            return Err(PolyComSchemeError::DegreeError);
        }

        // (f(X) - f(x)) / (X - x)
        let (q_poly, _) = poly.divide_by_linear(x);
        self.commit(&q_poly)
    }

    fn verify(
        &self,
        cm: &Self::Commitment,
        _degree: usize,
        point: &Self::Field,
        eval: &Self::Field,
        proof: &Self::Commitment,
    ) -> core::result::Result<(), PolyComSchemeError> {
        let g1_0 = self
            .public_parameter_group_1
            .first()
            .ok_or(PolyComSchemeError::PCSVerifyEvalError)?;
        let (g2_0, g2_1) = match self.public_parameter_group_2.as_slice() {
            [g2_0, g2_1, ..] => (g2_0, g2_1),
            _ => return Err(PolyComSchemeError::PCSVerifyEvalError),
        };

        // e(C - v * [1] + z * W, [1]) * e(-W, [s]) = 1
        let left_first = cm.0.sub(&g1_0.mul(eval)).add(&proof.0.mul(point));
        let right_first = proof.0.neg();

        let pairing_eval =
            P::product_of_pairings(&[left_first, right_first], &[*g2_0, *g2_1]);

        if pairing_eval == P::Gt::one() {
            Ok(())
        } else {
            Err(PolyComSchemeError::PCSVerifyEvalError)
        }
    }

    fn shrink_to_verifier_only(&self) -> Self {
        Self {
            public_parameter_group_1: self.public_parameter_group_1.iter().take(1).cloned().collect(),
            public_parameter_group_2: self.public_parameter_group_2.iter().take(2).cloned().collect(),
        }
    }
}

/// A single deferred opening claim: `commitment` opens to `eval` at `point`,
/// witnessed by the quotient commitment `proof`.
pub struct KZGAccumulator<PCS: PolyComScheme> {
    /// The commitment being opened.
    pub commitment: PCS::Commitment,
    /// The opening point.
    pub point: PCS::Field,
    /// The claimed evaluation.
    pub eval: PCS::Field,
    /// The commitment to the quotient polynomial.
    pub proof: PCS::Commitment,
}

impl<PCS: PolyComScheme> KZGAccumulator<PCS> {
    /// Run the pairing check.
    pub fn verify(&self, pcs: &PCS) -> Result<()> {
        pcs.verify(
            &self.commitment,
            pcs.max_degree(),
            &self.point,
            &self.eval,
            &self.proof,
        )
        .map_err(|_| HonkError::VerificationError)
    }
}

const KZG_QUOTIENT_LABEL: &[u8] = b"KZG:W";

/// Open a single univariate claim: send the commitment to the quotient
/// `(f(X) - f(z)) / (X - z)`.
pub fn kzg_open<PCS: PolyComScheme>(
    transcript: &mut ProverTranscript,
    pcs: &PCS,
    claim: &ProverOpeningClaim<PCS::Field>,
) -> Result<()> {
    let quotient = pcs
        .prove(&claim.polynomial, &claim.point, pcs.max_degree())
        .map_err(|_| HonkError::PCSProveEvalError)?;
    transcript.send_to_verifier(KZG_QUOTIENT_LABEL, &quotient);
    Ok(())
}

/// Read the quotient commitment and defer the pairing check.
pub fn kzg_reduce<PCS: PolyComScheme>(
    transcript: &mut VerifierTranscript,
    claim: OpeningClaim<PCS>,
) -> Result<KZGAccumulator<PCS>> {
    let proof: PCS::Commitment = transcript.receive_from_prover(KZG_QUOTIENT_LABEL)?;
    Ok(KZGAccumulator {
        commitment: claim.commitment,
        point: claim.point,
        eval: claim.eval,
        proof,
    })
}
