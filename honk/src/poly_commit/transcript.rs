use crate::errors::{HonkError, Result};
use honk_algebra::prelude::*;
use merlin::Transcript;
use rand_chacha::ChaChaRng;

/// A value that the prover writes into the proof and the verifier reads back.
pub trait TranscriptElement: Sized {
    /// Return the number of bytes of the encoding.
    fn transcript_size() -> usize;

    /// Convert to bytes.
    fn to_transcript_bytes(&self) -> Vec<u8>;

    /// Convert from exactly `transcript_size()` bytes, rejecting non-canonical encodings.
    fn from_transcript_bytes(bytes: &[u8]) -> Result<Self>;
}

impl<F: Scalar> TranscriptElement for F {
    fn transcript_size() -> usize {
        F::BYTES_LEN
    }

    fn to_transcript_bytes(&self) -> Vec<u8> {
        self.to_bytes()
    }

    fn from_transcript_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != F::BYTES_LEN {
            return Err(HonkError::TranscriptError);
        }
        F::from_bytes(bytes).map_err(|_| HonkError::TranscriptError)
    }
}

/// The trait for polynomial commitment transcript.
pub trait PolyComTranscript {
    /// Append a transcript element under a label.
    fn append_element<T: TranscriptElement>(&mut self, label: &'static [u8], element: &T);

    /// Get challenge result.
    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F;
}

impl PolyComTranscript for Transcript {
    fn append_element<T: TranscriptElement>(&mut self, label: &'static [u8], element: &T) {
        self.append_message(label, &element.to_transcript_bytes());
    }

    fn get_challenge_field_elem<F: Scalar>(&mut self, label: &'static [u8]) -> F {
        let mut buff = [0u8; 32];
        self.challenge_bytes(label, &mut buff[..]);
        F::random(&mut ChaChaRng::from_seed(buff))
    }
}

/// The prover side of the Fiat-Shamir transcript, recording the proof bytes.
pub struct ProverTranscript<'a> {
    transcript: &'a mut Transcript,
    proof_data: Vec<u8>,
}

impl<'a> ProverTranscript<'a> {
    /// Wrap a merlin transcript.
    pub fn new(transcript: &'a mut Transcript) -> Self {
        Self {
            transcript,
            proof_data: Vec::new(),
        }
    }

    /// Write an element into the proof and absorb it.
    pub fn send_to_verifier<T: TranscriptElement>(&mut self, label: &'static [u8], element: &T) {
        let bytes = element.to_transcript_bytes();
        self.transcript.append_message(label, &bytes);
        self.proof_data.extend_from_slice(&bytes);
    }

    /// Write a little-endian u32 into the proof and absorb it.
    pub fn send_u32(&mut self, label: &'static [u8], value: u32) {
        let bytes = value.to_le_bytes();
        self.transcript.append_message(label, &bytes);
        self.proof_data.extend_from_slice(&bytes);
    }

    /// Squeeze a challenge.
    pub fn get_challenge<F: Scalar>(&mut self, label: &'static [u8]) -> F {
        self.transcript.get_challenge_field_elem(label)
    }

    /// Squeeze several challenges, in label order.
    pub fn get_challenges<F: Scalar, const N: usize>(
        &mut self,
        labels: [&'static [u8]; N],
    ) -> [F; N] {
        labels.map(|label| self.get_challenge(label))
    }

    /// Return the bytes written so far.
    pub fn into_proof_data(self) -> Vec<u8> {
        self.proof_data
    }
}

/// The verifier side of the Fiat-Shamir transcript, reading the proof bytes.
pub struct VerifierTranscript<'a> {
    transcript: &'a mut Transcript,
    proof_data: &'a [u8],
    cursor: usize,
}

impl<'a> VerifierTranscript<'a> {
    /// Wrap a merlin transcript around the proof bytes.
    pub fn new(transcript: &'a mut Transcript, proof_data: &'a [u8]) -> Self {
        Self {
            transcript,
            proof_data,
            cursor: 0,
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let end = self
            .cursor
            .checked_add(len)
            .ok_or(HonkError::TranscriptError)?;
        if end > self.proof_data.len() {
            return Err(HonkError::TranscriptError);
        }
        let bytes = &self.proof_data[self.cursor..end];
        self.cursor = end;
        Ok(bytes)
    }

    /// Read the next element from the proof and absorb it.
    pub fn receive_from_prover<T: TranscriptElement>(
        &mut self,
        label: &'static [u8],
    ) -> Result<T> {
        let bytes = self.take(T::transcript_size())?;
        let element = T::from_transcript_bytes(bytes)?;
        self.transcript.append_message(label, bytes);
        Ok(element)
    }

    /// Read a little-endian u32 from the proof and absorb it.
    pub fn receive_u32(&mut self, label: &'static [u8]) -> Result<u32> {
        let bytes = self.take(4)?;
        self.transcript.append_message(label, bytes);
        read_u32_le(bytes).map_err(|_| HonkError::TranscriptError)
    }

    /// Squeeze a challenge.
    pub fn get_challenge<F: Scalar>(&mut self, label: &'static [u8]) -> F {
        self.transcript.get_challenge_field_elem(label)
    }

    /// Squeeze several challenges, in label order.
    pub fn get_challenges<F: Scalar, const N: usize>(
        &mut self,
        labels: [&'static [u8]; N],
    ) -> [F; N] {
        labels.map(|label| self.get_challenge(label))
    }

    /// Check that the whole proof has been consumed.
    pub fn finish(&self) -> Result<()> {
        if self.cursor == self.proof_data.len() {
            Ok(())
        } else {
            Err(HonkError::TranscriptError)
        }
    }
}

#[cfg(test)]
mod test {
    use crate::poly_commit::transcript::{ProverTranscript, TranscriptElement, VerifierTranscript};
    use honk_algebra::{bn254::BN254Scalar, prelude::*};
    use merlin::Transcript;

    #[test]
    fn test_prover_verifier_agree() {
        let mut prng = test_rng();
        let a = BN254Scalar::random(&mut prng);

        let mut prover_transcript = Transcript::new(b"Test");
        let mut prover = ProverTranscript::new(&mut prover_transcript);
        prover.send_u32(b"size", 8);
        prover.send_to_verifier(b"a", &a);
        let [beta, gamma]: [BN254Scalar; 2] =
            prover.get_challenges([&b"beta"[..], &b"gamma"[..]]);
        let proof = prover.into_proof_data();
        assert_eq!(proof.len(), 4 + 32);

        let mut verifier_transcript = Transcript::new(b"Test");
        let mut verifier = VerifierTranscript::new(&mut verifier_transcript, &proof);
        assert_eq!(verifier.receive_u32(b"size").unwrap(), 8);
        let a_back: BN254Scalar = verifier.receive_from_prover(b"a").unwrap();
        assert_eq!(a, a_back);
        let [beta_v, gamma_v]: [BN254Scalar; 2] =
            verifier.get_challenges([&b"beta"[..], &b"gamma"[..]]);
        assert_eq!(beta, beta_v);
        assert_eq!(gamma, gamma_v);
        assert_ne!(beta, gamma);
        assert!(verifier.finish().is_ok());
        assert!(verifier.receive_u32(b"extra").is_err());
    }

    #[test]
    fn test_reject_non_canonical_scalar() {
        let bytes = [0xffu8; 32];
        assert!(BN254Scalar::from_transcript_bytes(&bytes).is_err());
        assert!(BN254Scalar::from_transcript_bytes(&[0u8; 31]).is_err());
        let one = BN254Scalar::one().to_transcript_bytes();
        assert_eq!(
            BN254Scalar::from_transcript_bytes(&one).unwrap(),
            BN254Scalar::one()
        );
    }

    #[test]
    fn test_trailing_bytes() {
        let proof = [1u8, 0, 0, 0, 7];
        let mut transcript = Transcript::new(b"Test");
        let mut verifier = VerifierTranscript::new(&mut transcript, &proof);
        assert_eq!(verifier.receive_u32(b"size").unwrap(), 1);
        assert!(verifier.finish().is_err());
    }
}
