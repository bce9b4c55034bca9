use crate::honk::indexer::VerificationKey;
use crate::poly_commit::transcript::{PolyComTranscript, TranscriptElement};
use merlin::Transcript;

pub(crate) const CIRCUIT_SIZE_LABEL: &[u8] = b"circuit_size";
pub(crate) const PUBLIC_INPUT_SIZE_LABEL: &[u8] = b"public_input_size";
pub(crate) const PUBLIC_INPUT_LABEL: &[u8] = b"public_input";
pub(crate) const WIRE_LABELS: [&[u8]; 3] = [b"W_1", b"W_2", b"W_3"];
pub(crate) const BETA_LABEL: &[u8] = b"beta";
pub(crate) const GAMMA_LABEL: &[u8] = b"gamma";
pub(crate) const Z_PERM_LABEL: &[u8] = b"Z_PERM";
pub(crate) const ALPHA_LABEL: &[u8] = b"Sumcheck:alpha";
pub(crate) const ZETA_LABEL: &[u8] = b"Sumcheck:zeta";
pub(crate) const RHO_LABEL: &[u8] = b"rho";

/// Initialize the transcript when computing or checking a Honk proof.
pub(crate) fn transcript_init_honk<C: TranscriptElement>(
    transcript: &mut Transcript,
    vk: &VerificationKey<C>,
) {
    transcript.append_message(b"New Domain", b"Honk");
    transcript.append_u64(b"CS size", vk.n as u64);
    transcript.append_u64(b"PI size", vk.num_public_inputs as u64);
    for commitment in vk.commitments.iter() {
        transcript.append_element(b"precomputed", commitment);
    }
}
