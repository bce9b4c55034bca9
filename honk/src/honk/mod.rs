//! The standard Honk proof system.
//!
//! The prover commits to the wires and the permutation grand product, runs the
//! sumcheck on the batched relations, then opens every polynomial at the
//! sumcheck challenge with Gemini, Shplonk and KZG.

/// Module for help functions.
pub(crate) mod helpers;

/// Module for indexer.
pub mod indexer;

/// Module for prover.
pub mod prover;

/// Module for transcript.
pub mod transcript;

/// Module for verifier.
pub mod verifier;
