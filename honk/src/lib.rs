//! Honk: a PLONK-style proof system whose quotient argument is replaced by a
//! multilinear sumcheck, opened through Gemini, Shplonk and KZG.
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::too_many_arguments)]

#[macro_use]
extern crate serde_derive;

/// Module for the circuit builder and the permutation compiler.
pub mod circuit;

/// Module for errors.
pub mod errors;

/// Module for the Honk indexer, prover and verifier.
pub mod honk;

/// Module for polynomial commitments and the opening reduction.
pub mod poly_commit;

/// Module for the relations and the sumcheck protocol.
pub mod sumcheck;
