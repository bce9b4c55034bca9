//! Prime field, elliptic curve and pairing types for the Honk proof system.
//!
//! The proof system only sees the traits in [`traits`]. The [`bn254`] module
//! implements them over the arkworks BN254 curve.
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::upper_case_acronyms)]

/// Module for the BN254 curve.
pub mod bn254;

/// Module for errors.
pub mod errors;

/// Module for the prelude.
pub mod prelude;

/// Module for the test random number generator.
pub mod rand_helper;

/// Module for serde support.
pub mod serialization;

/// Module for the field, group and pairing traits.
pub mod traits;

/// Module for byte and base64 helpers.
pub mod utils;

#[doc(hidden)]
pub use ark_std::{ops, rand, One, Zero};
