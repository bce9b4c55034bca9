pub use crate::errors::AlgebraError;
pub(crate) use crate::errors::Result;
pub use crate::ops::*;
pub use crate::rand::{CryptoRng, Rng, RngCore, SeedableRng};
pub use crate::rand_helper::test_rng;
pub use crate::serialization::CanonicalBytes;
pub use crate::traits::{Group, Pairing, Scalar};
pub use crate::utils::{b64dec, b64enc, read_u32_le};
pub use crate::{One, Zero};
pub use ark_std::{string::String, vec, vec::Vec};
pub use itertools::{izip, Itertools};
