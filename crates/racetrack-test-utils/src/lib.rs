//! Test fixtures for race track development.
//!
//! Provides small hand-drawn tracks ([`tracks`]) covering each transition
//! outcome, and a seeded RNG helper so tests never depend on ambient
//! randomness.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod tracks;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A deterministic RNG for tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
