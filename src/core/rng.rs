//! Deterministic random number generation for match simulation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical match
//! - **Single owner**: One `MatchRng` is threaded through every component
//!   that needs randomness; nothing reseeds behind the caller's back
//! - **Context streams**: Independent sequences for roster generation and
//!   match play, so building rosters never shifts the match's draws
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! ```
//! use match_sim::core::MatchRng;
//!
//! let mut rng1 = MatchRng::new(7);
//! let mut rng2 = MatchRng::new(7);
//!
//! assert_eq!(rng1.below(100), rng2.below(100));
//!
//! // Empty ranges never panic
//! assert_eq!(rng1.below(0), 0);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seed of a named stream. Fixed arithmetic (FNV-1a over the context name),
/// so a printed seed replays the same match on any toolchain.
fn context_seed(seed: u64, context: &str) -> u64 {
    let name_hash = context
        .bytes()
        .fold(FNV_OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME));
    seed.wrapping_add(name_hash.wrapping_mul(STREAM_MIX))
}

/// Deterministic RNG used by the roster generator and the match engine.
#[derive(Clone, Debug)]
pub struct MatchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl MatchRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Uniform draw from `[0, upper)`.
    ///
    /// Returns 0 when `upper == 0`: an empty role group contributes no
    /// random bonus instead of producing an invalid range.
    pub fn below(&mut self, upper: u32) -> u32 {
        if upper == 0 {
            return 0;
        }
        self.inner.gen_range(0..upper)
    }

    /// Uniform draw from `[low, high]`.
    pub fn between(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    /// Generate a random boolean with given probability of true.
    ///
    /// Probabilities outside `[0, 1]` are clamped; NaN counts as 0.
    pub fn chance(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        self.inner.gen_bool(p)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> MatchRngState {
        MatchRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &MatchRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG checkpoint.
///
/// Uses the ChaCha8 word position, so capture cost does not depend on how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRngState {
    pub seed: u64,
    pub word_pos: u128,
}
