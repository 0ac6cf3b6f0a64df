//! Match simulation engine.
//!
//! ## Components
//!
//! - `strength`: Aggregate midfield, attack and defense scores from a roster
//! - `possession`: Weighted-random possession resolution
//! - `phase`: Midfield and final-third transitions, one per minute
//! - `runner`: The match loop and final report
//!
//! Every random draw goes through the single `MatchRng` owned by `Match`,
//! so a seed fully determines a match.

pub mod strength;
pub mod fixture;
pub mod state;
pub mod possession;
pub mod phase;
pub mod runner;

pub use strength::{
    attack_strength, defense_strength, midfield_strength, shot_stopping_strength, StrengthSummary,
};
pub use fixture::Fixture;
pub use state::{BallZone, MatchState};
pub use possession::resolve_initial_possession;
pub use phase::{final_third_action, midfield_action, play_minute, MinuteRecord, PhaseOutcome};
pub use runner::{Match, MatchReport};
