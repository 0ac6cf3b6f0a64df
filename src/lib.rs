//! # match-sim
//!
//! A minute-by-minute two-team football match simulator.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: One seeded `MatchRng` is owned by the match and
//!    threaded through every random draw. Same seed, same match.
//!
//! 2. **Read-only rosters**: The engine only aggregates player stats; it
//!    never mutates a `Team` once the match is built.
//!
//! 3. **Fail at construction**: Malformed formations, configs or fixtures
//!    are rejected before kickoff. No minute of play can fail.
//!
//! ## Modules
//!
//! - `core`: Sides, RNG, configuration, errors
//! - `roster`: Players, teams, formations and random roster generation
//! - `engine`: Strength aggregation, possession, phases and the match loop
//! - `report`: Text rendering of strengths, commentary and final summary
//!
//! ## Example
//!
//! ```
//! use match_sim::{Formation, Match, MatchConfig, RosterGenerator};
//!
//! let config = MatchConfig::default().with_seed(7);
//! let mut generator = RosterGenerator::for_seed(config.seed);
//! let home = generator.generate_team("Team A", Formation::new(4, 5, 1));
//! let away = generator.generate_team("Team B", Formation::new(4, 4, 2));
//!
//! let report = Match::new(home, away, config).unwrap().play();
//! assert_eq!(report.possession_minutes.total(), 45);
//! ```

pub mod core;
pub mod roster;
pub mod engine;
pub mod report;

// Re-export commonly used types
pub use crate::core::{MatchConfig, MatchError, MatchRng, MatchRngState, Result, Side, SideMap};

pub use crate::roster::{Formation, Player, Role, RosterGenerator, Team};

pub use crate::engine::{
    BallZone, Fixture, Match, MatchReport, MatchState, MinuteRecord, PhaseOutcome, StrengthSummary,
};
