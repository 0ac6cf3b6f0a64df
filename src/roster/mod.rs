//! Roster provider: players, teams, formations and random generation.
//!
//! ## Key Types
//!
//! - `Role`: Goalkeeper, defender, midfielder or striker
//! - `Player`: Six drawn attributes plus an (ungenerated) tackling stat
//! - `Team`: One goalkeeper and role-grouped outfield players
//! - `Formation`: Defender/midfielder/striker counts, parsed from `"4-4-2"`
//! - `RosterGenerator`: Draws players from per-role stat ranges
//!
//! The engine treats teams as read-only input.

pub mod player;
pub mod team;
pub mod formation;
pub mod generator;

pub use player::{Player, Role, RoleProfile, StatRange};
pub use team::Team;
pub use formation::{Formation, MAX_GROUP_SIZE};
pub use generator::RosterGenerator;
