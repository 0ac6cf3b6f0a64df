//! Team strength aggregation.
//!
//! Pure functions over a roster. An empty role group yields 0; callers
//! that add a random bonus must go through `MatchRng::below`, which
//! treats a zero range as "no bonus".
//!
//! Player stats are unbounded, so every sum saturates at `u32::MAX`.

use serde::{Deserialize, Serialize};

use crate::roster::Team;

/// Midfield strength: per midfielder `passing + physical` plus `attacking`
/// when the team is attacking, otherwise `defending`.
#[must_use]
pub fn midfield_strength(team: &Team, attacking: bool) -> u32 {
    team.midfielders
        .iter()
        .map(|p| {
            let context = if attacking { p.attacking } else { p.defending };
            stat_sum(&[p.passing, p.physical, context])
        })
        .fold(0, u32::saturating_add)
}

/// Attack strength: per striker `shooting + attacking + physical + speed`.
#[must_use]
pub fn attack_strength(team: &Team) -> u32 {
    team.strikers
        .iter()
        .map(|p| stat_sum(&[p.shooting, p.attacking, p.physical, p.speed]))
        .fold(0, u32::saturating_add)
}

/// Defense strength: per defender `tackling + attacking + physical + speed`.
///
/// Excludes the goalkeeper; see [`shot_stopping_strength`].
#[must_use]
pub fn defense_strength(team: &Team) -> u32 {
    team.defenders
        .iter()
        .map(|p| stat_sum(&[p.tackling, p.attacking, p.physical, p.speed]))
        .fold(0, u32::saturating_add)
}

/// Strength opposing a shot: the back line plus the goalkeeper's defending.
#[must_use]
pub fn shot_stopping_strength(team: &Team) -> u32 {
    defense_strength(team).saturating_add(team.goalkeeper.defending)
}

fn stat_sum(stats: &[u32]) -> u32 {
    stats.iter().copied().fold(0, u32::saturating_add)
}

/// Pre-match strength summary shown before kickoff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthSummary {
    pub attack: u32,
    pub midfield: u32,
    /// Includes the team's own goalkeeper.
    pub defense: u32,
}

impl StrengthSummary {
    #[must_use]
    pub fn of(team: &Team) -> Self {
        Self {
            attack: attack_strength(team),
            midfield: midfield_strength(team, false),
            defense: shot_stopping_strength(team),
        }
    }
}
