//! Mutable match state: ball zone, possession, counters.
//!
//! ## Invariants
//!
//! - Once set, `possession` always names one of the two sides. It is only
//!   cleared transiently while a midfield draw is being re-resolved.
//! - `zone` together with `possession` decides which phase runs next.
//! - Counters only ever increase.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Coarse ball position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallZone {
    /// Contest for control in the middle of the pitch.
    #[default]
    Midfield,
    /// The side in possession is about to shoot.
    FinalThird,
}

impl std::fmt::Display for BallZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallZone::Midfield => write!(f, "midfield"),
            BallZone::FinalThird => write!(f, "final third"),
        }
    }
}

/// State of a single match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// Where the ball is.
    pub zone: BallZone,

    /// Who holds the ball. `None` only before kickoff.
    pub(crate) possession: Option<Side>,

    /// Last minute played (0 before kickoff).
    pub minute: u32,

    /// Minutes the match is configured to run.
    pub total_minutes: u32,

    /// Minutes each side started in possession.
    pub possession_minutes: SideMap<u32>,

    /// Final-third entries per side.
    pub attacks: SideMap<u32>,

    /// Goals per side.
    pub goals: SideMap<u32>,
}

impl MatchState {
    /// Fresh state: midfield, nobody in possession, all counters zero.
    #[must_use]
    pub fn new(total_minutes: u32) -> Self {
        Self {
            total_minutes,
            ..Self::default()
        }
    }

    /// State with the ball already placed, for replaying a scenario.
    #[must_use]
    pub fn with_ball(total_minutes: u32, zone: BallZone, holder: Side) -> Self {
        Self {
            zone,
            possession: Some(holder),
            ..Self::new(total_minutes)
        }
    }

    /// Current possession holder.
    #[must_use]
    pub fn possession(&self) -> Option<Side> {
        self.possession
    }

    pub(crate) fn give_possession(&mut self, side: Side) {
        self.possession = Some(side);
    }

    pub(crate) fn clear_possession(&mut self) {
        self.possession = None;
    }

    /// Whether every configured minute has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.minute >= self.total_minutes
    }
}
