//! Possession resolution.
//!
//! Used at kickoff and whenever a midfield contest is ruled a draw.

use log::{info, trace};

use crate::core::{MatchRng, Side, SideMap};

use super::fixture::Fixture;
use super::strength::midfield_strength;

/// Contest total for a midfield battle: `strength + uniform[0, strength / 2)`.
pub fn midfield_total(strength: u32, rng: &mut MatchRng) -> u32 {
    let bonus = rng.below(strength / 2);
    trace!("midfield bonus {} on strength {}", bonus, strength);
    strength.saturating_add(bonus)
}

/// Contest total for a shot: `strength + uniform[0, strength)`.
pub fn shot_total(strength: u32, rng: &mut MatchRng) -> u32 {
    let bonus = rng.below(strength);
    trace!("shot bonus {} on strength {}", bonus, strength);
    strength.saturating_add(bonus)
}

/// Decide who gets the ball from a neutral midfield contest.
///
/// Each side's midfield strength uses the attacking context only if that
/// side is `holder`; at kickoff and after a draw `holder` is `None`, so both
/// sides are measured defensively. Home draws first. Home needs a strictly
/// higher total, so a tie goes to Away.
pub fn resolve_initial_possession(
    fixture: &Fixture,
    holder: Option<Side>,
    rng: &mut MatchRng,
) -> Side {
    let totals = SideMap::from_fn(|side| {
        let strength = midfield_strength(fixture.team(side), holder == Some(side));
        midfield_total(strength, rng)
    });

    let winner = if totals.home > totals.away {
        Side::Home
    } else {
        Side::Away
    };
    info!(
        "{} won the possession [{} vs {}]",
        fixture.name(winner),
        totals.home,
        totals.away
    );
    winner
}
