//! Per-minute phase transitions.
//!
//! The ball is either in midfield, where both sides contest control, or in
//! the final third, where the side in possession takes a shot. Each minute
//! runs exactly one of these handlers.
//!
//! ## Random draw order
//!
//! - Midfield: home bonus, away bonus, draw roll, then (on a draw) the
//!   two re-resolution bonuses.
//! - Final third: attack bonus, then defense bonus.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{MatchRng, Side, SideMap};

use super::fixture::Fixture;
use super::possession::{midfield_total, resolve_initial_possession, shot_total};
use super::state::{BallZone, MatchState};
use super::strength::{attack_strength, midfield_strength, shot_stopping_strength};

/// What a phase handler did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PhaseOutcome {
    /// Midfield contest ruled a draw; possession re-resolved.
    Restart { winner: Side },
    /// Side in possession won the battle and moves into the final third.
    Advance { side: Side, totals: SideMap<u32> },
    /// The other side won the battle and takes the ball.
    Turnover { to: Side, totals: SideMap<u32> },
    /// Shot beat the defense.
    Goal {
        scorer: Side,
        attack_total: u32,
        defense_total: u32,
    },
    /// Defense held and takes the ball back to midfield.
    Defended {
        defender: Side,
        attack_total: u32,
        defense_total: u32,
    },
}

/// One played minute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinuteRecord {
    pub minute: u32,
    /// Zone the minute started in.
    pub zone: BallZone,
    /// Holder at the start of the minute.
    pub holder: Option<Side>,
    pub outcome: PhaseOutcome,
}

/// Midfield battle.
pub fn midfield_action(
    fixture: &Fixture,
    state: &mut MatchState,
    draw_chance: f64,
    rng: &mut MatchRng,
) -> PhaseOutcome {
    let Some(holder) = state.possession() else {
        return restart(fixture, state, rng);
    };
    debug!("midfield battle, {} trying to attack", fixture.name(holder));

    let totals = SideMap::from_fn(|side| {
        let strength = midfield_strength(fixture.team(side), side == holder);
        midfield_total(strength, rng)
    });

    if rng.chance(draw_chance) {
        info!("midfield battle is a draw, possession contested again");
        return restart(fixture, state, rng);
    }

    debug!("battle score [{} vs {}]", totals.home, totals.away);
    let challenger = holder.opponent();
    if totals[holder] > totals[challenger] {
        info!("{} won the battle, into the final third", fixture.name(holder));
        state.zone = BallZone::FinalThird;
        PhaseOutcome::Advance {
            side: holder,
            totals,
        }
    } else {
        info!("{} steal the ball, back to midfield battle", fixture.name(challenger));
        state.give_possession(challenger);
        PhaseOutcome::Turnover {
            to: challenger,
            totals,
        }
    }
}

/// Shot from the final third. Whatever happens, the ball goes back to
/// midfield with the defending side in possession.
pub fn final_third_action(
    fixture: &Fixture,
    state: &mut MatchState,
    rng: &mut MatchRng,
) -> PhaseOutcome {
    let Some(attacker) = state.possession() else {
        state.zone = BallZone::Midfield;
        return restart(fixture, state, rng);
    };
    let defender = attacker.opponent();
    state.attacks[attacker] += 1;

    let attack_total = shot_total(attack_strength(fixture.team(attacker)), rng);
    let defense_total = shot_total(shot_stopping_strength(fixture.team(defender)), rng);

    let outcome = if attack_total > defense_total {
        state.goals[attacker] += 1;
        info!(
            "GOAL! {} scores! ({}-{})",
            fixture.name(attacker),
            state.goals.home,
            state.goals.away
        );
        PhaseOutcome::Goal {
            scorer: attacker,
            attack_total,
            defense_total,
        }
    } else {
        info!("{} defend successfully, back to midfield", fixture.name(defender));
        PhaseOutcome::Defended {
            defender,
            attack_total,
            defense_total,
        }
    };
    debug!("attacking score {} vs defending score {}", attack_total, defense_total);

    state.zone = BallZone::Midfield;
    state.give_possession(defender);
    outcome
}

/// Advance the match by one minute.
///
/// Credits the current holder with a possession minute, then runs the
/// handler for the current zone.
pub fn play_minute(
    fixture: &Fixture,
    state: &mut MatchState,
    draw_chance: f64,
    rng: &mut MatchRng,
) -> MinuteRecord {
    state.minute += 1;
    debug!("== minute {}' ==", state.minute);

    let holder = state.possession();
    if let Some(side) = holder {
        state.possession_minutes[side] += 1;
    }

    let zone = state.zone;
    let outcome = match zone {
        BallZone::Midfield => midfield_action(fixture, state, draw_chance, rng),
        BallZone::FinalThird => final_third_action(fixture, state, rng),
    };

    MinuteRecord {
        minute: state.minute,
        zone,
        holder,
        outcome,
    }
}

fn restart(fixture: &Fixture, state: &mut MatchState, rng: &mut MatchRng) -> PhaseOutcome {
    state.clear_possession();
    let winner = resolve_initial_possession(fixture, state.possession(), rng);
    state.give_possession(winner);
    PhaseOutcome::Restart { winner }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::{Player, Role, Team};

    fn midfielder(strength: u32) -> Player {
        Player::new(Role::Midfielder)
            .with_passing(strength)
            .with_attacking(0)
            .with_defending(0)
    }

    fn striker(strength: u32) -> Player {
        Player::new(Role::Striker).with_shooting(strength)
    }

    fn team(name: &str, mid: u32, att: u32, keeper: u32) -> Team {
        let mut team = Team::new(name, Player::new(Role::Goalkeeper).with_defending(keeper));
        if mid > 0 {
            team = team.with_player(midfielder(mid));
        }
        if att > 0 {
            team = team.with_player(striker(att));
        }
        team
    }

    fn fixture(home: Team, away: Team) -> Fixture {
        Fixture::new(home, away).unwrap()
    }

    #[test]
    fn test_stronger_holder_advances() {
        let fixture = fixture(team("Home", 1000, 0, 0), team("Away", 10, 0, 0));
        let mut state = MatchState::with_ball(10, BallZone::Midfield, Side::Home);
        let mut rng = MatchRng::new(1);

        let outcome = midfield_action(&fixture, &mut state, 0.0, &mut rng);

        assert!(matches!(outcome, PhaseOutcome::Advance { side: Side::Home, .. }));
        assert_eq!(state.zone, BallZone::FinalThird);
        assert_eq!(state.possession(), Some(Side::Home));
    }

    #[test]
    fn test_holder_attacks_challenger_defends() {
        let lopsided = |name: &str, attacking: u32, defending: u32| {
            Team::new(name, Player::new(Role::Goalkeeper)).with_player(
                Player::new(Role::Midfielder)
                    .with_attacking(attacking)
                    .with_defending(defending),
            )
        };
        let fixture = fixture(lopsided("Home", 1000, 0), lopsided("Away", 0, 100));
        let mut rng = MatchRng::new(21);

        for _ in 0..100 {
            // Home in possession: 1000 attacking against 100 defending
            let mut state = MatchState::with_ball(10, BallZone::Midfield, Side::Home);
            let outcome = midfield_action(&fixture, &mut state, 0.0, &mut rng);
            assert!(matches!(
                outcome,
                PhaseOutcome::Advance { side: Side::Home, totals }
                    if totals.home >= 1000 && totals.away < 150
            ));

            // Away in possession: 0 attacking against 0 defending, a tie
            let mut state = MatchState::with_ball(10, BallZone::Midfield, Side::Away);
            let outcome = midfield_action(&fixture, &mut state, 0.0, &mut rng);
            assert_eq!(
                outcome,
                PhaseOutcome::Turnover {
                    to: Side::Home,
                    totals: SideMap::new(0, 0),
                }
            );
        }
    }

    #[test]
    fn test_weaker_holder_loses_ball() {
        let fixture = fixture(team("Home", 1000, 0, 0), team("Away", 10, 0, 0));
        let mut state = MatchState::with_ball(10, BallZone::Midfield, Side::Away);
        let mut rng = MatchRng::new(1);

        let outcome = midfield_action(&fixture, &mut state, 0.0, &mut rng);

        assert!(matches!(outcome, PhaseOutcome::Turnover { to: Side::Home, .. }));
        assert_eq!(state.zone, BallZone::Midfield);
        assert_eq!(state.possession(), Some(Side::Home));
    }

    #[test]
    fn test_tie_turns_ball_over() {
        let fixture = fixture(team("Home", 0, 0, 0), team("Away", 0, 0, 0));

        for holder in Side::BOTH {
            let mut state = MatchState::with_ball(10, BallZone::Midfield, holder);
            let mut rng = MatchRng::new(5);
            let outcome = midfield_action(&fixture, &mut state, 0.0, &mut rng);

            assert_eq!(
                outcome,
                PhaseOutcome::Turnover {
                    to: holder.opponent(),
                    totals: SideMap::new(0, 0),
                }
            );
        }
    }

    #[test]
    fn test_certain_draw_restarts_in_midfield() {
        let fixture = fixture(team("Home", 10, 0, 0), team("Away", 1000, 0, 0));
        let mut state = MatchState::with_ball(10, BallZone::Midfield, Side::Home);
        let mut rng = MatchRng::new(1);

        let outcome = midfield_action(&fixture, &mut state, 1.0, &mut rng);

        assert_eq!(outcome, PhaseOutcome::Restart { winner: Side::Away });
        assert_eq!(state.zone, BallZone::Midfield);
        assert_eq!(state.possession(), Some(Side::Away));
    }

    #[test]
    fn test_goal_when_attack_dominates() {
        let fixture = fixture(team("Home", 0, 1000, 0), team("Away", 0, 0, 10));
        let mut state = MatchState::with_ball(10, BallZone::FinalThird, Side::Home);
        let mut rng = MatchRng::new(1);

        let outcome = final_third_action(&fixture, &mut state, &mut rng);

        assert!(matches!(outcome, PhaseOutcome::Goal { scorer: Side::Home, .. }));
        assert_eq!(state.goals, SideMap::new(1, 0));
        assert_eq!(state.attacks, SideMap::new(1, 0));
        assert_eq!(state.zone, BallZone::Midfield);
        assert_eq!(state.possession(), Some(Side::Away));
    }

    #[test]
    fn test_no_strikers_never_scores() {
        let fixture = fixture(team("Home", 0, 0, 70), team("Away", 0, 0, 70));
        let mut rng = MatchRng::new(1);

        for attacker in Side::BOTH {
            let mut state = MatchState::with_ball(10, BallZone::FinalThird, attacker);
            let outcome = final_third_action(&fixture, &mut state, &mut rng);

            assert!(matches!(
                outcome,
                PhaseOutcome::Defended { defender, attack_total: 0, defense_total }
                    if defender == attacker.opponent() && defense_total >= 70
            ));
            assert_eq!(state.goals.total(), 0);
            assert_eq!(state.possession(), Some(attacker.opponent()));
        }
    }

    #[test]
    fn test_both_sides_empty_is_no_goal() {
        let fixture = fixture(team("Home", 0, 0, 0), team("Away", 0, 0, 0));
        let mut state = MatchState::with_ball(10, BallZone::FinalThird, Side::Home);
        let mut rng = MatchRng::new(1);

        let outcome = final_third_action(&fixture, &mut state, &mut rng);

        assert!(matches!(outcome, PhaseOutcome::Defended { attack_total: 0, defense_total: 0, .. }));
    }

    #[test]
    fn test_play_minute_credits_holder_first() {
        let fixture = fixture(team("Home", 100, 100, 80), team("Away", 100, 100, 80));
        let mut state = MatchState::with_ball(10, BallZone::FinalThird, Side::Away);
        let mut rng = MatchRng::new(1);

        let record = play_minute(&fixture, &mut state, 0.1, &mut rng);

        assert_eq!(record.minute, 1);
        assert_eq!(record.zone, BallZone::FinalThird);
        assert_eq!(record.holder, Some(Side::Away));
        assert_eq!(state.possession_minutes, SideMap::new(0, 1));
        assert_eq!(state.attacks, SideMap::new(0, 1));
        assert_eq!(state.possession(), Some(Side::Home));
    }

    #[test]
    fn test_play_minute_before_kickoff_resolves() {
        let fixture = fixture(team("Home", 100, 0, 0), team("Away", 100, 0, 0));
        let mut state = MatchState::new(10);
        let mut rng = MatchRng::new(1);

        let record = play_minute(&fixture, &mut state, 0.1, &mut rng);

        assert!(matches!(record.outcome, PhaseOutcome::Restart { .. }));
        assert!(state.possession().is_some());
        assert_eq!(state.possession_minutes.total(), 0);
    }
}
