//! Match loop.
//!
//! `Match` owns the fixture, the configuration, the state and the single
//! RNG for one game. `play` resolves kickoff possession, runs exactly
//! `total_minutes` minutes and returns a `MatchReport`.

use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, MatchRng, MatchRngState, Result, Side, SideMap};
use crate::roster::Team;

use super::fixture::Fixture;
use super::phase::{self, MinuteRecord};
use super::possession::resolve_initial_possession;
use super::state::MatchState;
use super::strength::StrengthSummary;

/// A single match in progress.
#[derive(Clone, Debug)]
pub struct Match {
    /// The two teams.
    fixture: Fixture,

    /// Match configuration.
    config: MatchConfig,

    /// Ball zone, possession and counters.
    state: MatchState,

    /// RNG for every in-match draw.
    rng: MatchRng,

    /// Possession winner at kickoff.
    kickoff: Option<Side>,

    /// Every minute played so far.
    timeline: Vec<MinuteRecord>,
}

impl Match {
    /// Create a match on the `"match"` stream of `config.seed`.
    pub fn new(home: Team, away: Team, config: MatchConfig) -> Result<Self> {
        let fixture = Fixture::new(home, away)?;
        let rng = MatchRng::new(config.seed).for_context("match");
        Self::with_rng(fixture, config, rng)
    }

    /// Create a match with an explicit RNG.
    pub fn with_rng(fixture: Fixture, config: MatchConfig, rng: MatchRng) -> Result<Self> {
        let state = MatchState::new(config.total_minutes);
        Self::resume(fixture, config, state, rng)
    }

    /// Continue from an existing state.
    ///
    /// If the state already has a possession holder, kickoff resolution
    /// is skipped. `state.total_minutes` is taken from `config`.
    pub fn resume(
        fixture: Fixture,
        config: MatchConfig,
        mut state: MatchState,
        rng: MatchRng,
    ) -> Result<Self> {
        config.validate()?;
        state.total_minutes = config.total_minutes;
        Ok(Self {
            fixture,
            config,
            state,
            rng,
            kickoff: None,
            timeline: Vec::new(),
        })
    }

    #[must_use]
    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn timeline(&self) -> &[MinuteRecord] {
        &self.timeline
    }

    /// RNG position, for resuming this match later with [`Match::resume`].
    #[must_use]
    pub fn rng_state(&self) -> MatchRngState {
        self.rng.state()
    }

    /// Pre-match attack/midfield/defense totals for both sides.
    #[must_use]
    pub fn strength_summary(&self) -> SideMap<StrengthSummary> {
        SideMap::from_fn(|side| StrengthSummary::of(self.fixture.team(side)))
    }

    /// Resolve possession if nobody holds the ball yet.
    ///
    /// Returns the current holder. Calling this more than once is a no-op.
    pub fn kick_off(&mut self) -> Side {
        if let Some(holder) = self.state.possession() {
            return holder;
        }
        let winner = resolve_initial_possession(&self.fixture, None, &mut self.rng);
        self.state.give_possession(winner);
        self.kickoff = Some(winner);
        winner
    }

    /// Play one minute. Returns `None` once every minute has been played.
    pub fn play_minute(&mut self) -> Option<&MinuteRecord> {
        if self.state.is_finished() {
            return None;
        }
        self.kick_off();

        let record = phase::play_minute(
            &self.fixture,
            &mut self.state,
            self.config.midfield_draw_chance,
            &mut self.rng,
        );
        self.timeline.push(record);
        self.timeline.last()
    }

    /// Run the match to completion.
    pub fn play(self) -> MatchReport {
        self.play_with(|_| {})
    }

    /// Run the match to completion, calling `on_minute` after each minute.
    ///
    /// Sleeps `step_delay_ms` between minutes.
    pub fn play_with(mut self, mut on_minute: impl FnMut(&MinuteRecord)) -> MatchReport {
        self.kick_off();

        let delay = Duration::from_millis(self.config.step_delay_ms);
        while let Some(record) = self.play_minute() {
            on_minute(record);
            if !delay.is_zero() && !self.state.is_finished() {
                std::thread::sleep(delay);
            }
        }

        let report = self.report();
        info!(
            "Final score: {} {} - {} {}",
            report.names.home, report.goals.home, report.goals.away, report.names.away
        );
        report
    }

    /// Snapshot of the counters so far.
    #[must_use]
    pub fn report(&self) -> MatchReport {
        MatchReport {
            names: self.fixture.names(),
            seed: self.config.seed,
            total_minutes: self.config.total_minutes,
            minutes_played: self.state.minute,
            kickoff: self.kickoff,
            goals: self.state.goals,
            possession_minutes: self.state.possession_minutes,
            attacks: self.state.attacks,
            strengths: self.strength_summary(),
            timeline: self.timeline.clone(),
        }
    }
}

/// Final counters of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub names: SideMap<String>,
    pub seed: u64,
    pub total_minutes: u32,
    pub minutes_played: u32,
    /// Side that won possession at kickoff, if kickoff was resolved here.
    pub kickoff: Option<Side>,
    pub goals: SideMap<u32>,
    pub possession_minutes: SideMap<u32>,
    pub attacks: SideMap<u32>,
    pub strengths: SideMap<StrengthSummary>,
    pub timeline: Vec<MinuteRecord>,
}

impl MatchReport {
    /// Integer possession percentage over the configured minutes.
    #[must_use]
    pub fn possession_pct(&self, side: Side) -> u32 {
        if self.total_minutes == 0 {
            return 0;
        }
        self.possession_minutes[side] * 100 / self.total_minutes
    }

    /// Winning side, or `None` for a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        use std::cmp::Ordering;
        match self.goals.home.cmp(&self.goals.away) {
            Ordering::Greater => Some(Side::Home),
            Ordering::Less => Some(Side::Away),
            Ordering::Equal => None,
        }
    }
}
