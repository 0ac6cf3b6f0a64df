//! The pair of teams playing one match.

use serde::{Deserialize, Serialize};

use crate::core::{MatchError, Result, Side, SideMap};
use crate::roster::Team;

/// Two validated teams: names are non-empty and distinct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    teams: SideMap<Team>,
}

impl Fixture {
    pub fn new(home: Team, away: Team) -> Result<Self> {
        if home.name.trim().is_empty() || away.name.trim().is_empty() {
            return Err(MatchError::EmptyTeamName);
        }
        if home.name == away.name {
            return Err(MatchError::DuplicateTeamName(home.name));
        }
        Ok(Self {
            teams: SideMap::new(home, away),
        })
    }

    #[must_use]
    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side]
    }

    #[must_use]
    pub fn home(&self) -> &Team {
        &self.teams.home
    }

    #[must_use]
    pub fn away(&self) -> &Team {
        &self.teams.away
    }

    #[must_use]
    pub fn name(&self, side: Side) -> &str {
        &self.teams[side].name
    }

    #[must_use]
    pub fn names(&self) -> SideMap<String> {
        self.teams.map(|t| t.name.clone())
    }
}
