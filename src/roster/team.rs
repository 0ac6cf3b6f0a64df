//! Teams: one goalkeeper plus role-grouped outfield players.

use serde::{Deserialize, Serialize};

use super::formation::Formation;
use super::player::{Player, Role};

/// A team's roster.
///
/// Order within a role group has no effect on the simulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub goalkeeper: Player,
    pub defenders: Vec<Player>,
    pub midfielders: Vec<Player>,
    pub strikers: Vec<Player>,
}

impl Team {
    /// Create a team with only a goalkeeper.
    pub fn new(name: impl Into<String>, goalkeeper: Player) -> Self {
        Self {
            name: name.into(),
            goalkeeper,
            defenders: Vec::new(),
            midfielders: Vec::new(),
            strikers: Vec::new(),
        }
    }

    /// Add an outfield player to the group matching their role.
    ///
    /// A second goalkeeper replaces the first.
    #[must_use]
    pub fn with_player(mut self, player: Player) -> Self {
        match player.role {
            Role::Goalkeeper => self.goalkeeper = player,
            Role::Defender => self.defenders.push(player),
            Role::Midfielder => self.midfielders.push(player),
            Role::Striker => self.strikers.push(player),
        }
        self
    }

    /// Players in a role group.
    #[must_use]
    pub fn group(&self, role: Role) -> &[Player] {
        match role {
            Role::Goalkeeper => std::slice::from_ref(&self.goalkeeper),
            Role::Defender => &self.defenders,
            Role::Midfielder => &self.midfielders,
            Role::Striker => &self.strikers,
        }
    }

    /// The outfield shape of this roster.
    #[must_use]
    pub fn formation(&self) -> Formation {
        let count = |group: &[Player]| u32::try_from(group.len()).unwrap_or(u32::MAX);
        Formation::new(
            count(&self.defenders),
            count(&self.midfielders),
            count(&self.strikers),
        )
    }

    /// Total players including the goalkeeper.
    #[must_use]
    pub fn player_count(&self) -> usize {
        1 + self.defenders.len() + self.midfielders.len() + self.strikers.len()
    }
}
