//! Random roster generation.

use crate::core::MatchRng;

use super::formation::Formation;
use super::player::{Player, Role, StatRange};
use super::team::Team;

/// Builds teams with attributes drawn from each role's stat ranges.
///
/// ```
/// use match_sim::core::MatchRng;
/// use match_sim::roster::{Formation, RosterGenerator};
///
/// let mut generator = RosterGenerator::new(MatchRng::new(1));
/// let team = generator.generate_team("Reds", Formation::new(4, 5, 1));
///
/// assert_eq!(team.midfielders.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct RosterGenerator {
    rng: MatchRng,
}

impl RosterGenerator {
    pub fn new(rng: MatchRng) -> Self {
        Self { rng }
    }

    /// Generator on the `"roster"` stream of a match seed.
    pub fn for_seed(seed: u64) -> Self {
        Self::new(MatchRng::new(seed).for_context("roster"))
    }

    /// Generate one player.
    ///
    /// Draw order: shooting, defending, passing, physical, speed, attacking.
    /// Tackling is never drawn and stays at zero.
    pub fn generate_player(&mut self, role: Role) -> Player {
        let profile = role.profile();
        Player {
            role,
            shooting: self.draw(profile.shooting),
            defending: self.draw(profile.defending),
            tackling: 0,
            passing: self.draw(profile.passing),
            physical: self.draw(profile.physical),
            speed: self.draw(profile.speed),
            attacking: self.draw(profile.attacking),
        }
    }

    /// Generate a full team: goalkeeper, then defenders, midfielders, strikers.
    pub fn generate_team(&mut self, name: impl Into<String>, formation: Formation) -> Team {
        let goalkeeper = self.generate_player(Role::Goalkeeper);
        let defenders = self.generate_group(Role::Defender, formation.defenders);
        let midfielders = self.generate_group(Role::Midfielder, formation.midfielders);
        let strikers = self.generate_group(Role::Striker, formation.strikers);

        Team {
            name: name.into(),
            goalkeeper,
            defenders,
            midfielders,
            strikers,
        }
    }

    fn generate_group(&mut self, role: Role, count: u32) -> Vec<Player> {
        (0..count).map(|_| self.generate_player(role)).collect()
    }

    fn draw(&mut self, range: StatRange) -> u32 {
        self.rng.between(range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_players_respect_profiles() {
        let mut generator = RosterGenerator::new(MatchRng::new(42));

        for role in Role::ALL {
            for _ in 0..200 {
                let player = generator.generate_player(role);
                assert_eq!(player.role, role);
                assert!(role.profile().admits(&player), "{:?} out of range", player);
                assert_eq!(player.tackling, 0);
            }
        }
    }

    #[test]
    fn test_team_matches_formation() {
        let mut generator = RosterGenerator::new(MatchRng::new(42));
        let team = generator.generate_team("Team A", "4-5-1".parse().unwrap());

        assert_eq!(team.name, "Team A");
        assert_eq!(team.goalkeeper.role, Role::Goalkeeper);
        assert_eq!(team.formation(), Formation::new(4, 5, 1));
        assert!(team.defenders.iter().all(|p| p.role == Role::Defender));
        assert!(team.strikers.iter().all(|p| p.role == Role::Striker));
    }

    #[test]
    fn test_same_seed_same_team() {
        let a = RosterGenerator::for_seed(9).generate_team("A", Formation::default());
        let b = RosterGenerator::for_seed(9).generate_team("A", Formation::default());
        let c = RosterGenerator::for_seed(10).generate_team("A", Formation::default());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_groups() {
        let mut generator = RosterGenerator::new(MatchRng::new(1));
        let team = generator.generate_team("Keeper Only", Formation::new(0, 0, 0));
        assert_eq!(team.player_count(), 1);
    }
}
