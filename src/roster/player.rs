//! Players, roles and per-role stat ranges.
//!
//! A `Player` is immutable once created; the engine only ever reads its
//! attributes when aggregating team strength.

use serde::{Deserialize, Serialize};

/// Playing role, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Striker,
}

impl Role {
    /// All roles, goalkeeper first.
    pub const ALL: [Role; 4] = [Role::Goalkeeper, Role::Defender, Role::Midfielder, Role::Striker];

    /// Stat ranges the roster generator draws from for this role.
    #[must_use]
    pub const fn profile(self) -> RoleProfile {
        match self {
            Role::Goalkeeper => RoleProfile {
                shooting: StatRange::new(10, 29),
                defending: StatRange::new(70, 99),
                passing: StatRange::new(30, 69),
                physical: StatRange::new(70, 99),
                speed: StatRange::new(30, 69),
                attacking: StatRange::new(10, 29),
            },
            Role::Defender => RoleProfile {
                shooting: StatRange::new(20, 49),
                defending: StatRange::new(60, 89),
                passing: StatRange::new(40, 79),
                physical: StatRange::new(60, 89),
                speed: StatRange::new(40, 79),
                attacking: StatRange::new(20, 49),
            },
            Role::Midfielder => RoleProfile {
                shooting: StatRange::new(30, 69),
                defending: StatRange::new(40, 79),
                passing: StatRange::new(70, 99),
                physical: StatRange::new(50, 89),
                speed: StatRange::new(50, 89),
                attacking: StatRange::new(30, 69),
            },
            Role::Striker => RoleProfile {
                shooting: StatRange::new(70, 99),
                defending: StatRange::new(10, 29),
                passing: StatRange::new(40, 79),
                physical: StatRange::new(40, 79),
                speed: StatRange::new(60, 89),
                attacking: StatRange::new(70, 99),
            },
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Role::Goalkeeper => write!(f, "Goalkeeper"),
            Role::Defender => write!(f, "Defender"),
            Role::Midfielder => write!(f, "Midfielder"),
            Role::Striker => write!(f, "Striker"),
        }
    }
}

/// Inclusive stat range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatRange {
    pub min: u32,
    pub max: u32,
}

impl StatRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Stat ranges for one role.
///
/// There is no tackling range: generated players always carry
/// `tackling == 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleProfile {
    pub shooting: StatRange,
    pub defending: StatRange,
    pub passing: StatRange,
    pub physical: StatRange,
    pub speed: StatRange,
    pub attacking: StatRange,
}

impl RoleProfile {
    /// Check whether a player's attributes all fall inside this profile.
    #[must_use]
    pub fn admits(&self, player: &Player) -> bool {
        self.shooting.contains(player.shooting)
            && self.defending.contains(player.defending)
            && self.passing.contains(player.passing)
            && self.physical.contains(player.physical)
            && self.speed.contains(player.speed)
            && self.attacking.contains(player.attacking)
    }
}

/// A single player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub role: Role,
    pub shooting: u32,
    pub defending: u32,
    pub tackling: u32,
    pub passing: u32,
    pub physical: u32,
    pub speed: u32,
    pub attacking: u32,
}

impl Player {
    /// Create a player with every attribute at zero.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            shooting: 0,
            defending: 0,
            tackling: 0,
            passing: 0,
            physical: 0,
            speed: 0,
            attacking: 0,
        }
    }

    #[must_use]
    pub fn with_shooting(mut self, value: u32) -> Self {
        self.shooting = value;
        self
    }

    #[must_use]
    pub fn with_defending(mut self, value: u32) -> Self {
        self.defending = value;
        self
    }

    #[must_use]
    pub fn with_tackling(mut self, value: u32) -> Self {
        self.tackling = value;
        self
    }

    #[must_use]
    pub fn with_passing(mut self, value: u32) -> Self {
        self.passing = value;
        self
    }

    #[must_use]
    pub fn with_physical(mut self, value: u32) -> Self {
        self.physical = value;
        self
    }

    #[must_use]
    pub fn with_speed(mut self, value: u32) -> Self {
        self.speed = value;
        self
    }

    #[must_use]
    pub fn with_attacking(mut self, value: u32) -> Self {
        self.attacking = value;
        self
    }
}
