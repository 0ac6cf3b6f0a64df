//! Team sides and per-side data storage.
//!
//! ## Side
//!
//! Identifies one of the two teams in a match. Possession is modelled as
//! `Option<Side>` so "nobody has the ball yet" can never be confused with
//! a team whose name happens to be empty.
//!
//! ## SideMap
//!
//! Per-side counters (goals, possession minutes, attack attempts) with
//! O(1) access by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two teams in a match.
///
/// `Home` is the side enumerated first, `Away` second.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// Both sides, home first.
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }

    /// Get the raw side index (home = 0).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Home => write!(f, "Home"),
            Side::Away => write!(f, "Away"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use match_sim::core::{Side, SideMap};
///
/// let mut goals: SideMap<u32> = SideMap::default();
/// goals[Side::Away] += 1;
///
/// assert_eq!(goals[Side::Home], 0);
/// assert_eq!(goals[Side::Away], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub home: T,
    pub away: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit home and away values.
    pub const fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        let home = factory(Side::Home);
        let away = factory(Side::Away);
        Self { home, away }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    /// Iterate over (Side, &T) pairs, home first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Home, &self.home), (Side::Away, &self.away)].into_iter()
    }

    /// Apply a function to both values.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SideMap<U> {
        SideMap {
            home: f(&self.home),
            away: f(&self.away),
        }
    }
}

impl SideMap<u32> {
    /// Sum of both sides.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.home + self.away
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Home.opponent(), Side::Away);
        assert_eq!(Side::Away.opponent(), Side::Home);
        assert_eq!(Side::Home.opponent().opponent(), Side::Home);
    }

    #[test]
    fn test_side_index_and_display() {
        assert_eq!(Side::Home.index(), 0);
        assert_eq!(Side::Away.index(), 1);
        assert_eq!(format!("{}", Side::Away), "Away");
    }

    #[test]
    fn test_side_map_from_fn() {
        let map = SideMap::from_fn(|s| s.index() * 10);
        assert_eq!(map[Side::Home], 0);
        assert_eq!(map[Side::Away], 10);
    }

    #[test]
    fn test_side_map_mutation_and_total() {
        let mut map: SideMap<u32> = SideMap::default();
        map[Side::Home] += 3;
        map[Side::Away] += 4;

        assert_eq!(map.total(), 7);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Home, &3), (Side::Away, &4)]);
    }

    #[test]
    fn test_side_map_map() {
        let names = SideMap::new("Reds".to_string(), "Blues".to_string());
        let lengths = names.map(|n| n.len());
        assert_eq!(lengths, SideMap::new(4, 5));
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(1u32, 2u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
