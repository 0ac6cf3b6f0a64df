//! Formation strings such as `"4-5-1"`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::MatchError;

/// Largest count accepted for a single role group when parsing.
pub const MAX_GROUP_SIZE: u32 = 10;

/// Outfield player counts per role group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Formation {
    pub defenders: u32,
    pub midfielders: u32,
    pub strikers: u32,
}

impl Formation {
    pub const fn new(defenders: u32, midfielders: u32, strikers: u32) -> Self {
        Self {
            defenders,
            midfielders,
            strikers,
        }
    }

    /// Number of outfield players.
    #[must_use]
    pub const fn outfield_count(&self) -> u32 {
        self.defenders
            .saturating_add(self.midfielders)
            .saturating_add(self.strikers)
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::new(4, 4, 2)
    }
}

impl FromStr for Formation {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| MatchError::InvalidFormation {
            formation: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.len() != 3 {
            return Err(invalid("expected three counts separated by '-'"));
        }

        let mut counts = [0u32; 3];
        for (slot, part) in counts.iter_mut().zip(&parts) {
            *slot = part
                .trim()
                .parse::<u32>()
                .map_err(|_| invalid(&format!("'{}' is not a non-negative integer", part)))?;
            if *slot > MAX_GROUP_SIZE {
                return Err(invalid(&format!(
                    "{} exceeds the limit of {} players per group",
                    slot, MAX_GROUP_SIZE
                )));
            }
        }

        Ok(Self::new(counts[0], counts[1], counts[2]))
    }
}

impl std::fmt::Display for Formation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.defenders, self.midfielders, self.strikers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let f: Formation = "4-5-1".parse().unwrap();
        assert_eq!(f, Formation::new(4, 5, 1));
        assert_eq!(f.outfield_count(), 10);
        assert_eq!(f.to_string(), "4-5-1");
    }

    #[test]
    fn test_parse_zero_group() {
        let f: Formation = "5-5-0".parse().unwrap();
        assert_eq!(f.strikers, 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "4-4", "4-4-1-1", "4-x-2", "4--2", "-1-4-2", "4-4-2.5"] {
            let err = bad.parse::<Formation>().unwrap_err();
            assert!(
                matches!(err, MatchError::InvalidFormation { .. }),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_rejects_oversized_groups() {
        for bad in ["4-4000000000-2", "11-4-2", "4-4-99"] {
            assert!(
                matches!(bad.parse::<Formation>(), Err(MatchError::InvalidFormation { .. })),
                "{} should be rejected",
                bad
            );
        }
        assert_eq!("10-10-10".parse::<Formation>().unwrap().outfield_count(), 30);
    }

    #[test]
    fn test_error_message_names_formation() {
        let err = "4-four-2".parse::<Formation>().unwrap_err();
        assert!(err.to_string().contains("4-four-2"));
    }
}
