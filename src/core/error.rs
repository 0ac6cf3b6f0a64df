//! Construction-time errors.
//!
//! Every variant is raised before a match starts. Once a `Match` has been
//! built, no minute of play can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("invalid formation '{formation}': {reason}")]
    InvalidFormation { formation: String, reason: String },

    #[error("invalid match configuration: {0}")]
    InvalidConfig(String),

    #[error("team name must not be empty")]
    EmptyTeamName,

    #[error("both teams are named '{0}'")]
    DuplicateTeamName(String),
}

pub type Result<T> = std::result::Result<T, MatchError>;
