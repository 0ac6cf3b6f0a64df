//! Core engine types: sides, RNG, configuration, errors.
//!
//! These are shared by the roster provider and the match engine and carry
//! no football logic of their own.

pub mod side;
pub mod rng;
pub mod config;
pub mod error;

pub use side::{Side, SideMap};
pub use rng::{MatchRng, MatchRngState};
pub use config::MatchConfig;
pub use error::{MatchError, Result};
