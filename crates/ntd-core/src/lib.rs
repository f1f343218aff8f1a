//! Dice model and exact pairwise odds for non-transitive dice.
//!
//! A [`DieSet`] holds the dice supplied for a game. [`ProbabilityMatrix`]
//! enumerates the full face cross-product of every ordered pair of dice and
//! reports exact win and tie probabilities, which the CLI renders as the
//! in-game help table.

pub mod die;
pub mod error;
pub mod odds;

pub use die::{Die, DieSet};
pub use error::{CoreError, CoreResult};
pub use odds::{PairOutcome, ProbabilityMatrix};
