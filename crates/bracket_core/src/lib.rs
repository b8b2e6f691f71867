//! # bracket_core - Rating-driven 64-team bracket simulator
//!
//! Estimates outcome distributions for a single-elimination tournament by
//! simulating it many times with Elo-style game outcomes.
//!
//! ## Features
//! - Deterministic per seed: trial `i` always draws from the same ChaCha stream
//! - Ratings update in place during a run, so early upsets carry forward
//! - Caller's roster is never mutated; every run owns a private copy
//! - Parallel Monte Carlo aggregation with no shared mutable state
//!
//! ```rust
//! use bracket_core::{MonteCarlo, Roster, SimulationConfig, TeamRecord, Region};
//!
//! let records: Vec<TeamRecord> = Region::ALL
//!     .into_iter()
//!     .flat_map(|region| {
//!         (1..=16u8).map(move |seed| {
//!             TeamRecord::new(
//!                 format!("{region} {seed}"),
//!                 1700.0 - 15.0 * seed as f64,
//!                 seed,
//!                 region.as_str(),
//!             )
//!         })
//!     })
//!     .collect();
//!
//! let roster = Roster::from_records(records).unwrap();
//! let config = SimulationConfig::deterministic(7).with_trials(200);
//! let table = MonteCarlo::new(&roster, config).run().unwrap();
//! assert_eq!(table.rows.len(), 64);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod rating;
pub mod seeding;
pub mod simulation;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::SimulationConfig;
pub use error::{Result, RosterError, SimulationError};
pub use models::{
    Field, Game, Region, RegionResult, Roster, Round, Team, TeamId, TeamRecord, TournamentResult,
};
pub use rating::{apply_result, expected_score, win_probability, K_FACTOR};
pub use seeding::{SeedAverage, SeedDeviation, SeedingReport};
pub use simulation::{
    build_region_bracket, play_game, run_single, simulate_region, simulate_tournament,
    simulate_trials, trial_rng, MonteCarlo, ProbabilityRow, ProbabilityTable, Tally,
    SEED_MATCHUPS, SEMIFINAL_PAIRS,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
