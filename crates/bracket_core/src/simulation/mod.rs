//! Simulation engine
//!
//! Leaves first: `bracket` (slot order) -> `game` (one draw + rating update)
//! -> `region` (16 to 1) -> `tournament` (4 regions + Final Four) ->
//! `monte_carlo` (many independent tournaments folded into probabilities).

pub mod bracket;
pub mod game;
pub mod monte_carlo;
pub mod region;
pub mod tournament;

pub use bracket::{build_region_bracket, SEED_MATCHUPS};
pub use game::play_game;
pub use monte_carlo::{
    simulate_trials, trial_rng, MonteCarlo, ProbabilityRow, ProbabilityTable, Tally,
};
pub use region::simulate_region;
pub use tournament::{run_single, simulate_tournament, SEMIFINAL_PAIRS};
