//! Elo rating model
//!
//! Pure win-probability function plus the in-run update applied after every
//! decided game. The update mutates the same `Team` that plays the next round,
//! so an early upset shifts that team's later odds within the same run.

use crate::models::Team;

/// K-factor for tournament games
pub const K_FACTOR: f64 = 20.0;

/// Rating difference that multiplies the odds by 10
pub const ELO_SCALE: f64 = 400.0;

/// Probability that a side rated `rating_a` beats a side rated `rating_b`.
#[inline]
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((rating_b - rating_a) / ELO_SCALE))
}

/// P(`a` beats `b`) at the teams' current ratings.
#[inline]
pub fn win_probability(a: &Team, b: &Team) -> f64 {
    expected_score(a.rating, b.rating)
}

/// Points the winner takes from the loser.
#[inline]
pub fn rating_change(winner_rating: f64, loser_rating: f64) -> f64 {
    K_FACTOR * (1.0 - expected_score(winner_rating, loser_rating))
}

/// Apply a decided game in place. Zero-sum; returns the points transferred.
pub fn apply_result(winner: &mut Team, loser: &mut Team) -> f64 {
    let delta = rating_change(winner.rating, loser.rating);
    winner.rating += delta;
    loser.rating -= delta;
    delta
}
