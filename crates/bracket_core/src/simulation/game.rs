//! Single-game resolution

use rand::Rng;

use crate::models::{Field, Game, Round, TeamId};
use crate::rating::{apply_result, win_probability};

/// Resolve `a` vs `b` with one uniform draw and update both ratings in place.
///
/// `a` wins iff `u < P(a beats b)` for `u` drawn from `[0, 1)`.
pub fn play_game<R: Rng + ?Sized>(
    field: &mut Field,
    a: TeamId,
    b: TeamId,
    round: Round,
    rng: &mut R,
) -> Game {
    let (team_a, team_b) = field.pair_mut(a, b);
    let p = win_probability(team_a, team_b);
    let u: f64 = rng.gen();

    let (winner, loser, winner_probability) = if u < p {
        (team_a, team_b, p)
    } else {
        (team_b, team_a, 1.0 - p)
    };
    apply_result(winner, loser);

    Game {
        round,
        winner: winner.id,
        loser: loser.id,
        winner_probability,
    }
}
