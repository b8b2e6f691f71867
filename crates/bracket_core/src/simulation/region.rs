//! Region knockout: 16 teams down to one champion in four rounds

use rand::Rng;
use tracing::debug;

use super::bracket::build_region_bracket;
use super::game::play_game;
use crate::models::{Field, Game, Region, RegionResult, Round, TeamId};

/// Simulate one region on `field`, updating ratings as games are decided.
pub fn simulate_region<R: Rng + ?Sized>(
    field: &mut Field,
    region: Region,
    rng: &mut R,
) -> RegionResult {
    let bracket = build_region_bracket(field.region_teams(region));
    let (champion, rounds) = run_knockout(field, bracket, Round::RoundOf64, rng);

    debug!(
        region = %region,
        champion = %field.team(champion).name,
        "region resolved"
    );

    RegionResult {
        region,
        rounds,
        champion,
    }
}

/// Halve `entrants` pairwise until one remains.
///
/// `entrants` must have a power-of-two length. Returns the survivor and each
/// round's games in slot order.
pub(crate) fn run_knockout<R: Rng + ?Sized>(
    field: &mut Field,
    entrants: Vec<TeamId>,
    first_round: Round,
    rng: &mut R,
) -> (TeamId, Vec<Vec<Game>>) {
    debug_assert!(entrants.len().is_power_of_two());

    let mut rounds = Vec::new();
    let mut current = entrants;
    let mut round = first_round;

    while current.len() > 1 {
        let games: Vec<Game> = current
            .chunks_exact(2)
            .map(|pair| play_game(field, pair[0], pair[1], round, rng))
            .collect();
        current = games.iter().map(|g| g.winner).collect();
        rounds.push(games);

        if let Some(next) = round.next() {
            round = next;
        }
    }

    (current[0], rounds)
}
