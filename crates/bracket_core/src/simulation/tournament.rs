//! Full 64-team tournament: four regions, Final Four, championship

use rand::Rng;
use tracing::debug;

use super::game::play_game;
use super::region::simulate_region;
use crate::models::{Field, Region, RegionResult, Roster, Round, TournamentResult};

/// Final Four pairings. Static, independent of seeding.
pub const SEMIFINAL_PAIRS: [(Region, Region); 2] = [
    (Region::East, Region::West),
    (Region::South, Region::Midwest),
];

/// Simulate a tournament on a field the caller has already copied.
///
/// Regions run in `Region::ALL` order so a fixed random stream reproduces the
/// same bracket.
pub fn simulate_tournament<R: Rng + ?Sized>(mut field: Field, rng: &mut R) -> TournamentResult {
    let regions: Vec<RegionResult> = Region::ALL
        .into_iter()
        .map(|region| simulate_region(&mut field, region, rng))
        .collect();

    let champion_of = |region: Region| regions[region.index()].champion;
    let semifinals = SEMIFINAL_PAIRS.map(|(left, right)| {
        play_game(
            &mut field,
            champion_of(left),
            champion_of(right),
            Round::FinalFour,
            rng,
        )
    });

    let championship = play_game(
        &mut field,
        semifinals[0].winner,
        semifinals[1].winner,
        Round::Championship,
        rng,
    );
    let champion = championship.winner;

    debug!(
        champion = %field.team(champion).name,
        seed = field.team(champion).seed,
        "tournament resolved"
    );

    TournamentResult {
        regions,
        semifinals,
        championship,
        champion,
        teams: field.into_teams(),
    }
}

/// Simulate one tournament on a private copy of `roster`. The roster itself is
/// never touched.
pub fn run_single<R: Rng + ?Sized>(roster: &Roster, rng: &mut R) -> TournamentResult {
    simulate_tournament(roster.field(), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;
    use crate::test_support::tiered_roster;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_champion_in_team_list() {
        let roster = tiered_roster();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = run_single(&roster, &mut rng);
        assert!(roster.get(result.champion).is_some());
        assert_eq!(result.champion, result.championship.winner);
    }

    #[test]
    fn test_four_regions_in_results() {
        let roster = tiered_roster();
        let result = run_single(&roster, &mut ChaCha8Rng::seed_from_u64(2));
        let regions: Vec<Region> = result.regions.iter().map(|r| r.region).collect();
        assert_eq!(regions, Region::ALL.to_vec());
    }

    #[test]
    fn test_semifinals_pair_fixed_regions() {
        let roster = tiered_roster();
        let result = run_single(&roster, &mut ChaCha8Rng::seed_from_u64(3));
        for (game, (left, right)) in result.semifinals.iter().zip(SEMIFINAL_PAIRS) {
            let left_champ = result.region(left).map(|r| r.champion);
            let right_champ = result.region(right).map(|r| r.champion);
            assert!(left_champ.is_some_and(|id| game.involves(id)));
            assert!(right_champ.is_some_and(|id| game.involves(id)));
            assert_eq!(game.round, Round::FinalFour);
        }
    }

    #[test]
    fn test_championship_has_two_teams() {
        let roster = tiered_roster();
        let result = run_single(&roster, &mut ChaCha8Rng::seed_from_u64(4));
        assert_ne!(result.championship.winner, result.championship.loser);
        assert_eq!(result.runner_up(), result.championship.loser);
    }

    #[test]
    fn test_every_team_loses_once_except_champion() {
        let roster = tiered_roster();
        let result = run_single(&roster, &mut ChaCha8Rng::seed_from_u64(5));
        assert_eq!(result.games().count(), 63);
        let losers: HashSet<TeamId> = result.games().map(|g| g.loser).collect();
        assert_eq!(losers.len(), 63);
        assert!(!losers.contains(&result.champion));
    }

    #[test]
    fn test_run_single_preserves_original_ratings() {
        let roster = tiered_roster();
        let before = roster.clone();
        for seed in 0..20 {
            run_single(&roster, &mut ChaCha8Rng::seed_from_u64(seed));
        }
        assert_eq!(roster, before);
        assert_eq!(roster.find("East_S9").map(|t| t.rating), Some(1600.0));
    }

    #[test]
    fn test_result_holds_run_ratings() {
        let roster = tiered_roster();
        let result = run_single(&roster, &mut ChaCha8Rng::seed_from_u64(6));
        let champ = result.champion_team();
        let original = roster.get(result.champion).map(|t| t.rating).unwrap_or_default();
        // Six wins, each strictly positive
        assert!(champ.rating > original);
    }

    #[test]
    fn test_same_seed_reproduces_bracket() {
        let roster = tiered_roster();
        let a = run_single(&roster, &mut ChaCha8Rng::seed_from_u64(77));
        let b = run_single(&roster, &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
