//! First-round pairing order for a region

use crate::models::{Team, TeamId};

/// Standard seed matchups, in bracket slot order.
///
/// Slot pairs `[0v1, 2v3, ...]` of the built bracket map to these games, and
/// adjacent games feed the same next-round game.
pub const SEED_MATCHUPS: [(u8, u8); 8] = [
    (1, 16),
    (8, 9),
    (5, 12),
    (4, 13),
    (6, 11),
    (3, 14),
    (7, 10),
    (2, 15),
];

/// Order one region's 16 teams into bracket slots.
///
/// Input order does not matter; output is always
/// `1,16, 8,9, 5,12, 4,13, 6,11, 3,14, 7,10, 2,15` by seed.
///
/// # Panics
/// If any seed 1-16 is absent. Validated rosters cannot reach this.
pub fn build_region_bracket<'a, I>(region_teams: I) -> Vec<TeamId>
where
    I: IntoIterator<Item = &'a Team>,
{
    let mut by_seed: [Option<TeamId>; 17] = [None; 17];
    for team in region_teams {
        if let Some(slot) = by_seed.get_mut(team.seed as usize) {
            *slot = Some(team.id);
        }
    }

    SEED_MATCHUPS
        .iter()
        .flat_map(|&(top, bottom)| [top, bottom])
        .map(|seed| match by_seed[seed as usize] {
            Some(id) => id,
            None => panic!("region bracket is missing seed {seed}"),
        })
        .collect()
}
