//! Roster fixtures shared by unit tests

use crate::models::{Region, Roster, TeamRecord};

/// Seed-tiered ratings: 1800 for a 1 seed down to 1460 for a 16 seed.
pub const TIERED_RATINGS: [f64; 16] = [
    1800.0, 1750.0, 1720.0, 1700.0, 1680.0, 1660.0, 1640.0, 1620.0, 1600.0, 1580.0, 1560.0,
    1540.0, 1520.0, 1500.0, 1480.0, 1460.0,
];

pub fn tiered_records() -> Vec<TeamRecord> {
    Region::ALL
        .into_iter()
        .flat_map(|region| {
            (1..=16u8).map(move |seed| {
                TeamRecord::new(
                    format!("{}_S{}", region, seed),
                    TIERED_RATINGS[seed as usize - 1],
                    seed,
                    region.as_str(),
                )
            })
        })
        .collect()
}

pub fn flat_records(rating: f64) -> Vec<TeamRecord> {
    let mut records = tiered_records();
    for record in &mut records {
        record.rating = rating;
    }
    records
}

pub fn tiered_roster() -> Roster {
    Roster::from_records(tiered_records()).expect("fixture roster is valid")
}
