//! Seed-vs-rating deviation analysis
//!
//! For each seed, averages the rating of every team holding it; a team's
//! deviation is its rating minus that average. Positive means the team is
//! better than its seed suggests (underseeded), negative means overseeded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Roster;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedAverage {
    pub seed: u8,
    pub mean_rating: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedDeviation {
    pub name: String,
    pub seed: u8,
    pub rating: f64,
    pub seed_mean: f64,
    pub deviation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedingReport {
    /// Ascending by seed
    pub seed_averages: Vec<SeedAverage>,
    /// Descending by deviation
    pub deviations: Vec<SeedDeviation>,
}

impl SeedingReport {
    /// Build from loose `(name, seed, rating)` entries; no roster shape is
    /// required.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u8, f64)>,
        S: Into<String>,
    {
        let entries: Vec<(String, u8, f64)> = entries
            .into_iter()
            .map(|(name, seed, rating)| (name.into(), seed, rating))
            .collect();

        let mut by_seed: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
        for (_, seed, rating) in &entries {
            let slot = by_seed.entry(*seed).or_insert((0.0, 0));
            slot.0 += rating;
            slot.1 += 1;
        }

        let seed_averages: Vec<SeedAverage> = by_seed
            .iter()
            .map(|(&seed, &(sum, count))| SeedAverage {
                seed,
                mean_rating: sum / count as f64,
                count,
            })
            .collect();

        let mean_of = |seed: u8| {
            seed_averages
                .iter()
                .find(|a| a.seed == seed)
                .map(|a| a.mean_rating)
                .unwrap_or_default()
        };

        let mut deviations: Vec<SeedDeviation> = entries
            .into_iter()
            .map(|(name, seed, rating)| {
                let seed_mean = mean_of(seed);
                SeedDeviation {
                    name,
                    seed,
                    rating,
                    seed_mean,
                    deviation: rating - seed_mean,
                }
            })
            .collect();
        deviations.sort_by(|a, b| b.deviation.total_cmp(&a.deviation));

        Self {
            seed_averages,
            deviations,
        }
    }

    pub fn from_roster(roster: &Roster) -> Self {
        Self::from_entries(
            roster
                .teams()
                .iter()
                .map(|t| (t.name.clone(), t.seed, t.rating)),
        )
    }

    /// Largest positive deviations first
    pub fn underseeded(&self, top: usize) -> &[SeedDeviation] {
        &self.deviations[..top.min(self.deviations.len())]
    }

    /// Most negative deviations first
    pub fn overseeded(&self, top: usize) -> Vec<&SeedDeviation> {
        self.deviations.iter().rev().take(top).collect()
    }
}
