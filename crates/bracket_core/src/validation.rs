//! Roster shape validation
//!
//! Enforces the precondition the simulator relies on: 64 uniquely named teams,
//! four known regions of sixteen, seeds 1-16 exactly once per region, finite
//! ratings. Checks run in a fixed order so the first violation reported is
//! stable for a given input.

use std::collections::HashSet;

use crate::error::RosterError;
use crate::models::{Region, Team, TeamId, TeamRecord};

pub const TEAM_COUNT: usize = 64;
pub const REGION_SIZE: usize = 16;
pub const MAX_SEED: u8 = 16;

/// Validate loader records and assign `TeamId`s in input order.
pub fn validate(records: Vec<TeamRecord>) -> Result<Vec<Team>, RosterError> {
    if records.len() != TEAM_COUNT {
        return Err(RosterError::InvalidTeamCount {
            expected: TEAM_COUNT,
            found: records.len(),
        });
    }

    let mut names = HashSet::with_capacity(records.len());
    for record in &records {
        if !names.insert(record.name.as_str()) {
            return Err(RosterError::DuplicateTeam {
                name: record.name.clone(),
            });
        }
    }

    let mut regions = Vec::with_capacity(records.len());
    for record in &records {
        match Region::from_label(&record.region) {
            Some(region) => regions.push(region),
            None => {
                return Err(RosterError::UnknownRegion {
                    team: record.name.clone(),
                    region: record.region.clone(),
                })
            }
        }
    }

    let distinct: HashSet<Region> = regions.iter().copied().collect();
    if distinct.len() != Region::ALL.len() {
        return Err(RosterError::InvalidRegionCount {
            found: distinct.len(),
        });
    }

    for region in Region::ALL {
        let seeds: Vec<u8> = records
            .iter()
            .zip(&regions)
            .filter(|(_, r)| **r == region)
            .map(|(record, _)| record.seed)
            .collect();
        check_region_seeds(region, &seeds)?;
    }

    for record in &records {
        if !record.rating.is_finite() {
            return Err(RosterError::NonFiniteRating {
                team: record.name.clone(),
                rating: record.rating,
            });
        }
    }

    Ok(records
        .into_iter()
        .zip(regions)
        .enumerate()
        .map(|(i, (record, region))| Team {
            id: TeamId(i as u16),
            name: record.name,
            rating: record.rating,
            seed: record.seed,
            region,
        })
        .collect())
}

fn check_region_seeds(region: Region, seeds: &[u8]) -> Result<(), RosterError> {
    if seeds.len() != REGION_SIZE {
        return Err(RosterError::InvalidRegionSize {
            region: region.to_string(),
            found: seeds.len(),
        });
    }

    let mut seen = [false; MAX_SEED as usize + 1];
    for &seed in seeds {
        if seed == 0 || seed > MAX_SEED {
            return Err(RosterError::InvalidSeeding {
                region: region.to_string(),
                detail: format!("seed {} out of range 1-{}", seed, MAX_SEED),
            });
        }
        if std::mem::replace(&mut seen[seed as usize], true) {
            return Err(RosterError::InvalidSeeding {
                region: region.to_string(),
                detail: format!("duplicate seed {}", seed),
            });
        }
    }

    let missing: Vec<String> = (1..=MAX_SEED)
        .filter(|s| !seen[*s as usize])
        .map(|s| s.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(RosterError::InvalidSeeding {
            region: region.to_string(),
            detail: format!("missing seeds {}", missing.join(", ")),
        });
    }

    Ok(())
}
