//! Team, region and roster-record types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle assigned once when a roster is validated.
///
/// Handles index directly into a roster's team list, so every per-round
/// lookup in the simulation is a slice index rather than a name search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u16);

impl TeamId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the four fixed 16-team groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    East,
    West,
    South,
    Midwest,
}

impl Region {
    /// Simulation order. Also the order regions appear in a `TournamentResult`.
    pub const ALL: [Region; 4] = [Region::East, Region::West, Region::South, Region::Midwest];

    pub fn as_str(self) -> &'static str {
        match self {
            Region::East => "East",
            Region::West => "West",
            Region::South => "South",
            Region::Midwest => "Midwest",
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Region::East => 0,
            Region::West => 1,
            Region::South => 2,
            Region::Midwest => 3,
        }
    }

    /// Case-insensitive label match (`east`, `SOUTH`, `MidWest` all resolve).
    pub fn from_label(label: &str) -> Option<Region> {
        let label = label.trim();
        Region::ALL
            .into_iter()
            .find(|region| region.as_str().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A team inside a validated roster or a per-trial field.
///
/// `rating` is the only attribute that changes during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub rating: f64,
    pub seed: u8,
    pub region: Region,
}

/// Unvalidated roster row as produced by a loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    pub rating: f64,
    pub seed: u8,
    pub region: String,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>, rating: f64, seed: u8, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rating,
            seed,
            region: region.into(),
        }
    }
}
