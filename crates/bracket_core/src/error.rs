use thiserror::Error;

/// Roster shape violations, raised before any simulation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("Expected {expected} teams, found {found}")]
    InvalidTeamCount { expected: usize, found: usize },

    #[error("Duplicate team name: {name}")]
    DuplicateTeam { name: String },

    #[error("Unknown region '{region}' for team {team}")]
    UnknownRegion { team: String, region: String },

    #[error("Expected 4 regions, found {found}")]
    InvalidRegionCount { found: usize },

    #[error("Region {region} has {found} teams, expected 16")]
    InvalidRegionSize { region: String, found: usize },

    #[error("Region {region} has invalid seeding: {detail}")]
    InvalidSeeding { region: String, detail: String },

    #[error("Team {team} has non-finite rating {rating}")]
    NonFiniteRating { team: String, rating: f64 },
}

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Simulation cancelled before any trial completed")]
    Cancelled,

    #[error("No trials recorded")]
    NoTrials,

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SimulationError {
    /// Cancellation is the only error a caller can retry without changing input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SimulationError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
