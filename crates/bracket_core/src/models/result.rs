//! Outcome of one simulated tournament

use serde::{Deserialize, Serialize};

use super::game::{Game, Round};
use super::team::{Region, Team, TeamId};

/// One region reduced to its champion.
///
/// `rounds[r]` holds the games of `Round::REGIONAL[r]` in bracket order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResult {
    pub region: Region,
    pub rounds: Vec<Vec<Game>>,
    pub champion: TeamId,
}

impl RegionResult {
    pub fn games(&self, round: Round) -> &[Game] {
        self.rounds
            .get(round.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Complete bracket from one run.
///
/// `teams` is the run's private copy of the roster after every rating update,
/// indexed by `TeamId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TournamentResult {
    pub regions: Vec<RegionResult>,
    pub semifinals: [Game; 2],
    pub championship: Game,
    pub champion: TeamId,
    pub teams: Vec<Team>,
}

impl TournamentResult {
    pub fn region(&self, region: Region) -> Option<&RegionResult> {
        self.regions.iter().find(|r| r.region == region)
    }

    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    pub fn champion_team(&self) -> &Team {
        self.team(self.champion)
    }

    pub fn runner_up(&self) -> TeamId {
        self.championship.loser
    }

    /// All 63 games, regional rounds first (region order), then the Final Four
    /// and the championship.
    pub fn games(&self) -> impl Iterator<Item = &Game> {
        self.regions
            .iter()
            .flat_map(|region| region.rounds.iter().flatten())
            .chain(self.semifinals.iter())
            .chain(std::iter::once(&self.championship))
    }

    pub fn upset_count(&self) -> usize {
        self.games().filter(|g| g.is_upset()).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
