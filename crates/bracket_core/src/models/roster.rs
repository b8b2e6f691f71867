//! Caller-owned roster and the per-trial working copy

use serde::Serialize;

use super::team::{Region, Team, TeamId, TeamRecord};
use crate::error::RosterError;
use crate::validation;

/// A validated 64-team roster.
///
/// Only constructible through validation, so every simulation entry point can
/// rely on 4 regions x 16 unique seeds. The simulator never mutates it; each
/// run works on a [`Field`] cloned from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    teams: Vec<Team>,
}

impl Roster {
    pub fn from_records(records: Vec<TeamRecord>) -> Result<Self, RosterError> {
        let teams = validation::validate(records)?;
        Ok(Self { teams })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(id.index())
    }

    pub fn find(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn region(&self, region: Region) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(move |t| t.region == region)
    }

    /// Deep copy for one run
    pub fn field(&self) -> Field {
        Field {
            teams: self.teams.clone(),
        }
    }
}

/// A run's private, mutable copy of every team.
#[derive(Debug, Clone)]
pub struct Field {
    teams: Vec<Team>,
}

impl Field {
    pub fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    pub fn team_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.index()]
    }

    pub fn region_teams(&self, region: Region) -> impl Iterator<Item = &Team> {
        self.teams.iter().filter(move |t| t.region == region)
    }

    /// Mutable access to two distinct teams at once.
    ///
    /// # Panics
    /// If `a == b`.
    pub fn pair_mut(&mut self, a: TeamId, b: TeamId) -> (&mut Team, &mut Team) {
        let (i, j) = (a.index(), b.index());
        assert_ne!(i, j, "a team cannot play itself");
        if i < j {
            let (lo, hi) = self.teams.split_at_mut(j);
            (&mut lo[i], &mut hi[0])
        } else {
            let (lo, hi) = self.teams.split_at_mut(i);
            (&mut hi[0], &mut lo[j])
        }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn into_teams(self) -> Vec<Team> {
        self.teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tiered_roster;

    #[test]
    fn test_field_is_independent_copy() {
        let roster = tiered_roster();
        let mut field = roster.field();
        field.team_mut(TeamId(0)).rating += 100.0;
        assert_eq!(roster.get(TeamId(0)).map(|t| t.rating), Some(1800.0));
        assert_eq!(field.team(TeamId(0)).rating, 1900.0);
    }

    #[test]
    fn test_pair_mut_either_order() {
        let roster = tiered_roster();
        let mut field = roster.field();
        {
            let (a, b) = field.pair_mut(TeamId(5), TeamId(2));
            assert_eq!((a.id, b.id), (TeamId(5), TeamId(2)));
            a.rating = 1.0;
            b.rating = 2.0;
        }
        assert_eq!(field.team(TeamId(5)).rating, 1.0);
        assert_eq!(field.team(TeamId(2)).rating, 2.0);
    }

    #[test]
    fn test_region_has_sixteen_teams() {
        let roster = tiered_roster();
        for region in Region::ALL {
            assert_eq!(roster.region(region).count(), 16);
        }
    }
}
