//! Domain types shared by the simulator and its collaborators

pub mod game;
pub mod result;
pub mod roster;
pub mod team;

pub use game::{Game, Round};
pub use result::{RegionResult, TournamentResult};
pub use roster::{Field, Roster};
pub use team::{Region, Team, TeamId, TeamRecord};
