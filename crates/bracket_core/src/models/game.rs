//! Rounds and resolved games

use serde::{Deserialize, Serialize};
use std::fmt;

use super::team::TeamId;

/// One layer of the single-elimination reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Round {
    RoundOf64,
    RoundOf32,
    Sweet16,
    Elite8,
    FinalFour,
    Championship,
}

impl Round {
    pub const ALL: [Round; 6] = [
        Round::RoundOf64,
        Round::RoundOf32,
        Round::Sweet16,
        Round::Elite8,
        Round::FinalFour,
        Round::Championship,
    ];

    /// Rounds played inside a single region
    pub const REGIONAL: [Round; 4] = [
        Round::RoundOf64,
        Round::RoundOf32,
        Round::Sweet16,
        Round::Elite8,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Option<Round> {
        Round::ALL.get(self.index() + 1).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Round::RoundOf64 => "Round of 64",
            Round::RoundOf32 => "Round of 32",
            Round::Sweet16 => "Sweet 16",
            Round::Elite8 => "Elite 8",
            Round::FinalFour => "Final Four",
            Round::Championship => "Championship",
        }
    }

    /// Probability-report column name for "won its game in this round"
    pub fn column_key(self) -> &'static str {
        match self {
            Round::RoundOf64 => "prb_win_rd64",
            Round::RoundOf32 => "prb_win_rd32",
            Round::Sweet16 => "prb_win_s16",
            Round::Elite8 => "prb_win_e8",
            Round::FinalFour => "prb_win_f4",
            Round::Championship => "prb_win_champ",
        }
    }

    /// Games played in this round across the whole tournament
    pub fn games_in_tournament(self) -> usize {
        32 >> self.index()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved game. `winner_probability` is the winner's pre-game chance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub round: Round,
    pub winner: TeamId,
    pub loser: TeamId,
    pub winner_probability: f64,
}

impl Game {
    /// A win by the side the rating model did not favour
    pub fn is_upset(&self) -> bool {
        self.winner_probability < 0.5
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.winner == team || self.loser == team
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_sequence() {
        assert_eq!(Round::RoundOf64.next(), Some(Round::RoundOf32));
        assert_eq!(Round::Elite8.next(), Some(Round::FinalFour));
        assert_eq!(Round::Championship.next(), None);
    }

    #[test]
    fn test_games_per_round_total_63() {
        let counts: Vec<usize> = Round::ALL.iter().map(|r| r.games_in_tournament()).collect();
        assert_eq!(counts, vec![32, 16, 8, 4, 2, 1]);
        assert_eq!(counts.iter().sum::<usize>(), 63);
    }
}
