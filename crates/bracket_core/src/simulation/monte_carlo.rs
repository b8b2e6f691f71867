//! Monte Carlo aggregation
//!
//! Runs the tournament simulator many times, each trial on its own roster copy
//! with its own random stream, and folds the games into per-team, per-round
//! win counts. Trials share nothing mutable, so the parallel path is a plain
//! rayon fold/reduce over trial indices and gives the same tallies as the
//! sequential path for the same base seed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::tournament::run_single;
use crate::config::SimulationConfig;
use crate::error::{Result, SimulationError};
use crate::models::{Region, Roster, Round, TeamId, TournamentResult};

const STAGES: usize = Round::ALL.len();

/// Independent random stream for one trial.
///
/// Every trial shares the base seed but reads a different ChaCha stream, so
/// trial `i` draws the same numbers no matter which thread runs it.
pub fn trial_rng(base_seed: u64, trial: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(base_seed);
    rng.set_stream(trial);
    rng
}

/// Raw per-team win counts, indexed by `TeamId` then `Round::index()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    counts: Vec<[u64; STAGES]>,
    trials: u64,
}

impl Tally {
    pub fn new(team_count: usize) -> Self {
        Self {
            counts: vec![[0; STAGES]; team_count],
            trials: 0,
        }
    }

    /// Fold one finished tournament in. Completes a trial.
    pub fn record(&mut self, result: &TournamentResult) {
        for game in result.games() {
            self.counts[game.winner.index()][game.round.index()] += 1;
        }
        self.trials += 1;
    }

    pub fn merge(mut self, other: Tally) -> Tally {
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            for (a, b) in mine.iter_mut().zip(theirs) {
                *a += b;
            }
        }
        self.trials += other.trials;
        self
    }

    pub fn from_results<'a, I>(team_count: usize, results: I) -> Self
    where
        I: IntoIterator<Item = &'a TournamentResult>,
    {
        let mut tally = Self::new(team_count);
        for result in results {
            tally.record(result);
        }
        tally
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn counts(&self, team: TeamId) -> [u64; STAGES] {
        self.counts[team.index()]
    }

    /// Sum of a round's counts over all teams. Exact; equals
    /// `trials * games_in_tournament(round)`.
    pub fn round_total(&self, round: Round) -> u64 {
        self.counts.iter().map(|c| c[round.index()]).sum()
    }
}

/// One team's advancement probabilities.
///
/// `probabilities[r]` is the fraction of trials in which the team won its game
/// in `Round::ALL[r]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityRow {
    pub team: TeamId,
    pub name: String,
    pub seed: u8,
    pub region: Region,
    pub probabilities: [f64; STAGES],
}

impl ProbabilityRow {
    pub fn probability(&self, round: Round) -> f64 {
        self.probabilities[round.index()]
    }

    pub fn championship(&self) -> f64 {
        self.probability(Round::Championship)
    }
}

/// Probability rows sorted by descending championship probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    pub trials: u64,
    pub precision: u32,
    pub rows: Vec<ProbabilityRow>,
}

impl ProbabilityTable {
    pub fn from_tally(roster: &Roster, tally: &Tally, precision: u32) -> Result<Self> {
        if tally.trials == 0 {
            return Err(SimulationError::NoTrials);
        }
        let n = tally.trials as f64;

        let mut rows: Vec<ProbabilityRow> = roster
            .teams()
            .iter()
            .map(|team| {
                let counts = tally.counts(team.id);
                ProbabilityRow {
                    team: team.id,
                    name: team.name.clone(),
                    seed: team.seed,
                    region: team.region,
                    probabilities: counts.map(|c| round_to(c as f64 / n, precision)),
                }
            })
            .collect();

        // Stable: ties keep roster order
        rows.sort_by(|a, b| b.championship().total_cmp(&a.championship()));

        Ok(Self {
            trials: tally.trials,
            precision,
            rows,
        })
    }

    pub fn from_results(
        roster: &Roster,
        results: &[TournamentResult],
        precision: u32,
    ) -> Result<Self> {
        let tally = Tally::from_results(roster.len(), results);
        Self::from_tally(roster, &tally, precision)
    }

    pub fn row(&self, name: &str) -> Option<&ProbabilityRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Sum of a column after rounding
    pub fn column_sum(&self, round: Round) -> f64 {
        self.rows.iter().map(|r| r.probability(round)).sum()
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Drives many independent trials over a shared, read-only roster.
pub struct MonteCarlo<'a> {
    roster: &'a Roster,
    config: SimulationConfig,
    base_seed: u64,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> MonteCarlo<'a> {
    pub fn new(roster: &'a Roster, config: SimulationConfig) -> Self {
        let base_seed = config.seed.unwrap_or_else(rand::random);
        Self {
            roster,
            config,
            base_seed,
            cancel: None,
        }
    }

    /// Stop at the next trial boundary once `flag` is set. Completed trials
    /// are kept.
    pub fn with_cancel_flag(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulate trial `trial` on a fresh copy of the roster.
    pub fn simulate_trial(&self, trial: u64) -> TournamentResult {
        run_single(self.roster, &mut trial_rng(self.base_seed, trial))
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    pub fn tally(&self) -> Result<Tally> {
        self.tally_until(|_| self.is_cancelled())
    }

    /// Like `tally`, but `stop(trial)` is asked before each trial starts.
    pub(crate) fn tally_until<F>(&self, stop: F) -> Result<Tally>
    where
        F: Fn(u64) -> bool + Sync,
    {
        self.config.validate()?;
        let requested = self.config.trials;
        let team_count = self.roster.len();
        let started = Instant::now();

        info!(
            trials = requested,
            seed = self.base_seed,
            parallel = self.config.parallel,
            "starting Monte Carlo run"
        );

        let tally = if self.config.parallel {
            (0..requested)
                .into_par_iter()
                .fold(
                    || Tally::new(team_count),
                    |mut tally, trial| {
                        if !stop(trial) {
                            tally.record(&self.simulate_trial(trial));
                        }
                        tally
                    },
                )
                .reduce(|| Tally::new(team_count), Tally::merge)
        } else {
            let mut tally = Tally::new(team_count);
            for trial in 0..requested {
                if stop(trial) {
                    break;
                }
                tally.record(&self.simulate_trial(trial));
            }
            tally
        };

        if tally.trials() < requested {
            warn!(
                completed = tally.trials(),
                requested,
                "Monte Carlo run cancelled"
            );
            if tally.trials() == 0 {
                return Err(SimulationError::Cancelled);
            }
        }

        info!(
            completed = tally.trials(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Monte Carlo run finished"
        );
        Ok(tally)
    }

    pub fn run(&self) -> Result<ProbabilityTable> {
        let tally = self.tally()?;
        ProbabilityTable::from_tally(self.roster, &tally, self.config.precision)
    }
}

/// Keep every bracket instead of only the tallies.
pub fn simulate_trials(roster: &Roster, trials: u64, base_seed: u64) -> Vec<TournamentResult> {
    (0..trials)
        .map(|trial| run_single(roster, &mut trial_rng(base_seed, trial)))
        .collect()
}
