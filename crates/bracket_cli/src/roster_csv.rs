//! Roster CSV loader
//!
//! Expected header (column order free, extra columns ignored):
//! `team, elo, seed, region`
//!
//! Rows with a blank or unparsable `elo`/`seed`, a blank `region`, or a blank
//! team name are skipped with a warning. The surviving rows go through roster
//! validation, so the 64 / 4 x 16 shape is still enforced.

use anyhow::{bail, Context, Result};
use bracket_core::{Roster, TeamRecord};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::warn;

pub const REQUIRED_COLUMNS: [&str; 4] = ["team", "elo", "seed", "region"];

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub skipped: u32,
}

#[derive(Debug, Deserialize)]
struct RawRow {
    team: Option<String>,
    elo: Option<String>,
    seed: Option<String>,
    region: Option<String>,
}

impl RawRow {
    fn into_record(self) -> std::result::Result<TeamRecord, String> {
        let name = non_blank(self.team).ok_or("missing team name")?;
        let elo = non_blank(self.elo).ok_or("missing elo")?;
        let seed = non_blank(self.seed).ok_or("missing seed")?;
        let region = non_blank(self.region).ok_or("missing region")?;

        let rating: f64 = elo
            .parse()
            .map_err(|_| format!("invalid elo value '{}'", elo))?;
        let seed: u8 = seed
            .parse()
            .map_err(|_| format!("invalid seed value '{}'", seed))?;

        Ok(TeamRecord {
            name,
            rating,
            seed,
            region,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse records from any reader; validation is left to the caller.
pub fn parse_records<R: Read>(input: R) -> Result<(Vec<TeamRecord>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV header is missing required column '{}'", column);
        }
    }

    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for (i, row) in reader.deserialize::<RawRow>().enumerate() {
        stats.total_rows += 1;
        // Header is line 1
        let line = i + 2;
        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                stats.skipped += 1;
                warn!(line, error = %e, "skipping unreadable row");
                continue;
            }
        };
        match raw.into_record() {
            Ok(record) => {
                stats.parsed += 1;
                records.push(record);
            }
            Err(reason) => {
                stats.skipped += 1;
                warn!(line, %reason, "skipping row");
            }
        }
    }

    Ok((records, stats))
}

pub fn read_records(path: &Path) -> Result<(Vec<TeamRecord>, ParseStats)> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open teams CSV: {}", path.display()))?;
    parse_records(file).with_context(|| format!("Failed to parse teams CSV: {}", path.display()))
}

/// Load and validate a roster.
pub fn load_roster(path: &Path) -> Result<(Roster, ParseStats)> {
    let (records, stats) = read_records(path)?;
    let roster = Roster::from_records(records)
        .with_context(|| format!("Invalid roster in {}", path.display()))?;
    Ok((roster, stats))
}
