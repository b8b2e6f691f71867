//! Plain-text bracket rendering

use anyhow::{Context, Result};
use bracket_core::{Game, Region, Round, TeamId, TournamentResult};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// `bracket_<YYYY-MM-DD>.txt` in the working directory
pub fn default_bracket_path() -> PathBuf {
    PathBuf::from(format!(
        "bracket_{}.txt",
        chrono::Local::now().date_naive().format("%Y-%m-%d")
    ))
}

/// Seeds as entered into the bracket, keyed by team.
pub struct SeedLookup {
    seeds: HashMap<TeamId, u8>,
}

impl SeedLookup {
    pub fn from_result(result: &TournamentResult) -> Self {
        let mut seeds = HashMap::with_capacity(64);
        for region in &result.regions {
            for game in region.games(Round::RoundOf64) {
                for id in [game.winner, game.loser] {
                    seeds.insert(id, result.team(id).seed);
                }
            }
        }
        Self { seeds }
    }

    pub fn seed(&self, result: &TournamentResult, id: TeamId) -> u8 {
        self.seeds
            .get(&id)
            .copied()
            .unwrap_or_else(|| result.team(id).seed)
    }
}

fn game_line(result: &TournamentResult, seeds: &SeedLookup, game: &Game) -> String {
    format!(
        "({}) {} def. ({}) {}",
        seeds.seed(result, game.winner),
        result.team(game.winner).name,
        seeds.seed(result, game.loser),
        result.team(game.loser).name
    )
}

pub fn render_bracket(result: &TournamentResult) -> String {
    let seeds = SeedLookup::from_result(result);
    let mut out = String::new();

    for region in Region::ALL {
        let Some(region_result) = result.region(region) else {
            continue;
        };
        let _ = writeln!(out, "=== {} REGION ===", region.as_str().to_uppercase());
        for round in Round::REGIONAL {
            let _ = writeln!(out, "{}:", round.label());
            for game in region_result.games(round) {
                let _ = writeln!(out, "  {}", game_line(result, &seeds, game));
            }
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "=== FINAL FOUR ===");
    for game in &result.semifinals {
        let _ = writeln!(out, "  {}", game_line(result, &seeds, game));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "=== CHAMPIONSHIP ===");
    let _ = writeln!(out, "  {}", game_line(result, &seeds, &result.championship));
    let _ = writeln!(out);

    let champion = result.champion_team();
    let _ = writeln!(
        out,
        "Champion: ({}) {}",
        seeds.seed(result, champion.id),
        champion.name
    );
    out
}

pub fn write_bracket(result: &TournamentResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, render_bracket(result))
        .with_context(|| format!("Failed to write bracket to {}", path.display()))
}

/// Short console summary: Final Four, title game and champion.
pub fn format_summary(result: &TournamentResult) -> String {
    let seeds = SeedLookup::from_result(result);
    let mut out = String::new();
    let _ = writeln!(out, "  Final Four:");
    for game in &result.semifinals {
        let _ = writeln!(out, "    {}", game_line(result, &seeds, game));
    }
    let _ = writeln!(out, "\n  Championship:");
    let _ = writeln!(out, "    {}", game_line(result, &seeds, &result.championship));
    let champion = result.champion_team();
    let _ = writeln!(
        out,
        "\n  Champion: ({}) {}",
        seeds.seed(result, champion.id),
        champion.name
    );
    let _ = writeln!(
        out,
        "  Upsets: {} of {} games",
        result.upset_count(),
        result.games().count()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_core::{run_single, trial_rng, Roster, TeamRecord};
    use tempfile::tempdir;

    fn result() -> TournamentResult {
        let records = Region::ALL
            .into_iter()
            .flat_map(|region| {
                (1..=16u8).map(move |seed| {
                    TeamRecord::new(
                        format!("{region}_S{seed}"),
                        1820.0 - 20.0 * seed as f64,
                        seed,
                        region.as_str(),
                    )
                })
            })
            .collect();
        let roster = Roster::from_records(records).unwrap();
        run_single(&roster, &mut trial_rng(3, 0))
    }

    #[test]
    fn test_lookup_covers_every_team() {
        let result = result();
        let seeds = SeedLookup::from_result(&result);
        assert_eq!(seeds.seeds.len(), 64);
        for team in &result.teams {
            assert_eq!(seeds.seed(&result, team.id), team.seed);
        }
    }

    #[test]
    fn test_bracket_lists_all_games() {
        let result = result();
        let text = render_bracket(&result);
        assert_eq!(text.matches(" def. ").count(), 63);
        for heading in ["EAST REGION", "WEST REGION", "SOUTH REGION", "MIDWEST REGION"] {
            assert!(text.contains(heading), "missing {heading}");
        }
        assert!(text.contains("=== FINAL FOUR ==="));
        assert!(text.contains("=== CHAMPIONSHIP ==="));
        assert!(text
            .lines()
            .last()
            .is_some_and(|l| l.starts_with("Champion: (") && l.ends_with(&result.champion_team().name)));
    }

    #[test]
    fn test_first_round_line_format() {
        let text = render_bracket(&result());
        assert!(
            text.contains("(1) East_S1 def. (16) East_S16")
                || text.contains("(16) East_S16 def. (1) East_S1")
        );
    }

    #[test]
    fn test_summary_names_final_four() {
        let result = result();
        let summary = format_summary(&result);
        for region in &result.regions {
            assert!(summary.contains(&result.team(region.champion).name));
        }
        assert_eq!(summary.matches(" def. ").count(), 3);
        assert!(summary.contains("Champion: ("));
    }

    #[test]
    fn test_summary_counts_upsets() {
        let result = result();
        let upsets = result
            .games()
            .filter(|g| g.winner_probability < 0.5)
            .count();
        let summary = format_summary(&result);
        assert!(summary.contains(&format!("Upsets: {upsets} of 63 games")), "{summary}");
    }

    #[test]
    fn test_write_bracket_creates_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bracket.txt");
        let result = result();
        write_bracket(&result, &path)?;
        assert_eq!(fs::read_to_string(&path)?, render_bracket(&result));
        Ok(())
    }
}
