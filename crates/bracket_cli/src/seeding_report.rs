//! Seeding deviation report
//!
//! Works on loosely parsed rows: the roster shape is not enforced, so a
//! partial field (e.g. before the bracket is final) can still be analysed.

use anyhow::{bail, Context, Result};
use bracket_core::SeedingReport;
use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::roster_csv::ParseStats;

pub const DEFAULT_TOP: usize = 4;

/// Region is not needed for seed averages, so it is not required.
pub const SEEDING_COLUMNS: [&str; 3] = ["team", "elo", "seed"];

/// `seeding_analysis_<YYYY-MM-DD>.txt` in the working directory
pub fn default_seeding_path() -> PathBuf {
    PathBuf::from(format!(
        "seeding_analysis_{}.txt",
        chrono::Local::now().date_naive().format("%Y-%m-%d")
    ))
}

#[derive(Debug, Deserialize)]
struct SeededRow {
    team: Option<String>,
    elo: Option<String>,
    seed: Option<String>,
}

impl SeededRow {
    fn into_entry(self) -> std::result::Result<(String, u8, f64), String> {
        let name = self
            .team
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or("missing team name")?;
        let elo = self.elo.unwrap_or_default();
        let seed = self.seed.unwrap_or_default();

        let rating: f64 = elo
            .trim()
            .parse()
            .map_err(|_| format!("invalid elo value '{}'", elo))?;
        if !rating.is_finite() {
            return Err(format!("non-finite elo value '{}'", elo));
        }
        let seed: u8 = seed
            .trim()
            .parse()
            .map_err(|_| format!("invalid seed value '{}'", seed))?;

        Ok((name, seed, rating))
    }
}

/// Read `(team, seed, elo)` entries, skipping rows with a bad seed or elo.
pub fn parse_seeded_entries<R: Read>(input: R) -> Result<(Vec<(String, u8, f64)>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers().context("Failed to read CSV header")?.clone();
    for column in SEEDING_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("CSV header is missing required column '{}'", column);
        }
    }

    let mut entries = Vec::new();
    let mut stats = ParseStats::default();

    for (i, row) in reader.deserialize::<SeededRow>().enumerate() {
        stats.total_rows += 1;
        let line = i + 2;
        match row.map_err(|e| e.to_string()).and_then(SeededRow::into_entry) {
            Ok(entry) => {
                stats.parsed += 1;
                entries.push(entry);
            }
            Err(reason) => {
                stats.skipped += 1;
                warn!(line, %reason, "skipping row");
            }
        }
    }

    Ok((entries, stats))
}

/// Build the report from a CSV. The roster shape is not enforced.
pub fn analyze_file(path: &Path) -> Result<(SeedingReport, ParseStats)> {
    let file = fs::File::open(path)
        .with_context(|| format!("Failed to open teams CSV: {}", path.display()))?;
    let (entries, stats) = parse_seeded_entries(file)
        .with_context(|| format!("Failed to parse teams CSV: {}", path.display()))?;
    Ok((SeedingReport::from_entries(entries), stats))
}

pub fn format_report(report: &SeedingReport, top: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "SEED AVERAGES");
    let _ = writeln!(out, "  {:<6} {:>10} {:>6}", "Seed", "Mean Elo", "Teams");
    for avg in &report.seed_averages {
        let _ = writeln!(
            out,
            "  {:<6} {:>10.1} {:>6}",
            avg.seed, avg.mean_rating, avg.count
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "TOP {} UNDERSEEDED", top);
    for d in report.underseeded(top) {
        let _ = writeln!(
            out,
            "  {:<25} seed {:>2}  elo {:>7.1}  seed avg {:>7.1}  {:+.1}",
            d.name, d.seed, d.rating, d.seed_mean, d.deviation
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "TOP {} OVERSEEDED", top);
    for d in report.overseeded(top) {
        let _ = writeln!(
            out,
            "  {:<25} seed {:>2}  elo {:>7.1}  seed avg {:>7.1}  {:+.1}",
            d.name, d.seed, d.rating, d.seed_mean, d.deviation
        );
    }
    out
}

pub fn write_report(report: &SeedingReport, top: usize, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, format_report(report, top))
        .with_context(|| format!("Failed to write seeding report to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    fn sample_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "team,elo,seed,region").unwrap();
        writeln!(file, "Alpha,1800,1,East").unwrap();
        writeln!(file, "Bravo,1700,1,West").unwrap();
        writeln!(file, "Charlie,1760,2,East").unwrap();
        writeln!(file, "Delta,1640,2,West").unwrap();
        writeln!(file, "Broken,n/a,3,East").unwrap();
        writeln!(file, "NoSeed,1500,,West").unwrap();
        file
    }

    #[test]
    fn test_bad_rows_skipped() -> Result<()> {
        let file = sample_csv();
        let (report, stats) = analyze_file(file.path())?;
        assert_eq!(stats.skipped, 2);
        assert_eq!(report.deviations.len(), 4);
        assert_eq!(report.seed_averages.len(), 2);
        Ok(())
    }

    #[test]
    fn test_region_column_not_required() -> Result<()> {
        let input = "team,elo,seed\nAlpha,1800,1\nBravo,1700,1\nCharlie,1650,2\n";
        let (entries, stats) = parse_seeded_entries(input.as_bytes())?;
        assert_eq!(stats.skipped, 0);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], ("Bravo".to_string(), 1, 1700.0));
        Ok(())
    }

    #[test]
    fn test_blank_region_row_kept() -> Result<()> {
        let input = "team,elo,seed,region\nAlpha,1800,1,East\nBravo,1700,1,\n";
        let (entries, stats) = parse_seeded_entries(input.as_bytes())?;
        assert_eq!(stats.skipped, 0);
        let report = SeedingReport::from_entries(entries);
        assert_eq!(report.deviations.len(), 2);
        assert_eq!(report.seed_averages[0].mean_rating, 1750.0);
        Ok(())
    }

    #[test]
    fn test_missing_elo_column_rejected() {
        let err = parse_seeded_entries("team,seed\nAlpha,1\n".as_bytes()).unwrap_err();
        assert!(err.to_string().contains("elo"));
    }

    #[test]
    fn test_report_sections_in_order() -> Result<()> {
        let file = sample_csv();
        let (report, _) = analyze_file(file.path())?;
        let text = format_report(&report, 1);

        let averages = text.find("SEED AVERAGES").unwrap_or(usize::MAX);
        let under = text.find("TOP 1 UNDERSEEDED").unwrap_or(usize::MAX);
        let over = text.find("TOP 1 OVERSEEDED").unwrap_or(usize::MAX);
        assert!(averages < under && under < over && over != usize::MAX);

        let under_section = &text[under..over];
        assert!(under_section.contains("Charlie"));
        assert!(under_section.contains("+60.0"));
        assert!(text[over..].contains("Delta"));
        Ok(())
    }

    #[test]
    fn test_write_report() -> Result<()> {
        let file = sample_csv();
        let (report, _) = analyze_file(file.path())?;
        let dir = tempdir()?;
        let path = dir.path().join("seeding.txt");
        write_report(&report, DEFAULT_TOP, &path)?;
        let text = fs::read_to_string(&path)?;
        assert!(text.contains("TOP 4 OVERSEEDED"));
        Ok(())
    }

    #[test]
    fn test_default_path_is_dated() {
        let name = default_seeding_path().to_string_lossy().into_owned();
        assert!(name.starts_with("seeding_analysis_") && name.ends_with(".txt"));
    }
}
