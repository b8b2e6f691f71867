//! Bracket simulator CLI
//!
//! `bracket simulate` runs one bracket and, optionally, a Monte Carlo batch.
//! `bracket seeding` reports teams whose rating disagrees with their seed.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use bracket_core::{run_single, trial_rng, MonteCarlo, SimulationConfig};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "bracket")]
#[command(about = "Elo-driven 64-team bracket simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate one bracket, then optionally many for probabilities
    Simulate {
        /// Teams CSV (team,elo,seed,region)
        #[arg(long)]
        teams: PathBuf,

        /// Monte Carlo trials (0 = single bracket only)
        #[arg(long)]
        trials: Option<u64>,

        /// Base random seed
        #[arg(long)]
        seed: Option<u64>,

        /// SimulationConfig JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Bracket text output path
        #[arg(long)]
        out_bracket: Option<PathBuf>,

        /// Probabilities CSV output path
        #[arg(long)]
        out_probs: Option<PathBuf>,

        /// Also dump the single bracket as JSON
        #[arg(long)]
        out_json: Option<PathBuf>,

        /// Run trials on one thread
        #[arg(long, default_value = "false")]
        sequential: bool,
    },

    /// Seed-vs-rating deviation report
    Seeding {
        /// Teams CSV (team,elo,seed,region)
        #[arg(long)]
        teams: PathBuf,

        /// Teams listed per section
        #[arg(long, default_value_t = bracket_cli::seeding_report::DEFAULT_TOP)]
        top: usize,

        /// Report output path
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            teams,
            trials,
            seed,
            config,
            out_bracket,
            out_probs,
            out_json,
            sequential,
        } => {
            let mut config = match config {
                Some(path) => SimulationConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?,
                None => SimulationConfig::default().with_trials(0),
            };
            if let Some(trials) = trials {
                config.trials = trials;
            }
            if let Some(seed) = seed {
                config.seed = Some(seed);
            }
            if sequential {
                config.parallel = false;
            }
            let base_seed = *config.seed.get_or_insert_with(rand::random);

            simulate(
                &teams,
                config,
                base_seed,
                out_bracket,
                out_probs,
                out_json,
            )?;
        }

        Commands::Seeding { teams, top, out } => {
            println!("Loading teams from {}...", teams.display());
            let (report, stats) = bracket_cli::analyze_file(&teams)?;
            println!(
                "  {} rows read, {} used, {} skipped.\n",
                stats.total_rows, stats.parsed, stats.skipped
            );

            print!("{}", bracket_cli::format_report(&report, top));

            let path = out.unwrap_or_else(bracket_cli::default_seeding_path);
            bracket_cli::write_report(&report, top, &path)?;
            println!("\n  Report saved → {}", path.display());
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn simulate(
    teams: &std::path::Path,
    config: SimulationConfig,
    base_seed: u64,
    out_bracket: Option<PathBuf>,
    out_probs: Option<PathBuf>,
    out_json: Option<PathBuf>,
) -> Result<()> {
    println!("Loading teams from {}...", teams.display());
    let (roster, stats) = bracket_cli::load_roster(teams)?;
    println!(
        "  {} teams loaded across 4 regions ({} rows skipped).",
        roster.len(),
        stats.skipped
    );
    println!("  Seed: {}", base_seed);

    println!("\nRunning single simulation...");
    // Stream u64::MAX stays clear of every Monte Carlo trial index
    let result = run_single(&roster, &mut trial_rng(base_seed, u64::MAX));
    print!("\n{}", bracket_cli::format_summary(&result));

    let bracket_path = out_bracket.unwrap_or_else(bracket_cli::default_bracket_path);
    bracket_cli::write_bracket(&result, &bracket_path)?;
    println!("  Bracket saved → {}", bracket_path.display());

    if let Some(json_path) = out_json {
        let json = result.to_json().context("Failed to serialize bracket")?;
        std::fs::write(&json_path, json)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("  Bracket JSON saved → {}", json_path.display());
    }

    if config.trials > 0 {
        println!("\nRunning {} trials...", config.trials);
        let table = MonteCarlo::new(&roster, config).run()?;

        let probs_path = out_probs.unwrap_or_else(bracket_cli::default_probs_path);
        bracket_cli::save_probabilities(&table, &probs_path)?;
        println!("  Probabilities saved → {}", probs_path.display());

        println!("\nTop 10 championship probabilities:");
        print!("{}", bracket_cli::format_top(&table, 10));
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("bracket was built without the 'cli' feature.");
    std::process::exit(1);
}
