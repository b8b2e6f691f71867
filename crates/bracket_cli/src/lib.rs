//! # bracket_cli - File I/O and reports around `bracket_core`
//!
//! - `roster_csv`: load a `team,elo,seed,region` CSV into a validated roster
//! - `report`: probability CSV and console tables
//! - `render`: plain-text bracket for one simulated run
//! - `seeding_report`: seed-vs-rating deviation analysis

pub mod render;
pub mod report;
pub mod roster_csv;
pub mod seeding_report;

pub use render::{default_bracket_path, format_summary, render_bracket, write_bracket, SeedLookup};
pub use report::{default_probs_path, format_top, save_probabilities, write_probabilities};
pub use roster_csv::{load_roster, parse_records, read_records, ParseStats};
pub use seeding_report::{analyze_file, default_seeding_path, format_report, write_report};
