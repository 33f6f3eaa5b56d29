use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

mod catalog;
mod generate;
mod models;

#[derive(Parser)]
#[command(name = "raid-tracker-fixtures")]
#[command(about = "Generate fake player stats for the raid tracker demo", long_about = None)]
struct Cli {
    /// Seed for reproducible output; omit for a fresh dataset each run
    #[arg(long)]
    seed: Option<u64>,
    /// Directory the two JSON files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let profile = generate::player_profile(&mut rng);
    let clears = generate::clears_index(&mut rng);

    write_json(&cli.out_dir.join("player-data.json"), &profile)?;
    write_json(&cli.out_dir.join("player-clears-data.json"), &clears)?;

    Ok(())
}

fn write_json<T: Serialize>(path: &Path, document: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Fixture written to {}.", path.display());
    Ok(())
}
