use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

use tourney_scorecards::cli::Args;
use tourney_scorecards::config::Settings;
use tourney_scorecards::parser::parse_tournament;
use tourney_scorecards::render_scorecards;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read input file
    let content = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;

    let data = parse_tournament(&content).with_context(|| "Failed to parse tournament data")?;

    log::info!(
        "Loaded {} with {} divisions",
        data.meta.metadata.name,
        data.t.divisions.len()
    );

    let settings = Settings::from_args(&args);

    let documents =
        render_scorecards(&data, &settings).with_context(|| "Failed to generate scorecards")?;

    fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            args.output.display()
        )
    })?;

    // Write output
    for doc in &documents {
        let output_path = args.output_path(&doc.file_name);
        fs::write(&output_path, &doc.output)
            .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;
        println!("Successfully wrote PDF to {}", output_path.display());
    }

    Ok(())
}
