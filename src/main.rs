//! Broadleaf-to-PFT ensemble param-table generator
//!
//! A CLI tool that reads a CSV of Broadleaf parameter candidates, expands
//! each candidate into a full five-PFT parameter set, and writes a JSON
//! param table consumable by the downstream ensemble-job-creation tooling.
//!
//! # Usage
//!
//! ```bash
//! pft-expand --csv-file candidates.csv --ensemble-name xqabc
//! ```

mod ingest;
mod param_table;

use clap::Parser;
use log::info;
use pft_expand_core::DefaultParameterSet;
use std::fs;
use std::path::PathBuf;

/// Convert a CSV of Broadleaf parameter candidates to a param-table JSON
/// for ensemble generation
#[derive(Parser, Debug)]
#[command(name = "pft-expand")]
#[command(about = "Expand Broadleaf candidate values into a full PFT ensemble param table")]
struct Args {
    /// Path to the CSV file with Broadleaf parameter candidates
    #[arg(long)]
    csv_file: PathBuf,

    /// Ensemble experiment name (e.g. xqabc)
    #[arg(long)]
    ensemble_name: String,

    /// Path to the output JSON file (default: param_tables/<ensemble_name>.json)
    #[arg(long)]
    output_file: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let output_file = match &args.output_file {
        Some(path) => path.clone(),
        None => {
            let output_dir = PathBuf::from("param_tables");
            if let Err(e) = fs::create_dir_all(&output_dir) {
                eprintln!("Failed to create output directory: {}", e);
                std::process::exit(1);
            }
            output_dir.join(format!("{}.json", args.ensemble_name))
        }
    };

    println!("Reading Broadleaf candidates from: {}", args.csv_file.display());
    let candidates = match ingest::read_candidates(&args.csv_file) {
        Ok(candidates) => candidates,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };
    println!("Found {} candidates", candidates.len());

    let defaults = DefaultParameterSet::acang();
    let mut expanded_sets = Vec::with_capacity(candidates.len());
    for (i, candidate) in candidates.iter().enumerate() {
        info!(
            "processing candidate {}/{} (id: {})",
            i + 1,
            candidates.len(),
            candidate.id.as_deref().unwrap_or("-")
        );
        expanded_sets.push(candidate.expand(&defaults));
    }

    let records = param_table::build_records(&defaults, expanded_sets);
    println!(
        "Writing {} parameter sets to: {}",
        records.len(),
        output_file.display()
    );
    if let Err(e) = param_table::write_param_table(&output_file, &records) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }

    println!(
        "Created param table for ensemble '{}' with {} candidates (plus 1 default set = {} ensemble members)",
        args.ensemble_name,
        candidates.len(),
        records.len()
    );
}
