//! CSV ingestion of Broadleaf candidate values.
//!
//! Expected input format:
//!
//! ```text
//! candidate_id,ALPHA,G_AREA,F0,LAI_MIN,NL0,R_GROW,TLOW,V_CRIT_ALPHA
//! candidate_1,0.10,0.005,0.88,3.5,0.055,0.20,2.5,0.5
//! candidate_2,0.08,0.004,0.90,4.0,0.050,0.25,0.0,0.343
//! ```
//!
//! Header names are normalized before they reach the core: trimmed,
//! upper-cased, and run through a synonym map (V_CRIT and VCRIT both mean
//! V_CRIT_ALPHA). Empty cells mean "not supplied by this candidate";
//! unparseable cells are dropped with a warning and ingestion continues.

use log::{info, warn};
use pft_expand_core::Candidate;
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Error type for CSV ingestion failures.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to open CSV file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read CSV record: {0}")]
    Read(#[from] csv::Error),
    #[error("No valid candidates found in CSV file")]
    NoCandidates,
}

/// CSV column name synonyms, applied after trimming and upper-casing.
const SYNONYMS: &[(&str, &str)] = &[("V_CRIT", "V_CRIT_ALPHA"), ("VCRIT", "V_CRIT_ALPHA")];

/// Normalize a CSV header name to the internal parameter key.
pub fn normalize_parameter_name(raw: &str) -> String {
    let upper = raw.trim().to_ascii_uppercase();
    for (from, to) in SYNONYMS {
        if upper == *from {
            return (*to).to_string();
        }
    }
    upper
}

/// Column names treated as the candidate identifier rather than a parameter.
fn is_id_column(name: &str) -> bool {
    let name = name.trim().to_ascii_lowercase();
    name == "candidate_id" || name == "id"
}

/// Read Broadleaf candidates from a CSV file.
///
/// Rows contributing no usable value are dropped. Returns an error if the
/// file cannot be read or if it yields zero candidates (a batch with no
/// candidates is a hard stop for the surrounding tooling).
pub fn read_candidates(path: &Path) -> Result<Vec<Candidate>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.display().to_string(),
        source,
    })?;
    candidates_from_reader(file)
}

/// Read Broadleaf candidates from any CSV source.
pub fn candidates_from_reader<R: Read>(source: R) -> Result<Vec<Candidate>, IngestError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers = reader.headers()?.clone();

    // Each distinct synonym mapping is reported once, not per row.
    let mut logged_mappings: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for record in reader.records() {
        let record = record?;
        let mut candidate = Candidate::default();

        for (header, cell) in headers.iter().zip(record.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }

            if is_id_column(header) {
                candidate.id = Some(cell.to_string());
                continue;
            }

            let key = normalize_parameter_name(header);
            if key != header.trim().to_ascii_uppercase()
                && logged_mappings.insert(header.to_string())
            {
                info!("mapping column '{}' to '{}'", header.trim(), key);
            }

            match cell.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    candidate.values.insert(key, value);
                }
                Ok(value) => {
                    warn!("ignoring non-finite value {} for '{}'", value, key);
                }
                Err(_) => {
                    warn!("could not convert '{}' to a number for '{}'", cell, key);
                }
            }
        }

        if !candidate.values.is_empty() {
            candidates.push(candidate);
        }
    }

    if candidates.is_empty() {
        return Err(IngestError::NoCandidates);
    }
    Ok(candidates)
}
