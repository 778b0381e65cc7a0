//! Param-table assembly and JSON serialization.
//!
//! The output consumed by the downstream ensemble-job-creation tool is a
//! JSON array of parameter-set records. The first record is always the
//! unmodified default set (the baseline/control ensemble member), followed
//! by one record per candidate in input order.

use pft_expand_core::{DefaultParameterSet, ExpandedParameterSet};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Error type for param-table writing failures.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to create output file '{path}': {source}")]
    Create {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize param table: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Failed to write param table: {0}")]
    Write(#[from] std::io::Error),
}

/// Assemble the output records: the defaults first, then the expanded
/// candidate sets in input order.
pub fn build_records(
    defaults: &DefaultParameterSet,
    expanded: Vec<ExpandedParameterSet>,
) -> Vec<ExpandedParameterSet> {
    let mut records = Vec::with_capacity(expanded.len() + 1);
    records.push(defaults.iter().collect());
    records.extend(expanded);
    records
}

/// Write the records to a pretty-printed JSON file.
pub fn write_param_table(path: &Path, records: &[ExpandedParameterSet]) -> Result<(), TableError> {
    let file = File::create(path).map_err(|source| TableError::Create {
        path: path.display().to_string(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pft_expand_core::{expand, ParameterName, ReferenceValueInput};

    #[test]
    fn test_baseline_record_comes_first() {
        let defaults = DefaultParameterSet::acang();
        let candidate = expand(
            &ReferenceValueInput::from_iter([("ALPHA".to_string(), 0.10)]),
            &defaults,
        );

        let records = build_records(&defaults, vec![candidate]);

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0][&ParameterName::Alpha],
            [0.08, 0.08, 0.08, 0.05, 0.08],
            "first record must be the unmodified defaults"
        );
        assert_eq!(records[1][&ParameterName::Alpha], [0.10, 0.10, 0.10, 0.07, 0.10]);
    }

    #[test]
    fn test_records_serialize_as_keyed_objects() {
        let defaults = DefaultParameterSet::acang();
        let records = build_records(&defaults, Vec::new());

        let json = serde_json::to_value(&records).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 1);

        let baseline = array[0].as_object().unwrap();
        assert_eq!(baseline.len(), 9);
        assert_eq!(
            baseline["TUPP"],
            serde_json::json!([36.0, 31.0, 36.0, 45.0, 36.0])
        );
    }
}
