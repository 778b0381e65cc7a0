//! Expansion orchestrator
//!
//! Turns a partial reference-type input into a total parameter set covering
//! every parameter in the default table. Parameters supplied by the caller
//! are run through the rule engine; everything else is copied from the
//! defaults. One covariation rule links the temperature-threshold pair:
//! a TLOW delta also shifts TUPP by the same amount unless the caller
//! supplies TUPP explicitly.
//!
//! Unrecognized input keys are a recoverable condition: they are skipped
//! with a warning and contribute nothing to the output.

use crate::defaults::DefaultParameterSet;
use crate::parameter::ParameterName;
use crate::perturb::apply_policy;
use crate::pft::PftValues;
use indexmap::IndexMap;
use log::warn;
use serde::{Deserialize, Serialize};

/// Reference-type values supplied for one candidate, keyed by the raw
/// (already normalized) parameter key.
///
/// TLOW/TUPP values are deltas; all other values are absolute.
pub type ReferenceValueInput = IndexMap<String, f64>;

/// A total expansion result: every parameter in the default table mapped
/// to its 5-element value array.
pub type ExpandedParameterSet = IndexMap<ParameterName, PftValues>;

/// One ensemble candidate: an optional external identifier plus its
/// reference-type values. Candidates are independent of each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Candidate {
    /// External identifier, e.g. from a `candidate_id` CSV column.
    pub id: Option<String>,
    /// Reference-type parameter values for this candidate.
    pub values: ReferenceValueInput,
}

impl Candidate {
    /// Expand this candidate's values against the given defaults.
    pub fn expand(&self, defaults: &DefaultParameterSet) -> ExpandedParameterSet {
        expand(&self.values, defaults)
    }
}

/// Expand a partial reference-type input into a total parameter set.
///
/// The result contains exactly the key set of `defaults`: supplied
/// parameters expanded under their policies, the rest copied from the
/// defaults. An empty input is valid and yields the default configuration.
pub fn expand(
    reference_input: &ReferenceValueInput,
    defaults: &DefaultParameterSet,
) -> ExpandedParameterSet {
    let mut expanded = ExpandedParameterSet::new();

    // Checked up front so covariation is suppressed regardless of where
    // TUPP appears in the input relative to TLOW.
    let explicit_tupp = reference_input
        .keys()
        .any(|key| ParameterName::from_key(key) == Some(ParameterName::Tupp));

    for (key, &value) in reference_input {
        let Some(name) = ParameterName::from_key(key) else {
            warn!("parameter '{}' not found in defaults, skipping", key);
            continue;
        };
        let Some(default_values) = defaults.get(name) else {
            warn!("parameter '{}' not found in defaults, skipping", key);
            continue;
        };

        expanded.insert(name, apply_policy(&default_values, name, value));

        // Co-vary TUPP with TLOW: the same delta shifts both thresholds
        // unless TUPP was supplied explicitly.
        if name == ParameterName::Tlow && !explicit_tupp {
            if let Some(tupp_defaults) = defaults.get(ParameterName::Tupp) {
                expanded.insert(
                    ParameterName::Tupp,
                    apply_policy(&tupp_defaults, ParameterName::Tupp, value),
                );
            }
        }
    }

    // Anything not supplied stays at its default.
    for (name, values) in defaults.iter() {
        expanded.entry(name).or_insert(values);
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pft::PFT_COUNT;

    fn input(pairs: &[(&str, f64)]) -> ReferenceValueInput {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), *value))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_defaults() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&ReferenceValueInput::new(), &defaults);

        assert_eq!(result.len(), defaults.len());
        for (name, values) in defaults.iter() {
            assert_eq!(result[&name], values, "{} should stay at default", name);
        }
    }

    #[test]
    fn test_totality_for_partial_input() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&input(&[("ALPHA", 0.10)]), &defaults);

        let result_keys: Vec<_> = result.keys().copied().collect();
        let default_keys: Vec<_> = defaults.iter().map(|(name, _)| name).collect();
        for name in &default_keys {
            assert!(result_keys.contains(name), "missing {}", name);
        }
        assert_eq!(result_keys.len(), default_keys.len());
    }

    #[test]
    fn test_alpha_pro_rata_example() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&input(&[("ALPHA", 0.10)]), &defaults);
        assert_eq!(result[&ParameterName::Alpha], [0.10, 0.10, 0.10, 0.07, 0.10]);
    }

    #[test]
    fn test_lai_min_tree_only_example() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&input(&[("LAI_MIN", 3.5)]), &defaults);
        assert_eq!(result[&ParameterName::LaiMin], [3.5, 3.5, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_tlow_covaries_tupp() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&input(&[("TLOW", 2.5)]), &defaults);

        assert_eq!(result[&ParameterName::Tlow], [2.5, -2.5, 2.5, 15.5, 2.5]);
        assert_eq!(result[&ParameterName::Tupp], [38.5, 33.5, 38.5, 47.5, 38.5]);
    }

    #[test]
    fn test_explicit_tupp_suppresses_covariation() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&input(&[("TLOW", 2.5), ("TUPP", 10.0)]), &defaults);

        // TUPP shifted by its own explicit delta, not the covaried 2.5.
        assert_eq!(result[&ParameterName::Tupp], [46.0, 41.0, 46.0, 55.0, 46.0]);
    }

    #[test]
    fn test_explicit_tupp_before_tlow_still_wins() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&input(&[("TUPP", 10.0), ("TLOW", 2.5)]), &defaults);
        assert_eq!(result[&ParameterName::Tupp], [46.0, 41.0, 46.0, 55.0, 46.0]);
    }

    #[test]
    fn test_unknown_key_is_skipped() {
        let defaults = DefaultParameterSet::acang();
        let with_unknown = expand(&input(&[("FOO", 1.0)]), &defaults);
        let without = expand(&ReferenceValueInput::new(), &defaults);
        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_uniform_broadcast_through_expansion() {
        let defaults = DefaultParameterSet::acang();
        let result = expand(&input(&[("R_GROW", 0.20), ("V_CRIT_ALPHA", 0.5)]), &defaults);

        assert_eq!(result[&ParameterName::RGrow], [0.20; PFT_COUNT]);
        assert_eq!(result[&ParameterName::VCritAlpha], [0.5; PFT_COUNT]);
    }

    #[test]
    fn test_candidates_do_not_share_state() {
        let defaults = DefaultParameterSet::acang();
        let first = expand(&input(&[("ALPHA", 0.10)]), &defaults);
        let second = expand(&ReferenceValueInput::new(), &defaults);

        assert_eq!(first[&ParameterName::Alpha], [0.10, 0.10, 0.10, 0.07, 0.10]);
        assert_eq!(
            second[&ParameterName::Alpha],
            [0.08, 0.08, 0.08, 0.05, 0.08],
            "a previous candidate's expansion must not leak into the defaults"
        );
    }

    #[test]
    fn test_candidate_expand_matches_free_function() {
        let defaults = DefaultParameterSet::acang();
        let candidate = Candidate {
            id: Some("candidate_1".to_string()),
            values: input(&[("NL0", 0.055)]),
        };
        assert_eq!(candidate.expand(&defaults), expand(&candidate.values, &defaults));
    }
}
