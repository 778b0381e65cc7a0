//! Perturbation rule engine
//!
//! Transforms one default 5-element parameter array into a new array given
//! a single reference-type value and the parameter's policy. The function
//! is pure and total over recognized parameters: no I/O, no failure modes
//! for finite input.

use crate::parameter::{ParameterName, Policy};
use crate::pft::{FunctionalType, PftValues, PFT_COUNT};

/// Decimal places kept in every expanded value, so floating-point noise
/// never propagates into downstream configuration files.
const ROUND_DECIMALS: i32 = 5;

fn round_value(value: f64) -> f64 {
    let scale = 10f64.powi(ROUND_DECIMALS);
    (value * scale).round() / scale
}

/// Apply a reference-type value to a default array under the parameter's
/// perturbation policy.
///
/// For pro-rata parameters the value is an absolute target for the
/// reference type; for the temperature thresholds it is a delta; for
/// uniform-broadcast parameters it replaces every element; for LAI_MIN it
/// overwrites the tree types only.
///
/// Every returned element is rounded to 5 decimal places.
pub fn apply_policy(
    defaults: &PftValues,
    parameter: ParameterName,
    reference_value: f64,
) -> PftValues {
    debug_assert!(
        reference_value.is_finite(),
        "reference value for {} must be finite",
        parameter
    );

    let mut result = *defaults;
    match parameter.policy() {
        Policy::ProRata => {
            let delta = reference_value - defaults[FunctionalType::REFERENCE.index()];
            for value in result.iter_mut() {
                *value += delta;
            }
        }
        Policy::TreeOnlyOverride => {
            for pft in FunctionalType::ALL {
                if pft.is_tree() {
                    result[pft.index()] = reference_value;
                }
            }
        }
        Policy::UniformBroadcast => {
            result = [reference_value; PFT_COUNT];
        }
        Policy::AdditiveDelta => {
            for value in result.iter_mut() {
                *value += reference_value;
            }
        }
    }

    for value in result.iter_mut() {
        *value = round_value(*value);
    }
    result
}
