//! Parameter identities and perturbation policy dispatch.
//!
//! The vegetation configuration exposes a closed set of nine tunable
//! parameters. Each parameter carries a fixed [`Policy`] describing how a
//! value supplied for the reference type propagates across all five
//! functional types. The mapping is a total, exhaustively-checked match:
//! adding a parameter means adding an enum variant and the compiler walks
//! you to every place that needs updating.

use crate::errors::ExpandError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of known parameters.
///
/// Serialized as the canonical uppercase keys used in parameter tables
/// (`"ALPHA"`, `"G_AREA"`, ...). Unknown keys are rejected at the
/// boundary, never invented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterName {
    /// Quantum efficiency of photosynthesis
    #[serde(rename = "ALPHA")]
    Alpha,
    /// Disturbance rate
    #[serde(rename = "G_AREA")]
    GArea,
    /// CI/CA ratio parameter
    #[serde(rename = "F0")]
    F0,
    /// Minimum leaf area index (trees only)
    #[serde(rename = "LAI_MIN")]
    LaiMin,
    /// Top-of-canopy leaf nitrogen concentration
    #[serde(rename = "NL0")]
    Nl0,
    /// Growth respiration fraction
    #[serde(rename = "R_GROW")]
    RGrow,
    /// Lower temperature threshold for photosynthesis (input is a delta)
    #[serde(rename = "TLOW")]
    Tlow,
    /// Upper temperature threshold for photosynthesis (input is a delta)
    #[serde(rename = "TUPP")]
    Tupp,
    /// Critical soil moisture availability factor
    #[serde(rename = "V_CRIT_ALPHA")]
    VCritAlpha,
}

/// How a reference-type value is propagated across the five functional types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// Shift every type by `value - default[reference]`, preserving the
    /// relative offsets between types set by the default calibration.
    ProRata,
    /// Overwrite the two tree types; non-tree types keep their defaults.
    TreeOnlyOverride,
    /// The same value for all five types (plant-independent constant).
    UniformBroadcast,
    /// The input is a delta added uniformly to every type's default,
    /// preserving the inter-type spread.
    AdditiveDelta,
}

impl ParameterName {
    /// All known parameters, in default-table order.
    pub const ALL: [ParameterName; 9] = [
        ParameterName::Alpha,
        ParameterName::GArea,
        ParameterName::F0,
        ParameterName::LaiMin,
        ParameterName::Nl0,
        ParameterName::RGrow,
        ParameterName::Tlow,
        ParameterName::Tupp,
        ParameterName::VCritAlpha,
    ];

    /// Canonical uppercase key for this parameter.
    pub fn as_key(&self) -> &'static str {
        match self {
            ParameterName::Alpha => "ALPHA",
            ParameterName::GArea => "G_AREA",
            ParameterName::F0 => "F0",
            ParameterName::LaiMin => "LAI_MIN",
            ParameterName::Nl0 => "NL0",
            ParameterName::RGrow => "R_GROW",
            ParameterName::Tlow => "TLOW",
            ParameterName::Tupp => "TUPP",
            ParameterName::VCritAlpha => "V_CRIT_ALPHA",
        }
    }

    /// Strict lookup from a canonical key.
    ///
    /// Returns `None` for anything that is not an exact canonical key.
    /// Case folding and synonym handling belong to the ingestion layer.
    pub fn from_key(key: &str) -> Option<ParameterName> {
        ParameterName::ALL.iter().copied().find(|p| p.as_key() == key)
    }

    /// The perturbation policy for this parameter.
    ///
    /// Fixed at compile time, not configurable at runtime.
    pub fn policy(&self) -> Policy {
        match self {
            ParameterName::Alpha
            | ParameterName::GArea
            | ParameterName::F0
            | ParameterName::Nl0 => Policy::ProRata,
            ParameterName::LaiMin => Policy::TreeOnlyOverride,
            ParameterName::RGrow | ParameterName::VCritAlpha => Policy::UniformBroadcast,
            ParameterName::Tlow | ParameterName::Tupp => Policy::AdditiveDelta,
        }
    }

    /// True when the supplied input value is a shift rather than an
    /// absolute value (the temperature-threshold pair).
    pub fn takes_delta(&self) -> bool {
        matches!(self.policy(), Policy::AdditiveDelta)
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for ParameterName {
    type Err = ExpandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParameterName::from_key(s).ok_or_else(|| ExpandError::UnknownParameter(s.to_string()))
    }
}
