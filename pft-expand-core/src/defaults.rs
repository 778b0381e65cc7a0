//! Default parameter table
//!
//! The "acang" defaults (Met Office C4MIP run from 2006) used as the
//! baseline calibration for every ensemble. The table is immutable
//! reference data: it is built once at startup and accessors hand out
//! copies, never aliases, so no candidate's expansion can bleed into
//! another's.

use crate::parameter::ParameterName;
use crate::pft::{PftValues, PFT_COUNT};
use indexmap::IndexMap;
use serde::Serialize;

/// Immutable mapping from every known parameter to its default values
/// across the five functional types.
///
/// Iteration order is the canonical table order, which is also the key
/// order of the baseline record in serialized param tables.
#[derive(Debug, Clone, Serialize)]
pub struct DefaultParameterSet {
    table: IndexMap<ParameterName, PftValues>,
}

impl DefaultParameterSet {
    /// The "acang" default parameter set.
    pub fn acang() -> Self {
        use ParameterName::*;

        let mut table = IndexMap::new();
        table.insert(Alpha, [0.08, 0.08, 0.08, 0.05, 0.08]);
        table.insert(GArea, [0.004, 0.004, 0.10, 0.10, 0.05]);
        table.insert(F0, [0.875, 0.875, 0.900, 0.800, 0.900]);
        table.insert(LaiMin, [4.0, 4.0, 1.0, 1.0, 1.0]);
        table.insert(Nl0, [0.050, 0.030, 0.060, 0.030, 0.030]);
        table.insert(RGrow, [0.25, 0.25, 0.25, 0.25, 0.25]);
        table.insert(Tlow, [0.0, -5.0, 0.0, 13.0, 0.0]);
        table.insert(Tupp, [36.0, 31.0, 36.0, 45.0, 36.0]);
        // Plant-independent in this configuration, held uniform.
        table.insert(VCritAlpha, [0.343; PFT_COUNT]);

        Self { table }
    }

    /// Default values for a parameter, as a copy.
    pub fn get(&self, name: ParameterName) -> Option<PftValues> {
        self.table.get(&name).copied()
    }

    /// Whether the table carries the given parameter.
    pub fn contains(&self, name: ParameterName) -> bool {
        self.table.contains_key(&name)
    }

    /// Iterate over `(parameter, values)` pairs in canonical table order.
    pub fn iter(&self) -> impl Iterator<Item = (ParameterName, PftValues)> + '_ {
        self.table.iter().map(|(name, values)| (*name, *values))
    }

    /// Number of parameters in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for DefaultParameterSet {
    fn default() -> Self {
        Self::acang()
    }
}
