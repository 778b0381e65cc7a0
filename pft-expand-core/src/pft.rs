//! Plant functional type (PFT) definitions
//!
//! The model configuration resolves vegetation into five fixed functional
//! types. Every parameter holds one value per type, stored in canonical index
//! order, and the whole expansion machinery is driven by the value supplied
//! for the reference type (Broadleaf tree, index 0).
//!
//! # Examples
//!
//! ```rust
//! use pft_expand_core::pft::{FunctionalType, PFT_COUNT};
//!
//! assert_eq!(FunctionalType::REFERENCE, FunctionalType::BroadleafTree);
//! assert_eq!(FunctionalType::ALL.len(), PFT_COUNT);
//! assert!(FunctionalType::NeedleleafTree.is_tree());
//! assert!(!FunctionalType::C4Grass.is_tree());
//! ```

use serde::{Deserialize, Serialize};

/// Number of plant functional types in the model configuration.
pub const PFT_COUNT: usize = 5;

/// One value per functional type, in canonical index order.
pub type PftValues = [f64; PFT_COUNT];

/// The five fixed vegetation categories, in canonical index order.
///
/// The discriminants are the canonical indices into a [`PftValues`] array.
/// This ordering matches the default parameter table and must never change:
/// downstream job configuration indexes parameter arrays positionally.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionalType {
    /// Broadleaf tree (the reference type driving expansion)
    BroadleafTree = 0,
    /// Needleleaf tree
    NeedleleafTree = 1,
    /// C3 grass
    C3Grass = 2,
    /// C4 grass
    C4Grass = 3,
    /// Shrub
    Shrub = 4,
}

impl FunctionalType {
    /// The distinguished type whose value drives expansion to the other four.
    ///
    /// Pro-rata deltas are computed against this type's default, so index 0
    /// is referenced through this constant rather than a literal.
    pub const REFERENCE: FunctionalType = FunctionalType::BroadleafTree;

    /// All functional types, in canonical index order.
    pub const ALL: [FunctionalType; PFT_COUNT] = [
        FunctionalType::BroadleafTree,
        FunctionalType::NeedleleafTree,
        FunctionalType::C3Grass,
        FunctionalType::C4Grass,
        FunctionalType::Shrub,
    ];

    /// Canonical index of this type in a [`PftValues`] array.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// True for the two tree types (Broadleaf and Needleleaf).
    ///
    /// The tree-only override policy writes only these indices.
    pub fn is_tree(&self) -> bool {
        matches!(
            self,
            FunctionalType::BroadleafTree | FunctionalType::NeedleleafTree
        )
    }
}

impl From<FunctionalType> for usize {
    fn from(t: FunctionalType) -> usize {
        t as usize
    }
}

impl std::fmt::Display for FunctionalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionalType::BroadleafTree => write!(f, "BroadleafTree"),
            FunctionalType::NeedleleafTree => write!(f, "NeedleleafTree"),
            FunctionalType::C3Grass => write!(f, "C3Grass"),
            FunctionalType::C4Grass => write!(f, "C4Grass"),
            FunctionalType::Shrub => write!(f, "Shrub"),
        }
    }
}
