pub mod defaults;
pub mod errors;
pub mod expand;
pub mod parameter;
pub mod perturb;
pub mod pft;

pub use defaults::DefaultParameterSet;
pub use expand::{expand, Candidate, ExpandedParameterSet, ReferenceValueInput};
pub use parameter::{ParameterName, Policy};
pub use perturb::apply_policy;
