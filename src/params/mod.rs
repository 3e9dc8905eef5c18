//! Whole-model parameter operations: flattening a model into a single vector and back, and
//! synchronizing a target model from an online one.

mod flat;
mod structure;
mod target;

pub use flat::{flatten, num_params, restore};
pub use structure::check_same_structure;
pub use target::{hard_update, soft_update};
