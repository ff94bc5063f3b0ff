//! Pure session logic: answer normalization, outcome types, the result ledger.

pub mod ledger;
pub mod normalize;
pub mod types;
