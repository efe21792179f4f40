//! Combinators building new producers out of existing ones.
//!
//! A combinator owns the producers it was built from. Randomized combinators
//! fork their own [`Entropy`](crate::Entropy) at construction.

mod aggregate;
mod combine;
mod finite;
mod reshuffle;
mod schema;
mod weighted;

pub use aggregate::{
    array_permutations, arrays, fixed_length_arrays, ArrayPermutations, Arrays, Length,
};
pub use combine::{combine, Combine};
pub(crate) use combine::combine_catalog;
pub use finite::{choose_from, cycle_through, ChooseFrom, CycleThrough};
pub use reshuffle::{reshuffle, Reshuffle};
pub use schema::{array_schema, ArraySchema};
pub use weighted::{weighted_combine, Weighted, WeightedCombine};
