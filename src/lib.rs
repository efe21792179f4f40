//! # Proposition
//!
//! Property-based testing built from composable value producers.
//!
//! A [`Producer`] is a stateful, pull-based source of values with cursor
//! semantics: `current` peeks, `advance` steps. Combinators merge, weight,
//! aggregate and decorrelate producers, and a [`Proposition`] drives a bounded
//! number of hypothesis invocations from the producers registered with it.
//!
//! ```rust
//! use proposition::leaf::integer_range;
//! use proposition::{Proposition, ProducerExt};
//!
//! let mut prop = Proposition::with_seed(7);
//! let small = integer_range(prop.entropy_mut(), 0, 100).unwrap().boxed();
//! prop.given(small)
//!     .unwrap()
//!     .call(|args| assert!((0..=100).contains(&args[0])));
//! ```
//!
//! All randomness flows through an explicitly owned [`Entropy`]; seeding the
//! harness makes a whole run reproducible.

pub mod combinators;
pub mod config;
pub mod entropy;
pub mod error;
pub mod leaf;
pub mod producer;
pub mod proposition;
pub mod stream;

pub use combinators::{
    array_permutations, array_schema, arrays, choose_from, combine, cycle_through,
    fixed_length_arrays, reshuffle, weighted_combine, Weighted,
};
pub use config::PropositionConfig;
pub use entropy::Entropy;
pub use error::{Error, Result};
pub use producer::{BoxedProducer, Producer, ProducerExt};
pub use proposition::{Falsified, Proposition, Source, TestRecord};
pub use stream::{random_stream, stream};
