//! Ready-made producers for common testing needs.
//!
//! Everything here is built only from the [`Producer`](crate::Producer)
//! interface and the combinators; none of it is special to the harness.

mod catalog;
mod numbers;
mod text;
mod value;

pub use catalog::{accidents, anything, evil_strings, garbage};
pub use numbers::{
    bools, every_integer, float_range, floats, integer_range, integers, with_boundaries, Bools,
    Boundaries, EveryInteger, FloatRange, IntegerRange, Magnitudes,
};
pub use text::{char_range, characters, strings, strings_from, unicode_chars, CharRange, Strings};
pub use value::Value;
