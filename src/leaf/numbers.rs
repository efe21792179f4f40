//! Numeric and boolean producers.

use rand::Rng;

use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::producer::Producer;

/// Emits a fixed list of constants first, then defers to `inner` forever.
///
/// Used to put boundary values at the front of a random stream, where a
/// hypothesis is most likely to see them.
pub struct Boundaries<P: Producer> {
    constants: Vec<P::Item>,
    index: usize,
    inner: P,
}

pub fn with_boundaries<P: Producer>(constants: Vec<P::Item>, inner: P) -> Boundaries<P> {
    Boundaries {
        constants,
        index: 0,
        inner,
    }
}

impl<P: Producer> Producer for Boundaries<P> {
    type Item = P::Item;

    fn current(&self) -> &P::Item {
        self.constants
            .get(self.index)
            .unwrap_or_else(|| self.inner.current())
    }

    fn advance(&mut self) {
        if self.index < self.constants.len() {
            self.index += 1;
        } else {
            self.inner.advance();
        }
    }
}

/// Uniform integers in `[min, max]`.
pub struct IntegerRange {
    min: i64,
    max: i64,
    rng: Entropy,
    value: i64,
}

pub fn integer_range(entropy: &mut Entropy, min: i64, max: i64) -> Result<IntegerRange> {
    if min > max {
        return Err(Error::invalid_range(min, max));
    }
    let mut rng = entropy.fork();
    let value = rng.gen_range(min..=max);
    Ok(IntegerRange {
        min,
        max,
        rng,
        value,
    })
}

impl Producer for IntegerRange {
    type Item = i64;

    fn current(&self) -> &i64 {
        &self.value
    }

    fn advance(&mut self) {
        self.value = self.rng.gen_range(self.min..=self.max);
    }
}

const INTEGER_BOUNDARIES: [i64; 10] = [
    0,
    1,
    -1,
    2,
    -2,
    i64::MAX,
    i64::MIN,
    i32::MAX as i64,
    i32::MIN as i64,
    u32::MAX as i64,
];

/// Any `i64`, boundary constants first.
pub fn integers(entropy: &mut Entropy) -> Boundaries<IntegerRange> {
    let mut rng = entropy.fork();
    let value = rng.gen();
    let inner = IntegerRange {
        min: i64::MIN,
        max: i64::MAX,
        rng,
        value,
    };
    with_boundaries(INTEGER_BOUNDARIES.to_vec(), inner)
}

/// Deterministic walk `min, min + stride, ...` over `[min, max)`, restarting
/// at `min` once the next step would reach `max`.
#[derive(Debug, Clone)]
pub struct EveryInteger {
    min: i64,
    max: i64,
    stride: i64,
    value: i64,
}

pub fn every_integer(min: i64, max: i64, stride: i64) -> Result<EveryInteger> {
    if stride <= 0 {
        return Err(Error::NonPositive {
            parameter: "stride",
            value: stride as i128,
        });
    }
    if min > max {
        return Err(Error::invalid_range(min, max));
    }
    if min == max {
        return Err(Error::EmptyRange {
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(EveryInteger {
        min,
        max,
        stride,
        value: min,
    })
}

impl Producer for EveryInteger {
    type Item = i64;

    fn current(&self) -> &i64 {
        &self.value
    }

    fn advance(&mut self) {
        let next = self.value as i128 + self.stride as i128;
        self.value = if next >= self.max as i128 {
            self.min
        } else {
            next as i64
        };
    }
}

/// Uniform floats in `[min, max]`.
pub struct FloatRange {
    min: f64,
    max: f64,
    rng: Entropy,
    value: f64,
}

fn require_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteBound { parameter, value })
    }
}

pub fn float_range(entropy: &mut Entropy, min: f64, max: f64) -> Result<FloatRange> {
    require_finite("min", min)?;
    require_finite("max", max)?;
    if min > max {
        return Err(Error::invalid_range(min, max));
    }
    let mut range = FloatRange {
        min,
        max,
        rng: entropy.fork(),
        value: min,
    };
    range.advance();
    Ok(range)
}

impl Producer for FloatRange {
    type Item = f64;

    fn current(&self) -> &f64 {
        &self.value
    }

    fn advance(&mut self) {
        // Interpolate instead of `gen_range`: `max - min` may overflow to
        // infinity even though both bounds are finite.
        let u: f64 = self.rng.gen();
        self.value = (self.min * (1.0 - u) + self.max * u).clamp(self.min, self.max);
    }
}

/// Finite floats spread over many magnitudes, with either sign.
pub struct Magnitudes {
    rng: Entropy,
    value: f64,
}

impl Magnitudes {
    fn draw(rng: &mut Entropy) -> f64 {
        let exponent = rng.gen_range(-20..=20);
        let mantissa: f64 = rng.gen();
        let sign = if rng.gen::<bool>() { 1.0 } else { -1.0 };
        sign * mantissa * 10f64.powi(exponent)
    }
}

impl Producer for Magnitudes {
    type Item = f64;

    fn current(&self) -> &f64 {
        &self.value
    }

    fn advance(&mut self) {
        self.value = Self::draw(&mut self.rng);
    }
}

const FLOAT_BOUNDARIES: [f64; 12] = [
    0.0,
    -0.0,
    1.0,
    -1.0,
    f64::EPSILON,
    f64::MIN_POSITIVE,
    f64::MAX,
    f64::MIN,
    f64::INFINITY,
    f64::NEG_INFINITY,
    f64::NAN,
    0.1,
];

/// Any `f64`, boundary constants (including the infinities and NaN) first.
pub fn floats(entropy: &mut Entropy) -> Boundaries<Magnitudes> {
    let mut rng = entropy.fork();
    let value = Magnitudes::draw(&mut rng);
    with_boundaries(FLOAT_BOUNDARIES.to_vec(), Magnitudes { rng, value })
}

/// Fair coin flips.
pub struct Bools {
    rng: Entropy,
    value: bool,
}

pub fn bools(entropy: &mut Entropy) -> Bools {
    let mut rng = entropy.fork();
    let value = rng.gen();
    Bools { rng, value }
}

impl Producer for Bools {
    type Item = bool;

    fn current(&self) -> &bool {
        &self.value
    }

    fn advance(&mut self) {
        self.value = self.rng.gen();
    }
}
