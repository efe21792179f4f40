use rand::Rng;

use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::producer::Producer;

/// A producer paired with its selection weight.
pub struct Weighted<P> {
    pub weight: i64,
    pub producer: P,
}

impl<P> Weighted<P> {
    pub fn new(weight: i64, producer: P) -> Self {
        Self { weight, producer }
    }
}

/// Biased random selection over weighted producers.
///
/// Selection draws a location uniformly from `[0, total)` and picks the first
/// descriptor whose cumulative weight is strictly greater than it, so a
/// descriptor is chosen with probability `weight / total` and zero-weight
/// descriptors are never chosen.
pub struct WeightedCombine<P> {
    producers: Vec<P>,
    cumulative: Vec<u64>,
    rng: Entropy,
    chosen: usize,
}

/// Build a [`WeightedCombine`].
///
/// Fails on an empty list, on any negative weight, and when every weight is
/// zero while more than one descriptor is given. A lone zero-weight
/// descriptor is always selected.
pub fn weighted_combine<P: Producer>(
    entropy: &mut Entropy,
    descriptors: Vec<Weighted<P>>,
) -> Result<WeightedCombine<P>> {
    if descriptors.is_empty() {
        return Err(Error::EmptySelection {
            combinator: "weighted_combine",
        });
    }

    let mut cumulative = Vec::with_capacity(descriptors.len());
    let mut total: u64 = 0;
    for (index, descriptor) in descriptors.iter().enumerate() {
        if descriptor.weight < 0 {
            return Err(Error::NegativeWeight {
                index,
                weight: descriptor.weight,
            });
        }
        total = total
            .checked_add(descriptor.weight as u64)
            .ok_or(Error::WeightOverflow { index })?;
        cumulative.push(total);
    }
    if total == 0 && descriptors.len() > 1 {
        return Err(Error::ZeroTotalWeight {
            count: descriptors.len(),
        });
    }

    let producers = descriptors.into_iter().map(|d| d.producer).collect();
    let mut combined = WeightedCombine {
        producers,
        cumulative,
        rng: entropy.fork(),
        chosen: 0,
    };
    combined.chosen = combined.select();
    Ok(combined)
}

impl<P> WeightedCombine<P> {
    fn select(&mut self) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0);
        if total == 0 {
            return 0;
        }
        let location = self.rng.gen_range(0..total);
        self.cumulative.partition_point(|&c| c <= location)
    }

    /// Index of the descriptor chosen for the current step.
    pub fn chosen(&self) -> usize {
        self.chosen
    }
}

impl<P: Producer> Producer for WeightedCombine<P> {
    type Item = P::Item;

    fn current(&self) -> &P::Item {
        self.producers[self.chosen].current()
    }

    fn advance(&mut self) {
        self.producers[self.chosen].advance();
        self.chosen = self.select();
    }
}
