use rand::Rng;

use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::producer::Producer;

/// Uniform sampling with replacement from a fixed collection.
pub struct ChooseFrom<T> {
    items: Vec<T>,
    rng: Entropy,
    index: usize,
}

pub fn choose_from<T>(entropy: &mut Entropy, items: Vec<T>) -> Result<ChooseFrom<T>> {
    if items.is_empty() {
        return Err(Error::EmptySelection {
            combinator: "choose_from",
        });
    }
    Ok(ChooseFrom::from_catalog(entropy, items))
}

impl<T> ChooseFrom<T> {
    /// Built-in catalogs are non-empty constants.
    pub(crate) fn from_catalog(entropy: &mut Entropy, items: Vec<T>) -> Self {
        debug_assert!(!items.is_empty());
        let mut rng = entropy.fork();
        let index = rng.gen_range(0..items.len());
        ChooseFrom { items, rng, index }
    }
}

impl<T> Producer for ChooseFrom<T> {
    type Item = T;

    fn current(&self) -> &T {
        &self.items[self.index]
    }

    fn advance(&mut self) {
        self.index = self.rng.gen_range(0..self.items.len());
    }
}

/// Deterministic walk over a fixed collection, wrapping after the last element.
#[derive(Debug, Clone)]
pub struct CycleThrough<T> {
    items: Vec<T>,
    index: usize,
}

pub fn cycle_through<T>(items: Vec<T>) -> Result<CycleThrough<T>> {
    if items.is_empty() {
        return Err(Error::EmptySelection {
            combinator: "cycle_through",
        });
    }
    Ok(CycleThrough { items, index: 0 })
}

impl<T> Producer for CycleThrough<T> {
    type Item = T;

    fn current(&self) -> &T {
        &self.items[self.index]
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.items.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::ProducerExt;
    use std::collections::HashMap;

    #[test]
    fn test_empty_collections_rejected() {
        assert!(cycle_through(Vec::<u8>::new()).is_err());
        assert!(choose_from(&mut Entropy::from_seed(0), Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_cycle_wraps() {
        let mut p = cycle_through(vec!["a", "b", "c"]).unwrap();
        assert_eq!(p.take_values(7), vec!["a", "b", "c", "a", "b", "c", "a"]);
    }

    #[test]
    fn test_choose_from_is_roughly_uniform() {
        let mut p = choose_from(&mut Entropy::from_seed(13), vec![0, 1, 2, 3]).unwrap();
        let mut counts: HashMap<i32, usize> = HashMap::new();
        for v in p.take_values(8000) {
            *counts.entry(v).or_default() += 1;
        }
        assert_eq!(counts.len(), 4);
        for (_, count) in counts {
            let freq = count as f64 / 8000.0;
            assert!((freq - 0.25).abs() < 0.03, "frequency {}", freq);
        }
    }
}
