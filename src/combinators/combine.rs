use rand::Rng;

use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::producer::Producer;

/// Uniform random selection over several producers.
///
/// Each step one sub-producer is chosen with probability `1/n`; its current
/// value is exposed and only that producer is advanced when the step ends.
/// Producers that were not chosen stay where they are.
pub struct Combine<P> {
    producers: Vec<P>,
    rng: Entropy,
    chosen: usize,
}

/// Build a [`Combine`] over `producers`. Fails on an empty list.
pub fn combine<P: Producer>(entropy: &mut Entropy, producers: Vec<P>) -> Result<Combine<P>> {
    if producers.is_empty() {
        return Err(Error::EmptySelection {
            combinator: "combine",
        });
    }
    Ok(combine_catalog(entropy, producers))
}

/// [`combine`] for built-in catalogs, whose producer lists are never empty.
pub(crate) fn combine_catalog<P: Producer>(
    entropy: &mut Entropy,
    producers: Vec<P>,
) -> Combine<P> {
    debug_assert!(!producers.is_empty());
    let mut rng = entropy.fork();
    let chosen = rng.gen_range(0..producers.len());
    Combine {
        producers,
        rng,
        chosen,
    }
}

impl<P> Combine<P> {
    /// Index of the sub-producer chosen for the current step.
    pub fn chosen(&self) -> usize {
        self.chosen
    }
}

impl<P: Producer> Producer for Combine<P> {
    type Item = P::Item;

    fn current(&self) -> &P::Item {
        self.producers[self.chosen].current()
    }

    fn advance(&mut self) {
        self.producers[self.chosen].advance();
        self.chosen = self.rng.gen_range(0..self.producers.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::cycle_through;
    use crate::producer::ProducerExt;

    #[test]
    fn test_empty_combine_is_rejected() {
        let producers: Vec<crate::BoxedProducer<i32>> = Vec::new();
        assert_eq!(
            combine(&mut Entropy::from_seed(0), producers).err(),
            Some(Error::EmptySelection {
                combinator: "combine"
            })
        );
    }

    #[test]
    fn test_single_producer_passes_through() {
        let inner = cycle_through(vec![1, 2, 3]).unwrap();
        let mut p = combine(&mut Entropy::from_seed(1), vec![inner]).unwrap();
        assert_eq!(p.take_values(6), vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_only_chosen_producer_advances() {
        let a = cycle_through((0..1000).collect()).unwrap();
        let b = cycle_through((1000..2000).collect()).unwrap();
        let mut p = combine(&mut Entropy::from_seed(5), vec![a, b]).unwrap();

        let mut from_a = Vec::new();
        let mut from_b = Vec::new();
        for _ in 0..500 {
            let v = p.next_value();
            if v < 1000 {
                from_a.push(v);
            } else {
                from_b.push(v);
            }
        }
        let expected_a: Vec<i32> = (0..from_a.len() as i32).collect();
        let expected_b: Vec<i32> = (1000..1000 + from_b.len() as i32).collect();
        assert_eq!(from_a, expected_a);
        assert_eq!(from_b, expected_b);
    }
}
