use rand::seq::SliceRandom;
use rand::Rng;

use crate::entropy::Entropy;
use crate::producer::Producer;

/// How many elements an [`Arrays`] producer pulls per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Length {
    /// A uniformly random length in `[0, max]`, drawn independently each step.
    UpTo(usize),
    /// Always exactly this many.
    Exactly(usize),
}

/// Aggregates a run of inner values into one `Vec` per step.
///
/// Every element costs one `advance` of the inner producer, so consecutive
/// arrays hold consecutive inner values.
pub struct Arrays<P: Producer> {
    inner: P,
    length: Length,
    rng: Option<Entropy>,
    value: Vec<P::Item>,
}

/// Arrays of random length between zero and `max_size` inclusive.
pub fn arrays<P>(entropy: &mut Entropy, inner: P, max_size: usize) -> Arrays<P>
where
    P: Producer,
    P::Item: Clone,
{
    Arrays::new(inner, Length::UpTo(max_size), Some(entropy.fork()))
}

/// Arrays of exactly `size` elements. Needs no entropy of its own.
pub fn fixed_length_arrays<P>(inner: P, size: usize) -> Arrays<P>
where
    P: Producer,
    P::Item: Clone,
{
    Arrays::new(inner, Length::Exactly(size), None)
}

impl<P> Arrays<P>
where
    P: Producer,
    P::Item: Clone,
{
    fn new(inner: P, length: Length, rng: Option<Entropy>) -> Self {
        let mut arrays = Self {
            inner,
            length,
            rng,
            value: Vec::new(),
        };
        arrays.fill();
        arrays
    }

    fn next_len(&mut self) -> usize {
        match (self.length, self.rng.as_mut()) {
            (Length::Exactly(n), _) => n,
            (Length::UpTo(max), Some(rng)) => rng.gen_range(0..=max),
            (Length::UpTo(max), None) => max,
        }
    }

    fn fill(&mut self) {
        let len = self.next_len();
        let mut value = Vec::with_capacity(len);
        for _ in 0..len {
            value.push(self.inner.current().clone());
            self.inner.advance();
        }
        self.value = value;
    }

    pub fn length(&self) -> Length {
        self.length
    }
}

impl<P> Producer for Arrays<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = Vec<P::Item>;

    fn current(&self) -> &Vec<P::Item> {
        &self.value
    }

    fn advance(&mut self) {
        self.fill();
    }
}

/// Fresh uniform permutation of a fixed collection on every step.
pub struct ArrayPermutations<T> {
    items: Vec<T>,
    rng: Entropy,
    value: Vec<T>,
}

pub fn array_permutations<T: Clone>(entropy: &mut Entropy, items: Vec<T>) -> ArrayPermutations<T> {
    let mut permutations = ArrayPermutations {
        value: Vec::new(),
        items,
        rng: entropy.fork(),
    };
    permutations.advance();
    permutations
}

impl<T: Clone> Producer for ArrayPermutations<T> {
    type Item = Vec<T>;

    fn current(&self) -> &Vec<T> {
        &self.value
    }

    fn advance(&mut self) {
        let mut value = self.items.clone();
        value.shuffle(&mut self.rng);
        self.value = value;
    }
}
