//! The test-drive harness.
//!
//! A [`Proposition`] moves through two phases. During registration every
//! [`given`](Proposition::given) normalizes its source into one producer,
//! wraps it in a [`Reshuffle`] stage and appends it. A `call` then drives
//! `max_tests` iterations: each iteration reads the current value of every
//! registered producer in registration order, advances it, and hands the
//! resulting argument tuple to the hypothesis. Once the run ends the
//! producer list is empty again while the configuration is kept, so the same
//! harness can serve another round of `given`/`call`.
//!
//! Hypothesis failures are never caught. A panicking hypothesis unwinds
//! straight through `call`; [`try_call`](Proposition::try_call) stops at the
//! first `Err` and hands it back untouched inside [`Falsified`].

use std::fmt;
use std::ops::ControlFlow;

use log::{debug, trace, warn};

use crate::combinators::{combine, reshuffle, Reshuffle};
use crate::config::PropositionConfig;
use crate::entropy::Entropy;
use crate::error::Result;
use crate::producer::{BoxedProducer, Producer, ProducerExt};

/// What a single `given` registers: one producer, or a collection of
/// producers that is resolved to their uniform [`combine`].
pub enum Source<T> {
    Single(BoxedProducer<T>),
    Collection(Vec<BoxedProducer<T>>),
}

impl<T> Source<T> {
    pub fn single<P>(producer: P) -> Self
    where
        P: Producer<Item = T> + 'static,
    {
        Source::Single(Box::new(producer))
    }
}

impl<T> From<BoxedProducer<T>> for Source<T> {
    fn from(producer: BoxedProducer<T>) -> Self {
        Source::Single(producer)
    }
}

impl<T> From<Vec<BoxedProducer<T>>> for Source<T> {
    fn from(producers: Vec<BoxedProducer<T>>) -> Self {
        Source::Collection(producers)
    }
}

/// One executed iteration, kept by [`Proposition::call_collect`].
#[derive(Debug, Clone, PartialEq)]
pub struct TestRecord<T, R> {
    pub arguments: Vec<T>,
    pub result: R,
}

/// A hypothesis returned `Err` under [`Proposition::try_call`].
#[derive(Debug, thiserror::Error)]
#[error("hypothesis falsified on test {iteration} (seed {seed}) with arguments {arguments:?}: {error}")]
pub struct Falsified<T: fmt::Debug, E: std::error::Error + 'static> {
    /// Zero-based index of the failing iteration.
    pub iteration: usize,
    /// Seed of the harness entropy, for replaying the run.
    pub seed: u64,
    pub arguments: Vec<T>,
    #[source]
    pub error: E,
}

/// Property-test harness over producers of `T`.
///
/// Hypotheses that take arguments of different kinds use a sum type for `T`,
/// such as [`Value`](crate::leaf::Value).
pub struct Proposition<T> {
    config: PropositionConfig,
    entropy: Entropy,
    producers: Vec<Reshuffle<BoxedProducer<T>>>,
}

impl<T: Clone + 'static> Default for Proposition<T> {
    fn default() -> Self {
        Self::from_valid_config(PropositionConfig::default())
    }
}

impl<T: Clone + 'static> Proposition<T> {
    /// Build a harness, rejecting zero `max_tests` or chunk size.
    pub fn new(config: PropositionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Default configuration with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid_config(PropositionConfig::default().with_seed(seed))
    }

    fn from_valid_config(config: PropositionConfig) -> Self {
        let entropy = match config.seed {
            Some(seed) => Entropy::from_seed(seed),
            None => Entropy::from_os(),
        };
        Self {
            config,
            entropy,
            producers: Vec::new(),
        }
    }

    pub fn config(&self) -> &PropositionConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.entropy.seed()
    }

    /// Harness entropy. Combinators built from it consume it exactly like
    /// the normalization inside [`given`](Self::given) does.
    pub fn entropy_mut(&mut self) -> &mut Entropy {
        &mut self.entropy
    }

    /// Number of producers registered for the next run.
    pub fn registered(&self) -> usize {
        self.producers.len()
    }

    /// Register one source. A collection becomes a [`combine`] of its
    /// members; the result is wrapped in a reshuffle stage either way.
    pub fn given<S>(&mut self, source: S) -> Result<&mut Self>
    where
        S: Into<Source<T>>,
    {
        let producer = match source.into() {
            Source::Single(producer) => producer,
            Source::Collection(producers) => combine(&mut self.entropy, producers)?.boxed(),
        };
        let stage = reshuffle(
            &mut self.entropy,
            producer,
            self.config.reshuffle_chunk_size,
        )?;
        self.producers.push(stage);
        debug!("registered producer #{}", self.producers.len());
        Ok(self)
    }

    /// Register several sources in order.
    pub fn given_each<I, S>(&mut self, sources: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Source<T>>,
    {
        for source in sources {
            self.given(source)?;
        }
        Ok(self)
    }

    /// Run the hypothesis `max_tests` times for its side effects, typically
    /// assertions.
    pub fn call<F>(&mut self, mut hypothesis: F) -> &mut Self
    where
        F: FnMut(&[T]),
    {
        self.drive(|_, arguments| {
            hypothesis(&arguments);
            ControlFlow::<()>::Continue(())
        });
        self
    }

    /// Run the hypothesis `max_tests` times and keep every argument tuple
    /// together with what the hypothesis returned for it.
    pub fn call_collect<R, F>(&mut self, mut hypothesis: F) -> Vec<TestRecord<T, R>>
    where
        F: FnMut(&[T]) -> R,
    {
        let mut records = Vec::with_capacity(self.config.max_tests);
        self.drive(|_, arguments| {
            let result = hypothesis(&arguments);
            records.push(TestRecord { arguments, result });
            ControlFlow::<()>::Continue(())
        });
        records
    }

    /// Run until the hypothesis returns `Err` or `max_tests` iterations pass.
    pub fn try_call<E, F>(
        &mut self,
        mut hypothesis: F,
    ) -> std::result::Result<&mut Self, Falsified<T, E>>
    where
        T: fmt::Debug,
        E: std::error::Error + 'static,
        F: FnMut(&[T]) -> std::result::Result<(), E>,
    {
        let seed = self.seed();
        let outcome = self.drive(|iteration, arguments| {
            let verdict = hypothesis(&arguments);
            match verdict {
                Ok(()) => ControlFlow::Continue(()),
                Err(error) => ControlFlow::Break(Falsified {
                    iteration,
                    seed,
                    arguments,
                    error,
                }),
            }
        });
        match outcome {
            Some(falsified) => {
                warn!(
                    "hypothesis falsified on test {} (seed {}): {}",
                    falsified.iteration, falsified.seed, falsified.error
                );
                Err(falsified)
            }
            None => Ok(self),
        }
    }

    /// The run loop shared by every `call` flavour. The producer list is
    /// taken up front, so the harness is reset even if `step` unwinds.
    fn drive<B, F>(&mut self, mut step: F) -> Option<B>
    where
        F: FnMut(usize, Vec<T>) -> ControlFlow<B>,
    {
        let mut producers = std::mem::take(&mut self.producers);
        debug!(
            "running {} tests over {} producers (seed {})",
            self.config.max_tests,
            producers.len(),
            self.entropy.seed()
        );
        for iteration in 0..self.config.max_tests {
            let arguments: Vec<T> = producers.iter_mut().map(|p| p.next_value()).collect();
            trace!("test {} drew {} arguments", iteration, arguments.len());
            if let ControlFlow::Break(outcome) = step(iteration, arguments) {
                return Some(outcome);
            }
        }
        debug!("completed {} tests", self.config.max_tests);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::cycle_through;

    fn cycle(values: Vec<i32>) -> BoxedProducer<i32> {
        cycle_through(values).unwrap().boxed()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = PropositionConfig::default().with_reshuffle_chunk_size(0);
        assert!(Proposition::<i32>::new(config).is_err());
    }

    #[test]
    fn test_given_wraps_in_reshuffle() {
        let mut prop = Proposition::new(
            PropositionConfig::default()
                .with_seed(3)
                .with_max_tests(30)
                .with_reshuffle_chunk_size(3),
        )
        .unwrap();
        prop.given(cycle(vec![1, 2, 3])).unwrap();
        assert_eq!(prop.registered(), 1);

        let records = prop.call_collect(|args| args[0]);
        for chunk in records.chunks(3) {
            let mut values: Vec<i32> = chunk.iter().map(|r| r.result).collect();
            values.sort();
            assert_eq!(values, vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_empty_collection_rejected() {
        let mut prop = Proposition::<i32>::with_seed(0);
        assert!(prop.given(Vec::<BoxedProducer<i32>>::new()).is_err());
        assert_eq!(prop.registered(), 0);
    }

    #[test]
    fn test_producers_cleared_after_panic() {
        let mut prop = Proposition::with_seed(1);
        prop.given(cycle(vec![1])).unwrap();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            prop.call(|_| panic!("boom"));
        }));
        assert!(result.is_err());
        assert_eq!(prop.registered(), 0);
    }
}
