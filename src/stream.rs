//! Lifting plain callables into producers.

use crate::entropy::Entropy;
use crate::producer::Producer;

/// Producer that re-invokes a callable on every step.
///
/// Built by [`stream`] or [`random_stream`].
pub struct Stream<F, T> {
    f: F,
    value: T,
}

impl<F, T> Producer for Stream<F, T>
where
    F: FnMut() -> T,
{
    type Item = T;

    fn current(&self) -> &T {
        &self.value
    }

    fn advance(&mut self) {
        self.value = (self.f)();
    }
}

/// Lift `f` into a producer. The callable runs once now for the initial value
/// and once per `advance`; arguments are whatever the closure captured.
pub fn stream<T, F>(mut f: F) -> Stream<F, T>
where
    F: FnMut() -> T,
{
    let value = f();
    Stream { f, value }
}

/// Lift a callable that needs randomness. Every invocation receives this
/// producer's private fork of `entropy`.
pub fn random_stream<T, F>(entropy: &mut Entropy, mut f: F) -> Stream<impl FnMut() -> T, T>
where
    F: FnMut(&mut Entropy) -> T,
{
    let mut rng = entropy.fork();
    stream(move || f(&mut rng))
}
