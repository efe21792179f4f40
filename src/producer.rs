//! The value producer abstraction.
//!
//! A producer is a stateful, pull-based source of values with cursor
//! semantics: [`Producer::current`] peeks the value under the cursor and
//! [`Producer::advance`] moves the cursor exactly one step. Peeking is free of
//! side effects, so randomized producers only draw from their entropy inside
//! `advance` (and once at construction, for the initial value).
//!
//! Producers never terminate. A bounded aggregate such as a fixed-length array
//! is a bounded *value*; the producer emitting it still runs forever.

/// Stateful source of values of one type.
pub trait Producer {
    type Item;

    /// Value under the cursor. Repeated calls without an intervening
    /// [`advance`](Producer::advance) return the same value.
    fn current(&self) -> &Self::Item;

    /// Move the cursor forward by exactly one value.
    fn advance(&mut self);
}

/// Type-erased producer, used wherever producers of different concrete types
/// are stored side by side.
pub type BoxedProducer<T> = Box<dyn Producer<Item = T>>;

impl<P: Producer + ?Sized> Producer for Box<P> {
    type Item = P::Item;

    fn current(&self) -> &Self::Item {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/// Convenience methods available on every producer.
pub trait ProducerExt: Producer {
    /// Erase the concrete type.
    fn boxed(self) -> BoxedProducer<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Transform every value with `f`. The mapped value is computed once per
    /// step and cached, so peeking does not re-run `f`.
    fn map<U, F>(self, f: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> U,
    {
        Map::new(self, f)
    }

    /// Read the current value, then advance.
    fn next_value(&mut self) -> Self::Item
    where
        Self::Item: Clone,
    {
        let value = self.current().clone();
        self.advance();
        value
    }

    /// Pull `n` consecutive values.
    fn take_values(&mut self, n: usize) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        (0..n).map(|_| self.next_value()).collect()
    }
}

impl<P: Producer + ?Sized> ProducerExt for P {}

/// Producer returned by [`ProducerExt::map`].
pub struct Map<P, F, U> {
    inner: P,
    f: F,
    value: U,
}

impl<P, F, U> Map<P, F, U>
where
    P: Producer,
    F: FnMut(&P::Item) -> U,
{
    fn new(inner: P, mut f: F) -> Self {
        let value = f(inner.current());
        Self { inner, f, value }
    }
}

impl<P, F, U> Producer for Map<P, F, U>
where
    P: Producer,
    F: FnMut(&P::Item) -> U,
{
    type Item = U;

    fn current(&self) -> &U {
        &self.value
    }

    fn advance(&mut self) {
        self.inner.advance();
        self.value = (self.f)(self.inner.current());
    }
}
