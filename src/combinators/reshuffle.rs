use log::trace;
use rand::seq::SliceRandom;

use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::producer::Producer;

/// Chunked decorrelation stage.
///
/// Pulls `chunk_size` consecutive values from the inner producer, shuffles
/// them uniformly and emits them one at a time before pulling the next chunk.
/// The value set of every chunk, and so the long-run frequency of each value,
/// is preserved; only the local order is destroyed.
///
/// Inner producers never run dry, so every chunk is always full.
pub struct Reshuffle<P: Producer> {
    inner: P,
    rng: Entropy,
    chunk_size: usize,
    buffer: Vec<P::Item>,
    cursor: usize,
}

/// Wrap `inner` in a [`Reshuffle`] stage. `chunk_size` must be at least one;
/// a chunk size of one passes values through unchanged.
pub fn reshuffle<P>(entropy: &mut Entropy, inner: P, chunk_size: usize) -> Result<Reshuffle<P>>
where
    P: Producer,
    P::Item: Clone,
{
    if chunk_size == 0 {
        return Err(Error::NonPositive {
            parameter: "chunk_size",
            value: 0,
        });
    }
    let mut stage = Reshuffle {
        inner,
        rng: entropy.fork(),
        chunk_size,
        buffer: Vec::with_capacity(chunk_size),
        cursor: 0,
    };
    stage.refill();
    Ok(stage)
}

impl<P> Reshuffle<P>
where
    P: Producer,
    P::Item: Clone,
{
    fn refill(&mut self) {
        self.buffer.clear();
        for _ in 0..self.chunk_size {
            self.buffer.push(self.inner.current().clone());
            self.inner.advance();
        }
        self.buffer.shuffle(&mut self.rng);
        self.cursor = 0;
        trace!("reshuffle refilled chunk of {}", self.chunk_size);
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl<P> Producer for Reshuffle<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = P::Item;

    fn current(&self) -> &P::Item {
        &self.buffer[self.cursor]
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor == self.chunk_size {
            self.refill();
        }
    }
}
