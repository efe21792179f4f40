//! Character and string producers.

use rand::Rng;

use crate::combinators::{arrays, Arrays};
use crate::entropy::Entropy;
use crate::error::{Error, Result};
use crate::producer::{Map, Producer, ProducerExt};

/// Uniform characters from an inclusive code point range. Code points that are
/// not valid `char`s (the surrogate block) are redrawn.
pub struct CharRange {
    lo: u32,
    hi: u32,
    rng: Entropy,
    value: char,
}

pub fn char_range(entropy: &mut Entropy, lo: char, hi: char) -> Result<CharRange> {
    if lo > hi {
        return Err(Error::invalid_range(lo.escape_debug(), hi.escape_debug()));
    }
    Ok(CharRange::unchecked(entropy, lo, hi))
}

impl Producer for CharRange {
    type Item = char;

    fn current(&self) -> &char {
        &self.value
    }

    fn advance(&mut self) {
        loop {
            let code = self.rng.gen_range(self.lo..=self.hi);
            if let Some(c) = char::from_u32(code) {
                self.value = c;
                return;
            }
        }
    }
}

/// Printable ASCII, space through tilde.
pub fn characters(entropy: &mut Entropy) -> CharRange {
    CharRange::unchecked(entropy, ' ', '~')
}

/// Any Unicode scalar value.
pub fn unicode_chars(entropy: &mut Entropy) -> CharRange {
    CharRange::unchecked(entropy, '\0', char::MAX)
}

impl CharRange {
    fn unchecked(entropy: &mut Entropy, lo: char, hi: char) -> CharRange {
        let mut range = CharRange {
            lo: lo as u32,
            hi: hi as u32,
            rng: entropy.fork(),
            value: lo,
        };
        range.advance();
        range
    }
}

/// Strings assembled from runs of a character producer.
pub type Strings<P> = Map<Arrays<P>, fn(&Vec<char>) -> String, String>;

fn collect_chars(chars: &Vec<char>) -> String {
    chars.iter().collect()
}

/// Strings of printable ASCII with length in `[0, max_len]`.
pub fn strings(entropy: &mut Entropy, max_len: usize) -> Strings<CharRange> {
    let chars = characters(entropy);
    strings_from(entropy, chars, max_len)
}

/// Strings whose characters come from `chars`, length in `[0, max_len]`.
pub fn strings_from<P>(entropy: &mut Entropy, chars: P, max_len: usize) -> Strings<P>
where
    P: Producer<Item = char>,
{
    arrays(entropy, chars, max_len).map(collect_chars as fn(&Vec<char>) -> String)
}
