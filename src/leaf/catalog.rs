//! Catalog producers: hostile strings, accidental values and garbage.

use crate::combinators::{arrays, combine_catalog, ChooseFrom, Combine};
use crate::entropy::Entropy;
use crate::producer::{BoxedProducer, ProducerExt};

use super::numbers::{bools, floats, integers};
use super::text::{strings, strings_from, unicode_chars};
use super::value::Value;

const EVIL_STRINGS: &[&str] = &[
    "",
    " ",
    "\t",
    "\n",
    "\r\n",
    "\0",
    "null",
    "NULL",
    "undefined",
    "NaN",
    "Infinity",
    "-1",
    "0",
    "1e309",
    "true",
    "false",
    "%s%s%s%n",
    "{0}",
    "${PATH}",
    "'; DROP TABLE users; --",
    "\" OR \"1\"=\"1",
    "<script>alert(1)</script>",
    "../../../../etc/passwd",
    "\u{202E}reversed",
    "\u{200B}",
    "\u{FEFF}",
    "\u{1F4A9}",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}",
    "e\u{301}",
    "\u{FFFD}",
    "Ω≈ç√∫",
    "田中さんにあげて下さい",
    "مرحبا",
    "\\",
    "\\u0000",
];

/// Strings known to break parsers, renderers and query builders.
pub fn evil_strings(entropy: &mut Entropy) -> ChooseFrom<String> {
    let catalog = EVIL_STRINGS.iter().map(|s| s.to_string()).collect();
    ChooseFrom::from_catalog(entropy, catalog)
}

/// Values code tends to produce by accident: nulls, empties, zeros, NaN and
/// their stringly-typed lookalikes.
pub fn accidents(entropy: &mut Entropy) -> ChooseFrom<Value> {
    let catalog = vec![
        Value::Null,
        Value::Bool(false),
        Value::Int(0),
        Value::Int(-1),
        Value::Float(0.0),
        Value::Float(-0.0),
        Value::Float(f64::NAN),
        Value::Str(String::new()),
        Value::Str("0".to_string()),
        Value::Str("null".to_string()),
        Value::Str("undefined".to_string()),
        Value::Str("false".to_string()),
        Value::Str(" ".to_string()),
        Value::List(Vec::new()),
        Value::List(vec![Value::Null]),
    ];
    ChooseFrom::from_catalog(entropy, catalog)
}

/// Random scalars of every kind, as [`Value`]s.
pub fn garbage(entropy: &mut Entropy) -> Combine<BoxedProducer<Value>> {
    let unicode = unicode_chars(entropy);
    let families: Vec<BoxedProducer<Value>> = vec![
        integers(entropy).map(|v| Value::Int(*v)).boxed(),
        floats(entropy).map(|v| Value::Float(*v)).boxed(),
        bools(entropy).map(|v| Value::Bool(*v)).boxed(),
        strings(entropy, 32).map(|s| Value::Str(s.clone())).boxed(),
        strings_from(entropy, unicode, 16)
            .map(|s| Value::Str(s.clone()))
            .boxed(),
    ];
    combine_catalog(entropy, families)
}

/// Everything above plus short lists of garbage.
pub fn anything(entropy: &mut Entropy) -> Combine<BoxedProducer<Value>> {
    let elements = garbage(entropy);
    let lists = arrays(entropy, elements, 5).map(|items| Value::List(items.clone()));
    let sources: Vec<BoxedProducer<Value>> = vec![
        garbage(entropy).boxed(),
        accidents(entropy).boxed(),
        evil_strings(entropy).map(|s| Value::Str(s.clone())).boxed(),
        lists.boxed(),
    ];
    combine_catalog(entropy, sources)
}
