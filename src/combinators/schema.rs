use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::producer::Producer;

/// Field-wise structural composition.
///
/// Each step yields a record holding the current value of every field's
/// producer, in declaration order, then advances every field producer once.
pub struct ArraySchema<P: Producer> {
    fields: IndexMap<String, P>,
    value: IndexMap<String, P::Item>,
}

/// Build an [`ArraySchema`] from `(name, producer)` pairs. Declaration order
/// is kept; repeating a field name is an error.
pub fn array_schema<P, K, I>(fields: I) -> Result<ArraySchema<P>>
where
    P: Producer,
    P::Item: Clone,
    K: Into<String>,
    I: IntoIterator<Item = (K, P)>,
{
    let mut map = IndexMap::new();
    for (name, producer) in fields {
        let name = name.into();
        if map.contains_key(&name) {
            return Err(Error::DuplicateField(name));
        }
        map.insert(name, producer);
    }
    let mut schema = ArraySchema {
        fields: map,
        value: IndexMap::new(),
    };
    schema.snapshot();
    Ok(schema)
}

impl<P> ArraySchema<P>
where
    P: Producer,
    P::Item: Clone,
{
    fn snapshot(&mut self) {
        self.value = self
            .fields
            .iter_mut()
            .map(|(name, producer)| {
                let value = producer.current().clone();
                producer.advance();
                (name.clone(), value)
            })
            .collect();
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl<P> Producer for ArraySchema<P>
where
    P: Producer,
    P::Item: Clone,
{
    type Item = IndexMap<String, P::Item>;

    fn current(&self) -> &Self::Item {
        &self.value
    }

    fn advance(&mut self) {
        self.snapshot();
    }
}
