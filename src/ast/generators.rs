use std::collections::HashMap;

use tracing::trace;

use crate::value::Value;

/// A node of the compiled output tree.
///
/// Generators are built by the parser and turned into [`Value`]s by the
/// evaluator. Evaluation borrows the tree, so one forest can be generated
/// several times with different substitutions.
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    /// Fixed scalar
    Value(Value),

    /// Placeholder looked up in the substitutions, `null` when unbound
    Var(String),

    /// Object with uniquely named fields
    Obj(Obj),

    /// Ordered list of elements
    Arr(Arr),
}

impl Generator {
    /// Combine `self` (already stored) with `other` (incoming).
    ///
    /// Two objects merge field by field. Every other pairing returns `other`.
    pub fn merge(self, other: Generator) -> Generator {
        match (self, other) {
            (Generator::Obj(left), Generator::Obj(right)) => Generator::Obj(left.merge(right)),
            (_, other) => other,
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Generator::Var(name.into())
    }

    pub fn as_obj(&self) -> Option<&Obj> {
        match self {
            Generator::Obj(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_arr(&self) -> Option<&Arr> {
        match self {
            Generator::Arr(arr) => Some(arr),
            _ => None,
        }
    }
}

impl From<Value> for Generator {
    fn from(value: Value) -> Self {
        Generator::Value(value)
    }
}

impl From<Obj> for Generator {
    fn from(obj: Obj) -> Self {
        Generator::Obj(obj)
    }
}

impl From<Arr> for Generator {
    fn from(arr: Arr) -> Self {
        Generator::Arr(arr)
    }
}

/// Object generator: field names are unique, order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Obj {
    fields: HashMap<String, Generator>,
}

impl Obj {
    pub fn new() -> Self {
        Obj::default()
    }

    /// Store `generator` under `field`, merging with any generator already
    /// stored there (existing is the receiver, incoming the argument).
    pub fn add(&mut self, field: impl Into<String>, generator: impl Into<Generator>) -> &mut Self {
        let field = field.into();
        let generator = generator.into();
        let merged = match self.fields.remove(&field) {
            Some(existing) => {
                trace!(field = %field, "merging into existing field");
                existing.merge(generator)
            }
            None => generator,
        };
        self.fields.insert(field, merged);
        self
    }

    /// Builder form of [`Obj::add`].
    pub fn with(mut self, field: impl Into<String>, generator: impl Into<Generator>) -> Self {
        self.add(field, generator);
        self
    }

    /// Replays the fields of `self` then those of `other` into a fresh
    /// object, so shared object-valued fields merge recursively and the
    /// right side wins every other conflict.
    pub fn merge(self, other: Obj) -> Obj {
        let mut merged = Obj::new();
        for (field, generator) in self.fields.into_iter().chain(other.fields) {
            merged.add(field, generator);
        }
        merged
    }

    pub fn get(&self, field: &str) -> Option<&Generator> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Generator)> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Array generator: insertion order is kept, duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arr {
    elements: Vec<Generator>,
}

impl Arr {
    pub fn new() -> Self {
        Arr::default()
    }

    pub fn push(&mut self, generator: impl Into<Generator>) -> &mut Self {
        self.elements.push(generator.into());
        self
    }

    pub fn elements(&self) -> &[Generator] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl FromIterator<Generator> for Arr {
    fn from_iter<I: IntoIterator<Item = Generator>>(iter: I) -> Self {
        Arr {
            elements: iter.into_iter().collect(),
        }
    }
}
