//! Result sequences.
//!
//! A path or filter step may yield any number of results. Those results are
//! collected in a [`Sequence`], which differs from a plain [`Value::Array`]
//! literal in that a single-element sequence stands for its element unless
//! it is flagged with `keep_singleton`.

use crate::value::Value;
use std::ops::Index;

/// Ordered evaluation results plus the flags the evaluator threads through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    elements: Vec<Value>,
    /// A query-result sequence rather than an array that happens to share
    /// this container.
    pub sequence: bool,
    /// The top-level result wrapper.
    pub outer_wrapper: bool,
    /// Elements are binding tuples, not user-visible values.
    pub tuple_stream: bool,
    /// Do not collapse when the length is 1.
    pub keep_singleton: bool,
    /// Built by prepending.
    pub cons: bool,
}

impl Sequence {
    /// A container with every flag unset. It is not a query sequence; use
    /// [`create_sequence`] for that.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence with `cons` set, holding `head` as its first element.
    pub fn cons(head: Value) -> Self {
        Sequence {
            elements: vec![head],
            sequence: true,
            cons: true,
            ..Self::default()
        }
    }

    pub fn with_keep_singleton(mut self, keep_singleton: bool) -> Self {
        self.keep_singleton = keep_singleton;
        self
    }

    pub fn with_outer_wrapper(mut self, outer_wrapper: bool) -> Self {
        self.outer_wrapper = outer_wrapper;
        self
    }

    pub fn with_tuple_stream(mut self, tuple_stream: bool) -> Self {
        self.tuple_stream = tuple_stream;
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, value: Value) {
        self.elements.push(value);
    }

    /// Adds a step result: nested sequences are flattened in order, anything
    /// else (including plain arrays) is pushed as one element.
    pub fn append(&mut self, value: Value) {
        match value {
            Value::Sequence(inner) => self.elements.extend(inner.elements),
            other => self.elements.push(other),
        }
    }

    pub fn first(&self) -> Option<&Value> {
        self.elements.first()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Value> {
        self.elements.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    /// Applies singleton collapse.
    ///
    /// Empty yields `None`; one element yields that element unless
    /// `keep_singleton` is set; anything else stays a sequence.
    pub fn collapse(mut self) -> Option<Value> {
        match self.elements.len() {
            0 => None,
            1 if !self.keep_singleton => self.elements.pop(),
            _ => Some(Value::Sequence(self)),
        }
    }

    /// Drops sequence semantics and returns the elements as a plain array.
    pub fn into_array(self) -> Value {
        Value::Array(self.elements)
    }
}

impl Index<usize> for Sequence {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.elements[index]
    }
}

impl IntoIterator for Sequence {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<'a> IntoIterator for &'a mut Sequence {
    type Item = &'a mut Value;
    type IntoIter = std::slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter_mut()
    }
}

/// Collects into a flagless container.
impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence {
            elements: iter.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl Extend<Value> for Sequence {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

/// Creates a query sequence, optionally seeded with `el`.
///
/// A plain array of exactly one element is unwrapped on the way in; every
/// other value, arrays of any other length included, becomes the single
/// element as-is.
pub fn create_sequence(el: Option<Value>) -> Sequence {
    let mut sequence = Sequence {
        sequence: true,
        ..Sequence::default()
    };
    match el {
        None => {}
        Some(Value::Array(mut a)) if a.len() == 1 => sequence.elements.extend(a.pop()),
        Some(other) => sequence.elements.push(other),
    }
    sequence
}

/// True only for a [`Value::Sequence`] whose `sequence` flag is set.
pub fn is_sequence(value: &Value) -> bool {
    matches!(value, Value::Sequence(s) if s.sequence)
}
