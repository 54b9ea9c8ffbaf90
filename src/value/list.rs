use std::slice;

use crate::error::{Error, Result};
use crate::Tag;

use super::Value;

/// A homogeneous NBT list. The element tag is stored once on the list rather
/// than per element, and is kept even when the list is empty.
///
/// ```
/// use nbtcodec::{List, Tag, Value};
///
/// let list = List::new(Tag::Int, vec![Value::from(1), Value::from(2)]).unwrap();
/// assert_eq!(list.element_tag(), Tag::Int);
///
/// // Mixing element types is rejected.
/// assert!(List::new(Tag::Int, vec![Value::from("nope")]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct List {
    element: Tag,
    items: Vec<Value>,
}

impl Default for List {
    fn default() -> Self {
        Self::empty(Tag::End)
    }
}

impl List {
    /// An empty list declaring the given element tag.
    pub fn empty(element: Tag) -> Self {
        Self {
            element,
            items: Vec::new(),
        }
    }

    /// A list of `items`, all of which must have the tag `element`.
    pub fn new(element: Tag, items: Vec<Value>) -> Result<Self> {
        if let Some(bad) = items.iter().find(|v| v.tag() != element) {
            return Err(Error::list_element(element, bad.tag()));
        }
        Ok(Self { element, items })
    }

    /// A list whose element tag is taken from the first item, or `TAG_End` if
    /// there are none.
    pub fn from_values(items: Vec<Value>) -> Result<Self> {
        let element = items.first().map(Value::tag).unwrap_or(Tag::End);
        Self::new(element, items)
    }

    /// Built by the decoder, which has already read every item as `element`.
    pub(crate) fn from_parts(element: Tag, items: Vec<Value>) -> Self {
        debug_assert!(items.iter().all(|v| v.tag() == element));
        Self { element, items }
    }

    pub fn element_tag(&self) -> Tag {
        self.element
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// Append a value. An empty `TAG_End` list adopts the tag of its first
    /// value, any other mismatch is an error.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        if self.items.is_empty() && self.element == Tag::End {
            self.element = value.tag();
        }
        if value.tag() != self.element {
            return Err(Error::list_element(self.element, value.tag()));
        }
        self.items.push(value);
        Ok(())
    }

    pub fn into_values(self) -> Vec<Value> {
        self.items
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
