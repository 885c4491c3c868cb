use crate::tree::data::{Id, StringId};

/// A raw value stored in the document arena.
#[derive(Debug, Clone)]
pub(crate) enum Raw {
    /// A mapping.
    Mapping(RawMapping),
    /// A sequence.
    Sequence(RawSequence),
    /// An integer scalar.
    Integer(i64),
    /// A floating point scalar.
    Float(f64),
    /// An interned string scalar.
    String(StringId),
}

/// An item in a mapping.
#[derive(Debug, Clone)]
pub(crate) struct RawMappingItem {
    pub(crate) key: StringId,
    pub(crate) value: Id,
}

/// A mapping, keys are unique and kept in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawMapping {
    pub(crate) items: Vec<RawMappingItem>,
}

impl RawMapping {
    /// Find the value associated with the given interned key.
    #[inline]
    pub(crate) fn find(&self, key: StringId) -> Option<Id> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value)
    }
}

/// A sequence.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawSequence {
    pub(crate) items: Vec<Id>,
}
