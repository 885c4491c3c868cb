use std::collections::hash_map::{self, HashMap};
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::mem;
use std::num::NonZeroUsize;

use twox_hash::xxh3::{Hash128, HasherExt};

use crate::node::{Node, NodeMap};
use crate::tree::raw::{Raw, RawMapping, RawMappingItem, RawSequence};

/// The unique hash of a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub(crate) struct StringId(u128);

impl fmt::Display for StringId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// An opaque identifier for a value inside of a [`Document`].
///
/// Is constructed through [`Mapping::id`] or [`Sequence::id`] and can be
/// converted into a [`Value`] again through [`Document::value`].
///
/// [`Mapping::id`]: crate::tree::Mapping::id
/// [`Sequence::id`]: crate::tree::Sequence::id
/// [`Value`]: crate::tree::Value
/// [`Document`]: crate::tree::Document
/// [`Document::value`]: crate::tree::Document::value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Id(NonZeroUsize);

impl Id {
    #[inline]
    fn get(self) -> usize {
        self.0.get().wrapping_sub(1)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.get())
    }
}

/// Arena holding every raw value of a document, along with interned strings.
#[derive(Clone, Default)]
pub(crate) struct Data {
    strings: HashMap<StringId, Box<str>>,
    slab: slab::Slab<Raw>,
}

impl Data {
    /// Get a string.
    #[inline]
    pub(crate) fn str(&self, id: StringId) -> &str {
        let Some(string) = self.strings.get(&id) else {
            panic!("missing string with id {id}");
        };

        string
    }

    /// Compute the identifier a string has, or would have, in the cache.
    #[inline]
    pub(crate) fn string_id(string: &str) -> StringId {
        let mut hasher = Hash128::default();
        string.as_bytes().hash(&mut hasher);
        StringId(hasher.finish_ext())
    }

    /// Insert a string into the string cache.
    pub(crate) fn insert_str(&mut self, string: &str) -> StringId {
        let id = Self::string_id(string);

        if let hash_map::Entry::Vacant(e) = self.strings.entry(id) {
            e.insert(string.into());
        }

        id
    }

    /// Drop interned strings which no stored value or key refers to anymore,
    /// returning how many were dropped.
    ///
    /// Strings are never freed when a value is dropped, since other values
    /// might share them.
    pub(crate) fn shrink_to_fit(&mut self) -> usize {
        let before = self.strings.len();
        let mut live = HashSet::with_capacity(self.strings.len());

        for (_, raw) in &self.slab {
            match raw {
                Raw::String(id) => {
                    live.insert(*id);
                }
                Raw::Mapping(mapping) => {
                    live.extend(mapping.items.iter().map(|item| item.key));
                }
                _ => {}
            }
        }

        self.strings.retain(|id, _| live.contains(id));
        self.strings.shrink_to_fit();
        self.slab.shrink_to_fit();
        before - self.strings.len()
    }

    /// Number of interned strings.
    #[cfg(test)]
    pub(crate) fn strings_len(&self) -> usize {
        self.strings.len()
    }

    /// Number of raw values currently stored.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slab.len()
    }

    #[inline]
    pub(crate) fn raw(&self, id: Id) -> &Raw {
        if let Some(raw) = self.slab.get(id.get()) {
            return raw;
        }

        panic!("expected raw at {id}")
    }

    #[inline]
    pub(crate) fn sequence(&self, id: Id) -> &RawSequence {
        if let Some(Raw::Sequence(raw)) = self.slab.get(id.get()) {
            return raw;
        }

        panic!("expected sequence at {id}")
    }

    #[inline]
    pub(crate) fn mapping(&self, id: Id) -> &RawMapping {
        if let Some(Raw::Mapping(raw)) = self.slab.get(id.get()) {
            return raw;
        }

        panic!("expected mapping at {id}")
    }

    #[inline]
    pub(crate) fn mapping_mut(&mut self, id: Id) -> &mut RawMapping {
        if let Some(Raw::Mapping(raw)) = self.slab.get_mut(id.get()) {
            return raw;
        }

        panic!("expected mapping at {id}")
    }

    /// Test if the given identifier refers to a live value in this arena.
    #[inline]
    pub(crate) fn contains(&self, id: Id) -> bool {
        self.slab.contains(id.get())
    }

    /// Insert a raw value and return its identifier.
    #[inline]
    pub(crate) fn insert(&mut self, raw: Raw) -> Id {
        let index = self.slab.insert(raw);
        let index = NonZeroUsize::new(index.wrapping_add(1)).expect("ran out of ids");
        Id(index)
    }

    /// Lower an owned node into the arena, recursively.
    pub(crate) fn insert_node(&mut self, node: Node) -> Id {
        let raw = self.lower(node);
        self.insert(raw)
    }

    /// Lower an owned node into a raw value, inserting its children into the
    /// arena.
    pub(crate) fn lower(&mut self, node: Node) -> Raw {
        match node {
            Node::Mapping(map) => Raw::Mapping(self.lower_mapping(map)),
            Node::Sequence(items) => {
                let items = items.into_iter().map(|item| self.insert_node(item)).collect();
                Raw::Sequence(RawSequence { items })
            }
            Node::Integer(value) => Raw::Integer(value),
            Node::Float(value) => Raw::Float(value),
            Node::String(value) => Raw::String(self.insert_str(&value)),
        }
    }

    /// Lower an owned mapping into the arena.
    pub(crate) fn insert_mapping(&mut self, map: NodeMap) -> Id {
        let raw = self.lower_mapping(map);
        self.insert(Raw::Mapping(raw))
    }

    fn lower_mapping(&mut self, map: NodeMap) -> RawMapping {
        let mut items = Vec::with_capacity(map.len());

        for (key, value) in map {
            let key = self.insert_str(&key);
            let value = self.insert_node(value);
            items.push(RawMappingItem { key, value });
        }

        RawMapping { items }
    }

    /// Drop a value recursively.
    pub(crate) fn drop(&mut self, id: Id) {
        let Some(raw) = self.slab.try_remove(id.get()) else {
            return;
        };

        self.drop_kind(raw);
    }

    /// Drop the children of a raw value recursively.
    fn drop_kind(&mut self, raw: Raw) {
        match raw {
            Raw::Mapping(raw) => {
                for item in raw.items {
                    self.drop(item.value);
                }
            }
            Raw::Sequence(raw) => {
                for item in raw.items {
                    self.drop(item);
                }
            }
            _ => {}
        }
    }

    /// Replace a raw value, dropping whatever it used to hold.
    pub(crate) fn replace(&mut self, id: Id, raw: Raw) {
        let Some(value) = self.slab.get_mut(id.get()) else {
            return;
        };

        let removed = mem::replace(value, raw);
        self.drop_kind(removed);
    }
}
