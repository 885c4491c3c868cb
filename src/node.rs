//! The owned tree produced by a parsing engine.
//!
//! A [`Node`] is what a [`Parse`][crate::Parse] implementation hands over to
//! a [`Document`][crate::tree::Document]. It carries no laziness and no
//! wrapper types, it is just native mappings, sequences and scalars.

use std::vec;

/// A single node in a parsed tree.
///
/// # Examples
///
/// ```
/// use metaview::{Node, NodeMap};
///
/// let mut size = NodeMap::new();
/// size.insert("x", 100);
/// size.insert("y", 200.5);
///
/// let node = Node::from(size);
/// assert!(matches!(node, Node::Mapping(..)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A mapping from string keys to nodes.
    Mapping(NodeMap),
    /// An ordered sequence of nodes.
    Sequence(Vec<Node>),
    /// An integer scalar.
    Integer(i64),
    /// A floating-point scalar.
    Float(f64),
    /// A string scalar.
    String(String),
}

impl From<NodeMap> for Node {
    #[inline]
    fn from(value: NodeMap) -> Self {
        Node::Mapping(value)
    }
}

impl<T> From<Vec<T>> for Node
where
    Node: From<T>,
{
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Node::Sequence(value.into_iter().map(Node::from).collect())
    }
}

impl From<i64> for Node {
    #[inline]
    fn from(value: i64) -> Self {
        Node::Integer(value)
    }
}

impl From<i32> for Node {
    #[inline]
    fn from(value: i32) -> Self {
        Node::Integer(i64::from(value))
    }
}

impl From<u32> for Node {
    #[inline]
    fn from(value: u32) -> Self {
        Node::Integer(i64::from(value))
    }
}

impl From<f64> for Node {
    #[inline]
    fn from(value: f64) -> Self {
        Node::Float(value)
    }
}

impl From<f32> for Node {
    #[inline]
    fn from(value: f32) -> Self {
        Node::Float(f64::from(value))
    }
}

impl From<&str> for Node {
    #[inline]
    fn from(value: &str) -> Self {
        Node::String(value.to_owned())
    }
}

impl From<String> for Node {
    #[inline]
    fn from(value: String) -> Self {
        Node::String(value)
    }
}

/// An insertion ordered mapping with unique keys.
///
/// Inserting a key which already exists replaces its value but keeps its
/// original position.
///
/// # Examples
///
/// ```
/// use metaview::{Node, NodeMap};
///
/// let mut map = NodeMap::new();
/// map.insert("b", 1);
/// map.insert("a", 2);
/// map.insert("b", 3);
///
/// assert!(map.keys().eq(["b", "a"]));
/// assert_eq!(map.get("b"), Some(&Node::Integer(3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NodeMap {
    entries: Vec<(String, Node)>,
}

impl NodeMap {
    /// Construct a new empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Get the number of entries in the mapping.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if the mapping is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a node by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Get a node mutably by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Insert a node, returning the node it replaced if the key was already
    /// present.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Node>
    where
        K: Into<String>,
        V: Into<Node>,
    {
        let key = key.into();
        let value = value.into();

        if let Some(existing) = self.get_mut(&key) {
            return Some(core::mem::replace(existing, value));
        }

        self.entries.push((key, value));
        None
    }

    /// Insert a node, turning the existing value into a sequence if the key
    /// is already present.
    ///
    /// This is how repeated elements accumulate while a document is being
    /// parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use metaview::{Node, NodeMap};
    ///
    /// let mut map = NodeMap::new();
    /// map.append("channel", "red");
    /// map.append("channel", "green");
    /// map.append("channel", "blue");
    ///
    /// assert_eq!(map.get("channel"), Some(&Node::from(vec!["red", "green", "blue"])));
    /// ```
    pub fn append<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Node>,
    {
        let key = key.into();
        let value = value.into();

        let Some(existing) = self.get_mut(&key) else {
            self.entries.push((key, value));
            return;
        };

        match existing {
            Node::Sequence(items) => {
                items.push(value);
            }
            existing => {
                let first = core::mem::replace(existing, Node::Sequence(Vec::new()));
                *existing = Node::Sequence(vec![first, value]);
            }
        }
    }

    /// Remove a node by key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Node> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterate over the keys of the mapping in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over the entries of the mapping in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

/// Mappings compare equal when they hold the same keys with equal values,
/// regardless of order.
impl PartialEq for NodeMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).map_or(false, |o| o == value))
    }
}

impl<K, V> FromIterator<(K, V)> for NodeMap
where
    K: Into<String>,
    V: Into<Node>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = NodeMap::new();

        for (key, value) in iter {
            map.insert(key, value);
        }

        map
    }
}

impl<K, V> Extend<(K, V)> for NodeMap
where
    K: Into<String>,
    V: Into<Node>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for NodeMap {
    type Item = (String, Node);
    type IntoIter = vec::IntoIter<(String, Node)>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
