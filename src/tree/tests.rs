mod mapping;
mod mutation;
mod sequence;

use crate::node::{Node, NodeMap};
use crate::tree::Document;

/// Build `{"image": {"size": [100, 200]}, "name": "cells"}`.
fn image() -> Document {
    let mut image = NodeMap::new();
    image.insert("size", Node::from(vec![100, 200]));

    let mut root = NodeMap::new();
    root.insert("image", image);
    root.insert("name", "cells");
    Document::new(root)
}
