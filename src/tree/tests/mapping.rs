use anyhow::{Context, Result};

use crate::node::{Node, NodeMap};
use crate::tree::{Document, Value};

#[test]
fn key_and_attribute_paths_agree() -> Result<()> {
    let doc = super::image();
    let root = doc.root();

    let by_key = root.get("image")?.get("size")?.at(1)?;
    let by_attr = root.attr("image")?.attr("size")?.at(1)?;

    assert_eq!(by_key, Value::Integer(200));
    assert_eq!(by_key, by_attr);

    let mixed = root.get("image")?.attr("size")?.at(0)?;
    assert_eq!(mixed, Value::Integer(100));
    Ok(())
}

#[test]
fn views_are_rebuilt_on_access() -> Result<()> {
    let doc = super::image();
    let root = doc.root();

    let a = root.get("image")?.as_mapping().context("image")?;
    let b = root.attr("image")?.as_mapping().context("image")?;

    // Two separate views over the same stored mapping.
    assert_eq!(a.id(), b.id());
    assert_eq!(a, b);

    let a = a.get("size")?.as_sequence().context("size")?;
    let b = b.get("size")?.as_sequence().context("size")?;
    assert_eq!(a.id(), b.id());
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn scalars_pass_through() -> Result<()> {
    let mut root = NodeMap::new();
    root.insert("int", 7);
    root.insert("float", 0.25);
    root.insert("string", "x");

    let doc = Document::new(root);
    let root = doc.root();

    assert_eq!(root.get("int")?, Value::Integer(7));
    assert_eq!(root.attr("float")?, Value::Float(0.25));
    assert_eq!(root.get("string")?.as_str(), Some("x"));
    assert!(root.get("int")?.is_scalar());
    assert!(root.get("int")?.get("x").is_err());
    Ok(())
}

#[test]
fn keys_in_order() -> Result<()> {
    let mut root = NodeMap::new();
    root.insert("b", 1);
    root.insert("a", 2);
    root.insert("c", 3);
    root.insert("empty", NodeMap::new());

    let doc = Document::new(root);
    let root = doc.root();

    assert!(root.keys().eq(["b", "a", "c", "empty"]));
    assert_eq!(root.len(), 4);

    let empty = root.get("empty")?.as_mapping().context("empty")?;
    assert!(empty.is_empty());
    assert_eq!(empty.keys().next(), None);
    assert_eq!(empty.iter().len(), 0);

    let values = root.iter().map(|(_, v)| v).take(3).collect::<Vec<_>>();
    assert_eq!(
        values,
        [Value::Integer(1), Value::Integer(2), Value::Integer(3)]
    );

    let reversed = root.keys().rev().collect::<Vec<_>>();
    assert_eq!(reversed, ["empty", "c", "a", "b"]);
    Ok(())
}

#[test]
fn find_and_contains() {
    let doc = super::image();
    let root = doc.root();

    assert!(root.contains_key("image"));
    assert!(!root.contains_key("Image"));
    assert_eq!(root.find("name"), Some(Value::String("cells")));
    assert_eq!(root.find("missing"), None);
}

#[test]
fn equality_ignores_key_order() {
    let a = Document::new(NodeMap::from_iter([("x", 1), ("y", 2)]));
    let b = Document::new(NodeMap::from_iter([("y", 2), ("x", 1)]));
    let c = Document::new(NodeMap::from_iter([("x", 1), ("y", 3)]));
    let d = Document::new(NodeMap::from_iter([("x", 1)]));

    assert_eq!(a.root(), b.root());
    assert_ne!(a.root(), c.root());
    assert_ne!(a.root(), d.root());
    assert_ne!(d.root(), a.root());
    assert_eq!(a, b);
}

#[test]
fn integers_and_floats_differ() {
    let a = Document::new(NodeMap::from_iter([("x", Node::Integer(1))]));
    let b = Document::new(NodeMap::from_iter([("x", Node::Float(1.0))]));
    assert_ne!(a, b);
}

#[test]
fn display() -> Result<()> {
    let doc = super::image();
    let root = doc.root();

    assert_eq!(root.to_string(), "{image: {size: [100, 200]}, name: cells}");
    assert_eq!(root.get("image")?.get("size")?.to_string(), "[100, 200]");

    let doc = Document::new(NodeMap::from_iter([("x", 0.5), ("y", 2.0)]));
    assert_eq!(doc.root().to_string(), "{x: 0.5, y: 2.0}");
    assert_eq!(Document::new(NodeMap::new()).root().to_string(), "{}");
    Ok(())
}

#[test]
fn debug() {
    let doc = super::image();
    assert_eq!(
        format!("{:?}", doc.root()),
        r#"{"image": {"size": [100, 200]}, "name": "cells"}"#
    );
}

#[test]
fn to_node() {
    let doc = super::image();
    let node = doc.to_node();

    assert_eq!(node.get("name"), Some(&Node::from("cells")));
    assert_eq!(Document::new(node), doc);
}
