use anyhow::{Context, Result};

use crate::node::{Node, NodeMap};
use crate::tree::{Document, Value};

#[test]
fn insert_replaces_in_place() -> Result<()> {
    let mut doc = super::image();
    let old = doc.root().get("image")?.get("size")?.as_sequence().context("size")?.id();

    doc.root_mut()
        .insert("image", NodeMap::from_iter([("width", 10)]));

    // The replaced subtree is gone from the document.
    assert!(doc.value(old).is_none());

    doc.root_mut().insert_i64("count", 2);

    let root = doc.root();
    assert!(root.keys().eq(["image", "name", "count"]));
    assert_eq!(root.get("image")?.get("width")?, Value::Integer(10));
    assert!(root.get("image")?.get("size").is_err());
    Ok(())
}

#[test]
fn nested_mutation() -> Result<()> {
    let mut doc = super::image();

    {
        let mut root = doc.root_mut();
        let mut image = root.get_mut("image").context("image")?;
        image.insert_f64("scale", 0.5);
        image.insert_str("unit", "µm");
        assert_eq!(image.as_ref().len(), 3);
    }

    let image = doc.root().attr("image")?;
    assert_eq!(image.attr("scale")?, Value::Float(0.5));
    assert_eq!(image.attr("unit")?, Value::String("µm"));

    // Only mappings can be borrowed mutably.
    assert!(doc.root_mut().get_mut("name").is_none());
    assert!(doc.root_mut().get_mut("missing").is_none());
    Ok(())
}

#[test]
fn get_into_mut() -> Result<()> {
    let mut doc = super::image();

    let image = doc
        .root_mut()
        .get_into_mut("image")
        .context("image")?
        .into_ref();

    assert!(image.keys().eq(["size"]));
    Ok(())
}

#[test]
fn update() -> Result<()> {
    let mut doc = Document::new(NodeMap::new());
    doc.root_mut()
        .update([("a", Node::from(1)), ("b", Node::from("two")), ("a", Node::from(3))]);

    let root = doc.root();
    assert!(root.keys().eq(["a", "b"]));
    assert_eq!(root.get("a")?, Value::Integer(3));
    assert_eq!(root.get("b")?, Value::String("two"));
    Ok(())
}

#[test]
fn remove_and_clear() -> Result<()> {
    let mut doc = super::image();
    let image = doc.root().get("image")?.as_mapping().context("image")?.id();

    assert!(doc.root_mut().remove("image"));
    assert!(!doc.root_mut().remove("image"));
    assert!(doc.value(image).is_none());
    assert!(doc.root().keys().eq(["name"]));

    doc.root_mut().clear();
    assert!(doc.root().is_empty());
    assert!(doc.root().get("name").is_err());
    Ok(())
}

#[test]
fn clones_are_independent() -> Result<()> {
    let a = super::image();
    let mut b = a.clone();

    b.root_mut().insert_str("name", "other");

    assert_eq!(a.root().get("name")?, Value::String("cells"));
    assert_eq!(b.root().get("name")?, Value::String("other"));
    Ok(())
}

#[test]
fn shrink_releases_replaced_strings() -> Result<()> {
    let mut doc = super::image();
    let size = doc.root().get("image")?.get("size")?.as_sequence().context("size")?.id();
    let strings = doc.strings_len();

    for n in 0..32 {
        doc.root_mut().insert_str("name", &format!("image {n}"));
    }

    // Equal strings are shared, distinct ones stay until the document shrinks.
    doc.root_mut().insert_str("name", "image 31");
    assert_eq!(doc.strings_len(), strings + 32);

    doc.shrink_to_fit();
    assert_eq!(doc.strings_len(), strings);

    assert_eq!(doc.root().get("name")?, Value::String("image 31"));
    assert!(doc.root().keys().eq(["image", "name"]));
    assert!(doc.value(size).is_some());
    assert_eq!(doc.root().get("image")?.get("size")?.at(1)?, Value::Integer(200));
    Ok(())
}
