use anyhow::{Context, Result};

use crate::node::{Node, NodeMap};
use crate::tree::{Document, Error, Value};

fn planes() -> Document {
    let plane = |z: i64| NodeMap::from_iter([("the_z", z)]);

    let mut root = NodeMap::new();
    root.insert(
        "plane",
        Node::from(vec![plane(0), plane(1), plane(2)]),
    );
    root.insert("empty", Node::Sequence(Vec::new()));
    root.insert(
        "nested",
        Node::from(vec![Node::from(vec![1, 2]), Node::from(vec![3])]),
    );
    Document::new(root)
}

#[test]
fn bounds() -> Result<()> {
    let doc = planes();
    let planes = doc.root().get("plane")?.as_sequence().context("plane")?;

    assert_eq!(planes.len(), 3);
    assert_eq!(planes.at(2)?.get("the_z")?, Value::Integer(2));
    assert_eq!(
        planes.at(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    );
    assert_eq!(planes.get(3), None);
    assert!(planes.get(usize::MAX).is_none());
    Ok(())
}

#[test]
fn first_and_last() -> Result<()> {
    let doc = planes();
    let planes = doc.root().get("plane")?.as_sequence().context("plane")?;

    assert_eq!(planes.first().context("first")?.get("the_z")?, Value::Integer(0));
    assert_eq!(planes.last().context("last")?.get("the_z")?, Value::Integer(2));

    let empty = doc.root().get("empty")?.as_sequence().context("empty")?;
    assert!(empty.is_empty());
    assert_eq!(empty.first(), None);
    assert_eq!(empty.last(), None);
    assert_eq!(empty.at(0), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
    Ok(())
}

#[test]
fn iteration_restarts() -> Result<()> {
    let doc = planes();
    let planes = doc.root().get("plane")?.as_sequence().context("plane")?;

    let collect = || {
        planes
            .iter()
            .map(|p| p.get("the_z"))
            .collect::<Result<Vec<_>, _>>()
    };

    let first = collect()?;
    let second = collect()?;

    assert_eq!(first, [Value::Integer(0), Value::Integer(1), Value::Integer(2)]);
    assert_eq!(first, second);

    let mut count = 0;

    for plane in planes {
        assert!(matches!(plane, Value::Mapping(..)));
        count += 1;
    }

    assert_eq!(count, planes.len());
    assert_eq!(planes.iter().rev().next(), planes.last());
    Ok(())
}

#[test]
fn nested_sequences() -> Result<()> {
    let doc = planes();
    let nested = doc.root().get("nested")?;

    assert_eq!(nested.at(0)?.at(1)?, Value::Integer(2));
    assert_eq!(nested.at(1)?.at(0)?, Value::Integer(3));
    assert_eq!(nested.to_string(), "[[1, 2], [3]]");
    assert!(matches!(
        nested.at(1)?.at(1),
        Err(Error::IndexOutOfRange { index: 1, len: 1 })
    ));
    Ok(())
}

#[test]
fn equality_is_ordered() {
    let a = Document::new(NodeMap::from_iter([("s", vec![1, 2])]));
    let b = Document::new(NodeMap::from_iter([("s", vec![2, 1])]));
    let c = Document::new(NodeMap::from_iter([("s", vec![1, 2])]));

    assert_ne!(a, b);
    assert_eq!(a, c);
}
