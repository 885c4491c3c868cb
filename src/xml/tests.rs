use anyhow::{Context, Result};

use crate::node::{Node, NodeMap};
use crate::parse::Parse;
use crate::tree::{Document, Value};
use crate::xml::{Error, KeyStyle, Options, Parser};

const OME: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OME xmlns="http://www.openmicroscopy.org/Schemas/OME/2016-06"
     xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <Image ID="Image:0" Name="cells">
        <AcquisitionDate>2023-05-04T10:00:00</AcquisitionDate>
        <Pixels ID="Pixels:0" SizeX="512" SizeY="256" PhysicalSizeX="0.65">
            <Channel ID="Channel:0:0" Name="DAPI"/>
            <Channel ID="Channel:0:1" Name="GFP"/>
            <Channel ID="Channel:0:2" Name="mCherry"/>
            <Plane TheZ="0" DeltaT="0.5"/>
        </Pixels>
    </Image>
</OME>
"#;

#[test]
fn ome_document() -> Result<()> {
    let doc = Document::from_xml(OME)?;
    let root = doc.root();

    assert!(root.keys().eq(["image"]));

    let image = root.attr("image")?;
    assert_eq!(image.attr("id")?, Value::String("Image:0"));
    assert_eq!(
        image.attr("acquisition_date")?,
        Value::String("2023-05-04T10:00:00")
    );

    let pixels = image.attr("pixels")?;
    assert_eq!(pixels.attr("size_x")?, Value::Integer(512));
    assert_eq!(pixels.attr("size_y")?, Value::Integer(256));
    assert_eq!(pixels.attr("physical_size_x")?, Value::Float(0.65));

    let channels = pixels
        .attr("channel")?
        .as_sequence()
        .context("expected channels")?;

    assert_eq!(channels.len(), 3);

    let names = channels
        .iter()
        .map(|c| c.attr("name"))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(
        names,
        [
            Value::String("DAPI"),
            Value::String("GFP"),
            Value::String("mCherry")
        ]
    );

    // A single element stays a mapping unless asked otherwise.
    assert!(matches!(pixels.attr("plane")?, Value::Mapping(..)));
    Ok(())
}

#[test]
fn forced_sequence() -> Result<()> {
    let parser = Parser::with_options(Options::new().sequence("plane"));
    let doc = Document::parse_with(&parser, OME)?;

    let planes = doc
        .root()
        .attr("image")?
        .attr("pixels")?
        .attr("plane")?
        .as_sequence()
        .context("expected planes")?;

    assert_eq!(planes.len(), 1);
    assert_eq!(planes.at(0)?.attr("delta_t")?, Value::Float(0.5));
    Ok(())
}

#[test]
fn forced_sequence_keeps_accumulating() -> Result<()> {
    let parser = Parser::with_options(Options::new().sequence("channel"));
    let root = parser.parse(r#"<Pixels><Channel Name="a"/><Channel Name="b"/></Pixels>"#)?;

    let Some(Node::Sequence(channels)) = root.get("channel") else {
        anyhow::bail!("expected a sequence of channels");
    };

    assert_eq!(channels.len(), 2);
    Ok(())
}

#[test]
fn mixed_content() -> Result<()> {
    let root = Parser::new()
        .parse(r#"<Annotation ID="Annotation:0">a <![CDATA[<note>]]> here</Annotation>"#)?;

    assert_eq!(root.get("id"), Some(&Node::from("Annotation:0")));
    assert_eq!(root.get("value"), Some(&Node::from("a <note> here")));
    Ok(())
}

#[test]
fn inner_whitespace_is_kept() -> Result<()> {
    let root = Parser::new().parse("<Description Lang=\"en\">\n    hello <b/> big world\n</Description>")?;

    assert_eq!(root.get("value"), Some(&Node::from("hello  big world")));
    assert_eq!(root.get("b"), Some(&Node::Mapping(NodeMap::new())));

    let doc = Document::from_xml("<Image><Description>  two   spaces  </Description></Image>")?;
    assert_eq!(
        doc.root().attr("description")?,
        Value::String("two   spaces")
    );
    Ok(())
}

#[test]
fn text_key_does_not_replace_attribute() -> Result<()> {
    let root = Parser::new().parse(r#"<MapAnnotation Value="attr">text</MapAnnotation>"#)?;

    assert_eq!(
        root.get("value"),
        Some(&Node::from(vec![Node::from("attr"), Node::from("text")]))
    );

    let parser = Parser::with_options(Options::new().text_key("name"));
    let doc = Document::parse_with(&parser, r#"<Channel Name="DAPI">stain</Channel>"#)?;
    let names = doc.root().attr("name")?;

    assert_eq!(names.at(0)?, Value::String("DAPI"));
    assert_eq!(names.at(1)?, Value::String("stain"));
    Ok(())
}

#[test]
fn numeric_looking_names_stay_strings() -> Result<()> {
    let doc = Document::from_xml(
        r#"
        <Pixels SizeX="512">
            <Channel Name="007"/>
            <Channel Name="1e3"/>
            <Channel Name="12345678901234567890123"/>
        </Pixels>
        "#,
    )?;

    let root = doc.root();
    assert_eq!(root.attr("size_x")?, Value::Integer(512));

    let names = root
        .attr("channel")?
        .as_sequence()
        .context("expected channels")?
        .iter()
        .map(|c| c.attr("name"))
        .collect::<Result<Vec<_>, _>>()?;

    assert_eq!(
        names,
        [
            Value::String("007"),
            Value::String("1e3"),
            Value::String("12345678901234567890123")
        ]
    );
    Ok(())
}

#[test]
fn text_only_elements_are_scalars() -> Result<()> {
    let root = Parser::new().parse(
        r#"
        <Instrument>
            <Description>wide &amp; field</Description>
            <Magnification>40</Magnification>
        </Instrument>
        "#,
    )?;

    assert_eq!(root.get("description"), Some(&Node::from("wide & field")));
    assert_eq!(root.get("magnification"), Some(&Node::Integer(40)));
    Ok(())
}

#[test]
fn empty_elements() -> Result<()> {
    let doc = Document::from_xml("<Image><Pixels/><Plane></Plane></Image>")?;
    let root = doc.root();

    for key in ["pixels", "plane"] {
        let mapping = root.attr(key)?.as_mapping().context("expected mapping")?;
        assert!(mapping.is_empty());
        assert_eq!(mapping.keys().count(), 0);
    }

    let doc = Document::from_xml("<OME/>")?;
    assert!(doc.root().is_empty());
    Ok(())
}

#[test]
fn scalar_root() -> Result<()> {
    let doc = Document::from_xml("<Name>cells</Name>")?;
    assert!(doc.root().keys().eq(["name"]));
    assert_eq!(doc.root().get("name")?, Value::String("cells"));
    Ok(())
}

#[test]
fn keep_root() -> Result<()> {
    let parser = Parser::with_options(Options::new().unwrap_root(false));
    let doc = Document::parse_with(&parser, OME)?;

    assert!(doc.root().keys().eq(["ome"]));
    assert_eq!(
        doc.root().get("ome")?.get("image")?.get("name")?,
        Value::String("cells")
    );
    Ok(())
}

#[test]
fn namespaces() -> Result<()> {
    let root = Parser::new().parse(
        r#"<ome:OME xmlns:ome="urn:ome" xmlns:xsi="urn:xsi" xsi:schemaLocation="urn:ome ome.xsd"><ome:Image ome:Name="cells"/></ome:OME>"#,
    )?;

    let mut expected = NodeMap::new();
    expected.insert("schema_location", "urn:ome ome.xsd");
    expected.insert(
        "image",
        NodeMap::from_iter([(String::from("name"), Node::from("cells"))]),
    );

    assert_eq!(root, expected);
    Ok(())
}

#[test]
fn verbatim_keys() -> Result<()> {
    let parser = Parser::with_options(Options::new().key_style(KeyStyle::Verbatim));
    let doc = Document::parse_with(&parser, OME)?;

    let pixels = doc.root().attr("Image")?.attr("Pixels")?;
    assert_eq!(pixels.attr("PhysicalSizeX")?, Value::Float(0.65));
    assert!(pixels.attr("physical_size_x").is_err());
    Ok(())
}

#[test]
fn strings_only() -> Result<()> {
    let parser = Parser::with_options(Options::new().infer_scalars(false));
    let doc = Document::parse_with(&parser, OME)?;

    let pixels = doc.root().attr("image")?.attr("pixels")?;
    assert_eq!(pixels.attr("size_x")?, Value::String("512"));
    assert_eq!(pixels.attr("physical_size_x")?, Value::String("0.65"));
    Ok(())
}

#[test]
fn repeated_attribute_like_keys() -> Result<()> {
    // An attribute and a child element mapping to the same key accumulate.
    let root = Parser::new().parse(r#"<Image Name="a"><Name>b</Name></Image>"#)?;

    assert_eq!(
        root.get("name"),
        Some(&Node::from(vec![Node::from("a"), Node::from("b")]))
    );
    Ok(())
}

#[test]
fn errors() {
    let parser = Parser::new();

    assert!(matches!(parser.parse(""), Err(Error::NoRoot)));
    assert!(matches!(
        parser.parse("<?xml version=\"1.0\"?>"),
        Err(Error::NoRoot)
    ));
    assert!(matches!(
        parser.parse("<Image/><Image/>"),
        Err(Error::MultipleRoots { name }) if name == "Image"
    ));
    assert!(matches!(
        parser.parse("<OME><Image>"),
        Err(Error::Unclosed { name }) if name == "Image"
    ));
    assert!(matches!(
        parser.parse("<Image></Pixels>"),
        Err(Error::Xml(..))
    ));
    assert!(parser.parse(r#"<Image Name="a" Name="b"/>"#).is_err());
}

#[test]
fn parse_errors_propagate() {
    assert!(matches!(
        Document::from_xml("<OME><Image>"),
        Err(Error::Unclosed { .. })
    ));
    assert!(matches!(
        crate::from_document("<Image></Pixels>"),
        Err(Error::Xml(..))
    ));
    assert!("<Image/>".parse::<Document>().is_ok());
}

#[test]
fn reparse_is_independent() -> Result<()> {
    let a = crate::from_document(OME)?;
    let mut b = crate::from_document(OME)?;
    assert_eq!(a, b);

    b.root_mut().insert_str("extra", "value");
    assert_ne!(a, b);
    assert!(!a.root().contains_key("extra"));
    Ok(())
}
