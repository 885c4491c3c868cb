#![cfg(feature = "xml")]

use anyhow::{Context, Result};
use metaview::tree::{Error, Value};

const OME: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<OME xmlns="http://www.openmicroscopy.org/Schemas/OME/2016-06" UUID="urn:uuid:0">
    <Instrument ID="Instrument:0">
        <Objective ID="Objective:0" NominalMagnification="40" LensNA="0.95"/>
    </Instrument>
    <Image ID="Image:0" Name="cells">
        <Pixels ID="Pixels:0" DimensionOrder="XYCZT" Type="uint16"
                SizeX="100" SizeY="200" SizeC="3" SizeZ="1" SizeT="1"
                PhysicalSizeX="0.1" PhysicalSizeXUnit="µm">
            <Channel ID="Channel:0:0" Name="DAPI"/>
            <Channel ID="Channel:0:1" Name="GFP"/>
            <Channel ID="Channel:0:2" Name="mCherry"/>
            <TiffData/>
        </Pixels>
    </Image>
    <StructuredAnnotations>
        <XMLAnnotation ID="Annotation:0">
            <Value>some note</Value>
        </XMLAnnotation>
    </StructuredAnnotations>
</OME>
"#;

#[test]
fn channel_names() -> Result<()> {
    let doc = metaview::from_document(OME)?;
    let root = doc.root();

    let pixels = root.attr("image")?.attr("pixels")?;
    assert_eq!(pixels.attr("size_c")?, Value::Integer(3));

    let channels = pixels.attr("channel")?;
    assert_eq!(channels.at(2)?.attr("name")?, Value::String("mCherry"));
    assert_eq!(
        channels.at(2)?.attr("name")?,
        root.get("image")?.get("pixels")?.get("channel")?.at(2)?.get("name")?
    );

    let channels = channels.as_sequence().context("channels")?;
    assert_eq!(
        channels.at(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    );
    Ok(())
}

#[test]
fn keys_follow_document_order() -> Result<()> {
    let doc = metaview::from_document(OME)?;
    let root = doc.root();

    assert!(root
        .keys()
        .eq(["uuid", "instrument", "image", "structured_annotations"]));

    let pixels = root.attr("image")?.attr("pixels")?;
    let pixels = pixels.as_mapping().context("pixels")?;

    assert!(pixels.keys().take(4).eq(["id", "dimension_order", "type", "size_x"]));
    assert!(pixels.keys().rev().take(2).eq(["tiff_data", "channel"]));
    Ok(())
}

#[test]
fn nested_values() -> Result<()> {
    let doc = metaview::from_document(OME)?;
    let root = doc.root();

    let objective = root.attr("instrument")?.attr("objective")?;
    assert_eq!(objective.attr("nominal_magnification")?, Value::Integer(40));
    assert_eq!(objective.attr("lens_na")?.as_f64(), Some(0.95));

    let annotation = root
        .attr("structured_annotations")?
        .attr("xml_annotation")?;
    assert_eq!(annotation.attr("value")?.as_str(), Some("some note"));

    let pixels = root.attr("image")?.attr("pixels")?;
    assert_eq!(pixels.attr("physical_size_x_unit")?.as_str(), Some("µm"));
    assert_eq!(pixels.attr("physical_size_x")?.as_f64(), Some(0.1));

    let tiff = pixels.attr("tiff_data")?.as_mapping().context("tiff data")?;
    assert!(tiff.is_empty());
    Ok(())
}

#[test]
fn misses() -> Result<()> {
    let doc = metaview::from_document(OME)?;
    let image = doc.root().attr("image")?;

    let error = image.attr("plane").err().context("expected a miss")?;
    assert_eq!(error.to_string(), "mapping has no attribute `plane`");

    let error = image.get("plane").err().context("expected a miss")?;
    assert_eq!(error.to_string(), "key `plane` not found");

    // The views are still usable afterwards.
    assert_eq!(image.attr("name")?, Value::String("cells"));
    Ok(())
}
