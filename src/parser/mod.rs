//! KNX master data XML parser.
//!
//! Turns `knx_master.xml` into a [`MasterData`] value. Sub-modules:
//!
//! - [`source`] – File I/O abstraction (filesystem vs. in-memory)
//! - [`helpers`] – BOM handling and attribute accessors

pub mod helpers;
pub mod source;

pub use helpers::{optional_attribute, required_attribute, skip_byte_order_mark};
pub use source::*;

use crate::error::ExtractError;
use crate::model::*;
use anyhow::{Context, Result};
use camino::Utf8Path;
use log::debug;
use roxmltree::{Document, Node, ParsingOptions};

pub const OBJECT_TYPES_TAG: &str = "InterfaceObjectTypes";
pub const OBJECT_TYPE_TAG: &str = "InterfaceObjectType";
pub const PROPERTIES_TAG: &str = "InterfaceObjectProperties";
pub const PROPERTY_TAG: &str = "InterfaceObjectProperty";

/// Reads master data documents through a [`ContentSource`].
pub struct MasterDataParser<S: ContentSource> {
    source: S,
}

impl<S: ContentSource> MasterDataParser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Load `path`, strip the leading byte-order mark and extract all records.
    pub fn parse_file(&mut self, path: impl AsRef<Utf8Path>) -> Result<MasterData> {
        let path = path.as_ref();
        let text = self.source.read_to_string(path)?;
        parse_master_data(skip_byte_order_mark(&text))
            .with_context(|| format!("Failed to parse {}", path))
    }
}

/// Parse document text (already stripped of its BOM) into [`MasterData`].
pub fn parse_master_data(text: &str) -> Result<MasterData> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).context("Malformed XML")?;
    debug!("Document root is <{}>", doc.root_element().tag_name().name());
    Ok(extract_master_data(&doc)?)
}

/// Collect object types and properties from a parsed document, in document order.
pub fn extract_master_data(doc: &Document) -> Result<MasterData, ExtractError> {
    let object_types = entries(doc, OBJECT_TYPES_TAG, OBJECT_TYPE_TAG)?
        .map(parse_object_type)
        .collect::<Result<Vec<_>, _>>()?;
    let properties = entries(doc, PROPERTIES_TAG, PROPERTY_TAG)?
        .map(parse_property)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "Extracted {} object types and {} properties",
        object_types.len(),
        properties.len()
    );
    Ok(MasterData {
        object_types,
        properties,
    })
}

/// Direct `entry` children of the first `container` element in the document.
fn entries<'a, 'input>(
    doc: &'a Document<'input>,
    container: &'static str,
    entry: &'static str,
) -> Result<impl Iterator<Item = Node<'a, 'input>>, ExtractError> {
    let node = doc
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name(container))
        .ok_or(ExtractError::MissingElement { element: container })?;
    Ok(node
        .children()
        .filter(move |c| c.is_element() && c.has_tag_name(entry)))
}

fn parse_object_type(node: Node) -> Result<ObjectType, ExtractError> {
    Ok(ObjectType {
        name: required_attribute(node, "Name")?.to_string(),
        number: required_attribute(node, "Number")?.to_string(),
        text: optional_attribute(node, "Text").map(str::to_string),
    })
}

fn parse_property(node: Node) -> Result<Property, ExtractError> {
    Ok(Property {
        name: required_attribute(node, "Name")?.to_string(),
        object_type: optional_attribute(node, "ObjectType").map(str::to_string),
        number: required_attribute(node, "Number")?.to_string(),
        text: optional_attribute(node, "Text").map(str::to_string),
    })
}
