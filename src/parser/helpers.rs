//! Attribute access and BOM handling for the master data XML.

use crate::error::ExtractError;
use roxmltree::Node;

/// Drop the first character of the document text.
///
/// `knx_master.xml` ships with a UTF-8 byte-order marker that the XML parser
/// refuses. The character is discarded whatever it is, matching how the file
/// has always been read.
pub fn skip_byte_order_mark(text: &str) -> &str {
    let mut chars = text.chars();
    chars.next();
    chars.as_str()
}

/// Attribute that may legitimately be absent (`Text`, `ObjectType`).
pub fn optional_attribute<'a>(node: Node<'a, '_>, attribute: &str) -> Option<&'a str> {
    node.attribute(attribute)
}

/// Attribute every entry is expected to carry (`Name`, `Number`).
pub fn required_attribute<'a>(
    node: Node<'a, '_>,
    attribute: &'static str,
) -> Result<&'a str, ExtractError> {
    node.attribute(attribute)
        .ok_or_else(|| ExtractError::MissingAttribute {
            element: node.tag_name().name().to_string(),
            attribute,
            position: node.document().text_pos_at(node.range().start).to_string(),
        })
}
