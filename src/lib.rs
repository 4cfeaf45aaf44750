//! KNX property type header generator.
//!
//! Reads the KNX master data (`knx_master.xml`) and renders the interface
//! object types and interface object properties as two C enums.
//!
//! The binary `knx-property-types` writes the header to standard output, e.g.
//! `knx-property-types knx_master.xml > property_types.h`.

pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod parser;

use anyhow::Result;
use camino::Utf8Path;
use generator::HeaderConfig;
use parser::{FsSource, MasterDataParser};

/// Run the whole pipeline on a file and return the rendered header.
///
/// Nothing is written anywhere; every call starts with fresh name history.
pub fn generate_property_types(
    path: impl AsRef<Utf8Path>,
    config: &HeaderConfig,
) -> Result<String> {
    let data = MasterDataParser::new(FsSource).parse_file(path)?;
    Ok(generator::generate_header(&data, config))
}
