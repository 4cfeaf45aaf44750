//! Generate the `property_types.h` C header from [`MasterData`].
//!
//! The layout is fixed: a banner, an include guard, a C++ linkage guard and
//! two anonymous enums. Entries keep document order and numbers are copied
//! verbatim.

use crate::model::*;
use crate::naming::PropertyNamer;

/// Knobs for the generated header. The defaults reproduce the historical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Macro used for the `#ifndef` include guard.
    pub include_guard: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            include_guard: "PROPERTY_TYPES_H".to_string(),
        }
    }
}

/// Render the complete header text for `data`.
pub fn generate_header(data: &MasterData, config: &HeaderConfig) -> String {
    let mut out = String::with_capacity(64 * (data.object_types.len() + data.properties.len()));
    let guard = &config.include_guard;

    out.push_str("/* This is an auto-generated file. Modifications will be overwritten. */\n");
    out.push('\n');
    out.push_str(&format!("#ifndef {}\n", guard));
    out.push_str(&format!("#define {}\n", guard));
    out.push('\n');
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("extern \"C\" {\n");
    out.push_str("#endif\n");
    out.push('\n');

    write_enum_open(&mut out, "Object types");
    for object_type in &data.object_types {
        write_entry(
            &mut out,
            object_type.text.as_deref(),
            &object_type.name,
            &object_type.number,
        );
    }
    write_enum_close(&mut out);

    write_enum_open(&mut out, "Property types");
    let mut namer = PropertyNamer::new();
    for property in &data.properties {
        let name = namer.assign(property);
        write_entry(&mut out, property.text.as_deref(), &name, &property.number);
    }
    write_enum_close(&mut out);

    out.push_str("#ifdef __cplusplus\n");
    out.push_str("}\n");
    out.push_str("#endif\n");
    out.push('\n');
    out.push_str(&format!("#endif /* {} */\n", guard));
    out.push('\n');
    out
}

fn write_enum_open(out: &mut String, brief: &str) {
    out.push_str("/**\n");
    out.push_str(&format!(" * @brief {}\n", brief));
    out.push_str(" */\n");
    out.push_str("enum {\n");
}

fn write_enum_close(out: &mut String) {
    out.push_str("};\n");
    out.push('\n');
}

fn write_entry(out: &mut String, text: Option<&str>, name: &str, number: &str) {
    if let Some(text) = text {
        out.push_str(&format!("    /**< {} */\n", text));
    }
    out.push_str(&format!("    {} = {},\n", name, number));
}
