//! C identifier derivation for interface object properties.

use crate::model::Property;
use log::trace;
use std::collections::HashMap;

/// Prefix inserted for properties that do not belong to an object type.
pub const GLOBAL_TOKEN: &str = "G";

/// Derive the base identifier of a property, before disambiguation.
///
/// `PID_<X>` becomes `PID_<type>_<X>` where `<type>` is `object_type` with the
/// `OT-` prefix removed, or `PID_G_<X>` for global properties. Every `%` is
/// spelled out as `PERCENTAGE` so the result is a valid C identifier.
pub fn base_name(name: &str, object_type: Option<&str>) -> String {
    let token = match object_type {
        Some(ot) => ot.replace("OT-", ""),
        None => GLOBAL_TOKEN.to_string(),
    };
    name.replace("PID_", &format!("PID_{}_", token))
        .replace('%', "PERCENTAGE")
}

/// Assigns unique identifiers to properties in a single linear pass.
///
/// A base name seen `n > 0` times before is emitted with a `_n` suffix. The
/// history lives in the namer, so every generator run starts from scratch.
#[derive(Debug, Default)]
pub struct PropertyNamer {
    history: HashMap<String, usize>,
}

impl PropertyNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the unique identifier for `property` and record its base name.
    pub fn assign(&mut self, property: &Property) -> String {
        let base = base_name(&property.name, property.object_type.as_deref());
        let seen = self.history.entry(base.clone()).or_insert(0);
        let name = if *seen > 0 {
            trace!("Disambiguating {} as {}_{}", base, base, seen);
            format!("{}_{}", base, seen)
        } else {
            base
        };
        *seen += 1;
        name
    }
}
