// ────────────────────────────────────────────────────────────────────────────
// Interface object types
// ────────────────────────────────────────────────────────────────────────────

/// One `<InterfaceObjectType>` entry of the KNX master data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectType {
    /// C identifier, e.g. `OT_DEVICE`.
    pub name: String,
    /// Literal `Number` attribute text, emitted verbatim as the enum value.
    pub number: String,
    /// Human readable description, emitted as a doc comment when present.
    pub text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Interface object properties
// ────────────────────────────────────────────────────────────────────────────

/// One `<InterfaceObjectProperty>` entry of the KNX master data.
///
/// `name` holds the raw `PID_…` identifier as read from the document. The
/// globally unique C identifier is derived later by
/// [`PropertyNamer`](crate::naming::PropertyNamer), since property numbers are
/// only unique per object type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    /// `OT-<n>` reference to the owning object type; `None` for global properties.
    pub object_type: Option<String>,
    pub number: String,
    pub text: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// MasterData
// ────────────────────────────────────────────────────────────────────────────

/// Everything extracted from `knx_master.xml`, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterData {
    pub object_types: Vec<ObjectType>,
    pub properties: Vec<Property>,
}
