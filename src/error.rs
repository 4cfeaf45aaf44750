use thiserror::Error;

/// Structural problems found while extracting records from the master data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// A container element (e.g. `<InterfaceObjectTypes>`) does not exist.
    #[error("No <{element}> element in document")]
    MissingElement { element: &'static str },

    /// A required attribute is absent on an entry element.
    #[error("<{element}> at {position} has no '{attribute}' attribute")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
        position: String,
    },
}
