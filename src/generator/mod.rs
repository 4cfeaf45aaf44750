//! Header generation from the parsed master data.
//!
//! - [`c_header`] – Render the object type and property enums as a C header.

pub mod c_header;

pub use c_header::{HeaderConfig, generate_header};
