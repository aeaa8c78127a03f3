//! Shape value objects and JSON helpers for the Quill exercises.
//!
//! # Scope
//!
//! - **Shapes** - [`Rectangle`] and [`Circle`] with areas derived from their
//!   current fields
//! - **JSON** - compact encoding of any serializable value, and decoding of
//!   JSON text into a declared shape so its behavior is available on the
//!   decoded value

/// JSON encoding and decoding helpers.
pub mod json;
/// Shape value objects.
pub mod shape;

pub use json::{JsonError, from_json_text, from_json_value, to_json_text};
pub use shape::{Circle, Rectangle, Shape};
