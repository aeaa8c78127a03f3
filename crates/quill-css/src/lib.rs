//! CSS selector building for the Quill exercises.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector Builder** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - Type, id, class, attribute, pseudo-class and pseudo-element parts
//!   - Part ordering and at-most-once validation for compound selectors
//!   - Complex selectors joined with combinators (descendant, `+`, `~`, `>`)
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Validation of identifiers and attribute expressions
//! - Namespaces and at-rules

/// CSS selector building per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

pub use selector::{
    Combinator, PartKind, SelectorBuilder, SelectorError, css_selector_builder,
};
