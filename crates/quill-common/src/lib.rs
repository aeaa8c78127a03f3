//! Common utilities for the Quill exercises.
//!
//! This crate provides shared infrastructure used by all Quill components:
//! - **Warning System** - colored terminal output for suspicious input

pub mod warning;
