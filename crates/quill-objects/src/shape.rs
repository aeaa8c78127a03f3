//! Plain shape values with derived areas.
//!
//! Areas are never cached: they are recomputed from the public fields on
//! every call, so mutating a field is reflected immediately.

use serde::{Deserialize, Serialize};

/// Behavior shared by every shape.
pub trait Shape {
    /// Surface area in square units.
    fn area(&self) -> f64;
}

/// An axis-aligned rectangle.
///
/// Serializes as `{"width":..,"height":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        Self::area(self)
    }
}

/// A circle, serialized as `{"radius":..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Distance from center to edge.
    pub radius: f64,
}

impl Circle {
    /// Create a circle.
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// `π * radius²`
    #[must_use]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        Self::area(self)
    }
}
