//! Mathematical structs and functions.

use cgmath::{Angle, Deg, Point2, Vector2};

/// A 2D point
pub type Point2d = Point2<f64>;

/// A 2D vector
pub type Vector2d = Vector2<f64>;

/// Wraps a heading into the canonical (-180°, 180°] range.
///
/// Idempotent: normalizing an already-normalized heading returns it
/// unchanged.
pub fn normalize_heading(heading: Deg<f64>) -> Deg<f64> {
    heading.normalize_signed()
}

/// Calculates the point `distance` m ahead of `position` along `heading`.
///
/// # Parameters
/// * `position` - The current position
/// * `heading` - The current heading, clockwise from north
/// * `distance` - How far ahead to project, in m
pub fn forward_of(position: Point2d, heading: Deg<f64>, distance: f64) -> Point2d {
    let (sin, cos) = heading.sin_cos();
    position + Vector2d::new(sin, cos) * distance
}
