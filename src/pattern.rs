//! Polygon layout: where every repetition's vertices land.
//!
//! This module is pure arithmetic. It knows nothing about pixels or colors;
//! [`crate::render`] turns the layout into paint.
//!
//! Repetition `rep` (0-based) of a pattern is a regular polygon centered on the
//! surface with
//! - rotation offset `rep * rotation` degrees (cumulative, rep 0 unrotated),
//! - radius `size - rep * size / (2 * repetitions)`, shrinking linearly from
//!   `size` toward, but never reaching, `size / 2`.
//!
//! Expressions keep a fixed evaluation order (no fused multiply-add) so
//! vertex coordinates are reproducible bit for bit.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::f64::consts::PI;

use crate::params::RenderParameters;

/// A point in surface coordinates (x right, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One painted polygon of a pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub index: u32,
    pub rotation_radians: f64,
    pub radius: f64,
    /// `sides` vertices in path order. The path closes back to the first.
    pub vertices: Vec<Point>,
}

/// Center of a `width` x `height` surface.
#[must_use]
pub fn center(width: f64, height: f64) -> Point {
    Point::new(width / 2.0, height / 2.0)
}

/// Rotation offset of repetition `rep`, in radians.
#[must_use]
pub fn rep_rotation_radians(rep: u32, rotation_degrees: f64) -> f64 {
    (f64::from(rep) * rotation_degrees * PI) / 180.0
}

/// Radius of repetition `rep` out of `repetitions`.
#[must_use]
pub fn rep_radius(rep: u32, size: f64, repetitions: u32) -> f64 {
    size - f64::from(rep) * (size / (f64::from(repetitions) * 2.0))
}

/// Vertices of a regular polygon, vertex 0 at angle `rotation_radians` from
/// the positive x axis.
#[must_use]
pub fn polygon_vertices(center: Point, radius: f64, rotation_radians: f64, sides: u32) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let angle = rotation_radians + (f64::from(i) * 2.0 * PI) / f64::from(sides);
            Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}

/// Full layout of a pattern on a `width` x `height` surface, in paint order.
#[must_use]
pub fn layout(params: &RenderParameters, width: f64, height: f64) -> Vec<Ring> {
    let origin = center(width, height);
    (0..params.repetitions)
        .map(|rep| {
            let rotation_radians = rep_rotation_radians(rep, params.rotation);
            let radius = rep_radius(rep, params.size, params.repetitions);
            Ring {
                index: rep,
                rotation_radians,
                radius,
                vertices: polygon_vertices(origin, radius, rotation_radians, params.sides),
            }
        })
        .collect()
}
