//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in screen coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect` with a top and bottom color
pub fn gradient_rect(rect: &Rect, top: [f32; 4], bottom: [f32; 4]) -> Vec<Vertex> {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    vec![
        Vertex::new(l, t, top),
        Vertex::new(r, t, top),
        Vertex::new(l, b, bottom),
        Vertex::new(l, b, bottom),
        Vertex::new(r, t, top),
        Vertex::new(r, b, bottom),
    ]
}

/// Solid rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    gradient_rect(rect, color, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Line segment as a quad of the given width.
///
/// Zero-length segments produce nothing.
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a1 = from + perp;
    let a2 = from - perp;
    let b1 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}
