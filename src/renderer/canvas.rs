//! Triangle-list canvas
//!
//! Collects a frame's draw calls as vertices ready for upload.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use super::{Canvas, ImageKind, shapes};
use crate::sim::Rect;

/// Segments used for circles
const CIRCLE_SEGMENTS: u32 = 32;
/// Line thickness in screen units
const LINE_WIDTH: f32 = 1.0;

/// Canvas that tessellates into a triangle list
#[derive(Debug, Clone)]
pub struct VertexCanvas {
    vertices: Vec<Vertex>,
    clear_color: [f32; 4],
}

impl Default for VertexCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexCanvas {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            clear_color: colors::BACKGROUND,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    /// Drop all geometry, keeping the allocation for the next frame
    pub fn reset(&mut self) {
        self.vertices.clear();
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

impl Canvas for VertexCanvas {
    fn fill(&mut self, color: [f32; 4]) {
        // The background is the render pass clear, not geometry
        self.vertices.clear();
        self.clear_color = color;
    }

    fn filled_rect(&mut self, rect: &Rect, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(rect, color));
    }

    fn filled_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]) {
        self.vertices
            .extend(shapes::line(from, to, LINE_WIDTH, color));
    }

    fn image(&mut self, image: ImageKind, rect: &Rect) {
        let verts = match image {
            ImageKind::Wall => shapes::rect(rect, colors::WALL_STRIP),
            ImageKind::Floor => shapes::gradient_rect(rect, colors::FLOOR_FAR, colors::FLOOR_NEAR),
        };
        self.vertices.extend(verts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_resets_geometry() {
        let mut canvas = VertexCanvas::new();
        canvas.filled_rect(&Rect::new(0.0, 0.0, 1.0, 1.0), colors::WALL);
        assert_eq!(canvas.triangle_count(), 2);

        canvas.fill([0.0, 0.0, 0.0, 1.0]);
        assert!(canvas.vertices().is_empty());
        assert_eq!(canvas.clear_color(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_image_strips() {
        let mut canvas = VertexCanvas::new();
        canvas.image(ImageKind::Wall, &Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(canvas.vertices().iter().all(|v| v.color == colors::WALL_STRIP));

        canvas.reset();
        canvas.image(ImageKind::Floor, &Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(canvas.vertices().len(), 6);
        assert!(canvas.vertices().iter().any(|v| v.color == colors::FLOOR_NEAR));
    }

    #[test]
    fn test_circle_and_line() {
        let mut canvas = VertexCanvas::default();
        canvas.filled_circle(Vec2::ZERO, 4.0, colors::RAY);
        canvas.line(Vec2::ZERO, Vec2::new(0.0, 5.0), colors::RAY);
        assert_eq!(canvas.triangle_count(), CIRCLE_SEGMENTS as usize + 2);
    }
}
