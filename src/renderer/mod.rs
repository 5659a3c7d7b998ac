//! Presentation layer
//!
//! The simulation never touches pixels. A frame is described through the
//! [`Canvas`] trait; [`VertexCanvas`] turns those calls into triangles and
//! [`RenderState`] pushes them through WebGPU.

pub mod canvas;
pub mod frame;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use canvas::VertexCanvas;
pub use frame::{draw_first_person, draw_frame, draw_overhead, visible_height};
pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::sim::Rect;

/// Image strips drawn in the first-person view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Wall,
    Floor,
}

/// Drawing surface for one frame, in screen coordinates
pub trait Canvas {
    /// Clear everything to a single color
    fn fill(&mut self, color: [f32; 4]);
    fn filled_rect(&mut self, rect: &Rect, color: [f32; 4]);
    fn filled_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    fn line(&mut self, from: Vec2, to: Vec2, color: [f32; 4]);
    /// Draw `image` scaled to exactly fill `rect`
    fn image(&mut self, image: ImageKind, rect: &Rect);
}
