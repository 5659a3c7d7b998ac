//! Distance to screen-column projection
//!
//! Turns each hit record into a column height for the first-person view.
//! Heights are NOT clamped: far or missed rays can produce zero or negative
//! heights, and the caller decides how to draw those (see `renderer::frame`).

use serde::{Deserialize, Serialize};

use super::caster::HitRecord;
use super::rect::Rect;
use super::state::Entity;
use crate::{distance, fold_heading};

/// Extra size added to wall strips so neighbouring columns overlap
pub const WALL_STRIP_BLEED: f32 = 5.0;

/// Projected column for one ray
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderColumn {
    /// Column height; may be zero or negative
    pub height: f32,
    /// Fisheye-corrected distance
    pub distance: f32,
    /// Whether the ray ended on a wall
    pub is_wall: bool,
}

/// Distance along the view direction rather than along the ray.
///
/// Multiplying by the cosine of the ray's offset from the heading keeps a
/// flat wall facing the viewer flat on screen.
#[inline]
pub fn corrected_distance(hit: &HitRecord, entity: &Entity) -> f32 {
    let raw = distance(entity.pos, hit.impact);
    raw * (hit.ray_angle - fold_heading(entity.heading_deg)).to_radians().cos()
}

/// Project one hit record
pub fn project(
    hit: &HitRecord,
    entity: &Entity,
    max_render_distance: f32,
    screen_height: f32,
) -> RenderColumn {
    let distance = corrected_distance(hit, entity);
    RenderColumn {
        height: (1.0 - distance / max_render_distance) * screen_height,
        distance,
        is_wall: hit.is_hit(),
    }
}

/// Project a whole fan, preserving slot order
pub fn project_fan(
    hits: &[HitRecord],
    entity: &Entity,
    max_render_distance: f32,
    screen_height: f32,
) -> Vec<RenderColumn> {
    hits.iter()
        .map(|hit| project(hit, entity, max_render_distance, screen_height))
        .collect()
}

/// Placement of the first-person viewport on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    /// Left edge of the viewport
    pub left: f32,
    /// Viewport width, shared equally by all columns
    pub width: f32,
    pub screen_height: f32,
    pub ray_count: usize,
}

impl ColumnLayout {
    /// Viewport occupying the right half of the screen
    pub fn right_half(screen_width: f32, screen_height: f32, ray_count: usize) -> Self {
        Self {
            left: screen_width / 2.0,
            width: screen_width / 2.0,
            screen_height,
            ray_count,
        }
    }

    #[inline]
    pub fn column_width(&self) -> f32 {
        if self.ray_count == 0 {
            0.0
        } else {
            self.width / self.ray_count as f32
        }
    }

    /// Left x and width of column `index`
    #[inline]
    pub fn slot(&self, index: usize) -> (f32, f32) {
        let w = self.column_width();
        (self.left + w * index as f32, w)
    }

    /// Wall strip, vertically centered, slightly oversized to hide seams
    pub fn wall_rect(&self, index: usize, height: f32) -> Rect {
        let (x, w) = self.slot(index);
        Rect::new(
            x,
            (self.screen_height - height) / 2.0,
            w + WALL_STRIP_BLEED,
            height + WALL_STRIP_BLEED,
        )
    }

    /// Floor strip below the wall, never starting above the horizon
    pub fn floor_rect(&self, index: usize, height: f32) -> Rect {
        let (x, w) = self.slot(index);
        let y = ((self.screen_height - height) / 2.0 + height).max(self.screen_height / 2.0);
        Rect::new(x, y, w, height)
    }
}
