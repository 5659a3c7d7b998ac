//! Frame composition
//!
//! Left half: overhead view of walls, ball and rays.
//! Right half: one wall strip and one floor strip per ray.
//!
//! Projected heights arrive unclamped; this is where they get clamped. A
//! strip with no positive height is skipped, and nothing is drawn taller
//! than the screen.

use super::vertex::colors;
use super::{Canvas, ImageKind};
use crate::config::DemoConfig;
use crate::sim::{ColumnLayout, SimState, project};

/// Drawable height for a projected column, if any
#[inline]
pub fn visible_height(height: f32, screen_height: f32) -> Option<f32> {
    if height.is_finite() && height > 0.0 {
        Some(height.min(screen_height))
    } else {
        None
    }
}

/// Draw the full frame
pub fn draw_frame<C: Canvas>(state: &SimState, config: &DemoConfig, canvas: &mut C) {
    canvas.fill(colors::BACKGROUND);
    draw_overhead(state, canvas);
    draw_first_person(state, config, canvas);
}

/// Walls, then the ball, then the rays on top
pub fn draw_overhead<C: Canvas>(state: &SimState, canvas: &mut C) {
    for wall in state.scene.walls() {
        canvas.filled_rect(wall, colors::WALL);
    }

    let ball = &state.entity;
    canvas.filled_circle(ball.pos, ball.radius, ball.color);

    for hit in &state.hits {
        canvas.line(ball.pos, hit.impact, colors::RAY);
    }
}

pub fn draw_first_person<C: Canvas>(state: &SimState, config: &DemoConfig, canvas: &mut C) {
    let layout = ColumnLayout::right_half(config.screen_width, config.screen_height, state.hits.len());

    for (i, hit) in state.hits.iter().enumerate() {
        let column = project(hit, &state.entity, config.max_render_distance, config.screen_height);
        let Some(height) = visible_height(column.height, config.screen_height) else {
            continue;
        };

        if column.is_wall {
            canvas.image(ImageKind::Wall, &layout.wall_rect(i, height));
        }
        canvas.image(ImageKind::Floor, &layout.floor_rect(i, height));
    }
}
