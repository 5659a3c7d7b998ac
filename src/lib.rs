//! Raycast Demo - a top-down scene with a pseudo-3D projection
//!
//! Core modules:
//! - `sim`: Deterministic simulation (walls, ball, ray fan, projection)
//! - `renderer`: Canvas abstraction and WebGPU presentation
//! - `platform`: Keyboard state to per-frame input
//! - `config`: Startup configuration (validated once, never per frame)
//! - `error`: Construction-time error types

pub mod config;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{DemoConfig, MotionConfig};
pub use error::{ConfigError, SceneError};

use glam::Vec2;

/// Demo configuration constants
pub mod consts {
    /// Fixed simulation timestep; speeds below are per tick
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Window dimensions. The left half holds the overhead view,
    /// the right half the first-person projection.
    pub const SCREEN_WIDTH: f32 = 1600.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;

    /// Thickness of the border walls
    pub const WALL_THICKNESS: f32 = 20.0;

    /// Ray fan defaults
    pub const RAY_SPREAD_DEG: f32 = 30.0;
    pub const RAY_COUNT: usize = 80;
    /// Distance advanced per probe
    pub const RAY_STEP: f32 = 2.0;
    /// Probe budget per ray
    pub const RAY_MAX_PROBES: u32 = 200;

    /// Distance at which a column shrinks to zero height
    pub const MAX_RENDER_DISTANCE: f32 = SCREEN_WIDTH / 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    /// World units moved per tick while forward/backward is held
    pub const MOVE_SPEED: f32 = 1.0;
    /// Degrees turned per tick while a turn key is held
    pub const TURN_SPEED_DEG: f32 = 1.0;
}

/// Unit direction for a heading in degrees.
///
/// Screen coordinates: +x right, +y down, so positive angles turn clockwise.
#[inline]
pub fn heading_to_vec(heading_deg: f32) -> Vec2 {
    let rad = heading_deg.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Beyond this magnitude a heading is folded by whole turns before the fan
/// is built; below it an f32 still resolves steps of `MIN_ANGLE_STEP_DEG`.
pub const HEADING_FOLD_LIMIT_DEG: f32 = 360.0 * 16.0;

/// Heading used for ray angles: unchanged for ordinary values, reduced modulo
/// 360 once its magnitude reaches [`HEADING_FOLD_LIMIT_DEG`]. Points the same way.
#[inline]
pub fn fold_heading(heading_deg: f32) -> f32 {
    if heading_deg.abs() < HEADING_FOLD_LIMIT_DEG {
        heading_deg
    } else {
        heading_deg % 360.0
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_to_vec_axes() {
        let east = heading_to_vec(0.0);
        assert_eq!(east, Vec2::new(1.0, 0.0));

        let south = heading_to_vec(90.0);
        assert!(south.x.abs() < 1e-6);
        assert!((south.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_heading_is_unbounded() {
        let a = heading_to_vec(30.0);
        let b = heading_to_vec(390.0);
        let c = heading_to_vec(-330.0);
        assert!((a - b).length() < 1e-5);
        assert!((a - c).length() < 1e-5);
    }

    #[test]
    fn test_fold_heading() {
        assert_eq!(fold_heading(725.0), 725.0);
        assert_eq!(fold_heading(-1000.0), -1000.0);
        assert_eq!(fold_heading(360.0 * 20.0 + 45.0), 45.0);
        assert_eq!(fold_heading(-(360.0 * 20.0 + 45.0)), -45.0);
        assert!(fold_heading(1.6e7).abs() < 360.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::ONE, Vec2::ONE), 0.0);
    }
}
