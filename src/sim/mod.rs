//! Deterministic simulation module
//!
//! All scene logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame step only
//! - Stable iteration order (walls by insertion order, rays by slot)
//! - No rendering or platform dependencies

pub mod caster;
pub mod collision;
pub mod projector;
pub mod rect;
pub mod scene;
pub mod state;
pub mod tick;

pub use caster::{FanConfig, HitRecord, cast_fan, cast_fan_into, cast_ray, fan_angle};
pub use collision::find_wall_at;
pub use projector::{ColumnLayout, RenderColumn, corrected_distance, project, project_fan};
pub use rect::Rect;
pub use scene::{Scene, WallId};
pub use state::{Entity, SimState};
pub use tick::{TickInput, tick};
