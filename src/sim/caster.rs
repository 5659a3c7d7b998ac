//! Ray fan casting
//!
//! Each frame a fan of rays is marched outward from the entity in fixed-size
//! probe steps until a probe lands inside a wall or the probe budget runs out.
//! The fan covers the half-open interval `[heading - spread, heading + spread)`:
//! slot `i` sits at `heading - spread + i * (2 * spread / ray_count)`, so the
//! last ray stops one slot short of `heading + spread`.
//!
//! Neighbouring rays must stay at least [`MIN_ANGLE_STEP_DEG`] apart, and very
//! large headings are folded by whole turns first, so f32 rounding can never
//! merge two slots into the same angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::find_wall_at;
use super::scene::{Scene, WallId};
use super::state::Entity;
use crate::consts::*;
use crate::error::ConfigError;
use crate::{fold_heading, heading_to_vec};

/// Smallest allowed angle between neighbouring rays (degrees)
pub const MIN_ANGLE_STEP_DEG: f32 = 1e-3;

/// Shape and cost bounds of the ray fan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanConfig {
    /// Half-angle of the fan (degrees)
    pub spread_deg: f32,
    /// Number of rays sampled across the fan
    pub ray_count: usize,
    /// Distance advanced per probe
    pub step_length: f32,
    /// Maximum probes per ray (bounds ray length at `step_length * max_probes`)
    pub max_probes: u32,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            spread_deg: RAY_SPREAD_DEG,
            ray_count: RAY_COUNT,
            step_length: RAY_STEP,
            max_probes: RAY_MAX_PROBES,
        }
    }
}

impl FanConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.spread_deg.is_finite() || self.spread_deg < 0.0 {
            return Err(ConfigError::invalid("fan.spread_deg", "must be finite and >= 0"));
        }
        if self.ray_count > 1 && self.angle_step() < MIN_ANGLE_STEP_DEG {
            return Err(ConfigError::invalid(
                "fan.spread_deg",
                "too narrow: neighbouring rays must be at least 0.001 degrees apart",
            ));
        }
        if !self.step_length.is_finite() || self.step_length <= 0.0 {
            return Err(ConfigError::invalid("fan.step_length", "must be finite and > 0"));
        }
        Ok(())
    }

    /// Angular distance between neighbouring rays (degrees)
    #[inline]
    pub fn angle_step(&self) -> f32 {
        if self.ray_count == 0 {
            0.0
        } else {
            (self.spread_deg * 2.0) / self.ray_count as f32
        }
    }

    /// Furthest distance a ray can reach
    #[inline]
    pub fn max_ray_length(&self) -> f32 {
        self.step_length * self.max_probes as f32
    }
}

/// Outcome of casting one ray
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    /// Final probe position
    pub impact: Vec2,
    /// Absolute ray angle (degrees)
    pub ray_angle: f32,
    /// Wall the final probe landed in; `None` when the probe budget ran out
    pub wall: Option<WallId>,
}

impl HitRecord {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.wall.is_some()
    }
}

/// Absolute angle of ray slot `index`
#[inline]
pub fn fan_angle(heading_deg: f32, config: &FanConfig, index: usize) -> f32 {
    // Offset first: it is exact enough on its own and adding it last keeps slots ordered
    let offset = index as f32 * config.angle_step() - config.spread_deg;
    fold_heading(heading_deg) + offset
}

/// March a single ray from `origin` along `angle_deg`.
///
/// An origin already inside a wall yields a zero-length hit.
pub fn cast_ray(scene: &Scene, origin: Vec2, angle_deg: f32, config: &FanConfig) -> HitRecord {
    let dir = heading_to_vec(angle_deg);
    let mut probe = origin;
    let mut wall = find_wall_at(scene, probe);
    let mut probes = 0u32;

    while wall.is_none() && probes < config.max_probes {
        probes += 1;
        // Scale from the origin rather than accumulating, so long rays don't drift
        probe = origin + dir * (config.step_length * probes as f32);
        wall = find_wall_at(scene, probe);
    }

    HitRecord {
        impact: probe,
        ray_angle: angle_deg,
        wall,
    }
}

/// Cast the whole fan, one record per slot in increasing-angle order
pub fn cast_fan(scene: &Scene, entity: &Entity, config: &FanConfig) -> Vec<HitRecord> {
    let mut hits = Vec::with_capacity(config.ray_count);
    cast_fan_into(scene, entity, config, &mut hits);
    hits
}

/// Like [`cast_fan`], but replaces the contents of an existing buffer.
///
/// The previous records are always discarded first; nothing carries over
/// between frames.
pub fn cast_fan_into(scene: &Scene, entity: &Entity, config: &FanConfig, hits: &mut Vec<HitRecord>) {
    hits.clear();
    hits.extend(
        (0..config.ray_count)
            .map(|i| cast_ray(scene, entity.pos, fan_angle(entity.heading_deg, config, i), config)),
    );
}
