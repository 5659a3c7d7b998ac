//! Simulation state
//!
//! Everything the frame loop mutates lives in [`SimState`]; there are no globals.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::caster::{FanConfig, HitRecord, cast_fan};
use super::scene::Scene;
use crate::consts::*;
use crate::heading_to_vec;

/// The controllable ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: Vec2,
    /// Heading in degrees; not normalized, may grow past +/-360
    pub heading_deg: f32,
    /// Drawing radius only; collision treats the entity as a point
    pub radius: f32,
    pub color: [f32; 4],
}

impl Entity {
    /// Entity with default radius and color
    pub fn at(pos: Vec2, heading_deg: f32) -> Self {
        Self {
            pos,
            heading_deg,
            radius: BALL_RADIUS,
            color: BALL_COLOR,
        }
    }

    /// Unit vector along the current heading
    #[inline]
    pub fn forward(&self) -> Vec2 {
        heading_to_vec(self.heading_deg)
    }

    pub fn turn(&mut self, delta_deg: f32) {
        self.heading_deg += delta_deg;
    }

    /// Move along the heading (negative distance walks backwards)
    pub fn advance(&mut self, distance: f32) {
        self.pos += self.forward() * distance;
    }
}

/// Complete state owned by the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub scene: Scene,
    pub entity: Entity,
    pub fan: FanConfig,
    /// Rays from the most recent tick, replaced wholesale every tick
    pub hits: Vec<HitRecord>,
    pub tick_count: u64,
}

impl SimState {
    /// New state with the initial fan already cast
    pub fn new(scene: Scene, entity: Entity, fan: FanConfig) -> Self {
        let hits = cast_fan(&scene, &entity, &fan);
        Self {
            scene,
            entity,
            fan,
            hits,
            tick_count: 0,
        }
    }

    /// Number of rays that stopped on a wall
    pub fn wall_hits(&self) -> usize {
        self.hits.iter().filter(|h| h.is_hit()).count()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;

    #[test]
    fn test_entity_defaults() {
        let e = Entity::at(Vec2::new(400.0, 400.0), 0.0);
        assert_eq!(e.radius, BALL_RADIUS);
        assert_eq!(e.color, BALL_COLOR);
        assert_eq!(e.forward(), Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_entity_advance_and_turn() {
        let mut e = Entity::at(Vec2::ZERO, 0.0);
        e.advance(3.0);
        assert_eq!(e.pos, Vec2::new(3.0, 0.0));
        e.advance(-1.0);
        assert_eq!(e.pos, Vec2::new(2.0, 0.0));

        e.turn(-370.0);
        assert_eq!(e.heading_deg, -370.0);
    }

    #[test]
    fn test_new_state_casts_initial_fan() {
        let scene = Scene::new(vec![Rect::new(100.0, 0.0, 20.0, 200.0)]).unwrap();
        let fan = FanConfig {
            spread_deg: 10.0,
            ray_count: 6,
            ..FanConfig::default()
        };
        let state = SimState::new(scene, Entity::at(Vec2::new(0.0, 100.0), 0.0), fan);
        assert_eq!(state.hit_count(), 6);
        assert_eq!(state.wall_hits(), 6);
        assert_eq!(state.tick_count, 0);
    }
}
