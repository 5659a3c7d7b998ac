//! Per-frame simulation step
//!
//! Input moves the ball, then the ray fan is recast from scratch.

use serde::{Deserialize, Serialize};

use super::caster::cast_fan_into;
use super::state::SimState;
use crate::config::MotionConfig;

/// Key-down state sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub turn_left: bool,
    pub turn_right: bool,
    pub forward: bool,
    pub backward: bool,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState, input: &TickInput, motion: &MotionConfig) {
    // Turning happens before moving, so a frame with both moves along the new heading
    if input.turn_left {
        state.entity.turn(-motion.turn_speed_deg);
    }
    if input.turn_right {
        state.entity.turn(motion.turn_speed_deg);
    }
    if input.forward {
        state.entity.advance(motion.move_speed);
    }
    if input.backward {
        state.entity.advance(-motion.move_speed);
    }

    // No collision response: the ball may walk into walls
    let SimState {
        scene,
        entity,
        fan,
        hits,
        ..
    } = &mut *state;
    cast_fan_into(scene, entity, fan, hits);

    state.tick_count += 1;
    log::trace!(
        "tick {}: pos=({:.1}, {:.1}) heading={:.1} wall_hits={}/{}",
        state.tick_count,
        state.entity.pos.x,
        state.entity.pos.y,
        state.entity.heading_deg,
        state.wall_hits(),
        state.hit_count()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Entity, FanConfig, Rect, Scene, cast_fan};
    use glam::Vec2;

    fn demo_state() -> SimState {
        let scene = Scene::demo_level(SCREEN_WIDTH, SCREEN_HEIGHT, WALL_THICKNESS).unwrap();
        let entity = Entity::at(Vec2::new(SCREEN_WIDTH / 4.0, SCREEN_HEIGHT / 2.0), 0.0);
        SimState::new(scene, entity, FanConfig::default())
    }

    #[test]
    fn test_idle_tick_keeps_pose() {
        let mut state = demo_state();
        let before = state.entity;
        let hits_before = state.hits.clone();

        tick(&mut state, &TickInput::default(), &MotionConfig::default());
        assert_eq!(state.entity, before);
        assert_eq!(state.hits, hits_before);
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn test_turning() {
        let mut state = demo_state();
        let motion = MotionConfig::default();
        let left = TickInput {
            turn_left: true,
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut state, &left, &motion);
        }
        assert_eq!(state.entity.heading_deg, -3.0 * TURN_SPEED_DEG);

        let both = TickInput {
            turn_left: true,
            turn_right: true,
            ..Default::default()
        };
        tick(&mut state, &both, &motion);
        assert_eq!(state.entity.heading_deg, -3.0 * TURN_SPEED_DEG);
    }

    #[test]
    fn test_forward_and_backward() {
        let mut state = demo_state();
        let start = state.entity.pos;
        let motion = MotionConfig {
            move_speed: 5.0,
            ..MotionConfig::default()
        };

        tick(
            &mut state,
            &TickInput {
                forward: true,
                ..Default::default()
            },
            &motion,
        );
        assert_eq!(state.entity.pos, start + Vec2::new(5.0, 0.0));

        tick(
            &mut state,
            &TickInput {
                backward: true,
                ..Default::default()
            },
            &motion,
        );
        assert_eq!(state.entity.pos, start);
    }

    #[test]
    fn test_hits_recomputed_after_move() {
        let scene = Scene::new(vec![Rect::new(100.0, 0.0, 20.0, 200.0)]).unwrap();
        let fan = FanConfig {
            spread_deg: 5.0,
            ray_count: 10,
            ..FanConfig::default()
        };
        let mut state = SimState::new(scene, Entity::at(Vec2::new(0.0, 100.0), 0.0), fan);
        let motion = MotionConfig {
            move_speed: 40.0,
            ..MotionConfig::default()
        };
        tick(
            &mut state,
            &TickInput {
                forward: true,
                ..Default::default()
            },
            &motion,
        );

        assert_eq!(state.hits.len(), 10);
        assert_eq!(state.hits, cast_fan(&state.scene, &state.entity, &state.fan));
    }
}
