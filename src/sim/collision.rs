//! Point-in-wall collision queries
//!
//! Detection only: nothing here pushes an entity back out of a wall.
//! Every ray probe goes through [`find_wall_at`], so its cost (linear in the
//! wall count) is multiplied by rays x probes each frame.

use glam::Vec2;

use super::scene::{Scene, WallId};

/// First wall (in scene order) whose rectangle contains `point`
#[inline]
pub fn find_wall_at(scene: &Scene, point: Vec2) -> Option<WallId> {
    scene
        .iter()
        .find(|(_, wall)| wall.contains_point(point))
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;

    fn two_overlapping() -> Scene {
        Scene::new(vec![
            Rect::new(0.0, 0.0, 50.0, 50.0),
            Rect::new(25.0, 25.0, 50.0, 50.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let scene = two_overlapping();
        assert_eq!(find_wall_at(&scene, Vec2::new(30.0, 30.0)), Some(WallId(0)));
        assert_eq!(find_wall_at(&scene, Vec2::new(60.0, 60.0)), Some(WallId(1)));
    }

    #[test]
    fn test_miss() {
        let scene = two_overlapping();
        assert_eq!(find_wall_at(&scene, Vec2::new(100.0, 0.0)), None);
        assert_eq!(find_wall_at(&scene, Vec2::new(-1.0, -1.0)), None);
        assert!(find_wall_at(&Scene::empty(), Vec2::ZERO).is_none());
    }

    #[test]
    fn test_shared_edge_belongs_to_one_wall() {
        let scene = Scene::new(vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(10.0, 0.0, 10.0, 10.0),
        ])
        .unwrap();
        assert_eq!(find_wall_at(&scene, Vec2::new(10.0, 5.0)), Some(WallId(1)));
        assert_eq!(find_wall_at(&scene, Vec2::new(20.0, 5.0)), None);
    }
}
