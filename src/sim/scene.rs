//! Wall layout
//!
//! The scene is an arena of wall rectangles fixed for the lifetime of a run.
//! Walls are referred to by [`WallId`], a stable index, so hit records never
//! borrow from the scene.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::error::SceneError;

/// Index of a wall within its [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WallId(pub usize);

impl WallId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, immutable collection of walls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    walls: Vec<Rect>,
}

impl Scene {
    /// Build a scene, rejecting non-finite or degenerate rectangles.
    ///
    /// Insertion order is kept; collision queries resolve overlaps in favour
    /// of the earliest wall.
    pub fn new(walls: Vec<Rect>) -> Result<Self, SceneError> {
        for (index, wall) in walls.iter().enumerate() {
            if !wall.is_finite() {
                return Err(SceneError::NonFiniteWall { index });
            }
            if wall.size.x <= 0.0 || wall.size.y <= 0.0 {
                return Err(SceneError::DegenerateWall {
                    index,
                    width: wall.size.x,
                    height: wall.size.y,
                });
            }
        }
        Ok(Self { walls })
    }

    /// A scene without walls
    pub fn empty() -> Self {
        Self { walls: Vec::new() }
    }

    /// The demo level: a bordered box covering the left half of the screen
    /// (the overhead view) plus three interior walls.
    pub fn demo_level(screen_width: f32, screen_height: f32, thickness: f32) -> Result<Self, SceneError> {
        let half = screen_width / 2.0;
        Self::new(vec![
            // Border
            Rect::new(0.0, 0.0, half, thickness),
            Rect::new(0.0, 0.0, thickness, screen_height),
            Rect::new(0.0, screen_height - thickness, half, thickness),
            Rect::new(half - thickness, 0.0, thickness, screen_height),
            // Interior
            Rect::new(80.0, 120.0, 200.0, thickness),
            Rect::new(250.0, 420.0, thickness, 320.0),
            Rect::new(620.0, 150.0, thickness, 280.0),
        ])
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn wall(&self, id: WallId) -> Option<&Rect> {
        self.walls.get(id.index())
    }

    /// Walls paired with their ids, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (WallId, &Rect)> {
        self.walls.iter().enumerate().map(|(i, r)| (WallId(i), r))
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}
