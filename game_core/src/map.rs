use glam::Vec2;

use crate::components::{Obstacle, ObstacleId, ObstacleKind};
use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = center.clamp(self.min, self.max);
        (center - closest).length_squared() <= radius * radius
    }
}

/// Playing field geometry, centered on the origin.
///
/// Walls run along the top and bottom edges. Goal sensors sit behind each
/// goal line and span the full height including the walls, so the puck
/// cannot slip past them.
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub wall_thickness: f32,
    pub goal_depth: f32,
}

impl Arena {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.arena_width,
            height: config.arena_height,
            wall_thickness: config.wall_thickness,
            goal_depth: config.goal_depth,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    /// Top and bottom boundaries; both report [`ObstacleId::None`]
    pub fn walls(&self) -> [Obstacle; 2] {
        let hw = self.half_width();
        let hh = self.half_height();
        let t = self.wall_thickness;
        [
            Obstacle::new(
                ObstacleId::None,
                ObstacleKind::Boundary {
                    normal: Vec2::NEG_Y,
                },
                Aabb::new(Vec2::new(-hw, hh), Vec2::new(hw, hh + t)),
            ),
            Obstacle::new(
                ObstacleId::None,
                ObstacleKind::Boundary { normal: Vec2::Y },
                Aabb::new(Vec2::new(-hw, -hh - t), Vec2::new(hw, -hh)),
            ),
        ]
    }

    /// Goal sensors. Each carries the id of the player who scores when the
    /// puck enters it: the left goal belongs to Player1, so entering it
    /// scores for Player2.
    pub fn goals(&self) -> [Obstacle; 2] {
        let hw = self.half_width();
        let reach = self.half_height() + self.wall_thickness;
        let d = self.goal_depth;
        [
            Obstacle::new(
                ObstacleId::Player2,
                ObstacleKind::Goal,
                Aabb::new(Vec2::new(-hw - d, -reach), Vec2::new(-hw, reach)),
            ),
            Obstacle::new(
                ObstacleId::Player1,
                ObstacleKind::Goal,
                Aabb::new(Vec2::new(hw, -reach), Vec2::new(hw + d, reach)),
            ),
        ]
    }
}
