use crate::domains::kinematics::Position2D;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Smallest and largest side length an obstacle may be resized to.
pub const MIN_OBSTACLE_SIZE: f64 = 0.01;
pub const MAX_OBSTACLE_SIZE: f64 = 10.0;

/// Axis-aligned box in world space. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Position2D,
    pub max: Position2D,
}

impl Aabb {
    /// Builds a box from two arbitrary corners.
    pub fn new(a: Position2D, b: Position2D) -> Self {
        Self {
            min: Position2D::new(a.x.min(b.x), a.y.min(b.y)),
            max: Position2D::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    pub fn contains(&self, point: Position2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Edges in counter-clockwise order starting at the min corner.
    pub fn edges(&self) -> [(Position2D, Position2D); 4] {
        let bottom_right = Position2D::new(self.max.x, self.min.y);
        let top_left = Position2D::new(self.min.x, self.max.y);
        [
            (self.min, bottom_right),
            (bottom_right, self.max),
            (self.max, top_left),
            (top_left, self.min),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: String,
    pub bounds: Aabb,
}

impl Obstacle {
    pub fn new(bounds: Aabb) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            bounds,
        }
    }

    pub fn with_id(id: impl Into<String>, bounds: Aabb) -> Self {
        Self {
            id: id.into(),
            bounds,
        }
    }

    pub fn translate(&mut self, delta: Position2D) {
        self.bounds.min = self.bounds.min + delta;
        self.bounds.max = self.bounds.max + delta;
    }

    /// Resize keeping the min corner in place.
    pub fn resize(&mut self, size: Position2D) {
        let clamped = Position2D::new(
            size.x.clamp(MIN_OBSTACLE_SIZE, MAX_OBSTACLE_SIZE),
            size.y.clamp(MIN_OBSTACLE_SIZE, MAX_OBSTACLE_SIZE),
        );
        self.bounds.max = self.bounds.min + clamped;
    }
}
