use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position2D {
    pub x: f64,
    pub y: f64,
}

impl Position2D {
    pub const ORIGIN: Position2D = Position2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Position2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Position2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Position2D) -> f64 {
        (other - self).length()
    }
}

impl Add for Position2D {
    type Output = Position2D;

    fn add(self, rhs: Position2D) -> Position2D {
        Position2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position2D {
    type Output = Position2D;

    fn sub(self, rhs: Position2D) -> Position2D {
        Position2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Position2D {
    type Output = Position2D;

    fn mul(self, rhs: f64) -> Position2D {
        Position2D::new(self.x * rhs, self.y * rhs)
    }
}

impl From<[f64; 2]> for Position2D {
    fn from(v: [f64; 2]) -> Self {
        Position2D::new(v[0], v[1])
    }
}

/// Joint angles in radians. `beta` is relative to the first link's direction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    pub alpha: f64,
    pub beta: f64,
}

impl Configuration {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    pub fn from_degrees(alpha_deg: f64, beta_deg: f64) -> Self {
        Self {
            alpha: alpha_deg.to_radians(),
            beta: beta_deg.to_radians(),
        }
    }

    pub fn to_degrees(self) -> (f64, f64) {
        (self.alpha.to_degrees(), self.beta.to_degrees())
    }
}

/// Joint positions produced by forward kinematics. The base is always the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmPose {
    pub elbow: Position2D,
    pub effector: Position2D,
}
