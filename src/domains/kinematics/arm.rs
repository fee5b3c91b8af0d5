use super::types::{ArmPose, Configuration, Position2D};
use crate::common::{DomainError, DomainResult};
use crate::domains::collision::geometry::circle_intersections;
use serde::{Deserialize, Serialize};

/// Link lengths of the two-link planar arm anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmModel {
    first_link_length: f64,
    second_link_length: f64,
}

impl Default for ArmModel {
    fn default() -> Self {
        Self {
            first_link_length: 0.3,
            second_link_length: 0.3,
        }
    }
}

impl ArmModel {
    pub fn new(first_link_length: f64, second_link_length: f64) -> DomainResult<Self> {
        for (name, length) in [("first", first_link_length), ("second", second_link_length)] {
            if !length.is_finite() || length <= 0.0 {
                return Err(DomainError::InvalidArmGeometry {
                    reason: format!("{} link length must be positive, got {}", name, length),
                });
            }
        }
        Ok(Self {
            first_link_length,
            second_link_length,
        })
    }

    pub fn first_link_length(&self) -> f64 {
        self.first_link_length
    }

    pub fn second_link_length(&self) -> f64 {
        self.second_link_length
    }

    pub fn max_reach(&self) -> f64 {
        self.first_link_length + self.second_link_length
    }

    pub fn min_reach(&self) -> f64 {
        (self.first_link_length - self.second_link_length).abs()
    }

    pub fn forward(&self, configuration: Configuration) -> ArmPose {
        let Configuration { alpha, beta } = configuration;
        let elbow = Position2D::new(alpha.cos(), alpha.sin()) * self.first_link_length;
        let effector = elbow
            + Position2D::new((alpha + beta).cos(), (alpha + beta).sin()) * self.second_link_length;
        ArmPose { elbow, effector }
    }

    /// Every configuration whose end effector lands on `target`.
    ///
    /// The elbow must lie on the circle of radius L1 around the origin and on the
    /// circle of radius L2 around the target, so each circle intersection yields one
    /// solution. An empty result means the target is out of reach.
    pub fn inverse_solve(&self, target: Position2D) -> Vec<Configuration> {
        circle_intersections(
            Position2D::ORIGIN,
            self.first_link_length,
            target,
            self.second_link_length,
        )
        .into_iter()
        .map(|elbow| {
            let alpha = elbow.y.atan2(elbow.x);
            let beta = (target.y - elbow.y).atan2(target.x - elbow.x) - alpha;
            Configuration::new(alpha, beta)
        })
        .collect()
    }
}
