use super::geometry::intersect_segments;
use super::obstacle::{Aabb, Obstacle};
use crate::domains::kinematics::{ArmModel, Configuration, Position2D};

/// True when the segment touches the box: either endpoint inside, or any edge crossed.
pub fn segment_intersects_box(start: Position2D, end: Position2D, aabb: &Aabb) -> bool {
    if aabb.contains(start) || aabb.contains(end) {
        return true;
    }
    aabb.edges()
        .iter()
        .any(|&(a, b)| intersect_segments(start, end, a, b).is_some())
}

/// True when either link of the arm in `configuration` touches any obstacle.
pub fn arm_collides(arm: &ArmModel, configuration: Configuration, obstacles: &[Obstacle]) -> bool {
    let pose = arm.forward(configuration);
    obstacles.iter().any(|obstacle| {
        segment_intersects_box(Position2D::ORIGIN, pose.elbow, &obstacle.bounds)
            || segment_intersects_box(pose.elbow, pose.effector, &obstacle.bounds)
    })
}
