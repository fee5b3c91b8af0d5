use crate::domains::kinematics::Position2D;

/// Distances below this are treated as zero.
pub const EPSILON: f64 = 1e-9;

/// Circle intersection heights below this collapse to a single tangent point.
pub const TANGENT_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    None,
    Point(Position2D),
    /// The segments are collinear and share the sub-segment `start..end`.
    Collinear { start: Position2D, end: Position2D },
}

impl SegmentIntersection {
    pub fn is_some(&self) -> bool {
        !matches!(self, SegmentIntersection::None)
    }
}

/// Intersection of segments `p1..p2` and `q1..q2`, endpoints included.
pub fn intersect_segments(
    p1: Position2D,
    p2: Position2D,
    q1: Position2D,
    q2: Position2D,
) -> SegmentIntersection {
    let r = p2 - p1;
    let s = q2 - q1;
    let r_len_sq = r.dot(r);
    let s_len_sq = s.dot(s);

    // Zero-length segments degrade to point-on-segment tests.
    if r_len_sq < EPSILON * EPSILON {
        return if point_on_segment(p1, q1, q2) {
            SegmentIntersection::Point(p1)
        } else {
            SegmentIntersection::None
        };
    }
    if s_len_sq < EPSILON * EPSILON {
        return if point_on_segment(q1, p1, p2) {
            SegmentIntersection::Point(q1)
        } else {
            SegmentIntersection::None
        };
    }

    let qp = q1 - p1;
    let denominator = r.cross(s);
    let scale = r_len_sq.sqrt() * s_len_sq.sqrt();

    if denominator.abs() <= EPSILON * scale {
        if qp.cross(r).abs() > EPSILON * r_len_sq.sqrt() {
            // Parallel, on different lines.
            return SegmentIntersection::None;
        }
        let t0 = qp.dot(r) / r_len_sq;
        let t1 = t0 + s.dot(r) / r_len_sq;
        let lo = t0.min(t1).max(0.0);
        let hi = t0.max(t1).min(1.0);
        if lo > hi + EPSILON {
            return SegmentIntersection::None;
        }
        let start = p1 + r * lo;
        let end = p1 + r * hi;
        return if (hi - lo).abs() <= EPSILON {
            SegmentIntersection::Point(start)
        } else {
            SegmentIntersection::Collinear { start, end }
        };
    }

    let t = qp.cross(s) / denominator;
    let u = qp.cross(r) / denominator;
    if (-EPSILON..=1.0 + EPSILON).contains(&t) && (-EPSILON..=1.0 + EPSILON).contains(&u) {
        SegmentIntersection::Point(p1 + r * t)
    } else {
        SegmentIntersection::None
    }
}

fn point_on_segment(point: Position2D, a: Position2D, b: Position2D) -> bool {
    let ab = b - a;
    let ap = point - a;
    let len_sq = ab.dot(ab);
    if len_sq < EPSILON * EPSILON {
        return ap.length() <= EPSILON;
    }
    if ab.cross(ap).abs() > EPSILON * len_sq.sqrt() {
        return false;
    }
    let t = ap.dot(ab) / len_sq;
    (-EPSILON..=1.0 + EPSILON).contains(&t)
}

/// Intersection points of two circles: zero, one (tangent) or two.
///
/// Coincident centers return no points, even when the circles coincide.
pub fn circle_intersections(
    c1: Position2D,
    r1: f64,
    c2: Position2D,
    r2: f64,
) -> Vec<Position2D> {
    let delta = c2 - c1;
    let d = delta.length();
    if d < EPSILON || d > r1 + r2 + EPSILON || d < (r1 - r2).abs() - EPSILON {
        return Vec::new();
    }

    let a = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
    let h_sq = r1 * r1 - a * a;
    let h = if h_sq > 0.0 { h_sq.sqrt() } else { 0.0 };

    let direction = delta * (1.0 / d);
    let base = c1 + direction * a;
    if h < TANGENT_TOLERANCE {
        return vec![base];
    }

    let normal = Position2D::new(-direction.y, direction.x);
    vec![base + normal * h, base - normal * h]
}
