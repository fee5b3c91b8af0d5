/// Blend two angles in degrees along the shorter arc.
///
/// Both inputs are expected in `[0, 360)`. When the arc crosses 0°/360° the result
/// may leave that range; use [`normalize_degrees`] before treating it as an index.
pub fn mix_angle_degrees(a: f64, b: f64, t: f64) -> f64 {
    let direct = (b - a).abs();
    let wrapped = a.min(b) + (360.0 - a.max(b));

    let target = if direct < wrapped {
        b
    } else if a < b {
        b - 360.0
    } else {
        b + 360.0
    };
    a + (target - a) * t
}

pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
