//! Angular layout of the wheel.
//!
//! Angles are in degrees, 0° points to screen-right and angles grow clockwise
//! (SVG coordinates, y axis pointing down). The pointer is fixed at the top of
//! the wheel, which is 270° in this convention. Segment `i` occupies
//! `[i * arc, (i + 1) * arc)` in the wheel's own frame, and the wheel is turned
//! clockwise by its accumulated rotation.

pub const FULL_TURN: f64 = 360.0;
pub const POINTER_ANGLE: f64 = 270.0;

/// Maps any angle into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let normalized = degrees.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if normalized >= FULL_TURN {
        0.0
    } else {
        normalized
    }
}

/// Width of one segment. `segments` must be non-zero.
pub fn segment_angle(segments: usize) -> f64 {
    FULL_TURN / segments as f64
}

/// Start and end angle of a segment in the wheel's own frame.
pub fn segment_arc(index: usize, segments: usize) -> (f64, f64) {
    let arc = segment_angle(segments);
    let start = index as f64 * arc;
    (start, start + arc)
}

pub fn segment_center_angle(index: usize, segments: usize) -> f64 {
    let arc = segment_angle(segments);
    index as f64 * arc + arc / 2.0
}

/// Which segment sits under the pointer after the wheel turned by `rotation`.
///
/// A pointer exactly on the boundary between two segments picks the lower
/// index. Returns `None` for an empty wheel.
pub fn angle_to_index(rotation: f64, segments: usize) -> Option<usize> {
    if segments == 0 {
        return None;
    }

    let arc = segment_angle(segments);
    let local = normalize_degrees(POINTER_ANGLE - normalize_degrees(rotation));
    let mut index = (local / arc).floor() as usize;
    if index > 0 && local == index as f64 * arc {
        index -= 1;
    }

    Some(index.min(segments - 1))
}

/// Point on a circle of `radius` around `(cx, cy)` at `degrees`.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}
