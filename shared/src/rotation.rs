use crate::error::{WheelError, WheelResult};
use crate::wheel_geometry::{normalize_degrees, segment_center_angle, FULL_TURN, POINTER_ANGLE};

/// Final rotation that parks the centre of `target_index` under the pointer.
///
/// The result always adds at least one full turn on top of `current`, plus
/// `min_extra_spins` turns when that is larger, so a spin never looks like a nudge.
pub fn compute_landing_rotation(
    current: f64,
    target_index: usize,
    segments: usize,
    min_extra_spins: u32,
) -> WheelResult<f64> {
    if segments == 0 {
        return Err(WheelError::EmptyWheel);
    }
    if target_index >= segments {
        return Err(WheelError::IndexOutOfRange {
            index: target_index,
            len: segments,
        });
    }

    let center = segment_center_angle(target_index, segments);
    let target_residue = normalize_degrees(POINTER_ANGLE - center);
    let delta = normalize_degrees(target_residue - normalize_degrees(current));
    let turns = min_extra_spins.max(1);

    Ok(current + f64::from(turns) * FULL_TURN + delta)
}

/// Rotation committed the moment a spin starts, before the winner is known.
pub fn provisional_rotation(current: f64, spins: u32, jitter: f64) -> f64 {
    current + f64::from(spins) * FULL_TURN + normalize_degrees(jitter)
}
