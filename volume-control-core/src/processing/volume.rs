//! Volume scalar helpers.
//!
//! Device volume is a linear scalar in [0.0, 1.0]. Values read from or
//! written to a device always pass through [`bound_volume`].

/// Lowest valid volume scalar.
pub const MIN_VOLUME: f32 = 0.0;

/// Highest valid volume scalar.
pub const MAX_VOLUME: f32 = 1.0;

/// Clamp a volume into [0.0, 1.0]. NaN maps to 0.0.
pub fn bound_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        return MIN_VOLUME;
    }
    volume.clamp(MIN_VOLUME, MAX_VOLUME)
}

/// Direction of a single volume step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeStep {
    Up,
    Down,
}

/// Apply one step of size `step` to `current`, clamped.
pub fn step_volume(current: f32, step: f32, direction: VolumeStep) -> f32 {
    match direction {
        VolumeStep::Up => bound_volume(current + step),
        VolumeStep::Down => bound_volume(current - step),
    }
}
