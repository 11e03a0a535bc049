//! Per-point mapping from live signals to a draw transform.
//!
//! Pure: the same point, snapshot and frame counter always give the same
//! transform, and no point depends on another.

use crate::constants::{
    AUDIO_SCALE_GAIN, BRIGHTNESS_RANGE, GAMMA_SCALE_BOOST, HUE_DOMAIN, HUE_RANGE,
    SATURATION_RANGE, TILT_DOMAIN,
};
use crate::outline::SamplePoint;
use crate::signals::SignalSnapshot;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointVisualTransform {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    /// Degrees. Grows without bound with the frame counter.
    pub rotation_offset: f32,
    pub scale_factor: f32,
}

/// Linear remap of `v` from `domain` to `range`, optionally clamped to the range.
#[inline]
pub fn map_range(v: f32, domain: [f32; 2], range: [f32; 2], clamp: bool) -> f32 {
    let span = domain[1] - domain[0];
    let out = if span == 0.0 {
        range[0]
    } else {
        (v - domain[0]) * (range[1] - range[0]) / span + range[0]
    };
    if clamp {
        let (lo, hi) = if range[0] <= range[1] {
            (range[0], range[1])
        } else {
            (range[1], range[0])
        };
        out.clamp(lo, hi)
    } else {
        out
    }
}

/// Readings already inside the hue domain pass through unchanged, so 360
/// stays 360; anything outside wraps onto `[0, 360)`.
#[inline]
fn wrap_alpha(alpha: f32) -> f32 {
    if (HUE_DOMAIN[0]..=HUE_DOMAIN[1]).contains(&alpha) {
        alpha
    } else {
        alpha.rem_euclid(HUE_DOMAIN[1])
    }
}

pub fn transform(
    point: &SamplePoint,
    signals: &SignalSnapshot,
    frame_counter: u64,
) -> PointVisualTransform {
    let s = signals.sanitized();
    let alpha = wrap_alpha(s.alpha);
    let tilt_beta = s.beta.abs();
    let tilt_gamma = s.gamma.abs();

    let hue = map_range(alpha, HUE_DOMAIN, HUE_RANGE, true);
    let saturation = map_range(tilt_beta, TILT_DOMAIN, SATURATION_RANGE, true);
    let brightness = map_range(tilt_gamma, TILT_DOMAIN, BRIGHTNESS_RANGE, true);
    let rotation_offset = (frame_counter as f64 + point.index as f64) as f32;
    let gamma_boost = (tilt_gamma.min(TILT_DOMAIN[1]) / TILT_DOMAIN[1]) * GAMMA_SCALE_BOOST;
    let scale_factor = 1.0 + s.audio_level * AUDIO_SCALE_GAIN + gamma_boost;

    PointVisualTransform {
        hue,
        saturation,
        brightness,
        rotation_offset,
        scale_factor,
    }
}
