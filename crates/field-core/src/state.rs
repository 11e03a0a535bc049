//! User-adjustable settings owned by the frontend and read once per frame.
//!
//! Both types are plain values: the frontend owns them (behind a
//! `RefCell` on the single JS thread) and passes them into the core explicitly.

use crate::constants::{
    DENSITY_DEFAULT, DENSITY_DIVISOR, DENSITY_MAX, DENSITY_MIN, DENSITY_STEP,
    SENSITIVITY_DEFAULT, SENSITIVITY_MIN, SENSITIVITY_STEP,
};

/// Point density control. `value` always stays within `[min, max]`.
#[derive(Clone, Debug, PartialEq)]
pub struct DensitySetting {
    value: f32,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

impl Default for DensitySetting {
    fn default() -> Self {
        Self::new(DENSITY_DEFAULT, DENSITY_STEP, DENSITY_MIN, DENSITY_MAX)
    }
}

impl DensitySetting {
    pub fn new(initial: f32, step: f32, min: f32, max: f32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let default = initial.clamp(min, max);
        Self {
            value: default,
            min,
            max,
            step,
            default,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Sampling rate handed to the outline sampler.
    pub fn sampling_rate(&self) -> f32 {
        self.value / DENSITY_DIVISOR
    }

    pub fn increase(&mut self) -> f32 {
        if self.value < self.max {
            self.value = (self.value + self.step).min(self.max);
        }
        self.value
    }

    pub fn decrease(&mut self) -> f32 {
        if self.value > self.min {
            self.value = (self.value - self.step).max(self.min);
        }
        self.value
    }

    pub fn reset(&mut self) -> f32 {
        self.value = self.default;
        self.value
    }

    /// Non-finite requests leave the value unchanged.
    pub fn set(&mut self, value: f32) -> f32 {
        if value.is_finite() {
            self.value = value.clamp(self.min, self.max);
        }
        self.value
    }
}

/// Microphone level multiplier. Has a floor but no ceiling.
#[derive(Clone, Debug, PartialEq)]
pub struct Sensitivity {
    value: f32,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            value: SENSITIVITY_DEFAULT,
        }
    }
}

impl Sensitivity {
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn increase(&mut self) -> f32 {
        self.value += SENSITIVITY_STEP;
        self.value
    }

    pub fn decrease(&mut self) -> f32 {
        self.value = (self.value - SENSITIVITY_STEP).max(SENSITIVITY_MIN);
        self.value
    }

    pub fn reset(&mut self) -> f32 {
        self.value = SENSITIVITY_DEFAULT;
        self.value
    }

    /// Applies the multiplier to a raw microphone level.
    #[inline]
    pub fn apply(&self, raw_level: f32) -> f32 {
        raw_level * self.value
    }
}
