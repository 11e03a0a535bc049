//! Live sensor readings consumed once per frame.

use std::cell::Cell;

/// Device orientation angles in degrees, as reported by the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

/// One consistent read of every signal for a single frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SignalSnapshot {
    pub audio_level: f32,
    pub alpha: f32,
    pub beta: f32,
    pub gamma: f32,
}

#[inline]
fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

impl SignalSnapshot {
    /// Builds a snapshot, replacing non-finite readings with 0 and negative
    /// audio levels with 0.
    pub fn new(audio_level: f32, orientation: Orientation) -> Self {
        Self {
            audio_level: finite_or_zero(audio_level).max(0.0),
            alpha: finite_or_zero(orientation.alpha),
            beta: finite_or_zero(orientation.beta),
            gamma: finite_or_zero(orientation.gamma),
        }
    }

    pub fn orientation(&self) -> Orientation {
        Orientation {
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
        }
    }

    #[inline]
    pub fn sanitized(&self) -> Self {
        Self::new(self.audio_level, self.orientation())
    }
}

/// Non-blocking access to the most recent sensor values.
pub trait SignalSource {
    fn read_audio_level(&self) -> f32;
    fn read_orientation(&self) -> Orientation;

    fn snapshot(&self) -> SignalSnapshot {
        SignalSnapshot::new(self.read_audio_level(), self.read_orientation())
    }
}

/// Latest orientation event, written by the event handler and read by the
/// frame loop. Reads 0 on every axis until the first event arrives.
#[derive(Debug, Default)]
pub struct LatestOrientation {
    value: Cell<Orientation>,
}

impl LatestOrientation {
    /// Missing angles (`None` from the platform event) are stored as 0.
    pub fn set(&self, alpha: Option<f64>, beta: Option<f64>, gamma: Option<f64>) {
        self.value.set(Orientation {
            alpha: alpha.unwrap_or(0.0) as f32,
            beta: beta.unwrap_or(0.0) as f32,
            gamma: gamma.unwrap_or(0.0) as f32,
        });
    }

    #[inline]
    pub fn get(&self) -> Orientation {
        self.value.get()
    }
}
