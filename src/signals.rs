use crate::audio::Microphone;
use field_core::{LatestOrientation, Orientation, Sensitivity, SignalSource};
use std::cell::RefCell;
use std::rc::Rc;

/// Signal source for the frame loop: microphone RMS scaled by the user's
/// sensitivity, plus the last orientation event.
pub struct LiveSignals {
    pub mic: Rc<Microphone>,
    pub sensitivity: Rc<RefCell<Sensitivity>>,
    pub orientation: Rc<LatestOrientation>,
}

impl SignalSource for LiveSignals {
    fn read_audio_level(&self) -> f32 {
        self.sensitivity.borrow().apply(self.mic.level())
    }

    fn read_orientation(&self) -> Orientation {
        self.orientation.get()
    }
}
