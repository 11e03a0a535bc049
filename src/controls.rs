// Button controls exposed by the page, keyed by element id.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    DecreaseSensitivity,
    IncreaseSensitivity,
    ResetSensitivity,
    DecreaseDensity,
    IncreaseDensity,
    ResetDensity,
}

impl Control {
    pub const ALL: [Control; 6] = [
        Control::DecreaseSensitivity,
        Control::IncreaseSensitivity,
        Control::ResetSensitivity,
        Control::DecreaseDensity,
        Control::IncreaseDensity,
        Control::ResetDensity,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Control::DecreaseSensitivity => "decrease-sensitivity",
            Control::IncreaseSensitivity => "increase-sensitivity",
            Control::ResetSensitivity => "reset-sensitivity",
            Control::DecreaseDensity => "decrease-density",
            Control::IncreaseDensity => "increase-density",
            Control::ResetDensity => "reset-density",
        }
    }

    #[cfg(test)]
    pub fn from_element_id(id: &str) -> Option<Control> {
        Control::ALL.into_iter().find(|c| c.element_id() == id)
    }

    /// Applies the control to the user settings it owns.
    pub fn apply(
        self,
        density: &mut field_core::DensitySetting,
        sensitivity: &mut field_core::Sensitivity,
    ) -> f32 {
        match self {
            Control::DecreaseSensitivity => sensitivity.decrease(),
            Control::IncreaseSensitivity => sensitivity.increase(),
            Control::ResetSensitivity => sensitivity.reset(),
            Control::DecreaseDensity => density.decrease(),
            Control::IncreaseDensity => density.increase(),
            Control::ResetDensity => density.reset(),
        }
    }
}
