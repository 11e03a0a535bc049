// Host-side tests for the button control mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod controls {
    include!("../src/controls.rs");
}

use controls::*;
use field_core::{DensitySetting, Sensitivity};

#[test]
fn element_ids_round_trip() {
    for c in Control::ALL {
        assert_eq!(Control::from_element_id(c.element_id()), Some(c));
    }
    assert_eq!(Control::from_element_id("start"), None);
}

#[test]
fn density_buttons_step_and_reset() {
    let mut d = DensitySetting::default();
    let mut s = Sensitivity::default();
    Control::IncreaseDensity.apply(&mut d, &mut s);
    Control::IncreaseDensity.apply(&mut d, &mut s);
    Control::IncreaseDensity.apply(&mut d, &mut s);
    assert!((d.sampling_rate() - 0.13).abs() < 1e-6);
    for _ in 0..50 {
        Control::DecreaseDensity.apply(&mut d, &mut s);
    }
    assert_eq!(d.value(), d.min);
    assert_eq!(Control::ResetDensity.apply(&mut d, &mut s), 1.0);
    assert_eq!(s.value(), 1.0);
}

#[test]
fn sensitivity_buttons_leave_density_alone() {
    let mut d = DensitySetting::default();
    let mut s = Sensitivity::default();
    assert_eq!(Control::IncreaseSensitivity.apply(&mut d, &mut s), 1.5);
    assert_eq!(Control::DecreaseSensitivity.apply(&mut d, &mut s), 1.0);
    assert_eq!(Control::ResetSensitivity.apply(&mut d, &mut s), 1.0);
    assert_eq!(d.value(), 1.0);
}
