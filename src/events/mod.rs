pub mod buttons;

pub use buttons::*;
